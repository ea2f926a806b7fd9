#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicalEffect {
    pub id: u8,
    pub start_tick: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericalEffect {
    pub start_tick: u32,
    pub color: u8,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEffect {
    pub start_tick: u32,
    pub color: u8,
    pub text: String,
}

/// `NumericalEffect` and `TextEffect` are mutually exclusive per game
/// state instance: which one a version uses is fixed by
/// `FeatureMatrix::numerical_effects` and the two must never be mixed in
/// the same session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageEffect {
    Numerical(NumericalEffect),
    Text(TextEffect),
}
