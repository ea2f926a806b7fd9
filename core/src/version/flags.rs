use bitflags::bitflags;

bitflags! {
    /// Per-object-type flags decoded from the `.dat` tag stream. The tag
    /// byte that maps to each bit is version-dependent; see
    /// [`super::object_file::tag_to_flag`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ObjectTypeFlags: u32 {
        const GROUND        = 1 << 0;
        const WALKABLE       = 1 << 1;
        const STACKABLE      = 1 << 2;
        const ANIMATED       = 1 << 3;
        const HANGABLE       = 1 << 4;
        const ROTATABLE      = 1 << 5;
        const LIGHT_EMITTING = 1 << 6;
        const TAKEABLE       = 1 << 7;
        const WRITABLE       = 1 << 8;
        const CONTAINER      = 1 << 9;
        const ALWAYS_ON_TOP  = 1 << 10;
        const MULTI_USE      = 1 << 11;
        const FLUID          = 1 << 12;
        const CHARGES        = 1 << 13;
    }
}

/// A (major, minor, preview) protocol version triple. Equality/ordering
/// follows the tuple so feature-matrix tables can be keyed by range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u16,
    pub minor: u16,
    pub preview: u16,
}

impl VersionTriple {
    pub fn new(major: u16, minor: u16, preview: u16) -> Self {
        VersionTriple { major, minor, preview }
    }
}

/// Derived, per-session boolean flags that change interpreter behavior
/// across protocol versions. Handlers must consult this instead of
/// comparing `VersionTriple` directly.
#[derive(Debug, Clone, Copy)]
pub struct FeatureMatrix {
    /// Numerical damage effects replace textual ones (mutually exclusive
    /// per tile, version-selected).
    pub numerical_effects: bool,
    /// Messages carry an explicit coordinate triple rather than inheriting
    /// the speaker's current position.
    pub messages_carry_position: bool,
    /// Player stats are encoded as u32 fields with stamina/base values
    /// rather than the legacy u16-only layout.
    pub extended_player_stats: bool,
    /// Sprite indices in the `.spr` catalogue are u32 rather than u16.
    pub wide_sprite_ids: bool,
}

impl FeatureMatrix {
    pub fn for_version(version: VersionTriple) -> Self {
        FeatureMatrix {
            numerical_effects: version.major >= 9,
            messages_carry_position: version.major >= 8,
            extended_player_stats: version.major >= 10,
            wide_sprite_ids: version.major >= 10 || (version.major == 9 && version.minor >= 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_versions_use_textual_effects_and_narrow_sprite_ids() {
        let matrix = FeatureMatrix::for_version(VersionTriple::new(7, 6, 0));
        assert!(!matrix.numerical_effects);
        assert!(!matrix.wide_sprite_ids);
    }

    #[test]
    fn modern_versions_use_numerical_effects_and_wide_sprite_ids() {
        let matrix = FeatureMatrix::for_version(VersionTriple::new(10, 98, 0));
        assert!(matrix.numerical_effects);
        assert!(matrix.wide_sprite_ids);
    }

    #[test]
    fn version_triples_order_lexicographically() {
        assert!(VersionTriple::new(8, 0, 0) < VersionTriple::new(8, 1, 0));
        assert!(VersionTriple::new(8, 1, 0) < VersionTriple::new(9, 0, 0));
    }
}
