use crate::constants::{MESSAGE_DISPLAY_TIME_MS, MESSAGE_MAX_AUTHOR_LENGTH, MESSAGE_MAX_TEXT_LENGTH};
use crate::position::Position;

/// Chat/game message categories, ordered by display priority (lower
/// values sort first). `Say`/`Whisper`/`Yell`/`Spell` are folded to a
/// single equivalence class when comparing message priority — see
/// [`MessageType::priority_class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MessageType {
    PrivateIn = 0,
    PrivateOut,
    ChannelManagement,
    ChannelYellow,
    ChannelWhite,
    ChannelRed,
    ChannelOrange,
    Say,
    Whisper,
    Yell,
    Spell,
    NpcFrom,
    NpcTo,
    Broadcast,
    Healing,
    Experience,
    HealingOthers,
    ExperienceOthers,
    Login,
    Warning,
}

impl MessageType {
    /// `Say`/`Whisper`/`Yell`/`Spell` are a single priority class; every
    /// other type is its own class.
    pub fn priority_class(self) -> MessageType {
        use MessageType::*;
        match self {
            Whisper | Yell | Spell => Say,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message_type: MessageType,
    pub position: Position,
    pub author: String,
    pub text: String,
    pub start_tick: u32,
    pub end_tick: u32,
}

impl Message {
    pub fn new(
        message_type: MessageType,
        position: Position,
        author: impl Into<String>,
        text: impl Into<String>,
        tick: u32,
    ) -> Self {
        let mut author = author.into();
        author.truncate(MESSAGE_MAX_AUTHOR_LENGTH - 1);
        let mut text = text.into();
        text.truncate(MESSAGE_MAX_TEXT_LENGTH - 1);

        Message {
            message_type,
            position,
            author,
            text,
            start_tick: tick,
            end_tick: tick + MESSAGE_DISPLAY_TIME_MS,
        }
    }

    /// Total sort key: priority class, then position, then author —
    /// mirrors the reference ordering used to keep the message list
    /// stably sorted for display.
    fn sort_key(&self) -> (MessageType, Position, &str) {
        (self.message_type.priority_class(), self.position, &self.author)
    }

    pub fn sorts_before(&self, other: &Message) -> bool {
        self.sort_key() < other.sort_key()
    }

    /// Two messages are mergeable for display when they occupy the same
    /// position, share a folded priority class, neither is a private
    /// incoming message, and they share an author.
    pub fn can_merge_with(&self, other: &Message) -> bool {
        self.position == other.position
            && self.message_type.priority_class() == other.message_type.priority_class()
            && self.message_type != MessageType::PrivateIn
            && other.message_type != MessageType::PrivateIn
            && self.author == other.author
    }

    pub fn shares_coordinates_with(&self, other: &Message) -> bool {
        self.position == other.position
            && self.message_type.priority_class() == other.message_type.priority_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_whisper_yell_spell_fold_to_one_priority_class() {
        assert_eq!(MessageType::Whisper.priority_class(), MessageType::Say);
        assert_eq!(MessageType::Yell.priority_class(), MessageType::Say);
        assert_eq!(MessageType::Spell.priority_class(), MessageType::Say);
    }

    #[test]
    fn default_lifetime_is_3000ms() {
        let msg = Message::new(MessageType::Say, Position::default(), "a", "hi", 100);
        assert_eq!(msg.end_tick - msg.start_tick, 3000);
    }

    #[test]
    fn merge_requires_matching_author_and_not_private() {
        let a = Message::new(MessageType::Say, Position::default(), "bob", "hi", 0);
        let b = Message::new(MessageType::Yell, Position::default(), "bob", "yo", 10);
        assert!(a.can_merge_with(&b));

        let private = Message::new(MessageType::PrivateIn, Position::default(), "bob", "hi", 0);
        assert!(!private.can_merge_with(&b));
    }
}
