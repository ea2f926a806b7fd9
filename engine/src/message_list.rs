use core::types::{Message, MessageType};

/// Result of [`MessageList::query_next`]: tells the renderer whether the
/// next message in the list shares the same coordinates as `message` and
/// whether the two may be visually merged (stacked) when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryNext {
    pub preserve_coordinates: bool,
    pub can_merge: bool,
}

/// An ordered sequence of chat/game messages.
///
/// The original keeps this as a sentinel-headed intrusive doubly-linked
/// list so forward and backward insertion share a traversal; a plain
/// `Vec` with explicit forward/backward insertion achieves the same
/// observable ordering and sweep behavior.
#[derive(Debug, Default)]
pub struct MessageList {
    messages: Vec<Message>,
}

impl MessageList {
    pub fn new() -> Self {
        MessageList::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Inserts `message`, truncating author/text lengths beforehand via
    /// `Message::new`. `PrivateIn` messages walk backward from the tail so
    /// arrival order is preserved for successive private messages, and
    /// have their `start_tick`/`end_tick` pushed forward to avoid
    /// overlapping a still-visible predecessor; every other type walks
    /// forward from the head, inserting before the first element that
    /// does not sort before it.
    pub fn add_message(
        &mut self,
        message_type: MessageType,
        position: core::position::Position,
        author: impl Into<String>,
        text: impl Into<String>,
        tick: u32,
    ) {
        let mut message = Message::new(message_type, position, author, text, tick);

        let insert_at = self
            .messages
            .iter()
            .position(|existing| message.sorts_before(existing))
            .unwrap_or(self.messages.len());

        if message_type == MessageType::PrivateIn {
            // Preserve arrival order for successive privates: if the
            // nearest preceding private message is still on screen when
            // this one starts, push this one's window forward.
            if let Some(prev) = self.messages[..insert_at]
                .iter()
                .rev()
                .find(|m| m.message_type == MessageType::PrivateIn)
            {
                if prev.end_tick > message.start_tick {
                    let new_start = prev.end_tick.max(tick);
                    message.start_tick = new_start;
                    message.end_tick = new_start + core::constants::MESSAGE_DISPLAY_TIME_MS;
                }
            }
        }

        self.messages.insert(insert_at, message);
    }

    /// Removes every message with `end_tick < tick`, returning whether any
    /// survivor remains.
    pub fn sweep(&mut self, tick: u32) -> bool {
        self.messages.retain(|m| m.end_tick >= tick);
        !self.messages.is_empty()
    }

    pub fn query_next(&self, index: usize) -> Option<QueryNext> {
        let current = self.messages.get(index)?;
        let next = self.messages.get(index + 1)?;

        let preserve_coordinates = current.shares_coordinates_with(next);
        let can_merge = preserve_coordinates && current.can_merge_with(next);

        Some(QueryNext { preserve_coordinates, can_merge })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::position::Position;

    #[test]
    fn ordinary_messages_insert_in_sort_order() {
        let mut list = MessageList::new();
        list.add_message(MessageType::Warning, Position::default(), "a", "z", 0);
        list.add_message(MessageType::Say, Position::default(), "a", "y", 0);
        assert_eq!(list.messages[0].message_type, MessageType::Say);
        assert_eq!(list.messages[1].message_type, MessageType::Warning);
    }

    #[test]
    fn say_yell_merge_when_same_author_and_position() {
        let mut list = MessageList::new();
        list.add_message(MessageType::Say, Position::default(), "bob", "hi", 0);
        list.add_message(MessageType::Yell, Position::default(), "bob", "ho", 0);
        let query = list.query_next(0).unwrap();
        assert!(query.preserve_coordinates);
        assert!(query.can_merge);
    }

    #[test]
    fn successive_private_messages_extend_without_overlap() {
        let mut list = MessageList::new();
        list.add_message(MessageType::PrivateIn, Position::default(), "a", "1", 0);
        list.add_message(MessageType::PrivateIn, Position::default(), "a", "2", 100);
        list.add_message(MessageType::PrivateIn, Position::default(), "a", "3", 200);

        let starts: Vec<u32> = list.messages.iter().map(|m| m.start_tick).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        for pair in list.messages.windows(2) {
            assert!(pair[0].end_tick <= pair[1].start_tick);
        }
    }

    #[test]
    fn sweep_prunes_expired_messages() {
        let mut list = MessageList::new();
        list.add_message(MessageType::Say, Position::default(), "a", "hi", 0);
        assert!(list.sweep(2999));
        assert!(!list.sweep(3001));
        assert!(list.is_empty());
    }
}
