use std::fmt;

/// Stable identity of a chat thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatThreadId(u64);

impl ChatThreadId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChatThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of one conversation as shown in the Chats tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatThread {
    pub id: ChatThreadId,
    pub display_name: String,
    pub last_message_preview: String,
    /// Pre-formatted label such as "09:45" or "Yesterday"; never parsed.
    pub timestamp_label: String,
    pub unread_count: u32,
}

impl ChatThread {
    pub fn new(
        id: ChatThreadId,
        display_name: impl Into<String>,
        last_message_preview: impl Into<String>,
        timestamp_label: impl Into<String>,
        unread_count: u32,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            last_message_preview: last_message_preview.into(),
            timestamp_label: timestamp_label.into(),
            unread_count,
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }

    /// Badge value; `None` means no badge is rendered.
    pub fn unread_badge(&self) -> Option<u32> {
        (self.unread_count > 0).then_some(self.unread_count)
    }
}

/// Builds avatar initials: first character of the first two whitespace
/// separated words, uppercased. Blank names yield an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .filter_map(|ch| ch.to_uppercase().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(name: &str, unread_count: u32) -> ChatThread {
        ChatThread::new(ChatThreadId::new(1), name, "Hi", "09:45", unread_count)
    }

    #[test]
    fn initials_take_first_letter_of_two_words() {
        assert_eq!(initials("Alex Johnson"), "AJ");
        assert_eq!(initials("Maya"), "M");
    }

    #[test]
    fn initials_ignore_words_after_the_second() {
        assert_eq!(initials("Best Friends Group"), "BF");
    }

    #[test]
    fn initials_uppercase_lowercase_names() {
        assert_eq!(initials("rama krishna"), "RK");
        assert_eq!(initials("пётр иванов"), "ПИ");
    }

    #[test]
    fn initials_skip_repeated_whitespace() {
        assert_eq!(initials("  Kavya   S  "), "KS");
        assert_eq!(initials("Teja\t\nKumar"), "TK");
    }

    #[test]
    fn initials_of_blank_name_are_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   \t "), "");
    }

    #[test]
    fn initials_never_exceed_two_characters() {
        for name in ["a b c d", "ß ß", "x", "Éric Ödegaard Smith"] {
            let value = initials(name);
            assert!(value.chars().count() <= 2, "too long for {name:?}");
            assert_eq!(value, value.to_uppercase(), "not uppercase for {name:?}");
        }
    }

    #[test]
    fn unread_badge_only_for_positive_counts() {
        assert_eq!(thread("Alex", 2).unread_badge(), Some(2));
        assert_eq!(thread("Alex", 0).unread_badge(), None);
    }

    #[test]
    fn thread_id_displays_raw_value() {
        assert_eq!(ChatThreadId::new(42).to_string(), "42");
    }
}
