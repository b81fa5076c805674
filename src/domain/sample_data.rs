//! Fixed sample content shown by the Home screen.

use super::chat::{ChatThread, ChatThreadId};

/// Account shown on the Profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    /// Avatar text; the account name is a single word, so it is not derived.
    pub avatar: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "GopiChand",
    email: "gopichand123@gmail.com",
    avatar: "GC",
};

pub const PROFILE_OPTIONS: [&str; 3] = ["Edit Profile", "Change Password", "Privacy"];

pub const CONTACTS: [&str; 8] = [
    "Arjun Reddy",
    "Meera Sharma",
    "Rohit Das",
    "Kavya S",
    "Teja Kumar",
    "Nikhil R",
    "Sangeeta",
    "Rama Krishna",
];

pub const SETTINGS_ITEMS: [&str; 5] = [
    "Notifications",
    "Account",
    "Appearance",
    "Help & Support",
    "About SwiftChat",
];

const SEED_CHATS: [(&str, &str, &str, u32); 6] = [
    ("Alex Johnson", "Hey, are we still meeting today?", "09:45", 2),
    ("Best Friends Group", "You: I'll send the pics later", "08:12", 0),
    ("Maya", "Good night! \u{1F319}", "Yesterday", 1),
    ("Project Team", "Deadline is Monday", "Yesterday", 0),
    ("Samir", "Let's play later?", "Sun", 0),
    ("Mom", "Call me when free \u{2764}\u{FE0F}", "Sat", 3),
];

/// Seed threads in display order; ids follow seed position starting at 1.
pub fn seed_threads() -> Vec<ChatThread> {
    SEED_CHATS
        .iter()
        .zip(1u64..)
        .map(|(&(name, preview, label, unread), id)| {
            ChatThread::new(ChatThreadId::new(id), name, preview, label, unread)
        })
        .collect()
}
