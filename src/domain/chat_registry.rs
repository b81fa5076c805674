//! Ordered, in-memory collection of chat thread summaries.

use thiserror::Error;

use super::chat::{ChatThread, ChatThreadId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("chat thread {id} is already registered")]
    DuplicateId { id: ChatThreadId },
}

/// Chat threads in insertion order.
///
/// Read queries never mutate; updates address threads by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatRegistry {
    threads: Vec<ChatThread>,
}

impl ChatRegistry {
    /// Builds a registry from seed threads, keeping their order.
    pub fn from_seed(threads: Vec<ChatThread>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for thread in threads {
            registry.append_thread(thread)?;
        }

        Ok(registry)
    }

    pub fn list(&self) -> &[ChatThread] {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn get(&self, id: ChatThreadId) -> Option<&ChatThread> {
        self.threads.iter().find(|thread| thread.id == id)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn position(&self, id: ChatThreadId) -> Option<usize> {
        self.threads.iter().position(|thread| thread.id == id)
    }

    pub fn initials_for(&self, thread: &ChatThread) -> String {
        thread.initials()
    }

    pub fn unread_badge(&self, thread: &ChatThread) -> Option<u32> {
        thread.unread_badge()
    }

    pub fn total_unread(&self) -> u32 {
        self.threads
            .iter()
            .fold(0u32, |sum, thread| sum.saturating_add(thread.unread_count))
    }

    /// Clears the unread count. Returns `false` when the id is unknown.
    pub fn mark_read(&mut self, id: ChatThreadId) -> bool {
        match self.get_mut(id) {
            Some(thread) => {
                thread.unread_count = 0;
                true
            }
            None => false,
        }
    }

    /// Appends at the end. A colliding id leaves the registry untouched.
    pub fn append_thread(&mut self, thread: ChatThread) -> Result<(), RegistryError> {
        if self.get(thread.id).is_some() {
            return Err(RegistryError::DuplicateId { id: thread.id });
        }

        self.threads.push(thread);
        Ok(())
    }

    /// Applies an incoming message to an existing thread: the preview and
    /// timestamp label are replaced and one more message is counted unread.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn record_incoming(
        &mut self,
        id: ChatThreadId,
        preview: impl Into<String>,
        timestamp_label: impl Into<String>,
    ) -> bool {
        let Some(thread) = self.get_mut(id) else {
            return false;
        };

        thread.last_message_preview = preview.into();
        thread.timestamp_label = timestamp_label.into();
        thread.unread_count = thread.unread_count.saturating_add(1);
        true
    }

    fn get_mut(&mut self, id: ChatThreadId) -> Option<&mut ChatThread> {
        self.threads.iter_mut().find(|thread| thread.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(id: u64, name: &str, unread_count: u32) -> ChatThread {
        ChatThread::new(ChatThreadId::new(id), name, "preview", "09:45", unread_count)
    }

    fn seeded() -> ChatRegistry {
        ChatRegistry::from_seed(vec![thread(1, "Alex Johnson", 2), thread(2, "Maya", 0)])
            .expect("seed ids are unique")
    }

    #[test]
    fn seeded_scenario_derives_initials_and_badges() {
        let mut registry = seeded();
        let alex = registry.list()[0].clone();
        let maya = registry.list()[1].clone();

        assert_eq!(registry.initials_for(&alex), "AJ");
        assert_eq!(registry.unread_badge(&alex), Some(2));
        assert_eq!(registry.unread_badge(&maya), None);

        assert!(registry.mark_read(ChatThreadId::new(1)));

        let alex = registry.get(ChatThreadId::new(1)).expect("thread 1 exists");
        assert_eq!(registry.unread_badge(alex), None);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut registry = seeded();
        registry
            .append_thread(thread(7, "Samir", 5))
            .expect("new id is accepted");

        let names: Vec<_> = registry
            .list()
            .iter()
            .map(|thread| thread.display_name.as_str())
            .collect();
        assert_eq!(names, ["Alex Johnson", "Maya", "Samir"]);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut registry = seeded();

        assert!(registry.mark_read(ChatThreadId::new(1)));
        assert!(registry.mark_read(ChatThreadId::new(1)));

        let alex = registry.get(ChatThreadId::new(1)).expect("thread 1 exists");
        assert_eq!(alex.unread_count, 0);
    }

    #[test]
    fn mark_read_of_unknown_thread_changes_nothing() {
        let mut registry = seeded();
        let before = registry.clone();

        assert!(!registry.mark_read(ChatThreadId::new(99)));
        assert_eq!(registry, before);
    }

    #[test]
    fn append_with_duplicate_id_fails_and_leaves_registry_unchanged() {
        let mut registry = seeded();
        let before = registry.clone();

        let error = registry
            .append_thread(thread(2, "Someone Else", 4))
            .expect_err("duplicate id must be rejected");

        assert_eq!(
            error,
            RegistryError::DuplicateId {
                id: ChatThreadId::new(2)
            }
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn from_seed_rejects_duplicate_ids() {
        let result = ChatRegistry::from_seed(vec![thread(1, "A", 0), thread(1, "B", 0)]);

        assert!(matches!(result, Err(RegistryError::DuplicateId { .. })));
    }

    #[test]
    fn record_incoming_updates_preview_and_counts_unread() {
        let mut registry = seeded();

        assert!(registry.record_incoming(ChatThreadId::new(2), "See you!", "10:02"));

        let maya = registry.get(ChatThreadId::new(2)).expect("thread 2 exists");
        assert_eq!(maya.last_message_preview, "See you!");
        assert_eq!(maya.timestamp_label, "10:02");
        assert_eq!(registry.unread_badge(maya), Some(1));
        assert!(!registry.record_incoming(ChatThreadId::new(42), "x", "now"));
    }

    #[test]
    fn total_unread_sums_all_threads() {
        let registry = seeded();

        assert_eq!(registry.total_unread(), 2);
        assert_eq!(ChatRegistry::default().total_unread(), 0);
    }

    #[test]
    fn duplicate_id_error_names_the_id() {
        let error = RegistryError::DuplicateId {
            id: ChatThreadId::new(3),
        };

        assert_eq!(error.to_string(), "chat thread 3 is already registered");
    }
}
