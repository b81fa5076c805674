use super::{
    chat::{ChatThread, ChatThreadId},
    chat_registry::ChatRegistry,
};

/// Chats tab state: the registry plus the highlighted row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatListState {
    registry: ChatRegistry,
    selected_index: Option<usize>,
}

impl ChatListState {
    pub fn new(registry: ChatRegistry) -> Self {
        let selected_index = (!registry.is_empty()).then_some(0);
        Self {
            registry,
            selected_index,
        }
    }

    pub fn registry(&self) -> &ChatRegistry {
        &self.registry
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_thread(&self) -> Option<&ChatThread> {
        self.selected_index
            .and_then(|index| self.registry.list().get(index))
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.registry.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    /// Marks the highlighted thread read and returns its id.
    pub fn mark_selected_read(&mut self) -> Option<ChatThreadId> {
        let id = self.selected_thread()?.id;
        self.registry.mark_read(id);
        Some(id)
    }

    /// Runs a registry update while keeping the same thread highlighted.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn update_registry<T>(&mut self, update: impl FnOnce(&mut ChatRegistry) -> T) -> T {
        let previous_selected_id = self.selected_thread().map(|thread| thread.id);
        let result = update(&mut self.registry);
        self.selected_index = resolve_selection_index(&self.registry, previous_selected_id);
        result
    }
}

#[cfg_attr(not(test), allow(dead_code))]
fn resolve_selection_index(
    registry: &ChatRegistry,
    previous_selected_id: Option<ChatThreadId>,
) -> Option<usize> {
    if registry.is_empty() {
        return None;
    }

    previous_selected_id
        .and_then(|id| registry.position(id))
        .or(Some(0))
}
