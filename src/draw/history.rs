//! Ordered log of committed actions with a single-slot undo buffer.

use super::action::DrawingAction;

/// Full history of committed shapes and text for the session.
///
/// Insertion order is both z-order and replay order. Undo keeps exactly one
/// removed action around for redo: a second undo replaces the first one.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    /// All committed actions (first = bottom layer, last = top layer)
    actions: Vec<DrawingAction>,
    /// Most recently removed action, available for one redo
    undo_slot: Option<DrawingAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action on top of everything drawn so far.
    ///
    /// No validation happens here; degenerate shapes and empty text are kept.
    pub fn append(&mut self, action: DrawingAction) {
        log::debug!("Committing {} action", action.kind_name());
        self.actions.push(action);
    }

    /// Detaches the newest action and parks a copy in the undo slot.
    ///
    /// Returns `None` and leaves the slot untouched when the log is empty.
    pub fn remove_last(&mut self) -> Option<DrawingAction> {
        let removed = self.actions.pop()?;
        if let Some(discarded) = self.undo_slot.replace(removed.clone()) {
            log::debug!(
                "Undo slot overwritten; {} action can no longer be redone",
                discarded.kind_name()
            );
        }
        Some(removed)
    }

    /// Re-appends whatever sits in the undo slot and empties it.
    ///
    /// Appends made since the undo do not invalidate the slot.
    pub fn redo_last(&mut self) -> Option<DrawingAction> {
        let restored = self.undo_slot.take()?;
        self.actions.push(restored.clone());
        Some(restored)
    }

    /// Drops every action and the undo slot.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.undo_slot = None;
    }

    pub fn actions(&self) -> &[DrawingAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn undo_slot(&self) -> Option<&DrawingAction> {
        self.undo_slot.as_ref()
    }
}
