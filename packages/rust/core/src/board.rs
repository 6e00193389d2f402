//! The agent log shown while a run is in flight.
//!
//! An [`AgentBoard`] is an immutable snapshot. Every status change or note
//! produces a new board; the old one stays valid for whoever holds it.

use std::sync::Arc;

use ebookstudio_shared::{AgentLogEntry, AgentStatus, StageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentBoard {
    entries: Arc<[AgentLogEntry]>,
}

impl Default for AgentBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBoard {
    /// All four agents queued with no notes.
    pub fn new() -> Self {
        Self {
            entries: StageId::ALL.into_iter().map(AgentLogEntry::queued).collect(),
        }
    }

    pub fn entries(&self) -> &[AgentLogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: StageId) -> Option<&AgentLogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn status(&self, id: StageId) -> AgentStatus {
        self.entry(id).map(|entry| entry.status).unwrap_or_default()
    }

    pub fn notes(&self, id: StageId) -> &[String] {
        self.entry(id).map(|entry| entry.notes.as_slice()).unwrap_or(&[])
    }

    /// The agent currently working, if any.
    pub fn active(&self) -> Option<&AgentLogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.status == AgentStatus::Working)
    }

    /// True once every agent has finished.
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.status == AgentStatus::Done)
    }

    /// A new board with `id` moved to `status`.
    pub fn with_status(&self, id: StageId, status: AgentStatus) -> Self {
        self.map_entry(id, |entry| entry.status = status)
    }

    /// A new board with `note` appended to `id`'s notes.
    pub fn with_note(&self, id: StageId, note: impl Into<String>) -> Self {
        let note = note.into();
        self.map_entry(id, move |entry| entry.notes.push(note))
    }

    fn map_entry(&self, id: StageId, update: impl FnOnce(&mut AgentLogEntry)) -> Self {
        let mut entries = self.entries.to_vec();
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
            update(entry);
        }
        Self {
            entries: entries.into(),
        }
    }
}
