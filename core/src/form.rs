//! Creation form state: three required fields.

use crate::types::TaskRequest;

/// The task-creation form. All three fields are required; the form is valid
/// only when every field is non-empty. Owned exclusively by the component
/// and reset to empty after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every required field is populated.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && !self.due_date.is_empty()
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current values into a creation DTO. The form itself is
    /// left untouched; resetting is tied to submission success, not to
    /// building the request.
    pub fn to_request(&self) -> TaskRequest {
        TaskRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
        }
    }
}
