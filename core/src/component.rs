//! The task component: form, pending list, and operation sequencing.
//!
//! # Design
//! `TaskComponent` owns the only copies of the form and the pending list and
//! mutates them exclusively from operation outcomes. Each of the three
//! operations follows the same shape — build the request, execute it through
//! the transport, parse the envelope — and translates the result into a
//! notification plus, on success, a state change. Operations are independent
//! and re-entrant; there is no cross-operation state machine and no
//! cancellation, so overlapping fetches resolve last-writer-wins on the list.
//!
//! Hard failures stop here: they are rendered as one of three fixed error
//! toasts and never propagated, leaving the component usable for the next
//! action. Soft failures (non-"OK" envelope status) become info toasts
//! carrying the server's own message.

use crate::form::TaskForm;
use crate::http::{HttpRequest, Transport};
use crate::notify::Notifier;
use crate::service::TaskService;
use crate::error::ApiError;
use crate::types::{CommonResponse, ResponseData, Task};

/// Messages fixed at this layer; underlying error detail is never shown.
const ERR_CREATE: &str = "Failed to create task";
const ERR_FETCH: &str = "Failed to fetch pending tasks";
const ERR_COMPLETE: &str = "Failed to mark task as completed";

/// Orchestrates the three task operations against a [`Transport`], surfacing
/// outcomes through a [`Notifier`].
pub struct TaskComponent<T: Transport, N: Notifier> {
    service: TaskService,
    transport: T,
    notifier: N,
    /// The creation form; hosts write field values here directly.
    pub form: TaskForm,
    pending_tasks: Vec<Task>,
}

impl<T: Transport, N: Notifier> TaskComponent<T, N> {
    pub fn new(base_url: &str, transport: T, notifier: N) -> Self {
        Self {
            service: TaskService::new(base_url),
            transport,
            notifier,
            form: TaskForm::new(),
            pending_tasks: Vec::new(),
        }
    }

    /// Initialization: populate the list once. The form starts empty by
    /// construction.
    pub fn activate(&mut self) {
        self.fetch_pending_tasks();
    }

    /// The current pending list, wholly replaced on every successful fetch.
    pub fn pending_tasks(&self) -> &[Task] {
        &self.pending_tasks
    }

    /// Submit the form. Invalid forms short-circuit with a validation
    /// warning and never reach the service.
    pub fn create_task(&mut self) {
        if !self.form.is_valid() {
            self.notifier
                .warning("Please fill in required fields", "Validation");
            return;
        }

        let request = self.form.to_request();
        let outcome = self
            .service
            .build_create_task(&request)
            .and_then(|req| self.round_trip(req));

        match outcome {
            Ok(response) if response.is_ok() => {
                self.notifier.success(&response.message, "Success");
                self.form.reset();
                self.fetch_pending_tasks();
            }
            Ok(response) => self.notifier.info(&response.message, "Info"),
            Err(_) => self.notifier.error(ERR_CREATE, "Error"),
        }
    }

    /// Refresh the pending list. Unconditional: no guard, no deduplication
    /// of in-flight calls.
    pub fn fetch_pending_tasks(&mut self) {
        match self.round_trip(self.service.build_pending_todos()) {
            Ok(response) => match response.data {
                ResponseData::Many(tasks) => self.pending_tasks = tasks,
                // data present but not a list is coerced to an empty list
                ResponseData::Single(_) => self.pending_tasks = Vec::new(),
                ResponseData::Empty => self.notifier.info(&response.message, "Info"),
            },
            Err(_) => self.notifier.error(ERR_FETCH, "Error"),
        }
    }

    /// Mark one task complete, then refetch the list on success. The task is
    /// never mutated locally.
    pub fn complete_task(&mut self, task_id: i64) {
        match self.round_trip(self.service.build_complete_todo(task_id)) {
            Ok(response) if response.is_ok() => {
                self.notifier.success(&response.message, "Success");
                self.fetch_pending_tasks();
            }
            Ok(response) => self.notifier.info(&response.message, "Info"),
            Err(_) => self.notifier.error(ERR_COMPLETE, "Error"),
        }
    }

    fn round_trip(&self, request: HttpRequest) -> Result<CommonResponse, ApiError> {
        let response = self.transport.execute(request)?;
        self.service.parse_response(response)
    }
}
