//! Task-management client core.
//!
//! # Overview
//! A validated creation form, a pending-task list fetched from a backend,
//! and an action to mark a task complete, glued together by a thin service
//! layer over three HTTP operations. Outcomes reach the user through a
//! notification sink; nothing here renders UI or performs network I/O.
//!
//! # Design
//! - `TaskService` is stateless — it builds `HttpRequest` values and parses
//!   the `CommonResponse` envelope, never touching the network.
//! - The host supplies a `Transport` for the actual round trips and a
//!   `Notifier` for toasts, so the whole core runs deterministically under
//!   test with fakes for both.
//! - `TaskComponent` owns the form and the pending list exclusively and
//!   mutates them only from operation outcomes.
//! - Soft failures (non-"OK" envelope status) become info notifications;
//!   hard failures become fixed error notifications and never propagate.

pub mod component;
pub mod error;
pub mod form;
pub mod http;
pub mod notify;
pub mod service;
pub mod types;

pub use component::TaskComponent;
pub use error::ApiError;
pub use form::TaskForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use notify::{Notifier, NoopNotifier};
pub use service::TaskService;
pub use types::{CommonResponse, ResponseData, Task, TaskRequest};
