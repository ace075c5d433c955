//! In-memory stand-in for the task backend.
//!
//! Implements the three-operation contract under `/task`, answering every
//! route with HTTP 200 and a `CommonResponse` envelope. Application-level
//! failures are soft: the envelope's `status` field carries them
//! (`BAD_REQUEST`, `NOT_FOUND`) while the HTTP layer stays 200. Ids are
//! integers assigned from an increasing counter.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub due_date: String,
}

/// The envelope every route returns. `data` stays a raw JSON value here:
/// the server side genuinely produces three shapes (null, object, array)
/// and the client is the one that owes them structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommonResponse {
    pub status: String,
    pub message: String,
    pub data: serde_json::Value,
}

impl CommonResponse {
    fn new(status: &str, message: &str, data: serde_json::Value) -> Self {
        Self {
            status: status.to_string(),
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    tasks: BTreeMap<i64, Task>,
}

type Db = Arc<RwLock<Store>>;

#[derive(Deserialize)]
struct CompleteParams {
    // Optional so a missing id becomes a NOT_FOUND envelope rather than an
    // extractor rejection.
    id: Option<i64>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/task/create", post(create_task))
        .route("/task/get-all-pending-todos", get(pending_todos))
        .route("/task/make-todo-completed", post(complete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> Json<CommonResponse> {
    if input.title.is_empty() || input.description.is_empty() || input.due_date.is_empty() {
        return Json(CommonResponse::new(
            "BAD_REQUEST",
            "Title, description and due date are required",
            serde_json::Value::Null,
        ));
    }

    let mut store = db.write().await;
    store.next_id += 1;
    let task = Task {
        id: store.next_id,
        title: input.title,
        description: input.description,
        completed: false,
        due_date: Some(input.due_date),
    };
    store.tasks.insert(task.id, task.clone());
    info!(id = task.id, "task created");

    Json(CommonResponse::new(
        "OK",
        "Task created",
        serde_json::json!(task),
    ))
}

async fn pending_todos(State(db): State<Db>) -> Json<CommonResponse> {
    let store = db.read().await;
    // BTreeMap iteration gives ascending id order
    let pending: Vec<Task> = store
        .tasks
        .values()
        .filter(|task| !task.completed)
        .cloned()
        .collect();

    Json(CommonResponse::new(
        "OK",
        "Pending tasks fetched",
        serde_json::json!(pending),
    ))
}

async fn complete_todo(
    State(db): State<Db>,
    Query(params): Query<CompleteParams>,
) -> Json<CommonResponse> {
    let mut store = db.write().await;
    let task = match params.id {
        Some(id) => store.tasks.get_mut(&id),
        None => None,
    };

    match task {
        Some(task) => {
            task.completed = true;
            info!(id = task.id, "task completed");
            Json(CommonResponse::new(
                "OK",
                "Task marked as completed",
                serde_json::json!(task.clone()),
            ))
        }
        None => Json(CommonResponse::new(
            "NOT_FOUND",
            "Task not found",
            serde_json::Value::Null,
        )),
    }
}
