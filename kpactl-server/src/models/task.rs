//! Tasks - leaves under a sub-goal

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
}

/// `?kra_id=` on task creation
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TaskParent {
    pub kra_id: i64,
}
