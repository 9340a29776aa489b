//! Wire models for the planning tree
//!
//! Output types nest children the way the API returns them; create
//! requests carry only the fields a client may set.

pub mod kpa;
pub mod kra;
pub mod task;

use serde::{Deserialize, Serialize};

pub use kpa::{CreateKpaRequest, Kpa};
pub use kra::{CreateKraRequest, Kra, KraParent};
pub use task::{CreateTaskRequest, Task, TaskParent};

/// `{"detail": ...}` acknowledgement body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
