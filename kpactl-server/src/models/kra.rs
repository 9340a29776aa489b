//! Sub-goals (KRAs) - owned by a goal, own tasks

use serde::{Deserialize, Serialize};

use super::Task;

/// A sub-goal with its tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kra {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Kra {
    pub fn childless(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateKraRequest {
    pub name: String,
}

/// `?kpa_id=` on sub-goal creation
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct KraParent {
    pub kpa_id: i64,
}
