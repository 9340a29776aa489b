//! Goals (KPAs) - top of the tree

use serde::{Deserialize, Serialize};

use super::Kra;

/// A goal with its sub-goals fully expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpa {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub kras: Vec<Kra>,
}

impl Kpa {
    /// A freshly created goal has no sub-goals yet.
    pub fn childless(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            kras: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateKpaRequest {
    pub name: String,
}
