use serde::{Deserialize, Serialize};

use super::Resource;

/// A cost centre orders can be charged against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub budget_minor: Option<i64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Resource for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}
