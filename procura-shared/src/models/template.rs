use serde::{Deserialize, Serialize};

use super::Resource;

/// A reusable document template (order printouts, vendor emails).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub body: String,
}

impl Resource for Template {
    const COLLECTION: &'static str = "templates";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
