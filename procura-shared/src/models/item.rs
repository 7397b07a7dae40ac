use serde::{Deserialize, Serialize};

use super::Resource;

/// A catalogue item that can be placed on an order line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub sku: String,
    pub name: String,
    /// Unit of measure, e.g. `"box"` or `"hour"`.
    pub unit: String,
    /// Price per unit in minor currency units.
    pub unit_price_minor: i64,
    #[serde(default)]
    pub vendor_id: Option<u64>,
}

impl Resource for Item {
    const COLLECTION: &'static str = "items";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_includes_sku() {
        let item = Item {
            id: 4,
            sku: "PPR-A4".to_string(),
            name: "Copy paper".to_string(),
            unit: "box".to_string(),
            unit_price_minor: 2_499,
            vendor_id: None,
        };
        assert_eq!(item.label(), "Copy paper (PPR-A4)");
    }
}
