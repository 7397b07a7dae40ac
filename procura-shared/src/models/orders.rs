use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};
use strum::{EnumIter, IntoEnumIterator};

use super::{Resource, Timestamp};

/// Lifecycle of a purchase order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the backend accepts a move from `self` to `next`.
    ///
    /// Drafts are submitted for approval, pending orders are approved or
    /// rejected, and anything not yet decided can be cancelled.
    #[must_use]
    pub const fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::PendingApproval | Self::Cancelled)
                | (
                    Self::PendingApproval,
                    Self::Approved | Self::Rejected | Self::Cancelled
                )
        )
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: u64,
    pub description: String,
    pub quantity: u32,
    pub unit_price_minor: i64,
}

impl OrderLine {
    /// `None` when the line total does not fit in an `i64`.
    #[must_use]
    pub fn total_minor(&self) -> Option<i64> {
        i64::from(self.quantity).checked_mul(self.unit_price_minor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub id: u64,
    /// Human-facing order number, e.g. `PO-2024-0042`.
    pub number: String,
    pub vendor_id: u64,
    #[serde(default)]
    pub project_id: Option<u64>,
    pub status: OrderStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub currency: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub requested_by: u64,
    pub created_at: Timestamp,
}

impl PurchaseOrder {
    /// Sum of the line totals, `None` on overflow.
    #[must_use]
    pub fn total_minor(&self) -> Option<i64> {
        self.lines
            .iter()
            .try_fold(0_i64, |total, line| total.checked_add(line.total_minor()?))
    }
}

impl Resource for PurchaseOrder {
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.number.clone()
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub vendor_id: u64,
    pub project_id: Option<u64>,
    pub currency: String,
    pub lines: Vec<OrderLine>,
    pub notes: Option<String>,
}

/// Body of `POST /orders/{id}/decision`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approve,
    Reject { reason: String },
}

impl ApprovalDecision {
    #[must_use]
    pub const fn resulting_status(&self) -> OrderStatus {
        match self {
            Self::Approve => OrderStatus::Approved,
            Self::Reject { .. } => OrderStatus::Rejected,
        }
    }
}

/// Order counts per status plus approved spend per currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub counts: BTreeMap<OrderStatus, usize>,
    /// `None` marks a currency whose spend overflowed.
    pub approved_spend_minor: BTreeMap<String, Option<i64>>,
}

impl OrderSummary {
    #[must_use]
    pub fn from_orders(orders: &[PurchaseOrder]) -> Self {
        let mut summary = Self {
            counts: OrderStatus::iter().map(|status| (status, 0)).collect(),
            approved_spend_minor: BTreeMap::new(),
        };
        for order in orders {
            *summary.counts.entry(order.status).or_default() += 1;
            if order.status == OrderStatus::Approved {
                let spend = summary
                    .approved_spend_minor
                    .entry(order.currency.clone())
                    .or_insert(Some(0));
                *spend = spend
                    .zip(order.total_minor())
                    .and_then(|(sum, total)| sum.checked_add(total));
            }
        }
        summary
    }

    #[must_use]
    pub fn count(&self, status: OrderStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u64, status: OrderStatus, currency: &str, lines: Vec<(u32, i64)>) -> PurchaseOrder {
        PurchaseOrder {
            id,
            number: format!("PO-{id:04}"),
            vendor_id: 1,
            project_id: None,
            status,
            lines: lines
                .into_iter()
                .map(|(quantity, unit_price_minor)| OrderLine {
                    item_id: 1,
                    description: "Widget".to_string(),
                    quantity,
                    unit_price_minor,
                })
                .collect(),
            currency: currency.to_string(),
            notes: None,
            requested_by: 9,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn total_sums_lines() {
        let po = order(1, OrderStatus::Draft, "USD", vec![(3, 1_000), (2, 250)]);
        assert_eq!(po.total_minor(), Some(3_500));
        assert_eq!(po.label(), "PO-0001");
    }

    #[test]
    fn approval_lifecycle() {
        use OrderStatus::*;
        assert!(Draft.can_transition(PendingApproval));
        assert!(PendingApproval.can_transition(Approved));
        assert!(PendingApproval.can_transition(Rejected));
        assert!(Draft.can_transition(Cancelled));
        assert!(!Draft.can_transition(Approved));
        assert!(!Approved.can_transition(Cancelled));
        assert!(!Rejected.can_transition(PendingApproval));
        assert!(Approved.is_final() && !PendingApproval.is_final());
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&OrderStatus::PendingApproval).unwrap();
        assert_eq!(json, "\"pending_approval\"");
    }

    #[test]
    fn decision_is_internally_tagged() {
        let reject = ApprovalDecision::Reject {
            reason: "over budget".to_string(),
        };
        let json = serde_json::to_value(&reject).unwrap();
        assert_eq!(json["decision"], "reject");
        assert_eq!(json["reason"], "over budget");
        assert_eq!(reject.resulting_status(), OrderStatus::Rejected);

        let approve = serde_json::to_value(ApprovalDecision::Approve).unwrap();
        assert_eq!(approve, serde_json::json!({"decision": "approve"}));
    }

    #[test]
    fn summary_counts_every_status_and_approved_spend() {
        let orders = vec![
            order(1, OrderStatus::Approved, "USD", vec![(1, 10_000)]),
            order(2, OrderStatus::Approved, "USD", vec![(2, 500)]),
            order(3, OrderStatus::Approved, "EUR", vec![(1, 700)]),
            order(4, OrderStatus::PendingApproval, "USD", vec![(1, 99_999)]),
            order(5, OrderStatus::Draft, "USD", vec![]),
        ];
        let summary = OrderSummary::from_orders(&orders);

        assert_eq!(summary.total(), 5);
        assert_eq!(summary.count(OrderStatus::Approved), 3);
        assert_eq!(summary.count(OrderStatus::Rejected), 0);
        assert_eq!(summary.approved_spend_minor.get("USD"), Some(&Some(11_000)));
        assert_eq!(summary.approved_spend_minor.get("EUR"), Some(&Some(700)));
    }

    #[test]
    fn empty_summary_still_lists_statuses() {
        let summary = OrderSummary::from_orders(&[]);
        assert_eq!(summary.counts.len(), 5);
        assert_eq!(summary.total(), 0);
        assert!(summary.approved_spend_minor.is_empty());
    }

    #[test]
    fn oversized_line_has_no_total() {
        let po = order(1, OrderStatus::Draft, "USD", vec![(u32::MAX, i64::MAX / 2)]);
        assert_eq!(po.lines[0].total_minor(), None);
        assert_eq!(po.total_minor(), None);
    }

    #[test]
    fn total_overflow_across_lines_is_detected() {
        let po = order(1, OrderStatus::Draft, "USD", vec![(1, i64::MAX), (1, 1)]);
        assert_eq!(po.total_minor(), None);
    }

    #[test]
    fn overflowing_spend_marks_only_its_currency() {
        let orders = vec![
            order(1, OrderStatus::Approved, "USD", vec![(4_000_000_000, 3_000_000_000)]),
            order(2, OrderStatus::Approved, "USD", vec![(1, 500)]),
            order(3, OrderStatus::Approved, "EUR", vec![(1, i64::MAX)]),
            order(4, OrderStatus::Approved, "EUR", vec![(1, 1)]),
            order(5, OrderStatus::Approved, "GBP", vec![(2, 250)]),
        ];
        let summary = OrderSummary::from_orders(&orders);

        assert_eq!(summary.count(OrderStatus::Approved), 5);
        assert_eq!(summary.approved_spend_minor.get("USD"), Some(&None));
        assert_eq!(summary.approved_spend_minor.get("EUR"), Some(&None));
        assert_eq!(summary.approved_spend_minor.get("GBP"), Some(&Some(500)));
    }
}
