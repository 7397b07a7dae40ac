//! Validation for the order form and the order action bar.
//!
//! Kept free of components so the rules can be tested natively.

use shared::models::{
    ApprovalDecision, AuthenticatedUser, CreateOrderRequest, Item, OrderLine, OrderStatus,
    PurchaseOrder,
};

use crate::format::DEFAULT_CURRENCY;

/// Validation errors raised before an order request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderFormError {
    #[error("a vendor is required")]
    MissingVendor,
    #[error("at least one line is required")]
    NoLines,
    /// Zero-based index of the offending line.
    #[error("line {0} needs a whole quantity above zero")]
    InvalidQuantity(usize),
    #[error("line {0} refers to an unknown item")]
    UnknownItem(usize),
    #[error("the order total is too large")]
    TotalTooLarge,
    #[error("a rejection needs a reason")]
    MissingReason,
}

impl OrderFormError {
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::MissingVendor => "orders.errors.vendor",
            Self::NoLines | Self::UnknownItem(_) => "orders.errors.lines",
            Self::InvalidQuantity(_) => "orders.errors.quantity",
            Self::TotalTooLarge => "orders.errors.total",
            Self::MissingReason => "orders.errors.reason",
        }
    }
}

/// One editable row of the form. Rows without an item are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDraft {
    pub item_id: Option<u64>,
    pub quantity: String,
}

/// Raw form input, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub vendor_id: Option<u64>,
    pub project_id: Option<u64>,
    pub currency: String,
    pub lines: Vec<LineDraft>,
    pub notes: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            vendor_id: None,
            project_id: None,
            currency: DEFAULT_CURRENCY.to_string(),
            lines: vec![LineDraft::default()],
            notes: String::new(),
        }
    }
}

impl OrderDraft {
    /// Turn the draft into a request, pricing each line from `items`.
    ///
    /// # Errors
    ///
    /// The first [`OrderFormError`] found, checking the vendor before lines.
    pub fn validate(&self, items: &[Item]) -> Result<CreateOrderRequest, OrderFormError> {
        let vendor_id = self.vendor_id.ok_or(OrderFormError::MissingVendor)?;

        let mut lines = Vec::with_capacity(self.lines.len());
        for (index, draft) in self.lines.iter().enumerate() {
            let Some(item_id) = draft.item_id else {
                continue;
            };
            let item = items
                .iter()
                .find(|item| item.id == item_id)
                .ok_or(OrderFormError::UnknownItem(index))?;
            let quantity = draft
                .quantity
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|quantity| *quantity > 0)
                .ok_or(OrderFormError::InvalidQuantity(index))?;
            lines.push(OrderLine {
                item_id,
                description: item.name.clone(),
                quantity,
                unit_price_minor: item.unit_price_minor,
            });
        }
        if lines.is_empty() {
            return Err(OrderFormError::NoLines);
        }
        let in_range = lines
            .iter()
            .try_fold(0_i64, |total, line| total.checked_add(line.total_minor()?));
        if in_range.is_none() {
            return Err(OrderFormError::TotalTooLarge);
        }

        let currency = self.currency.trim().to_uppercase();
        let notes = self.notes.trim();
        Ok(CreateOrderRequest {
            vendor_id,
            project_id: self.project_id,
            currency: if currency.is_empty() {
                DEFAULT_CURRENCY.to_string()
            } else {
                currency
            },
            lines,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Build a rejection, which must carry a non-blank reason.
///
/// # Errors
///
/// [`OrderFormError::MissingReason`] when `reason` is blank.
pub fn rejection(reason: &str) -> Result<ApprovalDecision, OrderFormError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(OrderFormError::MissingReason);
    }
    Ok(ApprovalDecision::Reject {
        reason: reason.to_string(),
    })
}

/// Which buttons the order detail page offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderActions {
    pub submit: bool,
    pub approve: bool,
    pub reject: bool,
    pub cancel: bool,
    pub delete: bool,
}

impl OrderActions {
    pub fn for_order(order: &PurchaseOrder, user: Option<&AuthenticatedUser>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        let status = order.status;
        let raise = user.can_raise_orders();
        let decide = user.can_decide_orders();
        Self {
            submit: raise && status.can_transition(OrderStatus::PendingApproval),
            approve: decide && status.can_transition(OrderStatus::Approved),
            reject: decide && status.can_transition(OrderStatus::Rejected),
            cancel: raise && status.can_transition(OrderStatus::Cancelled),
            delete: raise && status == OrderStatus::Draft,
        }
    }

    pub const fn any(self) -> bool {
        self.submit || self.approve || self.reject || self.cancel || self.delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Timestamp, UserRole};
    use test_case::test_case;

    fn items() -> Vec<Item> {
        vec![Item {
            id: 3,
            sku: "W-1".to_string(),
            name: "Widget".to_string(),
            unit: "each".to_string(),
            unit_price_minor: 250,
            vendor_id: Some(4),
        }]
    }

    fn draft(lines: Vec<(Option<u64>, &str)>) -> OrderDraft {
        OrderDraft {
            vendor_id: Some(4),
            project_id: Some(9),
            currency: " eur ".to_string(),
            lines: lines
                .into_iter()
                .map(|(item_id, quantity)| LineDraft {
                    item_id,
                    quantity: quantity.to_string(),
                })
                .collect(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn valid_draft_becomes_priced_request() {
        let request = draft(vec![(Some(3), " 4 "), (None, "")]).validate(&items()).unwrap();
        assert_eq!(request.vendor_id, 4);
        assert_eq!(request.project_id, Some(9));
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.notes, None);
        assert_eq!(
            request.lines,
            vec![OrderLine {
                item_id: 3,
                description: "Widget".to_string(),
                quantity: 4,
                unit_price_minor: 250,
            }]
        );
    }

    #[test]
    fn vendor_is_checked_first() {
        let mut input = draft(vec![]);
        input.vendor_id = None;
        assert_eq!(input.validate(&items()), Err(OrderFormError::MissingVendor));
    }

    #[test_case(vec![], OrderFormError::NoLines; "no rows")]
    #[test_case(vec![(None, "3")], OrderFormError::NoLines; "only blank rows")]
    #[test_case(vec![(Some(3), "0")], OrderFormError::InvalidQuantity(0); "zero quantity")]
    #[test_case(vec![(Some(3), "2"), (Some(3), "1.5")], OrderFormError::InvalidQuantity(1); "fractional quantity")]
    #[test_case(vec![(Some(8), "1")], OrderFormError::UnknownItem(0); "unknown item")]
    fn invalid_lines_are_rejected(lines: Vec<(Option<u64>, &str)>, expected: OrderFormError) {
        assert_eq!(draft(lines).validate(&items()), Err(expected));
    }

    #[test]
    fn unpayable_total_is_rejected() {
        let mut catalogue = items();
        catalogue[0].unit_price_minor = 3_000_000_000;
        let quantity = u32::MAX.to_string();
        let input = draft(vec![(Some(3), quantity.as_str())]);
        assert_eq!(input.validate(&catalogue), Err(OrderFormError::TotalTooLarge));

        catalogue[0].unit_price_minor = i64::MAX / 2;
        let input = draft(vec![(Some(3), "1"), (Some(3), "1"), (Some(3), "1")]);
        assert_eq!(input.validate(&catalogue), Err(OrderFormError::TotalTooLarge));
        assert_eq!(
            OrderFormError::TotalTooLarge.translation_key(),
            "orders.errors.total"
        );
    }

    #[test]
    fn blank_currency_falls_back_to_default() {
        let mut input = draft(vec![(Some(3), "1")]);
        input.currency = String::new();
        assert_eq!(input.validate(&items()).unwrap().currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn rejection_requires_reason() {
        assert_eq!(rejection("   "), Err(OrderFormError::MissingReason));
        assert_eq!(
            rejection(" over budget "),
            Ok(ApprovalDecision::Reject {
                reason: "over budget".to_string()
            })
        );
    }

    fn order(status: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: 1,
            number: "PO-0001".to_string(),
            vendor_id: 4,
            project_id: None,
            status,
            lines: Vec::new(),
            currency: "USD".to_string(),
            notes: None,
            requested_by: 1,
            created_at: Timestamp::now(),
        }
    }

    fn user(roles: Vec<UserRole>) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            email: "ana@example.com".to_string(),
            display_name: None,
            roles,
        }
    }

    #[test]
    fn purchaser_can_submit_but_not_decide() {
        let actions =
            OrderActions::for_order(&order(OrderStatus::Draft), Some(&user(vec![UserRole::Purchaser])));
        assert!(actions.submit && actions.cancel && actions.delete);
        assert!(!actions.approve && !actions.reject);

        let pending = OrderActions::for_order(
            &order(OrderStatus::PendingApproval),
            Some(&user(vec![UserRole::Purchaser])),
        );
        assert!(!pending.approve && !pending.submit && !pending.delete);
        assert!(pending.cancel);
    }

    #[test_case(UserRole::Approver)]
    #[test_case(UserRole::Admin)]
    fn deciders_can_approve_pending_orders(role: UserRole) {
        let actions =
            OrderActions::for_order(&order(OrderStatus::PendingApproval), Some(&user(vec![role])));
        assert!(actions.approve && actions.reject);
    }

    #[test_case(OrderStatus::Approved)]
    #[test_case(OrderStatus::Rejected)]
    #[test_case(OrderStatus::Cancelled)]
    fn final_orders_offer_nothing(status: OrderStatus) {
        let admin = user(vec![UserRole::Admin]);
        assert!(!OrderActions::for_order(&order(status), Some(&admin)).any());
    }

    #[test]
    fn viewers_and_signed_out_users_get_no_actions() {
        let draft_order = order(OrderStatus::Draft);
        assert!(!OrderActions::for_order(&draft_order, Some(&user(vec![UserRole::Viewer]))).any());
        assert!(!OrderActions::for_order(&draft_order, None).any());
    }
}
