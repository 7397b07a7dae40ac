pub(crate) mod data_table;
pub(crate) mod language_selector;
pub(crate) mod loading;
pub(crate) mod sidebar_nav_item;
pub(crate) mod status_badge;
pub(crate) mod theme_switcher;
pub(crate) mod toast;
pub(crate) mod user_dropdown;

pub use data_table::{Cell, DataTable, TableRow};
pub use loading::Loading;
pub use status_badge::StatusBadge;
pub use toast::{Toast, ToastKind};
