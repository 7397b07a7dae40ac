mod dashboard;
pub mod login;
mod not_found;
pub mod order_form;
mod orders;
mod reports;
pub mod resources;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use orders::{OrderDetailPage, OrderNewPage, OrdersPage};
pub use reports::ReportsPage;
pub use resources::{
    ItemDetailPage, ItemsPage, ProjectDetailPage, ProjectsPage, TemplatesPage, UserDetailPage,
    UsersPage, VendorDetailPage, VendorsPage,
};
