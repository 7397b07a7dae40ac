pub mod auth;
pub mod credentials;
pub mod errors;
pub mod item;
pub mod orders;
pub mod project;
pub mod resource;
pub mod template;
pub mod timestamp;
pub mod user;
pub mod vendor;

pub use auth::{LoginRequest, LoginResponse, MeResponse, SessionSummary};
pub use credentials::{CredentialError, Credentials, Email, EmailError};
pub use errors::ErrorResponse;
pub use item::Item;
pub use orders::{
    ApprovalDecision, CreateOrderRequest, OrderLine, OrderStatus, OrderSummary, PurchaseOrder,
};
pub use project::Project;
pub use resource::Resource;
pub use template::Template;
pub use timestamp::Timestamp;
pub use user::{AuthenticatedUser, DirectoryUser, UserRole};
pub use vendor::Vendor;
