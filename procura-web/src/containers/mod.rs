pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod session_provider;
pub(crate) mod sidebar;

pub use layout::Layout;
pub use session_provider::{AuthContext, SessionProvider, use_client, use_session};
