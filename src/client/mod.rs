// Client layer - Browse-session side of the system
pub mod catalog_client;
pub mod session;

pub use catalog_client::CatalogClient;
pub use session::{BrowseSession, QueryTicket, SessionStatus};
