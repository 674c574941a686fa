// Auth domain services
pub mod token_codec;
pub mod password;
pub mod account_service;
pub mod session_issuer;
pub mod session_guard;
pub mod refresh_flow;
pub mod state;

pub use token_codec::*;
pub use password::*;
pub use account_service::*;
pub use session_issuer::*;
pub use session_guard::*;
pub use refresh_flow::*;
pub use state::*;
