pub mod auth;
pub mod session;
pub mod token;

pub use auth::AuthService;
pub use session::SessionService;
pub use token::{TokenService, TokenServiceConfig};
