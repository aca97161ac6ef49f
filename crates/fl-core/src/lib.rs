pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::auth_session::AuthSession;
pub use models::credentials::{Credentials, Registration};
pub use models::user_profile::UserProfile;
pub use models::user_role::UserRole;
