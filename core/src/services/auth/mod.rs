//! Account registration, login and credential updates.

mod password;
mod service;

pub use password::PasswordHasher;
pub use service::AuthService;
