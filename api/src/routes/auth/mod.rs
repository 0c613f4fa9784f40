//! Auth routes: signup, login, and the password reset flow.

pub mod forgot_password;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod verify_code;
