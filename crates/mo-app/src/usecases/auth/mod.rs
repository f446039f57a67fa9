//! Sign-in, registration and sign-out use cases.

mod check_authenticated;
mod login;
mod logout;
mod register;

pub use check_authenticated::CheckAuthenticated;
pub use login::LoginUser;
pub use logout::LogoutUser;
pub use register::RegisterUser;
