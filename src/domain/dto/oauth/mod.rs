pub mod google_login;

pub use google_login::{GoogleCallbackQuery, GoogleLoginResponse, GoogleTokenResponse};
