pub mod user_service;

pub use user_service::{email_not_found, LoginUserLookup, UserService};
