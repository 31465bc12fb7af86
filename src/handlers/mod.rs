//! # HTTP Handlers
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`auth`] | `/api/auth` |
//! | [`users`] | `/api/users` |
//! | [`errors`] | `/api/errors` |
//! | [`google_login`] | `/api/google-oauth2/login/sdk` |
//! | [`ws`] | `/ws` |

pub mod auth;
pub mod users;
pub mod errors;
pub mod google_login;
pub mod ws;
mod cookies;
