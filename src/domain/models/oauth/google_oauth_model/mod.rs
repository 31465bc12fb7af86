//! # Google OAuth 모델
//!
//! Google SDK 로그인 플로우에서 오가는 값들입니다.
//!
//! ```text
//! GoogleSdkLoginCredentials ──(authorization URL, state)──► Google
//!                                                            │ code
//!                                                            ▼
//!                      GoogleAccessTokens { id_token, access_token }
//!                         │                         │
//!                         ▼ decode_id_token()       ▼ profile endpoint
//!                   IdentityClaims               UserInfo
//! ```

pub mod credentials;
pub mod access_tokens;

pub use credentials::GoogleSdkLoginCredentials;
pub use access_tokens::{GoogleAccessTokens, IdentityClaims, UserInfo};
