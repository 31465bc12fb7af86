//! OAuth 프로바이더 모델

pub mod google_oauth_model;
