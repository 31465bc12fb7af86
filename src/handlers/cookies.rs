//! 인증 관련 쿠키 생성 도우미

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use crate::config::Environment;

/// HttpOnly 쿠키를 만듭니다. 운영 환경에서는 `Secure`가 붙습니다.
pub fn http_only_cookie(name: &'static str, value: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(Environment::current().secure_cookies())
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// 같은 이름의 쿠키를 즉시 만료시키는 쿠키
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}
