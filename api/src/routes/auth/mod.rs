//! Authentication route handlers
//!
//! - Sending email verification codes
//! - Logging in with a code
//! - Reading the current identity
//! - Logout

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};

use sr_shared::config::SessionConfig;

pub mod login;
pub mod logout;
pub mod me;
pub mod send_code;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use send_code::send_code;

/// HttpOnly cookie carrying a session token
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(config.ttl_seconds))
        .finish()
}

/// Cookie that makes the browser drop the session
pub fn expired_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.cookie_name.clone(), String::new())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
