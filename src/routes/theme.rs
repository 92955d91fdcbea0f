use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::{CookieJar, cookie::Cookie};

pub const THEME_COOKIE: &str = "theme";

/// Theme is per-request state carried in a cookie; dark is the default.
pub fn from_jar(jar: &CookieJar) -> &'static str {
    match jar.get(THEME_COOKIE).map(|cookie| cookie.value()) {
        Some("light") => "light",
        _ => "dark",
    }
}

pub async fn toggle(jar: CookieJar) -> impl IntoResponse {
    let next = if from_jar(&jar) == "dark" { "light" } else { "dark" };
    let jar = jar.add(Cookie::build((THEME_COOKIE, next)).path("/").build());

    (jar, Redirect::to("/"))
}
