#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_web::config::{LogFormat, ServerConfig};
use fyyur_web::router::build_app_router;
use fyyur_web::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        database_max_connections: 5,
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// GET with a `Cookie` header, as a browser would after a redirect.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(cookie)).await
}

/// POST an URL-encoded form body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    form: Option<&str>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if form.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = form.map(|f| Body::from(f.to_string())).unwrap_or_else(Body::empty);
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` of a 303 redirect.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

/// The `name=value` pair of the first `Set-Cookie` header, ready to be sent
/// back in a `Cookie` header.
pub fn cookie_pair(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().trim().to_string()
}

/// Every `Set-Cookie` header of a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// A complete, valid venue form body. `extra` is appended verbatim.
pub fn venue_body(name: &str, extra: &str) -> String {
    format!(
        "name={}&city=San+Francisco&state=CA&address=1015+Folsom+Street\
         &phone=123-123-1234&genres=Jazz&genres=Reggae{extra}",
        name.replace(' ', "+")
    )
}

/// A complete, valid artist form body. `extra` is appended verbatim.
pub fn artist_body(name: &str, extra: &str) -> String {
    format!(
        "name={}&city=San+Francisco&state=CA&phone=326-123-5000&genres=Rock+n+Roll{extra}",
        name.replace(' ', "+")
    )
}

/// Insert a venue through the form and return its id.
pub async fn create_venue(pool: &PgPool, name: &str) -> i64 {
    let response = post_form(build_test_app(pool.clone()), "/venues/create", &venue_body(name, "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    sqlx::query_scalar("SELECT id FROM venues WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert an artist through the form and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let response =
        post_form(build_test_app(pool.clone()), "/artists/create", &artist_body(name, "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    sqlx::query_scalar("SELECT id FROM artists WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}
