use crate::router::handle_at;
use crate::errors::ResultResp;
use crate::store::session::switch_role;
use crate::store::Store;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;

/// Fixed "today" so dated records are predictable.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Fresh store with the demo seed; the session user starts as an officer.
pub fn officer_store() -> Store {
    Store::default()
}

pub fn resident_store() -> Store {
    let store = Store::default();
    store
        .with_state(|state| {
            switch_role(state);
            Ok(())
        })
        .unwrap();
    store
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn send(store: &Store, req: Request) -> ResultResp {
    handle_at(req, store, today())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Renders a GET and returns the HTML, asserting a 200.
pub fn page(store: &Store, uri: &str) -> String {
    let resp = send(store, get(uri)).expect("Handler failed");
    assert_eq!(resp.status(), 200, "GET {uri} should render");
    body_string(resp)
}
