use std::io::Read;

use astra::Request;
use chrono::{NaiveDate, Utc};

use crate::errors::ServerError;
use crate::handlers::{self, Params};
use crate::responses::{stylesheet_response, ResultResp};
use crate::store::Store;

pub fn handle(req: Request, store: &Store) -> ResultResp {
    handle_at(req, store, Utc::now().date_naive())
}

/// Same as `handle`, with "today" supplied by the caller for dated records.
pub fn handle_at(mut req: Request, store: &Store, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);
    let segments: Vec<String> = path.trim_matches('/').split('/').map(decode_segment).collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    log::debug!("{method} {path}");

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => handlers::shell::root(store),
        ("GET", ["static", "main.css"]) => stylesheet_response(),
        ("POST", ["role", "switch"]) => handlers::shell::switch(store),

        ("GET", ["dashboard"]) => handlers::dashboard::show(store),

        ("GET", ["announcements"]) => handlers::announcements::list(store, &query),
        ("POST", ["announcements"]) => {
            let form = read_form(&mut req)?;
            handlers::announcements::create(store, &form, today)
        }

        ("GET", ["complaints"]) => handlers::complaints::list(store, &query),
        ("POST", ["complaints"]) => {
            let form = read_form(&mut req)?;
            handlers::complaints::create(store, &form, today)
        }
        ("POST", ["complaints", id, "status"]) => {
            let form = read_form(&mut req)?;
            handlers::complaints::update_status(store, id, &form, today)
        }

        ("GET", ["fees"]) => handlers::fees::list(store, &query),
        ("GET", ["fees", "export"]) => handlers::fees::export(store, today),
        ("POST", ["fees", id, "status"]) => {
            let form = read_form(&mut req)?;
            handlers::fees::update_status(store, id, &form)
        }
        ("POST", ["fees", id, "pay"]) => {
            let form = read_form(&mut req)?;
            handlers::fees::pay(store, id, &form)
        }

        ("GET", ["board"]) => handlers::board::show(store),

        _ => Err(ServerError::NotFound),
    }
}

/// Reverses `form_urlencoded::byte_serialize` on one path segment.
fn decode_segment(raw: &str) -> String {
    let escaped = raw.replace('&', "%26").replace('=', "%3D");
    url::form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Largest form body accepted, in bytes.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decodes an `application/x-www-form-urlencoded` body.
fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body exceeds {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}
