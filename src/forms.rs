// src/forms.rs
use crate::domain::FilterSpec;
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

/// Forms on this site are a handful of short fields.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub type Params = HashMap<String, String>;

pub fn parse_urlencoded(input: &str) -> Params {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

pub fn parse_query(req: &Request) -> Params {
    req.uri().query().map(parse_urlencoded).unwrap_or_default()
}

/// Read an `application/x-www-form-urlencoded` body.
pub fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    let text = String::from_utf8(raw)
        .map_err(|_| ServerError::BadRequest("form is not valid UTF-8".into()))?;
    Ok(parse_urlencoded(&text))
}

/// A parameter that is present and not blank.
fn present<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn number<T: FromStr>(params: &Params, key: &str) -> Result<Option<T>, ServerError> {
    present(params, key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| ServerError::BadRequest(format!("{key} must be a number, got {v:?}")))
        })
        .transpose()
}

/// Names the search card and the JSON API use for a property search.
pub const FILTER_KEYS: [&str; 5] = ["type", "location", "guests", "min_price", "max_price"];

/// Build a FilterSpec from query parameters. Blank parameters count as absent;
/// numbers that do not parse are a 400.
pub fn filter_spec(params: &Params) -> Result<FilterSpec, ServerError> {
    Ok(FilterSpec {
        category: present(params, "type").map(str::to_string),
        location: present(params, "location").map(str::to_string),
        guests: number(params, "guests")?,
        min_price: number(params, "min_price")?,
        max_price: number(params, "max_price")?,
    })
}

/// Whether the request carried any search parameter at all, even "all".
pub fn has_filter_params(params: &Params) -> bool {
    FILTER_KEYS.iter().any(|k| params.contains_key(*k))
}
