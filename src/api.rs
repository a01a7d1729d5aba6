//! Remote Price Feed
//!
//! One GET against the price endpoint, returning a name→price mapping.
//! Any transport error, non-OK status, malformed payload, or timeout is a
//! single failure outcome; the caller decides what to show the user.

use std::collections::BTreeMap;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

const PRICES_URL: &str = "/api/prices";
const REQUEST_TIMEOUT_MS: u32 = 10_000;

fn js_error(context: &str, value: JsValue) -> String {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    format!("{context}: {detail}")
}

/// Decode and validate a price-feed payload.
///
/// The feed must be a JSON object mapping product names to non-negative
/// numbers; anything else rejects the whole payload.
pub fn parse_price_feed(raw: &str) -> Result<BTreeMap<String, f64>, String> {
    let prices: BTreeMap<String, f64> =
        serde_json::from_str(raw).map_err(|e| format!("malformed price feed: {e}"))?;

    for (name, price) in &prices {
        if !price.is_finite() || *price < 0.0 {
            return Err(format!("invalid price for {name}: {price}"));
        }
    }
    Ok(prices)
}

/// Fetch the current price mapping from the remote feed.
///
/// The request is aborted after [`REQUEST_TIMEOUT_MS`]; an abort surfaces
/// as an ordinary fetch error.
pub async fn fetch_prices() -> Result<BTreeMap<String, f64>, String> {
    let window = web_sys::window().ok_or("no window")?;

    let controller =
        AbortController::new().map_err(|e| js_error("abort controller", e))?;
    let abort = controller.clone();
    Timeout::new(REQUEST_TIMEOUT_MS, move || abort.abort()).forget();

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(PRICES_URL, &init)
        .map_err(|e| js_error("bad request", e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    if !response.ok() {
        return Err(format!("price feed returned HTTP {}", response.status()));
    }

    let body = JsFuture::from(response.text().map_err(|e| js_error("no body", e))?)
        .await
        .map_err(|e| js_error("body read failed", e))?;
    let body = body.as_string().ok_or("body is not text")?;

    parse_price_feed(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_feed_parses_to_price_map() {
        let prices =
            parse_price_feed(r#"{"Хлеб белый": 42, "Молоко 2.5%": 91.5}"#).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["Хлеб белый"], 42.0);
        assert_eq!(prices["Молоко 2.5%"], 91.5);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(parse_price_feed("[1, 2, 3]").is_err());
        assert!(parse_price_feed("<html>502</html>").is_err());
        assert!(parse_price_feed("").is_err());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        assert!(parse_price_feed(r#"{"Хлеб белый": "дорого"}"#).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(parse_price_feed(r#"{"Хлеб белый": -5}"#).is_err());
    }
}
