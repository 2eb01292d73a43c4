//! Echo payload construction.
//!
//! Every stub handler replies with its own routing identity. The payload is a
//! pure function of the route, the request, and (when enabled) the clock.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::route::RouteSpec;

/// Request-derived inputs to [`build_payload`].
#[derive(Debug, Clone)]
pub struct EchoRequest<'a> {
    /// Domain theme tag, written when the route's shape asks for it.
    pub theme: &'a str,
    /// Captured path parameters, in template order, as raw strings.
    pub params: &'a [(String, String)],
    /// Parsed request body, if the request carried one.
    pub body: Option<Value>,
    /// Server time used for the `timestamp` field.
    pub now: DateTime<Utc>,
}

/// Build the JSON reply for `spec`.
///
/// Always contains `section` and `action`. Adds `theme` and `timestamp` when
/// the shape enables them, every path parameter as a top-level string field,
/// and `body` when the method accepts one and the request sent one.
pub fn build_payload(spec: &RouteSpec, request: EchoRequest<'_>) -> Value {
    let mut payload = Map::new();
    payload.insert("section".into(), Value::String(spec.section.clone()));
    payload.insert("action".into(), Value::String(spec.action.clone()));

    if spec.shape.theme {
        payload.insert("theme".into(), Value::String(request.theme.to_string()));
    }
    if spec.shape.timestamp {
        payload.insert(
            "timestamp".into(),
            Value::String(request.now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }

    for (name, value) in request.params {
        payload.insert(name.clone(), Value::String(value.clone()));
    }

    if spec.method.accepts_body() {
        if let Some(body) = request.body {
            payload.insert("body".into(), body);
        }
    }

    Value::Object(payload)
}
