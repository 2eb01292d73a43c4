//! Generic dispatcher: turns a [`Domain`]'s route table into an axum router.
//!
//! Every route gets the same echo handler, parameterized by its
//! [`RouteSpec`]. Routes sharing a path share one [`MethodRouter`], whose
//! fallback answers undeclared verbs with 404 rather than axum's 405.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{MethodFilter, MethodRouter};
use axum::{Json, Router};
use indexmap::IndexMap;
use rakuda_core::catalog::Domain;
use rakuda_core::echo::{build_payload, EchoRequest};
use rakuda_core::error::CoreError;
use rakuda_core::route::{EchoStatus, HttpMethod, RouteSpec};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Everything one echo handler needs, shared by its clones.
struct Endpoint {
    domain: String,
    theme: String,
    spec: RouteSpec,
}

/// Build the router for one domain, relative to its mount point.
pub fn domain_router(domain: &Domain) -> Router<AppState> {
    let mut by_path: IndexMap<String, Vec<&RouteSpec>> = IndexMap::new();
    for spec in domain.table.routes() {
        by_path
            .entry(spec.path.to_router_path())
            .or_default()
            .push(spec);
    }

    let mut router = Router::new();
    for (path, specs) in by_path {
        let mut method_router = MethodRouter::<AppState>::new();
        for spec in specs {
            let endpoint = Arc::new(Endpoint {
                domain: domain.slug.clone(),
                theme: domain.theme.to_string(),
                spec: spec.clone(),
            });
            let handler = move |uri: Uri, body: Bytes| {
                let endpoint = Arc::clone(&endpoint);
                async move { echo(&endpoint, &uri, body) }
            };
            method_router = method_router.on(method_filter(spec.method), handler);
        }
        router = router.route(&path, method_router.fallback(method_not_declared));
    }
    router
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

fn status_code(status: EchoStatus) -> StatusCode {
    match status {
        EchoStatus::Ok => StatusCode::OK,
        EchoStatus::Created => StatusCode::CREATED,
    }
}

/// The handler behind every declared route.
///
/// `uri` is relative to the domain mount point, so the route's own template
/// recovers the path parameters exactly as the client sent them.
fn echo(endpoint: &Endpoint, uri: &Uri, body: Bytes) -> AppResult<(StatusCode, Json<Value>)> {
    let spec = &endpoint.spec;
    let params = spec.path.matches(uri.path()).unwrap_or_default();
    let body = if spec.method.accepts_body() {
        parse_body(&body)?
    } else {
        None
    };

    tracing::debug!(
        domain = %endpoint.domain,
        section = %spec.section,
        action = %spec.action,
        "Echo"
    );

    let payload = build_payload(
        spec,
        EchoRequest {
            theme: &endpoint.theme,
            params: &params,
            body,
            now: chrono::Utc::now(),
        },
    );
    Ok((status_code(spec.shape.status), Json(payload)))
}

/// An empty (or all-whitespace) body means "no body"; anything else must be JSON.
fn parse_body(raw: &[u8]) -> AppResult<Option<Value>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(raw)
        .map(Some)
        .map_err(|e| AppError::BadRequest(format!("Request body is not valid JSON: {e}")))
}

async fn method_not_declared(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Route",
        key: format!("{method} {}", uri.path()),
    })
}
