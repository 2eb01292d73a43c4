//! HTTP-level tests for the echo routes of mounted domains.

mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, delete, get, post_json, put_json, send, send_raw};
use rakuda_core::catalog::Catalog;
use rakuda_core::route::{HttpMethod, Segment};
use serde_json::json;

const SUITE: &str = "/api/ebay-listing-dynamic-pricing-suite";
const SERIES: &str = "/api/ebay-order-neural-routing-blaze";
const OPTIMIZER: &str = "/api/ebay-seller-score-optimizer";

const DISPUTES: &str = r#"{
    "include_builtin": false,
    "domains": [{
        "slug": "ebay-dispute-center",
        "category": "order",
        "theme": "rose-600",
        "echo": { "theme": true, "timestamp": true },
        "routes": [
            { "method": "GET", "path": "/disputes", "section": "disputes", "action": "list" },
            { "method": "GET", "path": "/disputes/:id", "section": "disputes", "action": "detail" },
            { "method": "POST", "path": "/disputes", "section": "disputes", "action": "create", "status": 201 },
            { "method": "POST", "path": "/disputes/:id/respond", "section": "disputes", "action": "respond" },
            { "method": "PATCH", "path": "/disputes/:id", "section": "disputes", "action": "patch" }
        ]
    }]
}"#;

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

// ---------------------------------------------------------------------------
// Test: every declared route answers with its own identity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_builtin_route_echoes_its_identity() {
    let catalog = Catalog::builtin().unwrap();
    let app = common::build_test_app();

    for domain in catalog.iter() {
        for spec in domain.table.routes() {
            let path: String = spec
                .path
                .segments()
                .iter()
                .map(|s| match s {
                    Segment::Static(s) => format!("/{s}"),
                    Segment::Param(_) => "/p-1".to_string(),
                })
                .collect();
            let uri = format!("/api/{}{path}", domain.slug);

            let response = send(app.clone(), to_method(spec.method), &uri, Body::empty()).await;
            assert_eq!(
                response.status().as_u16(),
                spec.shape.status.code(),
                "{} {uri}",
                spec.method
            );

            let json = body_json(response).await;
            assert_eq!(json["section"], spec.section.as_str(), "{} {uri}", spec.method);
            assert_eq!(json["action"], spec.action.as_str(), "{} {uri}", spec.method);
        }
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health on any module
// ---------------------------------------------------------------------------

#[tokio::test]
async fn module_health_is_utilities_health() {
    for base in [SUITE, SERIES, OPTIMIZER] {
        let response = get(common::build_test_app(), &format!("{base}/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "section": "utilities", "action": "health" })
        );
    }
}

// ---------------------------------------------------------------------------
// Test: path parameters come back as raw strings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn path_parameter_round_trips() {
    let app = common::build_manifest_app(DISPUTES);
    let response = send(
        app,
        Method::POST,
        "/api/ebay-dispute-center/disputes/42/respond",
        Body::empty(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["section"], "disputes");
    assert_eq!(json["action"], "respond");
    assert_eq!(json["id"], "42");
    assert!(json.get("body").is_none());
}

#[tokio::test]
async fn path_parameter_is_not_decoded() {
    let response = get(common::build_test_app(), &format!("{SUITE}/views/a%20b")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], "a%20b");
}

#[tokio::test]
async fn static_segment_beats_parameter() {
    let response = get(common::build_test_app(), &format!("{SUITE}/renders/summary")).await;
    let json = body_json(response).await;
    assert_eq!(json["action"], "summary");
    assert!(json.get("id").is_none());
}

// ---------------------------------------------------------------------------
// Test: request bodies are echoed unchanged on write methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_settings_echoes_body() {
    let response = put_json(
        common::build_test_app(),
        &format!("{SUITE}/settings"),
        json!({ "x": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "section": "settings", "action": "update", "body": { "x": 1 } })
    );
}

#[tokio::test]
async fn nested_body_round_trips_with_param() {
    let submitted = json!({ "note": "ok", "items": [1, 2, { "k": null }], "flag": true });
    let response = post_json(
        common::build_test_app(),
        &format!("{SERIES}/resources/r-7/process"),
        submitted.clone(),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["action"], "process");
    assert_eq!(json["id"], "r-7");
    assert_eq!(json["body"], submitted);
}

#[tokio::test]
async fn patch_echoes_body() {
    let app = common::build_manifest_app(DISPUTES);
    let response = send_raw(
        app,
        Method::PATCH,
        "/api/ebay-dispute-center/disputes/9",
        r#"{"state":"closed"}"#,
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["action"], "patch");
    assert_eq!(json["body"], json!({ "state": "closed" }));
}

#[tokio::test]
async fn delete_ignores_body() {
    let app = common::build_test_app();
    let response = send_raw(app, Method::DELETE, &format!("{SUITE}/views/3"), r#"{"x":1}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "section": "views", "action": "delete", "id": "3" }));
}

#[tokio::test]
async fn empty_post_body_has_no_body_key() {
    let response = send(
        common::build_test_app(),
        Method::POST,
        &format!("{SUITE}/sync"),
        Body::empty(),
    )
    .await;
    assert_eq!(
        body_json(response).await,
        json!({ "section": "utilities", "action": "sync" })
    );
}

// ---------------------------------------------------------------------------
// Test: repeated GETs are byte-identical
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_get_is_byte_identical() {
    let app = common::build_test_app();
    let uri = format!("{OPTIMIZER}/metrics/m-1");
    let first = body_bytes(get(app.clone(), &uri).await).await;
    let second = body_bytes(get(app, &uri).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn repeated_get_differs_only_in_timestamp() {
    let app = common::build_manifest_app(DISPUTES);
    let uri = "/api/ebay-dispute-center/disputes/5";
    let mut first = body_json(get(app.clone(), uri).await).await;
    let mut second = body_json(get(app, uri).await).await;

    assert!(first["timestamp"].is_string());
    first.as_object_mut().unwrap().remove("timestamp");
    second.as_object_mut().unwrap().remove("timestamp");
    assert_eq!(first, second);
    assert_eq!(first["theme"], "rose-600");
}

// ---------------------------------------------------------------------------
// Test: creation-style routes answer 201
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_route_returns_201() {
    let app = common::build_manifest_app(DISPUTES);
    let response = post_json(app, "/api/ebay-dispute-center/disputes", json!({ "reason": "late" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["action"], "create");
    assert_eq!(json["body"]["reason"], "late");
}

// ---------------------------------------------------------------------------
// Test: undeclared verbs and paths are 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_settings_is_not_found() {
    for base in [SUITE, SERIES, OPTIMIZER] {
        let response = post_json(
            common::build_test_app(),
            &format!("{base}/settings"),
            json!({ "x": 1 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("section").is_none());
    }
}

#[tokio::test]
async fn undeclared_method_on_known_path_is_not_found() {
    let response = delete(common::build_test_app(), &format!("{SUITE}/dashboard")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_subpath_is_not_found() {
    let response = get(common::build_test_app(), &format!("{SUITE}/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_domain_is_not_found() {
    let response = get(common::build_test_app(), "/api/ebay-does-not-exist/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: malformed JSON bodies get a structured 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let response = send_raw(
        common::build_test_app(),
        Method::PUT,
        &format!("{SUITE}/settings"),
        "{not json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("not valid JSON"));
}

// ---------------------------------------------------------------------------
// Test: numbers outside the f64 and 64-bit integer range echo unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn oversized_integer_echoes_verbatim() {
    let response = send_raw(
        common::build_test_app(),
        Method::PUT,
        &format!("{SUITE}/settings"),
        r#"{"x":123456789012345678901234567890}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(
        text.contains(r#""body":{"x":123456789012345678901234567890}"#),
        "{text}"
    );
}

#[tokio::test]
async fn out_of_range_float_is_accepted() {
    let response = send_raw(
        common::build_test_app(),
        Method::PUT,
        &format!("{SUITE}/settings"),
        r#"{"x":1e400}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["body"]["x"].to_string(), "1e400");
}

#[tokio::test]
async fn malformed_body_on_get_is_ignored() {
    let response = send_raw(
        common::build_test_app(),
        Method::GET,
        &format!("{SUITE}/settings"),
        "{not json",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
