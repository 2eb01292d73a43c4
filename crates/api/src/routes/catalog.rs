//! Introspection endpoints over the mounted domains.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use rakuda_core::blueprint::Blueprint;
use rakuda_core::catalog::{Category, Domain, Tab};
use rakuda_core::route::RouteSpec;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DomainSummary {
    pub slug: String,
    pub phase: Option<u32>,
    pub category: Category,
    pub theme: String,
    pub blueprint: Blueprint,
    pub mount_path: String,
    pub route_count: usize,
}

#[derive(Debug, Serialize)]
pub struct RouteView {
    pub method: &'static str,
    /// Colon-style template, e.g. `/views/:id`.
    pub path: String,
    pub section: String,
    pub action: String,
    pub status: u16,
}

#[derive(Debug, Serialize)]
pub struct DomainDetail {
    #[serde(flatten)]
    pub summary: DomainSummary,
    pub sections: Vec<String>,
    pub tabs: Vec<Tab>,
    pub routes: Vec<RouteView>,
}

fn summarize(domain: &Domain, prefix: &str) -> DomainSummary {
    DomainSummary {
        slug: domain.slug.clone(),
        phase: domain.phase,
        category: domain.category,
        theme: domain.theme.to_string(),
        blueprint: domain.blueprint,
        mount_path: domain.mount_path(prefix),
        route_count: domain.table.len(),
    }
}

impl From<&RouteSpec> for RouteView {
    fn from(spec: &RouteSpec) -> Self {
        Self {
            method: spec.method.as_str(),
            path: spec.path.to_string(),
            section: spec.section.clone(),
            action: spec.action.clone(),
            status: spec.shape.status.code(),
        }
    }
}

/// GET /catalog
async fn list_domains(State(state): State<AppState>) -> Json<DataResponse<Vec<DomainSummary>>> {
    let prefix = &state.config.mount_prefix;
    let data = state.catalog.iter().map(|d| summarize(d, prefix)).collect();
    Json(DataResponse { data })
}

/// GET /catalog/{slug}
async fn get_domain(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<DomainDetail>>> {
    let domain = state.catalog.get(&slug)?;
    let detail = DomainDetail {
        summary: summarize(domain, &state.config.mount_prefix),
        sections: domain.table.sections().into_iter().map(str::to_string).collect(),
        tabs: domain.tabs(),
        routes: domain.table.routes().iter().map(RouteView::from).collect(),
    };
    Ok(Json(DataResponse { data: detail }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_domains))
        .route("/catalog/{slug}", get(get_domain))
}
