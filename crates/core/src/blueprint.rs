//! Canonical route-table layouts.
//!
//! Every generated domain router follows one of two fixed layouts of 28
//! routes: 5 dashboard, 6 primary, 4 secondary, 4 tertiary, 3 analytics,
//! 2 settings and 4 utility routes. Only the section vocabulary differs.
//! Hand-written routers use [`Blueprint::Custom`] and declare their own
//! table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::route::RouteTable;

/// Number of routes in a [`Blueprint::Suite`] or [`Blueprint::Series`] table.
pub const STANDARD_ROUTE_COUNT: usize = 28;

/// Which layout a domain's route table was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blueprint {
    /// `views` / `media` / `renders` vocabulary with a `sync` utility.
    Suite,
    /// `resources` / `variants` / `listings` vocabulary with a `sync` utility.
    Series,
    /// Hand-written table.
    Custom,
}

impl Blueprint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suite => "suite",
            Self::Series => "series",
            Self::Custom => "custom",
        }
    }

    /// The generated table for this layout, or `None` for [`Blueprint::Custom`].
    pub fn table(self) -> Option<Result<RouteTable, CoreError>> {
        match self {
            Self::Suite => Some(suite_table()),
            Self::Series => Some(series_table()),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn with_dashboard(root_action: &str) -> crate::route::RouteTableBuilder {
    RouteTable::builder().section("dashboard", |s| {
        s.get("/dashboard", root_action)
            .get("/dashboard/summary", "summary")
            .get("/dashboard/metrics", "metrics")
            .get("/dashboard/recent", "recent")
            .get("/dashboard/alerts", "alerts")
    })
}

/// Suite layout.
///
/// ```text
/// GET    /dashboard{,/summary,/metrics,/recent,/alerts}
/// GET    /views            POST /views          GET /views/:id
/// PUT    /views/:id        DELETE /views/:id    POST /views/:id/process
/// GET    /media            POST /media/upload   GET /media/summary   DELETE /media/:id
/// GET    /renders          POST /renders/generate GET /renders/summary GET /renders/:id
/// GET    /analytics{,/overview,/export}
/// GET    /settings         PUT /settings
/// POST   /import  GET /export  POST /sync  GET /health
/// ```
pub fn suite_table() -> Result<RouteTable, CoreError> {
    with_dashboard("dashboard")
        .section("views", |s| {
            s.get("/views", "list")
                .get("/views/:id", "detail")
                .post("/views", "create")
                .put("/views/:id", "update")
                .delete("/views/:id", "delete")
                .post("/views/:id/process", "process")
        })
        .section("media", |s| {
            s.get("/media", "list")
                .post("/media/upload", "upload")
                .get("/media/summary", "summary")
                .delete("/media/:id", "delete")
        })
        .section("renders", |s| {
            s.get("/renders", "list")
                .post("/renders/generate", "generate")
                .get("/renders/summary", "summary")
                .get("/renders/:id", "detail")
        })
        .section("analytics", |s| {
            s.get("/analytics", "overview")
                .get("/analytics/overview", "overview")
                .get("/analytics/export", "export")
        })
        .section("settings", |s| s.get("/settings", "get").put("/settings", "update"))
        .section("utilities", |s| {
            s.post("/import", "import")
                .get("/export", "export")
                .post("/sync", "sync")
                .get("/health", "health")
        })
        .build()
}

/// Series layout.
///
/// ```text
/// GET    /dashboard{,/summary,/metrics,/recent,/alerts}
/// GET    /resources        GET /resources/:id   POST /resources
/// PUT    /resources/:id    DELETE /resources/:id POST /resources/:id/process
/// GET    /variants  GET /variants/:id  POST /variants  PUT /variants/:id
/// GET    /listings  GET /listings/:id  POST /listings  PUT /listings/:id
/// GET    /analytics{,/overview,/trends}
/// GET    /settings         PUT /settings
/// GET /health  GET /export  POST /import  POST /sync
/// ```
pub fn series_table() -> Result<RouteTable, CoreError> {
    with_dashboard("dashboard")
        .section("resources", |s| {
            s.get("/resources", "list")
                .get("/resources/:id", "detail")
                .post("/resources", "create")
                .put("/resources/:id", "update")
                .delete("/resources/:id", "delete")
                .post("/resources/:id/process", "process")
        })
        .section("variants", |s| {
            s.get("/variants", "list")
                .get("/variants/:id", "detail")
                .post("/variants", "create")
                .put("/variants/:id", "update")
        })
        .section("listings", |s| {
            s.get("/listings", "list")
                .get("/listings/:id", "detail")
                .post("/listings", "create")
                .put("/listings/:id", "update")
        })
        .section("analytics", |s| {
            s.get("/analytics", "analytics")
                .get("/analytics/overview", "overview")
                .get("/analytics/trends", "trends")
        })
        .section("settings", |s| s.get("/settings", "get").put("/settings", "put"))
        .section("utilities", |s| {
            s.get("/health", "health")
                .get("/export", "export")
                .post("/import", "import")
                .post("/sync", "sync")
        })
        .build()
}
