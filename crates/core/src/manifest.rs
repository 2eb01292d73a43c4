//! Declarative catalog file.
//!
//! A manifest lets a deployment mount its own stub routers without code
//! changes. Example:
//!
//! ```json
//! {
//!   "include_builtin": false,
//!   "suites": [{ "phase": 1631, "name": "listing-dynamic-pricing-suite", "category": "listing" }],
//!   "series": [
//!     { "name": "storm", "start_phase": 1771, "adjectives": ["resilient"] },
//!     { "name": "wave", "start_phase": 1776 }
//!   ],
//!   "domains": [{
//!     "slug": "ebay-dispute-center",
//!     "category": "order",
//!     "theme": "rose-600",
//!     "echo": { "theme": true },
//!     "routes": [
//!       { "method": "POST", "path": "/disputes/:id/respond", "section": "disputes", "action": "respond" }
//!     ]
//!   }]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::blueprint::Blueprint;
use crate::catalog::{expand_series, suite_domain, Catalog, Category, Domain, SeriesSpec, Theme, SUITE_THEME_BASE};
use crate::error::CoreError;
use crate::route::{EchoStatus, HttpMethod, PathTemplate, ResponseShape, RouteSpec, RouteTable};

fn default_true() -> bool {
    true
}

/// Root document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Mount [`Catalog::builtin`] before the manifest's own entries.
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    #[serde(default)]
    pub suites: Vec<SuiteEntry>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub domains: Vec<DomainEntry>,
}

/// One suite-layout domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteEntry {
    pub phase: u32,
    pub name: String,
    pub category: Category,
}

/// Extras switched on for every route of a hand-written domain.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EchoOptions {
    pub theme: bool,
    pub timestamp: bool,
}

/// A hand-written domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainEntry {
    pub slug: String,
    pub category: Category,
    #[serde(default)]
    pub phase: Option<u32>,
    /// Defaults to the palette entry for `phase`.
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub echo: EchoOptions,
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub method: HttpMethod,
    pub path: PathTemplate,
    pub section: String,
    pub action: String,
    #[serde(default)]
    pub status: EchoStatus,
}

impl Manifest {
    /// Parse a manifest document.
    pub fn parse(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid catalog manifest: {e}")))
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read catalog manifest {}: {e}", path.display()))
        })?;
        Self::parse(&raw)
    }

    /// Expand every entry into a validated catalog.
    ///
    /// Order: built-ins (if requested), suites, series, hand-written domains.
    pub fn into_catalog(self) -> Result<Catalog, CoreError> {
        let mut catalog = if self.include_builtin {
            Catalog::builtin()?
        } else {
            Catalog::new()
        };

        for suite in &self.suites {
            catalog.insert(suite_domain(suite.phase, &suite.name, suite.category)?)?;
        }
        for series in &self.series {
            catalog.extend(expand_series(series)?)?;
        }
        for entry in self.domains {
            catalog.insert(entry.into_domain()?)?;
        }
        Ok(catalog)
    }
}

impl DomainEntry {
    fn into_domain(self) -> Result<Domain, CoreError> {
        let routes = self
            .routes
            .into_iter()
            .map(|r| RouteSpec {
                method: r.method,
                path: r.path,
                section: r.section,
                action: r.action,
                shape: ResponseShape {
                    status: r.status,
                    ..ResponseShape::default()
                },
            })
            .collect();
        let table = RouteTable::from_routes(routes)?.with_extras(self.echo.theme, self.echo.timestamp);
        let theme = self
            .theme
            .unwrap_or_else(|| Theme::for_phase(self.phase.unwrap_or(SUITE_THEME_BASE), SUITE_THEME_BASE));

        Domain::new(&self.slug, self.phase, self.category, theme, Blueprint::Custom, table)
    }
}
