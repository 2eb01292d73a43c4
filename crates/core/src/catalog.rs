//! Domain catalog: every stub router the server mounts.
//!
//! A [`Domain`] is one router module: a slug (mounted as
//! `<prefix>/<slug>`), a category, a colour theme and its route table. The
//! [`Catalog`] keeps domains in registration order with unique slugs.
//!
//! Generated domains come from two naming schemes:
//!
//! - suites: `ebay-<name>` with the [`Blueprint::Suite`] layout,
//! - series: `ebay-<category>-<adjective>-<noun>-<series>` with the
//!   [`Blueprint::Series`] layout, one domain per adjective and category.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blueprint::Blueprint;
use crate::error::CoreError;
use crate::route::{is_kebab_case, HttpMethod, RouteTable};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a domain slug.
pub const MAX_SLUG_LENGTH: usize = 128;

/// Slugs the host claims for its own endpoints under the mount prefix.
pub const RESERVED_SLUGS: &[&str] = &["catalog", "health"];

/// Colour tags assigned to domains, rotated by phase number.
pub const THEME_PALETTE: &[&str] = &[
    "indigo-600",
    "orange-600",
    "pink-600",
    "slate-600",
    "red-600",
    "fuchsia-600",
    "green-600",
    "blue-600",
    "yellow-600",
    "purple-600",
    "cyan-600",
    "lime-600",
    "emerald-600",
    "sky-600",
    "amber-600",
    "violet-600",
    "rose-600",
    "teal-600",
];

/// Phase the suite palette rotation is anchored at.
pub const SUITE_THEME_BASE: u32 = 1001;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Business area a domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Listing,
    Order,
    Inventory,
    Seller,
    Product,
}

impl Category {
    /// Expansion order used by series generation.
    pub const ALL: [Category; 5] = [
        Category::Listing,
        Category::Order,
        Category::Inventory,
        Category::Seller,
        Category::Product,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Order => "order",
            Self::Inventory => "inventory",
            Self::Seller => "seller",
            Self::Product => "product",
        }
    }

    /// Noun closing series slugs for this category.
    pub fn series_noun(self) -> &'static str {
        match self {
            Self::Listing => "engine",
            Self::Order => "routing",
            Self::Inventory => "planning",
            Self::Seller => "dashboard",
            Self::Product => "analysis",
        }
    }

    /// Tab keys for the primary, secondary and tertiary sections.
    fn tab_keys(self, blueprint: Blueprint) -> [&'static str; 3] {
        match (self, blueprint) {
            (Self::Listing, Blueprint::Series) => ["listings", "templates", "optimization"],
            (Self::Listing, _) => ["listings", "media", "layouts"],
            (Self::Order, _) => ["orders", "processing", "tracking"],
            (Self::Inventory, Blueprint::Series) => ["inventory", "operations", "forecasting"],
            (Self::Inventory, _) => ["inventory", "operations", "planning"],
            (Self::Seller, Blueprint::Series) => ["sellers", "performance", "management"],
            (Self::Seller, _) => ["sellers", "management", "insights"],
            (Self::Product, _) => ["products", "operations", "quality"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colour tag such as `lime-600`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Theme(String);

impl Theme {
    pub fn new(tag: &str) -> Result<Self, CoreError> {
        if !is_kebab_case(tag) {
            return Err(CoreError::Validation(format!(
                "Theme tag '{tag}' must be kebab-case (e.g. 'lime-600')"
            )));
        }
        Ok(Self(tag.to_string()))
    }

    /// Palette entry for `phase`, counting from `base`.
    pub fn for_phase(phase: u32, base: u32) -> Self {
        let offset = (i64::from(phase) - i64::from(base)).rem_euclid(THEME_PALETTE.len() as i64);
        Self(THEME_PALETTE[offset as usize].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Theme {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// One navigation tab of a domain's UI page, pointing at a `GET` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub key: String,
    /// Path relative to the domain mount point, without a leading slash.
    pub path: String,
}

/// One mounted stub router.
#[derive(Debug, Clone)]
pub struct Domain {
    pub slug: String,
    pub phase: Option<u32>,
    pub category: Category,
    pub theme: Theme,
    pub blueprint: Blueprint,
    pub table: RouteTable,
}

impl Domain {
    /// Assemble a domain, validating the slug and the table.
    pub fn new(
        slug: &str,
        phase: Option<u32>,
        category: Category,
        theme: Theme,
        blueprint: Blueprint,
        table: RouteTable,
    ) -> Result<Self, CoreError> {
        validate_slug(slug)?;
        if table.is_empty() {
            return Err(CoreError::Validation(format!(
                "Domain '{slug}' declares no routes"
            )));
        }
        table.validate()?;
        Ok(Self {
            slug: slug.to_string(),
            phase,
            category,
            theme,
            blueprint,
            table,
        })
    }

    /// Where the host mounts this domain, e.g. `/api/ebay-foo`.
    pub fn mount_path(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.slug)
    }

    /// UI tabs: dashboard, one per entity section, analytics, settings.
    ///
    /// Generated layouts use the category's tab vocabulary; custom tables
    /// get one tab per section that has a parameterless `GET` route.
    pub fn tabs(&self) -> Vec<Tab> {
        match self.blueprint {
            Blueprint::Suite | Blueprint::Series => {
                let [primary, secondary, tertiary] = self.category.tab_keys(self.blueprint);
                let paths: [&str; 6] = if self.blueprint == Blueprint::Suite {
                    [
                        "dashboard/summary",
                        "views/summary",
                        "media/summary",
                        "renders/summary",
                        "analytics/overview",
                        "settings",
                    ]
                } else {
                    [
                        "dashboard/summary",
                        "resources",
                        "variants",
                        "listings",
                        "analytics/overview",
                        "settings",
                    ]
                };
                let keys = ["dashboard", primary, secondary, tertiary, "analytics", "settings"];
                keys.iter()
                    .zip(paths)
                    .map(|(key, path)| Tab {
                        key: (*key).to_string(),
                        path: path.to_string(),
                    })
                    .collect()
            }
            Blueprint::Custom => self
                .table
                .sections()
                .into_iter()
                .filter(|section| *section != "utilities")
                .filter_map(|section| {
                    self.table
                        .routes_for(section)
                        .find(|r| r.method == HttpMethod::Get && !r.path.has_params())
                        .map(|r| Tab {
                            key: section.to_string(),
                            path: r.path.to_string().trim_start_matches('/').to_string(),
                        })
                })
                .collect(),
        }
    }
}

fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Domain slug exceeds maximum length of {MAX_SLUG_LENGTH} characters (got {})",
            slug.len()
        )));
    }
    if !is_kebab_case(slug) {
        return Err(CoreError::Validation(format!(
            "Domain slug '{slug}' must be kebab-case"
        )));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(CoreError::Validation(format!(
            "Domain slug '{slug}' is reserved"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// A suite-layout domain named `ebay-<name>`.
pub fn suite_domain(phase: u32, name: &str, category: Category) -> Result<Domain, CoreError> {
    Domain::new(
        &format!("ebay-{name}"),
        Some(phase),
        category,
        Theme::for_phase(phase, SUITE_THEME_BASE),
        Blueprint::Suite,
        crate::blueprint::suite_table()?,
    )
}

/// A named set of adjectives expanded over every [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSpec {
    pub name: String,
    pub start_phase: u32,
    /// Empty means "use the built-in adjectives for `name`".
    #[serde(default)]
    pub adjectives: Vec<String>,
}

/// Expand a series into `adjectives × categories` series-layout domains.
///
/// Phases are consecutive from `start_phase` (adjective-major order) and
/// themes rotate through the palette starting at `start_phase`.
pub fn expand_series(series: &SeriesSpec) -> Result<Vec<Domain>, CoreError> {
    if !is_kebab_case(&series.name) {
        return Err(CoreError::Validation(format!(
            "Series name '{}' must be kebab-case",
            series.name
        )));
    }

    let adjectives: Vec<&str> = if series.adjectives.is_empty() {
        crate::builtin::series_adjectives(&series.name)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Series '{}' has no adjectives and is not a built-in series",
                    series.name
                ))
            })?
            .to_vec()
    } else {
        series.adjectives.iter().map(String::as_str).collect()
    };

    let table = crate::blueprint::series_table()?;
    let mut domains = Vec::with_capacity(adjectives.len() * Category::ALL.len());

    for (a, adjective) in adjectives.iter().enumerate() {
        for (c, category) in Category::ALL.into_iter().enumerate() {
            let phase = u32::try_from(a * Category::ALL.len() + c)
                .ok()
                .and_then(|offset| series.start_phase.checked_add(offset))
                .ok_or_else(|| {
                    CoreError::Validation(format!(
                        "Series '{}' runs past the last phase number",
                        series.name
                    ))
                })?;
            let slug = format!(
                "ebay-{category}-{adjective}-{}-{}",
                category.series_noun(),
                series.name
            );
            domains.push(Domain::new(
                &slug,
                Some(phase),
                category,
                Theme::for_phase(phase, series.start_phase),
                Blueprint::Series,
                table.clone(),
            )?);
        }
    }
    Ok(domains)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered, slug-unique set of domains.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    domains: Vec<Domain>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain. Fails with [`CoreError::Conflict`] on a duplicate slug.
    pub fn insert(&mut self, domain: Domain) -> Result<(), CoreError> {
        if self.index.contains_key(&domain.slug) {
            return Err(CoreError::Conflict(format!(
                "Domain '{}' is already registered",
                domain.slug
            )));
        }
        self.index.insert(domain.slug.clone(), self.domains.len());
        self.domains.push(domain);
        Ok(())
    }

    pub fn extend(&mut self, domains: impl IntoIterator<Item = Domain>) -> Result<(), CoreError> {
        for domain in domains {
            self.insert(domain)?;
        }
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Result<&Domain, CoreError> {
        self.index
            .get(slug)
            .map(|&i| &self.domains[i])
            .ok_or_else(|| CoreError::NotFound {
                entity: "Domain",
                key: slug.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Total routes across all domains.
    pub fn route_count(&self) -> usize {
        self.domains.iter().map(|d| d.table.len()).sum()
    }

    /// The catalog served when no manifest is configured.
    pub fn builtin() -> Result<Self, CoreError> {
        let mut catalog = Self::new();
        for &(phase, name, category) in crate::builtin::SUITES {
            catalog.insert(suite_domain(phase, name, category)?)?;
        }
        for series in crate::builtin::series() {
            catalog.extend(expand_series(&series)?)?;
        }
        catalog.insert(crate::builtin::seller_score_optimizer()?)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::blueprint::STANDARD_ROUTE_COUNT;

    fn blaze_sample() -> SeriesSpec {
        SeriesSpec {
            name: "blaze".into(),
            start_phase: 1701,
            adjectives: vec!["autonomous".into(), "adaptive-ai".into()],
        }
    }

    #[test]
    fn theme_rotates_through_palette() {
        assert_eq!(Theme::for_phase(1001, 1001).as_str(), "indigo-600");
        assert_eq!(Theme::for_phase(1018, 1001).as_str(), "teal-600");
        assert_eq!(Theme::for_phase(1019, 1001).as_str(), "indigo-600");
        assert_eq!(Theme::for_phase(1631, 1001).as_str(), "indigo-600");
    }

    #[test]
    fn theme_handles_phase_before_base() {
        assert_eq!(Theme::for_phase(1000, 1001).as_str(), "teal-600");
    }

    #[test]
    fn theme_must_be_kebab_case() {
        assert_matches!(Theme::new("Lime 600"), Err(CoreError::Validation(_)));
        assert!(Theme::new("lime-600").is_ok());
    }

    #[test]
    fn suite_domain_slug_and_mount() {
        let d = suite_domain(1632, "order-tracking-automation-suite", Category::Order).unwrap();
        assert_eq!(d.slug, "ebay-order-tracking-automation-suite");
        assert_eq!(d.theme.as_str(), "orange-600");
        assert_eq!(d.mount_path("/api"), "/api/ebay-order-tracking-automation-suite");
        assert_eq!(d.mount_path("/api/"), "/api/ebay-order-tracking-automation-suite");
        assert_eq!(d.table.len(), STANDARD_ROUTE_COUNT);
    }

    #[test]
    fn series_expands_adjective_major() {
        let domains = expand_series(&blaze_sample()).unwrap();
        assert_eq!(domains.len(), 10);
        assert_eq!(domains[0].slug, "ebay-listing-autonomous-engine-blaze");
        assert_eq!(domains[1].slug, "ebay-order-autonomous-routing-blaze");
        assert_eq!(domains[4].slug, "ebay-product-autonomous-analysis-blaze");
        assert_eq!(domains[5].slug, "ebay-listing-adaptive-ai-engine-blaze");
        assert_eq!(domains[9].phase, Some(1710));
        assert_eq!(domains[0].theme.as_str(), "indigo-600");
        assert_eq!(domains[3].theme.as_str(), "slate-600");
    }

    #[test]
    fn series_name_must_be_kebab_case() {
        let mut spec = blaze_sample();
        spec.name = "Blaze".into();
        assert_matches!(expand_series(&spec), Err(CoreError::Validation(_)));
    }

    fn edge_series(start_phase: u32) -> SeriesSpec {
        SeriesSpec {
            name: "edge".into(),
            start_phase,
            adjectives: vec!["x".into()],
        }
    }

    #[test]
    fn series_may_end_on_last_phase() {
        let domains = expand_series(&edge_series(u32::MAX - 4)).unwrap();
        assert_eq!(domains.len(), 5);
        assert_eq!(domains[4].phase, Some(u32::MAX));
    }

    #[test]
    fn series_past_last_phase_rejected() {
        assert_matches!(
            expand_series(&edge_series(u32::MAX - 3)),
            Err(CoreError::Validation(msg)) if msg.contains("last phase")
        );
    }

    #[test]
    fn named_series_fills_omitted_adjectives() {
        let spec = SeriesSpec {
            name: "storm".into(),
            start_phase: 1771,
            adjectives: Vec::new(),
        };
        let domains = expand_series(&spec).unwrap();
        assert_eq!(domains.len(), 70);
        assert_eq!(domains[0].slug, "ebay-listing-resilient-engine-storm");
        assert_eq!(domains[69].phase, Some(1840));
    }

    #[test]
    fn unknown_series_without_adjectives_rejected() {
        let spec = SeriesSpec {
            name: "unheard-of".into(),
            start_phase: 1,
            adjectives: Vec::new(),
        };
        assert_matches!(
            expand_series(&spec),
            Err(CoreError::Validation(msg)) if msg.contains("not a built-in series")
        );
    }

    #[test]
    fn reserved_slug_rejected() {
        let result = Domain::new(
            "catalog",
            None,
            Category::Seller,
            Theme::new("lime-600").unwrap(),
            Blueprint::Suite,
            crate::blueprint::suite_table().unwrap(),
        );
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("reserved"));
    }

    #[test]
    fn empty_table_rejected() {
        let result = Domain::new(
            "ebay-empty",
            None,
            Category::Seller,
            Theme::new("lime-600").unwrap(),
            Blueprint::Custom,
            RouteTable::default(),
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn duplicate_slug_is_conflict() {
        let mut catalog = Catalog::new();
        let d = suite_domain(1631, "listing-dynamic-pricing-suite", Category::Listing).unwrap();
        catalog.insert(d.clone()).unwrap();
        assert_matches!(catalog.insert(d), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = Catalog::new();
        assert_matches!(
            catalog.get("nope"),
            Err(CoreError::NotFound { entity: "Domain", key }) if key == "nope"
        );
    }

    #[test]
    fn every_tab_points_at_a_get_route() {
        let catalog = Catalog::builtin().unwrap();
        for domain in catalog.iter() {
            let tabs = domain.tabs();
            assert!(!tabs.is_empty(), "{} has no tabs", domain.slug);
            for tab in tabs {
                let path = format!("/{}", tab.path);
                assert!(
                    domain.table.find(HttpMethod::Get, &path).is_some(),
                    "tab {} of {} points at missing route {path}",
                    tab.key,
                    domain.slug
                );
            }
        }
    }

    #[test]
    fn suite_and_series_tab_vocabulary() {
        let suite = suite_domain(1633, "inventory-demand-forecasting-suite", Category::Inventory)
            .unwrap();
        let keys: Vec<_> = suite.tabs().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, ["dashboard", "inventory", "operations", "planning", "analytics", "settings"]);

        let series = expand_series(&blaze_sample()).unwrap();
        let inventory = &series[2];
        let keys: Vec<_> = inventory.tabs().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, ["dashboard", "inventory", "operations", "forecasting", "analytics", "settings"]);
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 70 + 70 + 1);
        assert!(catalog.get("ebay-listing-dynamic-pricing-suite").is_ok());
        assert!(catalog.get("ebay-product-computational-analysis-blaze").is_ok());
        assert!(catalog.get("ebay-seller-score-optimizer").is_ok());
        assert!(catalog.route_count() > 140 * STANDARD_ROUTE_COUNT - 10);
    }
}
