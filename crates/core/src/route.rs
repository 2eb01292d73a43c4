//! Declarative route-table records.
//!
//! A [`RouteTable`] is the data form of one stub router: an ordered list of
//! [`RouteSpec`] entries, each binding an HTTP method and a path template to a
//! `(section, action)` identity plus a [`ResponseShape`]. Tables are built
//! once at startup and never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a section or action name.
pub const MAX_NAME_LENGTH: usize = 64;

/// Keys the echo payload writes itself. Path parameters may not use them.
pub const RESERVED_PAYLOAD_KEYS: &[&str] = &["section", "action", "theme", "timestamp", "body"];

/// Kebab-case identifier: `summary`, `score-breakdown`, `competitor-scores`.
static KEBAB_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

static PARAM_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

static STATIC_SEGMENT_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z0-9._~-]+$").expect("valid regex"));

/// Returns `true` if `name` is a non-empty kebab-case identifier.
pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_RE.is_match(name)
}

// ---------------------------------------------------------------------------
// HTTP method
// ---------------------------------------------------------------------------

/// HTTP verb a route is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body that gets echoed.
    pub fn accepts_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(CoreError::Validation(format!(
                "Unsupported HTTP method '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Path templates
// ---------------------------------------------------------------------------

/// One `/`-separated piece of a [`PathTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed URL template such as `/disputes/:id/respond`.
///
/// Both the colon style (`:id`) and the brace style (`{id}`) are accepted on
/// input. [`fmt::Display`] renders the colon style; [`Self::to_router_path`]
/// renders the brace style the HTTP router expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template.
    ///
    /// Rules: must start with `/`, no empty segments (so no `//` and no
    /// trailing slash except the bare root), parameter names are
    /// identifiers, and a parameter name may appear only once.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(CoreError::Validation(format!(
                "Path template must start with '/': '{raw}'"
            )));
        };
        if rest.is_empty() {
            return Ok(Self {
                segments: Vec::new(),
            });
        }

        let mut segments = Vec::new();
        for part in rest.split('/') {
            if part.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Path template contains an empty segment: '{raw}'"
                )));
            }

            let param = part
                .strip_prefix(':')
                .or_else(|| part.strip_prefix('{').and_then(|p| p.strip_suffix('}')));

            match param {
                Some(name) => {
                    if !PARAM_RE.is_match(name) {
                        return Err(CoreError::Validation(format!(
                            "Invalid path parameter name '{name}' in '{raw}'"
                        )));
                    }
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                    {
                        return Err(CoreError::Validation(format!(
                            "Path parameter '{name}' appears more than once in '{raw}'"
                        )));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => {
                    if !STATIC_SEGMENT_RE.is_match(part) {
                        return Err(CoreError::Validation(format!(
                            "Invalid path segment '{part}' in '{raw}'"
                        )));
                    }
                    segments.push(Segment::Static(part.to_string()));
                }
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in positional order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    pub fn has_params(&self) -> bool {
        self.params().next().is_some()
    }

    /// Brace-style path (`/views/{id}`) for the HTTP router.
    pub fn to_router_path(&self) -> String {
        self.render(|name| format!("{{{name}}}"))
    }

    /// The template with every parameter name erased (`/views/{}`).
    ///
    /// Two templates with the same shape key match exactly the same URLs.
    pub fn shape_key(&self) -> String {
        self.render(|_| "{}".to_string())
    }

    /// Match a concrete request path, returning the captured parameters.
    ///
    /// Captured values are returned verbatim; no decoding is applied.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => captured.push((name.clone(), part.to_string())),
            }
        }
        Some(captured)
    }

    fn render(&self, param: impl Fn(&str) -> String) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(name) => out.push_str(&param(name)),
            }
        }
        out
    }

    /// Precedence key: static segments sort before parameters, position by
    /// position, so the most specific template wins.
    fn specificity(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(_) => 0,
                Segment::Param(_) => 1,
            })
            .collect()
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|name| format!(":{name}")))
    }
}

impl FromStr for PathTemplate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.to_string()
    }
}

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// Success status an echo handler replies with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum EchoStatus {
    #[default]
    Ok,
    Created,
}

impl EchoStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
        }
    }
}

impl TryFrom<u16> for EchoStatus {
    type Error = CoreError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Self::Ok),
            201 => Ok(Self::Created),
            other => Err(CoreError::Validation(format!(
                "Echo status must be 200 or 201 (got {other})"
            ))),
        }
    }
}

impl From<EchoStatus> for u16 {
    fn from(status: EchoStatus) -> Self {
        status.code()
    }
}

/// What an echo handler adds on top of `{ section, action }`.
///
/// Path parameters and request bodies are not switched here: parameters are
/// always echoed, and bodies are echoed whenever the method accepts one and
/// the request sent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseShape {
    pub status: EchoStatus,
    pub theme: bool,
    pub timestamp: bool,
}

// ---------------------------------------------------------------------------
// Route spec
// ---------------------------------------------------------------------------

/// One `(method, path) -> (section, action)` binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub method: HttpMethod,
    pub path: PathTemplate,
    pub section: String,
    pub action: String,
    #[serde(default)]
    pub shape: ResponseShape,
}

impl RouteSpec {
    pub fn new(
        method: HttpMethod,
        path: &str,
        section: &str,
        action: &str,
    ) -> Result<Self, CoreError> {
        let spec = Self {
            method,
            path: PathTemplate::parse(path)?,
            section: section.to_string(),
            action: action.to_string(),
            shape: ResponseShape::default(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check names and parameter keys.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name("section", &self.section)?;
        validate_name("action", &self.action)?;
        for param in self.path.params() {
            if RESERVED_PAYLOAD_KEYS.contains(&param) {
                return Err(CoreError::Validation(format!(
                    "Path parameter '{param}' in {} {} collides with a reserved payload key",
                    self.method, self.path
                )));
            }
        }
        Ok(())
    }
}

fn validate_name(kind: &str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(format!("Route {kind} must not be empty")));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Route {kind} exceeds maximum length of {MAX_NAME_LENGTH} characters (got {})",
            name.len()
        )));
    }
    if !is_kebab_case(name) {
        return Err(CoreError::Validation(format!(
            "Route {kind} '{name}' must be kebab-case"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

/// A route resolved against a concrete request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub spec: &'a RouteSpec,
    pub params: Vec<(String, String)>,
}

/// Ordered collection of [`RouteSpec`]s for one domain.
///
/// Declaration order is preserved; it only matters when listing routes, since
/// matching prefers static segments over parameters regardless of order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Build a table from already-parsed specs, validating it.
    pub fn from_routes(routes: Vec<RouteSpec>) -> Result<Self, CoreError> {
        let table = Self { routes };
        table.validate()?;
        Ok(table)
    }

    /// Validate every spec and reject routes the router cannot register
    /// side by side.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen: HashSet<(HttpMethod, String)> = HashSet::new();
        let mut by_shape: HashMap<String, &PathTemplate> = HashMap::new();

        for spec in &self.routes {
            spec.validate()?;

            let shape = spec.path.shape_key();
            if let Some(existing) = by_shape.get(&shape) {
                if !existing.params().eq(spec.path.params()) {
                    return Err(CoreError::Conflict(format!(
                        "Path templates '{existing}' and '{}' match the same URLs with different parameter names",
                        spec.path
                    )));
                }
            } else {
                by_shape.insert(shape.clone(), &spec.path);
            }

            if !seen.insert((spec.method, shape)) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate route {} {}",
                    spec.method, spec.path
                )));
            }
        }
        Ok(())
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Distinct section names in declaration order.
    pub fn sections(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for spec in &self.routes {
            if !out.contains(&spec.section.as_str()) {
                out.push(&spec.section);
            }
        }
        out
    }

    pub fn routes_for<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a RouteSpec> {
        self.routes.iter().filter(move |r| r.section == section)
    }

    /// Resolve a request to its route. Static segments win over parameters.
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .filter(|spec| spec.method == method)
            .filter_map(|spec| spec.path.matches(path).map(|params| RouteMatch { spec, params }))
            .min_by_key(|m| m.spec.path.specificity())
    }

    /// Turn the theme and timestamp extras on or off for every route.
    pub fn with_extras(mut self, theme: bool, timestamp: bool) -> Self {
        for spec in &mut self.routes {
            spec.shape.theme = theme;
            spec.shape.timestamp = timestamp;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

struct PendingRoute {
    method: HttpMethod,
    path: String,
    section: String,
    action: String,
    status: EchoStatus,
}

/// Fluent builder used by the blueprints and hand-written tables.
///
/// ```
/// use rakuda_core::route::RouteTable;
///
/// let table = RouteTable::builder()
///     .section("settings", |s| s.get("/settings", "get").put("/settings", "update"))
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Default)]
pub struct RouteTableBuilder {
    pending: Vec<PendingRoute>,
}

impl RouteTableBuilder {
    /// Declare the routes of one section.
    pub fn section(mut self, name: &str, routes: impl FnOnce(SectionBuilder) -> SectionBuilder) -> Self {
        let section = routes(SectionBuilder {
            name: name.to_string(),
            pending: Vec::new(),
        });
        self.pending.extend(section.pending);
        self
    }

    /// Parse every template and validate the finished table.
    pub fn build(self) -> Result<RouteTable, CoreError> {
        let routes = self
            .pending
            .into_iter()
            .map(|p| {
                let mut spec = RouteSpec::new(p.method, &p.path, &p.section, &p.action)?;
                spec.shape.status = p.status;
                Ok(spec)
            })
            .collect::<Result<Vec<_>, CoreError>>()?;
        RouteTable::from_routes(routes)
    }
}

/// Routes of a single section; see [`RouteTableBuilder::section`].
pub struct SectionBuilder {
    name: String,
    pending: Vec<PendingRoute>,
}

impl SectionBuilder {
    pub fn route(mut self, method: HttpMethod, path: &str, action: &str) -> Self {
        self.pending.push(PendingRoute {
            method,
            path: path.to_string(),
            section: self.name.clone(),
            action: action.to_string(),
            status: EchoStatus::Ok,
        });
        self
    }

    pub fn get(self, path: &str, action: &str) -> Self {
        self.route(HttpMethod::Get, path, action)
    }

    pub fn post(self, path: &str, action: &str) -> Self {
        self.route(HttpMethod::Post, path, action)
    }

    pub fn put(self, path: &str, action: &str) -> Self {
        self.route(HttpMethod::Put, path, action)
    }

    pub fn patch(self, path: &str, action: &str) -> Self {
        self.route(HttpMethod::Patch, path, action)
    }

    pub fn delete(self, path: &str, action: &str) -> Self {
        self.route(HttpMethod::Delete, path, action)
    }

    /// Reply 201 instead of 200 on the most recently declared route.
    pub fn created(mut self) -> Self {
        if let Some(last) = self.pending.last_mut() {
            last.status = EchoStatus::Created;
        }
        self
    }
}
