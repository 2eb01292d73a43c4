//! Built-in domain data served when no catalog manifest is configured.

use crate::blueprint::Blueprint;
use crate::catalog::{Category, Domain, SeriesSpec, Theme};
use crate::error::CoreError;
use crate::route::RouteTable;

/// Suite-layout domains: `(phase, name, category)`.
pub const SUITES: &[(u32, &str, Category)] = &[
    (1631, "listing-dynamic-pricing-suite", Category::Listing),
    (1632, "order-tracking-automation-suite", Category::Order),
    (1633, "inventory-demand-forecasting-suite", Category::Inventory),
    (1634, "seller-performance-analytics-suite", Category::Seller),
    (1635, "product-catalog-management-suite", Category::Product),
    (1636, "listing-seo-optimization-suite", Category::Listing),
    (1637, "order-fulfillment-management-suite", Category::Order),
    (1638, "inventory-warehouse-management-suite", Category::Inventory),
    (1639, "seller-customer-engagement-suite", Category::Seller),
    (1640, "product-pricing-intelligence-suite", Category::Product),
    (1641, "listing-template-management-suite", Category::Listing),
    (1642, "order-returns-processing-suite", Category::Order),
    (1643, "inventory-stock-control-suite", Category::Inventory),
    (1644, "seller-reputation-management-suite", Category::Seller),
    (1645, "product-image-optimization-suite", Category::Product),
    (1646, "listing-bulk-management-suite", Category::Listing),
    (1647, "order-payment-processing-suite", Category::Order),
    (1648, "inventory-supplier-management-suite", Category::Inventory),
    (1649, "seller-compliance-monitoring-suite", Category::Seller),
    (1650, "product-description-generator-suite", Category::Product),
    (1651, "listing-competitive-analysis-suite", Category::Listing),
    (1652, "order-logistics-management-suite", Category::Order),
    (1653, "inventory-cycle-counting-suite", Category::Inventory),
    (1654, "seller-financial-reporting-suite", Category::Seller),
    (1655, "product-variant-management-suite", Category::Product),
    (1656, "listing-conversion-optimization-suite", Category::Listing),
    (1657, "order-dispute-resolution-suite", Category::Order),
    (1658, "inventory-quality-inspection-suite", Category::Inventory),
    (1659, "seller-account-management-suite", Category::Seller),
    (1660, "product-category-optimization-suite", Category::Product),
    (1661, "listing-market-research-suite", Category::Listing),
    (1662, "order-batch-processing-suite", Category::Order),
    (1663, "inventory-transfer-management-suite", Category::Inventory),
    (1664, "seller-growth-strategy-suite", Category::Seller),
    (1665, "product-review-management-suite", Category::Product),
    (1666, "listing-international-expansion-suite", Category::Listing),
    (1667, "order-customer-service-suite", Category::Order),
    (1668, "inventory-allocation-planning-suite", Category::Inventory),
    (1669, "seller-marketing-automation-suite", Category::Seller),
    (1670, "product-sourcing-intelligence-suite", Category::Product),
    (1671, "listing-analytics-dashboard-suite", Category::Listing),
    (1672, "order-invoice-management-suite", Category::Order),
    (1673, "inventory-expiration-tracking-suite", Category::Inventory),
    (1674, "seller-training-resource-suite", Category::Seller),
    (1675, "product-authentication-service-suite", Category::Product),
    (1676, "listing-promotion-management-suite", Category::Listing),
    (1677, "order-consolidation-management-suite", Category::Order),
    (1678, "inventory-safety-stock-suite", Category::Inventory),
    (1679, "seller-feedback-analysis-suite", Category::Seller),
    (1680, "product-cross-listing-suite", Category::Product),
    (1681, "listing-scheduling-optimization-suite", Category::Listing),
    (1682, "order-workflow-automation-suite", Category::Order),
    (1683, "inventory-optimization-engine-suite", Category::Inventory),
    (1684, "seller-data-analytics-suite", Category::Seller),
    (1685, "product-trend-analysis-suite", Category::Product),
    (1686, "listing-quality-assurance-suite", Category::Listing),
    (1687, "order-priority-management-suite", Category::Order),
    (1688, "inventory-audit-management-suite", Category::Inventory),
    (1689, "seller-partnership-management-suite", Category::Seller),
    (1690, "product-lifecycle-management-suite", Category::Product),
    (1691, "listing-personalization-engine-suite", Category::Listing),
    (1692, "order-notification-management-suite", Category::Order),
    (1693, "inventory-replenishment-planning-suite", Category::Inventory),
    (1694, "seller-certification-management-suite", Category::Seller),
    (1695, "product-compliance-checking-suite", Category::Product),
    (1696, "listing-visibility-booster-suite", Category::Listing),
    (1697, "order-escalation-handling-suite", Category::Order),
    (1698, "inventory-distribution-planning-suite", Category::Inventory),
    (1699, "seller-revenue-optimization-suite", Category::Seller),
    (1700, "product-enrichment-pipeline-suite", Category::Product),
];

/// Phase the built-in `blaze` series starts at, right after the suites.
pub const BLAZE_START_PHASE: u32 = 1701;

/// Adjective sets of the named series, `(name, adjectives)`. A manifest series
/// that omits `adjectives` takes them from here.
#[rustfmt::skip]
pub const NAMED_SERIES: &[(&str, &[&str])] = &[
    ("blaze", &[
        "autonomous", "cognitive", "generative", "semantic", "contextual", "adaptive-ai",
        "neural", "deep", "reinforced", "evolutionary", "probabilistic", "heuristic",
        "algorithmic", "computational",
    ]),
    ("storm", &[
        "resilient", "fault-tolerant", "redundant", "recoverable", "durable", "persistent",
        "consistent", "available", "partitioned", "replicated", "sharded", "clustered",
        "federated", "synchronized",
    ]),
    ("wave", &[
        "event-driven", "stream", "pipeline", "workflow", "orchestrated", "choreographed",
        "message", "queue", "pub-sub", "broadcast", "multicast", "unicast", "bidirectional",
        "asynchronous",
    ]),
    ("prism", &[
        "observable", "traceable", "auditable", "loggable", "monitorable", "measurable",
        "quantifiable", "benchmarkable", "profileable", "debuggable", "inspectable",
        "diagnosable", "analyzable", "reportable",
    ]),
    ("nexus", &[
        "composable-v2", "modular-v2", "pluggable-v2", "extensible-v2", "configurable-v2",
        "customizable", "themeable", "localizable", "accessible", "responsive-v2",
        "progressive", "isomorphic", "universal", "hybrid-v2",
    ]),
    ("forge", &[
        "secure", "encrypted", "authenticated", "authorized", "validated", "sanitized",
        "hardened", "isolated", "sandboxed", "containerized", "immutable", "versioned",
        "cacheable", "optimizable",
    ]),
    ("drift", &[
        "temporal", "scheduled", "periodic", "recurring", "triggered", "delayed", "throttled",
        "debounced", "batched", "queued", "prioritized", "weighted", "balanced",
        "distributed-v2",
    ]),
    ("arc", &[
        "graph-based", "tree-based", "node-based", "edge-based", "mesh-based", "hierarchical",
        "flat", "nested", "recursive", "iterative", "parallel", "sequential", "concurrent",
        "transactional",
    ]),
    ("vortex", &[
        "data-driven", "model-driven", "domain-driven", "event-sourced", "cqrs-based",
        "saga-based", "state-machine", "finite-state", "reactive-v2", "functional",
        "declarative", "imperative", "procedural", "object-oriented",
    ]),
    ("echo", &[
        "cloud-native", "serverless", "microservice", "monolithic", "modular-v3", "layered",
        "hexagonal", "clean-arch", "onion-arch", "vertical-slice", "feature-based",
        "domain-based", "service-based", "component-based",
    ]),
    ("cipher", &[
        "zero-trust", "end-to-end", "blockchain", "tokenized", "obfuscated", "decentralized",
        "verifiable", "trustless", "permissioned", "multi-sig", "zero-knowledge", "homomorphic",
        "post-quantum", "threshold",
    ]),
    ("helix", &[
        "genomic", "evolutionary-v2", "mutagenic", "phenotypic", "epigenetic", "proteomic",
        "metabolic", "symbiotic", "biometric", "enzymatic", "catalytic", "polymorphic",
        "recombinant", "transgenic",
    ]),
    ("orbit", &[
        "orbital", "celestial", "gravitational", "interstellar", "planetary", "asteroidal",
        "cometary", "galactic", "nebular", "stellar", "pulsar", "quasar-based", "solar",
        "lunar",
    ]),
    ("matrix", &[
        "tensor", "vectorized", "matrix-based", "scalar", "eigenvalue", "stochastic",
        "deterministic", "gradient", "bayesian", "markov", "fourier", "laplacian", "gaussian",
        "poisson",
    ]),
    ("crystal", &[
        "crystalline", "amorphous", "polymeric", "ceramic", "metallic", "composite",
        "nano-scale", "micro-scale", "macro-scale", "atomic", "molecular", "ionic", "covalent",
        "quantum-dot",
    ]),
    ("dynamo", &[
        "kinetic", "potential", "thermal", "electromagnetic", "photovoltaic", "piezoelectric",
        "thermoelectric", "hydroelectric", "geothermal", "nuclear", "fusion-based",
        "fission-based", "plasma", "superconducting",
    ]),
];

/// Adjectives of a named series, if it is built in.
pub fn series_adjectives(name: &str) -> Option<&'static [&'static str]> {
    NAMED_SERIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, adjectives)| *adjectives)
}

pub fn series() -> Vec<SeriesSpec> {
    vec![SeriesSpec {
        name: "blaze".to_string(),
        start_phase: BLAZE_START_PHASE,
        adjectives: Vec::new(),
    }]
}

/// Hand-written seller score router (phase 362).
pub fn seller_score_optimizer() -> Result<Domain, CoreError> {
    let table = RouteTable::builder()
        .section("dashboard", |s| {
            s.get("/dashboard", "overview")
                .get("/dashboard/summary", "summary")
                .get("/dashboard/score-breakdown", "score-breakdown")
                .get("/dashboard/history", "history")
                .get("/dashboard/goals", "goals")
        })
        .section("metrics", |s| {
            s.get("/metrics", "list")
                .get("/metrics/:id", "detail")
                .post("/metrics/calculate", "calculate")
                .get("/metrics/history", "history")
                .post("/metrics/compare", "compare")
                .get("/metrics/targets", "targets")
        })
        .section("actions", |s| {
            s.get("/actions", "list")
                .get("/actions/:id", "detail")
                .post("/actions", "create")
                .post("/actions/:id/complete", "complete")
        })
        .section("recommendations", |s| {
            s.get("/recommendations", "list")
                .get("/recommendations/:id", "detail")
                .post("/recommendations/:id/apply", "apply")
                .post("/recommendations/:id/dismiss", "dismiss")
        })
        .section("analytics", |s| {
            s.get("/analytics", "overview")
                .get("/analytics/competitor-scores", "competitor-scores")
        })
        .section("settings", |s| s.get("/settings", "get").put("/settings", "update"))
        .section("utilities", |s| {
            s.get("/health", "health")
                .get("/export", "export")
                .post("/import", "import")
                .post("/refresh", "refresh")
        })
        .build()?;

    Domain::new(
        "ebay-seller-score-optimizer",
        Some(362),
        Category::Seller,
        Theme::new("lime-600")?,
        Blueprint::Custom,
        table,
    )
}
