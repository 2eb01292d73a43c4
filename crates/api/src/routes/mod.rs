pub mod catalog;
pub mod health;

use axum::Router;
use rakuda_core::catalog::Catalog;

use crate::dispatch;
use crate::state::AppState;

/// Build the route tree mounted under the configured prefix.
///
/// ```text
/// /catalog                       list mounted domains
/// /catalog/{slug}                one domain with its tabs and routes
/// /<slug>/...                    echo routes of each domain, in catalog order
/// ```
pub fn api_routes(catalog: &Catalog) -> Router<AppState> {
    let mut router = Router::new().merge(catalog::router());
    for domain in catalog.iter() {
        router = router.nest(&format!("/{}", domain.slug), dispatch::domain_router(domain));
    }
    tracing::debug!(
        domains = catalog.len(),
        routes = catalog.route_count(),
        "Built domain routers"
    );
    router
}
