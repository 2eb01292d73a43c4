//! Rakuda stub router server library.
//!
//! Exposes the building blocks (config, state, error handling, dispatch,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
