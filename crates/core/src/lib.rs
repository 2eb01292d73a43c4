//! Route tables, blueprints and the domain catalog for the stub router.
//!
//! Nothing in this crate touches HTTP. The `rakuda-api` crate turns a
//! [`catalog::Catalog`] into mounted axum routers.

pub mod blueprint;
pub mod builtin;
pub mod catalog;
pub mod echo;
pub mod error;
pub mod manifest;
pub mod route;
