//! Response envelope for the host endpoints.
//!
//! Catalog endpoints wrap their payload as `{ "data": ... }`. Echo handlers
//! do not: their reply is the bare routing identity.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
