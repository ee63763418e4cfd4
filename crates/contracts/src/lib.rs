//! Types shared between the product form (WASM client) and the product API.

pub mod domain;
pub mod shared;
