//! HTTP statuses the product form distinguishes.

/// Product was accepted and created.
pub const CREATED_STATUS: u16 = 201;

/// Generic server failure, body is not inspected.
pub const ERROR_SERVER_STATUS: u16 = 500;

/// Server-side validation failure, body is `ApiErrorBody`.
pub const INVALID_REQUEST_STATUS: u16 = 400;
