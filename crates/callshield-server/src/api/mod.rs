//! HTTP API surface consumed by the admin console

pub mod rest;

pub use rest::create_router;
