//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Extractors that reject with the `detail` envelope
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{JsonExtractor, PathExtractor, QueryExtractor};
pub use router::create_router;
pub use types::{AppState, DeletedResponse, HealthResponse, TextMatchQuery};
