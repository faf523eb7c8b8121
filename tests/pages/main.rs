//! Catalog page integration tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

mod support;
mod fabrics;
mod fixed;
