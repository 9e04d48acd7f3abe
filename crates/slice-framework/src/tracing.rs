//! # Observability & Tracing
//!
//! Structured logging for slices, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Slice lifecycle**: `Slice started` and `Shutdown` with the final status
//! - **Requests**: every dispatch (`debug`, with the operation), every settled request
//!   (`info` on success, `warn` on failure)
//! - **Stale responses**: completions discarded because a newer request was issued (`debug`)
//!
//! Every event carries a `slice` field naming the resource, so one resource can be
//! followed through interleaved output:
//!
//! ```text
//! INFO Slice started slice="students"
//! INFO Succeeded slice="students" generation=1
//! WARN Failed slice="company_types" generation=2 error=Network error
//! ```
//!
//! ## Configuration
//!
//! ```bash
//! RUST_LOG=info cargo run      # transitions only
//! RUST_LOG=debug cargo run     # operations and stale responses as well
//! ```

/// Initializes the global subscriber with `RUST_LOG` filtering and the compact format.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // the slice field already names the source
        .compact()
        .init();
}
