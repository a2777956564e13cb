//! # Observability & Tracing
//!
//! Every actor logs its lifecycle (`Actor started`, `Shutdown`) and each operation with
//! structured fields: `entity_type` (the collection name), `id` and `size`. State changes
//! log at `info`, reads and full payloads at `debug`, rejected requests and skipped records
//! at `warn`. Client calls open `#[instrument]` spans, so a reservation create shows the
//! nested customer lookup, hotel lookup and room reservation beneath it.
//!
//! ```bash
//! RUST_LOG=info hotel-reservations hotel list    # state changes only
//! RUST_LOG=debug hotel-reservations hotel list   # full payloads
//! ```

/// Installs the global subscriber: `RUST_LOG` filtering, compact format, no module paths
/// (the `entity_type` field already says which actor logged).
///
/// Events go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
