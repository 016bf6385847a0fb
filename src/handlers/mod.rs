// ---------------------------------------------------------------------------
// handlers/ — HTTP surface
// mod.rs re-exports all public items so that `crate::handlers::*` paths stay
// stable for lib.rs routing and the OpenApi derive.
// ---------------------------------------------------------------------------

// Sub-modules are pub(crate) so utoipa __path_* types are accessible from lib.rs OpenApi derive.
pub(crate) mod metrics;
pub(crate) mod system;
#[cfg(test)]
mod tests;

pub use metrics::sysinfo;
pub use system::{health, openapi_json, readiness};

// ── utoipa __path_* re-exports ───────────────────────────────────────────────
// The #[utoipa::path] attribute macro generates private structs like __path_health.
// The OpenApi derive in lib.rs expects them at `handlers::__path_health`.
pub use metrics::__path_sysinfo;
pub use system::{__path_health, __path_readiness};
