//! Tracing hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is on; the binary decides
//! where events go.

use csvq_core::table::Table;

#[cfg(feature = "tracing")]
pub fn emit_step(op: &str, out: &Table) {
    tracing::debug!(
        op,
        rows = out.num_rows(),
        columns = out.num_columns(),
        "step applied"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn emit_step(_op: &str, _out: &Table) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn emit_failure(op: &str, err: &dyn std::error::Error) {
    tracing::debug!(op, error = %err, "step failed");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_failure(_op: &str, _err: &dyn std::error::Error) { /* no-op */
}
