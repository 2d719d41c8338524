/// Left operand the binary feeds to `add`.
pub const ENTRY_LHS: i64 = 5;

/// Right operand the binary feeds to `add`.
pub const ENTRY_RHS: i64 = 3;

/// Log filter used when `RUST_LOG` is unset. Logs go to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";
