// Single source of truth for all default values.

// --- Consensus ---
pub const DEFAULT_STRICT_DUPLICATES: bool = true;
pub const DEFAULT_MAX_OBJECTS: usize = 4_096;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
