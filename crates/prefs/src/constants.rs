//! Centralized constants for the preference layer.
//!
//! Defaults shared by the namespace builder and the environment override.

// =============================================================================
// Namespace Defaults
// =============================================================================

/// Root branch under which extension preferences live in the host store.
pub const DEFAULT_PREF_ROOT: &str = "extensions";

/// Application namespace appended to the root branch.
pub const DEFAULT_APP_NAMESPACE: &str = "notero";

/// Separator between path segments of a fully-qualified preference name.
pub const PREF_PATH_SEPARATOR: char = '.';

// =============================================================================
// Environment Overrides
// =============================================================================

/// Environment variable that overrides the application namespace.
pub const NAMESPACE_ENV_VAR: &str = "NOTERO_PREF_NAMESPACE";
