//! SQLite Preflight
//!
//! Reports the linked SQLite version and checks it against the minimum
//! ChromaDB supports. Below the minimum the server child is started
//! with `CHROMA_IGNORE_VERSION=True` so the application can still come
//! up against an older library.

use tracing::{info, warn};

/// Minimum SQLite version ChromaDB works with.
pub const MIN_SQLITE_VERSION: (u32, u32, u32) = (3, 35, 0);

/// Environment variable that tells ChromaDB to skip its own version check.
pub const CHROMA_IGNORE_VERSION: &str = "CHROMA_IGNORE_VERSION";

/// Result of the SQLite preflight check.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    /// Version string of the linked SQLite library, e.g. "3.45.0".
    pub sqlite_version: String,
    /// Whether the version meets [`MIN_SQLITE_VERSION`].
    pub meets_minimum: bool,
}

impl PreflightReport {
    /// Environment variables the server child must receive because of
    /// this check.
    pub fn server_env(&self) -> Vec<(String, String)> {
        if self.meets_minimum {
            Vec::new()
        } else {
            vec![(CHROMA_IGNORE_VERSION.to_string(), "True".to_string())]
        }
    }
}

/// Run the preflight check against the linked SQLite library.
pub fn check_sqlite() -> PreflightReport {
    let sqlite_version = rusqlite::version().to_string();
    let meets_minimum = meets_minimum(rusqlite::version_number());

    info!("SQLite version: {}", sqlite_version);
    if !meets_minimum {
        let (major, minor, patch) = MIN_SQLITE_VERSION;
        warn!(
            "SQLite version {} is below the recommended minimum {}.{}.{}; \
             ChromaDB may not work properly with this version",
            sqlite_version, major, minor, patch
        );
    }

    PreflightReport {
        sqlite_version,
        meets_minimum,
    }
}

/// SQLITE_VERSION_NUMBER packs the version as
/// `major * 1_000_000 + minor * 1_000 + patch`.
fn meets_minimum(version_number: i32) -> bool {
    let (major, minor, patch) = MIN_SQLITE_VERSION;
    version_number >= (major * 1_000_000 + minor * 1_000 + patch) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_below_minimum() {
        assert!(!meets_minimum(3_034_999));
        assert!(!meets_minimum(3_031_001));
    }

    #[test]
    fn test_version_at_and_above_minimum() {
        assert!(meets_minimum(3_035_000));
        assert!(meets_minimum(3_045_001));
    }

    #[test]
    fn test_old_library_requests_chroma_override() {
        let report = PreflightReport {
            sqlite_version: "3.31.1".to_string(),
            meets_minimum: false,
        };
        let env = report.server_env();
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].0, CHROMA_IGNORE_VERSION);
        assert_eq!(env[0].1, "True");
    }

    #[test]
    fn test_current_library_needs_no_override() {
        let report = PreflightReport {
            sqlite_version: "3.45.0".to_string(),
            meets_minimum: true,
        };
        assert!(report.server_env().is_empty());
    }

    #[test]
    fn test_bundled_library_meets_minimum() {
        // The bundled SQLite shipped with rusqlite is well past 3.35.0.
        let report = check_sqlite();
        assert!(report.meets_minimum);
    }
}
