//! Value resolution: apply the values file on top of the loaded definitions.
//!
//! The values file is a flat list of `KEY = value` pairs. Section headers are
//! tolerated but ignored; each key is looked up directly by definition name.
//!
//! - Unknown keys are reported (unless suppressed) and skipped. They never
//!   create a definition.
//! - Known keys are parsed against the declared type. A successful parse
//!   replaces the current value; a failed one is reported and leaves the
//!   definition exactly as it was.
//!
//! Unlike definition sources, the values file is mandatory: if it cannot be
//! read or is malformed, the run stops.

use std::path::Path;

use tracing::{debug, trace};

use crate::diagnostics::Diagnostics;
use crate::error::{DefconError, Warning};
use crate::ini::{self, SyntaxError};
use crate::registry::Registry;
use crate::value::parse_value;

/// Options for a resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Do not report keys that match no definition.
    pub suppress_undefined: bool,
}

/// Counters describing what a resolution pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub assigned: usize,
    pub undefined: usize,
    pub rejected: usize,
}

/// Apply the pairs in `content` to `registry`.
///
/// Stops at the first syntax error, with earlier pairs already applied.
pub fn apply_values<D: Diagnostics>(
    registry: &mut Registry,
    origin: &str,
    content: &str,
    options: ResolveOptions,
    diag: &mut D,
) -> Result<ResolveStats, SyntaxError> {
    let mut stats = ResolveStats::default();

    for entry in ini::entries(content) {
        let entry = entry?;
        let Some(def) = registry.find_mut(&entry.key) else {
            stats.undefined += 1;
            if !options.suppress_undefined {
                diag.warn(Warning::UndefinedKey {
                    origin: origin.to_string(),
                    key: entry.key,
                });
            }
            continue;
        };

        match parse_value(&entry.value, def.declared_type) {
            Ok(value) => {
                trace!(key = %entry.key, value = %value, "resolved");
                def.assign(value);
                stats.assigned += 1;
            }
            Err(_) => {
                stats.rejected += 1;
                diag.warn(Warning::UnparsableValue {
                    origin: origin.to_string(),
                    key: entry.key,
                    text: entry.value,
                });
            }
        }
    }

    Ok(stats)
}

/// Read the values file at `path` and apply it to `registry`.
pub fn resolve_values_file<D: Diagnostics>(
    registry: &mut Registry,
    path: &Path,
    options: ResolveOptions,
    diag: &mut D,
) -> Result<ResolveStats, DefconError> {
    let content = std::fs::read_to_string(path).map_err(|e| DefconError::ValuesUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let origin = path.display().to_string();
    let stats = apply_values(registry, &origin, &content, options, diag).map_err(
        |SyntaxError { line }| DefconError::ValuesSyntax {
            path: path.to_path_buf(),
            line,
        },
    )?;

    debug!(
        path = %origin,
        assigned = stats.assigned,
        undefined = stats.undefined,
        rejected = stats.rejected,
        "resolved values"
    );
    Ok(stats)
}
