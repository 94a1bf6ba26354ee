//! Required-value check, run once after the values file has been applied.

use crate::error::DefconError;
use crate::registry::{Definition, Registry};

/// Fail on the first required definition (in registry order) that never
/// received a value.
///
/// Eligibility for output plays no part: a required key without a symbol is
/// still checked.
pub fn check_required(registry: &Registry) -> Result<(), DefconError> {
    match missing_required(registry).next() {
        Some(def) => Err(DefconError::RequiredValueMissing {
            key: def.name.to_string(),
        }),
        None => Ok(()),
    }
}

/// All required definitions without a value, in registry order.
pub fn missing_required(registry: &Registry) -> impl Iterator<Item = &Definition> {
    registry.iter().filter(|def| def.required && !def.has_value)
}
