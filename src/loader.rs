//! Definition loading: build the registry from one or more definition sources.
//!
//! Each section of a definition source names a key. Fields within the section
//! update that key's definition in place, in source order:
//!
//! | Field         | Effect                                                  |
//! |---------------|---------------------------------------------------------|
//! | `description` | free text, truncated to capacity                        |
//! | `define`      | output symbol, truncated to capacity                    |
//! | `type`        | declared type; unknown names warn and become `string`   |
//! | `value`       | default value, parsed against the type declared *so far* |
//! | `required`    | boolean-ish flag                                        |
//!
//! Because `value` is parsed against the type in effect when it is read, a
//! `type` line must come before the `value` line it governs. Sources are
//! applied one after another and later fields overwrite earlier ones.

use std::path::Path;

use tracing::{debug, trace};

use crate::diagnostics::Diagnostics;
use crate::error::Warning;
use crate::ini::{self, SyntaxError};
use crate::registry::Registry;
use crate::value::{parse_boolean, parse_type, parse_value};

/// Apply every entry of a definition source to `registry`.
///
/// `origin` names the source in diagnostics. The whole source is read before
/// anything is applied: on a syntax error the registry is left untouched and
/// the error is returned. Returns the number of entries applied otherwise.
pub fn apply_definitions<D: Diagnostics>(
    registry: &mut Registry,
    origin: &str,
    content: &str,
    diag: &mut D,
) -> Result<usize, SyntaxError> {
    let entries = ini::entries(content).collect::<Result<Vec<_>, _>>()?;
    for entry in &entries {
        apply_field(registry, origin, &entry.section, &entry.key, &entry.value, diag);
    }
    Ok(entries.len())
}

fn apply_field<D: Diagnostics>(
    registry: &mut Registry,
    origin: &str,
    section: &str,
    key: &str,
    text: &str,
    diag: &mut D,
) {
    trace!(origin, section, key, "definition field");
    let def = registry.get_or_create(section);

    match key {
        "description" => def.description.set(text),
        "define" => def.symbol.set(text),
        "type" => {
            def.declared_type = match parse_type(text) {
                Ok(ty) => ty,
                Err(unknown) => {
                    diag.warn(Warning::UnparsableField {
                        origin: origin.to_string(),
                        name: def.name.to_string(),
                        field: "type",
                        text: text.to_string(),
                    });
                    unknown.fallback()
                }
            };
        }
        "value" => match parse_value(text, def.declared_type) {
            Ok(value) => def.assign(value),
            Err(_) => diag.warn(Warning::UnparsableField {
                origin: origin.to_string(),
                name: def.name.to_string(),
                field: "value",
                text: text.to_string(),
            }),
        },
        "required" => def.required = parse_boolean(text),
        _ => diag.warn(Warning::UnknownField {
            origin: origin.to_string(),
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

/// Read one definition file into `registry`.
///
/// An unreadable file or a syntax error is reported as a warning and the file
/// is skipped; loading of other sources is unaffected. Returns whether the
/// file was applied.
pub fn load_definition_file<D: Diagnostics>(
    registry: &mut Registry,
    path: &Path,
    diag: &mut D,
) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            diag.warn(Warning::DefinitionsUnreadable {
                path: path.to_path_buf(),
                source: e,
            });
            return false;
        }
    };

    let origin = path.display().to_string();
    match apply_definitions(registry, &origin, &content, diag) {
        Ok(count) => {
            debug!(path = %origin, entries = count, "loaded definitions");
            true
        }
        Err(SyntaxError { line }) => {
            diag.warn(Warning::DefinitionsSyntax {
                path: path.to_path_buf(),
                line,
            });
            false
        }
    }
}
