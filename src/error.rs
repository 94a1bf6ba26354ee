use std::path::PathBuf;

use thiserror::Error;

/// A condition that stops the run.
#[derive(Debug, Error)]
pub enum DefconError {
    #[error("no definition files")]
    NoDefinitionFiles,

    #[error("{path}: {source}")]
    ValuesUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: parse error on line {line}")]
    ValuesSyntax { path: PathBuf, line: usize },

    #[error("key {key} requires a value!")]
    RequiredValueMissing { key: String },
}

/// A condition that is reported and skipped.
///
/// `Display` renders the complete diagnostic line, `<context>: warning: <message>`.
#[derive(Debug, Error)]
pub enum Warning {
    #[error("{path}: warning: {source}")]
    DefinitionsUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: warning: parse error on line {line}")]
    DefinitionsSyntax { path: PathBuf, line: usize },

    #[error("{origin}:{section}: warning: unknown key: {key}")]
    UnknownField {
        origin: String,
        section: String,
        key: String,
    },

    #[error("{origin}:{name}:{field}: warning: unable to parse: {text}")]
    UnparsableField {
        origin: String,
        name: String,
        field: &'static str,
        text: String,
    },

    #[error("{origin}: warning: undefined key: {key}")]
    UndefinedKey { origin: String, key: String },

    #[error("{origin}:{key}: warning: unable to parse: {text}")]
    UnparsableValue {
        origin: String,
        key: String,
        text: String,
    },

    #[error("{name}: warning: no definition string")]
    MissingSymbol { name: String },

    #[error("{path}: warning: unable to open file: {source}")]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}
