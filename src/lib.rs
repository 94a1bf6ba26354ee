//! Build-time configuration materializer. Declare typed keys, supply values,
//! get a C header and a makefile fragment.
//!
//! Defcon reads one or more **definition files** that describe configuration
//! keys, a single **values file** that assigns them, checks that every
//! required key got a value, and writes artifacts a build can consume:
//!
//! ```text
//! defs.ini + defcon.conf  ──▶  config.h   (#define CONFIG_PORT 8080)
//!                         ──▶  config.mk  (CONFIG_PORT := 8080)
//! ```
//!
//! ```ignore
//! let report = Defcon::builder()
//!     .definition_file("defs.ini")
//!     .values_file("defcon.conf")
//!     .header("config.h")
//!     .makefile("config.mk")
//!     .run(&mut Stderr)?;
//! ```
//!
//! # Definition files
//!
//! INI text, one section per key:
//!
//! ```ini
//! [PORT]
//! description = TCP port to listen on
//! define = PORT
//! type = integer
//! value = 80
//! required = true
//! ```
//!
//! - **`type`** is one of `string`, `integer`, `hex_integer`,
//!   `unsigned_integer`, `boolean`. Anything else is reported and treated as
//!   `string`.
//! - **`value`** is the default. It is parsed against the type declared *so
//!   far*, so put `type` first.
//! - **`define`** is the symbol used in artifacts. A key without one is still
//!   tracked and validated but is left out of every artifact.
//! - **`required`** keys must end up with a value from either a default or
//!   the values file.
//!
//! Several definition files can be given. They are applied in order: later
//! files add keys or overwrite individual fields of existing ones. Artifact
//! lines follow the order in which keys were first seen.
//!
//! # Values file
//!
//! Flat `KEY = value` pairs, looked up by definition name. Unknown keys and
//! values that do not fit the declared type are reported and skipped.
//!
//! # Value types
//!
//! | Type               | Accepts                      | Rendered as     |
//! |--------------------|------------------------------|-----------------|
//! | `string`           | any text (bounded length)    | `"text"`        |
//! | `integer`          | signed decimal               | `-42`           |
//! | `hex_integer`      | `0x` + hex digits            | `0x1F`          |
//! | `unsigned_integer` | unsigned decimal             | `42`            |
//! | `boolean`          | anything (see below)         | `1` / `0`       |
//!
//! Booleans never fail to parse: a leading nonzero number or the literal
//! `true` is true, everything else (`false`, `0`, `no`, `banana`) is false.
//!
//! # Error handling
//!
//! Two severities. Fatal conditions are [`DefconError`] values returned from
//! [`DefconBuilder::run`]: no definition files, an unreadable or malformed
//! values file, or a required key without a value. Everything else is a
//! [`Warning`] passed to the caller's [`Diagnostics`] sink, after which the
//! run continues with the next file, key or artifact.

pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod ini;
pub mod loader;
pub mod registry;
pub mod resolve;
pub mod text;
pub mod types;
pub mod validate;
pub mod value;

mod builder;
#[cfg(feature = "clap")]
mod cli;

#[cfg(test)]
mod fixtures;

pub use builder::{DEFAULT_VALUES_FILE, Defcon, DefconBuilder, Report};
#[cfg(feature = "clap")]
pub use cli::Cli;
pub use diagnostics::{Diagnostics, Stderr};
pub use error::{DefconError, Warning};
pub use registry::{Definition, Registry};
pub use types::{Output, OutputFormat};
pub use value::{Value, ValueType, parse_type, parse_value};
