//! Typed configuration values and their text codec.
//!
//! A [`Value`] is always one of five variants. The variant decides both how
//! text is parsed into it ([`parse_value`]) and how it is rendered back
//! ([`Value::format`]). Type names come from definition files and are mapped
//! by [`parse_type`].

use std::fmt;

use thiserror::Error;

use crate::text::{BoundedString, STRING_VALUE_MAX};

/// Text payload of a [`Value::String`].
pub type StringValue = BoundedString<STRING_VALUE_MAX>;

/// The declared type of a definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueType {
    #[default]
    String,
    Integer,
    HexInteger,
    UnsignedInteger,
    Boolean,
}

impl ValueType {
    /// The token used for this type in definition files.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::HexInteger => "hex_integer",
            ValueType::UnsignedInteger => "unsigned_integer",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type name that is not one of the five known tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type '{0}'")]
pub struct UnknownType(pub String);

impl UnknownType {
    /// The type an unrecognized name falls back to.
    pub fn fallback(&self) -> ValueType {
        ValueType::String
    }
}

/// Map a type token to its [`ValueType`].
///
/// Matching is exact and case-sensitive. Anything else, including the empty
/// string, is an [`UnknownType`] whose [`fallback`](UnknownType::fallback) is
/// [`ValueType::String`].
pub fn parse_type(text: &str) -> Result<ValueType, UnknownType> {
    match text {
        "string" => Ok(ValueType::String),
        "integer" => Ok(ValueType::Integer),
        "hex_integer" => Ok(ValueType::HexInteger),
        "unsigned_integer" => Ok(ValueType::UnsignedInteger),
        "boolean" => Ok(ValueType::Boolean),
        other => Err(UnknownType(other.to_string())),
    }
}

/// A configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(StringValue),
    Integer(i64),
    HexInteger(u64),
    UnsignedInteger(u64),
    Boolean(bool),
}

impl Default for Value {
    fn default() -> Self {
        Value::String(StringValue::default())
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Integer(_) => ValueType::Integer,
            Value::HexInteger(_) => ValueType::HexInteger,
            Value::UnsignedInteger(_) => ValueType::UnsignedInteger,
            Value::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Render the value the way generated artifacts spell it.
    ///
    /// Strings are double-quoted, hex integers use `0x` and uppercase digits,
    /// booleans are `1` or `0`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Integer(i) => write!(f, "{i}"),
            Value::HexInteger(u) => write!(f, "0x{u:X}"),
            Value::UnsignedInteger(u) => write!(f, "{u}"),
            Value::Boolean(b) => write!(f, "{}", u8::from(*b)),
        }
    }
}

/// Text that does not fit the grammar of the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse '{text}' as {expected}")]
pub struct ValueParseError {
    pub text: String,
    pub expected: ValueType,
}

/// Coerce `text` into a value of type `ty`.
///
/// - `Integer`: the whole text is a signed decimal integer.
/// - `HexInteger`: a literal `0x` followed by hex digits.
/// - `UnsignedInteger`: the whole text is an unsigned decimal integer.
/// - `Boolean`: never fails, see [`parse_boolean`].
/// - `String`: never fails; the text is truncated to the string capacity.
pub fn parse_value(text: &str, ty: ValueType) -> Result<Value, ValueParseError> {
    let parsed = match ty {
        ValueType::Integer => text.parse::<i64>().ok().map(Value::Integer),
        ValueType::HexInteger => parse_hex(text).map(Value::HexInteger),
        ValueType::UnsignedInteger => text.parse::<u64>().ok().map(Value::UnsignedInteger),
        ValueType::Boolean => Some(Value::Boolean(parse_boolean(text))),
        ValueType::String => Some(Value::String(StringValue::new(text))),
    };
    parsed.ok_or_else(|| ValueParseError {
        text: text.to_string(),
        expected: ty,
    })
}

/// Permissive boolean rule shared by `boolean` values and `required` flags.
///
/// True when the text starts with a nonzero integer (after optional leading
/// whitespace and sign) or is exactly `true`. Everything else is false:
/// `false`, `0`, `yes` and `banana` alike.
pub fn parse_boolean(text: &str) -> bool {
    leading_integer_is_nonzero(text) || text == "true"
}

fn leading_integer_is_nonzero(text: &str) -> bool {
    let rest = text.trim_start();
    let rest = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('+'))
        .unwrap_or(rest);
    rest.chars()
        .take_while(char::is_ascii_digit)
        .any(|c| c != '0')
}

fn parse_hex(text: &str) -> Option<u64> {
    let digits = text.strip_prefix("0x")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
