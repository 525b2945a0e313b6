//! Field-level validation
//!
//! Mirrors what an HTML form enforces before submitting: `required`,
//! numeric input and an input pattern. Anything deeper is the backend's job.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::form::FormField;

/// Shape of an IPv4 address in dotted-quad notation.
const DOTTED_QUAD_PATTERN: &str = r"^([0-9]{1,3}\.){3}[0-9]{1,3}$";

static DOTTED_QUAD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(DOTTED_QUAD_PATTERN).ok());

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldErrorKind {
    /// The field is empty.
    Required,
    /// The field must be a whole number.
    NotNumeric,
    /// The number is outside the accepted range.
    OutOfRange,
    /// The value does not match the field's input pattern.
    PatternMismatch,
}

impl FieldErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            Self::Required => "is required",
            Self::NotNumeric => "must be a whole number",
            Self::OutOfRange => "must be at least 1",
            Self::PatternMismatch => "must be an IPv4 address (e.g. 192.0.2.1)",
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.name(), self.kind.description())
    }
}

/// All rejected fields of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField, kind: FieldErrorKind) {
        self.0.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Error recorded for `field`, if any.
    pub fn for_field(&self, field: FormField) -> Option<FieldErrorKind> {
        self.0.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    /// Drop the error for `field` (called when the user edits it).
    pub fn clear_field(&mut self, field: FormField) {
        self.0.retain(|e| e.field != field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// `required`: empty input is rejected, anything else passes.
pub fn check_required(value: &str) -> Result<(), FieldErrorKind> {
    if value.is_empty() {
        Err(FieldErrorKind::Required)
    } else {
        Ok(())
    }
}

/// TTL in minutes: required, digits only, at least 1.
pub fn parse_ttl(value: &str) -> Result<u32, FieldErrorKind> {
    let value = value.trim();
    check_required(value)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldErrorKind::NotNumeric);
    }
    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err(FieldErrorKind::OutOfRange),
        Ok(minutes) => Ok(minutes),
    }
}

/// Dotted-quad IPv4 address with every octet in `0..=255`.
pub fn is_dotted_quad(host: &str) -> bool {
    let shape_ok = DOTTED_QUAD
        .as_ref()
        .is_some_and(|re| re.is_match(host));
    shape_ok && host.split('.').all(|octet| octet.parse::<u8>().is_ok())
}
