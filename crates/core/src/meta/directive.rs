//! Validation and substitution of course-meta directive options.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::errors::MetaError;
use super::node::{MetaNode, SourceLocation};
use super::options::{MetaOptions, OptionName, OptionValue};
use crate::config::Substitutions;

/// Canonical date/time pattern accepted for time-related options:
/// `YYYY-MM-DD [hh[:mm[:ss]]]` or `DD.MM.YYYY [hh[:mm[:ss]]]`.
static DATE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{2}\.\d{2}\.\d{4})( \d{2}(:\d{2}(:\d{2})?)?)?$")
        .expect("valid regex")
});

/// Whether a value already matches the canonical date/time pattern.
///
/// Purely textual: no calendar validity check is performed, so a date like
/// `31.02.2020` passes.
#[must_use]
pub fn is_canonical_date(value: &str) -> bool {
    DATE_FORMAT.is_match(value)
}

/// Resolve one directive instance's options into a metadata node.
///
/// Time-related options must hold a canonical date/time or a substitution
/// key that resolves to one. After validation, any option value (time-related
/// or not) equal to a table key is replaced by the table's entry. Flag
/// options are untouched by both passes. Neither the input mapping nor the
/// table is mutated.
///
/// # Errors
///
/// Returns [`MetaError::InvalidTimeValue`] on the first time-related option
/// whose value is neither canonical nor a key substituting to a canonical
/// value; the error carries the source location, option, offending value,
/// and the invalid substitution result when one existed.
pub fn process(
    options: &MetaOptions,
    substitutions: &Substitutions,
    location: &SourceLocation,
) -> Result<MetaNode, MetaError> {
    let mut resolved = options.clone();

    for (name, value) in options.iter() {
        let Some(raw) = value.as_text() else { continue };

        if name.is_time_related() {
            validate_time(name, raw, substitutions, location)?;
        }
        if let Some(replacement) = substitutions.get(raw) {
            debug!(option = %name, key = raw, value = replacement, "substituted option value");
            resolved.insert(name, OptionValue::Text(replacement.to_string()));
        }
    }

    debug!(
        source = %location.source,
        line = location.line,
        options = resolved.len(),
        "emitting course-meta node"
    );
    Ok(MetaNode { options: resolved, location: location.clone() })
}

/// Checks a time-related option's value, following one substitution step if
/// the raw value is not itself canonical.
fn validate_time(
    option: OptionName,
    value: &str,
    substitutions: &Substitutions,
    location: &SourceLocation,
) -> Result<(), MetaError> {
    if is_canonical_date(value) {
        return Ok(());
    }
    match substitutions.get(value) {
        Some(substituted) if is_canonical_date(substituted) => Ok(()),
        Some(substituted) => Err(MetaError::InvalidTimeValue {
            location: location.clone(),
            option,
            value: value.to_string(),
            substituted: Some(substituted.to_string()),
        }),
        None => Err(MetaError::InvalidTimeValue {
            location: location.clone(),
            option,
            value: value.to_string(),
            substituted: None,
        }),
    }
}
