//! Error types for directive option processing.

use thiserror::Error;

use super::node::SourceLocation;
use super::options::OptionName;

/// Errors raised while validating a directive's option values.
///
/// Always fatal to the enclosing build step; never recovered or defaulted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetaError {
    /// A time-related option's value failed the canonical date/time pattern,
    /// directly or after table substitution.
    #[error("{}", invalid_time_message(.location, .option, .value, .substituted.as_deref()))]
    InvalidTimeValue {
        location: SourceLocation,
        option: OptionName,
        value: String,
        /// The table's replacement, when a substitution existed but was
        /// itself invalid.
        substituted: Option<String>,
    },
}

/// Errors raised while parsing raw option pairs from the host markup layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionParseError {
    #[error("unknown course-meta option '{0}'")]
    UnknownOption(String),

    #[error("option '{option}' expects a non-negative integer, got '{value}'")]
    ExpectedInteger { option: OptionName, value: String },

    #[error("option '{option}' is a flag and takes no value, got '{value}'")]
    UnexpectedValue { option: OptionName, value: String },
}

const ACCEPTED_DATE_FORMS: &str = "1. Date in format 'YYYY-MM-DD [hh[:mm[:ss]]]', e.g. '2020-01-16 16:00'\n\
                                   2. Date in format 'DD.MM.YYYY [hh[:mm[:ss]]]', e.g. '16.01.2020 16:00'\n";

/// Renders the author-facing message for [`MetaError::InvalidTimeValue`].
///
/// The message must be self-sufficient: it names the source position, the
/// directive, the option and its value, and enumerates every accepted form.
fn invalid_time_message(
    location: &SourceLocation,
    option: &OptionName,
    value: &str,
    substituted: Option<&str>,
) -> String {
    let position = format!(
        "{location}, directive course-meta:\noption '{option}' has value '{value}' "
    );
    match substituted {
        None => format!(
            "{position}which was not recognised.\n\
             This should be one of:\n\
             {forms}\
             3. A substitution key defined in the project configuration's \
             substitution table",
            forms = ACCEPTED_DATE_FORMS,
        ),
        Some(sub) => format!(
            "{position}which substitutes to invalid value '{sub}'.\n\
             This should be either:\n\
             {forms}\
             Probable cause: an incorrect entry in the project configuration's \
             substitution table",
            forms = ACCEPTED_DATE_FORMS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_time_message_names_option_value_and_position() {
        let err = MetaError::InvalidTimeValue {
            location: SourceLocation::new("course/module01/index.rst", 12),
            option: OptionName::OpenTime,
            value: "next tuesday".to_string(),
            substituted: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("course/module01/index.rst, line 12"));
        assert!(msg.contains("directive course-meta"));
        assert!(msg.contains("option 'open-time' has value 'next tuesday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("DD.MM.YYYY"));
        assert!(msg.contains("substitution key"));
    }

    #[test]
    fn invalid_substitution_message_names_substituted_value() {
        let err = MetaError::InvalidTimeValue {
            location: SourceLocation::new("index.rst", 3),
            option: OptionName::CloseTime,
            value: "close01".to_string(),
            substituted: Some("not a date".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("option 'close-time' has value 'close01'"));
        assert!(msg.contains("substitutes to invalid value 'not a date'"));
        assert!(msg.contains("Probable cause"));
    }
}
