//! Metadata node emitted into the host document tree.

use serde::Serialize;
use std::fmt;

use super::options::MetaOptions;

/// Position of a directive instance in its source document, as reported by
/// the host's markup layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub source: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(source: impl Into<String>, line: usize) -> Self {
        Self { source: source.into(), line }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.source, self.line)
    }
}

/// Inert carrier of a directive's resolved option mapping.
///
/// The later assembly stages of the build consume this node; this crate
/// never inspects it after emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaNode {
    pub options: MetaOptions,
    pub location: SourceLocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::options::{OptionName, OptionValue};

    #[test]
    fn node_serializes_options_with_kebab_case_keys() {
        let options: MetaOptions = [
            (OptionName::OpenTime, OptionValue::Text("2024-09-01 12:00".to_string())),
            (OptionName::Hidden, OptionValue::Flag),
        ]
        .into_iter()
        .collect();
        let node = MetaNode { options, location: SourceLocation::new("index.rst", 1) };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["options"]["open-time"], "2024-09-01 12:00");
        assert!(json["options"]["hidden"].is_null());
        assert_eq!(json["location"]["source"], "index.rst");
        assert_eq!(json["location"]["line"], 1);
    }

    #[test]
    fn location_display_matches_diagnostic_form() {
        let loc = SourceLocation::new("rounds/01.rst", 42);
        assert_eq!(loc.to_string(), "rounds/01.rst, line 42");
    }
}
