//! Directive option model: the fixed option set and the per-directive
//! insertion-ordered mapping the host hands us.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::OptionParseError;

/// Names accepted by the course-meta directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionName {
    OpenTime,
    ReadOpenTime,
    CloseTime,
    LateTime,
    LatePenalty,
    Audience,
    Hidden,
    PointsToPass,
    Introduction,
}

impl OptionName {
    /// The kebab-case spelling used in source markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionName::OpenTime => "open-time",
            OptionName::ReadOpenTime => "read-open-time",
            OptionName::CloseTime => "close-time",
            OptionName::LateTime => "late-time",
            OptionName::LatePenalty => "late-penalty",
            OptionName::Audience => "audience",
            OptionName::Hidden => "hidden",
            OptionName::PointsToPass => "points-to-pass",
            OptionName::Introduction => "introduction",
        }
    }

    /// Whether this option's value must hold a date after substitution.
    #[must_use]
    pub fn is_time_related(self) -> bool {
        matches!(
            self,
            OptionName::OpenTime
                | OptionName::ReadOpenTime
                | OptionName::CloseTime
                | OptionName::LateTime
        )
    }

    /// Whether this option is a valueless boolean flag.
    #[must_use]
    pub fn is_flag(self) -> bool {
        matches!(self, OptionName::Hidden)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionName {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open-time" => Ok(OptionName::OpenTime),
            "read-open-time" => Ok(OptionName::ReadOpenTime),
            "close-time" => Ok(OptionName::CloseTime),
            "late-time" => Ok(OptionName::LateTime),
            "late-penalty" => Ok(OptionName::LatePenalty),
            "audience" => Ok(OptionName::Audience),
            "hidden" => Ok(OptionName::Hidden),
            "points-to-pass" => Ok(OptionName::PointsToPass),
            "introduction" => Ok(OptionName::Introduction),
            other => Err(OptionParseError::UnknownOption(other.to_string())),
        }
    }
}

/// A single option value: raw text, or nothing for flag options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Flag,
}

impl OptionValue {
    /// The text payload, if this is not a flag.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            OptionValue::Flag => None,
        }
    }
}

/// Insertion-ordered option mapping for one directive instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetaOptions {
    entries: IndexMap<OptionName, OptionValue>,
}

impl MetaOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping from the raw `(name, value)` pairs the host's
    /// markup layer produces. Option names outside the fixed set are
    /// rejected, `points-to-pass` must be a non-negative integer, and
    /// `hidden` must not carry a value. An absent value on a text option
    /// is treated as the empty string.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionParseError`] describing the first offending pair.
    pub fn from_raw<'a, I>(pairs: I) -> Result<Self, OptionParseError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut entries = IndexMap::new();
        for (raw_name, raw_value) in pairs {
            let name = OptionName::from_str(raw_name)?;
            let value = if name.is_flag() {
                if let Some(v) = raw_value {
                    return Err(OptionParseError::UnexpectedValue {
                        option: name,
                        value: v.to_string(),
                    });
                }
                OptionValue::Flag
            } else {
                let text = raw_value.unwrap_or("");
                if name == OptionName::PointsToPass && text.parse::<u32>().is_err() {
                    return Err(OptionParseError::ExpectedInteger {
                        option: name,
                        value: text.to_string(),
                    });
                }
                OptionValue::Text(text.to_string())
            };
            entries.insert(name, value);
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, name: OptionName, value: OptionValue) {
        self.entries.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.entries.get(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionName, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(OptionName, OptionValue)> for MetaOptions {
    fn from_iter<T: IntoIterator<Item = (OptionName, OptionValue)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
