//! Course-meta directive processing.
//!
//! A course-meta directive attaches round settings (opening and closing
//! times, late-submission rules, audience, visibility) to a document. The
//! host markup layer parses the directive into an option mapping; this
//! module validates the time-related options, resolves substitution keys
//! against the project-wide table, and emits a metadata node for the later
//! assembly stages of the build.

pub mod directive;
pub mod errors;
pub mod node;
pub mod options;

pub use directive::process;
pub use errors::{MetaError, OptionParseError};
pub use node::{MetaNode, SourceLocation};
pub use options::{MetaOptions, OptionName, OptionValue};
