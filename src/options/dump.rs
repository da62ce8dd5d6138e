//! YAML dump of the values a user set explicitly.

use std::fmt;

use super::root::Options;

impl fmt::Display for Options {
    /// Writes the root layer as YAML, omitting unset fields.
    ///
    /// Attached layers never appear; with nothing set the output is `{}\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&yaml)
    }
}

/// Renders possibly-missing options, giving an empty string for `None`.
#[must_use]
pub fn render(options: Option<&Options>) -> String {
    options.map(ToString::to_string).unwrap_or_default()
}
