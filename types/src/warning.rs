//! Non-fatal diagnostics collected during an identify pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user-facing warning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning(String);

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Warning {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Warning {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An ordered list of warnings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: impl Into<Warning>) {
        self.0.push(warning.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Warnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut warnings = Warnings::new();
        warnings.push("first");
        warnings.push(String::from("second"));
        let messages: Vec<_> = warnings.iter().map(Warning::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn display_joins_lines() {
        let mut warnings = Warnings::new();
        assert_eq!(warnings.to_string(), "");
        warnings.push("a");
        warnings.push("b");
        assert_eq!(warnings.to_string(), "a\nb");
    }
}
