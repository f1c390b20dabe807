//! Query targets and the plugin-style argument adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::QueryError;

/// Argument prefixes accepted in front of a target name.
const TARGET_PREFIXES: [&str; 2] = ["class=", "symbol="];

/// A non-empty declaration name to search for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Target(String);

impl Target {
    /// # Errors
    /// Returns [`QueryError::MissingTarget`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, QueryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(QueryError::MissingTarget);
        }
        Ok(Self(name))
    }

    /// Resolve invocation arguments into a single target.
    ///
    /// Each argument is `Name`, `class=Name`, or `symbol=Name`. Later
    /// arguments overwrite earlier ones, and the value left standing after
    /// the last argument must be non-empty.
    ///
    /// # Errors
    /// Returns [`QueryError::MissingTarget`] when `args` is empty or the last
    /// argument resolves to an empty name.
    pub fn from_args<I, S>(args: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = String::new();
        for arg in args {
            resolved = strip_prefix(arg.as_ref()).to_string();
        }
        Self::new(resolved)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn strip_prefix(arg: &str) -> &str {
    TARGET_PREFIXES
        .iter()
        .find_map(|prefix| arg.strip_prefix(prefix))
        .unwrap_or(arg)
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Target {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.0
    }
}

impl PartialEq<str> for Target {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare(&["Foo"], "Foo")]
    #[case::class_prefix(&["class=Foo"], "Foo")]
    #[case::symbol_prefix(&["symbol=make_widget"], "make_widget")]
    #[case::last_wins(&["class=Foo", "Bar"], "Bar")]
    #[case::last_prefixed_wins(&["Foo", "symbol=Baz"], "Baz")]
    #[case::only_first_prefix_stripped(&["class=symbol=X"], "symbol=X")]
    fn resolves_target(#[case] args: &[&str], #[case] expected: &str) {
        let target = Target::from_args(args).expect("target should resolve");
        assert_eq!(target.as_str(), expected);
    }

    #[rstest]
    #[case::no_args(&[])]
    #[case::empty_value(&["class="])]
    #[case::empty_last(&["Foo", "symbol="])]
    fn rejects_missing_target(#[case] args: &[&str]) {
        let err = Target::from_args(args).expect_err("should be missing");
        assert!(matches!(err, QueryError::MissingTarget));
    }

    #[test]
    fn deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Target>("\"\"").is_err());
        let target: Target = serde_json::from_str("\"Foo\"").expect("deserialize");
        assert_eq!(&target, "Foo");
    }
}
