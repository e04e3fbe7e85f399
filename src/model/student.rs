use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::IgnoredAny;
use std::fmt;

/// A mark as it appears in the input. Anything that is not a number is kept
/// as `Unscored` and rejected later on by validation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Mark {
    Score(f64),
    Unscored(IgnoredAny),
}

impl Mark {
    /// Return the score if it is a finite number.
    pub fn score(&self) -> Option<f64> {
        match *self {
            Mark::Score(s) if s.is_finite() => Some(s),
            _ => None,
        }
    }

    /// Parse a textual mark, keeping non-numbers as `Unscored`.
    pub fn parse(s: &str) -> Self {
        s.trim()
            .parse::<f64>()
            .map_or(Mark::Unscored(IgnoredAny), Mark::Score)
    }
}

impl From<f64> for Mark {
    fn from(score: f64) -> Self {
        Mark::Score(score)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Score(s) => write!(f, "{s}"),
            Mark::Unscored(_) => write!(f, "<not a number>"),
        }
    }
}

/// Marks are kept in declaration order, which decides ties between subjects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub marks: IndexMap<String, Mark>,
}

impl StudentRecord {
    pub fn new<N, S, M, I>(name: N, marks: I) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        M: Into<Mark>,
        I: IntoIterator<Item = (S, M)>,
    {
        Self {
            name: name.into(),
            marks: marks
                .into_iter()
                .map(|(s, m)| (s.into(), m.into()))
                .collect(),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "<unnamed>")
        } else {
            write!(f, "{}", self.name)
        }
    }
}
