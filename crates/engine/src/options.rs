use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
    Csv,
}

/// Join algorithm used to pair customers with their preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scan every preference for each customer. O(n·m).
    LinearScan,
    /// Build a key index once, then look each customer up in it.
    HashJoin,
    /// Group preferences by key in an iterator pipeline and left-join customers onto the groups.
    QueryJoin,
    /// Look customers up in an index supplied by the caller.
    PreIndexed,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::LinearScan,
        Self::HashJoin,
        Self::QueryJoin,
        Self::PreIndexed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinearScan => "linear-scan",
            Self::HashJoin => "hash-join",
            Self::QueryJoin => "query-join",
            Self::PreIndexed => "pre-indexed",
        }
    }

    /// Whether the strategy returns at most one match per key (and therefore
    /// treats duplicate keys as "no match" rather than first-wins).
    pub const fn is_single_match(self) -> bool {
        matches!(self, Self::LinearScan)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when several preferences share one customer id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep the first preference seen and log a warning for the rest.
    #[default]
    KeepFirst,
    /// Fail with `PreferenceLookupAmbiguous`.
    Reject,
}

impl DuplicatePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepFirst => "keep-first",
            Self::Reject => "reject",
        }
    }
}
