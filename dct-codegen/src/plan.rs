//! Deciding whether the generated files are stale.
//!
//! [`plan`] is a pure function of the headers on disk and the recorded
//! index; all IO happens elsewhere.

use std::collections::BTreeSet;

use crate::{Index, TestFileSet};

/// What a run has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// The index already records the current headers; write nothing.
    UpToDate,
    /// Rewrite the index and the generated source.
    Regenerate(Reason),
}

/// Why a regeneration is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// No index file was found.
    MissingIndex,
    /// The index lists different headers, or lists them in another order.
    Changed,
    /// Regeneration was requested regardless of the index.
    Forced,
}

impl Plan {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }

    /// Override an up-to-date decision when `force` is set.
    pub fn forced(self, force: bool) -> Self {
        match self {
            Self::UpToDate if force => Self::Regenerate(Reason::Forced),
            other => other,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIndex => write!(f, "no index found"),
            Self::Changed => write!(f, "test headers changed"),
            Self::Forced => write!(f, "forced"),
        }
    }
}

/// Compare the current headers with the recorded index.
pub fn plan(current: &TestFileSet, cached: Option<&Index>) -> Plan {
    match cached {
        None => Plan::Regenerate(Reason::MissingIndex),
        Some(index) if index.matches(current) => Plan::UpToDate,
        Some(_) => Plan::Regenerate(Reason::Changed),
    }
}

/// Headers added or removed since the index was written, both sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl Changes {
    pub fn between(current: &TestFileSet, cached: Option<&Index>) -> Self {
        let now: BTreeSet<&str> = current.iter().collect();
        let before: BTreeSet<&str> = cached
            .map(|index| index.entries().iter().map(String::as_str).collect())
            .unwrap_or_default();

        Self {
            added: now.difference(&before).map(|s| s.to_string()).collect(),
            removed: before.difference(&now).map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
