//! Enumeration types for tickets and annual passes.
//!
//! Both enums serialize as `snake_case` strings (`"single_day"`,
//! `"family"`, ...) and can be parsed from the same spelling, which is how
//! they appear in configuration files.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a ticket or pass category string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseKindError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Ticket types
// ---------------------------------------------------------------------------

/// The kind of entry a ticket grants.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// Entry on the purchase date only.
    #[default]
    SingleDay,
    /// Entry across several consecutive days.
    MultiDay,
    /// Entry for a group travelling together.
    Group,
}

impl TicketType {
    /// Return the canonical `snake_case` name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleDay => "single_day",
            Self::MultiDay => "multi_day",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_day" => Ok(Self::SingleDay),
            "multi_day" => Ok(Self::MultiDay),
            "group" => Ok(Self::Group),
            other => Err(ParseKindError {
                kind: "ticket type",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Annual pass types
// ---------------------------------------------------------------------------

/// Who an annual pass covers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    /// A single named holder.
    #[default]
    Individual,
    /// The holder and their household.
    Family,
    /// Discounted pass for senior holders.
    Senior,
}

impl PassType {
    /// Return the canonical `snake_case` name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Family => "family",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "family" => Ok(Self::Family),
            "senior" => Ok(Self::Senior),
            other => Err(ParseKindError {
                kind: "pass type",
                value: other.to_owned(),
            }),
        }
    }
}
