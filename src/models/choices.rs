//! Single-choice fields: energy goal, notification method, report frequency

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of options for a single-choice field
pub trait Choice: Copy + PartialEq + 'static {
    /// All options in display order
    const OPTIONS: &'static [Self];

    /// Value stored in the submitted record
    fn key(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    /// Parse a stored key, case-insensitively
    fn from_key(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| o.key().eq_ignore_ascii_case(s))
    }

    /// Option by its 1-based position in a listing
    fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::OPTIONS.get(i).copied())
    }

    /// Position of this option in [`Choice::OPTIONS`]
    fn index(self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|o| *o == self)
            .unwrap_or_default()
    }

    /// Step to the neighbouring option, wrapping around.
    /// An unset choice lands on the first (or last) option.
    fn cycle(current: Option<Self>, forward: bool) -> Self {
        let len = Self::OPTIONS.len();
        let next = match current {
            None if forward => 0,
            None => len - 1,
            Some(c) if forward => (c.index() + 1) % len,
            Some(c) => (c.index() + len - 1) % len,
        };
        Self::OPTIONS[next]
    }

    /// Comma-separated list of valid keys, for error messages
    fn valid_keys() -> String {
        Self::OPTIONS
            .iter()
            .map(|o| o.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The household's primary energy goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryGoal {
    ReduceBills,
    MaximizeSolar,
    ReduceCarbon,
    GridStability,
}

impl Choice for PrimaryGoal {
    const OPTIONS: &'static [Self] = &[
        Self::ReduceBills,
        Self::MaximizeSolar,
        Self::ReduceCarbon,
        Self::GridStability,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::ReduceBills => "reduceBills",
            Self::MaximizeSolar => "maximizeSolar",
            Self::ReduceCarbon => "reduceCarbon",
            Self::GridStability => "gridStability",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ReduceBills => "Reduce energy bills",
            Self::MaximizeSolar => "Maximize use of solar energy",
            Self::ReduceCarbon => "Reduce carbon footprint",
            Self::GridStability => "Optimize for grid stability",
        }
    }
}

/// How the user wants to be notified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    Email,
    Push,
    Sms,
}

impl Choice for NotificationMethod {
    const OPTIONS: &'static [Self] = &[Self::Email, Self::Push, Self::Sms];

    fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Push => "push",
            Self::Sms => "sms",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Push => "Push notification",
            Self::Sms => "SMS",
        }
    }
}

/// How often energy reports are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl Choice for ReportFrequency {
    const OPTIONS: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Monthly];

    fn key(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        })*
    };
}

display_label!(PrimaryGoal, NotificationMethod, ReportFrequency);
