// SPDX-License-Identifier: MPL-2.0
//! Screen placements used as notification slots.
//!
//! Any `Clone + Eq + Hash + Debug` type can key the scheduler; `Placement` is
//! the fixed set of screen corners and edges the dashboard shows toasts at.

use std::fmt;
use std::str::FromStr;

/// Screen position of a toast. Each placement is an independent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Placement {
    /// Every placement, top row first, left to right.
    pub const ALL: [Placement; 6] = [
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
    ];

    /// Two-letter code (`tl`, `tc`, `tr`, `bl`, `bc`, `br`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Placement::TopLeft => "tl",
            Placement::TopCenter => "tc",
            Placement::TopRight => "tr",
            Placement::BottomLeft => "bl",
            Placement::BottomCenter => "bc",
            Placement::BottomRight => "br",
        }
    }

    /// Button label shown in the showcase.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Placement::TopLeft => "Top Left",
            Placement::TopCenter => "Top Center",
            Placement::TopRight => "Top Right",
            Placement::BottomLeft => "Bottom Left",
            Placement::BottomCenter => "Bottom Center",
            Placement::BottomRight => "Bottom Right",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Placement::TopLeft | Placement::TopCenter | Placement::TopRight
        )
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not one of the placement codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlacement(pub String);

impl fmt::Display for UnknownPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown placement: {}", self.0)
    }
}

impl std::error::Error for UnknownPlacement {}

impl FromStr for Placement {
    type Err = UnknownPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlacement(s.to_string()))
    }
}
