//! Aggregation categories.
//!
//! Every annotated shape whose color is mapped in the category table falls
//! into exactly one of these buckets. Shapes with an unmapped color are
//! uncategorized and never contribute to totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation bucket for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Exterior wall surface (gross, before openings are subtracted)
    Wall,
    /// Main roof surface, measured flat and scaled by the roof slope
    Roof,
    /// Eaves and soffit
    Bshita,
    /// Minor roof (lean-to, porch roof)
    Koya,
    /// Window opening
    Window,
    /// Door opening
    Door,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Wall,
        Category::Roof,
        Category::Bshita,
        Category::Koya,
        Category::Window,
        Category::Door,
    ];

    /// Label used in formula lines and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Roof => "roof",
            Self::Bshita => "bshita",
            Self::Koya => "koya",
            Self::Window => "window",
            Self::Door => "door",
        }
    }

    /// Openings are subtracted from the wall total.
    pub fn is_opening(self) -> bool {
        matches!(self, Self::Window | Self::Door)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wall" => Ok(Self::Wall),
            "roof" => Ok(Self::Roof),
            "bshita" | "eaves" | "soffit" => Ok(Self::Bshita),
            "koya" | "minor-roof" | "minor_roof" => Ok(Self::Koya),
            "window" => Ok(Self::Window),
            "door" => Ok(Self::Door),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
