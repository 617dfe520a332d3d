//! Drop edges reported by the gesture layer.
//!
//! The gesture layer reports any of four edges (or none). Task drops only
//! make sense on `top`/`bottom`, column drops on `left`/`right`; anything
//! else collapses to the trailing edge instead of rejecting the drop.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Raw edge as reported by hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl DropEdge {
    /// Parses an edge label. Unknown labels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Which side of the target an item lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// Vertical edge for task drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskEdge {
    Top,
    #[default]
    Bottom,
}

impl TaskEdge {
    /// `top` stays `top`; everything else, including no edge, is `bottom`.
    pub fn from_drop(edge: Option<DropEdge>) -> Self {
        match edge {
            Some(DropEdge::Top) => Self::Top,
            _ => Self::Bottom,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Self::Top => Side::Before,
            Self::Bottom => Side::After,
        }
    }
}

/// Horizontal edge for column drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnEdge {
    Left,
    #[default]
    Right,
}

impl ColumnEdge {
    /// `left` stays `left`; everything else, including no edge, is `right`.
    pub fn from_drop(edge: Option<DropEdge>) -> Self {
        match edge {
            Some(DropEdge::Left) => Self::Left,
            _ => Self::Right,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Self::Left => Side::Before,
            Self::Right => Side::After,
        }
    }
}

/// Error for edge labels that do not fit the requested axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeParseError(pub String);

impl Display for EdgeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported edge `{}`", self.0)
    }
}

impl std::error::Error for EdgeParseError {}

impl FromStr for TaskEdge {
    type Err = EdgeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match DropEdge::parse(value) {
            Some(DropEdge::Top) => Ok(Self::Top),
            Some(DropEdge::Bottom) => Ok(Self::Bottom),
            _ => Err(EdgeParseError(value.to_string())),
        }
    }
}

impl FromStr for ColumnEdge {
    type Err = EdgeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match DropEdge::parse(value) {
            Some(DropEdge::Left) => Ok(Self::Left),
            Some(DropEdge::Right) => Ok(Self::Right),
            _ => Err(EdgeParseError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnEdge, DropEdge, Side, TaskEdge};

    #[test]
    fn missing_or_cross_axis_edges_default_to_trailing() {
        assert_eq!(TaskEdge::from_drop(None), TaskEdge::Bottom);
        assert_eq!(TaskEdge::from_drop(Some(DropEdge::Left)), TaskEdge::Bottom);
        assert_eq!(TaskEdge::from_drop(Some(DropEdge::Top)), TaskEdge::Top);

        assert_eq!(ColumnEdge::from_drop(None), ColumnEdge::Right);
        assert_eq!(ColumnEdge::from_drop(Some(DropEdge::Top)), ColumnEdge::Right);
        assert_eq!(ColumnEdge::from_drop(Some(DropEdge::Left)), ColumnEdge::Left);
    }

    #[test]
    fn parse_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(DropEdge::parse(" TOP "), Some(DropEdge::Top));
        assert_eq!(DropEdge::parse("center"), None);
        assert!("left".parse::<TaskEdge>().is_err());
        assert_eq!("Left".parse::<ColumnEdge>(), Ok(ColumnEdge::Left));
    }

    #[test]
    fn leading_edges_map_to_before() {
        assert_eq!(TaskEdge::Top.side(), Side::Before);
        assert_eq!(ColumnEdge::Right.side(), Side::After);
    }
}
