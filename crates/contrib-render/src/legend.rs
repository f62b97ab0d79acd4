//! Legend placement.

use std::fmt;
use std::str::FromStr;

use contrib_core::errors::RenderError;
use serde::{Deserialize, Serialize};

/// Where the legend box sits inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Horizontal or vertical anchor of a legend box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl LegendLocation {
    pub const ALL: [LegendLocation; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopCenter => "top_center",
            Self::TopRight => "top_right",
            Self::CenterLeft => "center_left",
            Self::Center => "center",
            Self::CenterRight => "center_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomCenter => "bottom_center",
            Self::BottomRight => "bottom_right",
        }
    }

    /// `(horizontal, vertical)` anchors.
    pub fn anchors(&self) -> (Anchor, Anchor) {
        let horizontal = match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => Anchor::Start,
            Self::TopCenter | Self::Center | Self::BottomCenter => Anchor::Middle,
            Self::TopRight | Self::CenterRight | Self::BottomRight => Anchor::End,
        };
        let vertical = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => Anchor::Start,
            Self::CenterLeft | Self::Center | Self::CenterRight => Anchor::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => Anchor::End,
        };
        (horizontal, vertical)
    }
}

impl FromStr for LegendLocation {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|loc| loc.name() == s)
            .ok_or_else(|| RenderError::UnknownLocation {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for LegendLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for loc in LegendLocation::ALL {
            assert_eq!(loc.name().parse::<LegendLocation>().unwrap(), loc);
        }
    }

    #[test]
    fn test_unknown_location() {
        let err = "upper_right".parse::<LegendLocation>().unwrap_err();
        assert!(matches!(err, RenderError::UnknownLocation { ref value } if value == "upper_right"));
    }

    #[test]
    fn test_anchors() {
        assert_eq!(LegendLocation::BottomLeft.anchors(), (Anchor::Start, Anchor::End));
        assert_eq!(LegendLocation::Center.anchors(), (Anchor::Middle, Anchor::Middle));
    }
}
