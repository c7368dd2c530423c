//! Geometry types shared by the retro window widget and its hosts
//!
//! These types are used by both:
//! - the window interaction state machine (native Rust, unit tested)
//! - the Dioxus component (WASM), which serializes them to inline styles
//!
//! Serializable with serde so hosts can hand initial geometry and configuration
//! over as JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// ============================================================================
// Lengths
// ============================================================================

/// A CSS length as the widget understands it.
///
/// Serialized as its CSS text (`"160px"`, `"100vw"`, `"auto"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
    Percent(f64),
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthParseError {
    #[error("empty length")]
    Empty,
    #[error("invalid length '{0}'")]
    Invalid(String),
}

impl Length {
    pub fn to_css(&self) -> String {
        match self {
            Length::Px(v) => format!("{v}px"),
            Length::Vw(v) => format!("{v}vw"),
            Length::Vh(v) => format!("{v}vh"),
            Length::Percent(v) => format!("{v}%"),
            Length::Auto => "auto".to_string(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(LengthParseError::Empty);
        }
        if text.eq_ignore_ascii_case("auto") {
            return Ok(Length::Auto);
        }

        // CSS units are ASCII case-insensitive.
        let lower = text.to_ascii_lowercase();
        let (number, unit) = if let Some(n) = lower.strip_suffix("px") {
            (n, "px")
        } else if let Some(n) = lower.strip_suffix("vw") {
            (n, "vw")
        } else if let Some(n) = lower.strip_suffix("vh") {
            (n, "vh")
        } else if let Some(n) = lower.strip_suffix('%') {
            (n, "%")
        } else {
            // Unitless zero is the only bare number CSS accepts.
            (lower.as_str(), "")
        };

        let value = number
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LengthParseError::Invalid(text.to_string()))?;

        match unit {
            "px" => Ok(Length::Px(value)),
            "vw" => Ok(Length::Vw(value)),
            "vh" => Ok(Length::Vh(value)),
            "%" => Ok(Length::Percent(value)),
            _ if value == 0.0 => Ok(Length::Px(0.0)),
            _ => Err(LengthParseError::Invalid(text.to_string())),
        }
    }
}

impl TryFrom<String> for Length {
    type Error = LengthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_css()
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Positional and size styling of a window.
///
/// `None` means the value was never set and the stylesheet decides. It is kept
/// distinct from an explicit zero so a maximize/restore cycle hands back exactly
/// what was there before.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../retro-window/src/types/generated.ts")]
pub struct Geometry {
    #[ts(type = "string | null")]
    pub left: Option<Length>,
    #[ts(type = "string | null")]
    pub top: Option<Length>,
    #[ts(type = "string | null")]
    pub width: Option<Length>,
    #[ts(type = "string | null")]
    pub height: Option<Length>,
}

impl Geometry {
    pub const UNSET: Geometry = Geometry {
        left: None,
        top: None,
        width: None,
        height: None,
    };

    /// Pixel geometry with every field set.
    pub fn px(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: Some(Length::Px(left)),
            top: Some(Length::Px(top)),
            width: Some(Length::Px(width)),
            height: Some(Length::Px(height)),
        }
    }

    /// Fills the viewport from its top-left corner.
    pub fn full_viewport() -> Self {
        Self {
            left: Some(Length::Px(0.0)),
            top: Some(Length::Px(0.0)),
            width: Some(Length::Vw(100.0)),
            height: Some(Length::Vh(100.0)),
        }
    }

    /// Inline style declarations for the fields that are set.
    pub fn to_style(&self) -> String {
        [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ]
        .iter()
        .filter_map(|(name, value)| value.map(|v| format!("{name}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../retro-window/src/types/generated.ts")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured rectangle of a rendered window, relative to its offset parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../retro-window/src/types/generated.ts")]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

// ============================================================================
// Layout State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../../retro-window/src/types/generated.ts")]
pub enum LayoutState {
    Normal,
    Dragging,
    Resizing,
    Maximized,
}

impl LayoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutState::Normal => "normal",
            LayoutState::Dragging => "dragging",
            LayoutState::Resizing => "resizing",
            LayoutState::Maximized => "maximized",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
