use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical groups of expandable panels.  Exclusivity is enforced per group,
/// never across groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleGroup {
    Services,
    Technology,
    #[serde(rename = "staff")]
    StaffBios,
    #[serde(rename = "values")]
    ClinicValues,
}

impl ToggleGroup {
    pub const ALL: [ToggleGroup; 4] = [
        ToggleGroup::Services,
        ToggleGroup::Technology,
        ToggleGroup::StaffBios,
        ToggleGroup::ClinicValues,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleGroup::Services => "services",
            ToggleGroup::Technology => "technology",
            ToggleGroup::StaffBios => "staff",
            ToggleGroup::ClinicValues => "values",
        }
    }

    /// Whether keyboard focus moves into a panel once it has expanded.
    pub fn focus_after_expand(&self) -> bool {
        !matches!(self, ToggleGroup::ClinicValues)
    }

    /// Staff bios behave like popovers: a click elsewhere closes them.
    pub fn dismiss_on_outside(&self) -> bool {
        matches!(self, ToggleGroup::StaffBios)
    }
}

impl fmt::Display for ToggleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "services" | "service" => Ok(ToggleGroup::Services),
            "technology" | "technologies" | "tech" => Ok(ToggleGroup::Technology),
            "staff" | "staff-bios" | "bios" => Ok(ToggleGroup::StaffBios),
            "values" | "clinic-values" => Ok(ToggleGroup::ClinicValues),
            other => Err(format!("Unknown toggle group: '{}'", other)),
        }
    }
}

/// Document coordinates of the pointer event that opened the modal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn is_mobile(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }
}

/// Why the modal closed.  Only used for logging and focus handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Escape,
    OutsideClick,
    Swipe,
    Api,
}

/// The single page-level modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub is_open: bool,
    pub title: String,
    /// Trusted, pre-sanitized markup supplied by the page.
    pub body_html: String,
    pub origin: Option<OriginPoint>,
    /// Page scroll offset when the modal was last opened.
    pub scroll_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_round_trip_through_from_str() {
        for group in ToggleGroup::ALL {
            assert_eq!(group.as_str().parse::<ToggleGroup>().unwrap(), group);
        }
        assert_eq!("Technologies".parse::<ToggleGroup>().unwrap(), ToggleGroup::Technology);
    }

    #[test]
    fn unknown_group_is_rejected() {
        let err = "pricing".parse::<ToggleGroup>().unwrap_err();
        assert!(err.contains("pricing"));
    }

    #[test]
    fn serde_names_match_markup_names() {
        let json = serde_json::to_string(&ToggleGroup::StaffBios).unwrap();
        assert_eq!(json, "\"staff\"");
    }

    #[test]
    fn mobile_breakpoint_is_exclusive() {
        let vp = Viewport { width: 768.0, height: 900.0 };
        assert!(!vp.is_mobile(768.0));
        assert!(Viewport { width: 767.0, height: 900.0 }.is_mobile(768.0));
    }
}
