//! Hover tooltip for grid cells.

use estate_core::display::property_tooltip;
use estate_core::model::Property;

/// Text of the tooltip currently on screen, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tooltip {
    text: Option<String>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tooltip for a property, replacing whatever was shown before
    pub fn show(&mut self, property: &Property) -> &str {
        self.text.insert(property_tooltip(property))
    }

    pub fn hide(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}
