//! Oven buttons the player can look at and press

use serde::{Deserialize, Serialize};

use super::pastry::PastryKind;

/// Buttons on the Poly Oven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    Cake,
    Cookie,
    IceCream,
    Special,
    Bake,
    Clear,
}

impl ButtonId {
    pub const ALL: [ButtonId; 6] = [
        ButtonId::Cake,
        ButtonId::Cookie,
        ButtonId::IceCream,
        ButtonId::Special,
        ButtonId::Bake,
        ButtonId::Clear,
    ];

    /// Hover text shown while the reticle rests on the button
    pub fn description(&self) -> &'static str {
        match self {
            ButtonId::Cake => "Select Cake",
            ButtonId::Cookie => "Select Cookie",
            ButtonId::IceCream => "Select Ice-Cream",
            ButtonId::Special => "Add Special Technique (Sweetness +1)",
            ButtonId::Bake => "Bake Selected Pastry",
            ButtonId::Clear => "Clear Selection",
        }
    }

    /// Pastry kind selected by this button, for the three select buttons
    pub fn pastry_kind(&self) -> Option<PastryKind> {
        match self {
            ButtonId::Cake => Some(PastryKind::Cake),
            ButtonId::Cookie => Some(PastryKind::Cookie),
            ButtonId::IceCream => Some(PastryKind::IceCream),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonId::Cake => "cake",
            ButtonId::Cookie => "cookie",
            ButtonId::IceCream => "icecream",
            ButtonId::Special => "special",
            ButtonId::Bake => "bake",
            ButtonId::Clear => "clear",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(kind) = PastryKind::from_str(s) {
            return Some(match kind {
                PastryKind::Cake => ButtonId::Cake,
                PastryKind::Cookie => ButtonId::Cookie,
                PastryKind::IceCream => ButtonId::IceCream,
            });
        }
        match s.to_lowercase().as_str() {
            "special" => Some(ButtonId::Special),
            "bake" => Some(ButtonId::Bake),
            "clear" => Some(ButtonId::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for button in ButtonId::ALL {
            assert_eq!(ButtonId::from_str(button.as_str()), Some(button));
        }
        assert_eq!(ButtonId::from_str("Ice-Cream"), Some(ButtonId::IceCream));
        assert_eq!(ButtonId::from_str("door"), None);
    }

    #[test]
    fn test_select_buttons_map_to_kinds() {
        assert_eq!(ButtonId::Cookie.pastry_kind(), Some(PastryKind::Cookie));
        assert_eq!(ButtonId::Bake.pastry_kind(), None);
    }
}
