//! Poly Oven state machine
//!
//! Holds at most one pastry being configured. Guarded operations return
//! [`NoPastrySelected`] instead of acting when the oven is empty; the caller
//! decides how to tell the player.

use serde::{Deserialize, Serialize};

use super::pastry::{Pastry, PastryKind};

/// The oven was asked to act on a pastry but none is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPastrySelected;

/// Current oven selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OvenState {
    /// Nothing selected
    #[default]
    Empty,
    /// A pastry is being configured; `enhanced` tracks the special icon
    Selected { pastry: Pastry, enhanced: bool },
}

/// Colors used by oven and HUD text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    Black,
    Yellow,
    Green,
    Red,
}

/// What the oven screen shows: an icon and the sweetness line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvenScreen {
    /// Icon kind and whether the "special" variant is lit
    pub icon: Option<(PastryKind, bool)>,
    /// Sweetness value, `None` when nothing is selected
    pub sweetness: Option<u8>,
    pub color: TextColor,
}

impl OvenScreen {
    pub fn sweetness_text(&self) -> String {
        match self.sweetness {
            Some(level) => format!("Sweetness Level: {}", level),
            None => "Sweetness Level: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Oven {
    state: OvenState,
}

impl Oven {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OvenState {
        self.state
    }

    /// The pastry currently being configured, if any
    pub fn current(&self) -> Option<Pastry> {
        match self.state {
            OvenState::Empty => None,
            OvenState::Selected { pastry, .. } => Some(pastry),
        }
    }

    /// Select a pastry kind, discarding any previous selection
    pub fn select(&mut self, kind: PastryKind) {
        self.state = OvenState::Selected {
            pastry: Pastry::new(kind),
            enhanced: false,
        };
    }

    /// Apply the special technique: +1 sweetness, only from base sweetness.
    ///
    /// A repeated application is accepted without changing sweetness; the
    /// special icon stays lit.
    pub fn add_special_technique(&mut self) -> Result<(), NoPastrySelected> {
        match &mut self.state {
            OvenState::Empty => Err(NoPastrySelected),
            OvenState::Selected { pastry, enhanced } => {
                if pastry.is_base() {
                    pastry.sweetness += 1;
                }
                *enhanced = true;
                Ok(())
            }
        }
    }

    /// Take the selected pastry out of the oven, leaving it empty
    pub fn bake(&mut self) -> Result<Pastry, NoPastrySelected> {
        let pastry = self.current().ok_or(NoPastrySelected)?;
        self.state = OvenState::Empty;
        Ok(pastry)
    }

    /// Drop the selection. Clearing an empty oven is reported like any other
    /// empty-oven action.
    pub fn clear_selection(&mut self) -> Result<(), NoPastrySelected> {
        match self.state {
            OvenState::Empty => Err(NoPastrySelected),
            OvenState::Selected { .. } => {
                self.state = OvenState::Empty;
                Ok(())
            }
        }
    }

    pub fn screen(&self) -> OvenScreen {
        match self.state {
            OvenState::Empty => OvenScreen {
                icon: None,
                sweetness: None,
                color: TextColor::Black,
            },
            OvenState::Selected { pastry, enhanced } => OvenScreen {
                icon: Some((pastry.kind, enhanced)),
                sweetness: Some(pastry.sweetness),
                color: if enhanced {
                    TextColor::Yellow
                } else {
                    TextColor::Black
                },
            },
        }
    }
}
