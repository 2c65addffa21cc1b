//! Pastry records exchanged between the oven and the counter

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pastry types the oven can bake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PastryKind {
    Cake,
    Cookie,
    IceCream,
}

impl PastryKind {
    /// All kinds, in menu order
    pub const ALL: [PastryKind; 3] = [PastryKind::Cake, PastryKind::Cookie, PastryKind::IceCream];

    /// Sweetness of a freshly selected pastry of this kind
    pub fn base_sweetness(self) -> u8 {
        match self {
            PastryKind::Cake => 1,
            PastryKind::Cookie => 2,
            PastryKind::IceCream => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PastryKind::Cake => "Cake",
            PastryKind::Cookie => "Cookie",
            PastryKind::IceCream => "Ice-Cream",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cake" => Some(PastryKind::Cake),
            "cookie" => Some(PastryKind::Cookie),
            "icecream" | "ice-cream" | "ice_cream" => Some(PastryKind::IceCream),
            _ => None,
        }
    }
}

impl fmt::Display for PastryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pastry: its kind and sweetness level.
///
/// Two pastries are the same order item when both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pastry {
    pub kind: PastryKind,
    pub sweetness: u8,
}

/// One slot on the counter; `None` is an empty plate
pub type Plate = Option<Pastry>;

impl Pastry {
    /// A plain pastry at its base sweetness
    pub fn new(kind: PastryKind) -> Self {
        Self {
            kind,
            sweetness: kind.base_sweetness(),
        }
    }

    /// A pastry that received the special technique (base + 1)
    pub fn enhanced(kind: PastryKind) -> Self {
        Self {
            kind,
            sweetness: kind.base_sweetness() + 1,
        }
    }

    /// Whether sweetness is still at the kind's base value
    pub fn is_base(&self) -> bool {
        self.sweetness == self.kind.base_sweetness()
    }

    /// Draw a random order item: uniform kind, fair coin for enhancement
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = PastryKind::ALL[rng.random_range(0..PastryKind::ALL.len())];
        if rng.random_bool(0.5) {
            Self::enhanced(kind)
        } else {
            Self::new(kind)
        }
    }
}

impl fmt::Display for Pastry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Sweetness = {}", self.kind, self.sweetness)
    }
}
