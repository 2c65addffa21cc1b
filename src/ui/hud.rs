//! Text HUD: order list, baked list, oven screen, banners and hover text

use std::fmt::Write;

use super::DisplaySink;
use crate::sim::{BannerSlot, OvenScreen, Pastry, Plate, TextColor};

/// "Order List:" followed by one line per desired pastry
pub fn format_order_list(order: &[Pastry]) -> String {
    let mut text = String::from("Order List:");
    for pastry in order {
        let _ = write!(text, "\n{}", pastry);
    }
    text
}

/// "Current Pastries:" followed by one line per filled plate
pub fn format_baked_list(plates: &[Plate]) -> String {
    let mut text = String::from("Current Pastries:");
    for pastry in plates.iter().flatten() {
        let _ = write!(text, "\n{}", pastry);
    }
    text
}

#[derive(Debug, Clone)]
struct ShownBanner {
    text: String,
    color: TextColor,
}

/// Retained HUD state, rebuilt from display commands
#[derive(Debug, Clone)]
pub struct Hud {
    order_list: String,
    baked_list: String,
    oven_screen: Option<OvenScreen>,
    status_banner: Option<ShownBanner>,
    select_prompt: Option<ShownBanner>,
    button_description: Option<String>,
    ansi_colors: bool,
    dirty: bool,
}

impl Hud {
    pub fn new(ansi_colors: bool) -> Self {
        Self {
            order_list: format_order_list(&[]),
            baked_list: format_baked_list(&[]),
            oven_screen: None,
            status_banner: None,
            select_prompt: None,
            button_description: None,
            ansi_colors,
            dirty: true,
        }
    }

    pub fn order_list(&self) -> &str {
        &self.order_list
    }

    pub fn baked_list(&self) -> &str {
        &self.baked_list
    }

    pub fn button_description(&self) -> Option<&str> {
        self.button_description.as_deref()
    }

    /// Visible banner text and color for a slot
    pub fn banner(&self, slot: BannerSlot) -> Option<(&str, TextColor)> {
        let banner = match slot {
            BannerSlot::OrderStatus => &self.status_banner,
            BannerSlot::SelectPastry => &self.select_prompt,
        };
        banner.as_ref().map(|b| (b.text.as_str(), b.color))
    }

    /// Returns true once after any change, for redraw throttling
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn paint(&self, text: &str, color: TextColor) -> String {
        if !self.ansi_colors {
            return text.to_string();
        }
        let code = match color {
            // Terminal default foreground stands in for black
            TextColor::Black => return text.to_string(),
            TextColor::Yellow => "33",
            TextColor::Green => "32",
            TextColor::Red => "31",
        };
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }

    /// Render the whole HUD as a text panel
    pub fn render(&self) -> String {
        let mut out = String::from("========== Poly Oven ==========\n");
        let _ = writeln!(out, "{}\n", self.order_list);
        let _ = writeln!(out, "{}\n", self.baked_list);

        let screen_line = match &self.oven_screen {
            Some(screen) => {
                let icon = match screen.icon {
                    Some((kind, true)) => format!("[Special {}] ", kind),
                    Some((kind, false)) => format!("[{}] ", kind),
                    None => String::new(),
                };
                format!("{}{}", icon, self.paint(&screen.sweetness_text(), screen.color))
            }
            None => "Sweetness Level: ".to_string(),
        };
        let _ = writeln!(out, "Oven: {}", screen_line);

        if let Some(banner) = &self.status_banner {
            let _ = writeln!(out, ">> {} <<", self.paint(&banner.text, banner.color));
        }
        if let Some(banner) = &self.select_prompt {
            let _ = writeln!(out, "!! {}", self.paint(&banner.text, banner.color));
        }
        if let Some(description) = &self.button_description {
            let _ = writeln!(out, "({})", description);
        }
        out.push_str("===============================");
        out
    }
}

impl DisplaySink for Hud {
    fn show_order_list(&mut self, order: &[Pastry]) {
        self.order_list = format_order_list(order);
        self.dirty = true;
    }

    fn show_baked_list(&mut self, plates: &[Plate]) {
        self.baked_list = format_baked_list(plates);
        self.dirty = true;
    }

    fn show_oven_screen(&mut self, screen: &OvenScreen) {
        self.oven_screen = Some(*screen);
        self.dirty = true;
    }

    fn show_banner(&mut self, slot: BannerSlot, text: &str, color: TextColor, _duration_ms: u32) {
        let banner = Some(ShownBanner {
            text: text.to_string(),
            color,
        });
        match slot {
            BannerSlot::OrderStatus => self.status_banner = banner,
            BannerSlot::SelectPastry => self.select_prompt = banner,
        }
        self.dirty = true;
    }

    fn hide_banner(&mut self, slot: BannerSlot) {
        match slot {
            BannerSlot::OrderStatus => self.status_banner = None,
            BannerSlot::SelectPastry => self.select_prompt = None,
        }
        self.dirty = true;
    }

    fn show_button_description(&mut self, text: Option<&str>) {
        self.button_description = text.map(str::to_string);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PastryKind;

    #[test]
    fn test_order_list_format() {
        let order = [
            Pastry::new(PastryKind::Cake),
            Pastry::enhanced(PastryKind::Cookie),
            Pastry::new(PastryKind::IceCream),
        ];
        assert_eq!(
            format_order_list(&order),
            "Order List:\nCake, Sweetness = 1\nCookie, Sweetness = 3\nIce-Cream, Sweetness = 3"
        );
    }

    #[test]
    fn test_baked_list_skips_empty_plates() {
        let plates = [Some(Pastry::new(PastryKind::Cookie)), None, None];
        assert_eq!(
            format_baked_list(&plates),
            "Current Pastries:\nCookie, Sweetness = 2"
        );
        assert_eq!(format_baked_list(&[None, None, None]), "Current Pastries:");
    }

    #[test]
    fn test_banner_show_hide() {
        let mut hud = Hud::new(false);
        hud.take_dirty();
        hud.show_banner(BannerSlot::SelectPastry, "Select a pastry first!", TextColor::Black, 2000);
        assert!(hud.take_dirty());
        assert!(!hud.take_dirty());
        assert!(hud.render().contains("!! Select a pastry first!"));

        hud.hide_banner(BannerSlot::SelectPastry);
        assert_eq!(hud.banner(BannerSlot::SelectPastry), None);
        assert!(!hud.render().contains("Select a pastry"));
    }

    #[test]
    fn test_render_enhanced_oven_in_color() {
        let mut hud = Hud::new(true);
        hud.show_oven_screen(&OvenScreen {
            icon: Some((PastryKind::Cake, true)),
            sweetness: Some(2),
            color: TextColor::Yellow,
        });
        let text = hud.render();
        assert!(text.contains("[Special Cake] \x1b[33mSweetness Level: 2\x1b[0m"));
    }
}
