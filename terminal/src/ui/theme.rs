//! # GUI Theme
//!
//! Dark terminal theme for egui: black panels, white text, a red accent for
//! interaction, and status colors for the banners.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Terminal color palette
#[derive(Debug, Clone)]
pub struct LedgerColors {
    /// Pure black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Primary accent (buttons, hover)
    pub red_primary: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub yellow_warning: Color32,
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for LedgerColors {
    fn default() -> Self {
        LedgerColors {
            background: Color32::from_rgb(0, 0, 0),           // #000000
            text: Color32::from_rgb(255, 255, 255),           // #FFFFFF
            red_primary: Color32::from_rgb(204, 0, 0),        // #CC0000
            border_dark: Color32::from_rgb(51, 51, 51),       // #333333
            green_success: Color32::from_rgb(0, 255, 0),      // #00FF00
            red_error: Color32::from_rgb(255, 0, 0),          // #FF0000
            yellow_warning: Color32::from_rgb(255, 170, 0),   // #FFAA00
            blue_info: Color32::from_rgb(100, 150, 255),      // #6496FF
            gray_inactive: Color32::from_rgb(26, 26, 26),     // #1A1A1A
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
        }
    }
}

/// Semantic colors used by the screen
pub struct Theme {
    /// Headings and accents
    pub selected: Color32,
    /// Secondary text (hashes, labels)
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = LedgerColors::default();
        Theme {
            selected: colors.red_primary,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
        }
    }
}

impl Theme {
    pub fn ledger_visuals(colors: &LedgerColors) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 30, 30);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 0);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 0, 0);

        visuals.widgets.active.bg_fill = Color32::from_rgb(102, 0, 0);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.red_primary);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(76, 0, 0);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(204, 0, 0, 76);
        visuals.selection.stroke = Stroke::new(2.0, colors.red_primary);
        visuals.hyperlink_color = colors.blue_info;

        visuals
    }

    /// Apply the theme to both egui light and dark styles.
    pub fn apply(ctx: &Context) {
        let visuals = Self::ledger_visuals(&LedgerColors::default());

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
                style.spacing.indent = 12.0;
            });
        }

        tracing::debug!("Applied ledger theme");
    }
}
