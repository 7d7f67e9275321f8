//! # Status Bar Widget
//!
//! Bottom line: pending count, difficulty, last sync, and the service URL.

use crate::ui::theme::Theme;
use crate::ui::view_model::ViewModel;

/// Render status bar at bottom
pub fn render_status_bar(ui: &mut egui::Ui, vm: &ViewModel, api_base_url: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        if vm.offline_banner.is_some() {
            ui.colored_label(theme.error, "● Offline");
        } else {
            ui.colored_label(theme.success, "● Online");
        }

        ui.separator();
        ui.label(&vm.pending_label);

        if let Some(difficulty) = &vm.difficulty_label {
            ui.separator();
            ui.label(difficulty);
        }

        if let Some(synced) = &vm.last_synced_label {
            ui.separator();
            ui.colored_label(theme.dim, synced);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, api_base_url);
        });
    });
}
