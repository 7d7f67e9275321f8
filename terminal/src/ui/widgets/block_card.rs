//! # Block Card Widget
//!
//! One block of the chain: header line, hash details, and its transactions.

use crate::ui::theme::Theme;
use crate::ui::view_model::BlockCard;

/// Render one block card
pub fn render_block_card(ui: &mut egui::Ui, card: &BlockCard, theme: &Theme) {
    ui.push_id(card.key, |ui| {
        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.colored_label(theme.selected, egui::RichText::new(&card.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(theme.dim, &card.timestamp);
                });
            });

            egui::Grid::new("block_fields")
                .num_columns(2)
                .spacing([12.0, 2.0])
                .show(ui, |ui| {
                    field(ui, theme, "Hash", &card.hash).on_hover_text(&card.short_hash);
                    field(ui, theme, "Prev", &card.prev_hash);
                    field(ui, theme, "Nonce", &card.nonce);
                    field(ui, theme, "Merkle", &card.merkle_root);
                });

            if !card.data.is_empty() {
                ui.add_space(4.0);
                for tx in &card.data {
                    ui.label(format!("• {}", tx));
                }
            }
        });
    });
}

fn field(ui: &mut egui::Ui, theme: &Theme, name: &str, value: &str) -> egui::Response {
    ui.colored_label(theme.dim, name);
    let response = ui.monospace(value);
    ui.end_row();
    response
}
