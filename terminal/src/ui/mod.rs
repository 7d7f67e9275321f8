//! # GUI Rendering
//!
//! One screen, drawn every frame from [`ViewModel::project`]. Clicks are
//! forwarded to the [`App`] session, which runs them on the tokio runtime;
//! their results show up in a later frame.

pub mod theme;
pub mod view_model;
pub mod widgets;

use crate::app::App;
use std::time::Duration;
use theme::Theme;
pub use view_model::{BlockCard, MineButton, ViewModel};

/// Upper bound between frames so background refreshes appear without input.
pub const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &App) {
    let view = app.view();
    let input = app.interaction_snapshot();
    let vm = ViewModel::project(&view, &input, &app.config.api_base_url);
    let theme = Theme::default();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        widgets::render_status_bar(ui, &vm, &app.config.api_base_url, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(&vm.title).color(theme.selected).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh").clicked() {
                    app.handle_refresh_click();
                }
            });
        });

        if let Some(banner) = vm.loading_banner {
            ui.colored_label(theme.info, banner);
        }
        if let Some(banner) = &vm.offline_banner {
            ui.colored_label(theme.warning, banner);
        }

        ui.separator();
        render_controls(ui, app, &vm, &input, &theme);
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(placeholder) = vm.empty_chain {
                    ui.colored_label(theme.dim, placeholder);
                }
                for card in &vm.blocks {
                    widgets::render_block_card(ui, card, &theme);
                    ui.add_space(4.0);
                }
            });
    });
}

fn render_controls(
    ui: &mut egui::Ui,
    app: &App,
    vm: &ViewModel,
    input: &crate::app::InteractionState,
    theme: &Theme,
) {
    // Transaction entry
    let mut tx_draft = input.tx_draft.clone();
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut tx_draft)
                .hint_text("Transaction, e.g. Alice pays Bob 5")
                .desired_width(320.0),
        );
        if response.changed() {
            app.set_tx_draft(tx_draft.clone());
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Add").clicked() || submitted {
            app.handle_add_click();
        }

        if ui
            .add_enabled(vm.mine_button.enabled, egui::Button::new(vm.mine_button.label))
            .clicked()
        {
            app.handle_mine_click();
        }
    });

    if let Some(message) = &vm.status_message {
        ui.colored_label(theme.info, message);
    }

    // Search
    let mut search_draft = input.search_draft.clone();
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut search_draft)
                .hint_text("Search transactions")
                .desired_width(320.0),
        );
        if response.changed() {
            app.set_search_draft(search_draft.clone());
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submitted {
            app.handle_search_click();
        }
    });

    for hit in &vm.search_hits {
        ui.colored_label(theme.success, hit);
    }
}

/// Native window hosting one session.
pub struct LedgerWindow {
    app: App,
}

impl LedgerWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self { app }
    }
}

impl eframe::App for LedgerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render(ctx, &self.app);
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

impl Drop for LedgerWindow {
    fn drop(&mut self) {
        self.app.shutdown();
    }
}
