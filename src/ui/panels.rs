use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – chart title and navigation
// ---------------------------------------------------------------------------

/// Render the top bar: position in the sequence, the current chart's title,
/// and the Back/Next buttons that dismiss one chart and reveal the next.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        let n = state.charts.len();
        ui.label(format!("Chart {} of {n}", state.current + 1));
        ui.separator();

        if let Some(step) = state.current_step() {
            ui.label(RichText::new(&step.title).strong());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.is_last() {
                ui.label("Close the window to finish");
            } else if ui.button("Next ▶").clicked() {
                state.next();
            }
            if !state.is_first() && ui.button("◀ Back").clicked() {
                state.back();
            }
        });
    });
}
