use eframe::egui;

use crate::charts::ChartStep;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TitanicEdaApp {
    pub state: AppState,
}

impl TitanicEdaApp {
    pub fn new(charts: Vec<ChartStep>) -> Self {
        Self {
            state: AppState::new(charts),
        }
    }
}

impl eframe::App for TitanicEdaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart title + navigation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the current chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(step) = self.state.current_step() {
                plot::render_chart(ui, step);
            } else {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("No charts to show");
                });
            }
        });
    }
}
