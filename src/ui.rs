use egui;

use crate::simulation::AquariumState;

/// Overlay chrome state.
pub struct UiState {
    pub show_instructions: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_instructions: true,
        }
    }
}

/// Draw the egui overlay: status strip on top, feed hint until the first
/// pellet is dropped.
pub fn draw_ui(sim: &mut AquariumState, ui_state: &mut UiState) {
    egui_macroquad::ui(|ctx| {
        draw_status_strip(ctx, sim, ui_state);

        if ui_state.show_instructions {
            draw_feed_hint(ctx);
        }
    });

    egui_macroquad::draw();
}

fn draw_status_strip(ctx: &egui::Context, sim: &mut AquariumState, ui_state: &mut UiState) {
    egui::TopBottomPanel::top("status_strip").show(ctx, |ui| {
        ui.add_space(3.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("REEF").strong());
            ui.separator();

            let pause_label = if sim.paused { "Play" } else { "Pause" };
            if ui.button(pause_label).clicked() {
                sim.paused = !sim.paused;
            }
            if ui.button("Feed").clicked() {
                sim.feed();
                ui_state.show_instructions = false;
            }

            ui.separator();
            metric_chip(ui, "Fish", sim.fish.len().to_string());
            metric_chip(ui, "Food", sim.food.len().to_string());
            metric_chip(ui, "Bubbles", sim.bubbles.len().to_string());
            metric_chip(ui, "Eaten", sim.total_eaten.to_string());
            metric_chip(ui, "Tick", sim.tick_count.to_string());
        });
        ui.add_space(3.0);
    });
}

fn metric_chip(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(format!("{label}: {value}"));
    ui.separator();
}

fn draw_feed_hint(ctx: &egui::Context) {
    egui::Window::new("feed_hint")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -120.0))
        .show(ctx, |ui| {
            ui.label("Press Space to feed the fish");
        });
}
