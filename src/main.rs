use macroquad::prelude::*;

mod bubble;
mod config;
mod fish;
mod food;
mod qa;
mod renderer;
mod simulation;
mod spawn;
mod tank;
mod ui;

use simulation::AquariumState;
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "REEF — Aquarium Simulator".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Some(cfg) = qa::QaConfig::parse_cli(&args) {
        let report = qa::run(cfg);
        eprintln!(
            "[REEF] QA {}: {} ticks, {} fed / {} eaten / {} settled",
            report.overall_status,
            report.ticks,
            report.food_dropped,
            report.food_eaten,
            report.food_settled
        );
        let path = "reef_qa_report.json";
        match qa::write_report(&report, path) {
            Ok(()) => eprintln!("[REEF] QA report written to {path}"),
            Err(e) => eprintln!("[REEF] QA report write failed: {e}"),
        }
        std::process::exit(if report.overall_status == "PASS" { 0 } else { 1 });
    }

    let mut sim = AquariumState::new(screen_width(), screen_height(), seed_from_clock());
    let mut ui_state = UiState::default();

    loop {
        // Resizing the window rebuilds every collection at the new bounds
        // with a fresh seed; nothing carries across.
        let (w, h) = (screen_width(), screen_height());
        if w != sim.tank.width || h != sim.tank.height {
            sim = AquariumState::new(w, h, seed_from_clock());
            eprintln!("[REEF] tank resized to {w}x{h}, state regenerated");
        }

        if is_key_pressed(KeyCode::Space) {
            sim.feed();
            ui_state.show_instructions = false;
        }
        if is_key_pressed(KeyCode::P) {
            sim.paused = !sim.paused;
        }

        // One step per display refresh. Deliberately not delta-timed: the
        // effective speed follows the host's refresh rate.
        if !sim.paused {
            sim.step();
        }

        let snapshot = sim.snapshot();
        renderer::draw(&snapshot, &sim.tank);
        ui::draw_ui(&mut sim, &mut ui_state);

        next_frame().await;
    }
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
