//! Headless QA harness: drives the simulation for a scripted run with no
//! window or timer involved and evaluates the core invariants, writing a
//! JSON report for CI consumption.

use std::collections::HashSet;

use serde::Serialize;

use crate::config;
use crate::simulation::AquariumState;

const QA_TANK_WIDTH: f32 = 1280.0;
const QA_TANK_HEIGHT: f32 = 800.0;
const FEED_INTERVAL: u64 = 30;

#[derive(Clone, Copy, Debug)]
pub struct QaConfig {
    pub ticks: u64,
    pub seed: u64,
}

impl QaConfig {
    /// Parse `--qa [--ticks N] [--seed N]` from the process arguments.
    /// Returns `None` when `--qa` is absent (normal windowed run).
    pub fn parse_cli(args: &[String]) -> Option<Self> {
        if !args.iter().any(|a| a == "--qa") {
            return None;
        }
        let flag_value = |name: &str| {
            args.iter()
                .position(|a| a == name)
                .and_then(|i| args.get(i + 1))
                .and_then(|v| v.parse::<u64>().ok())
        };
        Some(Self {
            ticks: flag_value("--ticks").unwrap_or(5000),
            seed: flag_value("--seed").unwrap_or(42),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QaCheck {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub seed: u64,
    pub ticks: u64,
    pub fish_count: usize,
    pub food_dropped: u64,
    pub food_eaten: u64,
    pub food_settled: u64,
    pub bubbles_recycled: u64,
    pub overall_status: String,
    pub checks: Vec<QaCheck>,
}

/// Run a scripted feeding session and evaluate every invariant each tick.
pub fn run(cfg: QaConfig) -> QaReport {
    let mut sim = AquariumState::new(QA_TANK_WIDTH, QA_TANK_HEIGHT, cfg.seed);

    let mut bubble_violations = 0u64;
    let mut velocity_violations = 0u64;
    let mut sand_violations = 0u64;
    let mut duplicate_ids = 0u64;
    let mut seen_ids = HashSet::new();

    for tick in 0..cfg.ticks {
        if tick % FEED_INTERVAL == 0 {
            let id = sim.feed();
            if !seen_ids.insert(id) {
                duplicate_ids += 1;
            }
        }

        let bubbles_before = sim.bubbles.len();
        sim.step();

        if sim.bubbles.len() != bubbles_before {
            bubble_violations += 1;
        }
        for fish in &sim.fish {
            let v = fish.vel.length();
            let cruise = (v - fish.speed).abs() < 1e-3;
            let pursuit = (v - fish.speed * config::FISH_ACCELERATION).abs() < 1e-3;
            if !cruise && !pursuit {
                velocity_violations += 1;
            }
        }
        for pellet in sim.food.pellets() {
            if pellet.pos.y >= sim.tank.sand_line() {
                sand_violations += 1;
            }
        }
    }

    let ledger_balanced = sim.total_dropped
        == sim.total_eaten + sim.total_settled + sim.food.len() as u64;

    let checks = vec![
        QaCheck {
            name: "bubble_conservation".into(),
            passed: bubble_violations == 0,
            details: format!("{bubble_violations} ticks changed the bubble count"),
        },
        QaCheck {
            name: "velocity_is_cruise_or_pursuit".into(),
            passed: velocity_violations == 0,
            details: format!("{velocity_violations} fish-ticks off-magnitude"),
        },
        QaCheck {
            name: "no_food_below_sand_line".into(),
            passed: sand_violations == 0,
            details: format!("{sand_violations} pellet-ticks past the sand line"),
        },
        QaCheck {
            name: "food_ids_unique".into(),
            passed: duplicate_ids == 0,
            details: format!("{duplicate_ids} duplicate ids across the run"),
        },
        QaCheck {
            name: "pellet_ledger_balanced".into(),
            passed: ledger_balanced,
            details: format!(
                "dropped {} = eaten {} + settled {} + active {}",
                sim.total_dropped,
                sim.total_eaten,
                sim.total_settled,
                sim.food.len()
            ),
        },
    ];

    let all_passed = checks.iter().all(|c| c.passed);
    QaReport {
        seed: cfg.seed,
        ticks: cfg.ticks,
        fish_count: sim.fish.len(),
        food_dropped: sim.total_dropped,
        food_eaten: sim.total_eaten,
        food_settled: sim.total_settled,
        bubbles_recycled: sim.bubbles_recycled,
        overall_status: if all_passed { "PASS" } else { "FAIL" }.into(),
        checks,
    }
}

pub fn write_report(report: &QaReport, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
