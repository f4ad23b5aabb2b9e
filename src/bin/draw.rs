//! Performs a new Euro 2024 group draw and prints the resulting page.
//!
//! Usage: `draw [SEED]`. The same seed phrase always produces the same draw.

use euro_group_draw::{gen_seeder, render, run_draw_with, SeedData, Seeder, SlotPage};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seeder = match std::env::args().nth(1) {
        Some(phrase) => {
            info!(%phrase, "using seed phrase");
            Seeder::from(phrase.as_str())
        }
        None => gen_seeder(),
    };

    match run_draw_with(&SeedData::default(), seeder) {
        Ok(draw) => {
            let mut page = SlotPage::new();
            render(&draw, &mut page);
            print!("{page}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "draw failed");
            ExitCode::FAILURE
        }
    }
}
