//! src/main.rs
//!
//! Demo producer: streams a noisy sine wave into a `TimePlot` and redraws it
//! in place every 1,000 samples.
//!
//! ```text
//! cargo run --release
//! RUST_LOG=debug cargo run     # frame stats, printed between frames
//! ```

use std::f64::consts::PI;

use cli_timeplot::TimePlot;
use log::LevelFilter;
use rand::Rng;
use simple_logger::SimpleLogger;

const SAMPLES: u32 = 10_000;
const SHOW_EVERY: u32 = 1_000;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let mut plot = TimePlot::new(30, 100);
    plot.set_y_label("some ints");

    let mut rng = rand::rng();
    let mut i = SAMPLES;
    while i > 0 {
        i -= 1;
        let jitter: f64 = rng.random_range(-0.25..0.25);
        plot.next_point((i as f64 / (2.0 * PI * 10.0)).sin() * 10.0 + jitter);
        if i % SHOW_EVERY == 0 {
            plot.show()?;
        }
    }

    log::info!(
        "{} samples, {:?} spent rendering",
        plot.samples().len(),
        plot.render_time()
    );
    Ok(())
}
