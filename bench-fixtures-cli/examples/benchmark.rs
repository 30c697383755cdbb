//! Times a full fixture generation run.
//! Can be run with `cargo run --example benchmark` (set `RUST_LOG=warn` to
//! see the timings).

use std::error::Error;
use std::time::Instant;

use log::warn;

use bench_fixtures::generator::FixtureGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let generator = FixtureGenerator::default();
    let start = Instant::now();
    generator.generate()?;
    let elapsed = start.elapsed();
    warn!("Generation took: {:.2?}", elapsed);

    Ok(())
}
