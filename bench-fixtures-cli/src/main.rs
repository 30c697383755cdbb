use std::error::Error;

use clap::Parser;

use bench_fixtures::generator::FixtureGenerator;

/// Writes the synthetic CSV fixture tree used by the column-statistics
/// benchmarks into ./testdata/benchmark. The directory must already exist.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let _cli = Cli::parse();

    let generator = FixtureGenerator::default();
    generator.generate()?;

    Ok(())
}
