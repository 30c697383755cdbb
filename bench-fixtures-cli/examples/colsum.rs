//! Sums and averages the second column across the generated fixtures, the
//! same aggregation the fixtures exist to benchmark.
//! Can be run with `cargo run --example colsum` after a generation run.

use std::error::Error;

use csv::ReaderBuilder;

use bench_fixtures::generator::FixtureGenerator;
use bench_fixtures::layout;
use bench_fixtures::row::FixtureRow;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let generator = FixtureGenerator::default();
    let mut total = 0_u64;
    let mut rows = 0_u64;
    for index in 0..generator.layout().file_count {
        let path = generator.output_dir().join(layout::file_name(index));
        let mut reader = ReaderBuilder::new().from_path(&path)?;
        for record in reader.deserialize() {
            let row: FixtureRow = record?;
            total += u64::from(row.first);
            rows += 1;
        }
    }

    println!("sum: {total}");
    println!("avg: {:.4}", total as f64 / rows as f64);

    Ok(())
}
