use std::path::{Path, PathBuf};

use log::debug;
use rand::{thread_rng, Rng};

use crate::error::FixtureError;
use crate::layout::{self, FixtureLayout, DEFAULT_OUTPUT_DIR};
use crate::row::FixtureRow;

/// Writes a tree of synthetic CSV fixtures for the column-statistics
/// benchmarks: `file<i>.csv` for every index in the layout, each holding
/// one header line and `rows_per_file` random data lines.
#[derive(Debug)]
pub struct FixtureGenerator {
    pub(crate) output_dir: PathBuf,
    pub(crate) layout: FixtureLayout,
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        FixtureGenerator::new(DEFAULT_OUTPUT_DIR)
    }
}

impl FixtureGenerator {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        FixtureGenerator {
            output_dir: output_dir.into(),
            layout: FixtureLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(output_dir: impl Into<PathBuf>, layout: FixtureLayout) -> Self {
        FixtureGenerator {
            output_dir: output_dir.into(),
            layout,
        }
    }

    /// Writes every fixture file in the layout, sequentially. Each file is
    /// opened truncate-on-create, so a rerun replaces existing fixtures
    /// instead of appending to them.
    ///
    /// # Errors
    /// Errors on the first filesystem or CSV failure (output directory
    /// missing, permission denied, disk full). Files written before the
    /// failure stay on disk; there is no retry and no cleanup.
    pub fn generate(&self) -> Result<(), FixtureError> {
        let mut rng = thread_rng();
        debug!("writing fixture files under {}", self.output_dir.display());
        for index in 0..self.layout.file_count {
            let path = self.output_dir.join(layout::file_name(index));
            self.write_file(&path, &mut rng)?;
        }
        debug!("wrote {} fixture files", self.layout.file_count);
        Ok(())
    }

    /// One header line plus `rows_per_file` sampled data lines.
    fn write_file<R: Rng + ?Sized>(&self, path: &Path, rng: &mut R) -> Result<(), FixtureError> {
        let mut writer = csv::WriterBuilder::new().from_path(path)?;
        for row_index in 0..self.layout.rows_per_file {
            writer.serialize(FixtureRow::sample(row_index, rng))?;
        }
        writer.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn layout(&self) -> &FixtureLayout {
        &self.layout
    }
}
