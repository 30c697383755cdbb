use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive upper bound for the two random numeric columns.
pub const MAX_CELL_VALUE: u32 = 10_000;

/// A single data row of a fixture file.
///
/// The serde renames carry the fixed `Col1,Col2,Col3` header: a
/// [`csv::Writer`] with headers enabled emits it from the field names on
/// the first serialized row.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureRow {
    /// Sequential label, `Data<j>` for the j-th data row of a file.
    #[serde(rename = "Col1")]
    pub label: String,
    #[serde(rename = "Col2")]
    pub first: u32,
    #[serde(rename = "Col3")]
    pub second: u32,
}

impl FixtureRow {
    /// Draws the row at `row_index`: the label is sequential, the two
    /// numeric cells are independent uniform samples from
    /// `0..=MAX_CELL_VALUE`.
    pub fn sample<R: Rng + ?Sized>(row_index: usize, rng: &mut R) -> Self {
        FixtureRow {
            label: format!("Data{row_index}"),
            first: rng.gen_range(0..=MAX_CELL_VALUE),
            second: rng.gen_range(0..=MAX_CELL_VALUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_sample_label_tracks_row_index() {
        let mut rng = thread_rng();
        let row = FixtureRow::sample(0, &mut rng);
        assert_eq!(row.label, "Data0");

        let row = FixtureRow::sample(2499, &mut rng);
        assert_eq!(row.label, "Data2499");
    }

    #[test]
    fn test_sample_stays_in_bounds() {
        let mut rng = thread_rng();
        for row_index in 0..10_000 {
            let row = FixtureRow::sample(row_index, &mut rng);
            assert!(row.first <= MAX_CELL_VALUE);
            assert!(row.second <= MAX_CELL_VALUE);
        }
    }

    #[test]
    fn test_header_comes_from_field_renames() {
        let mut writer = csv::Writer::from_writer(vec![]);
        let row = FixtureRow {
            label: String::from("Data0"),
            first: 1,
            second: 10_000,
        };
        writer.serialize(row).unwrap();
        let written = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(written, "Col1,Col2,Col3\nData0,1,10000\n");
    }

    #[test]
    fn test_row_round_trips_through_csv() {
        let mut writer = csv::Writer::from_writer(vec![]);
        let mut rng = thread_rng();
        writer.serialize(FixtureRow::sample(7, &mut rng)).unwrap();
        let written = writer.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(written.as_slice());
        let row: FixtureRow = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.label, "Data7");
        assert!(row.first <= MAX_CELL_VALUE);
        assert!(row.second <= MAX_CELL_VALUE);
    }
}
