use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;

use super::model::Record;

/// Number of leading columns that make up a [`Record`].
pub const RECORD_COLUMNS: usize = 4;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every row of a CSV file, keeping only its first four columns.
///
/// Layout: a header row followed by integer rows. Columns 0..3 are read as
/// `x, y, z, roll` by position; any further columns (the solver writes a
/// win probability there) are ignored.
pub fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_records(file).with_context(|| format!("reading {}", path.display()))
}

/// Same as [`load_csv`] but over any reader.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let n_columns = reader.headers().context("reading CSV headers")?.len();
    if n_columns < RECORD_COLUMNS {
        bail!("CSV has {n_columns} columns, expected at least {RECORD_COLUMNS}");
    }

    let mut records = Vec::new();
    // Rows are numbered from 1, the first line after the header.
    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(parse_row(&row).with_context(|| format!("CSV row {row_no}"))?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<Record> {
    let head: StringRecord = row.iter().take(RECORD_COLUMNS).collect();
    if head.len() < RECORD_COLUMNS {
        bail!("row has {} fields, expected at least {RECORD_COLUMNS}", head.len());
    }
    head.deserialize(None)
        .context("expected integer x, y, z and roll fields")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_four_columns() {
        let text = "i,j,k,roll,p\n0,0,0,1,0.530600\n1,2,3,0,0.25\n";
        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                Record { x: 0, y: 0, z: 0, roll: 1 },
                Record { x: 1, y: 2, z: 3, roll: 0 },
            ]
        );
    }

    #[test]
    fn header_names_do_not_matter() {
        let text = "a,b,c,d\n4,5,6,1\n";
        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(records[0].coord(), [4, 5, 6]);
        assert!(records[0].is_roll());
    }

    #[test]
    fn negative_coordinates_parse() {
        let records = read_records("x,y,z,roll\n-1,0,0,1\n".as_bytes()).unwrap();
        assert_eq!(records[0].x, -1);
    }

    #[test]
    fn empty_table_is_ok() {
        let records = read_records("x,y,z,roll\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn too_few_columns_fails() {
        let err = read_records("x,y,z\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("expected at least 4"));
    }

    #[test]
    fn non_integer_field_fails() {
        assert!(read_records("x,y,z,roll\n1,2,abc,1\n".as_bytes()).is_err());
        assert!(read_records("x,y,z,roll\n1,2,3.5,1\n".as_bytes()).is_err());
    }

    #[test]
    fn errors_name_the_data_row() {
        let err = read_records("x,y,z,roll\n1,2,3,1\n1,2,x,1\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 2"), "{err:#}");
    }

    #[test]
    fn ragged_row_fails() {
        assert!(read_records("x,y,z,roll\n1,2,3,1\n1,2\n".as_bytes()).is_err());
    }

    #[test]
    fn missing_file_fails() {
        let err = load_csv(Path::new("/nonexistent/savedsolution.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }
}
