use crate::ingest::table::SampleTable;
use crate::prelude::{GeodeticSample, TrajectoryError, TrajectoryResult};
use crate::telemetry::log::LogManager;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Columns every trajectory log must carry. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["time", "latitude", "longitude", "altitude"];

/// Loads a delimited trajectory log from disk.
pub fn load_samples<P: AsRef<Path>>(path: P) -> TrajectoryResult<SampleTable> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|source| TrajectoryError::InputNotFound {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let table = read_samples(file)?;
    LogManager::new().record(&format!(
        "Loaded {} samples from {}",
        table.len(),
        path_ref.display()
    ));
    Ok(table)
}

/// Reads a trajectory table from any reader.
///
/// The header is validated before any row is parsed so a missing column fails
/// with [`TrajectoryError::Schema`] even on an otherwise empty file.
pub fn read_samples<R: Read>(reader: R) -> TrajectoryResult<SampleTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|err| TrajectoryError::Schema(format!("reading header row: {err}")))?
        .clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(TrajectoryError::Schema(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut samples = Vec::new();
    for row in reader.deserialize::<GeodeticSample>() {
        let sample = row.map_err(|err| TrajectoryError::Parse {
            record: err
                .position()
                .map(|p| p.record() as usize)
                .unwrap_or(samples.len() + 1),
            message: err.to_string(),
        })?;
        samples.push(sample);
    }

    Ok(SampleTable::new(samples))
}

/// Writes a table with the canonical header.
pub fn write_samples<W: Write>(writer: W, table: &SampleTable) -> TrajectoryResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in table.samples() {
        writer.serialize(sample).map_err(csv_io_error)?;
    }
    writer.flush().map_err(|source| TrajectoryError::Sink {
        target: "csv writer".into(),
        source,
    })
}

fn csv_io_error(err: csv::Error) -> TrajectoryError {
    TrajectoryError::Sink {
        target: "csv writer".into(),
        source: std::io::Error::new(std::io::ErrorKind::Other, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_required_columns_and_ignores_extras() {
        let data = "time,latitude,longitude,altitude,quality\n\
                    1532332859,45.0,-120.5,10.0,good\n\
                    1532332860.5,45.1,-120.4,10.2,poor\n";
        let table = read_samples(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.times(), vec![1532332859.0, 1532332860.5]);
        assert_eq!(table.altitudes(), vec![10.0, 10.2]);
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "altitude,time,longitude,latitude\n1.5,100,20.0,10.0\n";
        let table = read_samples(data.as_bytes()).unwrap();
        let sample = table.samples()[0];
        assert_eq!(sample.time, 100.0);
        assert_eq!(sample.latitude, 10.0);
        assert_eq!(sample.longitude, 20.0);
        assert_eq!(sample.altitude, 1.5);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let data = "time,latitude,longitude\n1,2,3\n";
        let err = read_samples(data.as_bytes()).unwrap_err();
        match err {
            TrajectoryError::Schema(message) => assert!(message.contains("altitude")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty_table() {
        let table = read_samples("time,latitude,longitude,altitude\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_field_reports_record() {
        let data = "time,latitude,longitude,altitude\n1,2,3,4\n2,north,3,4\n";
        let err = read_samples(data.as_bytes()).unwrap_err();
        match err {
            TrajectoryError::Parse { record, message } => {
                assert!(record >= 1);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let err = load_samples("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, TrajectoryError::InputNotFound { .. }));
    }

    #[test]
    fn written_tables_load_back() {
        let table = SampleTable::new(vec![GeodeticSample {
            time: 5.0,
            latitude: -33.9,
            longitude: 151.2,
            altitude: 0.05,
        }]);
        let temp = NamedTempFile::new().unwrap();
        write_samples(temp.reopen().unwrap(), &table).unwrap();
        let loaded = load_samples(temp.path()).unwrap();
        assert_eq!(loaded, table);
    }
}
