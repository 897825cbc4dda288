use {
    anyhow::{Context, Result, bail},
    std::{
        fs::File,
        io::Read,
        path::{Component, Path},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

// Column names used by the NASA-style detailed logs
pub const VOLTAGE_COLUMN: &str = "Voltage_measured";
pub const CURRENT_COLUMN: &str = "Current_measured";
pub const TEMPERATURE_COLUMN: &str = "Temperature_measured";
pub const TIME_COLUMN: &str = "Time";

#[derive(Debug, Clone, PartialEq)]
pub struct SensorColumn {
    pub name: String,
    /// None where the cell was not numeric.
    pub values: Vec<Option<f64>>,
}

impl SensorColumn {
    /// (sample index, value) pairs, skipping gaps.
    pub fn points_by_index(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| [i as f64, v]))
            .collect()
    }
}

/// A detailed per-test log, column oriented.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTrace {
    pub filename: String,
    pub columns: Vec<SensorColumn>,
}

impl SensorTrace {
    pub fn column(&self, name: &str) -> Option<&SensorColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Falls back to the first column when `name` is absent.
    pub fn column_or_first(&self, name: &str) -> Option<&SensorColumn> {
        self.column(name).or_else(|| self.columns.first())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Seconds between the first and last timestamped rows.
    pub fn duration_s(&self) -> Option<f64> {
        let times = self.column(TIME_COLUMN)?;
        let mut finite = times.values.iter().flatten().copied();
        let first = finite.next()?;
        let last = finite.last().unwrap_or(first);
        Some(last - first)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

pub fn parse_sensor_trace<R: Read>(filename: &str, reader: R) -> Result<SensorTrace> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut columns: Vec<SensorColumn> = headers
        .iter()
        .map(|name| SensorColumn {
            name: name.to_string(),
            values: Vec::new(),
        })
        .collect();

    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Malformed sensor row at line {}", i + 2))?;
        for (col, field) in columns.iter_mut().zip(record.iter()) {
            col.values.push(field.parse::<f64>().ok());
        }
    }

    Ok(SensorTrace {
        filename: filename.to_string(),
        columns,
    })
}

/// Loads `dir/filename`. A missing file is `Ok(None)` so the caller can warn
/// instead of failing the whole view.
pub fn load_sensor_trace(dir: &Path, filename: &str) -> Result<Option<SensorTrace>> {
    let rel = Path::new(filename);
    let mut components = rel.components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        bail!("Log filename '{}' must be a bare file name", filename);
    }

    let path = dir.join(rel);
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(&path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let trace = parse_sensor_trace(filename, file)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    #[cfg(debug_assertions)]
    if DF.log_sensor_trace {
        log::info!(
            "Loaded sensor trace {} ({} rows, {} columns)",
            filename,
            trace.row_count(),
            trace.columns.len()
        );
    }

    Ok(Some(trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
Voltage_measured,Current_measured,Temperature_measured,Current_load,Voltage_load,Time
4.19,-0.004,24.33,-0.0006,0.0,0.0
4.18,-2.01,24.46,-1.999,3.06,9.36
3.97,-2.01,24.70,-1.999,2.90,23.28
";

    #[test]
    fn columns_are_read_by_name() {
        let t = parse_sensor_trace("00002.csv", LOG.as_bytes()).unwrap();
        assert_eq!(t.row_count(), 3);
        let v = t.column(VOLTAGE_COLUMN).unwrap();
        assert_eq!(v.values[2], Some(3.97));
        let pts = t.column(TEMPERATURE_COLUMN).unwrap().points_by_index();
        assert_eq!(pts[1], [1.0, 24.46]);
        assert_eq!(t.headers().count(), 6);
    }

    #[test]
    fn missing_column_falls_back_to_first() {
        let log = "Re,Rct\n0.05,0.2\n";
        let t = parse_sensor_trace("imp.csv", log.as_bytes()).unwrap();
        assert!(t.column(VOLTAGE_COLUMN).is_none());
        assert_eq!(t.column_or_first(VOLTAGE_COLUMN).unwrap().name, "Re");
    }

    #[test]
    fn non_numeric_cells_become_gaps() {
        let log = "Voltage_measured\n4.1\n(4.0+0.1j)\n3.9\n";
        let t = parse_sensor_trace("x.csv", log.as_bytes()).unwrap();
        let col = t.column(VOLTAGE_COLUMN).unwrap();
        assert_eq!(col.values, vec![Some(4.1), None, Some(3.9)]);
        assert_eq!(col.points_by_index().len(), 2);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sensor_trace(dir.path(), "nope.csv").unwrap().is_none());
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00002.csv"), LOG).unwrap();
        let t = load_sensor_trace(dir.path(), "00002.csv").unwrap().unwrap();
        assert_eq!(t.filename, "00002.csv");
    }

    #[test]
    fn path_escapes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sensor_trace(dir.path(), "../metadata.csv").is_err());
        assert!(load_sensor_trace(dir.path(), "sub/file.csv").is_err());
    }

    #[test]
    fn duration_spans_time_column() {
        let t = parse_sensor_trace("00002.csv", LOG.as_bytes()).unwrap();
        assert_eq!(t.duration_s(), Some(23.28));
        assert_eq!(t.column(CURRENT_COLUMN).unwrap().values[1], Some(-2.01));

        let no_time = parse_sensor_trace("imp.csv", "Re,Rct\n0.05,0.2\n".as_bytes()).unwrap();
        assert_eq!(no_time.duration_s(), None);
    }
}
