use {
    anyhow::{Context, Result, bail},
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fs::File, io::Read, path::Path},
    strum_macros::Display,
};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    data::AssetSource,
    domain::{AssetRecord, CycleHistory, CycleSample, SensorReadings},
    error::{SentinelError, SentinelResult},
};

/// The `type` column of the metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TestKind {
    #[strum(to_string = "charge")]
    Charge,
    #[strum(to_string = "discharge")]
    Discharge,
    #[strum(to_string = "impedance")]
    Impedance,
    #[strum(to_string = "other")]
    Other,
}

impl From<&str> for TestKind {
    fn from(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "charge" => Self::Charge,
            "discharge" => Self::Discharge,
            "impedance" => Self::Impedance,
            _ => Self::Other,
        }
    }
}

/// One row of the metadata file. Unused columns (start_time, uid, Re, Rct) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataRow {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub ambient_temperature: Option<f64>,
    pub battery_id: String,
    pub test_id: u32,
    pub filename: String,
    // Non-numeric capacities (charge/impedance rows) become None
    #[serde(rename = "Capacity", default, deserialize_with = "csv::invalid_option")]
    pub capacity: Option<f64>,
}

impl MetadataRow {
    pub fn test_kind(&self) -> TestKind {
        TestKind::from(self.kind.as_str())
    }
}

/// A detailed per-test log the deep-dive view can open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFileRef {
    pub test_id: u32,
    pub kind: TestKind,
    pub filename: String,
    pub ambient_temperature: Option<f64>,
}

#[derive(Debug, Clone)]
struct DischargeRow {
    test_id: u32,
    capacity: f64,
    ambient_temperature: Option<f64>,
    filename: String,
}

#[derive(Debug, Clone)]
struct AssetEntry {
    record: AssetRecord,
    /// Sorted by test id; duplicates are kept so they can be reported.
    discharges: Vec<DischargeRow>,
    log_files: Vec<LogFileRef>,
}

/// Per-site index built once at startup from the metadata file.
#[derive(Debug, Clone, Default)]
pub struct MetadataIndex {
    assets: BTreeMap<String, AssetEntry>,
    /// Total rows read, including charge and impedance tests.
    row_count: usize,
}

/// Reads every row, rejecting structurally malformed ones with their line number.
pub fn parse_metadata<R: Read>(reader: R) -> Result<Vec<MetadataRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<MetadataRow>().enumerate() {
        // +2: one for the header, one for 1-based lines
        let line = i + 2;
        let row = result.with_context(|| format!("Malformed metadata row at line {}", line))?;
        if row.battery_id.is_empty() {
            bail!("Malformed metadata row at line {}: empty battery_id", line);
        }

        #[cfg(debug_assertions)]
        if DF.log_metadata_rows {
            log::info!(
                "metadata line {}: {} {} test {} capacity {:?}",
                line,
                row.battery_id,
                row.kind,
                row.test_id,
                row.capacity
            );
        }

        rows.push(row);
    }
    Ok(rows)
}

pub fn load_metadata(path: &Path) -> Result<MetadataIndex> {
    let file = File::open(path)
        .with_context(|| format!("Missing metadata file '{}'", path.display()))?;
    let rows = parse_metadata(file)
        .with_context(|| format!("Failed to parse metadata file '{}'", path.display()))?;
    let index = MetadataIndex::from_rows(rows);
    log::info!(
        "Loaded {} metadata rows from {}: {} assets with discharge history",
        index.row_count,
        path.display(),
        index.len()
    );
    Ok(index)
}

impl MetadataIndex {
    pub fn from_rows(mut rows: Vec<MetadataRow>) -> Self {
        let row_count = rows.len();
        rows.sort_by(|a, b| {
            a.battery_id
                .cmp(&b.battery_id)
                .then(a.test_id.cmp(&b.test_id))
        });

        let mut assets = BTreeMap::new();
        let groups = rows.into_iter().chunk_by(|r| r.battery_id.clone());
        for (asset_id, group) in &groups {
            let group: Vec<MetadataRow> = group.collect();

            let mut discharges = Vec::new();
            for row in group.iter().filter(|r| r.test_kind() == TestKind::Discharge) {
                match row.capacity.filter(|c| c.is_finite()) {
                    Some(capacity) => discharges.push(DischargeRow {
                        test_id: row.test_id,
                        capacity,
                        ambient_temperature: row.ambient_temperature,
                        filename: row.filename.clone(),
                    }),
                    None => log::warn!(
                        "{}: discharge test {} has no numeric capacity, skipped",
                        asset_id,
                        row.test_id
                    ),
                }
            }

            let (Some(first), Some(last)) = (discharges.first(), discharges.last()) else {
                log::info!("{}: no discharge cycles, not listed", asset_id);
                continue;
            };
            let record =
                AssetRecord::new(&asset_id, first.capacity, last.capacity, discharges.len());

            let log_files = group
                .iter()
                .rev()
                .map(|r| LogFileRef {
                    test_id: r.test_id,
                    kind: r.test_kind(),
                    filename: r.filename.clone(),
                    ambient_temperature: r.ambient_temperature,
                })
                .collect();

            assets.insert(
                asset_id,
                AssetEntry {
                    record,
                    discharges,
                    log_files,
                },
            );
        }

        MetadataIndex { assets, row_count }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    fn entry(&self, asset_id: &str) -> SentinelResult<&AssetEntry> {
        self.assets
            .get(asset_id)
            .ok_or_else(|| SentinelError::invalid_input(asset_id, "asset not found in metadata"))
    }
}

impl AssetSource for MetadataIndex {
    fn asset_ids(&self) -> Vec<String> {
        self.assets.keys().cloned().collect()
    }

    fn record(&self, asset_id: &str) -> Option<&AssetRecord> {
        self.assets.get(asset_id).map(|e| &e.record)
    }

    /// Cycle numbers are the discharge rank by test id, starting at 1.
    fn cycle_history(&self, asset_id: &str) -> SentinelResult<CycleHistory> {
        let entry = self.entry(asset_id)?;

        if let Some(pair) = entry
            .discharges
            .windows(2)
            .find(|w| w[0].test_id == w[1].test_id)
        {
            return Err(SentinelError::data_quality(
                asset_id,
                format!(
                    "discharge test_id {} appears more than once ({} and {})",
                    pair[0].test_id, pair[0].filename, pair[1].filename
                ),
            ));
        }

        let samples = entry
            .discharges
            .iter()
            .enumerate()
            .map(|(i, d)| {
                CycleSample::new(i as u32 + 1, d.capacity)
                    .with_sensors(SensorReadings {
                        temperature_c: d.ambient_temperature,
                        ..Default::default()
                    })
                    .with_log_file(&d.filename)
            })
            .collect();

        CycleHistory::new(asset_id, samples)
    }

    fn log_files(&self, asset_id: &str) -> &[LogFileRef] {
        self.assets
            .get(asset_id)
            .map(|e| e.log_files.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
type,start_time,ambient_temperature,battery_id,test_id,uid,filename,Capacity,Re,Rct
charge,[2010 7 21 15 0 35],4,B0047,0,1,00001.csv,,,
discharge,[2010 7 21 16 53 45],4,B0047,1,2,00002.csv,1.6743047446975208,,
impedance,[2010 7 21 20 31 5],24,B0047,2,3,00003.csv,,0.0560,0.2009
discharge,[2010 7 22 0 0 0],4,B0047,3,4,00004.csv,1.5243662105099023,,
discharge,[2010 7 23 0 0 0],4,B0047,4,5,00005.csv,1.5080762969973425,,
discharge,[2010 7 24 0 0 0],24,B0005,7,6,00006.csv,1.8564874208181574,,
discharge,[2010 7 25 0 0 0],24,B0005,5,7,00007.csv,1.8634,,
charge,[2010 7 25 0 0 0],24,B0018,9,8,00008.csv,,,
";

    fn index() -> MetadataIndex {
        MetadataIndex::from_rows(parse_metadata(SAMPLE.as_bytes()).unwrap())
    }

    #[test]
    fn lists_only_assets_with_discharges() {
        let idx = index();
        assert_eq!(idx.row_count(), 8);
        assert_eq!(idx.asset_ids(), vec!["B0005".to_string(), "B0047".to_string()]);
        assert!(idx.record("B0018").is_none());
    }

    #[test]
    fn record_uses_first_and_last_discharge() {
        let idx = index();
        let rec = idx.record("B0047").unwrap();
        assert_eq!(rec.cycle_count, 3);
        assert!((rec.initial_capacity - 1.6743047446975208).abs() < 1e-12);
        assert!((rec.current_capacity - 1.5080762969973425).abs() < 1e-12);
    }

    #[test]
    fn cycles_follow_test_id_order() {
        let idx = index();
        // B0005 rows appear as test 7 then test 5 in the file
        let h = idx.cycle_history("B0005").unwrap();
        let caps: Vec<f64> = h.capacities().collect();
        assert_eq!(caps, vec![1.8634, 1.8564874208181574]);
        let cycles: Vec<u32> = h.samples().iter().map(|s| s.cycle_index).collect();
        assert_eq!(cycles, vec![1, 2]);
        assert_eq!(h.samples()[0].log_file.as_deref(), Some("00007.csv"));
        assert_eq!(h.samples()[0].sensors.temperature_c, Some(24.0));
    }

    #[test]
    fn log_files_are_newest_first() {
        let idx = index();
        let files = idx.log_files("B0047");
        let ids: Vec<u32> = files.iter().map(|f| f.test_id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1, 0]);
        assert_eq!(files[2].kind, TestKind::Impedance);
        assert!(idx.log_files("missing").is_empty());
    }

    #[test]
    fn unknown_asset_is_invalid_input() {
        let err = index().cycle_history("B9999").unwrap_err();
        assert!(matches!(err, SentinelError::InvalidInput { .. }));
        assert_eq!(err.asset_id(), "B9999");
    }

    #[test]
    fn duplicate_discharge_test_id_is_data_quality() {
        let csv = "\
type,ambient_temperature,battery_id,test_id,filename,Capacity
discharge,24,B0006,1,a.csv,2.0
discharge,24,B0006,2,b.csv,1.9
discharge,24,B0006,2,c.csv,1.8
";
        let idx = MetadataIndex::from_rows(parse_metadata(csv.as_bytes()).unwrap());
        let err = idx.cycle_history("B0006").unwrap_err();
        assert!(matches!(err, SentinelError::DataQuality { .. }));
        assert!(err.to_string().contains("test_id 2"));
    }

    #[test]
    fn non_numeric_discharge_capacity_is_skipped() {
        let csv = "\
type,ambient_temperature,battery_id,test_id,filename,Capacity
discharge,24,B0007,1,a.csv,1.9
discharge,24,B0007,2,b.csv,[]
discharge,n/a,B0007,3,c.csv,1.8
";
        let idx = MetadataIndex::from_rows(parse_metadata(csv.as_bytes()).unwrap());
        let h = idx.cycle_history("B0007").unwrap();
        assert_eq!(h.len(), 2);
        assert_eq!(h.samples()[1].sensors.temperature_c, None);
    }

    #[test]
    fn malformed_row_is_rejected_with_line() {
        let csv = "\
type,ambient_temperature,battery_id,test_id,filename,Capacity
discharge,24,B0007,1,a.csv,1.9
discharge,24,B0007,two,b.csv,1.8
";
        let err = parse_metadata(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn empty_battery_id_is_rejected() {
        let csv = "\
type,ambient_temperature,battery_id,test_id,filename,Capacity
discharge,24,,1,a.csv,1.9
";
        assert!(parse_metadata(csv.as_bytes()).is_err());
    }
}
