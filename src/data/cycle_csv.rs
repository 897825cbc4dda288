use {
    anyhow::{Context, Result, bail},
    serde::Deserialize,
    std::{collections::BTreeMap, fs::File, io::Read, path::Path},
};

use crate::{
    data::AssetSource,
    domain::{AssetRecord, CycleHistory, CycleSample, SensorReadings},
    error::{SentinelError, SentinelResult},
};

/// One row of a per-asset cycle history file.
#[derive(Debug, Deserialize)]
struct CycleRow {
    cycle_index: u32,
    capacity: f64,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    voltage: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    current: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    temperature: Option<f64>,
}

/// Reads `cycle_index,capacity[,voltage,current,temperature]` rows in file
/// order. Row-level defects fail here; ordering defects are left to
/// `CycleHistory::new` so they surface as `DataQuality`.
pub fn parse_cycle_samples<R: Read>(reader: R) -> Result<Vec<CycleSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (i, result) in rdr.deserialize::<CycleRow>().enumerate() {
        let line = i + 2;
        let row = result.with_context(|| format!("Malformed cycle row at line {}", line))?;
        if !row.capacity.is_finite() || row.capacity < 0.0 {
            bail!(
                "Malformed cycle row at line {}: capacity {} is not a valid Ah value",
                line,
                row.capacity
            );
        }
        samples.push(
            CycleSample::new(row.cycle_index, row.capacity).with_sensors(SensorReadings {
                voltage_v: row.voltage,
                current_a: row.current,
                temperature_c: row.temperature,
            }),
        );
    }
    Ok(samples)
}

pub fn parse_cycle_history<R: Read>(reader: R, asset_id: &str) -> Result<CycleHistory> {
    let samples = parse_cycle_samples(reader)?;
    Ok(CycleHistory::new(asset_id, samples)?)
}

pub fn load_cycle_history(path: &Path, asset_id: &str) -> Result<CycleHistory> {
    let file = File::open(path)
        .with_context(|| format!("Missing cycle history file '{}'", path.display()))?;
    parse_cycle_history(file, asset_id)
        .with_context(|| format!("Failed to load cycle history '{}'", path.display()))
}

struct HistoryEntry {
    record: AssetRecord,
    samples: Vec<CycleSample>,
}

/// A set of per-asset cycle history files, one `<asset_id>.csv` each.
///
/// Rated capacity is the first cycle's capacity unless given explicitly.
#[derive(Default)]
pub struct CycleHistorySet {
    assets: BTreeMap<String, HistoryEntry>,
}

impl CycleHistorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one asset. An empty sample list is kept so the forecast can
    /// report it rather than the asset silently vanishing.
    pub fn insert(
        &mut self,
        asset_id: impl Into<String>,
        samples: Vec<CycleSample>,
        initial_capacity: Option<f64>,
    ) {
        let asset_id = asset_id.into();
        let first = samples.first().map(|s| s.capacity).unwrap_or(0.0);
        let current = samples.last().map(|s| s.capacity).unwrap_or(0.0);
        let record = AssetRecord::new(
            &asset_id,
            initial_capacity.unwrap_or(first),
            current,
            samples.len(),
        );
        self.assets
            .insert(asset_id, HistoryEntry { record, samples });
    }

    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut set = Self::new();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read history directory '{}'", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(asset_id) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping history file with non UTF-8 name: {}", path.display());
                continue;
            };
            let file = File::open(&path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            let samples = parse_cycle_samples(file)
                .with_context(|| format!("Failed to parse '{}'", path.display()))?;
            set.insert(asset_id, samples, None);
        }

        log::info!(
            "Loaded {} cycle history files from {}",
            set.len(),
            dir.display()
        );
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for CycleHistorySet {
    fn asset_ids(&self) -> Vec<String> {
        self.assets.keys().cloned().collect()
    }

    fn record(&self, asset_id: &str) -> Option<&AssetRecord> {
        self.assets.get(asset_id).map(|e| &e.record)
    }

    fn cycle_history(&self, asset_id: &str) -> SentinelResult<CycleHistory> {
        let entry = self
            .assets
            .get(asset_id)
            .ok_or_else(|| SentinelError::invalid_input(asset_id, "no cycle history loaded"))?;
        CycleHistory::new(asset_id, entry.samples.clone())
    }
}
