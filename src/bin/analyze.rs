use {
    anyhow::{Context, Result},
    clap::{Parser, Subcommand},
    std::path::PathBuf,
    tabled::{Table, Tabled, settings::Style},
    telco_sentinel::{
        AssetReport, CycleHistorySet, FleetEntry, ForecastThresholds, PERSISTENCE,
        SentinelEngine, ThresholdArgs, data::load_cycle_history, load_metadata,
        utils::{format_capacity, format_fade_rate, format_pct, format_rul, format_temperature},
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Battery health and RUL forecasts from the command line")]
struct Args {
    /// Metadata index with one row per test
    #[arg(long, global = true, default_value = PERSISTENCE.data.metadata_path)]
    metadata: PathBuf,

    /// JSON file overriding the forecast thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One row per site
    Fleet,
    /// Detailed report for one site
    Asset { id: String },
    /// Forecast an ad-hoc cycle history CSV
    History {
        csv: PathBuf,
        #[arg(long)]
        asset_id: String,
        /// Rated capacity in Ah. Defaults to the first recorded capacity.
        #[arg(long)]
        initial_capacity: Option<f64>,
    },
}

#[derive(Tabled)]
struct FleetRow {
    #[tabled(rename = "Site")]
    site: String,
    #[tabled(rename = "Cycles")]
    cycles: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "SoH")]
    soh: String,
    #[tabled(rename = "Fade")]
    fade: String,
    #[tabled(rename = "Failure cycle")]
    failure: String,
    #[tabled(rename = "RUL")]
    rul: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&FleetEntry> for FleetRow {
    fn from(entry: &FleetEntry) -> Self {
        match &entry.result {
            Ok(r) => {
                let f = &r.forecast;
                FleetRow {
                    site: entry.asset_id.clone(),
                    cycles: r.samples.len().to_string(),
                    capacity: r
                        .latest_sample()
                        .map(|s| format_capacity(s.capacity))
                        .unwrap_or_default(),
                    soh: format_pct(f.current_soh_pct),
                    fade: format_fade_rate(f.slope),
                    failure: f.predicted_failure_cycle.to_string(),
                    rul: format_rul(f.remaining_useful_life),
                    status: f.status_label.to_string(),
                }
            }
            Err(e) => FleetRow {
                site: entry.asset_id.clone(),
                cycles: String::new(),
                capacity: String::new(),
                soh: String::new(),
                fade: String::new(),
                failure: String::new(),
                rul: String::new(),
                status: format!("ERROR ({}): {}", e.kind(), e),
            },
        }
    }
}

#[derive(Tabled)]
struct CycleRow {
    #[tabled(rename = "Cycle")]
    cycle: u32,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "SoH")]
    soh: String,
    #[tabled(rename = "Fitted")]
    fitted: String,
    #[tabled(rename = "Temp")]
    temperature: String,
}

fn print_fleet(engine: &SentinelEngine) {
    let entries = engine.fleet_report();
    let failed = entries.iter().filter(|e| e.result.is_err()).count();
    let rows: Vec<FleetRow> = entries.iter().map(FleetRow::from).collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{} sites, {} without a forecast", entries.len(), failed);
}

fn print_report(report: &AssetReport, thresholds: &ForecastThresholds) {
    let f = &report.forecast;
    let t = &report.trend;
    println!("Asset Health: {}", report.asset_id());
    println!(
        "  Rated capacity    {}",
        format_capacity(report.record.initial_capacity)
    );
    println!("  State of Health   {}", format_pct(f.current_soh_pct));
    println!("  Fade rate         {}", format_fade_rate(f.slope));
    println!("  Intercept         {}", format_capacity(f.intercept));
    println!(
        "  Fit               r2={:.4} rse={:.4} max|res|={:.4}",
        t.r_squared, t.residual_std_error, t.max_abs_residual
    );
    println!(
        "  Failure cycle     {} (threshold {})",
        f.predicted_failure_cycle,
        format_capacity(thresholds.failure_capacity_ah)
    );
    println!("  RUL               {}", format_rul(f.remaining_useful_life));
    println!(
        "  Ambient temp      {}",
        format_temperature(report.latest_temperature())
    );
    println!("  Status            {}", f.status_label);
    println!();
    println!("{}", report.status_message(thresholds.critical_soh_pct));
    println!();

    let rows: Vec<CycleRow> = report
        .samples
        .iter()
        .zip(&report.health)
        .map(|(s, h)| CycleRow {
            cycle: s.cycle_index,
            capacity: format_capacity(s.capacity),
            soh: format_pct(h.soh_percent),
            fitted: format_capacity(report.trend.predict(s.cycle_index as f64)),
            temperature: format_temperature(s.sensors.temperature_c),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,telco_sentinel=info"),
    )
    .init();

    let args = Args::parse();
    let thresholds = args.thresholds.resolve(args.config.as_deref())?;

    match args.command {
        Command::Fleet => {
            let index = load_metadata(&args.metadata)?;
            let engine = SentinelEngine::new(index, thresholds)?;
            print_fleet(&engine);
        }
        Command::Asset { id } => {
            let index = load_metadata(&args.metadata)?;
            let engine = SentinelEngine::new(index, thresholds)?;
            let report = engine.forecast(&id)?;
            print_report(&report, &thresholds);
        }
        Command::History {
            csv,
            asset_id,
            initial_capacity,
        } => {
            let history = load_cycle_history(&csv, &asset_id)
                .with_context(|| format!("Failed to load history for '{}'", asset_id))?;
            let mut set = CycleHistorySet::new();
            set.insert(&asset_id, history.samples().to_vec(), initial_capacity);
            let engine = SentinelEngine::new(set, thresholds)?;
            let report = engine.forecast(&asset_id)?;
            print_report(&report, &thresholds);
        }
    }
    Ok(())
}
