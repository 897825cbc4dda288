use {
    anyhow::Result,
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::path::PathBuf,
};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    Cli,
    app::{AppState, AssetView, DashboardTab, SensorViewState, TraceOutcome},
    data::{LogFileRef, load_metadata, load_sensor_trace},
    engine::SentinelEngine,
    models::HealthStatus,
    ui::UI_CONFIG,
};

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct App {
    pub(crate) selected_asset: Option<String>, // persists across sessions.
    pub(crate) tab: DashboardTab,
    #[serde(skip)]
    pub(crate) engine: Option<SentinelEngine>,
    #[serde(skip)]
    pub(crate) asset_ids: Vec<String>,
    /// Status per entry of `asset_ids`, None where the forecast failed.
    #[serde(skip)]
    pub(crate) fleet_statuses: Vec<Option<HealthStatus>>,
    #[serde(skip)]
    pub(crate) log_dir: PathBuf,
    #[serde(skip)]
    pub(crate) current: Option<AssetView>,
    #[serde(skip)]
    pub(crate) sensor: SensorViewState,
    #[serde(skip)]
    pub(crate) state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.log_dir = args.data_dir.clone();
        match build_engine(&args) {
            Ok(engine) => app.install_engine(engine),
            Err(e) => {
                log::error!("Failed to start engine: {:#}", e);
                app.state = AppState::LoadFailed(format!("{:#}", e));
            }
        }
        app
    }

    pub(crate) fn install_engine(&mut self, engine: SentinelEngine) {
        self.asset_ids = engine.asset_ids();
        self.fleet_statuses = engine.fleet_report().iter().map(|e| e.status()).collect();
        self.engine = Some(engine);
        self.state = AppState::Running;

        // Persisted selection may name a site that is gone now.
        let still_listed = self
            .selected_asset
            .as_ref()
            .is_some_and(|id| self.asset_ids.contains(id));
        if !still_listed {
            self.selected_asset = self.asset_ids.first().cloned();
        }
        self.current = None;
        self.refresh_current();
    }

    pub(crate) fn select_asset(&mut self, asset_id: String) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("select_asset(): {}", asset_id);
        }
        self.selected_asset = Some(asset_id);
        self.refresh_current();
    }

    /// Recomputes the forecast when the selection no longer matches the cached view.
    pub(crate) fn refresh_current(&mut self) {
        let Some(engine) = &self.engine else { return };
        let Some(asset_id) = &self.selected_asset else {
            self.current = None;
            return;
        };
        if self.current.as_ref().is_some_and(|v| &v.asset_id == asset_id) {
            return;
        }

        let result = engine.forecast(asset_id);
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        self.current = Some(AssetView {
            asset_id: asset_id.clone(),
            result,
        });

        // Newest log first, same as the selector.
        let newest = engine
            .log_files(asset_id)
            .first()
            .map(|f| f.filename.clone());
        self.sensor.selected_file = None;
        if let Some(filename) = newest {
            self.select_log_file(filename);
        }
    }

    pub(crate) fn log_files(&self) -> &[LogFileRef] {
        match (&self.engine, &self.selected_asset) {
            (Some(engine), Some(id)) => engine.log_files(id),
            _ => &[],
        }
    }

    /// Loads the trace on first use and caches it by filename.
    pub(crate) fn select_log_file(&mut self, filename: String) {
        if !self.sensor.cache.contains_key(&filename) {
            let outcome = match load_sensor_trace(&self.log_dir, &filename) {
                Ok(Some(trace)) => TraceOutcome::Loaded(trace),
                Ok(None) => TraceOutcome::Missing,
                Err(e) => {
                    log::warn!("{:#}", e);
                    TraceOutcome::Failed(format!("{:#}", e))
                }
            };

            #[cfg(debug_assertions)]
            if DF.log_sensor_trace {
                log::info!(
                    "select_log_file(): {} loaded={}",
                    filename,
                    matches!(outcome, TraceOutcome::Loaded(_))
                );
            }

            self.sensor.cache.insert(filename.clone(), outcome);
        }
        self.sensor.selected_file = Some(filename);
    }
}

fn build_engine(args: &Cli) -> Result<SentinelEngine> {
    let thresholds = args.thresholds.resolve(args.config.as_deref())?;
    let index = load_metadata(&args.metadata)?;
    if index.is_empty() {
        log::warn!(
            "{} lists no sites with discharge history",
            args.metadata.display()
        );
    }
    Ok(SentinelEngine::new(index, thresholds)?)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
