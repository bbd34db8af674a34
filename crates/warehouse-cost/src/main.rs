use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warehouse_cost_estimator::{
    month_labels, ConfigLoader, CostProjector, EstimatorConfig, ProjectionResult, UsageConfig,
};

mod form;
mod format;
mod report;
mod widgets;

use form::{FormField, Step};
use widgets::*;

const DEFAULT_CONFIG_PATH: &str = "~/.config/warehouse-cost/config.json";
const LOG_ENV_VAR: &str = "WAREHOUSE_COST_LOG";
const LOG_FILE_NAME: &str = "warehouse-cost.log";

#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    Optimizations,
}

#[derive(Parser, Debug)]
#[clap(author = "Red", version, about)]
struct Args {
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Print a text report instead of starting the dashboard
    #[arg(long = "report", conflicts_with = "json")]
    report: bool,

    /// Print the projection as JSON instead of starting the dashboard
    #[arg(long = "json")]
    json: bool,

    #[arg(long = "gen2")]
    gen2: bool,
}

/// Where log lines go once enabled. The dashboard owns the terminal, so it
/// logs to a file; report and JSON runs log to stderr.
#[derive(Debug, Clone, PartialEq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn init_logging(verbose: bool, target: LogTarget) -> Result<()> {
    if !(verbose || std::env::var(LOG_ENV_VAR).is_ok()) {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new("off"))
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init();
        return Ok(());
    }

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| "warehouse_cost=info,warehouse_cost_estimator=info".into());

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
    }

    Ok(())
}

fn get_log_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name(LOG_FILE_NAME)
}

fn log_target(args: &Args, config_path: &Path) -> LogTarget {
    if args.report || args.json {
        LogTarget::Stderr
    } else {
        LogTarget::File(get_log_path(config_path))
    }
}

fn get_config_path(config: Option<&str>) -> PathBuf {
    let path = config.unwrap_or(DEFAULT_CONFIG_PATH);
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn load_config(path: &Path) -> Result<EstimatorConfig> {
    if path.exists() {
        ConfigLoader::new().load_from_file(path)
    } else {
        // Return default config
        debug!(path = %path.display(), "no config file, using defaults");
        Ok(EstimatorConfig::default())
    }
}

fn save_config(path: &Path, config: &EstimatorConfig) -> Result<()> {
    ConfigLoader::new().save_to_file(path, config)
}

fn projection_start() -> Result<NaiveDate> {
    let year = Utc::now().year();
    NaiveDate::from_ymd_opt(year, 1, 1).context("Invalid projection start date")
}

pub struct AppState {
    pub config: UsageConfig,
    pub projector: CostProjector,
    pub projection: Option<ProjectionResult>,
    pub month_labels: Vec<String>,
    pub selected_field: usize,
    pub chart_view: ChartView,
    pub active_popup: Option<PopupType>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub last_update: DateTime<Utc>,
}

impl AppState {
    fn new(config: UsageConfig, projector: CostProjector, month_labels: Vec<String>) -> Self {
        let mut state = Self {
            config,
            projector,
            projection: None,
            month_labels,
            selected_field: 0,
            chart_view: ChartView::MonthlyBreakdown,
            active_popup: None,
            error_message: None,
            status_message: None,
            last_update: Utc::now(),
        };
        state.recalculate();
        state
    }

    fn recalculate(&mut self) {
        match self.projector.project(&self.config) {
            Ok(projection) => {
                self.projection = Some(projection);
                self.error_message = None;
            }
            Err(e) => {
                self.projection = None;
                self.error_message = Some(e.to_string());
            }
        }
        self.last_update = Utc::now();
    }

    fn selected(&self) -> FormField {
        FormField::ALL[self.selected_field]
    }

    fn select_previous(&mut self) {
        self.selected_field = self
            .selected_field
            .checked_sub(1)
            .unwrap_or(FormField::ALL.len() - 1);
    }

    fn select_next(&mut self) {
        self.selected_field = (self.selected_field + 1) % FormField::ALL.len();
    }

    fn adjust_selected(&mut self, step: Step) {
        let field = self.selected();
        field.step(&mut self.config, step);
        debug!(field = field.label(), value = %field.display_value(&self.config), "input changed");
        self.status_message = None;
        self.recalculate();
    }

    fn toggle_gen2(&mut self) {
        self.config.gen2 = !self.config.gen2;
        self.status_message = None;
        self.recalculate();
    }

    fn toggle_popup(&mut self, popup: PopupType) {
        self.active_popup = if self.active_popup.as_ref() == Some(&popup) {
            None
        } else {
            Some(popup)
        };
    }

    fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            usage: self.config.clone(),
            pricing: Some(self.projector.price_sheet().clone()),
        }
    }
}

pub struct App {
    state: AppState,
    config_path: PathBuf,
    exit: bool,
}

impl App {
    pub fn new(state: AppState, config_path: PathBuf) -> Self {
        Self {
            state,
            config_path,
            exit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut tick_interval = interval(Duration::from_millis(100));

        loop {
            tick_interval.tick().await;

            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            if self.exit {
                break;
            }

            terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(40)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Min(8),
            ])
            .split(columns[1]);

        let state = &self.state;
        HeaderWidget::render(frame, rows[0], state);
        InputsWidget::render(frame, columns[0], state);
        SummaryWidget::render(frame, right[0], state);
        BreakdownWidget::render(frame, right[1], state);
        ChartsWidget::render(frame, right[2], state);
        ShortcutsWidget::render(frame, rows[2], state);

        match &state.active_popup {
            Some(PopupType::Optimizations) => {
                OptimizationsPopupWidget::render(frame, area, state);
            }
            None => {}
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Press {
                match key_event.code {
                    KeyCode::Char('q') => self.exit = true,
                    KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
                    KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
                    KeyCode::Left | KeyCode::Char('h') => self.state.adjust_selected(Step::Down),
                    KeyCode::Right | KeyCode::Char('l') => self.state.adjust_selected(Step::Up),
                    KeyCode::Char('g') => self.state.toggle_gen2(),
                    KeyCode::Tab => {
                        self.state.chart_view = self.state.chart_view.next();
                    }
                    KeyCode::Char('o') => self.state.toggle_popup(PopupType::Optimizations),
                    KeyCode::Char('s') => self.save(),
                    KeyCode::Esc => {
                        // Close any popup if open
                        self.state.active_popup = None;
                    }
                    _ => {}
                }
            }
        }
    }

    fn save(&mut self) {
        let config = self.state.estimator_config();
        self.state.status_message = match save_config(&self.config_path, &config) {
            Ok(()) => Some(format!("Saved to {}", self.config_path.display())),
            Err(e) => {
                warn!("could not save config: {:#}", e);
                Some(format!("Save failed: {}", e))
            }
        };
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = get_config_path(args.config.as_deref());
    init_logging(args.verbose, log_target(&args, &config_path))?;

    let estimator_config = load_config(&config_path)?;

    let mut usage = estimator_config.usage.clone();
    if args.gen2 {
        usage.gen2 = true;
    }

    let projector = CostProjector::with_price_sheet(estimator_config.price_sheet())?;
    let labels = month_labels(projection_start()?);

    if args.report || args.json {
        let projection = projector.project(&usage)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        } else {
            print!("{}", report::render_report(&usage, &projection, &labels));
        }
        return Ok(());
    }

    info!(path = %config_path.display(), "starting dashboard");

    let mut terminal = ratatui::init();
    let mut app = App::new(AppState::new(usage, projector, labels), config_path);

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
