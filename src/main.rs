//! Financial Literacy Dashboard CLI
//!
//! Command-line interface for the dashboard:
//! - Render the dashboard headless as text or JSON
//! - Export a chart dataset
//! - Serve the compiled browser bundle
//! - Print or write the default configuration

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use finlit::config::{generate_default_config, Config};
use finlit::export::{default_filename, export_dataset, ExportError, ExportFormat};
use finlit::{ChartId, Dashboard, Size};

#[derive(Parser)]
#[command(name = "finlit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Financial literacy dashboard for India")]
#[command(long_about = "Static insights into India's financial awareness.\nRender the dashboard in the terminal, export its datasets, or serve the browser build.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: $CONFIG_DIR/finlit/config.toml, then ./finlit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard
    Render {
        /// Nav section to highlight (overview, demographics, trends, insights)
        #[arg(short, long)]
        section: Option<String>,
        /// Chart to show (demographics, states, gender, trends)
        #[arg(short, long)]
        chart: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: RenderFormat,
        /// Chart canvas width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        /// Chart canvas height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f64,
    },

    /// Export a chart dataset
    Export {
        /// Dataset (demographics, states, gender, trends)
        dataset: String,
        /// Output format (csv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the compiled front-end
    Serve {
        /// Directory with the trunk build output
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the default configuration
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the active theme as CSS custom properties instead
        #[arg(long)]
        css: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let resolved =
        Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    finlit::logging::init(&resolved.config.logging).context("Failed to initialize logging")?;

    match &resolved.source {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    for note in &resolved.ignored {
        tracing::warn!("{}", note);
    }
    let config = resolved.config;

    match cli.command {
        Commands::Render {
            section,
            chart,
            format,
            width,
            height,
        } => render(
            section.as_deref(),
            chart.as_deref(),
            format,
            Size { width, height },
        ),
        Commands::Export {
            dataset,
            format,
            output,
        } => export(&dataset, &format, output.as_deref()),
        Commands::Serve { dist, host, port } => {
            let mut server = config.server;
            if let Some(dist) = dist {
                server.dist_dir = dist;
            }
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            tracing::info!("Financial Literacy Dashboard v{}", env!("CARGO_PKG_VERSION"));
            finlit::serve(server).await.context("Development server failed")
        }
        Commands::Config { output, css } => {
            let content = if css {
                config.theme.css_variables() + "\n"
            } else {
                generate_default_config()
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    tracing::info!("Wrote {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn render(
    section: Option<&str>,
    chart: Option<&str>,
    format: RenderFormat,
    size: Size,
) -> anyhow::Result<()> {
    if !(size.width > 0.0 && size.height > 0.0) {
        anyhow::bail!("Chart size must be positive, got {}x{}", size.width, size.height);
    }

    let mut dashboard = Dashboard::with_chart_size(size);
    if let Some(section) = section {
        dashboard.select_section(section);
    }
    if let Some(chart) = chart {
        if ChartId::lookup(chart).is_none() {
            tracing::warn!("Unknown chart {:?}, the charts panel will be empty", chart);
        }
        dashboard.charts_mut().select_chart(chart);
    }

    let doc = dashboard.render();
    match format {
        RenderFormat::Text => print!("{}", doc),
        RenderFormat::Json => println!("{}", doc.to_json().context("Failed to serialize dashboard")?),
    }
    Ok(())
}

fn export(dataset: &str, format: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let id: ChartId = dataset.parse().map_err(ExportError::from)?;
    let format: ExportFormat = format.parse()?;

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(default_filename(id, format, Utc::now()))
            } else {
                path.to_path_buf()
            };

            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {:?}", path))?;
            let mut writer = BufWriter::new(file);
            let rows = export_dataset(id, format, &mut writer)?;
            writer.flush()?;
            tracing::info!("Exported {} {} rows to {:?}", rows, id, path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            export_dataset(id, format, &mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}
