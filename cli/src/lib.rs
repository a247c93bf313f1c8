use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_common::{init_file_logging, DeckConfig, LogGuard};
use deck_core::{content, Presentation, PresentationData};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "Terminal presentation viewer with tabbed sections and in-place slide editing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Content file (JSON, or TOML by extension) instead of the built-in deck
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive viewer (default)
    View,
    /// Print a single frame as plain text
    Render {
        /// Main tab (section id) to select
        #[arg(long)]
        tab: Option<String>,
        /// Sub tab to select within the selected main tab
        #[arg(long)]
        sub: Option<String>,
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..))]
        width: u16,
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(10..))]
        height: u16,
        /// Leave out the key hint line
        #[arg(long)]
        no_help: bool,
        /// Print the document as JSON instead of a frame
        #[arg(long)]
        dump_json: bool,
    },
    /// Validate the content and print a summary
    Check,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DeckConfig::load().await?;
    if let Some(path) = cli.content.clone() {
        config.content = Some(path);
    }
    if let Some(path) = cli.log_file.clone() {
        config.log_path = Some(path);
    }
    if cli.debug {
        config.log_level = "debug".to_string();
    }
    let _log_guard = init_logging(&config);
    match config.content.as_deref() {
        Some(path) => tracing::info!("content from {}", path.display()),
        None => tracing::info!("built-in content"),
    }

    match cli.command {
        Some(Commands::View) | None => {
            tracing::info!("starting viewer");
            let data = load_content(config.content.as_deref())?;
            deck_tui::run_viewer(Presentation::new(data), config.show_help).await?;
        }
        Some(Commands::Render {
            tab,
            sub,
            width,
            height,
            no_help,
            dump_json,
        }) => {
            tracing::info!(?tab, ?sub, width, height, dump_json, "render");
            let data = load_content(config.content.as_deref())?;
            let presentation = select(Presentation::new(data), tab, sub);
            if dump_json {
                println!("{}", serde_json::to_string_pretty(presentation.state().data().as_ref())?);
            } else {
                print!(
                    "{}",
                    deck_tui::render_to_string(presentation.state(), width, height, !no_help)?
                );
            }
        }
        Some(Commands::Check) => {
            tracing::info!("running check");
            check(config.content.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(config: &DeckConfig) -> LogGuard {
    let Some(path) = config.resolved_log_path() else {
        return LogGuard::disabled();
    };
    match init_file_logging(&path, &config.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("deck: logging disabled: {e:#}");
            LogGuard::disabled()
        }
    }
}

fn load_content(path: Option<&Path>) -> Result<PresentationData> {
    content::load(path).with_context(|| match path {
        Some(path) => format!("loading content from {}", path.display()),
        None => "loading built-in content".to_string(),
    })
}

fn select(mut presentation: Presentation, tab: Option<String>, sub: Option<String>) -> Presentation {
    if let Some(tab) = tab {
        presentation.select_main_tab(tab);
    }
    if let Some(sub) = sub {
        let section = presentation.state().selection().active_main_tab().to_string();
        presentation.select_sub_tab(section, sub);
    }
    presentation
}

fn check(path: Option<&Path>) -> Result<()> {
    let data = match path {
        Some(path) => content::read_path(path),
        None => content::seed(),
    }
    .context("reading content")?;
    let warnings = content::validate(&data).context("validating content")?;

    println!(
        "{}: {} sections, {} slides",
        data.title,
        data.sections.len(),
        data.slide_count()
    );
    for section in data.sections.iter() {
        println!(
            "  {}: {} slides, {} sub tabs",
            section.id,
            section.slides.len(),
            section.sub_nav.len()
        );
    }
    for warning in &warnings {
        println!("warning: {warning}");
    }
    Ok(())
}
