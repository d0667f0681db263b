mod app;
mod clipboard;
mod config;
mod error;
mod generator;
mod models;
mod session;
mod settings;
mod ui;
pub mod utils;

use anyhow::{Context, Result};
use app::App;
use clap::{ArgAction, Parser};
use clipboard::{Clipboard, SystemClipboard};
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use generator::SimulatedGenerator;
use ratatui::{backend::CrosstermBackend, Terminal};
use session::PromptSession;
use settings::Catalog;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prompt-professor")]
#[command(version)]
#[command(about = "Craft prompts from a style, a field of expertise and a task", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    /// Output style: persuasive, informative, narrative, technical
    #[arg(short, long)]
    style: Option<String>,

    /// Field of expertise: marketing, teaching, creative-writing, engineering
    #[arg(short, long)]
    expertise: Option<String>,

    /// Initial prompt idea (up to 1,200 characters)
    #[arg(short, long)]
    input: Option<String>,

    /// Simulated generation delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Generate once and print the prompt instead of opening the interface
    #[arg(long, default_value_t = false, help_heading = "Flags")]
    print: bool,

    /// List the settings catalog with defaults
    #[arg(long, default_value_t = false, help_heading = "Flags")]
    settings: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = !(cli.print || cli.settings);
    init_tracing(cli.log_file.as_deref(), interactive)?;

    let catalog = Catalog::embedded()?;
    if cli.settings {
        print_settings(&catalog);
        return Ok(());
    }

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        tracing::warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    let mut session =
        PromptSession::with_selections(app_config.prompt.style, app_config.prompt.expertise);
    if let Some(style) = &cli.style {
        session.set_style(style)?;
    }
    if let Some(expertise) = &cli.expertise {
        session.set_expertise(expertise)?;
    }
    if let Some(input) = cli.input {
        session.set_input(input)?;
    }

    let delay = cli
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| app_config.prompt.delay());
    let generator = Arc::new(SimulatedGenerator::new(delay));

    if cli.print {
        if session.generate(generator.as_ref())? {
            println!("{}", session.output());
        }
        return Ok(());
    }

    let clipboard: Option<Box<dyn Clipboard>> = match SystemClipboard::new() {
        Ok(clipboard) => Some(Box::new(clipboard)),
        Err(err) => {
            tracing::warn!(error = %err, "system clipboard unavailable");
            None
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, catalog, app_config.theme, generator, clipboard);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // the terminal belongs to the interface, stderr would tear the screen
        None if interactive => {}
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn print_settings(catalog: &Catalog) {
    const W_LABEL: usize = 24;
    const W_ID: usize = 22;
    const W_DEFAULT: usize = 9;

    println!();
    for (category, settings) in catalog.by_category() {
        println!("  {}", category.heading());
        println!(
            "  {:<lw$}{:<iw$}{:<dw$}description",
            "label",
            "id",
            "default",
            lw = W_LABEL,
            iw = W_ID,
            dw = W_DEFAULT
        );
        println!("  {}", "-".repeat(W_LABEL + W_ID + W_DEFAULT + 11));
        for setting in settings {
            let default = if setting.default_value { "on" } else { "off" };
            println!(
                "  {:<lw$}{:<iw$}{:<dw$}{}",
                setting.label,
                setting.id,
                default,
                setting.description,
                lw = W_LABEL,
                iw = W_ID,
                dw = W_DEFAULT
            );
        }
        println!();
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;
        app.tick();

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        KeyCode::Esc => app.quit(),
                        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.quit(),
                        KeyCode::Char('g') if ctrl => app.generate(),
                        KeyCode::Char('y') if ctrl => app.copy(),
                        KeyCode::Char(_) if ctrl => {}
                        KeyCode::F(2) => app.toggle_screen(),
                        KeyCode::Tab => app.next_focus(),
                        KeyCode::BackTab => app.prev_focus(),
                        KeyCode::Enter => app.on_enter(),
                        KeyCode::Backspace => app.on_backspace(),
                        KeyCode::Up | KeyCode::Left => app.on_up(),
                        KeyCode::Down | KeyCode::Right => app.on_down(),
                        KeyCode::Char(c) => app.on_key(c),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
