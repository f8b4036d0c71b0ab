use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use terminal_flow_art::{ArtLibrary, list_available};
use terminal_flow_config::Settings;

mod app;
mod capabilities;
mod cli;
mod logging;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let file_layer = terminal_flow_config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.layer(), file_layer)?;
    if let Some(path) = logging::init(cli.log_file.as_deref())? {
        tracing::info!(path = %path.display(), "logging enabled");
    }

    if cli.list {
        return list_art(&settings);
    }

    let depth = capabilities::detect(settings.color_depth)?;
    let mut library = ArtLibrary::open(&settings.text_dir)?;
    let start = starting_index(&library, cli.file.as_deref());
    let grid = library.open_at(start)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    register_signals(&shutdown)?;

    let app = App::new(settings.animation_state(), library, grid, depth, shutdown);
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// Route termination signals to the loop's shutdown flag.
#[cfg(unix)]
fn register_signals(shutdown: &Arc<AtomicBool>) -> color_eyre::Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    for signal in [SIGTERM, SIGINT, SIGHUP] {
        signal_hook::flag::register(signal, Arc::clone(shutdown))
            .wrap_err("failed to register signal handler")?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn register_signals(shutdown: &Arc<AtomicBool>) -> color_eyre::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};

    for signal in [SIGTERM, SIGINT] {
        signal_hook::flag::register(signal, Arc::clone(shutdown))
            .wrap_err("failed to register signal handler")?;
    }
    Ok(())
}

/// Print the art files that would be cycled through.
fn list_art(settings: &Settings) -> color_eyre::Result<()> {
    let files = list_available(&settings.text_dir)?;
    if files.is_empty() {
        println!("No .txt files found in {}", settings.text_dir.display());
        return Ok(());
    }
    println!("Art files in {}:", settings.text_dir.display());
    for file in files {
        if let Some(name) = file.file_name() {
            println!("  {}", name.to_string_lossy());
        }
    }
    Ok(())
}

/// The requested file's index, or a time-seeded pick when there is none.
fn starting_index(library: &ArtLibrary, requested: Option<&str>) -> usize {
    if let Some(name) = requested {
        match library.find(name) {
            Some(index) => return index,
            None => {
                tracing::warn!(name, "requested art file not found, starting with a random one");
                eprintln!("Warning: {name} not found, starting with a random file");
            }
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    (seed % library.len() as u64) as usize
}
