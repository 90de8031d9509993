use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use pixie_edit::{preview_for, retry_message, Cli, Console, Editor, Loader, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let mut console = Console::stdio();
    let loader = Loader::new();

    let preloaded = match &cli.image {
        Some(path) => match loader.load(path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::debug!("Could not load {}: {}", path.display(), e);
                console.say(retry_message(&e))?;
                None
            }
        },
        None => None,
    };

    let image = match preloaded {
        Some(image) => image,
        None => loader
            .load_interactive(&mut console)
            .context("No image was loaded")?,
    };

    let mut editor = Editor::new(Session::new(image), console, preview_for(cli.headless));
    editor.run().context("Editor session failed")?;

    Ok(())
}
