// pixie-edit/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Interactive image editor: load one image, then resize, rotate,
/// translate, normalize, detect edges, blur or close it from a menu.
#[derive(Parser, Debug)]
#[command(name = "pixie-edit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image to open. If missing or unreadable, the path is asked for.
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Never open preview windows; log the result instead.
    #[arg(long)]
    pub headless: bool,
}
