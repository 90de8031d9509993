mod cli;
mod console;
mod core;
mod preview;
mod processors;
mod utils;

pub use cli::Cli;
pub use console::Console;
pub use crate::core::editor::{Editor, MenuChoice, MenuState};
pub use crate::core::session::Session;
pub use crate::core::{ChannelDepth, EditorError, Image, Result};
pub use preview::{preview_for, HeadlessPreview, Preview};
#[cfg(feature = "window")]
pub use preview::WindowPreview;
pub use processors::{
    blur, close, detect_edges, normalize, resize, retry_message, rotate, translate, Loader,
    Operation, OperationKind,
};
pub use utils::{
    gaussian_kernel, gaussian_sigma, validate_buffer_size, validate_dimensions, validate_odd_kernel,
    MAX_BUFFER_BYTES, MAX_DIMENSION,
};

// Re-export commonly used types
pub use image::DynamicImage;
