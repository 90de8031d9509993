// pixie-edit/src/processors/loader.rs
use crate::console::Console;
use crate::core::{EditorError, Image, Result};
use crate::utils::MAX_DIMENSION;
use image::ImageReader;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((MAX_DIMENSION, MAX_DIMENSION)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    /// Keeps asking for a path until one decodes. Only a closed input ends
    /// the loop early.
    pub fn load_interactive<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Image> {
        loop {
            let reply = console.prompt("Enter the path to your image: ")?;

            match self.load(Path::new(&reply)) {
                Ok(image) => return Ok(image),
                Err(err) => {
                    log::debug!("Load attempt failed: {}", err);
                    console.say(retry_message(&err))?;
                }
            }
        }
    }

    /// Single attempt: the path must be an existing regular file that
    /// decodes as an image.
    pub fn load(&self, path: &Path) -> Result<Image> {
        log::debug!("Loading image from: {}", path.display());

        if !path.is_file() {
            return Err(EditorError::FileNotFound(path.to_path_buf()));
        }

        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(path, e))?
            .decode()
            .map_err(|e| decode_error(path, e))?;

        if let Some((max_w, max_h)) = self.max_dimensions {
            let (width, height) = (decoded.width(), decoded.height());
            if width > max_w || height > max_h {
                return Err(decode_error(
                    path,
                    format!(
                        "dimensions {}x{} exceed maximum {}x{}",
                        width, height, max_w, max_h
                    ),
                ));
            }
        }

        let format = decoded.color();
        let image = Image::from_decoded(decoded);

        log::info!("Loaded image: {} (source format: {:?})", image, format);

        Ok(image)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, reason: impl ToString) -> EditorError {
    EditorError::Decode {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}

/// What the user sees after a failed attempt.
pub fn retry_message(err: &EditorError) -> &'static str {
    match err {
        EditorError::FileNotFound(_) => "File does not exist. Please try again.",
        _ => "Could not open or find the image. Please try again.",
    }
}
