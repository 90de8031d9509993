// pixie-edit/src/core/session.rs
use super::{Image, Result};
use crate::console::Console;
use crate::processors::OperationKind;
use std::io::{BufRead, Write};

/// Holds the image the menu is working on. Replaced only by a successful
/// operation.
#[derive(Debug, Clone)]
pub struct Session {
    current_image: Image,
}

impl Session {
    pub fn new(image: Image) -> Self {
        Self {
            current_image: image,
        }
    }

    pub fn current_image(&self) -> &Image {
        &self.current_image
    }

    pub fn into_image(self) -> Image {
        self.current_image
    }

    /// Runs `kind` against the current image. On error the current image is
    /// left as it was and the error is handed back to the caller.
    pub fn dispatch<R: BufRead, W: Write>(
        &mut self,
        kind: OperationKind,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let result = kind.run(&self.current_image, console)?;
        log::debug!("{}: {} -> {}", kind, self.current_image, result);
        self.current_image = result;
        Ok(())
    }
}
