// pixie-edit/src/processors/mod.rs
mod filters;
mod geometry;
mod intensity;
mod loader;

pub use filters::{blur, close, detect_edges};
pub use geometry::{resize, rotate, translate};
pub use intensity::normalize;
pub use loader::{retry_message, Loader};

use crate::console::Console;
use crate::core::{ChannelDepth, EditorError, Image, Result};
use std::fmt;
use std::io::{BufRead, Write};

const ANY_DEPTH: &[ChannelDepth] = &[ChannelDepth::Gray, ChannelDepth::Color];

/// The seven menu operations, before their parameters are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Resize,
    Rotate,
    Translate,
    Normalize,
    EdgeDetection,
    Blur,
    MorphologicalClose,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Resize,
        OperationKind::Rotate,
        OperationKind::Translate,
        OperationKind::Normalize,
        OperationKind::EdgeDetection,
        OperationKind::Blur,
        OperationKind::MorphologicalClose,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Resize => "Resize",
            OperationKind::Rotate => "Rotate",
            OperationKind::Translate => "Translate",
            OperationKind::Normalize => "Normalize",
            OperationKind::EdgeDetection => "Edge Detection",
            OperationKind::Blur => "Blur",
            OperationKind::MorphologicalClose => "Morphological Operations",
        }
    }

    /// Title of the preview window shown after the operation.
    pub fn window_title(self) -> &'static str {
        match self {
            OperationKind::Resize => "Resized Image",
            OperationKind::Rotate => "Rotated Image",
            OperationKind::Translate => "Translated Image",
            OperationKind::Normalize => "Normalized Image",
            OperationKind::EdgeDetection => "Edge Detection",
            OperationKind::Blur => "Blurred Image",
            OperationKind::MorphologicalClose => "Morphological Operation",
        }
    }

    pub fn accepted_depths(self) -> &'static [ChannelDepth] {
        ANY_DEPTH
    }

    pub fn check_depth(self, image: &Image) -> Result<()> {
        if self.accepted_depths().contains(&image.depth()) {
            Ok(())
        } else {
            Err(EditorError::UnsupportedChannelDepth {
                operation: self.label().to_string(),
                depth: image.depth().to_string(),
            })
        }
    }

    /// Prompts for this operation's parameters.
    pub fn read_params<R: BufRead, W: Write>(
        self,
        console: &mut Console<R, W>,
    ) -> Result<Operation> {
        let op = match self {
            OperationKind::Resize => Operation::Resize {
                width: console.prompt_int("Enter the width to resize: ", "width")?,
                height: console.prompt_int("Enter the height to resize: ", "height")?,
            },
            OperationKind::Rotate => Operation::Rotate {
                degrees: console.prompt_float("Enter the angle to rotate (in degrees): ", "angle")?,
            },
            OperationKind::Translate => Operation::Translate {
                tx: console.prompt_int("Enter the number of pixels to shift right: ", "tx")?,
                ty: console.prompt_int("Enter the number of pixels to shift down: ", "ty")?,
            },
            OperationKind::Normalize => Operation::Normalize,
            OperationKind::EdgeDetection => Operation::EdgeDetection {
                lower: console.prompt_int(
                    "Enter the lower threshold for Canny edge detection: ",
                    "lower threshold",
                )?,
                upper: console.prompt_int(
                    "Enter the upper threshold for Canny edge detection: ",
                    "upper threshold",
                )?,
            },
            OperationKind::Blur => Operation::Blur {
                kernel_size: console.prompt_int(
                    "Enter the size of the Gaussian kernel (odd number): ",
                    "kernel size",
                )?,
            },
            OperationKind::MorphologicalClose => Operation::MorphologicalClose {
                kernel_size: console.prompt_int(
                    "Enter the size of the kernel (odd number): ",
                    "kernel size",
                )?,
            },
        };
        Ok(op)
    }

    /// Reads parameters, then applies the operation. The input is only
    /// borrowed, so on any error the caller still holds it untouched.
    pub fn run<R: BufRead, W: Write>(
        self,
        image: &Image,
        console: &mut Console<R, W>,
    ) -> Result<Image> {
        self.check_depth(image)?;
        let op = self.read_params(console)?;
        log::info!("Applying {}", op);
        op.apply(image)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An operation together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Resize { width: i64, height: i64 },
    Rotate { degrees: f64 },
    Translate { tx: i64, ty: i64 },
    Normalize,
    EdgeDetection { lower: i64, upper: i64 },
    Blur { kernel_size: i64 },
    MorphologicalClose { kernel_size: i64 },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Resize { .. } => OperationKind::Resize,
            Operation::Rotate { .. } => OperationKind::Rotate,
            Operation::Translate { .. } => OperationKind::Translate,
            Operation::Normalize => OperationKind::Normalize,
            Operation::EdgeDetection { .. } => OperationKind::EdgeDetection,
            Operation::Blur { .. } => OperationKind::Blur,
            Operation::MorphologicalClose { .. } => OperationKind::MorphologicalClose,
        }
    }

    pub fn apply(&self, image: &Image) -> Result<Image> {
        self.kind().check_depth(image)?;

        match *self {
            Operation::Resize { width, height } => resize(image, width, height),
            Operation::Rotate { degrees } => {
                if !degrees.is_finite() {
                    return Err(EditorError::invalid_parameter(
                        "angle",
                        "must be a finite number",
                    ));
                }
                Ok(rotate(image, degrees))
            }
            Operation::Translate { tx, ty } => Ok(translate(image, tx, ty)),
            Operation::Normalize => Ok(normalize(image)),
            Operation::EdgeDetection { lower, upper } => Ok(detect_edges(image, lower, upper)),
            Operation::Blur { kernel_size } => blur(image, kernel_size),
            Operation::MorphologicalClose { kernel_size } => close(image, kernel_size),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Resize { width, height } => write!(f, "resize to {}x{}", width, height),
            Operation::Rotate { degrees } => write!(f, "rotate by {} degrees", degrees),
            Operation::Translate { tx, ty } => write!(f, "translate by ({}, {})", tx, ty),
            Operation::Normalize => write!(f, "normalize"),
            Operation::EdgeDetection { lower, upper } => {
                write!(f, "edge detection ({}, {})", lower, upper)
            }
            Operation::Blur { kernel_size } => write!(f, "blur with kernel {}", kernel_size),
            Operation::MorphologicalClose { kernel_size } => {
                write!(f, "close with kernel {}", kernel_size)
            }
        }
    }
}
