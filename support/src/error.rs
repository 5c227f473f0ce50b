/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel bytes are not 4-byte aligned or not a whole number of words.
    Misaligned,
    EmptyImage,
    PixelCountMismatch { expected: usize, actual: usize },
    BufferTooSmall { required: usize, actual: usize },
    InvalidStride { width: u32, stride: u32 },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned => write!(f, "pixel data is not a 4-byte aligned run of u32 words"),
            Self::EmptyImage => write!(f, "image has a zero dimension"),
            Self::PixelCountMismatch { expected, actual } => {
                write!(f, "expected {expected} pixels, got {actual}")
            }
            Self::BufferTooSmall { required, actual } => {
                write!(f, "buffer holds {actual} pixels, needs {required}")
            }
            Self::InvalidStride { width, stride } => {
                write!(f, "stride {stride} is narrower than width {width}")
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
