/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Logo pixel data linked into the image.
//!
//! `res/logo.bin` is raw ARGB8888, row-major, little-endian. It can be
//! regenerated from a PNG with the `png_to_rust` tool.

use crate::error::{Error, Result};

pub const LOGO_WIDTH: u32 = 64;
pub const LOGO_HEIGHT: u32 = 24;
pub const LOGO_PIXEL_COUNT: usize = LOGO_WIDTH as usize * LOGO_HEIGHT as usize;

#[repr(C, align(4))]
struct U32Aligned<B: ?Sized> {
    bytes: B,
}

// The array type pins the blob size to the dimensions above.
static LOGO_BYTES: U32Aligned<[u8; LOGO_PIXEL_COUNT * 4]> = U32Aligned {
    bytes: *include_bytes!("../res/logo.bin"),
};

/// Raw pointer that may live in a `static`. The pointee is immutable.
#[repr(transparent)]
pub struct PixelPtr(*const u32);

unsafe impl Sync for PixelPtr {}

impl PixelPtr {
    pub const fn get(&self) -> *const u32 {
        self.0
    }
}

#[unsafe(export_name = "logoPixelDataStartPointer")]
pub static LOGO_PIXEL_DATA: PixelPtr = PixelPtr((&raw const LOGO_BYTES.bytes).cast::<u32>());

#[unsafe(export_name = "logo_pixel_count")]
pub static LOGO_PIXEL_COUNT_EXPORT: usize = LOGO_PIXEL_COUNT;

lazy_static::lazy_static! {
    static ref LOGO: Logo<'static> = {
        let pixels: &'static [u32] = bytemuck::cast_slice(&LOGO_BYTES.bytes);
        let logo = Logo::from_pixels(pixels, LOGO_WIDTH, LOGO_HEIGHT).unwrap_or_else(|err| {
            crate::error!("embedded logo: {err}");
            Logo {
                pixels,
                width: pixels.len() as u32,
                height: 1,
            }
        });
        crate::debug!("logo {}x{} at {:p}", logo.width, logo.height, logo.pixels.as_ptr());
        logo
    };
}

pub fn logo() -> &'static Logo<'static> {
    &LOGO
}

/// Same address C code sees through `logoPixelDataStartPointer`.
#[inline]
pub fn logo_ptr() -> *const u32 {
    LOGO_PIXEL_DATA.get()
}

/// Borrowed ARGB8888 image with known dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo<'a> {
    pixels: &'a [u32],
    width: u32,
    height: u32,
}

impl<'a> Logo<'a> {
    /// Views a little-endian byte blob as pixels. The bytes must already be
    /// 4-byte aligned; nothing is copied.
    pub fn from_bytes(bytes: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let pixels = bytemuck::try_cast_slice(bytes).map_err(|_| Error::Misaligned)?;
        Self::from_pixels(pixels, width, height)
    }

    pub fn from_pixels(pixels: &'a [u32], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &'a [u32] {
        self.pixels
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn first_pixel(&self) -> u32 {
        self.pixels[0]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn row(&self, y: u32) -> Option<&'a [u32]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        self.pixels.get(start..start + self.width as usize)
    }
}
