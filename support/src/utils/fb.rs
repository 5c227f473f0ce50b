/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use crate::{
    assets::{Logo, logo},
    error::{Error, Result},
};

/// Drawing surface over a caller-owned ARGB8888 buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    buf: &'a mut [u32],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut [u32], width: u32, height: u32) -> Result<Self> {
        Self::with_stride(buf, width, height, width)
    }

    /// `stride` is the distance between rows in pixels, not bytes.
    pub fn with_stride(buf: &'a mut [u32], width: u32, height: u32, stride: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        if stride < width {
            return Err(Error::InvalidStride { width, stride });
        }
        let required = (stride as usize)
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(width as usize))
            .unwrap_or(usize::MAX);
        if buf.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: buf.len(),
            });
        }
        crate::debug!("canvas {width}x{height} stride {stride}");
        Ok(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride as usize + x as usize
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.buf[self.index(x, y)])
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.buf[i] = color;
    }

    pub fn draw_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: u32) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }
        for row in y..y_end {
            let start = self.index(x, row);
            let end = self.index(x_end, row);
            self.buf[start..end].fill(color);
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.draw_rect(0, 0, self.width, self.height, color);
    }

    pub fn draw_sprite(&mut self, x: u32, y: u32, sprite: &Logo<'_>, transparent: Option<u32>) {
        if x >= self.width || y >= self.height {
            return;
        }
        let visible_w = sprite.width().min(self.width - x);
        let visible_h = sprite.height().min(self.height - y);

        for sy in 0..visible_h {
            let Some(src) = sprite.row(sy) else {
                return;
            };
            let src = &src[..visible_w as usize];
            let start = self.index(x, y + sy);
            let dst = &mut self.buf[start..start + visible_w as usize];

            match transparent {
                None => dst.copy_from_slice(src),
                Some(key) => {
                    for (d, &s) in dst.iter_mut().zip(src) {
                        if s != key {
                            *d = s;
                        }
                    }
                }
            }
        }
    }

    pub fn draw_logo(&mut self, x: u32, y: u32) {
        self.draw_sprite(x, y, logo(), None);
    }

    /// Returns where the logo's top-left corner landed.
    pub fn draw_logo_centered(&mut self) -> (u32, u32) {
        let logo = logo();
        let x = (self.width / 2).saturating_sub(logo.width() / 2);
        let y = (self.height / 2).saturating_sub(logo.height() / 2);
        self.draw_sprite(x, y, logo, None);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{LOGO_HEIGHT, LOGO_WIDTH};

    #[test]
    fn rejects_bad_geometry() {
        let mut buf = [0u32; 16];
        assert_eq!(
            Canvas::with_stride(&mut buf, 4, 4, 3).unwrap_err(),
            Error::InvalidStride {
                width: 4,
                stride: 3
            }
        );
        assert_eq!(
            Canvas::new(&mut buf, 4, 5).unwrap_err(),
            Error::BufferTooSmall {
                required: 20,
                actual: 16
            }
        );
        assert_eq!(Canvas::new(&mut buf, 0, 5).unwrap_err(), Error::EmptyImage);
        // last row needs no padding
        assert!(Canvas::with_stride(&mut buf, 3, 4, 4).is_ok());
    }

    #[test]
    fn pixels_and_rects_clip() {
        let mut buf = [0u32; 16];
        let mut canvas = Canvas::new(&mut buf, 4, 4).unwrap();
        canvas.draw_pixel(4, 0, 9);
        canvas.draw_pixel(0, 4, 9);
        canvas.draw_rect(2, 2, 10, 10, 7);
        assert_eq!(canvas.get_pixel(3, 3), Some(7));
        assert_eq!(canvas.get_pixel(1, 1), Some(0));
        assert_eq!(canvas.get_pixel(4, 4), None);
        assert_eq!(buf.iter().filter(|&&px| px == 7).count(), 4);
        assert!(!buf.contains(&9));
    }

    #[test]
    fn clear_keeps_stride_padding() {
        let mut buf = [0xDEADu32; 12];
        let mut canvas = Canvas::with_stride(&mut buf, 2, 3, 4).unwrap();
        canvas.clear(1);
        assert_eq!(buf, [1, 1, 0xDEAD, 0xDEAD, 1, 1, 0xDEAD, 0xDEAD, 1, 1, 0xDEAD, 0xDEAD]);
    }

    #[test]
    fn sprite_transparency_and_clipping() {
        let pixels = [1, 0, 0, 2];
        let sprite = Logo::from_pixels(&pixels, 2, 2).unwrap();
        let mut buf = [5u32; 9];
        let mut canvas = Canvas::new(&mut buf, 3, 3).unwrap();
        canvas.draw_sprite(0, 0, &sprite, Some(0));
        canvas.draw_sprite(2, 2, &sprite, None);
        canvas.draw_sprite(3, 0, &sprite, None);
        assert_eq!(buf, [1, 5, 5, 5, 2, 5, 5, 5, 1]);
    }

    #[test]
    fn logo_lands_centered() {
        let (w, h) = (LOGO_WIDTH + 16, LOGO_HEIGHT + 8);
        let mut buf = vec![0u32; (w * h) as usize];
        let mut canvas = Canvas::new(&mut buf, w, h).unwrap();
        let (x, y) = canvas.draw_logo_centered();
        assert_eq!((x, y), (8, 4));
        assert_eq!(canvas.get_pixel(x, y), Some(logo().first_pixel()));
        assert_eq!(canvas.get_pixel(x + 3, y + 3), logo().pixel(3, 3));
        assert_eq!(canvas.get_pixel(x - 1, y), Some(0));
    }

    #[test]
    fn logo_clips_on_small_canvas() {
        let mut buf = [0u32; 100];
        let mut canvas = Canvas::new(&mut buf, 10, 10).unwrap();
        canvas.draw_logo(0, 0);
        for y in 0..10 {
            assert_eq!(canvas.get_pixel(9, y), logo().pixel(9, y));
        }
        assert_eq!(canvas.draw_logo_centered(), (0, 0));
    }
}
