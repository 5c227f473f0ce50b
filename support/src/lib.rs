/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

#![cfg_attr(not(test), no_std)]

pub mod assets;
pub mod error;
pub mod utils;

pub use assets::{LOGO_HEIGHT, LOGO_PIXEL_COUNT, LOGO_WIDTH, Logo, logo, logo_ptr};
pub use error::Error;
pub use utils::asm::nop;
pub use utils::fb::Canvas;
