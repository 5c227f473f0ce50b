/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

pub mod asm;
pub mod fb;
pub mod log;
