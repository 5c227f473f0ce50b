/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::{
    fmt::Arguments,
    sync::atomic::{AtomicU32, Ordering},
};

use spin::Mutex;

/// Receives one fully formatted line, without the trailing newline.
pub type Sink = fn(Arguments<'_>);

static SINK: Mutex<Option<Sink>> = Mutex::new(None);
static SEQ: AtomicU32 = AtomicU32::new(0);

/// Routes log output, typically to the board's UART writer.
pub fn set_sink(sink: Sink) {
    *SINK.lock() = Some(sink);
}

pub fn clear_sink() {
    *SINK.lock() = None;
}

pub mod color {
    pub const RESET: &str = "\x1b[0m";

    pub const GRAY: &str = "\x1b[38;5;243m";
    pub const RED: &str = "\x1b[38;5;1m";
    pub const GREEN: &str = "\x1b[38;5;46m";
    pub const DARK_GREEN: &str = "\x1b[38;5;34m";
    pub const YELLOW: &str = "\x1b[38;5;226m";
    pub const CYAN: &str = "\x1b[38;5;51m";
}

pub fn log_message(level: &str, color: &str, module_path: &str, args: Arguments) {
    if level == "dbug" && !cfg!(debug_assertions) {
        return;
    }
    // copy out so a sink that logs doesn't deadlock
    let Some(sink) = *SINK.lock() else {
        return;
    };
    let module = module_path.rsplit("::").next().unwrap_or(module_path);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);

    sink(format_args!(
        "[{:06}] [ {}{}{} ] {}{}:{} {}",
        seq,
        color,
        level,
        color::RESET,
        color::GRAY,
        module,
        color::RESET,
        args,
    ));
}

#[macro_export]
macro_rules! ok {
    ($($arg:tt)*) => {
        $crate::utils::log::log_message(
            " OK ",
            $crate::utils::log::color::DARK_GREEN,
            module_path!(),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => ($crate::utils::log::log_message("info", $crate::utils::log::color::GREEN, module_path!(), format_args!($($arg)*)));
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => ($crate::utils::log::log_message("dbug", $crate::utils::log::color::CYAN, module_path!(), format_args!($($arg)*)));
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => ($crate::utils::log::log_message("warn", $crate::utils::log::color::YELLOW, module_path!(), format_args!($($arg)*)));
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => ($crate::utils::log::log_message("error", $crate::utils::log::color::RED, module_path!(), format_args!($($arg)*)));
}
