#![deny(clippy::all, clippy::perf, clippy::correctness)]
#![allow(clippy::unreadable_literal)]

pub mod check;
pub mod error;
pub mod format;
pub mod input;
pub mod settings;

pub use check::{verify, CheckReport, CheckStatus};
pub use format::{format_line, parse_check_list, parse_line, to_hex, CheckEntry};
pub use input::{hash_path, read_input, STDIN_PATH};
