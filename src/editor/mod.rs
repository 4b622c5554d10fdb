//! Interactive, line-oriented Drom editor.
//!
//! Reads one command per line, applies it to a [`DromState`](crate::drom::DromState)
//! and keeps the working document in the output directory up to date.

mod command;
mod repl;

pub use command::{Command, InputError, parse_index};
pub use repl::{Editor, Flow, HELP};
