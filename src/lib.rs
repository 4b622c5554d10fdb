//! Library exports for the Drom editor.
//!
//! The hexagon geometry and construction state are usable on their own; the
//! export, session and editor layers build the interactive tool on top.

pub mod config;
pub mod drom;
pub mod editor;
pub mod error;
pub mod export;
pub mod hex;
pub mod session;
pub mod util;

pub use config::Config;
pub use drom::DromState;
pub use error::DromError;
