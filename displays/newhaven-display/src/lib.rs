//! Driver for Newhaven serial character LCD modules
//!
//! This crate provides:
//! - [`NewhavenDisplay`], which turns display operations (cursor, contrast,
//!   backlight, scrolling, text) into command bytes on a borrowed UART
//! - [`Padding`], a fixed-width field formatter for right- or left-justified
//!   values
//! - [`DisplayConfig`] and [`Geometry`] describing a module
//!
//! # Example
//!
//! ```ignore
//! let mut lcd = NewhavenDisplay::new(&mut uart);
//! lcd.setup()?;
//! lcd.clear_screen()?;
//! lcd.set_cursor(1, 0)?;
//! lcd.print("Temp:")?;
//! lcd.print_pad_left(temperature_c, 5)?;
//! ```
//!
//! The module only listens; nothing is ever read back. Commands are written
//! contiguously, so callers sharing the port across contexts must serialize
//! access themselves.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod driver;
pub mod format;

// Re-export key types
pub use config::{DisplayConfig, Geometry, COL_COUNT_DEFAULT, ROW_COUNT_DEFAULT};
pub use driver::{NewhavenDisplay, BAUD_RATE};
pub use format::{FormatError, Padded, Padding, Side, DEFAULT_PADDING_CHAR};
pub use newhaven_protocol::Command;
