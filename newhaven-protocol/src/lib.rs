//! Newhaven Serial LCD Command Protocol
//!
//! This crate defines the byte-level protocol spoken by Newhaven serial
//! character LCD modules (NHD-0420D3Z and relatives) over RS-232 / TTL UART.
//! The protocol is write-only: the host sends commands and text, the module
//! never answers.
//!
//! # Protocol Overview
//!
//! Plain bytes are printed at the cursor. Commands are introduced by a fixed
//! prefix:
//! ```text
//! ┌────────┬─────────┬──────────────┐
//! │ ESCAPE │ COMMAND │ PARAMS       │
//! │ 0xFE   │ 1B      │ 0–9B         │
//! └────────┴─────────┴──────────────┘
//! ```
//!
//! Contrast and brightness take a level in the module's native range;
//! [`scale`] converts percentages into those levels.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod scale;

pub use command::{Command, CommandError, ESCAPE, MAX_COMMAND_SIZE};
pub use scale::{brightness_from_percent, contrast_from_percent, NativeRange};
