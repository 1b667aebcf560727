//! Newhaven Hardware Abstraction Layer
//!
//! This crate defines the transport boundary the display driver writes to.
//! Chip-specific HALs (or a host-side serial port wrapper) implement
//! [`UartTx`] and the same driver code runs unchanged on any of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  newhaven-display (driver + formatter)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  newhaven-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embassy UART  │       │ host serial   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Serial transmit with configurable bit rate
//! - [`io::IoTx`] - `UartTx` over any `embedded-io` writer

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod uart;

pub use io::{IoTx, IoTxError};
pub use uart::{UartTx, NEWHAVEN_BAUD};
