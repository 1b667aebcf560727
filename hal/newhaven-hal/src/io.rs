//! Adapter for `embedded-io` writers
//!
//! Most HALs (embassy, esp-hal, host serial crates with embedded-io
//! support) expose their UART as an [`embedded_io::Write`] whose bit rate is
//! chosen when the peripheral is created. [`IoTx`] wraps such a writer and
//! accepts `set_baudrate` only for the rate the port was opened at.

use embedded_io::Write;

use crate::uart::UartTx;

/// Errors from an [`IoTx`] port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoTxError<E> {
    /// The underlying writer failed
    Io(E),
    /// The port cannot switch to the requested rate at runtime
    UnsupportedBaudrate(u32),
}

/// [`UartTx`] over an `embedded-io` writer with a fixed bit rate
pub struct IoTx<W> {
    writer: W,
    baudrate: u32,
}

impl<W: Write> IoTx<W> {
    /// Wrap a writer already configured for `baudrate`
    pub fn new(writer: W, baudrate: u32) -> Self {
        Self { writer, baudrate }
    }

    /// Bit rate the port was opened at
    pub fn baudrate(&self) -> u32 {
        self.baudrate
    }

    /// Give back the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UartTx for IoTx<W> {
    type Error = IoTxError<W::Error>;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(data).map_err(IoTxError::Io)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush().map_err(IoTxError::Io)
    }

    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error> {
        if baudrate == self.baudrate {
            Ok(())
        } else {
            Err(IoTxError::UnsupportedBaudrate(baudrate))
        }
    }
}
