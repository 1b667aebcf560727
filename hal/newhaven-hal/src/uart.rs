//! UART serial communication abstractions
//!
//! The LCD only ever listens, so the driver needs a transmitter and nothing
//! else: write bytes, flush, and pick a bit rate.

/// Baud rate fixed by the Newhaven serial protocol
pub const NEWHAVEN_BAUD: u32 = 9600;

/// UART transmitter
///
/// Output sink for the display driver. Implementations may buffer; the
/// driver never waits for transmission to finish.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written (or queued) or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Reconfigure the transmit bit rate
    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error>;

    /// Write a single byte to the UART
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_blocking(&[byte])
    }
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_blocking(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }

    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error> {
        (**self).set_baudrate(baudrate)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}
