//! Newhaven serial LCD driver
//!
//! Driver for Newhaven serial character LCDs (NHD-0420D3Z, NHD-0216K3Z and
//! similar) over a UART at 9600 baud.
//!
//! The driver borrows its serial port instead of owning it, so the port can
//! be shared with other code between driver calls or swapped at runtime with
//! [`NewhavenDisplay::set_serial`]. Every command is handed to the port in a
//! single `write_blocking` call; text may take several.

use core::fmt::{self, Display, Write};

use newhaven_hal::{UartTx, NEWHAVEN_BAUD};
use newhaven_protocol::scale::{BRIGHTNESS_PERCENT_DEFAULT, CONTRAST_PERCENT_DEFAULT};
use newhaven_protocol::Command;

use crate::config::{DisplayConfig, Geometry};
use crate::format::Padding;

/// Baud rate the module listens at
pub const BAUD_RATE: u32 = NEWHAVEN_BAUD;

/// Newhaven serial LCD driver
pub struct NewhavenDisplay<'a, S: UartTx + ?Sized> {
    serial: &'a mut S,
    geometry: Geometry,
    padding: Padding,
    contrast_percent: i32,
    brightness_percent: i32,
}

impl<'a, S: UartTx + ?Sized> NewhavenDisplay<'a, S> {
    /// Create a driver for a 4x20 module
    pub fn new(serial: &'a mut S) -> Self {
        Self::with_config(serial, &DisplayConfig::default())
    }

    /// Create a driver for a module with the given grid
    pub fn with_geometry(serial: &'a mut S, rows: u8, cols: u8) -> Self {
        Self::with_config(serial, &DisplayConfig::with_geometry(rows, cols))
    }

    /// Create a driver from a full configuration
    pub fn with_config(serial: &'a mut S, config: &DisplayConfig) -> Self {
        Self {
            serial,
            geometry: config.geometry,
            padding: Padding::with_char(config.padding_char),
            contrast_percent: config.contrast_percent,
            brightness_percent: config.brightness_percent,
        }
    }

    /// Point the driver at another serial port
    ///
    /// Returns the port it was using before.
    pub fn set_serial(&mut self, serial: &'a mut S) -> &'a mut S {
        #[cfg(feature = "defmt")]
        defmt::debug!("LCD serial port rebound");
        core::mem::replace(&mut self.serial, serial)
    }

    /// Configure the serial port for the module
    ///
    /// Only sets the bit rate; safe to call any number of times.
    pub fn setup(&mut self) -> Result<(), S::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "LCD setup: {}x{} at {} baud",
            self.geometry.rows,
            self.geometry.cols,
            BAUD_RATE
        );
        self.serial.set_baudrate(BAUD_RATE)
    }

    /// Apply the configured contrast and brightness
    pub fn apply_levels(&mut self) -> Result<(), S::Error> {
        self.set_contrast(self.contrast_percent)?;
        self.set_brightness(self.brightness_percent)
    }

    /// Send one command
    pub fn send(&mut self, command: Command) -> Result<(), S::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("LCD command {}", command);
        self.serial.write_blocking(&command.to_bytes())
    }

    /// Print a value as text at the cursor
    pub fn print(&mut self, value: impl Display) -> Result<(), S::Error> {
        let mut writer = SerialWriter::new(&mut *self.serial);
        let _ = write!(writer, "{}", value);
        writer.finish()
    }

    /// Print a value right-justified in a field of `total` characters
    pub fn print_pad_left(&mut self, value: impl Display, total: usize) -> Result<(), S::Error> {
        let field = self.padding.left(value, total);
        self.print(field)
    }

    /// Print a value left-justified in a field of `total` characters
    pub fn print_pad_right(&mut self, value: impl Display, total: usize) -> Result<(), S::Error> {
        let field = self.padding.right(value, total);
        self.print(field)
    }

    /// Use the first character of `value`'s text form for padding
    ///
    /// An empty text form resets to space.
    pub fn set_padding_char(&mut self, value: impl Display) {
        self.padding.set(value);
    }

    /// Back to space padding
    pub fn reset_default_padding_char(&mut self) {
        self.padding.reset();
    }

    /// Current padding character
    pub fn padding_char(&self) -> char {
        self.padding.get()
    }

    /// Field formatter holding the current padding character
    pub fn padding(&self) -> &Padding {
        &self.padding
    }

    /// Turn the display on
    pub fn display_on(&mut self) -> Result<(), S::Error> {
        self.send(Command::DisplayOn)
    }

    /// Turn the display off (contents are kept)
    pub fn display_off(&mut self) -> Result<(), S::Error> {
        self.send(Command::DisplayOff)
    }

    /// Move the cursor to a zero-based row and column
    ///
    /// Values are sent unmodified, even outside the configured grid.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), S::Error> {
        self.send(Command::SetCursor { row, col })
    }

    /// Move the cursor to an absolute DDRAM position
    pub fn set_cursor_position(&mut self, pos: u8) -> Result<(), S::Error> {
        self.send(Command::SetCursorPosition(pos))
    }

    /// Move the cursor to row 0, column 0
    pub fn home_cursor(&mut self) -> Result<(), S::Error> {
        self.send(Command::HomeCursor)
    }

    /// Show the underline cursor
    pub fn underline_cursor_on(&mut self) -> Result<(), S::Error> {
        self.send(Command::UnderlineCursorOn)
    }

    /// Hide the underline cursor
    pub fn underline_cursor_off(&mut self) -> Result<(), S::Error> {
        self.send(Command::UnderlineCursorOff)
    }

    /// Move the cursor one column left
    pub fn move_cursor_left(&mut self) -> Result<(), S::Error> {
        self.send(Command::MoveCursorLeft)
    }

    /// Move the cursor one column right
    pub fn move_cursor_right(&mut self) -> Result<(), S::Error> {
        self.send(Command::MoveCursorRight)
    }

    /// Show the blinking block cursor
    pub fn blinking_cursor_on(&mut self) -> Result<(), S::Error> {
        self.send(Command::BlinkingCursorOn)
    }

    /// Hide the blinking block cursor
    pub fn blinking_cursor_off(&mut self) -> Result<(), S::Error> {
        self.send(Command::BlinkingCursorOff)
    }

    /// Erase the character left of the cursor and step back
    pub fn backspace(&mut self) -> Result<(), S::Error> {
        self.send(Command::Backspace)
    }

    /// Clear the screen and home the cursor
    pub fn clear_screen(&mut self) -> Result<(), S::Error> {
        self.send(Command::ClearScreen)
    }

    /// Set contrast in percent (clamped to 0-100)
    pub fn set_contrast(&mut self, percent: i32) -> Result<(), S::Error> {
        self.send(Command::contrast(percent))
    }

    /// Set contrast to the default 80%
    pub fn set_contrast_default(&mut self) -> Result<(), S::Error> {
        self.set_contrast(CONTRAST_PERCENT_DEFAULT)
    }

    /// Set backlight brightness in percent (clamped to 0-100)
    pub fn set_brightness(&mut self, percent: i32) -> Result<(), S::Error> {
        self.send(Command::brightness(percent))
    }

    /// Set backlight brightness to the default 15%
    pub fn set_brightness_default(&mut self) -> Result<(), S::Error> {
        self.set_brightness(BRIGHTNESS_PERCENT_DEFAULT)
    }

    /// Define the glyph shown for character code `slot` (0-7)
    ///
    /// Each bitmap byte is one pixel row, low 5 bits used.
    pub fn load_custom_character(&mut self, slot: u8, bitmap: [u8; 8]) -> Result<(), S::Error> {
        self.send(Command::LoadCustomCharacter { slot, bitmap })
    }

    /// Scroll the whole display one column left
    pub fn move_display_left(&mut self) -> Result<(), S::Error> {
        self.send(Command::MoveDisplayLeft)
    }

    /// Scroll the whole display one column right
    pub fn move_display_right(&mut self) -> Result<(), S::Error> {
        self.send(Command::MoveDisplayRight)
    }

    /// Ask the module to show its firmware version on screen
    pub fn display_firmware_version(&mut self) -> Result<(), S::Error> {
        self.send(Command::DisplayFirmwareVersion)
    }

    /// Ask the module to show its RS-232 baud rate on screen
    pub fn display_rs232_rate(&mut self) -> Result<(), S::Error> {
        self.send(Command::DisplayRs232Rate)
    }

    /// Ask the module to show its I2C address on screen
    pub fn display_i2c_address(&mut self) -> Result<(), S::Error> {
        self.send(Command::DisplayI2cAddress)
    }

    /// Character grid of the module
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of character rows
    pub fn row_count(&self) -> u8 {
        self.geometry.rows
    }

    /// Number of character columns
    pub fn col_count(&self) -> u8 {
        self.geometry.cols
    }
}

/// `fmt::Write` adapter that keeps the port's own error
struct SerialWriter<'s, S: UartTx + ?Sized> {
    serial: &'s mut S,
    error: Option<S::Error>,
}

impl<'s, S: UartTx + ?Sized> SerialWriter<'s, S> {
    fn new(serial: &'s mut S) -> Self {
        Self {
            serial,
            error: None,
        }
    }

    /// Surface the port error, if formatting stopped because of one
    ///
    /// A value whose `Display` impl fails on its own just stops printing.
    fn finish(self) -> Result<(), S::Error> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<S: UartTx + ?Sized> Write for SerialWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.serial.write_blocking(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
