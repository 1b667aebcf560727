//! Command encoding for the Newhaven serial LCD
//!
//! Command format:
//! - ESCAPE (1 byte): 0xFE prefix
//! - COMMAND (1 byte): operation selector
//! - PARAMS (0-9 bytes): operation-specific arguments
//!
//! Anything sent without the prefix is printed as text at the cursor.

use heapless::Vec;

use crate::scale;

/// Command prefix byte
pub const ESCAPE: u8 = 0xFE;

/// Longest parameter list (custom character: slot + 8 rows)
pub const MAX_PARAM_SIZE: usize = 1 + CUSTOM_CHAR_ROWS;

/// Longest complete command (ESCAPE + COMMAND + MAX_PARAMS)
pub const MAX_COMMAND_SIZE: usize = 2 + MAX_PARAM_SIZE;

/// Number of user-definable character slots in CGRAM
pub const CUSTOM_CHAR_SLOTS: u8 = 8;

/// Pixel rows in one custom character (5x8 font)
pub const CUSTOM_CHAR_ROWS: usize = 8;

/// Command selector bytes
pub mod code {
    pub const DISPLAY_ON: u8 = 0x41;
    pub const DISPLAY_OFF: u8 = 0x42;
    pub const SET_CURSOR: u8 = 0x45;
    pub const HOME_CURSOR: u8 = 0x46;
    pub const UNDERLINE_CURSOR_ON: u8 = 0x47;
    pub const UNDERLINE_CURSOR_OFF: u8 = 0x48;
    pub const MOVE_CURSOR_LEFT: u8 = 0x49;
    pub const MOVE_CURSOR_RIGHT: u8 = 0x4A;
    pub const BLINKING_CURSOR_ON: u8 = 0x4B;
    pub const BLINKING_CURSOR_OFF: u8 = 0x4C;
    pub const BACKSPACE: u8 = 0x4E;
    pub const CLEAR_SCREEN: u8 = 0x51;
    pub const SET_CONTRAST: u8 = 0x52;
    pub const SET_BRIGHTNESS: u8 = 0x53;
    pub const LOAD_CUSTOM_CHARACTER: u8 = 0x54;
    pub const MOVE_DISPLAY_LEFT: u8 = 0x55;
    pub const MOVE_DISPLAY_RIGHT: u8 = 0x56;
    pub const DISPLAY_FIRMWARE_VERSION: u8 = 0x70;
    pub const DISPLAY_RS232_RATE: u8 = 0x71;
    pub const DISPLAY_I2C_ADDRESS: u8 = 0x72;
}

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Buffer too small for the encoded command
    BufferTooSmall,
}

/// A single display operation
///
/// Level-taking variants carry the value already in the device's native
/// range; use [`Command::contrast`] and [`Command::brightness`] to build
/// them from a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    DisplayOn,
    DisplayOff,
    /// Cursor at a zero-based row and column, forwarded as-is
    SetCursor { row: u8, col: u8 },
    /// Cursor at an absolute DDRAM position
    SetCursorPosition(u8),
    HomeCursor,
    UnderlineCursorOn,
    UnderlineCursorOff,
    MoveCursorLeft,
    MoveCursorRight,
    BlinkingCursorOn,
    BlinkingCursorOff,
    Backspace,
    ClearScreen,
    /// Native contrast level (1-50)
    SetContrast(u8),
    /// Native backlight level (1-8)
    SetBrightness(u8),
    /// Define the glyph for character code `slot` (0-7)
    LoadCustomCharacter {
        slot: u8,
        bitmap: [u8; CUSTOM_CHAR_ROWS],
    },
    MoveDisplayLeft,
    MoveDisplayRight,
    /// Device prints its firmware revision on screen
    DisplayFirmwareVersion,
    /// Device prints its RS-232 baud rate on screen
    DisplayRs232Rate,
    /// Device prints its I2C address on screen
    DisplayI2cAddress,
}

impl Command {
    /// Contrast command for a percent, clamped to 0-100
    pub const fn contrast(percent: i32) -> Self {
        Command::SetContrast(scale::contrast_from_percent(percent))
    }

    /// Brightness command for a percent, clamped to 0-100
    pub const fn brightness(percent: i32) -> Self {
        Command::SetBrightness(scale::brightness_from_percent(percent))
    }

    /// Command selector byte
    pub const fn code(&self) -> u8 {
        match self {
            Command::DisplayOn => code::DISPLAY_ON,
            Command::DisplayOff => code::DISPLAY_OFF,
            Command::SetCursor { .. } | Command::SetCursorPosition(_) => code::SET_CURSOR,
            Command::HomeCursor => code::HOME_CURSOR,
            Command::UnderlineCursorOn => code::UNDERLINE_CURSOR_ON,
            Command::UnderlineCursorOff => code::UNDERLINE_CURSOR_OFF,
            Command::MoveCursorLeft => code::MOVE_CURSOR_LEFT,
            Command::MoveCursorRight => code::MOVE_CURSOR_RIGHT,
            Command::BlinkingCursorOn => code::BLINKING_CURSOR_ON,
            Command::BlinkingCursorOff => code::BLINKING_CURSOR_OFF,
            Command::Backspace => code::BACKSPACE,
            Command::ClearScreen => code::CLEAR_SCREEN,
            Command::SetContrast(_) => code::SET_CONTRAST,
            Command::SetBrightness(_) => code::SET_BRIGHTNESS,
            Command::LoadCustomCharacter { .. } => code::LOAD_CUSTOM_CHARACTER,
            Command::MoveDisplayLeft => code::MOVE_DISPLAY_LEFT,
            Command::MoveDisplayRight => code::MOVE_DISPLAY_RIGHT,
            Command::DisplayFirmwareVersion => code::DISPLAY_FIRMWARE_VERSION,
            Command::DisplayRs232Rate => code::DISPLAY_RS232_RATE,
            Command::DisplayI2cAddress => code::DISPLAY_I2C_ADDRESS,
        }
    }

    /// Parameter bytes following the selector
    pub fn params(&self) -> Vec<u8, MAX_PARAM_SIZE> {
        let mut params = Vec::new();
        // Every parameter list fits in MAX_PARAM_SIZE
        match *self {
            Command::SetCursor { row, col } => {
                let _ = params.extend_from_slice(&[row, col]);
            }
            Command::SetCursorPosition(value)
            | Command::SetContrast(value)
            | Command::SetBrightness(value) => {
                let _ = params.push(value);
            }
            Command::LoadCustomCharacter { slot, bitmap } => {
                let _ = params.push(slot % CUSTOM_CHAR_SLOTS);
                let _ = params.extend_from_slice(&bitmap);
            }
            _ => {}
        }
        params
    }

    /// Total encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        2 + self.params().len()
    }

    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, CommandError> {
        let params = self.params();
        let len = 2 + params.len();
        if buffer.len() < len {
            return Err(CommandError::BufferTooSmall);
        }

        buffer[0] = ESCAPE;
        buffer[1] = self.code();
        buffer[2..len].copy_from_slice(&params);

        Ok(len)
    }

    /// Encode this command into a heapless Vec
    pub fn to_bytes(&self) -> Vec<u8, MAX_COMMAND_SIZE> {
        let mut buffer = [0u8; MAX_COMMAND_SIZE];
        let len = self.encode(&mut buffer).unwrap_or(0);
        buffer[..len].iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_param_commands() {
        let table = [
            (Command::DisplayOn, 0x41),
            (Command::DisplayOff, 0x42),
            (Command::HomeCursor, 0x46),
            (Command::UnderlineCursorOn, 0x47),
            (Command::UnderlineCursorOff, 0x48),
            (Command::MoveCursorLeft, 0x49),
            (Command::MoveCursorRight, 0x4A),
            (Command::BlinkingCursorOn, 0x4B),
            (Command::BlinkingCursorOff, 0x4C),
            (Command::Backspace, 0x4E),
            (Command::ClearScreen, 0x51),
            (Command::MoveDisplayLeft, 0x55),
            (Command::MoveDisplayRight, 0x56),
            (Command::DisplayFirmwareVersion, 0x70),
            (Command::DisplayRs232Rate, 0x71),
            (Command::DisplayI2cAddress, 0x72),
        ];

        for (command, selector) in table {
            assert_eq!(&command.to_bytes()[..], &[ESCAPE, selector]);
        }
    }

    #[test]
    fn test_set_cursor_row_col() {
        let bytes = Command::SetCursor { row: 2, col: 7 }.to_bytes();
        assert_eq!(&bytes[..], &[0xFE, 0x45, 2, 7]);
    }

    #[test]
    fn test_set_cursor_position() {
        let bytes = Command::SetCursorPosition(0x54).to_bytes();
        assert_eq!(&bytes[..], &[0xFE, 0x45, 0x54]);
    }

    #[test]
    fn test_contrast_and_brightness_are_scaled() {
        assert_eq!(&Command::contrast(100).to_bytes()[..], &[0xFE, 0x52, 50]);
        assert_eq!(&Command::contrast(-5).to_bytes()[..], &[0xFE, 0x52, 1]);
        assert_eq!(&Command::brightness(100).to_bytes()[..], &[0xFE, 0x53, 8]);
        assert_eq!(&Command::brightness(250).to_bytes()[..], &[0xFE, 0x53, 8]);
    }

    #[test]
    fn test_custom_character() {
        let bitmap = [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00];
        let bytes = Command::LoadCustomCharacter { slot: 3, bitmap }.to_bytes();

        assert_eq!(bytes.len(), MAX_COMMAND_SIZE);
        assert_eq!(&bytes[..3], &[0xFE, 0x54, 3]);
        assert_eq!(&bytes[3..], &bitmap);
    }

    #[test]
    fn test_custom_character_slot_wraps() {
        let bytes = Command::LoadCustomCharacter {
            slot: 9,
            bitmap: [0; CUSTOM_CHAR_ROWS],
        }
        .to_bytes();
        assert_eq!(bytes[2], 1);
    }

    #[test]
    fn test_encode_into_buffer() {
        let mut buffer = [0u8; 8];
        let len = Command::SetCursor { row: 1, col: 0 }.encode(&mut buffer).unwrap();
        assert_eq!(len, 4);
        assert_eq!(&buffer[..len], &[0xFE, 0x45, 1, 0]);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut buffer = [0u8; 3];
        let result = Command::SetCursor { row: 1, col: 0 }.encode(&mut buffer);
        assert_eq!(result, Err(CommandError::BufferTooSmall));
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Command::ClearScreen.encoded_len(), 2);
        assert_eq!(Command::SetCursorPosition(0).encoded_len(), 3);
        assert_eq!(Command::SetCursor { row: 0, col: 0 }.encoded_len(), 4);
    }
}
