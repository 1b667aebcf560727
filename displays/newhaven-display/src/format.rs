//! Fixed-width field formatting
//!
//! Renders any [`Display`] value into a field of at least `total` characters,
//! filling the gap with the current padding character. Text that is already
//! wider than the field is passed through untouched; nothing is truncated.
//!
//! Width is counted in `char`s, which matches the one-cell-per-character
//! layout of the LCD for ASCII text.

use core::fmt::{self, Display, Write};

use heapless::String;

/// Padding character used until changed
pub const DEFAULT_PADDING_CHAR: char = ' ';

/// Fill characters handed to the writer per `write_str` call
const FILL_RUN: usize = 16;

/// Field formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Destination string cannot hold the padded text
    Capacity,
}

/// Which side of the text receives the fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Fill before the text (right-justified field)
    Left,
    /// Fill after the text (left-justified field)
    Right,
}

/// Current padding character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Padding {
    fill: char,
}

impl Default for Padding {
    fn default() -> Self {
        Self::new()
    }
}

impl Padding {
    /// Padding with the default (space) character
    pub const fn new() -> Self {
        Self {
            fill: DEFAULT_PADDING_CHAR,
        }
    }

    /// Padding with a specific character
    pub const fn with_char(fill: char) -> Self {
        Self { fill }
    }

    /// Use the first character of `value`'s text form
    ///
    /// An empty text form resets to the default.
    pub fn set(&mut self, value: impl Display) {
        let mut first = FirstChar(None);
        let _ = write!(first, "{}", value);
        self.fill = first.0.unwrap_or(DEFAULT_PADDING_CHAR);
    }

    /// Back to the default (space) character
    pub fn reset(&mut self) {
        self.fill = DEFAULT_PADDING_CHAR;
    }

    /// Current padding character
    pub const fn get(&self) -> char {
        self.fill
    }

    /// Right-justify `value` in a field of `total` characters
    pub fn left<T: Display>(&self, value: T, total: usize) -> Padded<T> {
        Padded::new(value, total, self.fill, Side::Left)
    }

    /// Left-justify `value` in a field of `total` characters
    pub fn right<T: Display>(&self, value: T, total: usize) -> Padded<T> {
        Padded::new(value, total, self.fill, Side::Right)
    }

    /// Render [`Padding::left`] into a string of capacity `N`
    pub fn pad_left<const N: usize>(
        &self,
        value: impl Display,
        total: usize,
    ) -> Result<String<N>, FormatError> {
        render(&self.left(value, total))
    }

    /// Render [`Padding::right`] into a string of capacity `N`
    pub fn pad_right<const N: usize>(
        &self,
        value: impl Display,
        total: usize,
    ) -> Result<String<N>, FormatError> {
        render(&self.right(value, total))
    }
}

/// A value laid out in a padded field
///
/// Formatting streams the fill and the value straight to the writer, so
/// the field width is not bounded by any buffer.
#[derive(Debug, Clone, Copy)]
pub struct Padded<T> {
    value: T,
    total: usize,
    fill: char,
    side: Side,
}

impl<T: Display> Padded<T> {
    /// Wrap `value` in a field of `total` characters
    pub const fn new(value: T, total: usize, fill: char, side: Side) -> Self {
        Self {
            value,
            total,
            fill,
            side,
        }
    }

    /// Number of fill characters the field adds
    pub fn fill_count(&self) -> usize {
        self.total.saturating_sub(text_len(&self.value))
    }
}

impl<T: Display> Display for Padded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fill_count = self.fill_count();

        if self.side == Side::Left {
            write_fill(f, self.fill, fill_count)?;
        }
        write!(f, "{}", self.value)?;
        if self.side == Side::Right {
            write_fill(f, self.fill, fill_count)?;
        }

        Ok(())
    }
}

/// Length of `value`'s text form in chars
pub fn text_len(value: &impl Display) -> usize {
    let mut counter = CharCounter(0);
    let _ = write!(counter, "{}", value);
    counter.0
}

fn write_fill(f: &mut fmt::Formatter<'_>, fill: char, count: usize) -> fmt::Result {
    // Up to 4 UTF-8 bytes per char
    let mut run: String<{ FILL_RUN * 4 }> = String::new();
    for _ in 0..count.min(FILL_RUN) {
        let _ = run.push(fill);
    }

    let mut remaining = count;
    while remaining > 0 {
        let chunk = remaining.min(FILL_RUN);
        f.write_str(&run.as_str()[..chunk * fill.len_utf8()])?;
        remaining -= chunk;
    }
    Ok(())
}

fn render<const N: usize>(value: &impl Display) -> Result<String<N>, FormatError> {
    let mut text = String::new();
    write!(text, "{}", value).map_err(|_| FormatError::Capacity)?;
    Ok(text)
}

struct CharCounter(usize);

impl Write for CharCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

struct FirstChar(Option<char>);

impl Write for FirstChar {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.0.is_none() {
            self.0 = s.chars().next();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Field = String<32>;

    #[test]
    fn test_pad_left_default() {
        let padding = Padding::new();
        let text: Field = padding.pad_left("42", 5).unwrap();
        assert_eq!(text, "   42");
    }

    #[test]
    fn test_pad_right_default() {
        let padding = Padding::new();
        let text: Field = padding.pad_right("42", 5).unwrap();
        assert_eq!(text, "42   ");
    }

    #[test]
    fn test_no_truncation() {
        let padding = Padding::new();
        let left: Field = padding.pad_left("12345", 3).unwrap();
        let right: Field = padding.pad_right("12345", 3).unwrap();
        assert_eq!(left, "12345");
        assert_eq!(right, "12345");
    }

    #[test]
    fn test_exact_width_unchanged() {
        let padding = Padding::new();
        let text: Field = padding.pad_left("abc", 3).unwrap();
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_custom_char_then_reset() {
        let mut padding = Padding::new();
        padding.set('*');
        let starred: Field = padding.pad_left("7", 4).unwrap();
        assert_eq!(starred, "***7");

        padding.reset();
        let spaced: Field = padding.pad_left("7", 4).unwrap();
        assert_eq!(spaced, "   7");
    }

    #[test]
    fn test_set_takes_first_char() {
        let mut padding = Padding::new();
        padding.set("-=");
        assert_eq!(padding.get(), '-');

        padding.set(0);
        assert_eq!(padding.get(), '0');
        let text: Field = padding.pad_left(7, 3).unwrap();
        assert_eq!(text, "007");
    }

    #[test]
    fn test_set_empty_matches_reset() {
        let mut from_empty = Padding::with_char('#');
        from_empty.set("");

        let mut from_reset = Padding::with_char('#');
        from_reset.reset();

        assert_eq!(from_empty, from_reset);
        assert_eq!(from_empty.get(), DEFAULT_PADDING_CHAR);
    }

    #[test]
    fn test_numbers_use_decimal_text() {
        let padding = Padding::new();
        let negative: Field = padding.pad_left(-15i32, 6).unwrap();
        let unsigned: Field = padding.pad_right(300u16, 5).unwrap();
        assert_eq!(negative, "   -15");
        assert_eq!(unsigned, "300  ");
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let padding = Padding::new();
        let text: Field = padding.pad_left("°C", 4).unwrap();
        assert_eq!(text, "  °C");
    }

    #[test]
    fn test_long_multibyte_fill() {
        let padding = Padding::with_char('°');
        let text: String<64> = padding.pad_right("x", 21).unwrap();
        assert_eq!(text.chars().count(), 21);
        assert!(text.starts_with('x'));
        assert!(text.chars().skip(1).all(|c| c == '°'));
    }

    #[test]
    fn test_capacity_error() {
        let padding = Padding::new();
        let result = padding.pad_left::<4>("42", 8);
        assert_eq!(result, Err(FormatError::Capacity));
    }

    #[test]
    fn test_padded_display_streams() {
        let padding = Padding::with_char('.');
        let mut text = Field::new();
        write!(text, "[{}|{}]", padding.left("a", 3), padding.right("b", 3)).unwrap();
        assert_eq!(text, "[..a|b..]");
        assert_eq!(padding.left("a", 3).fill_count(), 2);
    }
}
