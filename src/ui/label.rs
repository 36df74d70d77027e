//! Text shown in the display's character field.

use core::fmt::Write;

use heapless::String;

use crate::config::DISPLAY_TEXT_WIDTH;

/// Display text, never wider than the character field.
pub type Label = String<DISPLAY_TEXT_WIDTH>;

/// Scratch size for formatting before truncation.
const SCRATCH_LEN: usize = 16;

/// Build a label from a fixed string, truncated to the display width.
pub fn text(s: &str) -> Label {
    let mut label = Label::new();
    for c in s.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// `"T 36.50"` style reading with two decimals, truncated to fit.
pub fn reading(value: f32) -> Label {
    let mut scratch: String<SCRATCH_LEN> = String::new();
    // Overflow only happens for absurd values; the prefix written so far
    // is still shown.
    let _ = write!(scratch, "T {:.2}", value);
    text(scratch.as_str())
}
