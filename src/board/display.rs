//! SSD1306 OLED standing in for the segment LCD.
//!
//! The 8-character field is drawn in a large font across the top; the
//! three symbols sit in a status row underneath.

use defmt::warn;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use wristtemp::hal::SegmentDisplay;
use wristtemp::ui::Label;
use wristtemp::{Error, Symbol};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Status-row glyph and x position, indexed by `Panel::symbol_index`.
const SYMBOL_GLYPHS: [(&str, i32); 3] = [("IR", 0), ("!", 60), (".", 120)];

fn style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Panel state mirrored in RAM so unchanged renders skip the I²C flush.
pub struct Panel<I2C> {
    display: Display<I2C>,
    text: Label,
    symbols: [bool; 3],
}

impl<I2C> Panel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 display and clear the screen.
    pub fn init(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if display.init().is_err() {
            warn!("Display: {}", Error::Display);
        }
        let mut panel = Self {
            display,
            text: Label::new(),
            symbols: [false; 3],
        };
        panel.redraw();
        panel
    }

    fn symbol_index(symbol: Symbol) -> usize {
        match symbol {
            Symbol::Probe => 0,
            Symbol::Alert => 1,
            Symbol::Point => 2,
        }
    }

    fn redraw(&mut self) {
        self.display.clear_buffer();

        let _ = Text::new(self.text.as_str(), Point::new(0, 24), style(&FONT_10X20))
            .draw(&mut self.display);

        for (&(glyph, x), &on) in SYMBOL_GLYPHS.iter().zip(self.symbols.iter()) {
            if on {
                let _ = Text::new(glyph, Point::new(x, 58), style(&FONT_6X10))
                    .draw(&mut self.display);
            }
        }

        if self.display.flush().is_err() {
            warn!("Display: {}", Error::Display);
        }
    }
}

impl<I2C> SegmentDisplay for Panel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn write_text(&mut self, text: &str) {
        if self.text.as_str() == text {
            return;
        }
        self.text = wristtemp::ui::label::text(text);
        self.redraw();
    }

    fn set_symbol(&mut self, symbol: Symbol, on: bool) {
        let i = Self::symbol_index(symbol);
        if self.symbols[i] == on {
            return;
        }
        self.symbols[i] = on;
        self.redraw();
    }

    fn clear(&mut self) {
        self.text.clear();
        self.symbols = [false; 3];
        self.redraw();
    }
}
