/// A single word of the loaded text, borrowed from the source buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a [u8],
    /// Render in reverse video: this word repeats the one before it.
    pub emphasis: bool,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            emphasis: false,
        }
    }

    /// Number of bytes that are not UTF-8 continuation bytes.
    ///
    /// This approximates the glyph count, not the terminal column width:
    /// wide CJK glyphs and combining marks are counted as one cell each.
    pub fn display_width(&self) -> usize {
        display_width(self.text)
    }
}

fn display_width(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count()
}
