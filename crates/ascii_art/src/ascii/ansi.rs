//! 24-bit ANSI color escapes.

pub const RESET: &str = "\x1b[0m";

/// How cell colors are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    None,
    Foreground,
    Background,
}

impl ColorMode {
    pub fn from_flags(color: bool, background: bool) -> Self {
        match (color, background) {
            (false, _) => ColorMode::None,
            (true, false) => ColorMode::Foreground,
            (true, true) => ColorMode::Background,
        }
    }

    pub fn is_colored(self) -> bool {
        self != ColorMode::None
    }
}

pub fn foreground([r, g, b]: [u8; 3]) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

pub fn background([r, g, b]: [u8; 3]) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

/// Append `ch` to `out`, wrapped in the escape for `mode` and a reset.
pub fn push_cell(out: &mut String, ch: char, rgb: [u8; 3], mode: ColorMode) {
    let escape = match mode {
        ColorMode::None => {
            out.push(ch);
            return;
        },
        ColorMode::Foreground => foreground(rgb),
        ColorMode::Background => background(rgb),
    };
    out.push_str(&escape);
    out.push(ch);
    out.push_str(RESET);
}

/// Remove CSI escape sequences, leaving only printable glyphs.
#[doc(hidden)]
pub fn strip(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}
