use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn count_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn caption_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn highest_bg() -> Color {
    Color::AnsiValue(157)
} // Pale green
pub fn lowest_bg() -> Color {
    Color::AnsiValue(223)
} // Pale orange
pub fn highlight_fg() -> Color {
    Color::AnsiValue(238)
} // Dark gray on the pale backgrounds
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green

/// Extracts the ANSI-256 code from a color, with a fallback for
/// non-indexed colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(code) => code,
        _ => fallback,
    }
}
