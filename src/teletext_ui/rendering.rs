//! Rendering of the page into terminal escape sequences.

use super::colors::*;
use super::core::{TeletextPage, TeletextRow};
use super::rows::CountHighlight;
use crate::constants::ui::{CONTENT_MARGIN, COUNT_COLUMN_WIDTH, TEAM_COLUMN_WIDTH};
use crate::error::AppError;
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

impl TeletextPage {
    /// Builds the whole screen as one escape-sequence string (double
    /// buffering): headers, captions, visible rows, and footer are appended
    /// to a single buffer that the caller writes in one operation.
    pub fn build_buffer(&self, width: u16) -> String {
        let visible_rows = self.get_page_content();
        let mut buffer = String::with_capacity(512 + visible_rows.len() * 64);

        // Only clear the screen in interactive mode
        if !self.ignore_height_limit {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        let header_text = match self.date_range {
            Some((start, end)) => format!(
                "GAME COUNTER {} - {}",
                start.format("%d.%m.%Y"),
                end.format("%d.%m.%Y")
            ),
            None => "GAME COUNTER".to_string(),
        };

        let title_bg_code = get_ansi_code(title_bg(), 46);
        let header_fg_code = get_ansi_code(header_fg(), 21);
        let header_bg_code = get_ansi_code(header_bg(), 21);
        let subheader_fg_code = get_ansi_code(subheader_fg(), 46);
        let text_fg_code = get_ansi_code(text_fg(), 231);
        let count_fg_code = get_ansi_code(count_fg(), 46);
        let caption_fg_code = get_ansi_code(caption_fg(), 51);

        let header_width = (width as usize).saturating_sub(20);

        // Header line
        buffer.push_str(&format!(
            "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{:<20}\x1b[48;5;{}m\x1b[38;5;231m{:>width$}\x1b[0m",
            title_bg_code,
            header_fg_code,
            self.title,
            header_bg_code,
            header_text,
            width = header_width
        ));

        // Subheader with pagination info
        let total_pages = self.total_pages();
        let page_info = if total_pages > 1 && !self.ignore_height_limit {
            format!("{}/{}", self.current_page + 1, total_pages)
        } else {
            String::new()
        };
        buffer.push_str(&format!(
            "\x1b[2;1H\x1b[38;5;{}m{:<20}{:>width$}\x1b[0m",
            subheader_fg_code,
            self.subheader,
            page_info,
            width = header_width
        ));

        let team_col = CONTENT_MARGIN + 1;
        let mut current_line: usize = 4;

        // Column captions only when there is a table to caption
        if self.team_row_count() > 0 {
            buffer.push_str(&format!(
                "\x1b[{};{}H\x1b[38;5;{}m{:<team_w$}{:>count_w$}\x1b[0m",
                current_line,
                team_col,
                caption_fg_code,
                "TEAM",
                "GAMES",
                team_w = TEAM_COLUMN_WIDTH,
                count_w = COUNT_COLUMN_WIDTH
            ));
            current_line += 1;
        }

        for row in &visible_rows {
            match row {
                TeletextRow::TeamCount {
                    abbreviation,
                    game_count,
                    highlight,
                } => {
                    let count_text =
                        format!("{game_count:>count_w$}", count_w = COUNT_COLUMN_WIDTH);
                    let styled_count = match highlight {
                        CountHighlight::Highest => format!(
                            "\x1b[48;5;{};38;5;{};1m{}\x1b[0m",
                            get_ansi_code(highest_bg(), 157),
                            get_ansi_code(highlight_fg(), 238),
                            count_text
                        ),
                        CountHighlight::Lowest => format!(
                            "\x1b[48;5;{};38;5;{};1m{}\x1b[0m",
                            get_ansi_code(lowest_bg(), 223),
                            get_ansi_code(highlight_fg(), 238),
                            count_text
                        ),
                        CountHighlight::Plain => {
                            format!("\x1b[38;5;{count_fg_code};1m{count_text}\x1b[0m")
                        }
                    };
                    buffer.push_str(&format!(
                        "\x1b[{};{}H\x1b[38;5;{}m{:<team_w$}\x1b[0m{}",
                        current_line,
                        team_col,
                        text_fg_code,
                        abbreviation,
                        styled_count,
                        team_w = TEAM_COLUMN_WIDTH
                    ));
                    current_line += 1;
                }
                TeletextRow::ErrorMessage(message) => {
                    for line in message.lines() {
                        buffer.push_str(&format!(
                            "\x1b[{current_line};{team_col}H\x1b[38;5;{text_fg_code}m{line}\x1b[0m"
                        ));
                        current_line += 1;
                    }
                }
            }
        }

        if self.show_footer {
            let footer_text = "q=Quit r=Refresh t=Type ←→=Window ↑↓=Page";
            let footer_line = if self.ignore_height_limit {
                current_line + 1
            } else {
                (self.screen_height.saturating_sub(1)).max(1) as usize
            };
            let padding =
                (width as usize).saturating_sub(footer_text.chars().count()) / 2;
            buffer.push_str(&format!(
                "\x1b[{};1H\x1b[38;5;{}m{}{}\x1b[0m",
                footer_line,
                subheader_fg_code,
                " ".repeat(padding),
                footer_text
            ));
        }

        buffer
    }

    /// Renders the page content using double buffering for reduced
    /// flickering: the full frame is built as a string, then written in a
    /// single operation.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let width = if self.ignore_height_limit {
            80u16
        } else {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
            let (width, _) = crossterm::terminal::size()?;
            width
        };

        let buffer = self.build_buffer(width);
        execute!(stdout, Print(buffer))?;

        if !self.ignore_height_limit {
            execute!(stdout, crossterm::cursor::Show)?;
        }

        stdout.flush()?;
        Ok(())
    }
}
