//! Layout and drawing of the study screen
//!
//! The screen is laid out once per redraw into a [`Frame`]. The frame is kept
//! so that mouse positions can be mapped back to buttons and chunks.
//!
//! ```text
//! row 0        WordReveal                              42.00%
//! row 1        [##########--------------]
//! row 2
//! body         text, hidden chunks masked
//! height - 2   [ Back ]      01:23 | word | 12 left     [ Next ]
//! height - 1   key hints
//! ```

use crate::output::mask;
use crate::progress::progress_bar;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetColors, Colors};
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordreveal_core::{RevealMode, Session, Theme};

/// Rows above the body
pub const HEADER_ROWS: u16 = 3;

/// Rows below the body
pub const FOOTER_ROWS: u16 = 2;

/// Blank columns left and right of every row
pub const MARGIN: u16 = 2;

pub const BACK_LABEL: &str = "[ Back ]";
pub const NEXT_LABEL: &str = "[ Next ]";

/// Shown instead of the body when there are no chunks
pub const EMPTY_MESSAGE: &str = "No study text yet. Quit and run `wordreveal import <FILE>`.";

/// A single-row screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub column: u16,
    pub row: u16,
    pub width: u16,
}

impl Rect {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.column && column < self.column.saturating_add(self.width)
    }
}

/// How a piece of body text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Revealed,
    Hidden,
    Highlighted,
    /// Instruction or status text that is not part of the session
    Note,
}

/// A run of text on one body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub column: u16,
    pub text: String,
    /// Index of the chunk this text belongs to
    pub chunk: Option<usize>,
    pub style: SpanStyle,
}

/// Terminal columns taken by `text`
fn columns(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Byte length of the longest prefix of `text` that fits in `room` columns
fn fit(text: &str, room: usize) -> usize {
    let mut used = 0;
    for (index, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > room {
            return index;
        }
    }
    text.len()
}

impl Span {
    fn width(&self) -> u16 {
        columns(&self.text)
    }
}

/// Wrapped body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyLayout {
    pub lines: Vec<Vec<Span>>,
    /// Line holding the first hidden chunk
    pub cursor_line: usize,
}

struct Wrapper {
    width: u16,
    lines: Vec<Vec<Span>>,
    column: u16,
}

impl Wrapper {
    fn new(width: u16) -> Self {
        Self {
            width: width.max(1),
            lines: vec![Vec::new()],
            column: 0,
        }
    }

    fn break_line(&mut self) {
        self.lines.push(Vec::new());
        self.column = 0;
    }

    fn current_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Columns left on the current line
    fn room(&self) -> usize {
        usize::from(self.width.saturating_sub(self.column))
    }

    fn push_span(&mut self, text: String, chunk: Option<usize>, style: SpanStyle) {
        let span = Span {
            column: self.column,
            text,
            chunk,
            style,
        };
        self.column = self.column.saturating_add(span.width());
        if let Some(line) = self.lines.last_mut() {
            line.push(span);
        }
    }

    /// Place text without line breaks, wrapping at the right edge
    fn place(&mut self, text: &str, chunk: Option<usize>, style: SpanStyle, blank: bool) {
        if text.is_empty() {
            return;
        }

        if text.width() > self.room() && self.column > 0 {
            self.break_line();
            // Spaces that caused the wrap are not carried to the next line
            if blank {
                return;
            }
        }

        let mut rest = text;
        while !rest.is_empty() {
            let mut end = fit(rest, self.room());
            if end == 0 {
                if self.column > 0 {
                    self.break_line();
                    continue;
                }
                // A character wider than the whole line still gets a line
                end = rest.chars().next().map_or(rest.len(), char::len_utf8);
            }
            let (head, tail) = rest.split_at(end);
            self.push_span(head.to_string(), chunk, style);
            rest = tail;
            if !rest.is_empty() {
                self.break_line();
            }
        }
    }

    /// Place text that may contain line breaks
    fn place_text(&mut self, text: &str, chunk: Option<usize>, style: SpanStyle, blank: bool) {
        for piece in text.split_inclusive('\n') {
            let (body, newline) = match piece.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (piece, false),
            };
            let body: String = body
                .chars()
                .filter(|&c| c != '\r')
                .map(|c| if c == '\t' { ' ' } else { c })
                .collect();
            self.place(&body, chunk, style, blank);
            if newline {
                self.break_line();
            }
        }
    }
}

/// Wrap the session text (preceded by `notes`) into lines of `width` columns
pub fn layout_body(session: &Session, notes: &[String], width: u16) -> BodyLayout {
    let mut wrapper = Wrapper::new(width);

    for note in notes {
        wrapper.place_text(note, None, SpanStyle::Note, false);
        wrapper.break_line();
    }
    if !notes.is_empty() {
        wrapper.break_line();
    }

    let mut cursor_line = None;
    for (index, chunk) in session.chunks().iter().enumerate() {
        if index == session.current_index() {
            cursor_line = Some(wrapper.current_line());
        }

        let (text, style) = if chunk.is_highlighted() {
            (chunk.text.clone(), SpanStyle::Highlighted)
        } else if chunk.is_revealed() {
            (chunk.text.clone(), SpanStyle::Revealed)
        } else if chunk.is_blank() {
            (chunk.text.clone(), SpanStyle::Hidden)
        } else {
            (mask(&chunk.text), SpanStyle::Hidden)
        };
        wrapper.place_text(&text, Some(index), style, chunk.is_blank());
    }

    let cursor_line = cursor_line.unwrap_or_else(|| wrapper.current_line());
    BodyLayout {
        lines: wrapper.lines,
        cursor_line,
    }
}

/// Everything drawn around the body
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub percent: f64,
    pub elapsed: String,
    pub mode: RevealMode,
    pub remaining: usize,
    pub streak: u32,
    pub complete: bool,
    pub theme: Theme,
    pub hints: String,
}

/// One laid-out screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub body: BodyLayout,
    pub body_top: u16,
    pub body_rows: u16,
    /// First body line shown
    pub scroll: usize,
    pub back_button: Rect,
    pub next_button: Rect,
    pub empty: bool,
}

impl Frame {
    pub fn compute(session: &Session, notes: &[String], width: u16, height: u16) -> Self {
        let body_width = width.saturating_sub(2 * MARGIN).max(1);
        let body_rows = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let empty = session.is_empty();

        let body = if empty {
            let mut wrapper = Wrapper::new(body_width);
            wrapper.place_text(EMPTY_MESSAGE, None, SpanStyle::Note, false);
            BodyLayout {
                lines: wrapper.lines,
                cursor_line: 0,
            }
        } else {
            layout_body(session, notes, body_width)
        };

        // Keep the cursor line in view with a little context below it
        let rows = usize::from(body_rows);
        let max_scroll = body.lines.len().saturating_sub(rows);
        let scroll = (body.cursor_line + 3).saturating_sub(rows).min(max_scroll);

        let button_row = height.saturating_sub(FOOTER_ROWS);
        let button_width = columns(BACK_LABEL);
        Self {
            width,
            height,
            body,
            body_top: HEADER_ROWS,
            body_rows,
            scroll,
            back_button: Rect {
                column: MARGIN,
                row: button_row,
                width: button_width,
            },
            next_button: Rect {
                column: width.saturating_sub(MARGIN + button_width),
                row: button_row,
                width: button_width,
            },
            empty,
        }
    }

    /// Body line shown at screen `row`
    fn line_at(&self, row: u16) -> Option<&[Span]> {
        if row < self.body_top || row >= self.body_top + self.body_rows {
            return None;
        }
        let index = self.scroll + usize::from(row - self.body_top);
        self.body.lines.get(index).map(Vec::as_slice)
    }

    /// Index of the chunk drawn at a screen position
    pub fn chunk_at(&self, column: u16, row: u16) -> Option<usize> {
        let column = column.checked_sub(MARGIN)?;
        self.line_at(row)?
            .iter()
            .find(|span| column >= span.column && column < span.column + span.width())
            .and_then(|span| span.chunk)
    }

    /// Whether a screen row belongs to the body
    pub fn in_body(&self, row: u16) -> bool {
        row >= self.body_top && row < self.body_top + self.body_rows
    }
}

struct Palette {
    revealed: Colors,
    hidden: Colors,
    highlighted: Colors,
    note: Colors,
    accent: Colors,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                revealed: Colors::new(Color::Black, Color::White),
                hidden: Colors::new(Color::Grey, Color::White),
                highlighted: Colors::new(Color::Black, Color::Yellow),
                note: Colors::new(Color::DarkBlue, Color::White),
                accent: Colors::new(Color::DarkBlue, Color::White),
            },
            Theme::Dark => Self {
                revealed: Colors::new(Color::White, Color::Black),
                hidden: Colors::new(Color::DarkGrey, Color::Black),
                highlighted: Colors::new(Color::Black, Color::DarkYellow),
                note: Colors::new(Color::Cyan, Color::Black),
                accent: Colors::new(Color::Cyan, Color::Black),
            },
        }
    }

    fn base(&self) -> Colors {
        self.revealed
    }

    fn span(&self, style: SpanStyle) -> Colors {
        match style {
            SpanStyle::Revealed => self.revealed,
            SpanStyle::Hidden => self.hidden,
            SpanStyle::Highlighted => self.highlighted,
            SpanStyle::Note => self.note,
        }
    }
}

fn clip(text: &str, width: u16) -> &str {
    &text[..fit(text, usize::from(width))]
}

/// Draw a frame
pub fn draw<W: Write>(out: &mut W, frame: &Frame, chrome: &Chrome) -> Result<()> {
    let palette = Palette::for_theme(chrome.theme);
    let inner = frame.width.saturating_sub(2 * MARGIN);

    queue!(out, SetColors(palette.base()), Clear(ClearType::All))?;

    // Header
    let percent = format!("{:.2}%", chrome.percent);
    queue!(
        out,
        MoveTo(MARGIN, 0),
        SetAttribute(Attribute::Bold),
        SetColors(palette.accent),
        Print(clip("WordReveal", inner)),
        SetAttribute(Attribute::Reset),
        SetColors(palette.base()),
    )?;
    let percent_column = frame
        .width
        .saturating_sub(MARGIN + columns(&percent));
    queue!(out, MoveTo(percent_column, 0), Print(&percent))?;
    let bar_width = usize::from(inner.saturating_sub(2));
    queue!(
        out,
        MoveTo(MARGIN, 1),
        SetColors(palette.accent),
        Print(progress_bar(chrome.percent, bar_width)),
        SetColors(palette.base()),
    )?;

    // Body
    let visible = frame
        .body
        .lines
        .iter()
        .skip(frame.scroll)
        .take(usize::from(frame.body_rows));
    for (offset, line) in visible.enumerate() {
        let row = frame.body_top + offset as u16;
        for span in line {
            queue!(
                out,
                MoveTo(MARGIN + span.column, row),
                SetColors(palette.span(span.style)),
            )?;
            if span.style == SpanStyle::Highlighted {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset))?;
        }
    }
    queue!(out, SetColors(palette.base()))?;

    // Footer
    let button_row = frame.back_button.row;
    queue!(
        out,
        MoveTo(frame.back_button.column, button_row),
        SetAttribute(Attribute::Reverse),
        Print(BACK_LABEL),
        MoveTo(frame.next_button.column, button_row),
        Print(NEXT_LABEL),
        SetAttribute(Attribute::Reset),
        SetColors(palette.base()),
    )?;

    let status = if chrome.complete {
        format!("{} | {} | complete!", chrome.elapsed, chrome.mode)
    } else {
        format!(
            "{} | {} | {} left | streak {}",
            chrome.elapsed, chrome.mode, chrome.remaining, chrome.streak
        )
    };
    let between = frame
        .next_button
        .column
        .saturating_sub(frame.back_button.column + frame.back_button.width + 2);
    let status = clip(&status, between);
    let status_width = columns(status);
    let status_column = frame.back_button.column
        + frame.back_button.width
        + 1
        + between.saturating_sub(status_width) / 2;
    queue!(out, MoveTo(status_column, button_row), Print(status))?;

    queue!(
        out,
        MoveTo(MARGIN, frame.height.saturating_sub(1)),
        SetColors(palette.hidden),
        Print(clip(&chrome.hints, inner)),
        ResetColor,
    )?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordreveal_core::{advance_at, toggle_highlight};

    fn line_text(line: &[Span]) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_hidden_chunks_are_masked() {
        let session = advance_at(&Session::new("Hi there", RevealMode::Word), 1, 0);
        let body = layout_body(&session, &[], 40);

        assert_eq!(body.lines.len(), 1);
        assert_eq!(line_text(&body.lines[0]), "Hi _____");
        assert_eq!(body.lines[0][2].style, SpanStyle::Hidden);
        assert_eq!(body.cursor_line, 0);
    }

    #[test]
    fn test_highlight_shows_text() {
        let session = toggle_highlight(&Session::new("Hi there", RevealMode::Word), "chunk-word-2");
        let body = layout_body(&session, &[], 40);
        assert_eq!(line_text(&body.lines[0]), "__ there");
        assert_eq!(body.lines[0][2].style, SpanStyle::Highlighted);
    }

    #[test]
    fn test_wraps_at_chunk_boundaries() {
        let session = Session::new("alpha beta gamma", RevealMode::Word);
        let body = layout_body(&session, &[], 11);

        let lines: Vec<String> = body.lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(lines, vec!["_____ ____ ", "_____"]);
    }

    #[test]
    fn test_long_chunks_are_split() {
        let session = advance_at(&Session::new("abcdefgh", RevealMode::Word), 1, 0);
        let body = layout_body(&session, &[], 3);
        let lines: Vec<String> = body.lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }

    fn spans(line: &[Span]) -> Vec<(u16, &str)> {
        line.iter().map(|s| (s.column, s.text.as_str())).collect()
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        let session = advance_at(&Session::new("日本語 テキスト 漢字", RevealMode::Word), 10, 0);
        let body = layout_body(&session, &[], 12);

        assert_eq!(body.lines.len(), 3);
        assert_eq!(spans(&body.lines[0]), vec![(0, "日本語"), (6, " ")]);
        assert_eq!(spans(&body.lines[1]), vec![(0, "テキスト"), (8, " ")]);
        assert_eq!(spans(&body.lines[2]), vec![(0, "漢字")]);
        for line in &body.lines {
            let end = line.last().map_or(0, |s| s.column + s.width());
            assert!(end <= 12, "{line:?}");
        }
    }

    #[test]
    fn test_hidden_wide_text_keeps_its_width() {
        let text = "日本語 テキスト 漢字";
        let hidden = layout_body(&Session::new(text, RevealMode::Word), &[], 12);
        let shown = layout_body(&advance_at(&Session::new(text, RevealMode::Word), 10, 0), &[], 12);

        assert_eq!(line_text(&hidden.lines[0]), "______ ");
        let columns = |body: &BodyLayout| -> Vec<Vec<u16>> {
            body.lines.iter().map(|l| l.iter().map(|s| s.column).collect()).collect()
        };
        assert_eq!(columns(&hidden), columns(&shown));
    }

    #[test]
    fn test_long_wide_chunk_splits_on_character_boundaries() {
        let session = advance_at(&Session::new("日本語テキスト", RevealMode::Word), 1, 0);

        let body = layout_body(&session, &[], 5);
        let lines: Vec<String> = body.lines.iter().map(|l| line_text(l)).collect();
        assert_eq!(lines, vec!["日本", "語テ", "キス", "ト"]);

        // Narrower than one character: one per line
        let body = layout_body(&session, &[], 1);
        assert_eq!(body.lines.len(), 7);
        assert_eq!(line_text(&body.lines[0]), "日");
    }

    #[test]
    fn test_chunk_at_with_wide_characters() {
        let session = advance_at(&Session::new("日本語 テキスト 漢字", RevealMode::Word), 10, 0);
        let frame = Frame::compute(&session, &[], 12 + 2 * MARGIN, 12);

        assert_eq!(frame.chunk_at(MARGIN + 5, HEADER_ROWS), Some(0));
        assert_eq!(frame.chunk_at(MARGIN + 6, HEADER_ROWS), Some(1));
        assert_eq!(frame.chunk_at(MARGIN + 7, HEADER_ROWS + 1), Some(2));
        assert_eq!(frame.chunk_at(MARGIN + 3, HEADER_ROWS + 2), Some(4));
        assert_eq!(frame.chunk_at(MARGIN + 4, HEADER_ROWS + 2), None);
    }

    #[test]
    fn test_clip_stops_before_a_split_character() {
        assert_eq!(clip("日本語", 5), "日本");
        assert_eq!(clip("abc", 10), "abc");
        assert_eq!(clip("日", 1), "");
    }

    #[test]
    fn test_line_breaks_and_cursor_line() {
        let session = advance_at(&Session::new("one\ntwo\nthree", RevealMode::Row), 1, 0);
        let body = layout_body(&session, &[], 40);

        assert_eq!(body.lines.len(), 3);
        assert_eq!(line_text(&body.lines[0]), "one");
        assert_eq!(line_text(&body.lines[1]), "___");
        assert_eq!(body.cursor_line, 1);
    }

    #[test]
    fn test_notes_come_first() {
        let session = Session::new("x", RevealMode::Word);
        let body = layout_body(&session, &["Press Next".to_string()], 40);
        assert_eq!(line_text(&body.lines[0]), "Press Next");
        assert_eq!(body.lines[0][0].chunk, None);
        assert_eq!(line_text(&body.lines[2]), "_");
    }

    #[test]
    fn test_chunk_at_maps_positions() {
        let session = Session::new("Hi there", RevealMode::Word);
        let frame = Frame::compute(&session, &[], 40, 12);

        assert_eq!(frame.chunk_at(MARGIN, HEADER_ROWS), Some(0));
        assert_eq!(frame.chunk_at(MARGIN + 2, HEADER_ROWS), Some(1));
        assert_eq!(frame.chunk_at(MARGIN + 4, HEADER_ROWS), Some(2));
        assert_eq!(frame.chunk_at(MARGIN + 20, HEADER_ROWS), None);
        assert_eq!(frame.chunk_at(0, HEADER_ROWS), None);
        assert_eq!(frame.chunk_at(MARGIN, 0), None);
    }

    #[test]
    fn test_buttons_sit_in_footer() {
        let session = Session::new("x", RevealMode::Word);
        let frame = Frame::compute(&session, &[], 40, 12);

        assert_eq!(frame.back_button.row, 10);
        assert!(frame.back_button.contains(MARGIN, 10));
        assert!(frame.next_button.contains(37, 10));
        assert!(!frame.next_button.contains(38, 10));
        assert!(!frame.next_button.contains(37, 11));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let text = (0..20).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n");
        let session = advance_at(&Session::new(text, RevealMode::Row), 15, 0);
        let frame = Frame::compute(&session, &[], 40, 10);

        assert_eq!(frame.body_rows, 5);
        assert_eq!(frame.body.cursor_line, 15);
        assert_eq!(frame.scroll, 13);
    }

    #[test]
    fn test_empty_session_message() {
        let frame = Frame::compute(&Session::new("", RevealMode::Word), &[], 80, 12);
        assert!(frame.empty);
        assert_eq!(line_text(&frame.body.lines[0]), EMPTY_MESSAGE);
    }

    #[test]
    fn test_draw_writes_text() {
        let session = advance_at(&Session::new("Hi there", RevealMode::Word), 1, 0);
        let frame = Frame::compute(&session, &[], 40, 10);
        let chrome = Chrome {
            percent: 66.67,
            elapsed: "00:05".to_string(),
            mode: RevealMode::Word,
            remaining: 1,
            streak: 1,
            complete: false,
            theme: Theme::Dark,
            hints: "q quit".to_string(),
        };

        let mut out = Vec::new();
        draw(&mut out, &frame, &chrome).unwrap();
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("66.67%"));
        assert!(written.contains("Hi"));
        assert!(written.contains("_____"));
        assert!(written.contains(NEXT_LABEL));
    }
}
