use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    contact::Contact,
    view::{
        fields::{Focus, InputFields},
        notice::Notice,
    },
};

/// Frame width in cells. The window is not resizable.
pub const WIDTH: u16 = 72;
/// Frame height in cells.
pub const HEIGHT: u16 = 24;
/// Table rows visible at once.
pub const TABLE_ROWS: usize = 10;

const TITLE: &str = " Contact Book ";
const INNER: usize = WIDTH as usize - 2;
const FIELD_WIDTH: usize = 20;
const ID_COL: usize = 6;
const NAME_COL: usize = 36;
const PHONE_COL: usize = 22;
const TABLE_TOP: u16 = 7;
const MODAL_WIDTH: usize = 44;

/// Everything drawn in one frame.
pub struct Frame<'a> {
    /// Entry text and focus.
    pub fields: &'a InputFields,
    /// Rows of the last fetch.
    pub rows: &'a [Contact],
    /// Highlighted row index.
    pub selected: Option<usize>,
    /// Status line text.
    pub status: &'a str,
    /// Dialog drawn over the frame.
    pub modal: Option<Notice>,
}

/// Top-left corner that centers the frame in a terminal of `size`.
pub fn origin(size: (u16, u16)) -> (u16, u16) {
    let (cols, lines) = size;
    (
        cols.saturating_sub(WIDTH) / 2,
        lines.saturating_sub(HEIGHT) / 2,
    )
}

/// First table row to draw so that `selected` stays visible.
pub fn first_visible(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(idx) if idx >= visible => idx + 1 - visible,
        _ => 0,
    }
}

/// Truncates or pads `text` to exactly `width` terminal columns.
///
/// A wide character that would straddle the edge is dropped and replaced by padding.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

fn centered(text: &str, width: usize) -> String {
    let len = text.width().min(width);
    let left = (width - len) / 2;
    fit(&format!("{}{text}", " ".repeat(left)), width)
}

struct Painter<'w, W: Write> {
    out: &'w mut W,
    x: u16,
    y: u16,
}

impl<W: Write> Painter<'_, W> {
    fn text(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(self.x + col, self.y + row), Print(text))
    }

    fn highlighted(&mut self, col: u16, row: u16, text: &str, on: bool) -> io::Result<()> {
        if on {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        self.text(col, row, text)?;
        if on {
            queue!(self.out, SetAttribute(Attribute::NoReverse))?;
        }
        Ok(())
    }
}

/// Draws `frame` centered in a terminal of `size` and flushes.
pub fn draw<W: Write>(out: &mut W, frame: &Frame<'_>, size: (u16, u16)) -> io::Result<()> {
    let (x, y) = origin(size);
    queue!(out, Clear(ClearType::All))?;
    let mut p = Painter { out, x, y };

    let rule = "─".repeat(INNER);
    let top = format!("┌{}┐", centered_rule(TITLE, INNER));
    p.text(0, 0, &top)?;
    for row in 1..HEIGHT - 1 {
        p.text(0, row, "│")?;
        p.text(WIDTH - 1, row, "│")?;
    }
    p.text(0, HEIGHT - 1, &format!("└{rule}┘"))?;

    draw_entries(&mut p, frame.fields)?;
    draw_table(&mut p, frame)?;

    p.text(
        2,
        18,
        &centered("[F1 Insert]        [F2 Delete]        [F3 Obtain]", INNER - 2),
    )?;

    p.text(2, 19, &format!("┌{}┐", centered_rule(" Search contacts ", INNER - 4)))?;
    p.text(2, 20, "│ Name ")?;
    p.highlighted(
        9,
        20,
        &format!("[{}]", fit(&frame.fields.search, 30)),
        frame.fields.focus == Focus::Search,
    )?;
    p.text(42, 20, &fit(" [F5 Search]  [F6 Show all]", INNER - 43))?;
    p.text(WIDTH - 3, 20, "│")?;
    p.text(2, 21, &format!("└{}┘", "─".repeat(INNER - 4)))?;

    p.text(2, 22, &fit(frame.status, INNER - 2))?;

    if let Some(notice) = frame.modal {
        draw_modal(&mut p, notice)?;
    }

    p.out.flush()
}

fn centered_rule(title: &str, width: usize) -> String {
    let len = title.width().min(width);
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", "─".repeat(left), fit(title, len), "─".repeat(right))
}

fn draw_entries<W: Write>(p: &mut Painter<'_, W>, fields: &InputFields) -> io::Result<()> {
    let columns = [
        ("ID", &fields.id, Focus::Id),
        ("NAME", &fields.name, Focus::Name),
        ("PHONE", &fields.phone, Focus::Phone),
    ];
    for (i, (label, value, focus)) in columns.into_iter().enumerate() {
        let col = 2 + (i * (FIELD_WIDTH + 3)) as u16;
        p.text(col, 2, &centered(label, FIELD_WIDTH + 2))?;
        p.highlighted(
            col,
            3,
            &format!("[{}]", fit(value, FIELD_WIDTH)),
            fields.focus == focus,
        )?;
    }
    Ok(())
}

fn draw_table<W: Write>(p: &mut Painter<'_, W>, frame: &Frame<'_>) -> io::Result<()> {
    let focused = frame.fields.focus == Focus::Table;
    let header = format!(
        "{}│{}│{}",
        centered("ID", ID_COL),
        centered("NAME", NAME_COL),
        centered("PHONE", PHONE_COL)
    );
    p.highlighted(2, 5, &header, focused)?;
    p.text(
        2,
        6,
        &format!(
            "{}┼{}┼{}",
            "─".repeat(ID_COL),
            "─".repeat(NAME_COL),
            "─".repeat(PHONE_COL)
        ),
    )?;

    let start = first_visible(frame.selected, TABLE_ROWS);
    for line in 0..TABLE_ROWS {
        let idx = start + line;
        let row = TABLE_TOP + line as u16;
        let text = match frame.rows.get(idx) {
            Some(contact) => format!(
                "{}│{}│{}",
                centered(&contact.id.to_string(), ID_COL),
                centered(&contact.name, NAME_COL),
                centered(&contact.phone, PHONE_COL)
            ),
            None => format!(
                "{}│{}│{}",
                " ".repeat(ID_COL),
                " ".repeat(NAME_COL),
                " ".repeat(PHONE_COL)
            ),
        };
        p.highlighted(2, row, &text, frame.selected == Some(idx))?;
    }
    Ok(())
}

fn draw_modal<W: Write>(p: &mut Painter<'_, W>, notice: Notice) -> io::Result<()> {
    let col = (WIDTH as usize - MODAL_WIDTH) as u16 / 2;
    let inner = MODAL_WIDTH - 2;
    let title = centered_rule(&format!(" {} ", notice.title()), inner).replace('─', "═");
    p.text(col, 9, &format!("╔{title}╗"))?;
    p.text(col, 10, &format!("║{}║", " ".repeat(inner)))?;
    p.text(col, 11, &format!("║{}║", centered(notice.message(), inner)))?;
    p.text(col, 12, &format!("║{}║", " ".repeat(inner)))?;
    p.text(col, 13, &format!("║{}║", centered("[ OK ]", inner)))?;
    p.text(col, 14, &format!("╚{}╝", "═".repeat(inner)))
}
