//! Lays a [`Node`] out top to bottom and writes it into a ratatui [`Buffer`].
//!
//! Painting is a plain function of the description: diffing against the previous frame is left to
//! `ratatui::Terminal::draw`.

use crate::node::Node;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// Screen area of a painted button and the action it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub action: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Painted {
    /// Rows consumed, including rows clipped off the bottom.
    pub rows: u16,
    /// Buttons in paint order. Buttons clipped off the bottom are not listed.
    pub buttons: Vec<HitRegion>,
}

impl Painted {
    pub fn button_at(&self, x: u16, y: u16) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.area.contains(Position::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PaintOptions {
    /// Index into the painted buttons that should use the focused style.
    pub focused: Option<usize>,
}

pub fn paint(node: &Node, area: Rect, buf: &mut Buffer, theme: &Theme) -> Painted {
    paint_with_options(node, area, buf, theme, &PaintOptions::default())
}

pub fn paint_with_options(
    node: &Node,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    options: &PaintOptions,
) -> Painted {
    let mut cx = PaintCx {
        area,
        buf,
        theme,
        options,
        row: 0,
        buttons: Vec::new(),
        button_index: 0,
    };
    cx.node(node);
    Painted {
        rows: cx.row,
        buttons: cx.buttons,
    }
}

struct PaintCx<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    theme: &'a Theme,
    options: &'a PaintOptions,
    row: u16,
    buttons: Vec<HitRegion>,
    button_index: usize,
}

impl PaintCx<'_> {
    fn node(&mut self, node: &Node) {
        let theme = self.theme;
        match node {
            Node::Fragment(children) => {
                for child in children {
                    self.node(child);
                }
            }
            Node::Heading(text) => {
                self.line(&[(text.as_str(), theme.heading)]);
                self.row = self.row.saturating_add(1);
            }
            Node::Text(text) => {
                self.line(&[(text.as_str(), theme.text)]);
            }
            Node::List(items) => {
                for item in items {
                    self.line(&[
                        (theme.bullet.as_str(), theme.text),
                        (item.content.as_str(), theme.text),
                    ]);
                }
            }
            Node::Button { label, action } => {
                let focused = self.options.focused == Some(self.button_index);
                self.button_index += 1;
                let style = if focused {
                    theme.button_focused
                } else {
                    theme.button
                };
                let text = format!("[ {label} ]");
                let y = self.row;
                let cols = self.line(&[(text.as_str(), style)]);
                if let Some(abs_y) = self.visible_y(y) {
                    if cols > 0 {
                        self.buttons.push(HitRegion {
                            area: Rect::new(self.area.x, abs_y, cols, 1),
                            action: action.clone(),
                        });
                    }
                }
            }
        }
    }

    fn visible_y(&self, row: u16) -> Option<u16> {
        (row < self.area.height).then(|| self.area.y + row)
    }

    /// Writes one line of styled segments at the current row and advances. Returns the number of
    /// columns written.
    fn line(&mut self, segments: &[(&str, Style)]) -> u16 {
        let row = self.row;
        self.row = self.row.saturating_add(1);
        let Some(y) = self.visible_y(row) else {
            return 0;
        };
        let mut x = self.area.x;
        let right = self.area.x.saturating_add(self.area.width);
        for (text, style) in segments {
            let max_cols = right.saturating_sub(x);
            x += render_str_clipped(x, y, max_cols, self.buf, text, *style);
        }
        x - self.area.x
    }
}

/// Writes `input` at `(x, y)`, stopping before a character would cross `max_cols`. Wide characters
/// take two cells. Returns the number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if out_cols + w > max_cols {
            break;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        dx += 1;
        out_cols += 1;

        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
            out_cols += 1;
        }
    }

    dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ListItem;
    use ratatui::style::Modifier;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        let mut s = String::new();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                s.push_str(cell.symbol());
            }
        }
        s.trim_end().to_string()
    }

    #[test]
    fn paints_heading_list_and_button() {
        let node = Node::fragment([
            Node::heading("Title"),
            Node::List(vec![ListItem::new("a", "a"), ListItem::new("b", "b")]),
            Node::button("Go", "go"),
        ]);
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        let painted = paint(&node, area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0), "Title");
        assert_eq!(row_text(&buf, 1), "");
        assert_eq!(row_text(&buf, 2), "• a");
        assert_eq!(row_text(&buf, 3), "• b");
        assert_eq!(row_text(&buf, 4), "[ Go ]");
        assert_eq!(painted.rows, 5);
        assert_eq!(
            painted.buttons,
            vec![HitRegion {
                area: Rect::new(0, 4, 6, 1),
                action: "go".to_string(),
            }]
        );
        assert_eq!(painted.button_at(3, 4), Some(0));
        assert_eq!(painted.button_at(6, 4), None);
    }

    #[test]
    fn clips_rows_and_columns() {
        let node = Node::fragment([Node::text("abcdefgh"), Node::button("Hidden", "h")]);
        let area = Rect::new(2, 1, 4, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        let painted = paint(&node, area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 1), "  abcd");
        assert!(painted.buttons.is_empty());
        assert_eq!(painted.rows, 2);
    }

    #[test]
    fn wide_chars_do_not_split() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        let cols = render_str_clipped(0, 0, 3, &mut buf, "日本", Style::default());
        assert_eq!(cols, 2);
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("日"));
        assert_eq!(buf.cell((2, 0)).map(|c| c.symbol()), Some(" "));
    }

    #[test]
    fn focused_button_uses_focused_style() {
        let theme = Theme::default();
        let node = Node::fragment([Node::button("A", "a"), Node::button("B", "b")]);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        paint_with_options(
            &node,
            area,
            &mut buf,
            &theme,
            &PaintOptions { focused: Some(1) },
        );
        let reversed = |y: u16| {
            buf.cell((0, y))
                .is_some_and(|c| c.modifier.contains(Modifier::REVERSED))
        };
        assert!(!reversed(0));
        assert!(reversed(1));
    }
}
