//! Line-based page documents with focusable hotspots.
//!
//! Views append styled lines to a [`Document`]. Buttons are registered
//! through [`Document::button`], which hands out focus indices from a
//! counter shared by every document built for the same screen, so focus
//! order is the order buttons were created in.

use crate::ui::components::{Action, Button};
use crate::ui::layout::wrap;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    /// Position in the screen-wide focus order.
    pub index: usize,
    /// Line of the document the button sits on.
    pub line: usize,
    pub action: Action,
    /// Text the button renders as.
    pub label: String,
}

impl Hotspot {
    pub(crate) fn shifted(self, lines: usize) -> Self {
        Self {
            line: self.line + lines,
            ..self
        }
    }
}

/// Columns `push_split` keeps between its halves.
const SPLIT_GAP: usize = 2;

pub struct Document {
    width: u16,
    focus: Option<usize>,
    counter: Rc<Cell<usize>>,
    lines: Vec<Line<'static>>,
    hotspots: Vec<Hotspot>,
}

impl Document {
    pub fn new(width: u16, focus: Option<usize>) -> Self {
        Self {
            width,
            focus,
            counter: Rc::new(Cell::new(0)),
            lines: Vec::new(),
            hotspots: Vec::new(),
        }
    }

    /// Empty document sharing this one's focus counter.
    pub fn child(&self, width: u16) -> Self {
        Self {
            width,
            focus: self.focus,
            counter: Rc::clone(&self.counter),
            lines: Vec::new(),
            hotspots: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        width: u16,
        lines: Vec<Line<'static>>,
        hotspots: Vec<Hotspot>,
        counter: (Option<usize>, Rc<Cell<usize>>),
    ) -> Self {
        Self {
            width,
            focus: counter.0,
            counter: counter.1,
            lines,
            hotspots,
        }
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<Line<'static>>,
        Vec<Hotspot>,
        (Option<usize>, Rc<Cell<usize>>),
    ) {
        (self.lines, self.hotspots, (self.focus, self.counter))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Hotspots handed out so far across the whole screen.
    pub fn issued(&self) -> usize {
        self.counter.get()
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Word-wrapped text in a single style.
    pub fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width as usize) {
            self.lines.push(Line::from(Span::styled(row, style)));
        }
    }

    /// Register a button on the line that will be pushed next and return
    /// its styled span.
    pub fn button(&mut self, button: Button, action: Action) -> Span<'static> {
        let index = self.counter.get();
        self.counter.set(index + 1);
        let span = button.span(self.focus == Some(index));
        self.hotspots.push(Hotspot {
            index,
            line: self.lines.len(),
            action,
            label: span.content.to_string(),
        });
        span
    }

    /// Move the hotspot registered on `from` for `span` down to `to`.
    fn move_hotspot(&mut self, from: usize, span: &Span<'static>, to: usize) {
        if let Some(hotspot) = self
            .hotspots
            .iter_mut()
            .find(|h| h.line == from && h.label == span.content)
        {
            hotspot.line = to;
        }
    }

    /// Push `line` centered in the document width.
    pub fn push_centered(&mut self, line: impl Into<Line<'static>>) {
        let line: Line<'static> = line.into();
        let pad = (self.width as usize).saturating_sub(line.width()) / 2;
        let mut spans = vec![Span::raw(" ".repeat(pad))];
        spans.extend(line.spans);
        self.lines.push(Line::from(spans));
    }

    /// Push `left` and `right` on one line, `right` flush with the right
    /// edge and at least two columns away. When they do not fit together,
    /// `right` goes on its own line below `left`, hotspots included.
    pub fn push_split(&mut self, left: Vec<Span<'static>>, right: Vec<Span<'static>>) {
        let width = self.width as usize;
        let left_width: usize = left.iter().map(Span::width).sum();
        let right_width: usize = right.iter().map(Span::width).sum();

        if left_width + right_width + SPLIT_GAP <= width {
            let mut spans = left;
            spans.push(Span::raw(" ".repeat(width - left_width - right_width)));
            spans.extend(right);
            self.lines.push(Line::from(spans));
            return;
        }

        let line = self.lines.len();
        for span in &right {
            self.move_hotspot(line, span, line + 1);
        }
        self.lines.push(Line::from(left));
        let mut spans = vec![Span::raw(" ".repeat(width.saturating_sub(right_width)))];
        spans.extend(right);
        self.lines.push(Line::from(spans));
    }

    /// Lay `items` out left to right, `gap` columns apart, starting a new
    /// line whenever the next item would run past the width.
    pub fn push_flow(&mut self, items: Vec<Span<'static>>, gap: usize) {
        let width = self.width as usize;
        let first = self.lines.len();
        let mut row = 0;
        let mut used = 0;
        let mut current: Vec<Span<'static>> = Vec::new();

        for item in items {
            let item_width = item.width();
            if !current.is_empty() && used + gap + item_width > width {
                self.lines.push(Line::from(std::mem::take(&mut current)));
                row += 1;
                used = 0;
            }
            if !current.is_empty() {
                current.push(Span::raw(" ".repeat(gap)));
                used += gap;
            }
            if row > 0 {
                self.move_hotspot(first, &item, first + row);
            }
            used += item_width;
            current.push(item);
        }
        self.lines.push(Line::from(current));
    }

    /// Word-wrapped text, each row centered.
    pub fn paragraph_centered(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width as usize) {
            self.push_centered(Span::styled(row, style));
        }
    }

    /// Horizontal rule across the document width.
    pub fn rule(&mut self, style: Style) {
        self.lines
            .push(Line::from(Span::styled("─".repeat(self.width as usize), style)));
    }

    /// Append another document below this one.
    pub fn append(&mut self, other: Document) {
        let offset = self.lines.len();
        self.hotspots
            .extend(other.hotspots.into_iter().map(|h| h.shifted(offset)));
        self.lines.extend(other.lines);
    }

    /// Append another document shifted right by `indent` columns.
    pub fn append_indented(&mut self, other: Document, indent: u16) {
        let pad = " ".repeat(indent as usize);
        let offset = self.lines.len();
        self.hotspots
            .extend(other.hotspots.into_iter().map(|h| h.shifted(offset)));
        for line in other.lines {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            self.lines.push(Line::from(spans));
        }
    }

    /// Append `other` centered in this document's width.
    pub fn append_centered(&mut self, other: Document) {
        let indent = self.width.saturating_sub(other.width) / 2;
        self.append_indented(other, indent);
    }

    /// Lay `columns` out side by side, `gap` blank columns apart.
    pub fn append_columns(&mut self, columns: Vec<Document>, gap: u16) {
        let offset = self.lines.len();
        let rows = columns.iter().map(Document::len).max().unwrap_or(0);
        let gap = " ".repeat(gap as usize);

        for row in 0..rows {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let last = columns.len().saturating_sub(1);
            for (i, column) in columns.iter().enumerate() {
                let line = column.lines.get(row).cloned().unwrap_or_default();
                if i == last {
                    spans.extend(line.spans);
                } else {
                    spans.extend(Self::fit(line, column.width as usize).spans);
                    spans.push(Span::raw(gap.clone()));
                }
            }
            self.lines.push(Line::from(spans));
        }

        let mut merged: Vec<Hotspot> = columns
            .into_iter()
            .flat_map(|column| column.hotspots)
            .map(|h| h.shifted(offset))
            .collect();
        merged.sort_by_key(|h| h.index);
        self.hotspots.extend(merged);
    }

    /// Lay `items` out in rows of `per_row`, with a blank line between rows.
    pub fn append_grid(&mut self, items: Vec<Document>, per_row: usize, gap: u16) {
        let per_row = per_row.max(1);
        let mut items = items.into_iter().peekable();
        let mut first = true;
        while items.peek().is_some() {
            if !first {
                self.blank();
            }
            first = false;
            let row: Vec<Document> = items.by_ref().take(per_row).collect();
            self.append_columns(row, gap);
        }
    }

    /// Pad or truncate `line` to exactly `width` columns.
    pub fn fit(line: Line<'static>, width: usize) -> Line<'static> {
        let mut used = 0;
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        for span in line.spans {
            let span_width = span.width();
            if used + span_width <= width {
                used += span_width;
                spans.push(span);
                continue;
            }
            let room = width - used;
            let cut: String = span.content.chars().take(room).collect();
            used += cut.chars().count();
            spans.push(Span::styled(cut, span.style));
            break;
        }
        if used < width {
            spans.push(Span::raw(" ".repeat(width - used)));
        }
        Line::from(spans).style(line.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(doc: &Document) -> Vec<String> {
        doc.lines().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn buttons_get_sequential_indices_across_children() {
        let mut header = Document::new(20, None);
        let span = header.button(Button::link("Home"), Action::Inert);
        header.push(span);
        let mut body = header.child(20);
        let span = body.button(Button::link("Docs"), Action::Inert);
        body.push(span);
        assert_eq!(header.hotspots()[0].index, 0);
        assert_eq!(body.hotspots()[0].index, 1);
        assert_eq!(body.issued(), 2);
    }

    #[test]
    fn focused_button_is_styled() {
        let mut doc = Document::new(20, Some(0));
        let focused = doc.button(Button::new("A"), Action::Inert);
        let plain = doc.button(Button::new("A"), Action::Inert);
        assert_ne!(focused.style, plain.style);
    }

    #[test]
    fn append_shifts_hotspots() {
        let mut doc = Document::new(20, None);
        doc.push("title");
        doc.blank();
        let mut child = doc.child(20);
        let span = child.button(Button::new("Go"), Action::Inert);
        child.push(span);
        doc.append(child);
        assert_eq!(doc.hotspots()[0].line, 2);
    }

    #[test]
    fn columns_pad_all_but_last() {
        let mut doc = Document::new(20, None);
        let mut left = doc.child(4);
        left.push("ab");
        left.push("cd");
        let mut right = doc.child(4);
        right.push("xy");
        doc.append_columns(vec![left, right], 1);
        assert_eq!(text(&doc), vec!["ab   xy", "cd   "]);
    }

    #[test]
    fn grid_breaks_rows() {
        let mut doc = Document::new(20, None);
        let items = (0..3)
            .map(|i| {
                let mut item = doc.child(3);
                item.push(format!("#{i}"));
                item
            })
            .collect();
        doc.append_grid(items, 2, 1);
        assert_eq!(text(&doc), vec!["#0  #1", "", "#2"]);
    }

    #[test]
    fn centered_line_is_padded_left() {
        let mut doc = Document::new(10, None);
        doc.push_centered("abcd");
        assert_eq!(text(&doc), vec!["   abcd"]);
    }

    #[test]
    fn split_line_pushes_right_to_edge() {
        let mut doc = Document::new(10, None);
        doc.push_split(vec![Span::raw("ab")], vec![Span::raw("xy")]);
        assert_eq!(text(&doc), vec!["ab      xy"]);
    }

    #[test]
    fn split_line_breaks_when_halves_overflow() {
        let mut doc = Document::new(12, None);
        let left = doc.button(Button::link("Previous"), Action::Inert);
        let right = doc.button(Button::new("Next"), Action::Inert);
        doc.push_split(vec![left], vec![right]);
        assert_eq!(text(&doc), vec!["Previous", "  [  Next  ]"]);
        assert_eq!(doc.hotspots()[0].line, 0);
        assert_eq!(doc.hotspots()[1].line, 1);
    }

    #[test]
    fn split_line_keeps_two_column_gap() {
        let mut doc = Document::new(6, None);
        doc.push_split(vec![Span::raw("abc")], vec![Span::raw("xy")]);
        assert_eq!(text(&doc), vec!["abc", "    xy"]);
    }

    #[test]
    fn flow_wraps_items_and_their_hotspots() {
        let mut doc = Document::new(12, None);
        let items = ["One", "Two", "Three"]
            .into_iter()
            .map(|label| doc.button(Button::link(label), Action::Inert))
            .collect();
        doc.push_flow(items, 2);
        assert_eq!(text(&doc), vec!["One  Two", "Three"]);
        let lines: Vec<usize> = doc.hotspots().iter().map(|h| h.line).collect();
        assert_eq!(lines, vec![0, 0, 1]);
    }

    #[test]
    fn hotspot_remembers_button_label() {
        let mut doc = Document::new(20, None);
        let span = doc.button(Button::new("Go"), Action::Inert);
        doc.push(span);
        assert_eq!(doc.hotspots()[0].label, "[  Go  ]");
    }

    #[test]
    fn centered_paragraph_wraps_then_centers() {
        let mut doc = Document::new(9, None);
        doc.paragraph_centered("one two three", Style::default());
        assert_eq!(text(&doc), vec![" one two", "  three"]);
    }

    #[test]
    fn centered_document_keeps_hotspots() {
        let mut doc = Document::new(20, None);
        doc.blank();
        let mut inner = doc.child(10);
        let span = inner.button(Button::new("Go"), Action::Inert);
        inner.push(span);
        doc.append_centered(inner);
        assert_eq!(doc.hotspots()[0].line, 1);
        assert!(text(&doc)[1].starts_with("     [  Go  ]"));
    }

    #[test]
    fn fit_truncates_and_pads() {
        assert_eq!(Document::fit(Line::from("abcdef"), 3).to_string(), "abc");
        assert_eq!(Document::fit(Line::from("ab"), 4).to_string(), "ab  ");
    }

    #[test]
    fn paragraph_wraps_to_width() {
        let mut doc = Document::new(8, None);
        doc.paragraph("one two three", Style::default());
        assert_eq!(text(&doc), vec!["one two", "three"]);
    }
}
