use crate::site::content::{
    Icon, HERO_BADGE, HERO_COPY, HERO_TITLE, HERO_TITLE_ACCENT,
};
use crate::site::Page;
use crate::ui::components::{glyph, Action, Badge, Button, ButtonSize, ButtonVariant, Card};
use crate::ui::document::Document;
use crate::ui::theme::{
    BORDER, PLAYHEAD, STATUS_OK, TEXT, TEXT_FAINT, TEXT_MUTED, VIOLET_LIGHT,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const TRACKS: usize = 8;
const CLIP_LEN: usize = 16;
const MOCK_MAX_WIDTH: u16 = 76;
const WAVE: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

pub fn render_hero(doc: &mut Document, narrow: bool) {
    doc.blank();
    doc.push_centered(Badge::outline(HERO_BADGE).span());
    doc.blank();
    let title = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    doc.paragraph_centered(HERO_TITLE, title);
    doc.paragraph_centered(HERO_TITLE_ACCENT, title.fg(VIOLET_LIGHT));
    doc.blank();
    for line in HERO_COPY.iter() {
        doc.paragraph_centered(line, Style::default().fg(TEXT_MUTED));
    }
    doc.blank();

    let width = doc.width() as usize;
    let trial = Button::new("Start Free Trial")
        .icon(Icon::Download)
        .size(ButtonSize::Lg)
        .fit_to(width);
    let explore = Button::new("Explore Features")
        .variant(ButtonVariant::Secondary)
        .size(ButtonSize::Lg)
        .trailing_icon(Icon::ChevronRight)
        .fit_to(width);
    if narrow {
        let trial = doc.button(trial, Action::Navigate(Page::Download));
        doc.push_centered(trial);
        doc.blank();
        let explore = doc.button(explore, Action::Navigate(Page::Features));
        doc.push_centered(explore);
    } else {
        let trial = doc.button(trial, Action::Navigate(Page::Download));
        let explore = doc.button(explore, Action::Navigate(Page::Features));
        doc.push_centered(Line::from(vec![trial, Span::raw("   "), explore]));
    }
    doc.blank();
    doc.blank();

    let mock = daw_mock(doc, doc.width().min(MOCK_MAX_WIDTH));
    doc.append_centered(mock);
    doc.blank();
}

/// Abstract DAW window: title bar, tool sidebar, eight tracks with clips
/// and a playhead a third of the way in.
fn daw_mock(parent: &Document, outer: u16) -> Document {
    let inner_width = Card::inner_width(outer) as usize;
    let mut inner = parent.child(inner_width as u16);

    let light = |color: Color| Span::styled("● ", Style::default().fg(color));
    inner.push(Line::from(vec![
        light(Color::Rgb(0x7f, 0x1d, 0x1d)),
        light(Color::Rgb(0x71, 0x3f, 0x12)),
        light(Color::Rgb(0x14, 0x53, 0x2d)),
        Span::raw(" "),
        Span::styled("▭".repeat(12), Style::default().fg(BORDER)),
    ]));
    inner.push(Span::styled(
        "─".repeat(inner_width),
        Style::default().fg(BORDER),
    ));

    let sidebar = [Some(Icon::Layers), Some(Icon::Disc), Some(Icon::Sliders)];
    let timeline = inner_width.saturating_sub(5);
    let playhead = timeline / 3;

    for track in 0..TRACKS {
        let mut spans = Vec::with_capacity(timeline + 3);
        let tool = sidebar.get(track).copied().flatten();
        let tool_style = if track == 0 {
            Style::default().fg(VIOLET_LIGHT)
        } else {
            Style::default().fg(TEXT_FAINT)
        };
        spans.push(Span::styled(
            format!(" {:<2} ", tool.map(glyph).unwrap_or("")),
            tool_style,
        ));
        spans.push(Span::styled("│", Style::default().fg(BORDER)));

        let start = (track * 6 + 2).min(timeline);
        let end = (start + CLIP_LEN).min(timeline);
        for col in 0..timeline {
            if col == playhead {
                spans.push(Span::styled("┃", Style::default().fg(PLAYHEAD)));
            } else if (start..end).contains(&col) {
                let bar = WAVE[wave_level(track, col - start)];
                spans.push(Span::styled(bar, Style::default().fg(VIOLET_LIGHT)));
            } else {
                spans.push(Span::styled("·", Style::default().fg(BORDER)));
            }
        }
        inner.push(Line::from(spans));
    }

    inner.push(Line::from(vec![
        Span::styled("  ▶ ", Style::default().fg(STATUS_OK)),
        Span::styled("00:01:12.480", Style::default().fg(TEXT_MUTED)),
    ]));

    Card::new().frame(inner)
}

/// Deterministic pseudo-random bar height in `0..8`.
fn wave_level(track: usize, step: usize) -> usize {
    let mut x = (track as u32).wrapping_mul(2_654_435_761) ^ (step as u32).wrapping_mul(40_503);
    x ^= x >> 13;
    x = x.wrapping_mul(0x5bd1_e995);
    x ^= x >> 15;
    (x % WAVE.len() as u32) as usize
}
