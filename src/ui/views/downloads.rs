use crate::site::content::{Build, Channel, Icon, BUILDS, DOWNLOADS_COPY, DOWNLOADS_TITLE};
use crate::site::Page;
use crate::ui::components::{glyph, Action, Badge, Button, ButtonSize, ButtonVariant, Card};
use crate::ui::document::Document;
use crate::ui::theme::{TEXT, TEXT_FAINT, TEXT_MUTED, VIOLET_LIGHT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const LIST_MAX_WIDTH: u16 = 80;

pub fn render_downloads(doc: &mut Document, narrow: bool) {
    let region = doc.width().min(LIST_MAX_WIDTH);
    let mut list = doc.child(region);

    list.blank();
    let back = list.button(
        Button::link("Back to Home").icon(Icon::ArrowLeft),
        Action::Navigate(Page::Home),
    );
    list.push(back);
    list.blank();
    list.push(Span::styled(
        DOWNLOADS_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ));
    list.paragraph(DOWNLOADS_COPY, Style::default().fg(TEXT_MUTED));
    list.blank();

    let inner_width = Card::inner_width(region);
    for build in BUILDS.iter() {
        let mut body = list.child(inner_width);
        render_build(&mut body, build, narrow);
        list.append(Card::new().frame(body));
    }
    list.blank();

    doc.append_centered(list);
}

fn render_build(doc: &mut Document, build: &Build, narrow: bool) {
    let icon = if build.os == "Windows" {
        Icon::Window
    } else {
        Icon::Cpu
    };
    let platform = vec![
        Span::styled(
            format!("{}  ", glyph(icon)),
            Style::default().fg(VIOLET_LIGHT),
        ),
        Span::styled(build.os, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", build.arch), Style::default().fg(TEXT_FAINT)),
    ];

    let release = Span::styled(
        format!("v{}  {}", build.version, build.date),
        Style::default().fg(TEXT_MUTED),
    );
    let badge = (build.channel == Channel::Beta).then(|| Badge::outline("Beta").span());

    let button = Button::new("Download")
        .icon(Icon::Download)
        .variant(ButtonVariant::Secondary)
        .size(ButtonSize::Sm)
        .fit_to(doc.width() as usize);
    let platform_width: usize = platform.iter().map(Span::width).sum();
    let badge_width = badge.as_ref().map_or(0, |b| b.width() + 2);
    let single_line = !narrow
        && platform_width + release.width() + badge_width + button.width() + 6
            <= doc.width() as usize;

    let mut meta = vec![release];
    if single_line {
        if let Some(badge) = badge {
            meta.push(Span::raw("  "));
            meta.push(badge);
        }
        let download = doc.button(button, Action::Inert);
        meta.push(Span::raw("  "));
        meta.push(download);
        doc.push_split(platform, meta);
        return;
    }

    doc.push(Line::from(platform));
    if let Some(badge) = badge {
        let meta_width: usize = meta.iter().map(Span::width).sum();
        if meta_width + badge_width <= doc.width() as usize {
            meta.push(Span::raw("  "));
            meta.push(badge);
        } else {
            doc.push(Line::from(std::mem::take(&mut meta)));
            meta.push(badge);
        }
    }
    let download = doc.button(button, Action::Inert);
    doc.push_split(meta, vec![download]);
}
