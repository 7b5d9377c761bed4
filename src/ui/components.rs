//! Typed UI primitives: buttons, badges, cards and the actions hotspots
//! carry.

use crate::site::content::Icon;
use crate::site::Page;
use crate::ui::dashboard::DashboardTab;
use crate::ui::document::Document;
use crate::ui::theme::{
    BORDER, FOCUS_RING, SURFACE, TEXT, TEXT_BODY, TEXT_MUTED, VIOLET, VIOLET_LIGHT, VIOLET_PALE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// What activating a hotspot does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigation request for the router.
    Navigate(Page),
    /// Close the mobile menu, then navigate.
    MenuNavigate(Page),
    ToggleMobileMenu,
    SelectTab(DashboardTab),
    /// Shown as a button, wired to nothing.
    Inert,
}

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Music => "♪",
        Icon::Cpu => "▣",
        Icon::Zap => "ϟ",
        Icon::Layers => "≋",
        Icon::Sliders => "⧦",
        Icon::Terminal => "›_",
        Icon::Disc => "◉",
        Icon::Download => "↓",
        Icon::Check => "✓",
        Icon::Window => "▤",
        Icon::Shield => "⛨",
        Icon::LifeBuoy => "⊕",
        Icon::Search => "⌕",
        Icon::Activity => "∿",
        Icon::ArrowLeft => "←",
        Icon::ArrowRight => "→",
        Icon::ChevronRight => "›",
        Icon::Menu => "≡",
        Icon::Close => "✕",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
    /// Bare text link, no brackets.
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Icon only; the label is dropped.
    Icon,
}

impl ButtonSize {
    fn padding(self) -> usize {
        match self {
            ButtonSize::Sm | ButtonSize::Icon => 1,
            ButtonSize::Md => 2,
            ButtonSize::Lg => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    icon: Option<Icon>,
    trailing_icon: Option<Icon>,
    active: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            icon: None,
            trailing_icon: None,
            active: false,
        }
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self::new(label).variant(ButtonVariant::Link)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn trailing_icon(mut self, icon: Icon) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    /// Emphasise a link that points at the current page.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn text(&self) -> String {
        let mut content = String::new();
        if let Some(icon) = self.icon {
            content.push_str(glyph(icon));
        }
        if self.size != ButtonSize::Icon {
            if !content.is_empty() {
                content.push(' ');
            }
            content.push_str(&self.label);
            if let Some(icon) = self.trailing_icon {
                content.push(' ');
                content.push_str(glyph(icon));
            }
        }

        if self.variant == ButtonVariant::Link {
            return content;
        }
        let pad = " ".repeat(self.size.padding());
        format!("[{pad}{content}{pad}]")
    }

    pub fn style(&self, focused: bool) -> Style {
        let base = match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(TEXT)
                .bg(VIOLET)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().fg(TEXT).bg(SURFACE),
            ButtonVariant::Ghost => Style::default().fg(TEXT_MUTED),
            ButtonVariant::Outline => Style::default().fg(TEXT_BODY),
            ButtonVariant::Link if self.active => {
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
            }
            ButtonVariant::Link => Style::default().fg(TEXT_MUTED),
        };
        if focused {
            base.fg(SURFACE)
                .bg(FOCUS_RING)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    pub fn span(&self, focused: bool) -> Span<'static> {
        Span::styled(self.text(), self.style(focused))
    }

    /// Columns the button takes on screen.
    pub fn width(&self) -> usize {
        self.span(false).width()
    }

    /// Shrink to `Sm`, then drop the icons, until the button fits in
    /// `width` columns.
    pub fn fit_to(mut self, width: usize) -> Self {
        if self.width() > width && matches!(self.size, ButtonSize::Md | ButtonSize::Lg) {
            self.size = ButtonSize::Sm;
        }
        if self.width() > width && self.size != ButtonSize::Icon {
            self.icon = None;
            self.trailing_icon = None;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Solid,
    /// Outlined pill with a leading dot.
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    text: String,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Solid,
        }
    }

    pub fn outline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Outline,
        }
    }

    pub fn span(&self) -> Span<'static> {
        match self.variant {
            BadgeVariant::Solid => Span::styled(
                format!(" {} ", self.text),
                Style::default()
                    .fg(TEXT)
                    .bg(VIOLET)
                    .add_modifier(Modifier::BOLD),
            ),
            BadgeVariant::Outline => Span::styled(
                format!("( ● {} )", self.text),
                Style::default().fg(VIOLET_PALE),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardAccent {
    #[default]
    Default,
    Highlight,
}

/// Rounded box drawn around a child document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    accent: CardAccent,
    corner_label: Option<String>,
}

impl Card {
    /// Columns the border and padding take out of the outer width.
    pub const CHROME: u16 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn accent(mut self, accent: CardAccent) -> Self {
        self.accent = accent;
        self
    }

    /// Tag drawn into the top-right of the border, e.g. "RECOMMENDED".
    pub fn corner_label(mut self, label: impl Into<String>) -> Self {
        self.corner_label = Some(label.into());
        self
    }

    pub fn inner_width(outer: u16) -> u16 {
        outer.saturating_sub(Self::CHROME).max(1)
    }

    /// Wrap `inner` in the card border. Hotspots move down one line.
    pub fn frame(&self, inner: Document) -> Document {
        let border = Style::default().fg(match self.accent {
            CardAccent::Default => BORDER,
            CardAccent::Highlight => VIOLET_LIGHT,
        });
        let width = inner.width() as usize;
        let mut lines = Vec::with_capacity(inner.len() + 2);

        let mut top = vec![Span::styled("╭", border)];
        match &self.corner_label {
            Some(label) if label.chars().count() + 4 <= width + 2 => {
                let tag = Badge::new(label.as_str()).span();
                let rule = (width + 2).saturating_sub(tag.width() + 1);
                top.push(Span::styled("─".repeat(rule), border));
                top.push(tag);
                top.push(Span::styled("─", border));
            }
            _ => top.push(Span::styled("─".repeat(width + 2), border)),
        }
        top.push(Span::styled("╮", border));
        lines.push(Line::from(top));

        let (inner_lines, hotspots, counter) = inner.into_parts();
        for line in inner_lines {
            let mut spans = vec![Span::styled("│ ", border)];
            spans.extend(Document::fit(line, width).spans);
            spans.push(Span::styled(" │", border));
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![
            Span::styled("╰", border),
            Span::styled("─".repeat(width + 2), border),
            Span::styled("╯", border),
        ]));

        Document::from_parts(
            width as u16 + Self::CHROME,
            lines,
            hotspots.into_iter().map(|h| h.shifted(1)).collect(),
            counter,
        )
    }
}
