use ratatui::layout::Rect;

/// Columns kept blank on each side of the page.
pub const PAGE_MARGIN: u16 = 2;

/// Split the frame into a fixed header of `header_height` rows and the
/// scrollable body below it, both inset by the page margin.
pub fn layout_regions(area: Rect, header_height: u16) -> (Rect, Rect) {
    let header_height = header_height.min(area.height);
    let inner_x = area.x + PAGE_MARGIN.min(area.width / 2);
    let inner_width = content_width(area.width);
    let header = Rect {
        x: inner_x,
        y: area.y,
        width: inner_width,
        height: header_height,
    };
    let body = Rect {
        x: inner_x,
        y: area.y + header_height,
        width: inner_width,
        height: area.height.saturating_sub(header_height),
    };
    (header, body)
}

/// Width available to page content for a terminal `cols` wide.
pub fn content_width(cols: u16) -> u16 {
    cols.saturating_sub(PAGE_MARGIN * 2).max(1)
}

/// Width of each of `count` columns sharing `total` with `gap` between them.
pub fn column_width(total: u16, count: u16, gap: u16) -> u16 {
    if count == 0 {
        return total;
    }
    let gaps = gap.saturating_mul(count - 1);
    (total.saturating_sub(gaps) / count).max(1)
}

/// Greedy word wrap on character counts. Words longer than `width` are
/// split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_respect_margin() {
        let (header, body) = layout_regions(Rect::new(0, 0, 100, 30), 2);
        assert_eq!(header, Rect::new(2, 0, 96, 2));
        assert_eq!(body, Rect::new(2, 2, 96, 28));
    }

    #[test]
    fn header_never_exceeds_area() {
        let (header, body) = layout_regions(Rect::new(0, 0, 40, 1), 3);
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn columns_share_width() {
        assert_eq!(column_width(96, 3, 3), 30);
        assert_eq!(column_width(10, 0, 2), 10);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("No bloat. Instant startup. Pure signal.", 16),
            vec!["No bloat.", "Instant startup.", "Pure signal."]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
