const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';
const BAR_PARTIAL: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Greedy word wrap to `width` columns. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn fit(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Horizontal bar `width` cells wide, filled to `fraction` (clamped to
/// `0..=1`) with eighth-cell resolution.
pub fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let eighths = (fraction * (width * 8) as f64).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;

    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(BAR_FULL, full));

    let mut used = full;
    if rest > 0 && used < width {
        out.push(BAR_PARTIAL[rest - 1]);
        used += 1;
    }
    out.extend(std::iter::repeat_n(BAR_EMPTY, width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("energy must be positive", 40), vec!["energy must be positive"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("mean charge state of lead", 12),
            vec!["mean charge", "state of", "lead"]
        );
    }

    #[test]
    fn wrap_empty_text_yields_one_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_keeps_overlong_word_whole() {
        assert_eq!(wrap("Praseodymium x", 5), vec!["Praseodymium", "x"]);
    }

    #[test]
    fn fit_leaves_short_strings() {
        assert_eq!(fit("Lead", 10), "Lead");
        assert_eq!(fit("Lead", 4), "Lead");
    }

    #[test]
    fn fit_cuts_long_strings() {
        assert_eq!(fit("Praseodymium", 8), "Praseod…");
        assert_eq!(fit("Å ångström", 3), "Å …");
        assert_eq!(fit("Lead", 0), "");
    }

    #[test]
    fn bar_has_fixed_width() {
        for f in [0.0, 0.013, 0.5, 0.99, 1.0, 2.0, -1.0, f64::NAN] {
            assert_eq!(bar(f, 10).chars().count(), 10, "{f}");
        }
    }

    #[test]
    fn bar_fill_levels() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(1.0, 4), "████");
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(0.25, 2), "▌░");
        assert_eq!(bar(1.0 / 16.0, 2), "▏░");
    }
}
