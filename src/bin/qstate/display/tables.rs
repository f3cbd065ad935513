use std::io::{self, Write};

use charge_state::{Distribution, Element, SummaryRow};

use crate::util::text::{bar, fit};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    width: usize,
    align: Align,
}

impl Column {
    const fn left(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Left,
        }
    }

    const fn right(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Right,
        }
    }
}

pub fn write_kv_table(
    out: &mut impl Write,
    title: &str,
    rows: &[(&str, String)],
) -> io::Result<()> {
    let key_w = 18usize;
    let sep_overhead = 7;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let columns = [Column::left("Quantity", key_w), Column::right("Value", val_w)];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(key, val)| vec![key.to_string(), val.clone()])
        .collect();

    write_grid(out, title, &columns, &cells)
}

/// Charge states with their probability in percent and a bar scaled to the
/// most probable state.
pub fn write_distribution(
    out: &mut impl Write,
    title: &str,
    dist: &Distribution,
) -> io::Result<()> {
    let charge_w = 6usize;
    let pct_w = 8usize;
    let sep_overhead = 10;
    let bar_w = SAFE_TABLE_WIDTH.saturating_sub(charge_w + pct_w + sep_overhead);

    let percentages = dist.percentages();
    let peak = percentages.iter().copied().fold(0.0, f64::max);

    let columns = [
        Column::right("Charge", charge_w),
        Column::right("Percent", pct_w),
        Column::left("Distribution", bar_w),
    ];
    let cells: Vec<Vec<String>> = dist
        .charge_states
        .iter()
        .zip(&percentages)
        .map(|(q, &pct)| {
            let fraction = if peak > 0.0 { pct / peak } else { 0.0 };
            vec![format!("{q}+"), format!("{pct:.2}%"), bar(fraction, bar_w)]
        })
        .collect();

    write_grid(out, title, &columns, &cells)
}

pub fn write_summary(out: &mut impl Write, title: &str, rows: &[SummaryRow]) -> io::Result<()> {
    let columns = [
        Column::right("Z", 3),
        Column::left("Sym", 3),
        Column::left("Element", 13),
        Column::right("Mean q", 9),
        Column::right("Std", 8),
    ];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.atomic_number.to_string(),
                row.symbol.to_string(),
                row.name.to_string(),
                format!("{:.2}", row.mean),
                format!("{:.2}", row.std),
            ]
        })
        .collect();

    write_grid(out, title, &columns, &cells)
}

pub fn write_element_list(out: &mut impl Write, elements: &[Element]) -> io::Result<()> {
    let columns = [
        Column::right("Z", 3),
        Column::left("Symbol", 6),
        Column::left("Name", 14),
    ];
    let cells: Vec<Vec<String>> = elements
        .iter()
        .map(|el| {
            vec![
                el.atomic_number().to_string(),
                el.symbol().to_string(),
                el.name().to_string(),
            ]
        })
        .collect();

    write_grid(out, "Supported Elements", &columns, &cells)
}

fn write_grid(
    out: &mut impl Write,
    title: &str,
    columns: &[Column],
    rows: &[Vec<String>],
) -> io::Result<()> {
    writeln!(out, "{INDENT}┌─ {} ─┐", fit(title, SAFE_TABLE_WIDTH - 6))?;
    writeln!(out, "{}", grid_rule(columns, "┌", "┬", "┐"))?;
    writeln!(out, "{}", grid_line(columns, columns.iter().map(|c| c.header)))?;
    writeln!(out, "{}", grid_rule(columns, "├", "┼", "┤"))?;
    for row in rows {
        writeln!(out, "{}", grid_line(columns, row.iter().map(String::as_str)))?;
    }
    writeln!(out, "{}", grid_rule(columns, "└", "┴", "┘"))?;
    writeln!(out)
}

fn grid_rule(columns: &[Column], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
    format!("{INDENT}{left}{}{right}", segments.join(mid))
}

fn grid_line<'a>(columns: &[Column], cells: impl Iterator<Item = &'a str>) -> String {
    let body: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|(col, cell)| {
            let cell = fit(cell, col.width);
            match col.align {
                Align::Left => format!(" {:<w$} ", cell, w = col.width),
                Align::Right => format!(" {:>w$} ", cell, w = col.width),
            }
        })
        .collect();
    format!("{INDENT}│{}│", body.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn distribution_lists_every_state() {
        let dist = Distribution {
            charge_states: vec![54, 55, 56],
            probabilities: vec![0.25, 0.5, 0.25],
        };
        let text = render(|out| write_distribution(out, "Lead", &dist));
        assert!(text.contains("54+"));
        assert!(text.contains("55+"));
        assert!(text.contains("56+"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("25.00%"));
    }

    #[test]
    fn distribution_percent_column_is_rounded_and_peak_bar_is_full() {
        let dist = Distribution {
            charge_states: vec![1, 2],
            probabilities: vec![0.876_54, 0.123_46],
        };
        let text = render(|out| write_distribution(out, "Helium", &dist));
        assert!(text.contains("87.65%"));
        assert!(text.contains("12.35%"));

        let peak_line = text.lines().find(|l| l.contains("1+")).unwrap();
        assert!(!peak_line.contains('░'), "{peak_line}");
    }

    #[test]
    fn grid_lines_share_one_width() {
        let rows = [
            ("Element", "Lead (Pb)".to_string()),
            ("Mean charge", "54.69".to_string()),
        ];
        let text = render(|out| write_kv_table(out, "Charge State", &rows));
        let widths: Vec<usize> = text
            .lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
    }

    #[test]
    fn element_list_has_one_row_per_element() {
        let text = render(|out| write_element_list(out, Element::all()));
        assert!(text.contains("Lead"));
        assert!(text.contains("Fermium"));
        // title, three rules, header, trailing blank line
        assert_eq!(text.lines().count(), Element::all().len() + 6);
    }
}
