#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Columns never shrink below this many characters when fitting a width.
const MIN_COLUMN: usize = 6;

const GAP: &str = "  ";

/// Render an aligned table. Numeric cells are right-aligned; status words
/// are colored when `options.color` is set.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain([display_len(header), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(display_len(&header_line));
    let mut lines = vec![header_line, divider];

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), width);
                let numeric = looks_numeric(&cell);
                let padded = pad(&cell, width, numeric);
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }

    lines.join("\n")
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest column one character at a time until the table fits
/// or every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_len(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded cell in an ANSI color chosen from its text.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "true" | "available" | "completed" | "ga" => "32",
        "pending" | "allocated" | "maintenance" | "beta" | "experimental" => "33",
        "false" | "cancelled" | "retired" | "legacy" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
