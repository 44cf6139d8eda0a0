//! Plain aligned text for terminal output.

/// Renders `rows` under `headers` with every column padded to its widest
/// cell. The last column is never padded.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_row: Vec<String> = headers.iter().map(|header| (*header).to_string()).collect();
    std::iter::once(&header_row)
        .chain(rows)
        .map(|row| line(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, width))| {
            if index == last {
                cell.clone()
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// `label: value` pairs with the values lined up.
pub fn fields(pairs: &[(&str, String)]) -> String {
    let width = pairs
        .iter()
        .map(|(label, _)| label.chars().count() + 1)
        .max()
        .unwrap_or_default();
    pairs
        .iter()
        .map(|(label, value)| format!("  {:<width$} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_aligns_columns() {
        let rows = vec![
            vec!["Elaina McAdams".to_string(), "16/01/2024".to_string()],
            vec!["Wes Tran".to_string(), "N/A".to_string()],
        ];
        let rendered = table(&["Name", "Joined"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name            Joined");
        assert_eq!(lines[1], "Elaina McAdams  16/01/2024");
        assert_eq!(lines[2], "Wes Tran        N/A");
    }

    #[test]
    fn test_table_without_rows_prints_headers() {
        assert_eq!(table(&["Id", "Name"], &[]), "Id  Name");
    }

    #[test]
    fn test_fields_line_up_values() {
        let rendered = fields(&[("School", "CSU Fresno".to_string()), ("Bio", "RN".to_string())]);
        assert_eq!(rendered, "  School: CSU Fresno\n  Bio:    RN");
    }
}
