//! Column alignment for pipe-delimited rows.

/// Cell delimiter in input rows.
const DELIMITER: char = '|';

/// Separator between aligned output columns.
const GLUE: &str = "  ";

/// Align `"a | b | c"` style rows into columns.
///
/// Cells are trimmed, padded to the widest cell of their column, and joined
/// with two spaces. Trailing whitespace is removed from every line. Widths
/// are measured in characters.
pub fn simple_format<S: AsRef<str>>(rows: &[S]) -> String {
    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.as_ref().split(DELIMITER).map(str::trim).collect())
        .collect();

    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    cells
        .iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join(GLUE);
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligns_columns() {
        let out = simple_format(&[
            "Path | Type | Description",
            "github/ | github | GitHub auth",
            "token/ | token | token auth",
        ]);

        assert_eq!(
            out,
            "Path     Type    Description\n\
             github/  github  GitHub auth\n\
             token/   token   token auth"
        );
    }

    #[test]
    fn test_empty_trailing_cells_leave_no_whitespace() {
        let out = simple_format(&["Path | Type | Description", "token/ | token | "]);
        assert_eq!(out.lines().nth(1), Some("token/  token"));
    }

    #[test]
    fn test_ragged_rows() {
        let out = simple_format(&["a | bb | c", "dddd"]);
        assert_eq!(out, "a     bb  c\ndddd");
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(simple_format::<&str>(&[]), "");
    }

    #[test]
    fn test_width_counts_characters() {
        let out = simple_format(&["é | x", "ab | y"]);
        assert_eq!(out, "é   x\nab  y");
    }
}
