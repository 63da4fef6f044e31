/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row, padding or truncating it to the header width
    pub fn add_row(&mut self, row: Vec<String>) {
        let mut row = row;
        row.resize(self.headers.len(), String::new());

        for (i, col) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(col.chars().count());
        }

        self.rows.push(row);
    }

    /// Render the table, first column left-aligned and the rest right-aligned
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&self.col_widths)
            .enumerate()
            .map(|(i, (col, &width))| {
                if i == 0 {
                    format!("{:<width$}", col, width = width)
                } else {
                    format!("{:>width$}", col, width = width)
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

/// Format an optional yield for display
pub fn format_yield(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Maturity", "01/01/2025", "Current"]);
        table.add_row(vec!["1 mo.".to_string(), "4.40".to_string(), "4.37".to_string()]);
        table.add_row(vec!["30 yr.".to_string(), "4.78".to_string(), "n/a".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Maturity | 01/01/2025 | Current");
        assert_eq!(lines[1], "---------+------------+--------");
        assert_eq!(lines[2], "1 mo.    |       4.40 |    4.37");
        assert_eq!(lines[3], "30 yr.   |       4.78 |     n/a");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["x".to_string()]);
        assert!(table.render().lines().nth(2).is_some());
    }

    #[test]
    fn test_format_yield() {
        assert_eq!(format_yield(Some(4.5)), "4.50");
        assert_eq!(format_yield(Some(0.0)), "0.00");
        assert_eq!(format_yield(None), "n/a");
    }
}
