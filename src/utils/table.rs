//! Plain-text table rendering for the status report.

pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Left-aligned columns separated by a single space. Cells that
    /// carry ANSI codes must already be padded to the column width,
    /// since the escape bytes would otherwise count against it.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(vec![
            Column {
                header: "#",
                width: 3,
            },
            Column {
                header: "In",
                width: 7,
            },
        ]);
        table.add_row(vec!["1".to_string(), "08:30".to_string()]);
        let rendered = table.render();
        assert_eq!(rendered, "#   In      \n1   08:30   \n");
    }
}
