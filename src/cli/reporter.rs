use colored::Colorize;

use super::driver::SymbolRow;

const HEADERS: [&str; 4] = ["SHAPE", "KIND", "TYPE", "NAMESPACE"];

/// Renders symbol rows as an aligned table.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, rows: &[SymbolRow]) -> String {
        let cells: Vec<[&str; 4]> = rows
            .iter()
            .map(|row| {
                [
                    row.shape.as_str(),
                    row.kind.as_str(),
                    row.rust_type.as_str(),
                    row.namespace.as_deref().unwrap_or("-"),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = self.format_line(&HEADERS, &widths, true, false);
        for (line, row) in cells.iter().zip(rows) {
            out.push_str(&self.format_line(line, &widths, false, row.unconstrained));
        }
        out
    }

    fn format_line(
        &self,
        cells: &[&str; 4],
        widths: &[usize; 4],
        header: bool,
        unconstrained: bool,
    ) -> String {
        let mut line = String::new();
        for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
            let width = *width;
            let last = index + 1 == cells.len();
            let padded = if last {
                (*cell).to_string()
            } else {
                format!("{cell:<width$}  ")
            };
            line.push_str(&self.paint(&padded, index, header, unconstrained));
        }
        line.push('\n');
        line
    }

    fn paint(&self, text: &str, column: usize, header: bool, unconstrained: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if header {
            return text.bold().to_string();
        }
        match column {
            1 if unconstrained => text.yellow().to_string(),
            2 if unconstrained => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
