//! Plain-text rendering of Karnaugh maps

use super::{Grid, HeaderError, KarnaughMap};
use std::fmt;

impl fmt::Display for Grid {
    /// Render the grid as a table
    ///
    /// ```text
    /// C\AB | 00 | 01 | 11 | 10
    /// -----+----+----+----+----
    ///    0 |  0 |  0 |  1 |  0
    ///    1 |  1 |  1 |  1 |  1
    /// ```
    ///
    /// Cells show `1` for minterms, `0` for maxterms and `X` for don't-cares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!(
            "{}\\{}",
            self.row_vars.iter().collect::<String>(),
            self.column_vars.iter().collect::<String>()
        );
        let label_width = label.len().max(self.row_vars.len());
        let cell_width = self.column_vars.len().max(1);

        write!(f, "{:>w$}", label, w = label_width)?;
        for header in &self.column_headers {
            write!(f, " | {:>w$}", header, w = cell_width)?;
        }
        writeln!(f)?;

        write!(f, "{}", "-".repeat(label_width + 1))?;
        for _ in &self.column_headers {
            write!(f, "+{}", "-".repeat(cell_width + 2))?;
        }
        writeln!(f)?;

        for (header, row) in self.row_headers.iter().zip(&self.cells) {
            write!(f, "{:>w$}", header, w = label_width)?;
            for cell in row {
                write!(f, " | {:>w$}", cell.class.symbol(), w = cell_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl KarnaughMap {
    /// Lay out and render the map, see [`Grid`]'s `Display` impl
    pub fn render(&self) -> Result<String, HeaderError> {
        Ok(self.grid()?.to_string())
    }
}
