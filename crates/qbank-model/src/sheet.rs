use serde::{Deserialize, Serialize};

/// An output table destined for one named spreadsheet sheet.
///
/// Rows are plain string cells and may have different widths; the Debug sheet
/// mixes one-, two- and six-cell rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Append a row of `width` empty cells.
    pub fn push_blank_row(&mut self, width: usize) {
        self.rows.push(vec![String::new(); width]);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_row_has_requested_width() {
        let mut sheet = Sheet::new("Questions");
        sheet.push_row(["a", "b"]);
        sheet.push_blank_row(7);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.rows[1], vec![String::new(); 7]);
    }
}
