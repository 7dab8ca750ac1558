#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct Column<'a, TRow> {
    title: String,
    align: Align,
    get_content: &'a dyn Fn(&TRow) -> String,
}

impl<'a, TRow> Column<'a, TRow> {
    pub fn new(title: &str, get_content: &'a dyn Fn(&TRow) -> String) -> Self {
        Self {
            title: title.to_string(),
            align: Align::Left,
            get_content,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row)
    }
}

enum RowData {
    Separator,
    Headers,
    Cells(Vec<String>),
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

pub struct Table<'a, TRow> {
    columns: Vec<Column<'a, TRow>>,
    rows: Vec<RowData>,
    settings: Settings,
}

impl<'a, TRow> Table<'a, TRow> {
    pub fn new(columns: Vec<Column<'a, TRow>>, settings: &Settings) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            settings: settings.clone(),
        }
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_row(&mut self, row: &TRow) {
        self.rows.push(RowData::Cells(
            self.columns.iter().map(|col| col.content(row)).collect(),
        ));
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        for row in rows {
            self.add_row(row);
        }
    }

    /// The ideal width of each column, so that no cell is truncated
    fn natural_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(colidx, col)| {
                self.rows
                    .iter()
                    .map(|row| match row {
                        RowData::Separator => 0,
                        RowData::Headers => col.title.chars().count(),
                        RowData::Cells(cells) => cells
                            .get(colidx)
                            .map_or(0, |c| c.chars().count()),
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table.  If it does not fit in `max_width` characters, the
    /// last column is truncated (but always keeps at least one character).
    pub fn to_string(&self, max_width: usize) -> String {
        let mut widths = self.natural_widths();
        let seps = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        let total = widths.iter().sum::<usize>() + seps;
        if total > max_width {
            if let Some(last) = widths.last_mut() {
                *last = last.saturating_sub(total - max_width).max(1);
            }
        }

        let mut result = String::new();
        for row in &self.rows {
            for (colidx, (col, width)) in
                self.columns.iter().zip(&widths).enumerate()
            {
                if colidx > 0 {
                    result.push_str(&self.settings.colsep);
                }
                match row {
                    RowData::Separator => push_sep(&mut result, *width),
                    RowData::Headers => push_align(
                        &mut result,
                        &col.title,
                        *width,
                        Align::Center,
                    ),
                    RowData::Cells(cells) => push_align(
                        &mut result,
                        cells.get(colidx).map_or("", |c| c.as_str()),
                        *width,
                        col.align,
                    ),
                }
            }
            result.push('\n');
        }
        result
    }
}

fn push_sep(into: &mut String, width: usize) {
    into.push_str(&format!("{:─^width$}", ""));
}

fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    let value = truncate(value, width);
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Center => into.push_str(&format!("{:^width$}", value)),
        Align::Right => into.push_str(&format!("{:>width$}", value)),
    }
}

/// Keep the first `width` characters
fn truncate(val: &str, width: usize) -> &str {
    val.char_indices()
        .nth(width)
        .and_then(|(i, _)| val.get(..i))
        .unwrap_or(val)
}
