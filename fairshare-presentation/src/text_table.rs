use std::{borrow::Cow, fmt::Write};

const CELL_PADDING: usize = 1;

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| h.chars().count())
            .collect();

        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate() {
                if i < col_widths.len() {
                    col_widths[i] = col_widths[i].max(cell.chars().count());
                }
            }
        }

        let mut table = String::with_capacity(1024);
        let separator = build_separator(&col_widths);

        table.push_str(&separator);
        self.write_line(&mut table, &col_widths, self.headers);
        table.push_str(&separator);
        for row in &self.rows {
            self.write_line(&mut table, &col_widths, row.as_ref());
        }
        if !self.rows.is_empty() {
            table.push_str(&separator);
        }

        table
    }

    fn write_line(&self, out: &mut String, col_widths: &[usize], cells: &[Cow<'a, str>]) {
        out.push('|');
        for (i, width) in col_widths.iter().enumerate() {
            let cell = cells.get(i).map(Cow::as_ref).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            let _ = write!(
                out,
                "{pad}{}{pad}|",
                pad_cell(cell, *width, alignment),
                pad = " ".repeat(CELL_PADDING)
            );
        }
        out.push('\n');
    }
}

fn build_separator(col_widths: &[usize]) -> String {
    let mut line = String::with_capacity(col_widths.iter().sum::<usize>() + col_widths.len() * 3);
    line.push('+');
    for width in col_widths {
        line.push_str(&"-".repeat(width + CELL_PADDING * 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let len = cell.chars().count();
    let slack = width.saturating_sub(len);
    match alignment {
        Alignment::Left => format!("{cell}{}", " ".repeat(slack)),
        Alignment::Right => format!("{}{cell}", " ".repeat(slack)),
        Alignment::Center => {
            let left = slack / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(slack - left))
        }
    }
}
