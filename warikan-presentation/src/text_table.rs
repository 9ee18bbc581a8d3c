use std::borrow::Cow;

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

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

    /// Renders the table with a header rule; cells past the header count are dropped.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_line(self.headers, &col_widths));
        lines.push(
            col_widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join(RULE_SEPARATOR),
        );
        for row in &self.rows {
            lines.push(self.render_line(row.as_ref(), &col_widths));
        }

        lines.join("\n")
    }

    fn render_line(&self, cells: &[Cow<'_, str>], col_widths: &[usize]) -> String {
        let padded: Vec<String> = col_widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map_or("", |cell| cell.as_ref());
                let alignment = self.alignments.get(i).copied().unwrap_or_default();
                pad_cell(cell, *width, alignment)
            })
            .collect();
        padded.join(COLUMN_SEPARATOR).trim_end().to_owned()
    }
}

/// Terminal column estimate: CJK and other wide scripts take two cells.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c < '\u{1100}' { 1 } else { 2 })
        .sum()
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let padding = width.saturating_sub(display_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_simple_table() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed("Name"), Cow::Borrowed("Balance")])
            .row([Cow::Borrowed("Alice"), Cow::Borrowed("+100")])
            .row([Cow::Borrowed("Bob"), Cow::Borrowed("-100")])
            .build();

        assert_eq!(
            table,
            "Name  | Balance\n------+--------\nAlice |    +100\nBob   |    -100"
        );
    }

    #[rstest]
    fn test_wide_characters_take_two_columns() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed("名前"), Cow::Borrowed("金額")])
            .rows([[Cow::Borrowed("太郎"), Cow::Borrowed("100")]])
            .build();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["名前 | 金額", "-----+-----", "太郎 |  100"]);
    }

    #[rstest]
    #[case::left(Alignment::Left, "ab   ")]
    #[case::center(Alignment::Center, " ab  ")]
    #[case::right(Alignment::Right, "   ab")]
    fn test_pad_cell(#[case] alignment: Alignment, #[case] expected: &str) {
        assert_eq!(pad_cell("ab", 5, alignment), expected);
    }

    #[rstest]
    fn test_short_rows_are_padded() {
        let table = TextTableBuilder::new()
            .headers(&[Cow::Borrowed("A"), Cow::Borrowed("B")])
            .row(vec![Cow::Borrowed("x")])
            .build();

        assert_eq!(table.lines().last(), Some("x |"));
    }

    #[rstest]
    fn test_no_headers_is_empty() {
        let table = TextTableBuilder::<Vec<Cow<str>>>::new()
            .row(vec![Cow::Borrowed("orphan")])
            .build();

        assert!(table.is_empty());
    }
}
