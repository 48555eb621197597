//! Inline-styled HTML table generator

use std::fmt::Write;

use super::escape::escape_html;
use crate::core::model::TableModel;
use crate::data::constants::EMPTY_TABLE_PLACEHOLDER;
use crate::data::styles::{
    body_cell_style, body_row_style, header_cell_style, HEADER_ROW, SECTION, TABLE, WRAPPER,
};

/// Persistent rendering switches chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    any(feature = "wasm", feature = "data-loading"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StyleToggle {
    /// Render column-0 body cells in bold
    pub bold_first_column: bool,
}

impl StyleToggle {
    pub fn bold_first_column() -> Self {
        StyleToggle {
            bold_first_column: true,
        }
    }
}

/// Builds the exported fragment one row at a time
///
/// The output is a single line: tags are concatenated without whitespace so
/// that CMS auto-paragraph filters leave the fragment alone.
pub struct HtmlTableGenerator {
    /// Number of columns; shorter rows are padded, longer rows cut
    pub col_count: usize,
    pub toggle: StyleToggle,
    header: Vec<String>,
    body: Vec<Vec<String>>,
}

impl HtmlTableGenerator {
    pub fn new(col_count: usize, toggle: StyleToggle) -> Self {
        HtmlTableGenerator {
            col_count,
            toggle,
            header: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the header row
    pub fn process_header<S: AsRef<str>>(&mut self, cells: &[S]) {
        self.header = self.fit(cells);
    }

    /// Append a body row
    pub fn process_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let row = self.fit(cells);
        self.body.push(row);
    }

    fn fit<S: AsRef<str>>(&self, cells: &[S]) -> Vec<String> {
        (0..self.col_count)
            .map(|c| {
                cells
                    .get(c)
                    .map(|s| escape_html(s.as_ref()).into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Generate the complete fragment
    pub fn generate_html(&self) -> String {
        if self.col_count == 0 {
            return EMPTY_TABLE_PLACEHOLDER.to_string();
        }

        let mut output = String::new();
        let _ = write!(output, "<div style=\"{}\">", WRAPPER);
        let _ = write!(output, "<table style=\"{}\">", TABLE);

        self.write_header(&mut output);
        self.write_body(&mut output);

        output.push_str("</table></div>");
        output
    }

    fn write_header(&self, output: &mut String) {
        let last_col = self.col_count - 1;

        let _ = write!(output, "<thead style=\"{}\">", SECTION);
        let _ = write!(output, "<tr style=\"{}\">", HEADER_ROW);
        for c in 0..self.col_count {
            let text = self.header.get(c).map_or("", String::as_str);
            let _ = write!(
                output,
                "<th style=\"{}\">{}</th>",
                header_cell_style(c == last_col),
                text
            );
        }
        output.push_str("</tr></thead>");
    }

    fn write_body(&self, output: &mut String) {
        let last_col = self.col_count - 1;
        let last_row = self.body.len().saturating_sub(1);

        let _ = write!(output, "<tbody style=\"{}\">", SECTION);
        for (r, row) in self.body.iter().enumerate() {
            let _ = write!(output, "<tr style=\"{}\">", body_row_style(r));
            for (c, text) in row.iter().enumerate() {
                let style = body_cell_style(
                    c == last_col,
                    r == last_row,
                    c == 0 && self.toggle.bold_first_column,
                );
                let _ = write!(output, "<td style=\"{}\">{}</td>", style, text);
            }
            output.push_str("</tr>");
        }
        output.push_str("</tbody>");
    }
}

/// Render a model as an inline-styled HTML fragment
///
/// Pure and deterministic. An empty model renders the
/// `<!-- No table data -->` placeholder.
pub fn render(model: &TableModel, toggle: StyleToggle) -> String {
    if model.is_empty() {
        return EMPTY_TABLE_PLACEHOLDER.to_string();
    }

    let mut gen = HtmlTableGenerator::new(model.col_count(), toggle);
    gen.process_header(model.header());
    for row in model.body() {
        gen.process_row(row.as_slice());
    }
    gen.generate_html()
}
