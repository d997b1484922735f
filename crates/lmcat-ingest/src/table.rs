//! Data table extraction from a spreadsheet HTML export.
//!
//! The export wraps the sheet in a `<table class="waffle">`. Only that table
//! is tokenized, so scripts and styles elsewhere in the page never reach the
//! reader. Row-number gutters (`<th>`) are skipped; every `<td>` becomes a
//! [`RawCell`] carrying its text content and embedded links.

use std::borrow::Cow;
use std::path::Path;

use lmcat_normalize::{Link, RawCell};
use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Class marker of the data table in the export.
const TABLE_CLASS: &str = "waffle";

/// Header labels plus data rows, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

/// Read and parse the data table from an HTML file.
pub fn read_table(path: &Path) -> Result<SourceTable> {
    let html = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&html)
}

/// Parse the data table out of an HTML document.
pub fn parse_table(html: &str) -> Result<SourceTable> {
    let fragment = locate_data_table(html).ok_or(IngestError::TableNotFound)?;
    let mut rows = tokenize_rows(fragment)?;
    if rows.is_empty() {
        return Err(IngestError::EmptyTable);
    }
    let header = rows
        .remove(0)
        .into_iter()
        .map(|cell| cell.trimmed().to_string())
        .collect();
    debug!(row_count = rows.len(), "parsed data table");
    Ok(SourceTable { header, rows })
}

/// Slice of `html` spanning the first `<table>` whose opening tag carries the
/// data table class.
fn locate_data_table(html: &str) -> Option<&str> {
    for (start, _) in html.match_indices("<table") {
        let rest = &html[start..];
        let Some(tag_end) = rest.find('>') else {
            continue;
        };
        if !rest[..tag_end].contains(TABLE_CLASS) {
            continue;
        }
        let end = rest
            .find("</table>")
            .map_or(rest.len(), |pos| pos + "</table>".len());
        return Some(&rest[..end]);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Row,
    Cell,
    HeaderCell,
    Anchor,
    Other,
}

fn classify(name: &[u8]) -> Tag {
    if name.eq_ignore_ascii_case(b"tr") {
        Tag::Row
    } else if name.eq_ignore_ascii_case(b"td") {
        Tag::Cell
    } else if name.eq_ignore_ascii_case(b"th") {
        Tag::HeaderCell
    } else if name.eq_ignore_ascii_case(b"a") {
        Tag::Anchor
    } else {
        Tag::Other
    }
}

/// Accumulates rows while walking the token stream. HTML allows omitted end
/// tags, so opening a row or cell implicitly closes the previous one.
#[derive(Default)]
struct RowBuilder {
    rows: Vec<Vec<RawCell>>,
    row: Option<Vec<RawCell>>,
    cell: Option<RawCell>,
    link: Option<Link>,
}

impl RowBuilder {
    fn open_row(&mut self) {
        self.close_row();
        self.row = Some(Vec::new());
    }

    /// Rows without any `<td>` (e.g. the column-letter header) are dropped.
    fn close_row(&mut self) {
        self.close_cell();
        if let Some(row) = self.row.take()
            && !row.is_empty()
        {
            self.rows.push(row);
        }
    }

    fn open_cell(&mut self) {
        self.close_cell();
        if self.row.is_none() {
            self.row = Some(Vec::new());
        }
        self.cell = Some(RawCell::default());
    }

    fn close_cell(&mut self) {
        self.close_link();
        if let Some(cell) = self.cell.take()
            && let Some(row) = self.row.as_mut()
        {
            row.push(cell);
        }
    }

    fn open_link(&mut self, href: Option<String>) {
        self.close_link();
        if self.cell.is_some() {
            self.link = Some(Link {
                text: String::new(),
                href,
            });
        }
    }

    fn close_link(&mut self) {
        if let Some(link) = self.link.take()
            && let Some(cell) = self.cell.as_mut()
        {
            cell.links.push(link);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.text.push_str(text);
            if let Some(link) = self.link.as_mut() {
                link.text.push_str(text);
            }
        }
    }

    fn finish(mut self) -> Vec<Vec<RawCell>> {
        self.close_row();
        self.rows
    }
}

fn tokenize_rows(fragment: &str) -> Result<Vec<Vec<RawCell>>> {
    let mut reader = Reader::from_str(fragment);
    {
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;
    }

    let mut builder = RowBuilder::default();
    loop {
        let event = reader.read_event().map_err(|err| IngestError::Markup {
            position: reader.error_position(),
            message: err.to_string(),
        })?;
        match event {
            Event::Start(start) => match classify(start.local_name().as_ref()) {
                Tag::Row => builder.open_row(),
                Tag::Cell => builder.open_cell(),
                Tag::HeaderCell => builder.close_cell(),
                Tag::Anchor => builder.open_link(href(&start)),
                Tag::Other => {}
            },
            Event::Empty(empty) => match classify(empty.local_name().as_ref()) {
                Tag::Cell => {
                    builder.open_cell();
                    builder.close_cell();
                }
                Tag::Anchor => {
                    builder.open_link(href(&empty));
                    builder.close_link();
                }
                Tag::Row | Tag::HeaderCell | Tag::Other => {}
            },
            Event::End(end) => match classify(end.local_name().as_ref()) {
                Tag::Row => builder.close_row(),
                Tag::Cell => builder.close_cell(),
                Tag::Anchor => builder.close_link(),
                Tag::HeaderCell | Tag::Other => {}
            },
            Event::Text(text) => builder.push_text(&String::from_utf8_lossy(&text)),
            Event::CData(data) => builder.push_text(&String::from_utf8_lossy(&data)),
            Event::GeneralRef(reference) => builder.push_text(&resolve_reference(&reference)),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(builder.finish())
}

fn href(start: &BytesStart<'_>) -> Option<String> {
    start
        .html_attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref().eq_ignore_ascii_case(b"href"))
        .map(|attr| {
            attr.unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned())
        })
}

fn resolve_reference(reference: &BytesRef<'_>) -> String {
    if let Ok(Some(ch)) = reference.resolve_char_ref() {
        return ch.to_string();
    }
    let name = String::from_utf8_lossy(reference);
    match name.as_ref() {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => "\u{a0}".to_string(),
        other => format!("&{other};"),
    }
}
