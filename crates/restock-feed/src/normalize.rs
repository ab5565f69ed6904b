//! Mapping from raw sheet rows to [`Product`] records.
//!
//! Two entry points share one coercion policy: [`parse_feed`] is
//! header-driven (published-CSV export, column order irrelevant) and
//! [`map_rows`] is positional (Sheets values API, fixed column order
//! `0=id … 11=isNew`). Field-level parsing lives in [`crate::parse`].

use restock_core::Product;
use thiserror::Error;

use crate::parse::{parse_condition, parse_flag, parse_price, split_images, split_record};

/// Number of columns in the sheet: `id` through `isNew`.
const COLUMN_COUNT: usize = 12;

/// Rows from the values API start at sheet row 2 (`Products!A2:L`),
/// immediately below the header row.
const API_FIRST_ROW: usize = 2;

/// Result of mapping a feed payload: the admitted records in row order plus
/// a diagnostic entry for every rejected row. A rejected row never aborts
/// the whole feed.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedRow>,
}

/// One rejected feed row, with its 1-based sheet line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Why a feed row was rejected. Malformed numeric and boolean cells reject
/// the row with a diagnostic instead of coercing to NaN or `false`; a bad
/// cell that went unnoticed would otherwise surface as a corrupted price
/// on a live listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("missing required field id")]
    MissingId,

    #[error("missing required field title")]
    MissingTitle,

    #[error("invalid numeric value for {field}: \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid boolean value for {field}: \"{value}\"")]
    InvalidBool { field: &'static str, value: String },
}

/// Parses a published-CSV payload into products.
///
/// The first line is a header row naming the columns; mapping is
/// header-driven, so column order in the sheet does not matter. Unknown
/// columns are ignored. Blank lines are skipped without a diagnostic.
/// Rows lacking `id` or `title`, or holding malformed numeric/boolean
/// cells, are rejected into [`ParseOutcome::skipped`].
///
/// Pure transform: no I/O, never fails.
#[must_use]
pub fn parse_feed(payload: &str) -> ParseOutcome {
    let mut lines = payload.lines();

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => split_record(header_line)
            .into_iter()
            .map(|h| h.trim().to_owned())
            .collect(),
        None => return ParseOutcome::default(),
    };

    let mut outcome = ParseOutcome::default();
    for (idx, line) in lines.enumerate() {
        // Header is line 1; the first data row is line 2.
        let line_no = idx + 2;
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<String> = split_record(line)
            .into_iter()
            .map(|v| v.trim().to_owned())
            .collect();
        match build_product(&headers, &values) {
            Ok(product) => outcome.products.push(product),
            Err(reason) => outcome.skipped.push(SkippedRow {
                line: line_no,
                reason,
            }),
        }
    }
    outcome
}

/// Maps positional rows from the Sheets values API into products.
///
/// Columns are fixed by position (`0=id … 11=isNew`); rows shorter than
/// twelve cells are padded with empty cells. Line numbers in the skip
/// diagnostics are sheet rows, starting at 2 (the range begins below the
/// header).
#[must_use]
pub fn map_rows(rows: Vec<Vec<String>>) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for (idx, row) in rows.into_iter().enumerate() {
        let line_no = idx + API_FIRST_ROW;
        match product_from_cells(&row) {
            Ok(product) => outcome.products.push(product),
            Err(reason) => outcome.skipped.push(SkippedRow {
                line: line_no,
                reason,
            }),
        }
    }
    outcome
}

/// Builds one product from a header-driven row. Cells missing from short
/// rows read as empty.
fn build_product(headers: &[String], values: &[String]) -> Result<Product, SkipReason> {
    let mut cells = vec![String::new(); COLUMN_COUNT];
    for (idx, header) in headers.iter().enumerate() {
        let Some(position) = column_position(header) else {
            continue;
        };
        if let Some(value) = values.get(idx) {
            cells[position].clone_from(value);
        }
    }
    product_from_cells(&cells)
}

/// Canonical column order: `id,title,brand,size,condition,price,
/// description,imageUrl,images,category,inStock,isNew`.
fn column_position(header: &str) -> Option<usize> {
    match header {
        "id" => Some(0),
        "title" => Some(1),
        "brand" => Some(2),
        "size" => Some(3),
        "condition" => Some(4),
        "price" => Some(5),
        "description" => Some(6),
        "imageUrl" => Some(7),
        "images" => Some(8),
        "category" => Some(9),
        "inStock" => Some(10),
        "isNew" => Some(11),
        _ => None,
    }
}

/// Applies the coercion policy to one canonically-ordered row.
fn product_from_cells(cells: &[String]) -> Result<Product, SkipReason> {
    let cell = |idx: usize| cells.get(idx).map_or("", |v| v.trim());

    let id = cell(0).to_owned();
    if id.is_empty() {
        return Err(SkipReason::MissingId);
    }
    let title = cell(1).to_owned();
    if title.is_empty() {
        return Err(SkipReason::MissingTitle);
    }

    Ok(Product {
        id,
        title,
        brand: cell(2).to_owned(),
        size: cell(3).to_owned(),
        condition: parse_condition(cell(4))?,
        price: parse_price(cell(5))?,
        description: cell(6).to_owned(),
        image_url: cell(7).to_owned(),
        images: split_images(cell(8)),
        category: cell(9).to_owned(),
        in_stock: parse_flag("inStock", cell(10))?,
        is_new: parse_flag("isNew", cell(11))?,
    })
}
