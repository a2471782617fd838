//! Turns a record list into status text and history table rows

use std::cmp::Ordering;

use crate::record::Record;

/// Columns in the history table: id, status, date, ip
pub const TABLE_COLUMNS: usize = 4;

/// One row of the history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Record {
        id: String,
        status: String,
        date: String,
        ip: String,
    },
    /// A single cell spanning every column
    Error { message: String },
}

impl TableRow {
    pub fn error(message: impl Into<String>) -> Self {
        TableRow::Error {
            message: message.into(),
        }
    }
}

impl From<Record> for TableRow {
    fn from(record: Record) -> Self {
        TableRow::Record {
            id: record.id,
            status: record.status,
            date: record.date,
            ip: record.ip,
        }
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Status of the newest record, `None` when there are no records
    pub status: Option<String>,
    pub rows: Vec<TableRow>,
}

fn newest_first_order(a: &Record, b: &Record) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort descending by numeric id. Ids that are not integers go last, keeping
/// the order the store returned them in.
pub fn newest_first(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(newest_first_order);
    records
}

/// Render the newest `limit` records
pub fn render(records: Vec<Record>, limit: usize) -> Rendered {
    let mut latest = newest_first(records);
    latest.truncate(limit);
    Rendered {
        status: latest.first().map(|r| r.status.clone()),
        rows: latest.into_iter().map(TableRow::from).collect(),
    }
}
