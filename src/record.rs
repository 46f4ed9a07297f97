use serde::{Deserialize, Serialize};

/// A single row of the source dataset, excluding the header row.
///
/// The paginator itself is generic and never inspects field contents;
/// this is the concrete type produced by [`crate::CsvLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Ordered field values as they appeared in the source row.
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<csv::StringRecord> for Record {
    fn from(row: csv::StringRecord) -> Self {
        Self {
            fields: row.iter().map(str::to_owned).collect(),
        }
    }
}
