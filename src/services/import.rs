//! CSV expense import
//!
//! The data-source boundary: anything that can produce a sequence of
//! well-formed expenses satisfies [`ExpenseSource`]. The shipped
//! implementation reads CSV exports, resolving columns from the header row
//! and skipping malformed rows. Rows that fail to parse never reach the
//! ledger; they are recorded with a line number and reason so the CLI can
//! report them.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, Money};

/// Default date format tried first when parsing CSV dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between participant names inside a single CSV field
const PARTICIPANT_SEPARATOR: char = ';';

/// A capability for pulling expenses out of an external source.
///
/// Implementations must return a finite, possibly-empty sequence of
/// well-formed expenses; filtering malformed records is the source's
/// responsibility.
pub trait ExpenseSource {
    fn all_expenses(&self) -> TallyResult<Vec<Expense>>;
}

/// Column layout of an expense CSV, resolved from its header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the amount column (positive magnitudes)
    pub amount_column: usize,
    /// Index of the date column
    pub date_column: usize,
    /// Index of the category column
    pub category_column: usize,
    /// Index of the participants column, if present
    pub participants_column: Option<usize>,
}

impl ColumnMapping {
    /// Resolve the mapping from a header record.
    ///
    /// Matching is case-insensitive substring matching on the header
    /// names. `amount`, `date`, and `category` are required; a
    /// `participants` column is optional.
    pub fn from_headers(headers: &StringRecord) -> TallyResult<Self> {
        let mut amount = None;
        let mut date = None;
        let mut category = None;
        let mut participants = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            if (h.contains("amount") || h.contains("cost")) && amount.is_none() {
                amount = Some(idx);
            } else if h.contains("date") && date.is_none() {
                date = Some(idx);
            } else if h.contains("categ") && category.is_none() {
                category = Some(idx);
            } else if (h.contains("particip") || h.contains("shared with")) && participants.is_none()
            {
                participants = Some(idx);
            }
        }

        Ok(Self {
            amount_column: amount.ok_or_else(|| TallyError::missing_column("amount"))?,
            date_column: date.ok_or_else(|| TallyError::missing_column("date"))?,
            category_column: category.ok_or_else(|| TallyError::missing_column("category"))?,
            participants_column: participants,
        })
    }
}

/// A row the importer could not turn into an expense
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based line number in the file (the header is line 1)
    pub line: usize,
    /// Why the row was rejected
    pub reason: String,
}

/// Outcome of reading an expense CSV
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Well-formed expenses, in file order
    pub expenses: Vec<Expense>,
    /// Rows that were rejected, in file order
    pub skipped: Vec<SkippedRow>,
}

/// Reads expenses from a CSV file with an `amount,date,category[,participants]`
/// header (any column order).
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    date_format: String,
}

impl CsvSource {
    /// Create a source for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Set the date format tried first (strftime syntax)
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Read the file, returning both the parsed expenses and the rows
    /// that were skipped.
    pub fn read(&self) -> TallyResult<CsvImport> {
        let reader = csv::Reader::from_path(&self.path).map_err(|e| {
            TallyError::Import(format!("cannot open '{}': {}", self.path.display(), e))
        })?;
        read_expenses(reader, &self.date_format)
    }
}

impl ExpenseSource for CsvSource {
    fn all_expenses(&self) -> TallyResult<Vec<Expense>> {
        self.read().map(|import| import.expenses)
    }
}

/// Parse expenses out of an open CSV reader.
///
/// The first record is treated as the header row. Rows that cannot be
/// parsed are collected as [`SkippedRow`]s rather than failing the import.
pub fn read_expenses<R: io::Read>(
    mut reader: csv::Reader<R>,
    date_format: &str,
) -> TallyResult<CsvImport> {
    let headers = reader
        .headers()
        .map_err(|e| TallyError::Import(format!("cannot read CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut import = CsvImport::default();

    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1
        let line = idx + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                import.skipped.push(SkippedRow {
                    line,
                    reason: format!("unreadable record: {}", e),
                });
                continue;
            }
        };

        match parse_record(&record, &mapping, date_format) {
            Ok(expense) => import.expenses.push(expense),
            Err(reason) => import.skipped.push(SkippedRow { line, reason }),
        }
    }

    Ok(import)
}

/// Parse a single CSV record into a validated expense
fn parse_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    date_format: &str,
) -> Result<Expense, String> {
    let amount_str = record
        .get(mapping.amount_column)
        .ok_or_else(|| "missing amount field".to_string())?
        .trim();
    let magnitude =
        Money::parse(amount_str).map_err(|e| format!("bad amount '{}': {}", amount_str, e))?;

    let date_str = record
        .get(mapping.date_column)
        .ok_or_else(|| "missing date field".to_string())?
        .trim();
    let date = parse_date(date_str, date_format)?;

    let category = record
        .get(mapping.category_column)
        .ok_or_else(|| "missing category field".to_string())?
        .trim()
        .to_string();

    let participants = mapping
        .participants_column
        .and_then(|col| record.get(col))
        .map(split_participants)
        .unwrap_or_default();

    let expense = Expense::with_participants(magnitude, date, category, participants);
    expense.validate().map_err(|e| e.to_string())?;
    Ok(expense)
}

/// Split a semicolon-separated participants field into names
fn split_participants(field: &str) -> Vec<String> {
    field
        .split(PARTICIPANT_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a date string, trying the configured format first and then a
/// ladder of common bank export formats.
fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    let fallbacks = [
        "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
        "%d-%m-%Y",
    ];

    for format in fallbacks {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("could not parse date '{}'", s))
}
