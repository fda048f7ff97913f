use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use uuid::Uuid;

use crate::dataset::Dataset;
use crate::models::{
    MentalHealth, PlacementStatus, StudentRecord, Tier, WorkPreference, DEFAULT_YEAR,
};
use crate::schema::IMPORT_COLUMNS;

/// How many skipped line numbers the outcome summary spells out.
const SKIPPED_DISPLAY_LIMIT: usize = 5;

/// An uploaded file: a name, an advisory content type, and the full payload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Reads a local file. The file-kind check runs before the payload is
    /// touched, so a wrong extension is rejected without any I/O on the
    /// contents.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        validate_file_kind(&name, None)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self {
            name,
            content_type: None,
            bytes,
        })
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid file type: {name} ({content_type}); upload a CSV or Excel file (.csv, .xlsx, .xls)")]
    UnsupportedFile { name: String, content_type: String },
    #[error("{name} is an Excel workbook; save it as CSV (comma delimited) and retry")]
    ExcelUnsupported { name: String },
    #[error("file content is not valid text")]
    NotText(#[from] std::str::Utf8Error),
    #[error("CSV file is empty or contains only headers")]
    EmptyFile,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("import cancelled; unexpected columns not confirmed: {}", .0.join(", "))]
    ExtraColumnsDeclined(Vec<String>),
    #[error("no valid records found in the CSV file")]
    NoValidRecords,
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of a successful import: how many rows were appended and which file
/// lines were skipped (1-based, header on line 1).
#[derive(Debug)]
pub struct ImportReport {
    pub accepted: usize,
    pub skipped_lines: Vec<u64>,
}

impl ImportReport {
    pub fn skipped_summary(&self) -> Option<String> {
        if self.skipped_lines.is_empty() {
            return None;
        }
        let shown: Vec<String> = self
            .skipped_lines
            .iter()
            .take(SKIPPED_DISPLAY_LIMIT)
            .map(|line| line.to_string())
            .collect();
        let overflow = if self.skipped_lines.len() > SKIPPED_DISPLAY_LIMIT {
            "..."
        } else {
            ""
        };
        Some(format!(
            "skipped {} invalid rows: {}{}",
            self.skipped_lines.len(),
            shown.join(", "),
            overflow
        ))
    }
}

/// Rejects anything that is not a `.csv`/`.xlsx`/`.xls` name. Excel files are
/// recognized but unsupported. The declared content type is advisory only; it
/// appears in the error message and never in the decision.
pub fn validate_file_kind(name: &str, content_type: Option<&str>) -> Result<(), ImportError> {
    let lowered = name.to_lowercase();
    if lowered.ends_with(".csv") {
        return Ok(());
    }
    if lowered.ends_with(".xlsx") || lowered.ends_with(".xls") {
        return Err(ImportError::ExcelUnsupported {
            name: name.to_string(),
        });
    }
    Err(ImportError::UnsupportedFile {
        name: name.to_string(),
        content_type: content_type.unwrap_or("unknown").to_string(),
    })
}

/// Validates an uploaded CSV payload and appends the accepted rows.
///
/// The pipeline is: file-kind check, encoding check, structural check, header
/// check (all required columns present in any order; unexpected columns need
/// `confirm_extra` to return true), then per-row coercion. A row lacking
/// institution, department, or year is skipped, as is a row whose tier,
/// status, mental-health, or work-preference cell holds a value outside the
/// legal set. Fields are read by header name, so column order never misassigns
/// values, and the tokenizer honors quoting.
///
/// Every accepted row receives a fresh id; ids in the file are ignored. On any
/// error the dataset is left untouched.
pub fn import_records(
    dataset: &mut Dataset,
    upload: &FileUpload,
    confirm_extra: impl FnOnce(&[String]) -> bool,
) -> Result<ImportReport, ImportError> {
    validate_file_kind(&upload.name, upload.content_type.as_deref())?;

    let text = std::str::from_utf8(&upload.bytes)?;
    if text.lines().count() < 2 {
        return Err(ImportError::EmptyFile);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    // First occurrence wins when a name repeats.
    let mut columns: HashMap<&str, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        columns.entry(header.as_str()).or_insert(index);
    }

    let missing: Vec<String> = IMPORT_COLUMNS
        .iter()
        .filter(|column| !columns.contains_key(*column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    let extra: Vec<String> = headers
        .iter()
        .filter(|header| !header.is_empty() && !IMPORT_COLUMNS.contains(&header.as_str()))
        .cloned()
        .collect();
    if !extra.is_empty() && !confirm_extra(&extra) {
        return Err(ImportError::ExtraColumnsDeclined(extra));
    }

    let mut accepted = Vec::new();
    let mut skipped_lines = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);

        let institution = field(&record, &columns, "institution");
        let department = field(&record, &columns, "department");
        let year = field(&record, &columns, "year");
        if institution.is_empty() || department.is_empty() || year.is_empty() {
            skipped_lines.push(line);
            continue;
        }

        let (tier, status, mental_health, work_preference) = match (
            enum_or_default::<Tier>(field(&record, &columns, "tier")),
            enum_or_default::<PlacementStatus>(field(&record, &columns, "status")),
            enum_or_default::<MentalHealth>(field(&record, &columns, "mentalhealth")),
            enum_or_default::<WorkPreference>(field(&record, &columns, "workpreference")),
        ) {
            (Ok(tier), Ok(status), Ok(mental), Ok(preference)) => {
                (tier, status, mental, preference)
            }
            _ => {
                skipped_lines.push(line);
                continue;
            }
        };

        accepted.push(StudentRecord {
            id: Uuid::new_v4(),
            institution: institution.to_string(),
            tier,
            department: department.to_string(),
            year: year.parse().unwrap_or(DEFAULT_YEAR),
            offers_received: int_or_zero(field(&record, &columns, "offersreceived")),
            offers_accepted: int_or_zero(field(&record, &columns, "offersaccepted")),
            offers_rejected: int_or_zero(field(&record, &columns, "offersrejected")),
            highest_salary: salary(field(&record, &columns, "highestsalary")),
            lowest_salary: salary(field(&record, &columns, "lowestsalary")),
            accepted_salary: salary(field(&record, &columns, "acceptedsalary")),
            status,
            hackathon: boolean(field(&record, &columns, "hackathon")),
            project_participation: boolean(field(&record, &columns, "projectparticipation")),
            passive_income: boolean(field(&record, &columns, "passiveincome")),
            mental_health,
            extra_curricular: int_or_zero(field(&record, &columns, "extracurricular")),
            work_preference,
        });
    }

    if accepted.is_empty() {
        return Err(ImportError::NoValidRecords);
    }

    let report = ImportReport {
        accepted: accepted.len(),
        skipped_lines,
    };
    dataset.append(accepted);
    Ok(report)
}

/// Cell lookup by header name. A column missing from this row reads as blank.
fn field<'r>(
    record: &'r csv::StringRecord,
    columns: &HashMap<&str, usize>,
    name: &str,
) -> &'r str {
    columns
        .get(name)
        .and_then(|&column| record.get(column))
        .unwrap_or("")
}

/// Blank cells take the field default; anything else must be in the legal set.
fn enum_or_default<T: FromStr + Default>(raw: &str) -> Result<T, T::Err> {
    if raw.is_empty() {
        Ok(T::default())
    } else {
        raw.parse()
    }
}

fn int_or_zero(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

/// Blank means absent, never zero. An unparseable cell is treated as absent.
fn salary(raw: &str) -> Option<u64> {
    if raw.is_empty() {
        None
    } else {
        raw.parse().ok()
    }
}

fn boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw == "1"
}
