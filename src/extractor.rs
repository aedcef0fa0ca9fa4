use crate::models::{Program, Student};
use anyhow::{Context, Result};
use csv::StringRecord;
use std::fs;

pub const STUDENT_ID_COLUMN: usize = 0;

/// Student roster columns holding interest checkmarks
pub const STUDENT_INTEREST_COLUMNS: [(usize, &str); 5] = [
    (12, "Artmaking"),
    (13, "Audio/Music Production"),
    (14, "Drawing/Graphic Design"),
    (15, "Digital/Video Production"),
    (16, "Storytelling"),
];

pub const PROGRAM_ORGANIZATION_COLUMN: usize = 1;
pub const PROGRAM_NAME_COLUMN: usize = 10;
pub const PROGRAM_URL_COLUMN: usize = 11;
pub const PROGRAM_DESCRIPTION_COLUMN: usize = 30;

/// Program catalog columns holding interest checkmarks. Same labels as the
/// student side but a different column order.
pub const PROGRAM_INTEREST_COLUMNS: [(usize, &str); 5] = [
    (25, "Artmaking"),
    (26, "Drawing/Graphic Design"),
    (27, "Digital/Video Production"),
    (28, "Storytelling"),
    (29, "Audio/Music Production"),
];

/// Program-side tag labels with no student-side counterpart. Any label
/// reported here can never priority-match and never counts as shared.
pub fn unmatched_program_tags() -> Vec<&'static str> {
    PROGRAM_INTEREST_COLUMNS
        .iter()
        .map(|&(_, tag)| tag)
        .filter(|tag| !STUDENT_INTEREST_COLUMNS.iter().any(|&(_, s)| s == *tag))
        .collect()
}

pub fn read_students(file_path: &str) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    for (row_number, row) in read_rows(file_path)?.iter().enumerate() {
        let student = parse_student(row)
            .with_context(|| format!("Bad student row {} in {}", row_number + 1, file_path))?;
        students.push(student);
    }
    Ok(students)
}

pub fn read_programs(file_path: &str) -> Result<Vec<Program>> {
    let mut programs = Vec::new();
    for (row_number, row) in read_rows(file_path)?.iter().enumerate() {
        let program = parse_program(row)
            .with_context(|| format!("Bad program row {} in {}", row_number + 1, file_path))?;
        programs.push(program);
    }
    Ok(programs)
}

/// Every row of the file, header included. Spreadsheet exports are not
/// reliably UTF-8, so invalid byte sequences are replaced rather than
/// rejected.
fn read_rows(file_path: &str) -> Result<Vec<StringRecord>> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to parse CSV in {}", file_path))?;
        rows.push(record);
    }
    Ok(rows)
}

pub fn parse_student(row: &StringRecord) -> Result<Student> {
    let id = field(row, STUDENT_ID_COLUMN)?.to_string();
    let interests = collect_interests(row, &STUDENT_INTEREST_COLUMNS)?;
    Ok(Student { id, interests })
}

pub fn parse_program(row: &StringRecord) -> Result<Program> {
    Ok(Program {
        name: field(row, PROGRAM_NAME_COLUMN)?.to_string(),
        organization: field(row, PROGRAM_ORGANIZATION_COLUMN)?.to_string(),
        url: field(row, PROGRAM_URL_COLUMN)?.to_string(),
        description: field(row, PROGRAM_DESCRIPTION_COLUMN)?.to_string(),
        interests: collect_interests(row, &PROGRAM_INTEREST_COLUMNS)?,
    })
}

// Short rows are an error, not a skip
fn field(row: &StringRecord, index: usize) -> Result<&str> {
    row.get(index).ok_or_else(|| {
        anyhow::anyhow!("row has {} fields but column {} is required", row.len(), index)
    })
}

/// Tags whose column holds a non-empty value, deduplicated in scan order
fn collect_interests(row: &StringRecord, columns: &[(usize, &str)]) -> Result<Vec<String>> {
    let mut interests = Vec::new();
    for &(index, tag) in columns {
        let value = field(row, index)?;
        if !value.is_empty() && !interests.iter().any(|t| t == tag) {
            interests.push(tag.to_string());
        }
    }
    Ok(interests)
}
