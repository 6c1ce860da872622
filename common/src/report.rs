use serde::Serialize;
use std::fmt;

/// One extractor invocation's output: a fixed header row, the decoded rows and the file they came from
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArtifactTable {
    artifact: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    source: String,
    /**Index of the column used when building a timeline */
    time_column: Option<usize>,
}

#[derive(Debug, PartialEq)]
pub enum TableError {
    Arity { expected: usize, got: usize },
}

impl std::error::Error for TableError {}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Arity { expected, got } => {
                write!(f, "Row has {got} values but header has {expected} columns")
            }
        }
    }
}

impl ArtifactTable {
    pub fn new(artifact: &str, headers: &[&str], source: &str) -> ArtifactTable {
        ArtifactTable {
            artifact: artifact.to_string(),
            headers: headers.iter().map(|header| header.to_string()).collect(),
            rows: Vec::new(),
            source: source.to_string(),
            time_column: None,
        }
    }

    /// Set the column holding the primary timestamp for each row
    pub fn with_time_column(mut self, column: Option<usize>) -> ArtifactTable {
        self.time_column = column;
        self
    }

    /// Append a row. Rows must always match the header arity
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        if row.len() != self.headers.len() {
            return Err(TableError::Arity {
                expected: self.headers.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows can only be added through `push_row`
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Path of the file the rows were read from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn time_column(&self) -> Option<usize> {
        self.time_column
    }
}
