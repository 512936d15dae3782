pub const MIN_MAX_DOCS: i64 = 1;
pub const MAX_MAX_DOCS: i64 = 100_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("extraction path is required")]
    PathRequired,
    #[error("invalid extraction path: {0}")]
    InvalidPath(String),
    #[error("maxDocs must be between {MIN_MAX_DOCS} and {MAX_MAX_DOCS}, got {0}")]
    MaxDocsOutOfRange(i64),
}

/// Validated parameters for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub max_docs: u32,
    pub extraction_path: String,
    pub keywords: String,
    pub mimetypes: Vec<String>,
}

impl ExtractionRequest {
    /// Validates fail-fast: path presence, then traversal guard, then count range.
    pub fn new(
        max_docs: i64,
        extraction_path: &str,
        keywords: &str,
        mimetypes: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let path = extraction_path.trim();
        if path.is_empty() {
            return Err(ValidationError::PathRequired);
        }
        if path.contains("..") || path.contains('~') {
            return Err(ValidationError::InvalidPath(path.to_string()));
        }
        if !(MIN_MAX_DOCS..=MAX_MAX_DOCS).contains(&max_docs) {
            return Err(ValidationError::MaxDocsOutOfRange(max_docs));
        }

        Ok(Self {
            max_docs: max_docs as u32,
            extraction_path: path.to_string(),
            keywords: keywords.trim().to_string(),
            mimetypes,
        })
    }

    /// Human-readable confirmation shown on the form after a successful submit.
    pub fn summary(&self) -> String {
        let mut message = String::from("Extraction started successfully.");
        if !self.keywords.is_empty() {
            message.push_str(&format!(" Keyword filter: \"{}\".", self.keywords));
        }
        if !self.mimetypes.is_empty() {
            message.push_str(&format!(" Restricted to {} type(s).", self.mimetypes.len()));
        }
        message.push_str(&format!(" Processing up to {} documents.", self.max_docs));
        message
    }
}
