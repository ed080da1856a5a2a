//! Include directive extraction from spec documents

use std::fs;
use std::path::Path;

use crate::error::SpecError;

/// Comment marker that makes a line inert to the YAML parser
const COMMENT_MARKER: char = '#';

/// Directive token that marks a comment line as an include statement
const INCLUDE_TOKEN: &str = "include:";

/// Scans spec documents for `#include:` directives
pub struct IncludeScanner;

impl IncludeScanner {
    /// Extract included-document paths from document text, in the order
    /// their directives appear.
    ///
    /// A line participates if its first non-whitespace character is the
    /// comment marker; after stripping the marker, a line whose content
    /// begins with the directive token yields the remainder, trimmed, as an
    /// included path. Everything else, YAML content and ordinary comments
    /// alike, is ignored. Paths are not checked for existence here; a bad
    /// path surfaces when the document is loaded.
    pub fn scan(content: &str) -> Vec<String> {
        let mut includes = Vec::new();
        for line in content.lines() {
            let Some(comment) = line.trim_start().strip_prefix(COMMENT_MARKER) else {
                continue;
            };
            if let Some(rest) = comment.strip_prefix(INCLUDE_TOKEN) {
                let path = rest.trim();
                if !path.is_empty() {
                    includes.push(path.to_string());
                }
            }
        }
        includes
    }

    /// Read a document and extract its include directives
    pub fn scan_file(path: &Path) -> Result<Vec<String>, SpecError> {
        let content = fs::read_to_string(path).map_err(SpecError::IoError)?;
        Ok(Self::scan(&content))
    }
}
