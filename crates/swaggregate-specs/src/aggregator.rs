//! Recursive include resolution

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::SpecError;
use crate::includes::IncludeScanner;
use crate::models::{value_kind, SpecNamespace};

/// Drives one aggregation run from a root document to a merged namespace.
///
/// Includes are resolved depth-first, pre-order: a document is merged as soon
/// as it is visited, then its own includes are resolved immediately, before
/// any of its sibling includes. Precedence between documents therefore
/// follows strict visitation order, with later-visited documents extending
/// list slots and overwriting mapping-slot keys.
pub struct SpecAggregator;

impl SpecAggregator {
    /// Load the root document, resolve every include, and return the merged
    /// namespace.
    ///
    /// Each document load is a blocking read-then-parse; no partial result
    /// escapes on failure. Include paths are resolved relative to the
    /// working directory, not to the including file.
    ///
    /// # Arguments
    /// * `root` - Path to the root spec document
    ///
    /// # Returns
    /// * `Ok(SpecNamespace)` - The fully merged namespace
    /// * `Err(SpecError)` - On the first load, parse, or cycle failure
    pub fn aggregate(root: &Path) -> Result<SpecNamespace, SpecError> {
        let content = fs::read_to_string(root).map_err(SpecError::IoError)?;
        let mut namespace = SpecNamespace::from_document(Self::parse(&content, root)?)?;

        let mut chain = vec![root.display().to_string()];
        for include in IncludeScanner::scan(&content) {
            namespace = Self::resolve(namespace, &include, &mut chain)?;
        }
        Ok(namespace)
    }

    /// Merge one included document and, depth-first, everything it includes.
    ///
    /// The merge state is threaded through and returned; `chain` carries the
    /// documents on the current visitation path for cycle detection. A
    /// document reachable through two different parents is merged once per
    /// visit, matching in-order precedence.
    fn resolve(
        mut namespace: SpecNamespace,
        include: &str,
        chain: &mut Vec<String>,
    ) -> Result<SpecNamespace, SpecError> {
        if chain.iter().any(|visited| visited == include) {
            let mut cycle = chain.clone();
            cycle.push(include.to_string());
            return Err(SpecError::CircularInclude { chain: cycle });
        }
        chain.push(include.to_string());

        let path = Path::new(include);
        let content = fs::read_to_string(path).map_err(SpecError::IoError)?;
        debug!(path = include, "merging included spec");
        namespace.merge(Self::parse(&content, path)?)?;

        for nested in IncludeScanner::scan(&content) {
            namespace = Self::resolve(namespace, &nested, chain)?;
        }

        chain.pop();
        Ok(namespace)
    }

    /// Parse document text into its top-level mapping
    fn parse(content: &str, path: &Path) -> Result<Mapping, SpecError> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| SpecError::ParseError {
            path: path.display().to_string(),
            line: e.location().map(|l| l.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

        match value {
            Value::Mapping(document) => Ok(document),
            other => Err(SpecError::InvalidFormat(format!(
                "top-level YAML in {} must be a mapping, found {}",
                path.display(),
                value_kind(&other)
            ))),
        }
    }
}
