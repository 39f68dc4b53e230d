pub mod builtin;
pub mod schema;

use crate::error::FiredoorError;
use crate::model::Priority;
use regex::Regex;
use schema::{ActionDef, CatalogDef};
use std::collections::HashSet;
use std::path::Path;

/// Category labels used by the builtin catalog. Report consumers group on these.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Gap Adjustment",
    "Hardware Issues",
    "Structural Repairs",
    "Seal Replacement",
    "Documentation",
    "Doorset Replacement",
];

/// One compiled remedial action.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub phrase: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    regex: Regex,
}

impl CatalogEntry {
    /// True when the action is ticked "Yes" somewhere in `window`.
    pub fn is_match(&self, window: &str) -> bool {
        self.regex.is_match(window)
    }
}

/// An immutable, compiled remedial-action catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: String,
    pub version: String,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate a catalog definition and compile its match patterns.
    pub fn compile(def: &CatalogDef) -> Result<Catalog, FiredoorError> {
        validate_catalog(def)?;

        let entries = def
            .actions
            .iter()
            .map(compile_action)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog {
            name: def.name.clone(),
            version: def.version.clone(),
            entries,
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry that matches the remedial window, in catalog order.
    ///
    /// Entries are tested independently; one window can match many entries.
    pub fn match_window<'a>(&'a self, window: &'a str) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.iter().filter(move |e| e.is_match(window))
    }
}

fn compile_action(action: &ActionDef) -> Result<CatalogEntry, FiredoorError> {
    let source = match action.pattern.as_deref() {
        Some(p) => p.to_string(),
        None => phrase_pattern(&action.phrase),
    };
    let regex = Regex::new(&source).map_err(|e| {
        FiredoorError::CatalogInvalid(format!(
            "action '{}' has an invalid pattern: {}",
            action.phrase, e
        ))
    })?;

    Ok(CatalogEntry {
        phrase: action.phrase.clone(),
        title: action.title.clone(),
        description: action.description.clone(),
        category: action.category.clone(),
        priority: action.priority,
        regex,
    })
}

/// Build the match pattern for a checklist phrase.
///
/// Case-insensitive, any whitespace (including line breaks) between words,
/// and the phrase must be answered with a literal "Yes".
pub fn phrase_pattern(phrase: &str) -> String {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    format!(r"(?i){}\s*Yes\b", words.join(r"\s*"))
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, FiredoorError> {
    let content = std::fs::read_to_string(path).map_err(|e| FiredoorError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, FiredoorError> {
    let def: CatalogDef = serde_json::from_str(json).map_err(|e| FiredoorError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    Catalog::compile(&def)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, FiredoorError> {
    let def: CatalogDef = serde_json::from_str(json)?;
    Catalog::compile(&def)
}

/// Validate that a catalog definition is well-formed.
pub fn validate_catalog(def: &CatalogDef) -> Result<(), FiredoorError> {
    if def.actions.is_empty() {
        return Err(FiredoorError::CatalogInvalid(
            "actions must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for action in &def.actions {
        if action.phrase.trim().is_empty() {
            return Err(FiredoorError::CatalogInvalid(
                "action phrase must not be empty".into(),
            ));
        }

        if action.title.trim().is_empty() {
            return Err(FiredoorError::CatalogInvalid(format!(
                "action '{}' has no title",
                action.phrase
            )));
        }

        if action.category.trim().is_empty() {
            return Err(FiredoorError::CatalogInvalid(format!(
                "action '{}' has no category",
                action.phrase
            )));
        }

        let key = action
            .phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if !seen.insert(key) {
            return Err(FiredoorError::CatalogInvalid(format!(
                "duplicate action phrase '{}'",
                action.phrase
            )));
        }
    }

    Ok(())
}
