use firedoor_core::catalog::{self, builtin, Catalog, KNOWN_CATEGORIES};
use firedoor_core::error::FiredoorError;
use std::path::Path;

use crate::commands::extract::load_catalog;

pub fn list() -> Result<(), FiredoorError> {
    let def = builtin::builtin_def()?;

    println!("{} (v{})\n", def.name, def.version);
    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    let max_phrase = def
        .actions
        .iter()
        .map(|a| a.phrase.chars().count())
        .max()
        .unwrap_or(20);

    for action in &def.actions {
        println!(
            "  {:<width$}  {:<9} {}",
            action.phrase,
            action.priority,
            action.title,
            width = max_phrase
        );
    }
    println!();

    Ok(())
}

pub fn explain(catalog_file: Option<&Path>) -> Result<(), FiredoorError> {
    let catalog = load_catalog(catalog_file)?;

    println!("{} (version {})\n", catalog.name, catalog.version);
    println!(
        "A door gets one task for every action below that is answered \"Yes\""
    );
    println!("between its Remedial Action and Compliance Rating headings.\n");

    for category in categories(&catalog) {
        println!("{}:", category);
        for entry in catalog.entries().iter().filter(|e| e.category == category) {
            println!("  [{}] {}", entry.priority, entry.title);
            println!("      when: {}", entry.phrase);
            println!("      {}", entry.description);
        }
        println!();
    }

    Ok(())
}

/// Categories in order of first appearance.
fn categories(catalog: &Catalog) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in catalog.entries() {
        if !seen.contains(&entry.category) {
            seen.push(entry.category.clone());
        }
    }
    seen
}

pub fn schema() -> Result<(), FiredoorError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file lists the remedial actions printed on the inspection
template. When you run `firedoor extract`, every action answered "Yes"
inside a door's Remedial Action section becomes one task for that door.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  actions       (array, required)   List of remedial actions (see below)

Each entry in the "actions" array:
  phrase        (string, required)  Checklist phrase as printed on the
                                    template, e.g. "Handle - To be replaced".
                                    Matched case-insensitively, with any
                                    whitespace or line breaks between words,
                                    and must be followed by "Yes".
  pattern       (string, optional)  Raw regular expression used instead of
                                    the phrase. Add (?i) yourself if you
                                    want case-insensitive matching.
  title         (string, required)  Task title; tasks are named
                                    "<door id> - <title>".
  description   (string, required)  Remedial instruction copied onto the task.
  category      (string, required)  Grouping label, e.g. "Hardware Issues".
  priority      (string, required)  One of: critical, high, medium, low.

Example:
{{
  "name": "Site-specific actions",
  "version": "1.0",
  "actions": [
    {{
      "phrase": "Handle - To be replaced",
      "title": "Replace handle",
      "description": "Replace the handle with a fire-rated handle.",
      "category": "Hardware Issues",
      "priority": "high"
    }},
    {{
      "phrase": "Letter plate - To be sealed",
      "pattern": "(?i)letter\\s*plate\\s*-\\s*to\\s*be\\s*sealed\\s*yes",
      "title": "Seal letter plate",
      "description": "Fit an intumescent letter plate liner.",
      "category": "Seal Replacement",
      "priority": "medium"
    }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FiredoorError> {
    let catalog = catalog::load_catalog(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        catalog.name, catalog.version
    );
    println!("  Actions: {}", catalog.len());
    println!("  Categories: {}", categories(&catalog).join(", "));

    // Warnings, not errors
    let warnings: Vec<String> = catalog
        .entries()
        .iter()
        .filter(|e| !KNOWN_CATEGORIES.contains(&e.category.as_str()))
        .map(|e| {
            format!(
                "action '{}' uses non-standard category '{}'",
                e.phrase, e.category
            )
        })
        .collect();

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
