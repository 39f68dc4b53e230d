use firedoor_core::catalog::{self, builtin, Catalog};
use firedoor_core::error::FiredoorError;
use firedoor_core::extraction::pdftotext::PdftotextExtractor;
use firedoor_core::model::ExtractionResult;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::output;

pub fn run(
    input_file: PathBuf,
    catalog_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), FiredoorError> {
    let catalog = load_catalog(catalog_file.as_deref())?;
    info!(catalog = %catalog.name, actions = catalog.len(), "loaded catalog");

    let result = extract_file(&input_file, &catalog)?;
    info!(
        doors = result.inspection.total_doors,
        tasks = result.tasks.len(),
        "extraction completed"
    );

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} task(s) for {} door(s), written to {}",
                result.tasks.len(),
                result.inspection.total_doors,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => output::table::print(&result),
        },
    }

    Ok(())
}

pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, FiredoorError> {
    match path {
        Some(p) => catalog::load_catalog(p),
        None => builtin::load_builtin(),
    }
}

/// Extract from a PDF, or from plain text when the input is a `.txt` file.
fn extract_file(input_file: &Path, catalog: &Catalog) -> Result<ExtractionResult, FiredoorError> {
    let is_text = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        let text = std::fs::read_to_string(input_file)?;
        Ok(firedoor_core::extract_tasks(&text, catalog))
    } else {
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        firedoor_core::extract_pdf(&pdf_bytes, &extractor, catalog)
    }
}
