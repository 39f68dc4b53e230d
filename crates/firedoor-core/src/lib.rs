pub mod catalog;
pub mod error;
pub mod extraction;
pub mod model;
pub mod ordering;
pub mod parsing;
pub mod summary;

use catalog::Catalog;
use error::FiredoorError;
use extraction::PdfExtractor;
use model::{ExtractedTask, ExtractionResult, TaskStatus};
use parsing::header::parse_header;
use parsing::identity::resolve_identity;
use parsing::remedial::remedial_window;

/// Main API entry point: extract remedial tasks from an inspection PDF.
///
/// The only failures come from converting the PDF to text; extraction
/// itself always succeeds.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    catalog: &Catalog,
) -> Result<ExtractionResult, FiredoorError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted PDF text"
    );

    let text = extraction::join_pages(&pages);
    Ok(extract_tasks(&text, catalog))
}

/// Turn the plain text of an inspection report into an inspection summary
/// and an ordered list of remedial tasks.
///
/// Pure and infallible: missing headers, doors or answers simply produce
/// empty fields or fewer tasks.
pub fn extract_tasks(text: &str, catalog: &Catalog) -> ExtractionResult {
    let text = parsing::normalize_newlines(text);
    let header = parse_header(&text);

    let mut tasks = Vec::new();
    for section in parsing::split_door_sections(&text) {
        let Some(window) = remedial_window(section.text) else {
            tracing::debug!(section = section.index, "no remedial action heading");
            continue;
        };

        let identity = resolve_identity(section.text, section.index);
        let before = tasks.len();
        for entry in catalog.match_window(window) {
            tasks.push(ExtractedTask {
                door_id: identity.door_id.clone(),
                location: identity.location.clone(),
                title: format!("{} - {}", identity.door_id, entry.title),
                description: entry.description.clone(),
                category: entry.category.clone(),
                priority: entry.priority,
                status: TaskStatus::Pending,
            });
        }

        tracing::debug!(
            section = section.index,
            door_id = %identity.door_id,
            tasks = tasks.len() - before,
            "processed door section"
        );
    }

    ordering::sort_tasks(&mut tasks);
    let inspection = summary::summarize(header, &tasks);

    ExtractionResult { inspection, tasks }
}
