use crate::error::FiredoorError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`): form labels and their answers
/// come out on separate lines.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FiredoorError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| FiredoorError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| FiredoorError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FiredoorError::PdftotextNotFound
                } else {
                    FiredoorError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        let text = stdout_or_error(output)?;
        tracing::debug!(bytes = text.len(), "pdftotext produced text");

        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn stdout_or_error(output: Output) -> Result<String, FiredoorError> {
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(FiredoorError::PdftotextFailed { code, stderr });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split pdftotext output into pages (form feed `\x0c` separates pages).
fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}
