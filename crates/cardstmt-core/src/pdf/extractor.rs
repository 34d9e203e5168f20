//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::{Document, Object};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf for structure and pdf-extract for text.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Full text with a `--- Page N ---` marker after each non-empty page.
    pub fn extract_text_with_markers(&self) -> Result<String> {
        let mut full_text = String::new();

        for (index, page_text) in self.extract_pages()?.iter().enumerate() {
            if page_text.trim().is_empty() {
                continue;
            }
            full_text.push_str(page_text);
            full_text.push_str(&format!("\n--- Page {} ---\n", index + 1));
        }

        Ok(full_text)
    }

    /// Whether any object in the document is an image XObject.
    pub fn has_images(&self) -> bool {
        let Some(doc) = self.document.as_ref() else {
            return false;
        };

        doc.objects.values().any(|object| {
            let Object::Stream(stream) = object else {
                return false;
            };
            let is_image = stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false);
            if is_image {
                trace!("Found image object");
            }
            is_image
        })
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self, text: &str) -> PdfType {
        let has_text = !text.trim().is_empty();
        let has_images = self.has_images();

        let pdf_type = match (has_text, has_images) {
            (true, false) => PdfType::Text,
            (false, true) => PdfType::Image,
            (true, true) => PdfType::Hybrid,
            (false, false) => PdfType::Empty,
        };

        debug!("PDF analysis: has_text={}, has_images={} -> {:?}", has_text, has_images, pdf_type);
        pdf_type
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        guarded(|| pdf_extract::extract_text_from_mem(&self.raw_data))
    }

    fn extract_pages(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }
        guarded(|| pdf_extract::extract_text_from_mem_by_pages(&self.raw_data))
    }
}

/// Run a pdf-extract call, turning its panics into extraction errors.
///
/// pdf-extract panics on some fonts and encodings that lopdf loads fine.
fn guarded<T, E, F>(extract: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: std::fmt::Display,
{
    match panic::catch_unwind(AssertUnwindSafe(extract)) {
        Ok(result) => result.map_err(|e| PdfError::TextExtraction(e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(PdfError::TextExtraction(format!("pdf-extract panicked: {}", reason)))
        }
    }
}
