//! Text extraction from supported document formats
//!
//! Extractors are pure transforms over the uploaded bytes: no OCR, no layout
//! preservation, text content only in the reading order the format defines.
//! Empty extracted text is a valid outcome (e.g. a scanned PDF with no text
//! layer), not an error.

use crate::error::{OptiScoreError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            OptiScoreError::CorruptDocument(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads the main document part of a DOCX archive and flattens its text
/// runs, one line per paragraph.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            OptiScoreError::CorruptDocument(format!("Not a valid DOCX archive: {}", e))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                OptiScoreError::CorruptDocument(format!("DOCX has no document part: {}", e))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                OptiScoreError::CorruptDocument(format!("Unreadable DOCX document part: {}", e))
            })?;

        Self::document_xml_to_text(&xml)
    }
}

impl DocxExtractor {
    fn document_xml_to_text(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    // Paragraph boundary becomes a line break
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
                Ok(Event::Text(t)) if in_run_text => {
                    let run = t.unescape().map_err(|e| {
                        OptiScoreError::CorruptDocument(format!("Bad DOCX text run: {}", e))
                    })?;
                    text.push_str(&run);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(OptiScoreError::CorruptDocument(format!(
                        "Malformed DOCX XML: {}",
                        e
                    )))
                }
            }
        }

        Ok(text.trim_end().to_string())
    }
}
