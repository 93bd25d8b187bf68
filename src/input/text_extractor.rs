//! Text extraction from supported file formats
//!
//! Extraction that succeeds but yields no text returns an empty string, not
//! an error; callers decide how to treat empty documents.

use crate::error::{Result, ResumeTailorError};
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeTailorError::Extraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text.trim().to_string())
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

/// Extracts paragraph text from the OOXML document part of a .docx file.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeTailorError::Extraction(format!(
                "Failed to open DOCX container '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut document_xml = String::new();
        {
            let mut entry = archive.by_name("word/document.xml").map_err(|e| {
                ResumeTailorError::Extraction(format!(
                    "DOCX '{}' has no document part: {}",
                    path.display(),
                    e
                ))
            })?;
            entry.read_to_string(&mut document_xml).map_err(|e| {
                ResumeTailorError::Extraction(format!(
                    "Failed to read DOCX document part '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }

        Ok(Self::document_xml_to_text(&document_xml))
    }
}

impl DocxExtractor {
    fn document_xml_to_text(xml: &str) -> String {
        // paragraph ends become line breaks before the markup is stripped
        let with_breaks = xml.replace("</w:p>", "\n");

        let tag = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let stripped = tag.replace_all(&with_breaks, "");

        let decoded = stripped
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'");

        let lines: Vec<String> = decoded
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_xml_to_text() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t>Rust &amp; Tokio</w:t></w:r></w:p></w:body></w:document>"#;

        let text = DocxExtractor::document_xml_to_text(xml);

        assert_eq!(text, "Jane Doe\nRust & Tokio");
    }

    #[test]
    fn test_document_xml_without_text_yields_empty() {
        let xml = "<w:document><w:body></w:body></w:document>";
        assert_eq!(DocxExtractor::document_xml_to_text(xml), "");
    }
}
