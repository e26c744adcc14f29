//! Text extraction from various file formats
//!
//! PDF and DOCX extraction work on in-memory bytes so the same routines can
//! serve uploads as well as files on disk; plain text and markdown read
//! straight from the filesystem.

use crate::error::{Result, ResumeAnalyzerError};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text from raw PDF bytes, pages newline-joined.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeAnalyzerError::Extraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;
        self.extract_bytes(&bytes)
    }
}

pub struct DocxExtractor;

impl DocxExtractor {
    /// Extract text from raw DOCX bytes. Paragraphs whose trimmed text is
    /// empty are skipped; the rest are newline-joined.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = read_docx(bytes).map_err(|e| {
            ResumeAnalyzerError::Extraction(format!("Failed to extract text from DOCX: {}", e))
        })?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in docx.document.children.iter() {
            if let DocumentChild::Paragraph(para) = child {
                let para_text: String = para
                    .children
                    .iter()
                    .filter_map(|pc| {
                        if let ParagraphChild::Run(run) = pc {
                            Some(
                                run.children
                                    .iter()
                                    .filter_map(|rc| {
                                        if let RunChild::Text(t) = rc {
                                            Some(t.text.clone())
                                        } else {
                                            None
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("");

                if !para_text.trim().is_empty() {
                    paragraphs.push(para_text);
                }
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;
        self.extract_bytes(&bytes)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = self.html_to_text(&html_output);
        Ok(text)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
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
    fn test_corrupt_pdf_bytes_error() {
        let result = PdfExtractor.extract_bytes(b"this is not a pdf document");
        assert!(matches!(result, Err(ResumeAnalyzerError::Extraction(_))));
    }

    #[test]
    fn test_corrupt_docx_bytes_error() {
        let result = DocxExtractor.extract_bytes(b"this is not a docx archive");
        assert!(matches!(result, Err(ResumeAnalyzerError::Extraction(_))));
    }

    #[test]
    fn test_markdown_html_stripping() {
        let extractor = MarkdownExtractor;
        let text = extractor.html_to_text("<h1>Skills</h1><p>Python &amp; AWS</p>");

        assert!(text.contains("Skills"));
        assert!(text.contains("Python & AWS"));
        assert!(!text.contains("<h1>"));
    }
}
