//! Text extraction from various file formats

use crate::error::{Result, ResumeScorerError};
use pulldown_cmark::{html, Parser};
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
            ResumeScorerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

/// Office Open XML (.docx) documents
pub struct DocxExtractor;

const DOCX_BODY: &str = "word/document.xml";

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let xml = Self::read_document_xml(&bytes).map_err(|e| {
            ResumeScorerError::DocxExtraction(format!(
                "Failed to read Word document '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::xml_to_text(&xml))
    }
}

impl DocxExtractor {
    fn read_document_xml(bytes: &[u8]) -> std::result::Result<String, String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
        let mut entry = archive.by_name(DOCX_BODY).map_err(|e| e.to_string())?;
        let mut xml = String::new();
        entry.read_to_string(&mut xml).map_err(|e| e.to_string())?;
        Ok(xml)
    }

    pub fn xml_to_text(xml: &str) -> String {
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t");

        let re = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let stripped = re.replace_all(&text, "");

        let decoded = stripped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&");

        decoded
            .lines()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;

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
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        let re = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
