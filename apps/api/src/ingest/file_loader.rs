//! Text extraction from uploaded resumes.
//!
//! Extraction never fails outright: any problem yields empty text and a
//! warning, which callers surface to the user alongside a successful response.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    /// Content type wins; the file extension is the fallback.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let by_mime = content_type.and_then(|ct| {
            let mime = ct.split(';').next().unwrap_or_default().trim();
            match mime {
                "application/pdf" => Some(FileKind::Pdf),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                    Some(FileKind::Docx)
                }
                "text/plain" => Some(FileKind::Txt),
                _ => None,
            }
        });

        by_mime.or_else(|| {
            let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some(FileKind::Pdf),
                "docx" => Some(FileKind::Docx),
                "txt" => Some(FileKind::Txt),
                _ => None,
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Extraction {
    fn ok(text: String) -> Self {
        Self {
            text,
            warning: None,
        }
    }

    fn failed(warning: impl Into<String>) -> Self {
        let warning = warning.into();
        warn!("{warning}");
        Self {
            text: String::new(),
            warning: Some(warning),
        }
    }
}

static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?>(.*?)</w:p>").expect("valid regex literal")
});

/// Text runs, run-level tabs and line breaks, in document order. Tab stops
/// under `<w:tabs>` always carry attributes and are not matched.
static RUN_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("valid regex literal")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:(lt|gt|quot|apos|amp)|#x([0-9a-fA-F]+)|#([0-9]+));")
        .expect("valid regex literal")
});

/// Extracts plain text. Blocking for PDF and DOCX; run off the async executor.
pub fn extract_text(bytes: &[u8], content_type: Option<&str>, file_name: Option<&str>) -> Extraction {
    match FileKind::detect(content_type, file_name) {
        Some(FileKind::Pdf) => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => Extraction::ok(text),
            Err(e) => Extraction::failed(format!("Error reading PDF: {e}")),
        },
        Some(FileKind::Docx) => match docx_text(bytes) {
            Ok(text) => Extraction::ok(text),
            Err(e) => Extraction::failed(format!("Error reading DOCX: {e}")),
        },
        Some(FileKind::Txt) => match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Extraction::ok(text),
            Err(e) => Extraction::failed(format!("Error reading TXT: {e}")),
        },
        None => Extraction::failed("Unsupported file type. Upload a PDF, DOCX or TXT file."),
    }
}

fn docx_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;
    Ok(document_text(&xml))
}

/// Plain text of a `word/document.xml` body, one line per paragraph.
fn document_text(xml: &str) -> String {
    let paragraphs: Vec<String> = PARAGRAPH_RE
        .captures_iter(xml)
        .map(|para| {
            RUN_CONTENT_RE
                .captures_iter(&para[1])
                .map(|run| match run.get(1) {
                    Some(text) => unescape_xml(text.as_str()),
                    None if run[0].starts_with("<w:tab") => "\t".to_string(),
                    None => "\n".to_string(),
                })
                .collect::<String>()
        })
        .collect();

    paragraphs.join("\n")
}

/// Decodes the five predefined entities and numeric character references.
/// A reference to an invalid code point is left as written.
fn unescape_xml(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let decoded = if let Some(name) = caps.get(1) {
                match name.as_str() {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => Some('&'),
                }
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else {
                caps[3].parse::<u32>().ok().and_then(char::from_u32)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
