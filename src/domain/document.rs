// SPDX-License-Identifier: MPL-2.0
//! Documents handed to the extraction view and the templates they can be
//! extracted with.
//!
//! The shell never parses document content. It only reads metadata (name,
//! size, MIME type) of a file the user picked or dropped, to label the
//! preview card.

use std::fmt;
use std::path::{Path, PathBuf};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Fallback MIME type for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Preview family of a document, chosen from its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Pdf,
    Image,
    Spreadsheet,
    Audio,
    Document,
    Other,
}

impl FileCategory {
    /// Classifies a MIME type. Spreadsheet checks run before document checks
    /// because OOXML spreadsheet types also contain "officedocument".
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        if mime == "application/pdf" {
            FileCategory::Pdf
        } else if mime.starts_with("image/") {
            FileCategory::Image
        } else if mime.starts_with("audio/") {
            FileCategory::Audio
        } else if mime.contains("spreadsheet") || mime.contains("excel") || mime == "text/csv" {
            FileCategory::Spreadsheet
        } else if mime.contains("document") || mime.contains("word") || mime == "text/plain" {
            FileCategory::Document
        } else {
            FileCategory::Other
        }
    }

    /// Translation key of the category label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FileCategory::Pdf => "preview.pdf",
            FileCategory::Image => "preview.image",
            FileCategory::Spreadsheet => "preview.spreadsheet",
            FileCategory::Audio => "preview.audio",
            FileCategory::Document => "preview.document",
            FileCategory::Other => "preview.other",
        }
    }
}

/// Extensions offered by the file picker.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "png", "jpg", "jpeg", "gif", "webp", "tif", "tiff", "bmp", "csv", "xls", "xlsx", "doc",
    "docx", "txt", "mp3", "wav", "m4a",
];

/// Guesses a MIME type from a file extension (case-insensitive).
#[must_use]
pub fn mime_from_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "csv" => "text/csv",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        _ => OCTET_STREAM,
    }
}

/// Human-readable size with up to two decimals (`0 Bytes`, `1.5 KB`, `2 MB`).
///
/// Sizes beyond the largest unit stay expressed in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Read-only metadata of a document supplied by the picker or a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl DocumentInfo {
    /// Builds the metadata from an explicit size, deriving name and MIME type
    /// from the path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(OCTET_STREAM, mime_from_extension)
            .to_string();

        Self {
            name,
            size,
            mime_type,
            path,
        }
    }

    /// Reads the size from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file metadata cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        Ok(Self::new(path, metadata.len()))
    }

    #[must_use]
    pub fn category(&self) -> FileCategory {
        FileCategory::from_mime(&self.mime_type)
    }

    #[must_use]
    pub fn formatted_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Extraction templates offered on the dashboard and the templates page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    BankStatement,
    Invoice,
    PurchaseOrder,
    Contract,
    General,
}

impl DocumentType {
    /// Templates in display order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::BankStatement,
        DocumentType::Invoice,
        DocumentType::PurchaseOrder,
        DocumentType::Contract,
        DocumentType::General,
    ];

    /// Route segment used in `/extraction/:type`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            DocumentType::BankStatement => "bank",
            DocumentType::Invoice => "invoice",
            DocumentType::PurchaseOrder => "po",
            DocumentType::Contract => "contract",
            DocumentType::General => "general",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DocumentType::BankStatement => "dash.template_bank",
            DocumentType::Invoice => "dash.template_invoice",
            DocumentType::PurchaseOrder => "dash.template_po",
            DocumentType::Contract => "dash.template_contract",
            DocumentType::General => "nav.general",
        }
    }

    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            DocumentType::BankStatement => "templates.bank_desc",
            DocumentType::Invoice => "templates.invoice_desc",
            DocumentType::PurchaseOrder => "templates.po_desc",
            DocumentType::Contract => "templates.contract_desc",
            DocumentType::General => "templates.general_desc",
        }
    }

    /// Path of the extraction view for this template.
    #[must_use]
    pub fn extraction_path(self) -> String {
        format!("/extraction/{}", self.id())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn categorizes_mime_types() {
        assert_eq!(FileCategory::from_mime("application/pdf"), FileCategory::Pdf);
        assert_eq!(FileCategory::from_mime("image/png"), FileCategory::Image);
        assert_eq!(FileCategory::from_mime("audio/mpeg"), FileCategory::Audio);
        assert_eq!(FileCategory::from_mime("text/csv"), FileCategory::Spreadsheet);
        assert_eq!(
            FileCategory::from_mime(mime_from_extension("xlsx")),
            FileCategory::Spreadsheet
        );
        assert_eq!(
            FileCategory::from_mime(mime_from_extension("docx")),
            FileCategory::Document
        );
        assert_eq!(FileCategory::from_mime("text/plain"), FileCategory::Document);
        assert_eq!(FileCategory::from_mime(OCTET_STREAM), FileCategory::Other);
    }

    #[test]
    fn formats_file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
    }

    #[test]
    fn sizes_past_gigabytes_stay_in_gigabytes() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn document_info_derives_name_and_mime() {
        let info = DocumentInfo::new("/tmp/Invoice_Oct2023.PDF", 2048);
        assert_eq!(info.name, "Invoice_Oct2023.PDF");
        assert_eq!(info.mime_type, "application/pdf");
        assert_eq!(info.category(), FileCategory::Pdf);
        assert_eq!(info.formatted_size(), "2 KB");
    }

    #[test]
    fn document_without_extension_is_octet_stream() {
        let info = DocumentInfo::new("README", 1);
        assert_eq!(info.mime_type, OCTET_STREAM);
        assert_eq!(info.category(), FileCategory::Other);
    }

    #[test]
    fn from_path_reads_size() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("scan.png");
        std::fs::write(&path, [0u8; 300]).expect("failed to write file");

        let info = DocumentInfo::from_path(&path).expect("metadata should be readable");
        assert_eq!(info.size, 300);
        assert_eq!(info.category(), FileCategory::Image);
    }

    #[test]
    fn document_type_ids_round_trip() {
        for kind in DocumentType::ALL {
            assert_eq!(DocumentType::from_id(kind.id()), Some(kind));
        }
        assert_eq!(DocumentType::from_id("receipt"), None);
        assert_eq!(DocumentType::Invoice.extraction_path(), "/extraction/invoice");
    }
}
