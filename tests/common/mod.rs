//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pdf_text_handler::{InvocationContext, MemoryLogger};

/// JPEG SOI + APP0 header, the start of any JFIF file.
pub const JPEG_HEADER: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01,
];

/// Build a PDF with one page per entry, each showing its text in Helvetica.
///
/// Object layout: 1 catalog, 2 page tree, 3 font, then a page/content pair
/// per page. The xref table is computed from the real byte offsets.
pub fn create_test_pdf(pages: &[&str]) -> Vec<u8> {
    create_test_pdf_with_catalog_entries(pages, "")
}

/// Like [`create_test_pdf`], with an array nested `depth` levels deep stored
/// under `/Nested` in the catalog.
pub fn create_nested_array_pdf(depth: usize) -> Vec<u8> {
    let nested = format!("/Nested {}0{}", "[".repeat(depth), "]".repeat(depth));
    create_test_pdf_with_catalog_entries(&["Hello"], &nested)
}

/// Build a PDF whose catalog carries `extra` after its required entries.
pub fn create_test_pdf_with_catalog_entries(pages: &[&str], extra: &str) -> Vec<u8> {
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        format!("<< /Type /Catalog /Pages 2 0 R {} >>", extra),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (page_id, text) in page_ids.iter().zip(pages) {
        let content = format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", escape_pdf_string(text));
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (idx, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", idx + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}

fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}

/// Context capturing log lines in memory.
pub fn capturing_context() -> (InvocationContext, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    (InvocationContext::new("integration-test", logger.clone()), logger)
}
