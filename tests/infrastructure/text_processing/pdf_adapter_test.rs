use std::time::Duration;

use studyhub::application::ports::{FileLoader, FileLoaderError};
use studyhub::infrastructure::text_processing::PdfAdapter;

/// Builds a single-page PDF showing `text` in Helvetica, with a correct
/// cross-reference table. `None` produces a page without a content stream.
fn single_page_pdf(text: Option<&str>) -> Vec<u8> {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
    ];

    match text {
        Some(text) => {
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                    .to_string(),
            );
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ));
            objects.push(
                "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
                 /Encoding /WinAnsiEncoding >>"
                    .to_string(),
            );
        }
        None => objects.push(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>"
                .to_string(),
        ),
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    let mut trailer = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        trailer.push_str(&format!("{offset:010} 00000 n \n"));
    }
    trailer.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(trailer.as_bytes());
    pdf
}

#[tokio::test]
async fn given_pdf_with_text_when_extracting_then_returns_text() {
    let adapter = PdfAdapter::new();
    let pdf = single_page_pdf(Some("Mitochondria produce ATP"));

    let text = adapter.extract_text(&pdf).await.unwrap();

    assert!(text.contains("Mitochondria"));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(b"not a pdf at all").await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_no_text_found() {
    let adapter = PdfAdapter::with_timeout(Duration::from_secs(10));
    let pdf = single_page_pdf(None);

    let result = adapter.extract_text(&pdf).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound)));
}
