// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SheetExport, build_title, get_headers, sheet_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Day rows followed by the TOTAL and OVERTIME lines.
pub(crate) fn export_pdf(sheet: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = sheet_to_table(sheet);

    let mut pdf = PdfManager::new();
    pdf.write_table(&build_title(sheet), &headers, &table, 2);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
