// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SheetExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::sheet::SheetView;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the computed sheet to `file` in the given format.
    ///
    /// `file` must be absolute once a leading `~/` is expanded.
    /// Returns `false` (nothing written) when the period yields no rows.
    pub fn export(
        view: &SheetView,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        if view.is_empty() {
            warning("⚠️  No days in the current period: nothing to export.");
            return Ok(false);
        }

        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        match format {
            ExportFormat::Csv => export_csv(&SheetExport::from_view(view).rows, &path)?,
            ExportFormat::Json => export_json(&SheetExport::from_view(view), &path)?,
            ExportFormat::Xlsx => export_xlsx(view, &path)?,
            ExportFormat::Pdf => export_pdf(&SheetExport::from_view(view), &path)?,
        }

        Ok(true)
    }
}
