// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_FORMAT, DURATION_FORMAT, TIME_FORMAT, date_serial, duration_fraction, time_fraction,
};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::sheet::SheetView;
use crate::ui::messages::info;
use crate::utils::date::{WeekdayStyle, weekday_str};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(view: &SheetView, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timesheet").map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_io_app_error)?;

    // ---------------------------
    // Calcolo larghezze colonne
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, r) in view.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        match date_serial(&r.row.date) {
            Some(serial) => write_number(worksheet, row, 0, serial, DATE_FORMAT, bg)?,
            None => write_text(worksheet, row, 0, &r.row.key, bg)?,
        }

        let weekday = weekday_str(&r.row.date, WeekdayStyle::Medium);
        write_text(worksheet, row, 1, &weekday, bg)?;

        write_time(worksheet, row, 2, &r.row.entry.time_in, bg)?;
        write_time(worksheet, row, 3, &r.row.entry.time_out, bg)?;

        write_number(
            worksheet,
            row,
            4,
            duration_fraction(r.duration.minutes()),
            DURATION_FORMAT,
            bg,
        )?;

        write_text(worksheet, row, 5, &r.row.entry.notes, bg)?;

        let shown = [
            r.row.key.as_str(),
            weekday.as_str(),
            r.row.entry.time_in.as_str(),
            r.row.entry.time_out.as_str(),
            "00:00",
            r.row.entry.notes.as_str(),
        ];
        for (c, v) in shown.iter().enumerate() {
            col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(*v));
        }
    }

    // ---------------------------
    // Totali
    // ---------------------------
    let summary_start = view.rows.len() as u32 + 2;
    let label_format = Format::new().set_bold().set_align(FormatAlign::Right);
    let value_format = Format::new()
        .set_bold()
        .set_num_format(DURATION_FORMAT)
        .set_border(FormatBorder::Thin);

    let summary = [
        ("Total period", view.totals.total_minutes),
        ("Overtime", view.totals.overtime_minutes),
    ];
    for (i, (label, minutes)) in summary.iter().enumerate() {
        let row = summary_start + i as u32;
        worksheet
            .write_with_format(row, 3, *label, &label_format)
            .map_err(to_io_app_error)?;
        worksheet
            .write_with_format(row, 4, duration_fraction(*minutes), &value_format)
            .map_err(to_io_app_error)?;
        col_widths[3] = col_widths[3].max(UnicodeWidthStr::width(*label));
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    num_format: &str,
    bg: Color,
) -> AppResult<()> {
    let fmt = band_format(bg).set_num_format(num_format);
    worksheet
        .write_with_format(row, col, value, &fmt)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    worksheet
        .write_with_format(row, col, s, &band_format(bg))
        .map_err(to_io_app_error)?;
    Ok(())
}

/// Valid times become Excel times; empty cells keep the band color.
fn write_time(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    match time_fraction(s) {
        Some(frac) => write_number(worksheet, row, col, frac, TIME_FORMAT, bg),
        None => write_text(worksheet, row, col, s, bg),
    }
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
