// src/export/model.rs

use crate::models::sheet::{SheetRow, SheetView};
use crate::utils::date::{WeekdayStyle, weekday_str};
use serde::Serialize;

/// Flat row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub date: String,
    pub weekday: String,
    pub time_in: String,
    pub time_out: String,
    pub total: String,
    pub notes: String,
}

/// Whole sheet for JSON.
#[derive(Serialize, Clone, Debug)]
pub struct SheetExport {
    pub employee: String,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub contracted_hours: u32,
    pub rows: Vec<RowExport>,
    pub total: String,
    pub overtime: String,
}

impl RowExport {
    pub fn from_row(r: &SheetRow) -> Self {
        Self {
            date: r.row.key.clone(),
            weekday: weekday_str(&r.row.date, WeekdayStyle::Medium),
            time_in: r.row.entry.time_in.clone(),
            time_out: r.row.entry.time_out.clone(),
            total: r.duration.to_string(),
            notes: r.row.entry.notes.clone(),
        }
    }
}

impl SheetExport {
    pub fn from_view(view: &SheetView) -> Self {
        Self {
            employee: view.employee_name.clone(),
            period_start: view.period.start.clone(),
            period_end: view.period.end.clone(),
            contracted_hours: view.contracted_hours,
            rows: view.rows.iter().map(RowExport::from_row).collect(),
            total: view.total_display(),
            overtime: view.overtime_display(),
        }
    }
}

/// Header per XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "weekday", "time_in", "time_out", "total", "notes"]
}

pub(crate) fn row_to_cells(e: &RowExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.weekday.clone(),
        e.time_in.clone(),
        e.time_out.clone(),
        e.total.clone(),
        e.notes.clone(),
    ]
}

/// Rows of the table plus the two summary lines (PDF).
pub(crate) fn sheet_to_table(sheet: &SheetExport) -> Vec<Vec<String>> {
    let mut out: Vec<Vec<String>> = sheet.rows.iter().map(row_to_cells).collect();
    out.push(summary_row("TOTAL", &sheet.total));
    out.push(summary_row("OVERTIME", &sheet.overtime));
    out
}

fn summary_row(label: &str, value: &str) -> Vec<String> {
    vec![
        label.to_string(),
        String::new(),
        String::new(),
        String::new(),
        value.to_string(),
        String::new(),
    ]
}

/// Title used by the PDF export.
pub(crate) fn build_title(sheet: &SheetExport) -> String {
    let start = sheet.period_start.as_deref().unwrap_or("?");
    let end = sheet.period_end.as_deref().unwrap_or("?");

    if sheet.employee.trim().is_empty() {
        format!("Timesheet from {} to {}", start, end)
    } else {
        format!("Timesheet of {} from {} to {}", sheet.employee, start, end)
    }
}
