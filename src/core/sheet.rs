use crate::core::calculator::{day_duration, period_totals};
use crate::core::rows::generate_rows;
use crate::models::record::PersistedRecord;
use crate::models::sheet::{SheetRow, SheetView};

pub struct Core;

impl Core {
    /// Rows of the current period with their durations, plus the period
    /// aggregates. Pure: the same record always gives the same view.
    pub fn build_sheet(record: &PersistedRecord) -> SheetView {
        let rows: Vec<SheetRow> = generate_rows(
            record.period.start(),
            record.period.end(),
            &record.entries,
        )
        .into_iter()
        .map(|row| {
            let duration = day_duration(&row.entry.time_in, &row.entry.time_out);
            SheetRow { row, duration }
        })
        .collect();

        // 0 is what an empty or unparseable contract field stores: no overtime
        let contracted = Some(record.contracted_hours_per_period).filter(|h| *h > 0);
        let totals = period_totals(rows.iter().map(|r| &r.duration), contracted);

        SheetView {
            employee_name: record.employee_name.clone(),
            contracted_hours: record.contracted_hours_per_period,
            period: record.period.clone(),
            rows,
            totals,
        }
    }
}
