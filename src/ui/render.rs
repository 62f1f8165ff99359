//! Terminal rendering of a sheet view.

use crate::config::Config;
use crate::models::sheet::SheetView;
use crate::utils::colors::{
    CYAN, GREY, RESET, color_for_overtime, colorize_in_out, colorize_optional,
};
use crate::utils::date::{WeekdayStyle, weekday_str};
use crate::utils::formatting::{bold, or_placeholder};
use crate::utils::table::{Column, Table};

pub fn render_sheet(view: &SheetView, cfg: &Config) -> String {
    let mut out = String::new();

    out.push_str(&render_header(view));
    out.push('\n');

    if view.is_empty() {
        out.push_str(&format!(
            "{GREY}No days to show: set both period dates, with the end not before the start.{RESET}\n"
        ));
        return out;
    }

    let table = build_table(view, WeekdayStyle::from_config(&cfg.show_weekday));
    let sep_ch = cfg.separator_char.chars().next().unwrap_or('-');
    let separator: String = std::iter::repeat_n(sep_ch, table.line_width()).collect();

    out.push_str(&table.render());
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_footer(view));

    out
}

fn render_header(view: &SheetView) -> String {
    let name = if view.employee_name.trim().is_empty() {
        format!("{GREY}(no name){RESET}")
    } else {
        bold(&view.employee_name)
    };

    let start = view.period.start().unwrap_or("");
    let end = view.period.end().unwrap_or("");

    format!(
        "{CYAN}Employee:{RESET}   {}\n{CYAN}Period:{RESET}     {} → {}\n{CYAN}Contract:{RESET}   {} h\n",
        name,
        colorize_optional(or_placeholder(start)),
        colorize_optional(or_placeholder(end)),
        view.contracted_hours
    )
}

fn build_table(view: &SheetView, wd: WeekdayStyle) -> Table {
    let mut columns = vec![Column::new("Date", 10)];
    if wd != WeekdayStyle::None {
        columns.push(Column::new("Day", 3));
    }
    columns.extend([
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Total", 5),
        Column::new("Notes", 0),
    ]);

    let mut table = Table::new(columns);

    for r in &view.rows {
        let mut cells = vec![r.row.key.clone()];
        if wd != WeekdayStyle::None {
            cells.push(weekday_str(&r.row.date, wd));
        }
        cells.push(colorize_in_out(or_placeholder(&r.row.entry.time_in), true));
        cells.push(colorize_in_out(or_placeholder(&r.row.entry.time_out), false));
        cells.push(colorize_optional(&r.duration.to_string()));
        cells.push(r.row.entry.notes.clone());
        table.add_row(cells);
    }

    table
}

fn render_footer(view: &SheetView) -> String {
    let ot_color = color_for_overtime(view.totals.overtime_minutes);
    format!(
        "{CYAN}Total period:{RESET} {}\n{CYAN}Overtime:{RESET}     {}{}{RESET}\n",
        bold(&view.total_display()),
        ot_color,
        view.overtime_display()
    )
}
