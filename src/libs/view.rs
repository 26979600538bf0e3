use crate::libs::compliance::ComplianceReport;
use crate::libs::formatter::format_minutes;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders per-department compliance reports as a console table.
    pub fn compliance(rows: &[(String, ComplianceReport)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DEPARTMENT", "AVERAGE", "STANDARD", "DEVIATION %", "STATUS", "COLOR"]);
        for (department, report) in rows {
            table.add_row(row![
                department,
                format_minutes(report.average_minutes as f64),
                format_minutes(report.standard_minutes as f64),
                format!("{:.2}", report.deviation_percent),
                report.status,
                report.color
            ]);
        }
        table.printstd();

        Ok(())
    }
}
