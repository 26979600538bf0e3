//! Display implementation for washlog messages.
//!
//! Single source of truth for all user-facing text. Parameters are
//! interpolated here so call sites never format message strings themselves.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigDepartmentsHeader => "Configure laundry departments and their standard task durations".to_string(),
            Message::NoDepartmentsConfigured => "No departments configured yet. Run 'washlog init' first".to_string(),

            // === COMPLIANCE REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Time compliance report for {}", date),
            Message::DepartmentNotConfigured(name) => {
                format!("Department '{}' has no configured standard duration, skipping", name)
            }
            Message::NoSamplesInFile(path) => format!("No department samples found in '{}'", path),

            // === REMAINING TIME MESSAGES ===
            Message::RemainingTime(department, duration) => {
                format!("Remaining time for '{}': {}", department, duration)
            }
            Message::StandardTimeExhausted(department) => {
                format!("Standard time for '{}' is already used up", department)
            }

            // === INVOICE MESSAGES ===
            Message::InvoiceNumber(number) => format!("Next invoice number: {}", number),
            Message::ReturnCode(code) => format!("Return code: {}", code),
            Message::InvoiceTotals(tax, total) => format!("VAT: {:.2}, total: {:.2}", tax, total),

            // === MASKING MESSAGES ===
            Message::MaskedValue(value) => value.clone(),
            Message::NothingToMask => "Nothing to mask: provide --phone and/or --name".to_string(),
        };

        write!(f, "{}", text)
    }
}
