/// All user-facing messages emitted by washlog.
///
/// Keeping the text behind one enum gives every command the same voice and
/// keeps wording changes in a single place (`display.rs`). Variants carry
/// their dynamic parts as typed payloads instead of pre-formatted strings.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigDepartmentsHeader,
    NoDepartmentsConfigured,

    // === COMPLIANCE REPORT MESSAGES ===
    ReportHeader(String),                // reporting date
    DepartmentNotConfigured(String),     // department name
    NoSamplesInFile(String),             // file path

    // === REMAINING TIME MESSAGES ===
    RemainingTime(String, String), // department, formatted duration
    StandardTimeExhausted(String), // department

    // === INVOICE MESSAGES ===
    InvoiceNumber(String),
    ReturnCode(String),
    InvoiceTotals(f64, f64), // tax, total

    // === MASKING MESSAGES ===
    MaskedValue(String),
    NothingToMask,
}
