//! Invoice numbering command.
//!
//! Generates the next invoice number for the current period, the return
//! code marking an existing invoice as returned/replaced, or the VAT/total
//! breakdown for a subtotal using the configured rate.

use crate::libs::{config::Config, invoice, messages::Message};
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct InvoiceArgs {
    /// The most recent invoice number; omit to start the sequence at 0001
    #[arg(short, long)]
    last: Option<String>,
    /// Produce the return code for this invoice number instead
    #[arg(short, long, value_name = "NUMBER", conflicts_with = "last")]
    return_of: Option<String>,
    /// Compute VAT and total for this subtotal using the configured rate
    #[arg(short, long)]
    subtotal: Option<f64>,
    /// Discount applied before tax when computing the total
    #[arg(short, long, requires = "subtotal", default_value_t = 0.0)]
    discount: f64,
}

pub fn cmd(invoice_args: InvoiceArgs) -> Result<()> {
    if let Some(original) = invoice_args.return_of {
        msg_print!(Message::ReturnCode(invoice::return_code(&original)));
        return Ok(());
    }

    if let Some(subtotal) = invoice_args.subtotal {
        let tax = invoice::calculate_tax(subtotal, Config::read()?.vat_rate());
        let total = invoice::calculate_total(subtotal, tax, invoice_args.discount);
        msg_print!(Message::InvoiceTotals(tax, total));
        return Ok(());
    }

    let today = Local::now().date_naive();
    let number = invoice::next_invoice_number(today, invoice_args.last.as_deref());
    msg_print!(Message::InvoiceNumber(number));

    Ok(())
}
