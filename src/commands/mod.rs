pub mod init;
pub mod invoice;
pub mod mask;
pub mod remaining;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Compute the per-department time compliance report", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Show remaining time for an in-progress task", arg_required_else_help = true)]
    Remaining(remaining::RemainingArgs),
    #[command(about = "Generate the next invoice number or a return code")]
    Invoice(invoice::InvoiceArgs),
    #[command(about = "Mask a phone number or customer name", arg_required_else_help = true)]
    Mask(mask::MaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Remaining(args) => remaining::cmd(args),
            Commands::Invoice(args) => invoice::cmd(args),
            Commands::Mask(args) => mask::cmd(args),
        }
    }
}
