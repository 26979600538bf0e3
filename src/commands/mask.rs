//! Privacy masking command.
//!
//! Prints the masked form of a phone number and/or customer name for use
//! in shared views. Masking is fail-open: malformed phone numbers come
//! back unchanged.

use crate::libs::{mask, messages::Message};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MaskArgs {
    /// Phone number to mask
    #[arg(short, long)]
    phone: Option<String>,
    /// Customer name to mask
    #[arg(short, long)]
    name: Option<String>,
}

pub fn cmd(mask_args: MaskArgs) -> Result<()> {
    if mask_args.phone.is_none() && mask_args.name.is_none() {
        msg_warning!(Message::NothingToMask);
        return Ok(());
    }

    if let Some(phone) = mask_args.phone {
        msg_print!(Message::MaskedValue(mask::mask_phone(&phone)));
    }
    if let Some(name) = mask_args.name {
        msg_print!(Message::MaskedValue(mask::mask_name(&name)));
    }

    Ok(())
}
