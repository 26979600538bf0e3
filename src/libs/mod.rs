//! Core library modules for the washlog application.
//!
//! ## Features
//!
//! - **Compliance Engine**: average actual duration vs standard, deviation
//!   percentage, normal/warning/critical classification
//! - **Duration Formatting**: human-readable minute/hour strings
//! - **Invoice Helpers**: period-prefixed numbering, return codes, VAT math
//! - **Privacy Masking**: fail-open phone masking, customer-name masking
//! - **Infrastructure**: JSON configuration, platform data paths, console
//!   messaging, table views

pub mod compliance;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod invoice;
pub mod mask;
pub mod messages;
pub mod samples;
pub mod view;
