//! Configuration management for the washlog application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and cover the two things the commands need from the operator:
//!
//! - **Departments**: the standard (expected) task duration per laundry
//!   department, in minutes. This is the reference value the compliance
//!   engine measures observed averages against.
//! - **Billing**: VAT rate applied by the invoice helpers.
//!
//! A missing configuration file is not an error; `Config::read` falls back
//! to an empty default so read-only commands keep working before `init`
//! has ever run. The interactive setup wizard (`Config::init`) uses the
//! same module-selection pattern for choosing what to configure.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;

/// Configuration file name within the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default VAT rate (percent) applied when billing has not been configured.
pub const DEFAULT_VAT_RATE: f64 = 15.0;

/// A laundry department and its expected task duration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DepartmentConfig {
    /// Display name, also the lookup key for samples files.
    pub name: String,
    /// Standard task duration in minutes. The compliance engine accepts
    /// zero and negative values without failing, but the wizard only
    /// produces positive ones.
    pub standard_minutes: i64,
}

/// Billing settings used by the invoice helpers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BillingConfig {
    /// VAT rate in percent.
    pub vat_rate: f64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self { vat_rate: DEFAULT_VAT_RATE }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub departments: Vec<DepartmentConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to the default when the
    /// file does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Looks up the configured standard duration for a department.
    pub fn standard_for(&self, department: &str) -> Option<i64> {
        self.departments
            .iter()
            .find(|d| d.name == department)
            .map(|d| d.standard_minutes)
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration so re-running `init` amends
    /// rather than replaces settings the user does not touch.
    pub fn init() -> Result<Self> {
        let mut config = Config::read().unwrap_or_default();

        let modules = ["Departments", "Billing"];
        let selections = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select modules to configure")
            .items(&modules)
            .interact()?;

        for selected in selections {
            match modules[selected] {
                "Departments" => config.init_departments()?,
                "Billing" => config.init_billing()?,
                _ => unreachable!(),
            }
        }

        Ok(config)
    }

    /// Prompts for departments and their standard durations until the user
    /// submits an empty name.
    fn init_departments(&mut self) -> Result<()> {
        msg_print!(Message::ConfigDepartmentsHeader);

        loop {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Department name (empty to finish)")
                .allow_empty(true)
                .interact_text()?;
            let name = name.trim().to_string();
            if name.is_empty() {
                break;
            }

            let standard_minutes: i64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Standard duration for '{}' in minutes", name))
                .validate_with(|value: &i64| {
                    if *value > 0 {
                        Ok(())
                    } else {
                        Err("standard duration must be positive")
                    }
                })
                .interact_text()?;

            // Re-entering an existing department updates it in place.
            match self.departments.iter_mut().find(|d| d.name == name) {
                Some(existing) => existing.standard_minutes = standard_minutes,
                None => self.departments.push(DepartmentConfig { name, standard_minutes }),
            }
        }

        Ok(())
    }

    fn init_billing(&mut self) -> Result<()> {
        let current = self.billing.clone().unwrap_or_default();

        let vat_rate: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("VAT rate (%)")
            .default(current.vat_rate)
            .interact_text()?;

        self.billing = Some(BillingConfig { vat_rate });
        Ok(())
    }

    /// VAT rate to use for invoice arithmetic, configured or default.
    pub fn vat_rate(&self) -> f64 {
        self.billing.as_ref().map(|b| b.vat_rate).unwrap_or(DEFAULT_VAT_RATE)
    }
}
