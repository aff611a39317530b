//! Terminal stand-ins for the page's submit button, alerts and form.

use client_core::{Alerts, MapFormInputs, SubmitControl};
use shared::domain::FormField;
use tracing::debug;

/// Submit "button" whose busy state is reported on stderr.
pub struct TerminalControl {
    label: String,
}

impl TerminalControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl SubmitControl for TerminalControl {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_disabled(&mut self, disabled: bool) {
        debug!(disabled, "submit control toggled");
    }

    fn set_busy_visible(&mut self, visible: bool) {
        if visible {
            eprintln!("{}", self.label);
        } else {
            debug!("busy indicator hidden");
        }
    }
}

pub struct StderrAlerts;

impl Alerts for StderrAlerts {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Collects raw form values from command-line arguments.
#[derive(Debug, Clone, clap::Args)]
pub struct FormArgs {
    /// Nitrogen (N) content in ppm.
    #[arg(long, allow_hyphen_values = true)]
    pub nitrogen: String,
    /// Phosphorus (P) content in ppm.
    #[arg(long, allow_hyphen_values = true)]
    pub phosphorus: String,
    /// Potassium (K) content in ppm.
    #[arg(long, allow_hyphen_values = true)]
    pub potassium: String,
    /// Temperature in °C.
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: String,
    /// Relative humidity in %.
    #[arg(long, allow_hyphen_values = true)]
    pub humidity: String,
    /// Soil pH.
    #[arg(long, allow_hyphen_values = true)]
    pub ph: String,
    /// Rainfall in mm.
    #[arg(long, allow_hyphen_values = true)]
    pub rainfall: String,
}

impl FormArgs {
    pub fn into_inputs(self) -> MapFormInputs {
        MapFormInputs::new()
            .with(FormField::Nitrogen, self.nitrogen)
            .with(FormField::Phosphorus, self.phosphorus)
            .with(FormField::Potassium, self.potassium)
            .with(FormField::Temperature, self.temperature)
            .with(FormField::Humidity, self.humidity)
            .with(FormField::Ph, self.ph)
            .with(FormField::Rainfall, self.rainfall)
    }
}
