//! Fiscal year configuration.

use crate::error::FiscalError;
use crate::fiscal_year::FiscalYear;

/// Default label template, e.g. `2080/81`.
pub const DEFAULT_LABEL_FORMAT: &str = "{start_year}/{end_yy}";

/// Configuration for fiscal year calculations.
///
/// The fiscal year starts on the first day of `start_month` and ends on the
/// last day of `end_month`, the month before it, twelve months later. Nepal's
/// government fiscal year runs from Shrawan (4) to Asar (3), which is the
/// default.
///
/// # Example
///
/// ```ignore
/// use sambat_fiscal::FiscalYearConfig;
///
/// let config = FiscalYearConfig::new(1, 12)?
///     .with_label_format("FY{start_yyyy}");
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearConfig {
    start_month: u8,
    end_month: u8,
    label_format: String,
}

impl FiscalYearConfig {
    /// Creates a configuration with the default label template.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::InvalidMonth`] if either month is outside
    /// 1..=12 and [`FiscalError::UnclosedYear`] if `end_month` is not the
    /// month before `start_month`.
    pub fn new(start_month: u8, end_month: u8) -> Result<Self, FiscalError> {
        let config = Self {
            start_month,
            end_month,
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the template used for report labels.
    pub fn with_label_format(mut self, template: impl Into<String>) -> Self {
        self.label_format = template.into();
        self
    }

    /// Returns the first month of the fiscal year.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Returns the last month of the fiscal year.
    pub fn end_month(&self) -> u8 {
        self.end_month
    }

    /// Returns the report label template.
    pub fn label_format(&self) -> &str {
        &self.label_format
    }

    /// Validates this configuration.
    ///
    /// Checks both months, checks that they bound twelve months and renders
    /// the label template once so that a bad placeholder is reported up front.
    pub fn validate(&self) -> Result<(), FiscalError> {
        for (field, month) in [("start_month", self.start_month), ("end_month", self.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(FiscalError::InvalidMonth { field, month });
            }
        }
        if self.end_month != (self.start_month + 10) % 12 + 1 {
            return Err(FiscalError::UnclosedYear {
                start_month: self.start_month,
                end_month: self.end_month,
            });
        }
        FiscalYear::new(2080).format(&self.label_format)?;
        Ok(())
    }
}

impl Default for FiscalYearConfig {
    fn default() -> Self {
        Self {
            start_month: 4,
            end_month: 3,
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
        }
    }
}
