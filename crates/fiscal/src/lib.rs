//! # sambat-fiscal
//!
//! Fiscal years over Bikram Sambat dates. Nepal's fiscal year runs from
//! Shrawan 1 to the last day of Asar in the following year; other start and
//! end months are configurable through [`FiscalYearConfig`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_fiscal::{FiscalYearConfig, fiscal_year_report, get_fiscal_year};
//!
//! let config = FiscalYearConfig::default();
//! let date = Date::new(&table, 2080, 7, 15)?;
//! assert_eq!(get_fiscal_year(date, &config).to_string(), "2080/81");
//! println!("{}", fiscal_year_report(date, &config)?.to_json()?);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Start/end months and label template |
//! | `fiscal_year` | Fiscal year, quarter and boundaries |
//! | `range` | Fiscal year of each day in a range |
//! | `report` | Serializable fiscal year summary |
//! | `error` | Error types |

mod config;
mod error;
mod fiscal_year;
mod range;
mod report;

pub use config::{DEFAULT_LABEL_FORMAT, FiscalYearConfig};
pub use error::FiscalError;
pub use fiscal_year::{
    FiscalYear, end_of_fiscal_year, fiscal_year_today, get_fiscal_quarter, get_fiscal_year,
    is_within_fiscal_year, start_of_fiscal_year,
};
pub use range::{FiscalYearRange, fiscal_year_range};
pub use report::{FiscalYearReport, fiscal_year_report};
