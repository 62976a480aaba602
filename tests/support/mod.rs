//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `locale` helpers (for example `StepLocale`) that parse locale
//! parameters in BDD steps so scenarios feed consistent values into list
//! construction and default locale resolution.
pub mod locale;
