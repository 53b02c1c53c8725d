//! Record filtering reports and run-scanning utilities.
//!
//! Each public entry point is a pure function that answers in JSON text:
//! [`filter_employees_json`], [`filter_people_xml`], [`vowel_runs_json`] and
//! [`increasing_run_json`]. Typed counterparts live in [`workflows`] and
//! [`scan`].

pub mod cli;
pub mod config;
pub mod error;
pub mod scan;
pub mod telemetry;
pub mod workflows;

pub use scan::{increasing_run_json, vowel_runs_json};
pub use workflows::employees::filter_employees_json;
pub use workflows::people::filter_people_xml;
