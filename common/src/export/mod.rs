//! Export core modules shared by the CLI.

pub mod pdf_core;

#[cfg(feature = "excel")]
pub mod excel_core;
