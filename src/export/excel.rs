//! Excel出力（記録ストア一覧）

use crate::error::{Result, SoilSurveyError};
use soil_survey_common::export::excel_core::generate_records_buffer;
use soil_survey_common::Record;
use std::path::Path;

pub fn generate_records_workbook(records: &[Record], output_path: &Path) -> Result<()> {
    let buffer = generate_records_buffer(records).map_err(SoilSurveyError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    tracing::info!("Wrote {} record(s) to {}", records.len(), output_path.display());
    Ok(())
}
