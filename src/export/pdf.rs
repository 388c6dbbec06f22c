use crate::error::{Result, SoilSurveyError};
use printpdf::*;
use soil_survey_common::export::pdf_core::{build_report_lines, PdfTextLayout};
use soil_survey_common::Report;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// 帳票をPDFに描画する（テキストのみ、A4縦）
pub fn generate_pdf(report: &Report, output_path: &Path) -> Result<()> {
    let layout = PdfTextLayout::default();
    let lines = build_report_lines(report, layout.max_chars);
    let placed = layout.place(&lines);

    let (doc, page1, layer1) = PdfDocument::new(
        &report.title,
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SoilSurveyError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SoilSurveyError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    let mut layers = vec![doc.get_page(page1).get_layer(layer1)];

    for line in &placed {
        while line.page >= layers.len() {
            let (page, layer) = doc.add_page(
                Mm(layout.page_width_mm),
                Mm(layout.page_height_mm),
                "Layer 1",
            );
            layers.push(doc.get_page(page).get_layer(layer));
        }

        let font = if line.style.is_bold() { &bold } else { &regular };
        layers[line.page].use_text(
            line.text.as_str(),
            line.style.font_size(),
            Mm(line.x_mm),
            Mm(line.y_mm),
            font,
        );
    }

    tracing::debug!(
        "Rendered {} lines on {} page(s)",
        placed.len(),
        PdfTextLayout::page_count(&placed)
    );

    // 保存
    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| SoilSurveyError::PdfGeneration(format!("保存エラー: {:?}", e)))?;

    Ok(())
}
