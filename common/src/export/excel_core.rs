//! Excel生成（共通ライブラリ）
//!
//! 記録ストア全体を1シートのワークブックにする

use crate::types::{Record, RECORD_HEADERS};
use rust_xlsxwriter::*;

/// 列幅（文字数単位）
const COLUMN_WIDTHS: [f64; 7] = [20.0, 9.0, 18.0, 14.0, 20.0, 10.0, 12.0];

pub const SHEET_NAME: &str = "analisis";

/// ワークブックをバッファに生成
pub fn generate_records_buffer(records: &[Record]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Left)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (col, header) in RECORD_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.fields().iter().enumerate() {
            worksheet
                .write_string_with_format(row as u32 + 1, col as u16, *value, &value_format)
                .map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
