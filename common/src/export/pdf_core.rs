//! PDF export core utilities.
//!
//! 帳票を行単位に分解し、折り返しと改ページ位置を計算する（mm単位）。
//! 実際の描画はCLI側の printpdf ラッパーが行う。

use crate::report::Report;

/// A4サイズ（mm）
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// pt → mm (1pt = 25.4/72 mm)
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// 行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Subtitle,
    Heading,
    Body,
}

impl LineStyle {
    pub fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => 16.0,
            LineStyle::Subtitle => 11.0,
            LineStyle::Heading => 13.0,
            LineStyle::Body => 11.0,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, LineStyle::Title | LineStyle::Heading)
    }

    pub fn is_centered(self) -> bool {
        matches!(self, LineStyle::Title | LineStyle::Subtitle)
    }

    /// 行送り（mm）
    pub fn line_height_mm(self) -> f32 {
        match self {
            LineStyle::Title => 10.0,
            LineStyle::Subtitle => 8.0,
            LineStyle::Heading => 10.0,
            LineStyle::Body => 7.0,
        }
    }
}

/// 配置前の論理行
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Text(LineStyle, String),
    /// 縦方向の空き（mm）
    Gap(f32),
}

/// ページ上に配置済みの行
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    /// ベースラインのY座標（ページ下端基準）
    pub y_mm: f32,
    pub style: LineStyle,
    pub text: String,
}

/// ページレイアウト
#[derive(Debug, Clone)]
pub struct PdfTextLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// 本文1行あたりの最大文字数
    pub max_chars: usize,
}

impl Default for PdfTextLayout {
    fn default() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_mm: 10.0,
            max_chars: 95,
        }
    }
}

impl PdfTextLayout {
    /// Helveticaの平均字幅から文字列幅を概算（mm）
    pub fn estimate_width_mm(text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
    }

    fn line_x(&self, style: LineStyle, text: &str) -> f32 {
        if style.is_centered() {
            let width = Self::estimate_width_mm(text, style.font_size());
            ((self.page_width_mm - width) / 2.0).max(self.margin_mm)
        } else {
            self.margin_mm
        }
    }

    /// 行をページに配置する
    pub fn place(&self, lines: &[ReportLine]) -> Vec<PlacedLine> {
        let top = self.page_height_mm - self.margin_mm;
        let bottom = self.margin_mm;

        let mut placed = Vec::new();
        let mut page = 0;
        let mut cursor = top;

        for line in lines {
            match line {
                ReportLine::Gap(gap) => {
                    cursor -= gap;
                }
                ReportLine::Text(style, text) => {
                    let height = style.line_height_mm();
                    if cursor - height < bottom {
                        page += 1;
                        cursor = top;
                    }
                    cursor -= height;
                    placed.push(PlacedLine {
                        page,
                        x_mm: self.line_x(*style, text),
                        y_mm: cursor,
                        style: *style,
                        text: text.clone(),
                    });
                }
            }
        }

        placed
    }

    pub fn page_count(placed: &[PlacedLine]) -> usize {
        placed.iter().map(|l| l.page + 1).max().unwrap_or(1)
    }
}

/// 単語境界で折り返す（1語が長すぎる場合は文字数で分割）
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_wrapped(lines: &mut Vec<ReportLine>, text: &str, max_chars: usize) {
    for wrapped in wrap_text(text, max_chars) {
        lines.push(ReportLine::Text(LineStyle::Body, wrapped));
    }
}

/// 帳票を論理行に分解する
pub fn build_report_lines(report: &Report, max_chars: usize) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::Text(LineStyle::Title, report.title.clone()),
        ReportLine::Text(LineStyle::Subtitle, report.generated_at.clone()),
        ReportLine::Gap(6.0),
        ReportLine::Text(LineStyle::Heading, report.summary_title.clone()),
    ];

    for summary in report.summary_lines() {
        push_wrapped(&mut lines, &summary, max_chars);
    }
    if let Some(note) = &report.image_note {
        push_wrapped(&mut lines, &format!("- {}", note), max_chars);
    }
    lines.push(ReportLine::Gap(2.0));

    lines.push(ReportLine::Text(LineStyle::Heading, report.interpretation_title.clone()));
    for fragment in report.fragments.iter().filter(|f| !f.is_empty()) {
        push_wrapped(&mut lines, fragment, max_chars);
    }
    lines.push(ReportLine::Gap(2.0));

    let details = report.structure_detail_lines();
    if !details.is_empty() {
        lines.push(ReportLine::Text(LineStyle::Heading, report.structure_title.clone()));
        for detail in &details {
            push_wrapped(&mut lines, detail, max_chars);
        }
        lines.push(ReportLine::Gap(2.0));
    }

    lines.push(ReportLine::Text(LineStyle::Heading, report.recommendations_title.clone()));
    for rec in &report.recommendations {
        push_wrapped(&mut lines, &format!("- {}", rec), max_chars);
    }

    lines
}
