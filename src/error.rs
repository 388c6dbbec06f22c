use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilSurveyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("対応していない画像形式です（jpg/jpeg/png）: {0}")]
    UnsupportedImage(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("記録ストアエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] soil_survey_common::Error),
}

pub type Result<T> = std::result::Result<T, SoilSurveyError>;
