//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// カタログ整合性チェックで見つかった欠落（複数行）
    #[error("Catalog error: {}", .0.join("; "))]
    Catalog(Vec<String>),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_catalog_joins_gaps() {
        let error = Error::Catalog(vec![
            "color/negro: missing pt entry".to_string(),
            "roots/escasas: missing interpretation".to_string(),
        ]);
        assert_eq!(
            format!("{}", error),
            "Catalog error: color/negro: missing pt entry; roots/escasas: missing interpretation"
        );
    }
}
