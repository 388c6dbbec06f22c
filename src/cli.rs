use clap::{Parser, Subcommand};
use soil_survey_common::{AttributeCategory, Language};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "soil-survey")]
#[command(about = "Análisis visual de suelos / Análise visual de solos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示言語 (es/pt)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub lang: Option<Language>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 引数の特徴量からサンプルを解析
    Analyze {
        /// 色
        #[arg(long)]
        color: Option<String>,

        /// テクスチャ
        #[arg(long)]
        texture: Option<String>,

        /// 形状・構造
        #[arg(long)]
        structure: Option<String>,

        /// 湿度
        #[arg(long)]
        moisture: Option<String>,

        /// 根の有無
        #[arg(long)]
        roots: Option<String>,

        /// 土壌写真（表示のみ、解析には使わない）
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 記録ストアに追記
        #[arg(long)]
        save: bool,

        /// PDF帳票を出力
        #[arg(long)]
        pdf: bool,

        /// 帳票内容をJSONで書き出す
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 対話的にサンプルを入力
    Interactive,

    /// 選択肢を一覧表示
    Options {
        /// 対象カテゴリ（省略時は全カテゴリ）
        #[arg(short, long)]
        category: Option<AttributeCategory>,
    },

    /// 参照画像を表示
    References {
        #[arg(short, long)]
        category: AttributeCategory,

        /// 選択値（表示言語のラベル）
        #[arg(long)]
        value: String,

        /// 次へN回
        #[arg(long, default_value = "0")]
        next: usize,

        /// 前へN回
        #[arg(long, default_value = "0")]
        prev: usize,
    },

    /// 保存済みの解析記録を表示
    Records {
        /// Excel(xlsx)に書き出す
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の言語を設定
        #[arg(long)]
        set_language: Option<Language>,

        /// 参照画像フォルダを設定
        #[arg(long)]
        set_reference_dir: Option<PathBuf>,

        /// 記録ストアの保存先を設定
        #[arg(long)]
        set_records_dir: Option<PathBuf>,

        /// PDFの出力先を設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,
    },
}
