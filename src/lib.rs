//! soil-survey: 土壌サンプルの目視解析CLI

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod interactive;
pub mod records;
pub mod scanner;
pub mod session;
pub mod upload;
pub mod workflow;
