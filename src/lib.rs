//! 제품 사이트의 계산기 로직을 라이브러리로 분리하여 CLI와 GUI가 같이 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod diy;
pub mod error;
pub mod finance;
pub mod i18n;
pub mod logging;
pub mod recommend;
pub mod report;
pub mod ui_cli;
