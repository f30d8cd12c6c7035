//! 로프 스플라이스 소요 길이 계산 엔진. 텍스트/대화상자 화면은 이 라이브러리를 호출만 한다.

pub mod app;
pub mod calculation;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod mixed_number;
pub mod report;
pub mod rope;
pub mod splice;
pub mod ui_cli;
pub mod ui_dialog;
