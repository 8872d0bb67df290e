use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{Config, ConfigError};
use crate::contact::{ContactError, LogMailer};
use crate::error::CalcError;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error("문의 처리 오류: {0}")]
    Contact(#[from] ContactError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let catalog = Catalog::default();
    let mut mailer = LogMailer::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::BreakEven => ui_cli::handle_break_even(tr, config)?,
            MenuChoice::Roi => ui_cli::handle_roi(tr, config)?,
            MenuChoice::Diy => ui_cli::handle_diy(tr, config, &catalog)?,
            MenuChoice::Recommend => ui_cli::handle_recommend(tr, config, &catalog)?,
            MenuChoice::Contact => ui_cli::handle_contact(tr, &mut mailer)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr, config, &catalog),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                let lang = i18n::resolve_language(&config.language, None);
                *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
