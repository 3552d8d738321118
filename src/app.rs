use std::path::Path;
use thiserror::Error;

use crate::catalog::{CatalogError, CompareList, FanCatalog, FanFilter};
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::performance::CurveError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 카탈로그 로드/편집 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 성능 곡선 오류
    #[error("성능 곡선 오류: {0}")]
    Curve(#[from] CurveError),
}

/// 한 번의 실행 동안 유지되는 고객/관리자 화면 상태.
#[derive(Debug, Clone)]
pub struct Session {
    pub catalog: FanCatalog,
    pub filter: FanFilter,
    pub compare: CompareList,
}

impl Session {
    pub fn new(catalog: FanCatalog) -> Self {
        Self {
            catalog,
            filter: FanFilter::default(),
            compare: CompareList::new(),
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    session: &mut Session,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(e) if is_end_of_input(&e) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let result = match choice {
            MenuChoice::Selection => ui_cli::handle_selection(tr, config, session),
            MenuChoice::Details => ui_cli::handle_details(tr, config, session),
            MenuChoice::Compare => ui_cli::handle_compare(tr, config, session),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Admin => ui_cli::handle_admin(tr, session),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config)
                .and_then(|()| config.save_to(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match result {
            // 입력이 닫히면 설정만 저장하고 끝낸다
            Err(e) if is_end_of_input(&e) => {
                config.save_to(config_path)?;
                break;
            }
            // 콘솔 자체가 끊기면 루프를 더 돌 수 없다
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                tracing::warn!("menu action failed: {e}");
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Ok(()) => {}
        }
    }
    Ok(())
}

fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_stdin_counts_as_exit() {
        let eof = AppError::Io(std::io::ErrorKind::UnexpectedEof.into());
        assert!(is_end_of_input(&eof));
        let other = AppError::Io(std::io::ErrorKind::BrokenPipe.into());
        assert!(!is_end_of_input(&other));
    }
}
