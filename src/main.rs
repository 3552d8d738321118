use std::path::PathBuf;

use clap::Parser;
use fan_selection_toolbox::app::{self, Session};
use fan_selection_toolbox::catalog::FanCatalog;
use fan_selection_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use fan_selection_toolbox::i18n::{self, keys, Translator};

/// 산업용 팬 선정/운전점 시뮬레이션 도구.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 팬 카탈로그 TOML 경로. 설정의 catalog_path보다 우선한다.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정과 카탈로그를 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // 프롬프트와 섞이지 않도록 로그는 stderr로 보낸다
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config load failed, using defaults: {err}");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = %lang, "translator ready");

    if let Err(err) = try_run(&cli, &mut cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), app::AppError> {
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| cfg.catalog_path.as_ref().map(PathBuf::from));
    let catalog = match catalog_path {
        Some(path) => FanCatalog::load(path)?,
        None => FanCatalog::builtin()?,
    };
    tracing::info!(fans = catalog.len(), "catalog ready");
    let mut session = Session::new(catalog);
    app::run(cfg, &cli.config, &mut session, tr)
}
