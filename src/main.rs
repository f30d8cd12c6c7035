use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use rope_tools::i18n::{self, keys, Translator};
use rope_tools::ui_cli::TextUi;
use rope_tools::ui_dialog::DialogUi;
use rope_tools::{app, config, logging};

/// 스플라이스/피팅에 필요한 로프 길이를 계산한다.
#[derive(Parser, Debug)]
#[command(name = "rope_tools")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 대화상자 모드로 실행
    #[arg(short, long)]
    dialog: bool,

    /// 언어 코드 (auto, en, ko)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로 (기본: ./rope_tools.toml)
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// 로그 상세도 증가 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 오류 로그만 출력
    #[arg(short, long)]
    quiet: bool,
}

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 선택한 화면 모드를 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_or_default(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_tracing(logging::log_level(args.verbose, args.quiet, &cfg.log_level));

    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let dialog = args.dialog || cfg.dialog;
    info!(lang = tr.language_code(), dialog, "starting");

    let outcome = if dialog {
        app::run(&mut DialogUi::new(&tr), &tr, &cfg)
    } else {
        app::run(&mut TextUi::stdio(&tr), &tr, &cfg)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "application error");
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
