use tracing::Level;
use tracing_subscriber::EnvFilter;

/// CLI 옵션과 설정값으로 로그 레벨을 결정한다.
///
/// `-q` 가 가장 우선이고, `-v` 횟수가 설정 파일 값보다 우선한다.
pub fn log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// stderr로 출력하는 tracing 구독자를 설치한다. 화면 출력(stdout)과 섞이지 않는다.
pub fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_everything() {
        assert_eq!(log_level(3, true, "trace"), Level::ERROR);
    }

    #[test]
    fn verbosity_overrides_config() {
        assert_eq!(log_level(1, false, "error"), Level::INFO);
        assert_eq!(log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(log_level(5, false, "warn"), Level::TRACE);
    }

    #[test]
    fn config_level_is_used_without_flags() {
        assert_eq!(log_level(0, false, "Debug"), Level::DEBUG);
        assert_eq!(log_level(0, false, "bogus"), Level::WARN);
    }
}
