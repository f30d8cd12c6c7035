use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// 기본 설정 파일 이름 (현재 디렉터리 기준).
pub const DEFAULT_CONFIG_FILE: &str = "rope_tools.toml";

/// 애플리케이션 설정을 표현한다. 모든 항목은 생략 가능하다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/ko)
    pub language: String,
    /// `<code>.toml` 언어팩이 들어있는 디렉터리
    pub language_pack_dir: Option<String>,
    /// true면 대화상자 모드로 시작한다.
    pub dialog: bool,
    /// trace/debug/info/warn/error
    pub log_level: String,
    /// 턱 횟수 입력의 기본값
    pub default_tuck_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            dialog: false,
            log_level: "warn".to_string(),
            default_tuck_count: 5,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// 지정한 경로(없으면 rope_tools.toml)의 설정을 로드한다.
///
/// 기본 경로에 파일이 없으면 기본 설정을 사용한다. 명시한 경로가 없으면 오류.
/// 설정은 읽기만 하며 다시 저장하지 않는다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let cfg = Config::from_toml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}
