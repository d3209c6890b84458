use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::turbine::{DesignParameters, SweepRange};
use crate::units::TemperatureUnit;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 건구 온도 입력 단위
    pub input_temperature_unit: TemperatureUnit,
    /// 사이클 설계 변수
    pub design: DesignParameters,
    /// 스윕 범위
    pub sweep: SweepRange,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            input_temperature_unit: TemperatureUnit::Fahrenheit,
            design: DesignParameters::default(),
            sweep: SweepRange::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml 을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로에서 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        info!(path = %path.display(), "loaded config");
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "wrote default config");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 로드한 경로(없으면 config.toml)에 설정을 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn nested_sections_parse() {
        let src = r#"
language = "ko"
input_temperature_unit = "Celsius"

[design]
fuel_flow = 1500000.0

[sweep]
points = 5
"#;
        let cfg: Config = toml::from_str(src).unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.input_temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.design.fuel_flow, 1_500_000.0);
        assert_eq!(cfg.design.rho_air, 0.0629);
        assert_eq!(cfg.sweep.points, 5);
        assert_eq!(cfg.sweep.start_f, 60.0);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("gt_perf_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);
        let cfg = load_or_default_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.design, DesignParameters::default());
        let again = load_or_default_from(&path).unwrap();
        assert_eq!(again, cfg);
        let _ = fs::remove_dir_all(&dir);
    }
}
