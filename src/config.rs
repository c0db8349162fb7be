//! 配置模块，负责加载token检查器的JSON配置文件

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 未指定路径时查找的默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "influxql_tokens.json";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 解析结果的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    /// 交互模式的提示符
    pub prompt: String,
    /// 历史记录文件，未设置时不保存历史
    pub history_file: Option<PathBuf>,
    pub output: OutputFormat,
    pub max_history: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            prompt: "influxql> ".to_string(),
            history_file: None,
            output: OutputFormat::Text,
            max_history: 1000,
        }
    }
}

impl InspectorConfig {
    /// 从JSON文件加载配置，缺失的字段使用默认值
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // 检查文件是否存在
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        // 读取文件内容
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // 解析JSON
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded inspector config from {}", path.display());
        Ok(config)
    }

    /// 加载指定路径的配置；未指定时使用 [`DEFAULT_CONFIG_FILE`]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// 指定的路径必须存在；只有默认文件缺失时才回退到默认配置。
    /// 默认文件存在但无法读取或解析时仍然返回错误。
    pub fn load_from(path: Option<&Path>, default: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => match Self::from_json_file(default) {
                Err(ConfigError::NotFound(_)) => {
                    log::debug!("no {}, using default config", default.display());
                    Ok(Self::default())
                }
                other => other,
            },
        }
    }
}
