//! 应用配置
//!
//! 配置文件为 `config.toml`，位于 `dirs::config_dir()/subreg/`，
//! 或由 `SUBREG_CONFIG` 指定。文件不存在时使用默认值，
//! 随后环境变量覆盖文件中的同名字段。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::i18n::Language;
use crate::view::theme::Theme;

const APP_DIR: &str = "subreg";
const CONFIG_FILE: &str = "config.toml";

/// 配置文件路径环境变量
pub const ENV_CONFIG: &str = "SUBREG_CONFIG";
pub const ENV_BASE_URL: &str = "SUBREG_BASE_URL";
pub const ENV_BASE_DOMAIN: &str = "SUBREG_BASE_DOMAIN";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端根地址
    pub base_url: String,
    /// 注册所用的基础域名，必须配置
    pub base_domain: Option<String>,
    pub language: String,
    pub theme: Theme,
    /// 未设置 `RUST_LOG` 时的日志级别
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            base_domain: None,
            language: "en-US".to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖配置，空值视为未设置
    #[must_use]
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(domain) = non_empty(ENV_BASE_DOMAIN) {
            self.base_domain = Some(domain);
        }
        self
    }

    /// 基础域名
    pub fn base_domain(&self) -> Result<&str> {
        self.base_domain
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "base_domain is not configured; set {ENV_BASE_DOMAIN} or `base_domain` in {CONFIG_FILE}"
                )
            })
    }

    /// 界面语言，无法识别时回退到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            tracing::warn!("Unknown language `{}`, falling back to en-US", self.language);
            Language::default()
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置路径：`SUBREG_CONFIG`，否则为用户配置目录
    pub fn from_env() -> Result<Self> {
        if let Some(path) = std::env::var_os(ENV_CONFIG) {
            return Ok(Self::new(path));
        }
        let dir = dirs::config_dir().context("Cannot determine the user config directory")?;
        Ok(Self::new(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }
}
