//! 配置服务
//!
//! 配置以 JSON 形式保存在用户配置目录下，启动时读取、
//! 设置页修改后立即写回。文件缺失时使用默认配置。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 主题名："dark" 或 "light"
    pub theme: String,
    /// 语言代码："zh-CN" 或 "en-US"
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            language: "zh-CN".to_string(),
        }
    }
}

/// 配置读写接口
pub trait ConfigService {
    /// 读取配置，文件不存在时返回默认值
    fn load(&self) -> Result<AppConfig>;
    /// 写入配置，必要时创建目录
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件实现
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 默认存储位置：`<config_dir>/seamark/config.json`
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("seamark")
            .join("config.json");
        Self { path }
    }

    /// 指定存储路径（测试用）
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("读取配置文件失败: {}", self.path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("解析配置文件失败: {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, text)
            .with_context(|| format!("写入配置文件失败: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: "light".to_string(),
            language: "en-US".to_string(),
        };
        service.save(&config).unwrap();
        let loaded = service.load().unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.language, "en-US");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("absent.json"));
        let loaded = service.load().unwrap();
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.language, "zh-CN");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "language": "en-US" }"#).unwrap();
        let service = LocalConfigService::with_path(path);
        let loaded = service.load().unwrap();
        assert_eq!(loaded.theme, "dark");
        assert_eq!(loaded.language, "en-US");
    }

    #[test]
    fn test_load_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let service = LocalConfigService::with_path(path);
        assert!(service.load().is_err());
    }
}
