//! 主题偏好存储 - 业务能力层
//!
//! 只负责"读写主题偏好"能力，不关心流程

use crate::config::Config;
use crate::models::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

/// 持久化的偏好内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// 主题名称（"dark" / "light"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// 主题偏好存储
///
/// 职责：
/// - 读写偏好文件中的主题名称
/// - 文件缺失或损坏一律视为"未设置"
pub struct PrefsStore {
    prefs_path: PathBuf,
}

impl PrefsStore {
    /// 创建新的偏好存储
    pub fn new(config: &Config) -> Self {
        Self {
            prefs_path: PathBuf::from(&config.prefs_file),
        }
    }

    /// 读取保存的主题
    ///
    /// # 返回
    /// 文件缺失、无法解析或名称无法识别时返回 None
    pub async fn load_theme(&self) -> Option<Theme> {
        let content = match fs::read_to_string(&self.prefs_path).await {
            Ok(content) => content,
            Err(_) => {
                debug!("偏好文件不存在: {}", self.prefs_path.display());
                return None;
            }
        };

        let prefs: Preferences = match toml::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("偏好文件解析失败 {}: {}", self.prefs_path.display(), e);
                return None;
            }
        };

        prefs.theme.as_deref().and_then(Theme::from_name)
    }

    /// 保存主题
    pub async fn save_theme(&self, theme: Theme) -> Result<()> {
        let prefs = Preferences {
            theme: Some(theme.name().to_string()),
        };
        let content = toml::to_string(&prefs).context("无法序列化偏好内容")?;
        fs::write(&self.prefs_path, content)
            .await
            .with_context(|| format!("无法写入偏好文件: {}", self.prefs_path.display()))?;

        debug!("主题偏好已保存: {}", theme);
        Ok(())
    }
}
