//! 显示主题

/// 显示主题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// 获取持久化用的名称
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// 从持久化的名称解析（精确匹配，其余值视为未设置）
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// 切换到另一个主题
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 未保存偏好时，按系统环境推断主题
    ///
    /// 终端通过 COLORFGBG 环境变量暴露前景/背景色，无法推断时回退到浅色。
    pub fn system_default() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| Self::from_colorfgbg(&v))
            .unwrap_or(Theme::Light)
    }

    /// 从 COLORFGBG 的值推断主题（格式如 "15;0"，最后一段为背景色号）
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        // 7 和 15 是浅色背景，其余色号视为深色
        if bg == 7 || bg == 15 {
            Some(Theme::Light)
        } else {
            Some(Theme::Dark)
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
