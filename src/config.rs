/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 评分服务地址
    pub api_base_url: String,
    /// 请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 报告导出目录
    pub report_folder: String,
    /// 主题偏好文件
    pub prefs_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 120,
            report_folder: "reports".to_string(),
            prefs_file: "aes_prefs.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("AES_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            report_folder: std::env::var("REPORT_FOLDER").unwrap_or(default.report_folder),
            prefs_file: std::env::var("PREFS_FILE").unwrap_or(default.prefs_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
