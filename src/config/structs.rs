use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BackendKind {
    /// Fabricated records, no network
    #[default]
    Mock,
    /// Real HTTP calls against `api.base_url`
    Http,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - api: 远端地址、超时、代理前缀、后端类型
/// - mock: 模拟延迟与数据生成参数
/// - session: 会话存储文件
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：QL，分隔符：__
    /// 示例：QL__API__TIMEOUT_SECS=5
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix("QL")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Dev proxy prefix stripped before forwarding to `base_url`
    #[serde(default = "default_proxy_prefix")]
    pub proxy_prefix: String,
    #[serde(default)]
    pub backend: BackendKind,
}

/// 模拟后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_write_delay_ms")]
    pub create_delay_ms: u64,
    #[serde(default = "default_write_delay_ms")]
    pub update_delay_ms: u64,
    #[serde(default = "default_write_delay_ms")]
    pub delete_delay_ms: u64,
    #[serde(default = "default_query_delay_ms")]
    pub query_delay_ms: u64,
    /// Probability that a generated record is already expired
    #[serde(default = "default_expired_ratio")]
    pub expired_ratio: f64,
    #[serde(default = "default_query_total")]
    pub query_total: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl MockConfig {
    /// Same data parameters, no artificial latency.
    pub fn without_delays() -> Self {
        Self {
            create_delay_ms: 0,
            update_delay_ms: 0,
            delete_delay_ms: 0,
            query_delay_ms: 0,
            ..Self::default()
        }
    }
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// JSON file holding client state; in-memory when unset
    #[serde(default)]
    pub file: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "https://api.server.test/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_proxy_prefix() -> String {
    "/api".to_string()
}

fn default_write_delay_ms() -> u64 {
    500
}

fn default_query_delay_ms() -> u64 {
    300
}

fn default_expired_ratio() -> f64 {
    0.7
}

fn default_query_total() -> u64 {
    50
}

fn default_max_page_size() -> u64 {
    20
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            proxy_prefix: default_proxy_prefix(),
            backend: BackendKind::default(),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            create_delay_ms: default_write_delay_ms(),
            update_delay_ms: default_write_delay_ms(),
            delete_delay_ms: default_write_delay_ms(),
            query_delay_ms: default_query_delay_ms(),
            expired_ratio: default_expired_ratio(),
            query_total: default_query_total(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
