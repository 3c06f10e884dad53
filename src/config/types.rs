//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 物品接口配置
    #[serde(default)]
    pub items: ItemsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `POST /items` 的响应形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateResponseMode {
    /// 返回创建后的完整列表
    #[default]
    Collection,
    /// 回显新建的记录: `{"item": ..., "name": ..., "age": ...}`
    Created,
}

impl CreateResponseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreateResponseMode::Collection => "collection",
            CreateResponseMode::Created => "created",
        }
    }
}

/// 物品接口配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsConfig {
    #[serde(default)]
    pub create_response: CreateResponseMode,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.items.create_response, CreateResponseMode::Collection);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_create_response_mode_is_lowercase() {
        let config: ItemsConfig =
            serde_json::from_value(serde_json::json!({"create_response": "created"})).unwrap();
        assert_eq!(config.create_response, CreateResponseMode::Created);
        assert_eq!(config.create_response.as_str(), "created");
    }
}
