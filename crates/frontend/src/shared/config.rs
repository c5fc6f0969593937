use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub report: ReportConfig,
    pub format: FormatConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormatConfig {
    /// Разделитель разрядов для целых чисел
    pub thousands_separator: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    /// Цвет линии и маркеров (любое значение CSS color)
    pub color: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[report]
title = "Отчет"

[format]
thousands_separator = ","

[chart]
color = "green"
width = 640
height = 280

[logging]
level = "debug"
"#;

/// Parse the embedded configuration.
pub fn load_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Config {
    /// Log level for `console_log`; unknown names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                title: "Отчет".to_string(),
            },
            format: FormatConfig {
                thousands_separator: ",".to_string(),
            },
            chart: ChartConfig {
                color: "green".to_string(),
                width: 640,
                height: 280,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.report.title, "Отчет");
        assert_eq!(config.format.thousands_separator, ",");
        assert_eq!(config.chart.color, "green");
    }

    #[test]
    fn test_embedded_config_matches_default_impl() {
        assert_eq!(load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_log_level() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.logging.level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.logging.level = "nonsense".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
