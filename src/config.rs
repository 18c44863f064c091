use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Конфигурация, которая записывается при первом запуске
pub const DEFAULT_CONFIG: &str = r#"[general]
app_select_prefix = "Control-Mod1"
window_manage_prefix = "Mod4-Mod1"

[input]
device_path = "auto"

[app_select]
b = { command = "firefox", process_name = "firefox", window_class = "Firefox" }
t = { command = "kitty", process_name = "kitty", window_class = "kitty" }
f = { command = "dolphin", process_name = "dolphin", window_class = "dolphin" }
# Добавьте свои приложения, например:
# c = { command = "chromium", process_name = "chromium", window_class = "Chromium" }

[window_manage]
m = "center"
"#;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub general: GeneralConfig,
    #[serde(default)]
    pub input: InputConfig,
    /// Клавиша -> приложение
    #[serde(default)]
    pub app_select: BTreeMap<String, AppBinding>,
    /// Клавиша -> имя операции над окном
    #[serde(default)]
    pub window_manage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub app_select_prefix: String,
    pub window_manage_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub device_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            device_path: "auto".to_string(),
        }
    }
}

/// Описание приложения, привязанного к одной клавише
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppBinding {
    /// Исполняемый файл и аргументы через пробел
    pub command: String,
    /// Подстрока командной строки процесса; пустая означает "не запущено"
    #[serde(default)]
    pub process_name: String,
    #[serde(default)]
    pub window_class: String,
}

impl AppBinding {
    pub fn new(
        command: impl Into<String>,
        process_name: impl Into<String>,
        window_class: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            process_name: process_name.into(),
            window_class: window_class.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let app = |command: &str, class: &str| AppBinding::new(command, command, class);

        Self {
            general: GeneralConfig {
                app_select_prefix: "Control-Mod1".to_string(),
                window_manage_prefix: "Mod4-Mod1".to_string(),
            },
            input: InputConfig::default(),
            app_select: BTreeMap::from([
                ("b".to_string(), app("firefox", "Firefox")),
                ("t".to_string(), app("kitty", "kitty")),
                ("f".to_string(), app("dolphin", "dolphin")),
            ]),
            window_manage: BTreeMap::from([("m".to_string(), "center".to_string())]),
        }
    }
}

impl Config {
    /// Путь по умолчанию: ~/.config/uiauto/uiauto.conf
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Не удалось определить домашний каталог")?;
        Ok(home.join(".config").join("uiauto").join("uiauto.conf"))
    }

    /// Загрузить конфигурацию, предварительно записав её по умолчанию, если файла нет
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            if let Some(dir) = config_path.parent() {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Не удалось создать каталог конфигурации {:?}", dir)
                })?;
            }

            fs::write(config_path, DEFAULT_CONFIG).with_context(|| {
                format!("Не удалось записать конфигурацию по умолчанию в {:?}", config_path)
            })?;
            info!("Создан файл конфигурации по умолчанию: {}", config_path.display());
        }

        Self::load(config_path)
    }

    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        Self::extract(Figment::new().merge(Toml::file(config_path)))
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    /// Разобрать конфигурацию из строки TOML (с учётом переменных окружения)
    #[allow(dead_code)]
    pub fn from_toml_str(document: &str) -> Result<Self> {
        Self::extract(Figment::new().merge(Toml::string(document)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .merge(Env::prefixed("UIAUTO_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.app_select_prefix.trim().is_empty() {
            anyhow::bail!("app_select_prefix не может быть пустым");
        }

        if self.general.window_manage_prefix.trim().is_empty() {
            anyhow::bail!("window_manage_prefix не может быть пустым");
        }

        if self.input.device_path.trim().is_empty() {
            anyhow::bail!("input.device_path не может быть пустым (используйте \"auto\")");
        }

        for (key, binding) in &self.app_select {
            if binding.command.trim().is_empty() {
                anyhow::bail!("Пустая команда для клавиши '{}' в [app_select]", key);
            }
        }

        Ok(())
    }
}
