//! HotkeyRegistry: таблица маршрутов "аккорд -> действие".
//!
//! Таблица строится один раз при запуске и затем передаётся во владение
//! слушателю клавиатуры; после этого она только читается. Каждое нажатие
//! обрабатывается синхронно через `dispatch`.

use crate::config::{AppBinding, Config};
use crate::error::Result;
use crate::events::{KeyChord, COMBO_SEPARATOR};
use crate::services::action_resolver;
use crate::services::desktop::Desktop;
use crate::services::window_ops::WindowOp;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Действие, привязанное к комбинации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LaunchOrFocus(AppBinding),
    WindowOp(WindowOp),
}

/// Запись таблицы маршрутов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Строка комбинации в том виде, в каком она собрана из конфигурации
    pub combo: String,
    pub action: Action,
}

#[derive(Debug, Default)]
pub struct HotkeyRegistry {
    routes: HashMap<KeyChord, Route>,
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собрать строку комбинации `<prefix>-<key>`
    pub fn combo(prefix: &str, key: &str) -> String {
        format!("{}{}{}", prefix, COMBO_SEPARATOR, key)
    }

    /// Построить таблицу из конфигурации. Отклонённые комбинации пишутся в лог и пропускаются.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        let app_prefix = &config.general.app_select_prefix;
        let window_prefix = &config.general.window_manage_prefix;

        for (key, binding) in &config.app_select {
            if let Err(e) = registry.register_app_binding(app_prefix, key, binding.clone()) {
                error!("Ошибка привязки клавиши для {}: {}", binding.command, e);
            }
        }
        info!("Клавиши назначены. {}-[клавиша] запускает или фокусирует приложение", app_prefix);

        for (key, action_name) in &config.window_manage {
            if let Err(e) = registry.register_window_action(window_prefix, key, action_name) {
                error!("Ошибка привязки клавиши управления окном '{}': {}", action_name, e);
            }
        }
        info!("Клавиши назначены. {}-[клавиша] управляет окнами", window_prefix);

        registry
    }

    pub fn register_app_binding(
        &mut self,
        prefix: &str,
        key: &str,
        binding: AppBinding,
    ) -> Result<KeyChord> {
        self.register(Self::combo(prefix, key), Action::LaunchOrFocus(binding))
    }

    pub fn register_window_action(
        &mut self,
        prefix: &str,
        key: &str,
        action_name: &str,
    ) -> Result<KeyChord> {
        self.register(
            Self::combo(prefix, key),
            Action::WindowOp(WindowOp::from_name(action_name)),
        )
    }

    fn register(&mut self, combo: String, action: Action) -> Result<KeyChord> {
        let chord: KeyChord = combo.parse()?;

        debug!("Привязка {} ({}) -> {:?}", combo, chord, action);
        let route = Route { combo, action };
        if let Some(previous) = self.routes.insert(chord, route) {
            // Последняя регистрация побеждает
            warn!("Комбинация {} переназначена (было: {})", chord, previous.combo);
        }

        Ok(chord)
    }

    pub fn lookup(&self, chord: &KeyChord) -> Option<&Route> {
        self.routes.get(chord)
    }

    #[allow(dead_code)]
    pub fn routes(&self) -> impl Iterator<Item = (&KeyChord, &Route)> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Выполнить действие, привязанное к аккорду. Возвращает false, если аккорд не назначен.
    pub fn dispatch(&self, chord: &KeyChord, desktop: &Desktop) -> bool {
        let Some(route) = self.lookup(chord) else {
            return false;
        };

        debug!("Сработала комбинация {}", route.combo);
        match &route.action {
            Action::LaunchOrFocus(binding) => {
                action_resolver::resolve(binding, desktop);
            }
            Action::WindowOp(op) => {
                op.perform(desktop);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::events::{KeyCode, Modifiers};
    use crate::services::desktop::fake::{Call, FakeDesktop};
    use crate::services::geometry::TargetRect;
    use std::collections::BTreeMap;

    fn ctrl_alt(key: u16) -> KeyChord {
        KeyChord::new(Modifiers::new().with_ctrl(true).with_alt(true), KeyCode::new(key))
    }

    fn super_alt(key: u16) -> KeyChord {
        KeyChord::new(Modifiers::new().with_super(true).with_alt(true), KeyCode::new(key))
    }

    #[test]
    fn test_combo_joins_with_hyphen() {
        assert_eq!(HotkeyRegistry::combo("Control-Mod1", "b"), "Control-Mod1-b");
    }

    #[test]
    fn test_register_app_binding_builds_route() {
        let mut registry = HotkeyRegistry::new();
        let binding = AppBinding::new("firefox", "firefox", "Firefox");

        let chord = registry
            .register_app_binding("Control-Mod1", "b", binding.clone())
            .unwrap();

        assert_eq!(chord, ctrl_alt(48));
        let route = registry.lookup(&chord).unwrap();
        assert_eq!(route.combo, "Control-Mod1-b");
        assert_eq!(route.action, Action::LaunchOrFocus(binding));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = HotkeyRegistry::new();
        registry
            .register_app_binding("Control-Mod1", "t", AppBinding::new("xterm", "xterm", "XTerm"))
            .unwrap();
        registry
            .register_app_binding("Control-Mod1", "t", AppBinding::new("kitty", "kitty", "kitty"))
            .unwrap();

        assert_eq!(registry.len(), 1);

        let fake = FakeDesktop::new();
        assert!(registry.dispatch(&ctrl_alt(20), &fake.desktop()));
        assert_eq!(
            fake.calls(),
            vec![Call::Query("kitty".into()), Call::Launch("kitty".into(), vec![])]
        );
    }

    #[test]
    fn test_spelling_variants_share_one_route() {
        let mut registry = HotkeyRegistry::new();
        registry.register_window_action("Mod4-Mod1", "m", "center").unwrap();
        registry
            .register_app_binding("super-alt", "M", AppBinding::new("kitty", "kitty", "kitty"))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(matches!(
            registry.lookup(&super_alt(50)).unwrap().action,
            Action::LaunchOrFocus(_)
        ));
    }

    #[test]
    fn test_rejected_combo_has_no_effect() {
        let mut registry = HotkeyRegistry::new();
        let result = registry.register_app_binding("Hyper", "b", AppBinding::new("x", "x", "x"));

        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_config_skips_invalid_and_keeps_the_rest() {
        let config = Config {
            general: GeneralConfig {
                app_select_prefix: "Control-Mod1".to_string(),
                window_manage_prefix: "Mod4-Mod1".to_string(),
            },
            input: Default::default(),
            app_select: BTreeMap::from([
                ("b".to_string(), AppBinding::new("firefox", "firefox", "Firefox")),
                ("nosuchkey".to_string(), AppBinding::new("xterm", "xterm", "XTerm")),
                ("t".to_string(), AppBinding::new("kitty --hold", "kitty", "kitty")),
            ]),
            window_manage: BTreeMap::from([
                ("m".to_string(), "center".to_string()),
                ("left".to_string(), "snap-left".to_string()),
            ]),
        };

        let registry = HotkeyRegistry::from_config(&config);

        assert_eq!(registry.len(), 4);
        assert!(registry.lookup(&ctrl_alt(48)).is_some());
        assert!(registry.lookup(&ctrl_alt(20)).is_some());
        assert_eq!(
            registry.lookup(&super_alt(50)).unwrap().action,
            Action::WindowOp(WindowOp::Center)
        );
        assert_eq!(
            registry.lookup(&super_alt(105)).unwrap().action,
            Action::WindowOp(WindowOp::Unsupported("snap-left".to_string()))
        );
    }

    #[test]
    fn test_default_config_registers_everything() {
        let registry = HotkeyRegistry::from_config(&Config::default());
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.routes().count(), 4);
    }

    #[test]
    fn test_dispatch_center() {
        let mut registry = HotkeyRegistry::new();
        let chord = registry.register_window_action("Mod4-Mod1", "m", "center").unwrap();
        let fake = FakeDesktop::new().with_screen(1920, 1080);

        assert!(registry.dispatch(&chord, &fake.desktop()));
        assert_eq!(
            fake.calls(),
            vec![
                Call::Display,
                Call::Move(TargetRect { x: 240, y: 135, width: 1440, height: 810 }),
            ]
        );
    }

    #[test]
    fn test_dispatch_running_app_focuses() {
        let mut registry = HotkeyRegistry::new();
        let chord = registry
            .register_app_binding("Control-Mod1", "b", AppBinding::new("firefox", "firefox", "Firefox"))
            .unwrap();
        let fake = FakeDesktop::new().with_process("firefox");

        assert!(registry.dispatch(&chord, &fake.desktop()));
        assert_eq!(fake.focuses(), 1);
        assert_eq!(fake.launches(), 0);
    }

    #[test]
    fn test_repeated_trigger_launches_once() {
        let mut registry = HotkeyRegistry::new();
        let chord = registry
            .register_app_binding("Control-Mod1", "t", AppBinding::new("kitty", "kitty", "kitty"))
            .unwrap();
        let fake = FakeDesktop::new().launch_registers_process();
        let desktop = fake.desktop();

        registry.dispatch(&chord, &desktop);
        registry.dispatch(&chord, &desktop);

        assert_eq!(fake.launches(), 1);
        assert_eq!(fake.focuses(), 1);
    }

    #[test]
    fn test_dispatch_unbound_chord() {
        let registry = HotkeyRegistry::from_config(&Config::default());
        let fake = FakeDesktop::new();

        assert!(!registry.dispatch(&ctrl_alt(16), &fake.desktop()));
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn test_failures_do_not_disturb_other_bindings() {
        let registry = HotkeyRegistry::from_config(&Config::default());
        let fake = FakeDesktop::new().failing_query();
        let desktop = fake.desktop();

        // Отказ pgrep для одной клавиши
        assert!(registry.dispatch(&ctrl_alt(48), &desktop));
        // Центрирование без дисплея
        assert!(registry.dispatch(&super_alt(50), &desktop));

        assert_eq!(fake.launches(), 0);
        assert_eq!(registry.len(), 4);
    }
}
