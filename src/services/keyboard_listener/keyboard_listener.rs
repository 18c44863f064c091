use crate::config::Config;
use crate::debug_if_enabled;
use crate::error::{Result, UiautoError};
use crate::events::KeyState;
use crate::services::desktop::Desktop;
use crate::services::HotkeyRegistry;
use crate::utils::DeviceFinder;
use evdev::{Device, EventStream, EventType, InputEvent};
use std::io;
use tracing::{debug, error, info, warn};

use super::modifier_state::ModifierState;
use super::r#trait::KeyboardListenerTrait;

const ENODEV: i32 = 19;

/// Слушает клавиатуру через evdev без эксклюзивного захвата:
/// нажатия продолжают доходить до графической сессии.
pub struct RealKeyboardListener {
    registry: HotkeyRegistry,
    desktop: Desktop,
    events: EventStream,
    device_name: String,
    modifier_state: ModifierState,
}

impl RealKeyboardListener {
    pub fn new(config: &Config, registry: HotkeyRegistry, desktop: Desktop) -> Result<Self> {
        info!("Инициализация RealKeyboardListener");

        let device_path = DeviceFinder::find_keyboard_device(&config.input.device_path)?;

        let device = Device::open(&device_path).map_err(|e| {
            UiautoError::DeviceNotFound(format!(
                "Не удалось открыть устройство {:?}: {}",
                device_path, e
            ))
        })?;

        let device_name = device.name().unwrap_or("Unknown").to_string();
        info!("Устройство: {} ({})", device_name, device_path.display());
        info!("Физический путь: {:?}", device.physical_path());

        let events = device.into_event_stream().map_err(|e| {
            crate::uiauto_error!(internal, "Не удалось создать поток событий {:?}: {}", device_path, e)
        })?;

        Ok(Self {
            registry,
            desktop,
            events,
            device_name,
            modifier_state: ModifierState::new(),
        })
    }

    async fn run_impl(mut self) -> Result<()> {
        info!(
            "RealKeyboardListener запущен ({}), активных комбинаций: {}",
            self.device_name,
            self.registry.len()
        );

        loop {
            match self.events.next_event().await {
                Ok(event) => self.handle_event(event),
                Err(e) if is_device_gone(&e) => {
                    return Err(UiautoError::DeviceNotFound(format!(
                        "Устройство {} отключено: {}",
                        self.device_name, e
                    )));
                }
                Err(e) => {
                    error!("Ошибка чтения событий: {}", e);
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        if event.event_type() != EventType::KEY {
            return;
        }

        let Some(key_state) = KeyState::from_value(event.value()) else {
            debug!("Неизвестное значение события: {}", event.value());
            return;
        };

        let Some(chord) = self.modifier_state.track(event.code(), key_state) else {
            return;
        };

        debug_if_enabled!("Нажатие {} [{}]", chord, self.device_name);

        // Диспетчеризация синхронная: следующее событие читается после завершения действия
        if !self.registry.dispatch(&chord, &self.desktop) {
            debug_if_enabled!("Комбинация {} не назначена", chord);
        }
    }
}

/// Ошибка чтения, после которой устройство уже не вернётся (клавиатура отключена)
fn is_device_gone(err: &io::Error) -> bool {
    err.raw_os_error() == Some(ENODEV)
}

#[async_trait::async_trait]
impl KeyboardListenerTrait for RealKeyboardListener {
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}

impl Drop for RealKeyboardListener {
    fn drop(&mut self) {
        if self.modifier_state.to_modifiers().is_empty() {
            info!("Освобождение устройства {}", self.device_name);
        } else {
            warn!(
                "Освобождение устройства {} при зажатых модификаторах ({})",
                self.device_name,
                self.modifier_state.to_modifiers()
            );
        }
    }
}
