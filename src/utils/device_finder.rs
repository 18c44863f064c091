use crate::error::{Result, UiautoError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const BY_ID_DIR: &str = "/dev/input/by-id";
const INPUT_DIR: &str = "/dev/input";

/// Поиск клавиатуры среди устройств evdev
pub struct DeviceFinder;

impl DeviceFinder {
    /// Найти клавиатурное устройство: явный путь или "auto"
    pub fn find_keyboard_device(device_path: &str) -> Result<PathBuf> {
        if device_path != "auto" {
            let path = PathBuf::from(device_path);
            return if path.exists() {
                info!("Используется указанное устройство: {:?}", path);
                Ok(path)
            } else {
                UiautoError::device_not_found(format!("Указанное устройство не найдено: {:?}", path))
            };
        }

        Self::auto_find_keyboard()
    }

    fn auto_find_keyboard() -> Result<PathBuf> {
        info!("Начинаем автопоиск клавиатурного устройства...");

        if let Ok(device) = Self::find_by_id() {
            info!("Найдено устройство по ID: {:?}", device);
            return Ok(device);
        }

        if let Ok(device) = Self::find_by_event_devices() {
            info!("Найдено устройство среди event устройств: {:?}", device);
            return Ok(device);
        }

        UiautoError::device_not_found(
            "Не удалось найти подходящее клавиатурное устройство. \
             Убедитесь, что пользователь добавлен в группу 'input'",
        )
    }

    /// Приоритет ссылки из /dev/input/by-id по её имени; None - не клавиатура
    fn by_id_priority(name: &str) -> Option<u32> {
        let lower = name.to_lowercase();
        if !lower.contains("event") || lower.contains("mouse") {
            return None;
        }

        if name.ends_with("event-kbd") {
            Some(100)
        } else if lower.contains("keyboard") {
            Some(50)
        } else if lower.contains("kbd") {
            Some(10)
        } else {
            None
        }
    }

    fn find_by_id() -> Result<PathBuf> {
        let by_id_dir = Path::new(BY_ID_DIR);

        if !by_id_dir.exists() {
            debug!("Директория {} не существует", BY_ID_DIR);
            return UiautoError::device_not_found("Директория by-id не найдена");
        }

        let entries = fs::read_dir(by_id_dir).map_err(|e| {
            crate::uiauto_error!(permission, "Нет доступа к {}: {}", BY_ID_DIR, e)
        })?;

        let mut keyboards = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

            let Some(priority) = Self::by_id_priority(name) else {
                continue;
            };

            if !Self::is_device_accessible(&path) {
                warn!("Устройство {:?} недоступно", path);
                continue;
            }

            if Self::is_keyboard_device(&path) {
                info!("Добавлена клавиатура: {} (приоритет: {})", name, priority);
                keyboards.push((path, priority));
            }
        }

        keyboards.sort_by(|a, b| b.1.cmp(&a.1));
        match keyboards.into_iter().next() {
            Some((keyboard, _)) => Ok(keyboard),
            None => UiautoError::device_not_found("Клавиатурное устройство не найдено в by-id"),
        }
    }

    fn find_by_event_devices() -> Result<PathBuf> {
        let entries = fs::read_dir(INPUT_DIR).map_err(|e| {
            crate::uiauto_error!(permission, "Нет доступа к {}: {}", INPUT_DIR, e)
        })?;

        let mut event_devices = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_event = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("event"));
            if is_event {
                event_devices.push(path);
            }
        }

        event_devices.sort();

        for device_path in event_devices {
            debug!("Проверяем устройство: {:?}", device_path);
            if Self::is_device_accessible(&device_path) && Self::is_keyboard_device(&device_path) {
                return Ok(device_path);
            }
        }

        UiautoError::device_not_found("Не найдено доступное клавиатурное устройство среди event устройств")
    }

    fn is_keyboard_device(device_path: &Path) -> bool {
        let device = match evdev::Device::open(device_path) {
            Ok(device) => device,
            Err(e) => {
                debug!("Не удалось открыть устройство {:?}: {}", device_path, e);
                return false;
            }
        };

        let device_name = device.name().unwrap_or("Unknown").to_lowercase();
        if ["mouse", "touchpad", "trackpoint"].iter().any(|m| device_name.contains(m)) {
            debug!("Исключаем устройство как мышь/тачпад: {:?} ({})", device_path, device_name);
            return false;
        }

        // У настоящей клавиатуры есть буквы, пробел, Enter и много других клавиш
        let has_keys = device.supported_keys().is_some_and(|keys| {
            keys.contains(evdev::KeyCode::KEY_A)
                && keys.contains(evdev::KeyCode::KEY_SPACE)
                && keys.contains(evdev::KeyCode::KEY_ENTER)
                && keys.iter().count() > 20
        });

        debug!("Устройство {:?} ({}) клавиатура: {}", device_path, device_name, has_keys);
        has_keys
    }

    fn is_device_accessible(device_path: &Path) -> bool {
        match fs::File::open(device_path) {
            Ok(_) => true,
            Err(e) => {
                debug!("Устройство {:?} недоступно: {}", device_path, e);
                false
            }
        }
    }
}
