use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const INPUT_DIR: &str = "/dev/input";

/// Проверить права доступа к устройствам ввода
pub fn check_permissions() -> Result<()> {
    info!("Проверка прав доступа...");

    check_input_devices_access(Path::new(INPUT_DIR))?;

    // Для чтения клавиатуры root не нужен, достаточно группы input
    check_not_root();

    info!("Проверка прав доступа завершена успешно");
    Ok(())
}

fn check_input_devices_access(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        return Err(crate::uiauto_error!(
            permission,
            "Директория {} не существует",
            input_dir.display()
        ));
    }

    match fs::read_dir(input_dir) {
        Ok(_) => {
            info!("Доступ к {} подтвержден", input_dir.display());
            Ok(())
        }
        Err(e) => Err(crate::uiauto_error!(
            permission,
            "Нет доступа к {}: {}. {}",
            input_dir.display(),
            e,
            setup_hint()
        )),
    }
}

fn check_not_root() {
    match std::env::var("USER") {
        Ok(user) if user == "root" => {
            warn!("⚠️  Приложение запущено от имени root!");
            warn!("   Запущенные приложения унаследуют права root");
            warn!("   {}", setup_hint());
        }
        Ok(user) => {
            info!("Приложение запущено от имени пользователя: {}", user);
        }
        Err(_) => {
            warn!("Не удалось определить пользователя");
        }
    }
}

/// Команда для настройки прав доступа обычного пользователя
pub fn setup_hint() -> &'static str {
    "Добавьте пользователя в группу 'input': sudo usermod -a -G input $USER (затем перезайдите в систему)"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiautoError;

    #[test]
    fn test_setup_hint() {
        assert!(setup_hint().contains("usermod"));
    }

    #[test]
    fn test_missing_input_dir_is_permission_error() {
        let result = check_input_devices_access(Path::new("/non/existent/input"));
        assert!(matches!(result, Err(UiautoError::Permission(_))));
    }

    #[test]
    fn test_readable_dir_is_accepted() {
        assert!(check_input_devices_access(&std::env::temp_dir()).is_ok());
    }
}
