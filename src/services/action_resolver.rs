//! Решение "запустить или сфокусировать" для привязанного приложения.

use crate::config::AppBinding;
use crate::error::Result;
use crate::services::desktop::Desktop;
use tracing::{debug, error, info, warn};

/// Чем закончилась обработка привязки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Приложение уже запущено, его окно выведено на передний план
    Focused,
    /// Приложение запущено заново
    Launched,
    /// Приложение запущено, но класс окна не задан: фокусировка пропущена
    FocusSkipped,
    /// Ошибка записана в лог, нажатие ни на что не повлияло
    Failed,
}

/// Разбить команду на исполняемый файл и аргументы по пробелам.
/// Кавычки и экранирование не поддерживаются.
pub fn split_command(command: &str) -> Option<(&str, Vec<String>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.map(str::to_string).collect()))
}

/// Сфокусировать уже запущенное приложение или запустить его.
/// Ошибки не выходят наружу: они пишутся в лог, и вызов просто ничего не делает.
pub fn resolve(binding: &AppBinding, desktop: &Desktop) -> Resolution {
    match try_resolve(binding, desktop) {
        Ok(resolution) => resolution,
        Err(e) => {
            error!("Не удалось обработать '{}': {}", binding.command, e);
            Resolution::Failed
        }
    }
}

fn try_resolve(binding: &AppBinding, desktop: &Desktop) -> Result<Resolution> {
    // Пустой process_name всегда означает "не запущено"
    let running = !binding.process_name.is_empty()
        && desktop.processes.is_running(&binding.process_name)?;

    if running {
        if binding.window_class.is_empty() {
            warn!(
                "'{}' уже запущен, но window_class не задан - фокусировка пропущена",
                binding.process_name
            );
            return Ok(Resolution::FocusSkipped);
        }

        debug!("'{}' уже запущен, фокусируем '{}'", binding.process_name, binding.window_class);
        desktop.windows.focus_class(&binding.window_class)?;
        info!("Окно '{}' выведено на передний план", binding.window_class);
        return Ok(Resolution::Focused);
    }

    let (program, args) = split_command(&binding.command)
        .ok_or_else(|| crate::uiauto_error!(resolve, "пустая команда"))?;
    desktop.launcher.launch(program, &args)?;
    Ok(Resolution::Launched)
}
