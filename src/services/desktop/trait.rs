use crate::error::Result;
use crate::services::geometry::{ScreenGeometry, TargetRect};

/// Поиск процессов по подстроке командной строки
pub trait ProcessProbe: Send + Sync {
    fn is_running(&self, pattern: &str) -> Result<bool>;
}

/// Запуск процесса без ожидания его завершения
pub trait Launcher: Send + Sync {
    fn launch(&self, program: &str, args: &[String]) -> Result<()>;
}

/// Управление окнами сессии
pub trait WindowControl: Send + Sync {
    /// Вывести на передний план окно с указанным классом
    fn focus_class(&self, window_class: &str) -> Result<()>;

    /// Переместить и изменить размер активного окна
    fn move_active(&self, rect: TargetRect) -> Result<()>;
}

/// Источник размеров основного дисплея.
/// Способ получения (xrandr, протокол композитора) скрыт за этим трейтом.
pub trait DisplayProbe: Send + Sync {
    fn primary_geometry(&self) -> Result<ScreenGeometry>;
}

/// Набор внешних возможностей рабочего стола, с которыми работает диспетчер
pub struct Desktop {
    pub processes: Box<dyn ProcessProbe>,
    pub launcher: Box<dyn Launcher>,
    pub windows: Box<dyn WindowControl>,
    pub display: Box<dyn DisplayProbe>,
}

/// Factory function to create real desktop tools or logging stand-ins based on the dry_run flag
pub fn create_desktop(dry_run: bool) -> Desktop {
    if dry_run {
        Desktop {
            processes: Box::new(super::dry_run::DryRunDesktop),
            launcher: Box::new(super::dry_run::DryRunDesktop),
            windows: Box::new(super::dry_run::DryRunDesktop),
            display: Box::new(super::dry_run::DryRunDesktop),
        }
    } else {
        Desktop {
            processes: Box::new(super::pgrep::PgrepProbe::new()),
            launcher: Box::new(super::launcher::SpawnLauncher::new()),
            windows: Box::new(super::wmctrl::WmctrlControl::new()),
            display: Box::new(super::xrandr::XrandrProbe::new()),
        }
    }
}
