use crate::error::Result;
use crate::services::desktop::r#trait::{DisplayProbe, Launcher, ProcessProbe, WindowControl};
use crate::services::geometry::{ScreenGeometry, TargetRect};
use tracing::info;

/// Заглушка рабочего стола для режима сухого запуска: только пишет в лог
pub struct DryRunDesktop;

impl ProcessProbe for DryRunDesktop {
    fn is_running(&self, pattern: &str) -> Result<bool> {
        info!("[DRY RUN] pgrep -f '{}' -> не запущено", pattern);
        Ok(false)
    }
}

impl Launcher for DryRunDesktop {
    fn launch(&self, program: &str, args: &[String]) -> Result<()> {
        info!("[DRY RUN] Запуск: {} {:?}", program, args);
        Ok(())
    }
}

impl WindowControl for DryRunDesktop {
    fn focus_class(&self, window_class: &str) -> Result<()> {
        info!("[DRY RUN] Фокус на окно класса '{}'", window_class);
        Ok(())
    }

    fn move_active(&self, rect: TargetRect) -> Result<()> {
        info!("[DRY RUN] Перемещение активного окна в {}", rect);
        Ok(())
    }
}

impl DisplayProbe for DryRunDesktop {
    fn primary_geometry(&self) -> Result<ScreenGeometry> {
        ScreenGeometry::new(1920, 1080)
    }
}
