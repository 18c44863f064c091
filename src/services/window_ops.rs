use crate::error::Result;
use crate::services::desktop::Desktop;
use crate::services::geometry::{compute_centered_rect, TargetRect, CENTER_SCALE};
use std::fmt;
use tracing::{debug, error, info};

/// Именованная операция над активным окном
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOp {
    Center,
    /// Имя из конфигурации, для которого нет операции; при срабатывании ничего не делает
    Unsupported(String),
}

impl WindowOp {
    pub fn from_name(name: &str) -> Self {
        match name {
            "center" => WindowOp::Center,
            _ => WindowOp::Unsupported(name.to_string()),
        }
    }

    /// Выполнить операцию. Ошибки пишутся в лог; возвращается итоговый прямоугольник, если окно сдвинуто.
    pub fn perform(&self, desktop: &Desktop) -> Option<TargetRect> {
        match self {
            WindowOp::Center => match center_active_window(desktop) {
                Ok(rect) => Some(rect),
                Err(e) => {
                    error!("Центрирование окна отменено: {}", e);
                    None
                }
            },
            WindowOp::Unsupported(name) => {
                debug!("Операция '{}' не поддерживается, нажатие проигнорировано", name);
                None
            }
        }
    }
}

impl fmt::Display for WindowOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowOp::Center => write!(f, "center"),
            WindowOp::Unsupported(name) => write!(f, "{} (не поддерживается)", name),
        }
    }
}

fn center_active_window(desktop: &Desktop) -> Result<TargetRect> {
    // Размеры экрана запрашиваются заново при каждом нажатии
    let screen = desktop.display.primary_geometry()?;
    let rect = compute_centered_rect(screen, CENTER_SCALE);
    desktop.windows.move_active(rect)?;
    info!("Активное окно отцентрировано: экран {}, окно {}", screen, rect);
    Ok(rect)
}
