use crate::error::{Result, UiautoError};
use crate::services::desktop::r#trait::WindowControl;
use crate::services::geometry::TargetRect;
use std::process::Command;
use tracing::debug;

pub struct WmctrlControl;

impl WmctrlControl {
    pub fn new() -> Self {
        Self
    }

    fn run(args: &[&str]) -> std::result::Result<(), String> {
        debug!("wmctrl {}", args.join(" "));

        let output = Command::new("wmctrl")
            .args(args)
            .output()
            .map_err(|e| format!("wmctrl не найден: {}", e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(format!(
                "wmctrl вернул ошибку ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
    }
}

impl WindowControl for WmctrlControl {
    fn focus_class(&self, window_class: &str) -> Result<()> {
        Self::run(&["-x", "-a", window_class]).map_err(UiautoError::Resolve)
    }

    fn move_active(&self, rect: TargetRect) -> Result<()> {
        let geometry = format!("0,{},{},{},{}", rect.x, rect.y, rect.width, rect.height);
        Self::run(&["-r", ":ACTIVE:", "-e", &geometry]).map_err(UiautoError::Placement)
    }
}
