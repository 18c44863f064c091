use crate::error::Result;
use crate::services::desktop::r#trait::DisplayProbe;
use crate::services::geometry::{parse_xrandr_output, ScreenGeometry};
use std::process::Command;

pub struct XrandrProbe;

impl XrandrProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProbe for XrandrProbe {
    fn primary_geometry(&self) -> Result<ScreenGeometry> {
        let output = Command::new("xrandr")
            .output()
            .map_err(|e| crate::uiauto_error!(geometry, "xrandr не найден: {}", e))?;

        if !output.status.success() {
            return Err(crate::uiauto_error!(
                geometry,
                "xrandr вернул ошибку: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        parse_xrandr_output(&String::from_utf8_lossy(&output.stdout))
    }
}
