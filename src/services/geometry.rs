//! Вычисление прямоугольника для центрирования окна.
//!
//! Модуль не знает о способе получения размеров экрана: их поставляет
//! `DisplayProbe`. Здесь только арифметика и разбор текстового вывода xrandr.

use crate::error::Result;
use std::fmt;

/// Доля каждой стороны экрана, которую занимает окно после центрирования
pub const CENTER_SCALE: f64 = 0.75;

/// Размеры основного дисплея в пикселях
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

impl ScreenGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(crate::uiauto_error!(
                geometry,
                "нулевые размеры экрана {}x{}",
                width,
                height
            ));
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for ScreenGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Прямоугольник, который окно должно занять
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for TargetRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Прямоугольник размером `scale` от экрана, отцентрированный по обеим осям.
/// `scale` ограничивается диапазоном [0, 1], поэтому результат всегда внутри экрана.
pub fn compute_centered_rect(screen: ScreenGeometry, scale: f64) -> TargetRect {
    let scale = scale.clamp(0.0, 1.0);
    let width = (f64::from(screen.width) * scale).floor() as u32;
    let height = (f64::from(screen.height) * scale).floor() as u32;

    TargetRect {
        x: ((screen.width - width) / 2) as i32,
        y: ((screen.height - height) / 2) as i32,
        width,
        height,
    }
}

/// Найти размеры первого подключённого дисплея в выводе `xrandr`.
///
/// Берётся первая строка с маркером `connected` и первый токен вида
/// `<ширина>x<высота>[+x+y]` в ней; смещение отбрасывается.
pub fn parse_xrandr_output(output: &str) -> Result<ScreenGeometry> {
    let line = output
        .lines()
        .find(|line| line.split_whitespace().any(|token| token == "connected"))
        .ok_or_else(|| crate::uiauto_error!(geometry, "подключённый дисплей не найден"))?;

    let (width, height) = line
        .split_whitespace()
        .find_map(parse_resolution_token)
        .ok_or_else(|| crate::uiauto_error!(geometry, "не удалось разобрать разрешение в '{}'", line.trim()))?;

    ScreenGeometry::new(width, height)
}

fn parse_resolution_token(token: &str) -> Option<(u32, u32)> {
    let resolution = token.split('+').next()?;
    let (width, height) = resolution.split_once('x')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}
