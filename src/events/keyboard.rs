use crate::error::{Result, UiautoError};
use crate::mappings::KeyNameToEvdevCode;
use std::fmt;
use std::str::FromStr;

/// Разделитель между префиксом и клавишей в строке комбинации
pub const COMBO_SEPARATOR: char = '-';

/// Состояние клавиши
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
    Repeat,
}

impl KeyState {
    /// Значение поля `value` evdev события
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(KeyState::Released),
            1 => Some(KeyState::Pressed),
            2 => Some(KeyState::Repeat),
            _ => None,
        }
    }
}

/// Код клавиши (evdev коды)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub fn new(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match KeyNameToEvdevCode::reverse_translate(self.0) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "KEY_{}", self.0),
        }
    }
}

/// Модификаторы клавиш
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    #[allow(dead_code)]
    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    #[allow(dead_code)]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    #[allow(dead_code)]
    pub fn with_super(mut self, super_key: bool) -> Self {
        self.super_key = super_key;
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.super_key
    }

    /// Включить модификатор по токену комбинации (имена X11 и привычные синонимы).
    /// Возвращает false, если токен не является модификатором.
    pub fn apply_token(&mut self, token: &str) -> bool {
        match token.to_lowercase().as_str() {
            "control" | "ctrl" => self.ctrl = true,
            "shift" => self.shift = true,
            "mod1" | "alt" => self.alt = true,
            "mod4" | "super" | "win" | "cmd" | "meta" => self.super_key = true,
            _ => return false,
        }
        true
    }

    pub fn to_vec(&self) -> Vec<&'static str> {
        let mut result = Vec::new();
        if self.ctrl { result.push("ctrl"); }
        if self.alt { result.push("alt"); }
        if self.shift { result.push("shift"); }
        if self.super_key { result.push("super"); }
        result
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers = self.to_vec();
        if modifiers.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", modifiers.join("+"))
        }
    }
}

/// Аккорд: набор модификаторов плюс одна клавиша.
/// Ключ таблицы маршрутов горячих клавиш.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: KeyCode,
}

impl KeyChord {
    pub fn new(modifiers: Modifiers, key: KeyCode) -> Self {
        Self { modifiers, key }
    }
}

impl FromStr for KeyChord {
    type Err = UiautoError;

    /// Разбор строки вида `Control-Mod1-b`: все токены кроме последнего модификаторы,
    /// последний токен имя клавиши.
    fn from_str(combo: &str) -> Result<Self> {
        let tokens: Vec<&str> = combo.split(COMBO_SEPARATOR).map(str::trim).collect();
        let (key_token, modifier_tokens) = match tokens.split_last() {
            Some((key, rest)) if !key.is_empty() => (*key, rest),
            _ => return Err(crate::uiauto_error!(binding, "'{}': не указана клавиша", combo)),
        };

        let mut modifiers = Modifiers::new();
        for token in modifier_tokens {
            if token.is_empty() {
                return Err(crate::uiauto_error!(binding, "'{}': пустой модификатор", combo));
            }
            if !modifiers.apply_token(token) {
                return Err(crate::uiauto_error!(
                    binding,
                    "'{}': неизвестный модификатор '{}'",
                    combo,
                    token
                ));
            }
        }

        if Modifiers::new().apply_token(key_token) {
            return Err(crate::uiauto_error!(
                binding,
                "'{}': модификатор '{}' на месте клавиши",
                combo,
                key_token
            ));
        }

        let code = KeyNameToEvdevCode::translate(key_token)
            .map_err(|e| crate::uiauto_error!(binding, "'{}': {}", combo, e))?;

        Ok(Self::new(modifiers, KeyCode::new(code)))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}
