/// Преобразование имён клавиш в evdev коды и обратно
/// Отвечает за трансляцию строковых имён клавиш из комбинаций в числовые коды evdev
pub struct KeyNameToEvdevCode;

/// Таблица имён клавиш, допустимых в последней позиции комбинации
const KEY_TABLE: &[(&str, u16)] = &[
    // Буквенные клавиши
    ("a", 30), ("b", 48), ("c", 46), ("d", 32), ("e", 18), ("f", 33),
    ("g", 34), ("h", 35), ("i", 23), ("j", 36), ("k", 37), ("l", 38),
    ("m", 50), ("n", 49), ("o", 24), ("p", 25), ("q", 16), ("r", 19),
    ("s", 31), ("t", 20), ("u", 22), ("v", 47), ("w", 17), ("x", 45),
    ("y", 21), ("z", 44),

    // Цифровые клавиши (верхний ряд)
    ("1", 2), ("2", 3), ("3", 4), ("4", 5), ("5", 6),
    ("6", 7), ("7", 8), ("8", 9), ("9", 10), ("0", 11),

    // Специальные клавиши
    ("space", 57),
    ("enter", 28),
    ("escape", 1),
    ("backspace", 14),
    ("tab", 15),

    // Знаки пунктуации
    ("minus", 12),
    ("equal", 13),
    ("leftbrace", 26),
    ("rightbrace", 27),
    ("backslash", 43),
    ("semicolon", 39),
    ("apostrophe", 40),
    ("grave", 41),
    ("comma", 51),
    ("dot", 52),
    ("slash", 53),

    // Навигация/редакция
    ("insert", 110),
    ("delete", 111),
    ("home", 102),
    ("end", 107),
    ("pageup", 104),
    ("pagedown", 109),

    // Системные
    ("printscreen", 99),
    ("scrolllock", 70),
    ("pause", 119),

    // Numpad
    ("kp0", 82), ("kp1", 79), ("kp2", 80), ("kp3", 81), ("kp4", 75),
    ("kp5", 76), ("kp6", 77), ("kp7", 71), ("kp8", 72), ("kp9", 73),
    ("kpdecimal", 83),
    ("kpdivide", 98),
    ("kpmultiply", 55),
    ("kpadd", 78),
    ("kpsubtract", 74),
    ("kpenter", 96),

    // Стрелки
    ("up", 103),
    ("down", 108),
    ("left", 105),
    ("right", 106),

    // Функциональные клавиши
    ("f1", 59), ("f2", 60), ("f3", 61), ("f4", 62), ("f5", 63), ("f6", 64),
    ("f7", 65), ("f8", 66), ("f9", 67), ("f10", 68), ("f11", 87), ("f12", 88),
];

impl KeyNameToEvdevCode {
    /// Получить evdev код клавиши по её имени (регистр не важен)
    pub fn translate(key_name: &str) -> Result<u16, String> {
        // Page_Up, KP_Enter, Scroll_Lock -> pageup, kpenter, scrolllock
        let normalized = key_name.trim().to_lowercase().replace('_', "");
        let canonical = match normalized.as_str() {
            // Синонимы в стиле X11 keysym
            "esc" => "escape",
            "return" => "enter",
            "period" => "dot",
            "bracketleft" => "leftbrace",
            "bracketright" => "rightbrace",
            "prior" => "pageup",
            "next" => "pagedown",
            "print" => "printscreen",
            other => other,
        };

        KEY_TABLE
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, code)| *code)
            .ok_or_else(|| format!("Неизвестная клавиша: {}", key_name))
    }

    /// Получить каноническое имя клавиши по evdev коду
    pub fn reverse_translate(keycode: u16) -> Option<&'static str> {
        KEY_TABLE
            .iter()
            .find(|(_, code)| *code == keycode)
            .map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(KeyNameToEvdevCode::translate("b").unwrap(), 48);
        assert_eq!(KeyNameToEvdevCode::translate("B").unwrap(), 48);
        assert_eq!(KeyNameToEvdevCode::translate("0").unwrap(), 11);
        assert_eq!(KeyNameToEvdevCode::reverse_translate(20), Some("t"));
    }

    #[test]
    fn test_x11_aliases() {
        assert_eq!(KeyNameToEvdevCode::translate("Return").unwrap(), 28);
        assert_eq!(KeyNameToEvdevCode::translate("esc").unwrap(), 1);
        assert_eq!(KeyNameToEvdevCode::translate("Prior").unwrap(), 104);
        // Обратная трансляция всегда даёт каноническое имя
        assert_eq!(KeyNameToEvdevCode::reverse_translate(28), Some("enter"));
    }

    #[test]
    fn test_x11_underscore_names() {
        assert_eq!(KeyNameToEvdevCode::translate("Page_Up").unwrap(), 104);
        assert_eq!(KeyNameToEvdevCode::translate("Page_Down").unwrap(), 109);
        assert_eq!(KeyNameToEvdevCode::translate("KP_1").unwrap(), 79);
        assert_eq!(KeyNameToEvdevCode::translate("KP_9").unwrap(), 73);
        assert_eq!(KeyNameToEvdevCode::translate("KP_Enter").unwrap(), 96);
        assert_eq!(KeyNameToEvdevCode::translate("KP_Add").unwrap(), 78);
        assert_eq!(KeyNameToEvdevCode::translate("Scroll_Lock").unwrap(), 70);
    }

    #[test]
    fn test_navigation_and_function_keys() {
        assert_eq!(KeyNameToEvdevCode::translate("pagedown").unwrap(), 109);
        assert_eq!(KeyNameToEvdevCode::translate("F11").unwrap(), 87);
        assert_eq!(KeyNameToEvdevCode::reverse_translate(106), Some("right"));
        assert_eq!(KeyNameToEvdevCode::reverse_translate(96), Some("kpenter"));
    }

    #[test]
    fn test_modifiers_are_not_trigger_keys() {
        assert!(KeyNameToEvdevCode::translate("ctrl").is_err());
        assert!(KeyNameToEvdevCode::translate("super").is_err());
        assert_eq!(KeyNameToEvdevCode::reverse_translate(29), None);
    }

    #[test]
    fn test_unknown_key() {
        let err = KeyNameToEvdevCode::translate("hyper").unwrap_err();
        assert!(err.contains("hyper"));
    }

    #[test]
    fn test_table_has_unique_names_and_codes() {
        for (i, (name, code)) in KEY_TABLE.iter().enumerate() {
            for (other_name, other_code) in &KEY_TABLE[i + 1..] {
                assert_ne!(name, other_name);
                assert_ne!(code, other_code, "{} и {}", name, other_name);
            }
        }
    }
}
