use crate::events::{KeyChord, KeyCode, KeyState, Modifiers};
use smallvec::SmallVec;

const KEY_LEFTCTRL: u16 = 29;
const KEY_RIGHTCTRL: u16 = 97;
const KEY_LEFTALT: u16 = 56;
const KEY_RIGHTALT: u16 = 100;
const KEY_LEFTSHIFT: u16 = 42;
const KEY_RIGHTSHIFT: u16 = 54;
const KEY_LEFTMETA: u16 = 125;
const KEY_RIGHTMETA: u16 = 126;

/// Зажатые сейчас модификаторы (левые и правые учитываются отдельно)
#[derive(Debug, Default)]
pub struct ModifierState {
    held: SmallVec<[u16; 8]>,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modifier(key_code: u16) -> bool {
        matches!(
            key_code,
            KEY_LEFTCTRL
                | KEY_RIGHTCTRL
                | KEY_LEFTALT
                | KEY_RIGHTALT
                | KEY_LEFTSHIFT
                | KEY_RIGHTSHIFT
                | KEY_LEFTMETA
                | KEY_RIGHTMETA
        )
    }

    /// Обновить состояние; не-модификаторы игнорируются
    pub fn update_key(&mut self, key_code: u16, pressed: bool) {
        if !Self::is_modifier(key_code) {
            return;
        }

        let position = self.held.iter().position(|&held| held == key_code);
        match (pressed, position) {
            (true, None) => self.held.push(key_code),
            (false, Some(index)) => {
                self.held.swap_remove(index);
            }
            _ => {}
        }
    }

    /// Учесть событие клавиши и вернуть аккорд, если нажата обычная клавиша.
    /// Автоповтор и отпускание аккордов не образуют.
    pub fn track(&mut self, key_code: u16, state: KeyState) -> Option<KeyChord> {
        match state {
            KeyState::Repeat => None,
            _ if Self::is_modifier(key_code) => {
                self.update_key(key_code, state == KeyState::Pressed);
                None
            }
            KeyState::Pressed => Some(KeyChord::new(self.to_modifiers(), KeyCode::new(key_code))),
            KeyState::Released => None,
        }
    }

    pub fn to_modifiers(&self) -> Modifiers {
        let held = |left: u16, right: u16| self.held.iter().any(|&k| k == left || k == right);

        Modifiers {
            ctrl: held(KEY_LEFTCTRL, KEY_RIGHTCTRL),
            alt: held(KEY_LEFTALT, KEY_RIGHTALT),
            shift: held(KEY_LEFTSHIFT, KEY_RIGHTSHIFT),
            super_key: held(KEY_LEFTMETA, KEY_RIGHTMETA),
        }
    }
}
