pub mod keyboard;

pub use keyboard::{KeyChord, KeyCode, KeyState, Modifiers, COMBO_SEPARATOR};
