pub mod action_resolver;
pub mod desktop;
pub mod geometry;
pub mod hotkey_registry;
pub mod keyboard_listener;
pub mod window_ops;

pub use desktop::create_desktop;
pub use hotkey_registry::HotkeyRegistry;
pub use keyboard_listener::create_keyboard_listener;
