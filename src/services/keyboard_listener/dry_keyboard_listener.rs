use crate::error::Result;
use crate::events::KeyChord;
use crate::services::desktop::Desktop;
use crate::services::HotkeyRegistry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use super::r#trait::KeyboardListenerTrait;

/// Эмуляция клавиатуры: комбинации читаются из stdin по одной на строку
pub struct DryRunKeyboardListener {
    registry: HotkeyRegistry,
    desktop: Desktop,
}

impl DryRunKeyboardListener {
    pub fn new(registry: HotkeyRegistry, desktop: Desktop) -> Self {
        info!("Инициализация DryRunKeyboardListener");
        Self { registry, desktop }
    }

    /// Обработать одну строку ввода; пустые строки и комментарии пропускаются
    fn handle_line(&self, line: &str) -> bool {
        let combo = line.trim();
        if combo.is_empty() || combo.starts_with('#') {
            return false;
        }

        match combo.parse::<KeyChord>() {
            Ok(chord) => {
                let dispatched = self.registry.dispatch(&chord, &self.desktop);
                if !dispatched {
                    info!("[DRY RUN] Комбинация {} не назначена", chord);
                }
                dispatched
            }
            Err(e) => {
                warn!("[DRY RUN] {}", e);
                false
            }
        }
    }

    async fn run_impl(self) -> Result<()> {
        info!("Dry-run режим - вводите комбинации (например Control-Mod1-b), по одной на строку");
        info!("Настроено {} комбинаций (dry-run)", self.registry.len());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            self.handle_line(&line);
        }

        info!("[DRY RUN] stdin закрыт, эмуляция завершена");
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyboardListenerTrait for DryRunKeyboardListener {
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}
