use crate::error::Result;
use crate::services::desktop::r#trait::Launcher;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Запускает процесс и сразу отпускает его.
/// Дочерний процесс дожидается отдельный поток, чтобы не оставлять зомби.
pub struct SpawnLauncher;

impl SpawnLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for SpawnLauncher {
    fn launch(&self, program: &str, args: &[String]) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| crate::uiauto_error!(resolve, "не удалось запустить {}: {}", program, e))?;

        let pid = child.id();
        info!("Запущен {} {:?} (pid {})", program, args, pid);

        // Процесс уже запущен: сбой потока-сборщика не делает запуск неудачным
        if let Err(e) = std::thread::Builder::new()
            .name(format!("reap-{}", pid))
            .spawn(move || match child.wait() {
                Ok(status) => debug!("Процесс {} завершился: {}", pid, status),
                Err(e) => debug!("Не удалось дождаться процесса {}: {}", pid, e),
            })
        {
            warn!("Не удалось создать поток ожидания для pid {}: {}", pid, e);
        }

        Ok(())
    }
}
