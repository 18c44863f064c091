use crate::error::Result;
use crate::services::desktop::r#trait::ProcessProbe;
use std::process::Command;
use tracing::debug;

/// Символы, имеющие особый смысл в расширенных регулярных выражениях
const ERE_SPECIAL: &[char] = &['\\', '.', '^', '$', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}'];

pub struct PgrepProbe;

impl PgrepProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessProbe for PgrepProbe {
    fn is_running(&self, pattern: &str) -> Result<bool> {
        if pattern.is_empty() {
            return Ok(false);
        }

        // pgrep -f понимает шаблон как регулярное выражение, а нужна подстрока
        let escaped = escape_ere(pattern);
        let output = Command::new("pgrep")
            .args(["-f", "--", escaped.as_str()])
            .output()
            .map_err(|e| crate::uiauto_error!(resolve, "pgrep не найден: {}", e))?;

        let running = interpret_status(output.status.code(), &output.stdout, &output.stderr)?;
        if running {
            debug!(
                "pgrep -f '{}': {}",
                escaped,
                String::from_utf8_lossy(&output.stdout).trim().replace('\n', ",")
            );
        }
        Ok(running)
    }
}

/// Экранировать шаблон так, чтобы он совпадал буквально
fn escape_ere(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if ERE_SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// pgrep: 0 - найдено, 1 - совпадений нет, остальное - ошибка
fn interpret_status(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Result<bool> {
    match code {
        Some(0) => Ok(!stdout.is_empty()),
        Some(1) => Ok(false),
        Some(code) => Err(crate::uiauto_error!(
            resolve,
            "pgrep вернул ошибку (код {}): {}",
            code,
            String::from_utf8_lossy(stderr).trim()
        )),
        None => Err(crate::uiauto_error!(resolve, "pgrep завершён сигналом")),
    }
}
