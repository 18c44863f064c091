use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info, warn};
mod config;
mod error;
mod events;
mod mappings;
mod services;
mod utils;

use config::Config;
use services::{create_desktop, create_keyboard_listener, HotkeyRegistry};

#[derive(Parser, Debug)]
#[command(name = "uiauto")]
#[command(about = "Глобальные горячие клавиши: запуск или фокусировка приложений и центрирование окна")]
struct Args {
    /// Путь к файлу конфигурации (по умолчанию ~/.config/uiauto/uiauto.conf)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Режим сухого запуска: комбинации читаются из stdin, действия только логируются
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Путь к клавиатурному устройству evdev (перекрывает input.device_path)
    #[arg(long)]
    device: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Инициализация системы логирования
    init_tracing(&args.log_level)?;

    info!("Запуск uiauto v{}", env!("CARGO_PKG_VERSION"));

    // Ошибки конфигурации фатальны: без неё не назначается ни одна клавиша
    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load_or_create(&config_path)?;
    info!("Конфигурация загружена из: {}", config_path.display());

    if let Some(device) = args.device {
        config.input.device_path = device;
    }

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    } else {
        utils::permissions::check_permissions()?;
    }

    let registry = HotkeyRegistry::from_config(&config);
    if registry.is_empty() {
        warn!("Ни одна комбинация не назначена");
    }

    let desktop = create_desktop(args.dry_run);
    let keyboard_listener = create_keyboard_listener(&config, registry, desktop, args.dry_run)?;

    info!("Все компоненты инициализированы");

    let mut keyboard_handle = tokio::spawn(async move {
        if let Err(e) = keyboard_listener.run().await {
            error!("Ошибка в KeyboardListener: {}", e);
        }
    });

    // Ожидание сигнала завершения или остановки слушателя
    let listener_finished = tokio::select! {
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
                Err(err) => error!("Ошибка при ожидании сигнала завершения: {}", err),
            }
            false
        }
        _ = &mut keyboard_handle => {
            info!("KeyboardListener завершил работу");
            true
        }
    };

    info!("Завершение работы...");

    if !listener_finished {
        // Прерываем задачу, чтобы освободить устройство в Drop
        keyboard_handle.abort();
        let _ = keyboard_handle.await;
    }

    info!("uiauto завершил работу");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    Ok(())
}
