use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiautoError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Комбинация клавиш отклонена: {0}")]
    Binding(String),

    #[error("Ошибка запуска или фокусировки приложения: {0}")]
    Resolve(String),

    #[error("Ошибка определения геометрии экрана: {0}")]
    Geometry(String),

    #[error("Ошибка перемещения окна: {0}")]
    Placement(String),

    #[error("Устройство не найдено: {0}")]
    DeviceNotFound(String),

    #[error("Недостаточно прав доступа: {0}")]
    Permission(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl UiautoError {
    pub fn device_not_found<T>(msg: impl Into<String>) -> Result<T> {
        Err(UiautoError::DeviceNotFound(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, UiautoError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! uiauto_error {
    (binding, $($arg:tt)*) => {
        $crate::error::UiautoError::Binding(format!($($arg)*))
    };
    (resolve, $($arg:tt)*) => {
        $crate::error::UiautoError::Resolve(format!($($arg)*))
    };
    (geometry, $($arg:tt)*) => {
        $crate::error::UiautoError::Geometry(format!($($arg)*))
    };
    (placement, $($arg:tt)*) => {
        $crate::error::UiautoError::Placement(format!($($arg)*))
    };
    (permission, $($arg:tt)*) => {
        $crate::error::UiautoError::Permission(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::UiautoError::Internal(format!($($arg)*))
    };
}
