use crate::error::Result;
use crate::services::desktop::r#trait::{Desktop, DisplayProbe, Launcher, ProcessProbe, WindowControl};
use crate::services::geometry::{ScreenGeometry, TargetRect};
use parking_lot::Mutex;
use std::sync::Arc;

/// Вызов внешней возможности, записанный подделкой
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query(String),
    Launch(String, Vec<String>),
    Focus(String),
    Display,
    Move(TargetRect),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    /// Командные строки "запущенных" процессов
    processes: Vec<String>,
    launch_registers_process: bool,
    fail_query: bool,
    fail_focus: bool,
    fail_launch: bool,
    fail_move: bool,
    screen: Option<(u32, u32)>,
}

/// Записывающая подделка рабочего стола для тестов
#[derive(Clone, Default)]
pub struct FakeDesktop {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process(self, cmdline: &str) -> Self {
        self.state.lock().processes.push(cmdline.to_string());
        self
    }

    /// Каждый запуск появляется в таблице процессов
    pub fn launch_registers_process(self) -> Self {
        self.state.lock().launch_registers_process = true;
        self
    }

    pub fn failing_query(self) -> Self {
        self.state.lock().fail_query = true;
        self
    }

    pub fn failing_focus(self) -> Self {
        self.state.lock().fail_focus = true;
        self
    }

    pub fn failing_launch(self) -> Self {
        self.state.lock().fail_launch = true;
        self
    }

    pub fn failing_move(self) -> Self {
        self.state.lock().fail_move = true;
        self
    }

    pub fn with_screen(self, width: u32, height: u32) -> Self {
        self.state.lock().screen = Some((width, height));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn launches(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Launch(..))).count()
    }

    pub fn focuses(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Focus(..))).count()
    }

    pub fn desktop(&self) -> Desktop {
        Desktop {
            processes: Box::new(self.clone()),
            launcher: Box::new(self.clone()),
            windows: Box::new(self.clone()),
            display: Box::new(self.clone()),
        }
    }
}

impl ProcessProbe for FakeDesktop {
    fn is_running(&self, pattern: &str) -> Result<bool> {
        let mut state = self.state.lock();
        state.calls.push(Call::Query(pattern.to_string()));
        if state.fail_query {
            return Err(crate::uiauto_error!(resolve, "таблица процессов недоступна"));
        }
        Ok(state.processes.iter().any(|cmdline| cmdline.contains(pattern)))
    }
}

impl Launcher for FakeDesktop {
    fn launch(&self, program: &str, args: &[String]) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(Call::Launch(program.to_string(), args.to_vec()));
        if state.fail_launch {
            return Err(crate::uiauto_error!(resolve, "{} не найден", program));
        }
        if state.launch_registers_process {
            let cmdline = std::iter::once(program.to_string())
                .chain(args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ");
            state.processes.push(cmdline);
        }
        Ok(())
    }
}

impl WindowControl for FakeDesktop {
    fn focus_class(&self, window_class: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(Call::Focus(window_class.to_string()));
        if state.fail_focus {
            return Err(crate::uiauto_error!(resolve, "окно {} не найдено", window_class));
        }
        Ok(())
    }

    fn move_active(&self, rect: TargetRect) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(Call::Move(rect));
        if state.fail_move {
            return Err(crate::uiauto_error!(placement, "нет активного окна"));
        }
        Ok(())
    }
}

impl DisplayProbe for FakeDesktop {
    fn primary_geometry(&self) -> Result<ScreenGeometry> {
        let mut state = self.state.lock();
        state.calls.push(Call::Display);
        match state.screen {
            Some((width, height)) => ScreenGeometry::new(width, height),
            None => Err(crate::uiauto_error!(geometry, "подключённый дисплей не найден")),
        }
    }
}
