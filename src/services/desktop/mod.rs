//! Desktop collaborators: responsibility and boundaries
//!
//! This module wraps the external tools the dispatcher talks to (pgrep, wmctrl,
//! xrandr, process spawning) behind four narrow traits. It MUST NOT decide
//! anything about launching vs. focusing or window geometry: those decisions
//! live in the action resolver and the geometry calculator.

mod dry_run;
#[cfg(test)]
pub mod fake;
mod launcher;
mod pgrep;
mod wmctrl;
mod xrandr;
mod r#trait;

pub use self::r#trait::{create_desktop, Desktop, DisplayProbe, Launcher, ProcessProbe, WindowControl};
