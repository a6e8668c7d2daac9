use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // 两步都要尝试，返回第一个错误
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen);
        raw.and(screen)
    }
}

/// 只恢复一次，panic hook 和 drop 都可以调用
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restorer.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
