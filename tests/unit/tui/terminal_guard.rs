use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn test_guard_restores_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    drop(TerminalGuard::with_ops(ops.clone()).unwrap());

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn test_restore_runs_once() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn test_failed_setup_has_no_guard() {
    let ops = Arc::new(RecordingOps {
        fail_setup: true,
        ..Default::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup"]);
}
