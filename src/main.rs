use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ropey::Rope;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;
use termlight::kernel::services::adapters::{ensure_settings_file, load_settings};
use termlight::tui::{App, TerminalGuard};

mod logging;

const SAMPLE_TEXT: &str = "\
Candidate profile

Senior accountant with ten years of hospital finance experience.
Previously hospital director of a 200-bed regional facility.
Skills: Excel (advanced), PowerPoint, SAP, payroll.
Languages: English, Arabic, French.

Type a query above, e.g.  accountant + (excel powerpoint) \"hospital director\"
";

fn main() -> io::Result<()> {
    let log_guard = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file not created");
    }
    let settings = load_settings();

    let (title, text) = match std::env::args().nth(1) {
        Some(path) => (display_name(&path), load_document(Path::new(&path))?),
        None => ("sample".to_string(), Rope::from_str(SAMPLE_TEXT)),
    };
    tracing::info!(document = %title, lines = text.len_lines(), "document loaded");

    let mut app = App::new(title, &text, &settings);
    let result = run(&mut app);

    if let (Err(e), Some(guard)) = (&result, &log_guard) {
        tracing::error!(error = %e, log_dir = %guard.log_dir().display(), "exited with error");
    }
    result
}

fn run(app: &mut App) -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let restorer = guard.restorer();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        default_hook(info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    while !app.should_quit() {
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => dirty |= app.handle_key(key, Instant::now()),
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }
        dirty |= app.tick(Instant::now());
    }

    drop(guard);
    Ok(())
}

fn load_document(path: &Path) -> io::Result<Rope> {
    Rope::from_reader(BufReader::new(File::open(path)?))
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
