//! Colored terminal output for release operations
//!
//! Progress goes to stdout, errors to stderr. Write failures are ignored:
//! losing a progress line must never fail a release.

use std::io::Write;
use std::sync::{Arc, Mutex};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Where rendered lines end up
#[derive(Debug)]
enum Sink {
    Terminal(BufferWriter),
    /// Uncolored lines kept in memory, stdout and stderr interleaved
    Captured(Arc<Mutex<Vec<String>>>),
}

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    sink: Sink,
    choice: ColorChoice,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        let sink = match &self.sink {
            Sink::Terminal(_) => Sink::Terminal(BufferWriter::stdout(self.choice)),
            Sink::Captured(lines) => Sink::Captured(Arc::clone(lines)),
        };
        Self {
            sink,
            choice: self.choice,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        // CI logs rarely render ANSI; honor NO_COLOR as well as tty detection
        let choice = if std::env::var_os("NO_COLOR").is_some() {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };

        Self {
            sink: Sink::Terminal(BufferWriter::stdout(choice)),
            choice,
            verbose,
            quiet,
        }
    }

    /// Create an output manager that records lines instead of printing them
    pub fn captured(verbose: bool) -> Self {
        Self {
            sink: Sink::Captured(Arc::new(Mutex::new(Vec::new()))),
            choice: ColorChoice::Never,
            verbose,
            quiet: false,
        }
    }

    /// Lines recorded so far (empty for a terminal output manager)
    pub fn captured_lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Captured(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            Sink::Terminal(_) => Vec::new(),
        }
    }

    fn buffer(&self) -> Buffer {
        match &self.sink {
            Sink::Terminal(writer) => writer.buffer(),
            Sink::Captured(_) => Buffer::no_color(),
        }
    }

    fn record(&self, buffer: &Buffer) -> bool {
        match &self.sink {
            Sink::Captured(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    let text = String::from_utf8_lossy(buffer.as_slice());
                    lines.extend(text.lines().map(str::to_string));
                }
                true
            }
            Sink::Terminal(_) => false,
        }
    }

    fn write_line(&self, symbol: Option<(&str, Color)>, message: &str) {
        if self.quiet {
            return;
        }

        let mut buffer = self.buffer();
        if let Some((symbol, color)) = symbol {
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
            let _ = write!(&mut buffer, "{} ", symbol);
            let _ = buffer.reset();
        }
        let _ = writeln!(&mut buffer, "{}", message);

        if self.record(&buffer) {
            return;
        }
        if let Sink::Terminal(writer) = &self.sink {
            let _ = writer.print(&buffer);
        }
    }

    /// Print a plain message
    pub fn println(&self, message: &str) {
        self.write_line(None, message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.write_line(Some(("✓", Color::Green)), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        self.write_line(Some(("⚠", Color::Yellow)), message);
    }

    /// Print a request-level detail (only in verbose mode)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            self.write_line(Some(("→", Color::Blue)), message);
        }
    }

    /// Print an error message to stderr (shown even in quiet mode)
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(self.choice);
        let mut buffer = match &self.sink {
            Sink::Terminal(_) => stderr.buffer(),
            Sink::Captured(_) => Buffer::no_color(),
        };

        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(&mut buffer, "✗ ");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, "{}", message);

        if self.record(&buffer) {
            return;
        }
        if stderr.print(&buffer).is_err() {
            eprintln!("✗ {}", message);
        }
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false, false)
    }
}
