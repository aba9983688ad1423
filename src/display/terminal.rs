//! Terminal display target.

use super::DisplayTarget;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Mutex;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Writes each update to a terminal (stdout by default).
pub struct TerminalDisplay {
    id: String,
    clear: bool,
    header: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalDisplay {
    /// Display on stdout.
    pub fn stdout(id: impl Into<String>, clear: bool, header: bool) -> Self {
        Self::with_writer(id, clear, header, Box::new(io::stdout()))
    }

    /// Display on an arbitrary writer (for testing).
    pub fn with_writer(
        id: impl Into<String>,
        clear: bool,
        header: bool,
        out: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            id: id.into(),
            clear,
            header,
            out: Mutex::new(out),
        }
    }

    fn render(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.clear {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        if self.header {
            let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(
                out,
                "{} {}",
                format!("[{}]", self.id).cyan().bold(),
                stamp.to_string().dimmed()
            )?;
        }
        out.write_all(text.as_bytes())?;
        // Plain output stays byte-exact
        if (self.clear || self.header) && !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

impl DisplayTarget for TerminalDisplay {
    fn id(&self) -> &str {
        &self.id
    }

    fn show(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = self.render(&mut **out, text) {
            tracing::warn!(display_id = %self.id, error = %e, "Failed to write to terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_plain_output_is_verbatim() {
        let buf = SharedBuf::default();
        let display = TerminalDisplay::with_writer("out", false, false, Box::new(buf.clone()));

        display.show("42\n");

        assert_eq!(buf.text(), "42\n");
    }

    #[test]
    fn test_plain_output_adds_no_newline() {
        let buf = SharedBuf::default();
        let display = TerminalDisplay::with_writer("out", false, false, Box::new(buf.clone()));

        display.show("42");

        assert_eq!(buf.text(), "42");
    }

    #[test]
    fn test_header_output_terminates_last_line() {
        let buf = SharedBuf::default();
        let display = TerminalDisplay::with_writer("out", false, true, Box::new(buf.clone()));

        display.show("42");

        assert!(buf.text().ends_with("\n42\n"));
    }

    #[test]
    fn test_clear_and_header() {
        let buf = SharedBuf::default();
        let display = TerminalDisplay::with_writer("gptOutput", true, true, Box::new(buf.clone()));

        display.show("body");

        let text = buf.text();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("gptOutput"));
        assert!(text.ends_with("body\n"));
    }
}
