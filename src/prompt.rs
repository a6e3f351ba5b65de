//! Interactive collection of a [`QrRequest`]
//!
//! On a terminal the answers are read through `rustyline`, which gives line
//! editing. Any other buffered reader (piped stdin, scripted answers in
//! tests) is read line by line.

use crate::error::{Error, Result};
use crate::request::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, ErrorCorrection, QrRequest};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};

/// Line-oriented question/answer driver
pub struct Prompter<R, W> {
    editor: Option<DefaultEditor>,
    input: R,
    output: W,
    buffer: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading answers from `input` and writing questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            editor: None,
            input,
            output,
            buffer: String::new(),
        }
    }

    /// Create a prompter for the process console.
    ///
    /// Uses a line editor when stdin is a terminal and falls back to reading
    /// `input` directly otherwise.
    pub fn for_terminal(input: R, output: W) -> Self {
        let mut prompter = Self::new(input, output);
        if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => {
                    debug!("using rustyline-backed prompt input");
                    prompter.editor = Some(editor);
                }
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                }
            }
        } else {
            debug!("stdin is not a TTY; using basic prompt input");
        }
        prompter
    }

    /// Whether answers are read through the line editor.
    pub fn uses_line_editor(&self) -> bool {
        self.editor.is_some()
    }

    /// Writer the questions go to, shared with later console output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask the five questions and return the completed request.
    pub fn collect_request(&mut self) -> Result<QrRequest> {
        let payload = self.text("Enter text or URL for the QR Code:", |answer| {
            if answer.trim().is_empty() {
                Err("Input cannot be empty!")
            } else {
                Ok(())
            }
        })?;
        let ec_level = self.level("Choose error correction level:", ErrorCorrection::M)?;
        let foreground =
            self.text_with_default("Enter foreground color (hex or name):", DEFAULT_FOREGROUND)?;
        let background =
            self.text_with_default("Enter background color (hex or name):", DEFAULT_BACKGROUND)?;
        let preview = self.confirm("Preview QR code in terminal?", false)?;

        let request = QrRequest {
            payload,
            ec_level,
            foreground,
            background,
            preview,
        };
        debug!(?request, "Collected QR request");
        Ok(request)
    }

    /// Free-text question, re-asked until `validate` accepts the answer.
    pub fn text<F>(&mut self, message: &str, validate: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<(), &'static str>,
    {
        loop {
            let answer = self.ask(&format!("? {message} "))?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.complain(reason)?,
            }
        }
    }

    /// Free-text question where a blank answer selects `default`.
    pub fn text_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("? {message} ({default}) "))?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    /// Single choice among the four error correction levels.
    pub fn level(&mut self, message: &str, default: ErrorCorrection) -> Result<ErrorCorrection> {
        let choices = ErrorCorrection::ALL
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>();
        let question = format!("? {message} ({}) [{default}] ", choices.join("/"));

        loop {
            let answer = self.ask(&question)?;
            if answer.trim().is_empty() {
                return Ok(default);
            }
            match answer.parse::<ErrorCorrection>() {
                Ok(level) => return Ok(level),
                Err(_) => self.complain(&format!("Please choose one of: {}", choices.join(", ")))?,
            }
        }
    }

    /// Yes/no question.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let question = format!("? {message} ({hint}) ");

        loop {
            let answer = self.ask(&question)?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please answer y or n")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        if let Some(editor) = self.editor.as_mut() {
            self.output.flush()?;
            match editor.readline(question) {
                Ok(line) => return Ok(line),
                Err(err) => match convert_readline_error(err) {
                    Error::InputClosed => return Err(Error::InputClosed),
                    other => {
                        warn!("rustyline input failed: {other} -- switching to basic stdin");
                        self.editor = None;
                    }
                },
            }
        }

        write!(self.output, "{question}")?;
        self.output.flush()?;

        self.buffer.clear();
        if self.input.read_line(&mut self.buffer)? == 0 {
            // Terminate the dangling prompt line before bailing out.
            writeln!(self.output)?;
            return Err(Error::InputClosed);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(self.buffer.clone())
    }

    fn complain(&mut self, reason: &str) -> Result<()> {
        writeln!(self.output, ">> {reason}")?;
        Ok(())
    }
}

/// Ctrl-C and Ctrl-D abandon the session; everything else is an I/O failure.
fn convert_readline_error(err: ReadlineError) -> Error {
    match err {
        ReadlineError::Eof | ReadlineError::Interrupted => Error::InputClosed,
        ReadlineError::Io(io_err) => Error::Io(io_err),
        other => Error::Io(io::Error::new(io::ErrorKind::Other, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_defaults_on_blank_answers() {
        let mut p = prompter("Hello, World!\n\n\n\n\n");
        let request = p.collect_request().unwrap();
        assert_eq!(request, QrRequest::new("Hello, World!"));

        let out = transcript(p);
        assert!(out.contains("? Enter text or URL for the QR Code: "));
        assert!(out.contains("? Choose error correction level: (L/M/Q/H) [M] "));
        assert!(out.contains("? Enter foreground color (hex or name): (#000000) "));
        assert!(out.contains("? Enter background color (hex or name): (#FFFFFF) "));
        assert!(out.contains("? Preview QR code in terminal? (y/N) "));
    }

    #[test]
    fn test_blank_payload_is_reprompted() {
        let mut p = prompter("\n   \n\t\nreal\r\nh\nred\n#00ff00\nyes\n");
        let request = p.collect_request().unwrap();
        assert_eq!(request.payload, "real");
        assert_eq!(request.ec_level, ErrorCorrection::H);
        assert_eq!(request.foreground, "red");
        assert_eq!(request.background, "#00ff00");
        assert!(request.preview);

        let out = transcript(p);
        assert_eq!(out.matches(">> Input cannot be empty!").count(), 3);
        assert_eq!(out.matches("? Enter text or URL for the QR Code:").count(), 4);
    }

    #[test]
    fn test_payload_keeps_surrounding_whitespace() {
        let mut p = prompter("  padded  \n\n\n\n\n");
        assert_eq!(p.collect_request().unwrap().payload, "  padded  ");
    }

    #[test]
    fn test_unknown_level_and_confirm_are_reprompted() {
        let mut p = prompter("x\nZ\nq\n\n\nperhaps\nn\n");
        let request = p.collect_request().unwrap();
        assert_eq!(request.ec_level, ErrorCorrection::Q);
        assert!(!request.preview);

        let out = transcript(p);
        assert!(out.contains(">> Please choose one of: L, M, Q, H"));
        assert!(out.contains(">> Please answer y or n"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("only payload\nL\n");
        let err = p.collect_request().unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn test_scripted_input_skips_line_editor() {
        let p = prompter("x\n");
        assert!(!p.uses_line_editor());
    }

    #[test]
    fn test_readline_interrupt_and_eof_close_input() {
        assert!(matches!(
            convert_readline_error(ReadlineError::Interrupted),
            Error::InputClosed
        ));
        assert!(matches!(
            convert_readline_error(ReadlineError::Eof),
            Error::InputClosed
        ));
    }

    #[test]
    fn test_readline_io_failure_stays_io() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "tty gone");
        match convert_readline_error(ReadlineError::Io(err)) {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_never_accepts_payload() {
        let mut p = prompter("   \n");
        assert!(matches!(p.collect_request(), Err(Error::InputClosed)));
    }
}
