//! The conversation loop.

use std::io::{self, Write};
use std::sync::Arc;

use eliza_engine::{RandomSelector, Responder, Selector};
use eliza_foundation::Result;
use tracing::debug;

use crate::config::SessionConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// What the program says in answer to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going.
    Say(String),
    /// The responder had nothing to say.
    Silent,
    /// Print the text and end the session.
    Quit(String),
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, S: Selector = RandomSelector> {
    /// The line editor for input.
    editor: E,

    /// Answers each line.
    responder: Responder<S>,

    /// Prompt, banner, and quit settings.
    config: SessionConfig,
}

impl Repl<RustylineEditor, RandomSelector> {
    /// Creates a REPL on the terminal from a session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be loaded or compiled, or the
    /// editor fails to initialize.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let script = Arc::new(config.compile_script()?);
        let responder = Responder::with_selector(script, config.selector());
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, responder, config))
    }
}

impl<E: LineEditor, S: Selector> Repl<E, S> {
    /// Creates a REPL from its parts.
    pub fn with_editor(editor: E, responder: Responder<S>, config: SessionConfig) -> Self {
        Self {
            editor,
            responder,
            config,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a mutable reference to the responder.
    pub fn responder_mut(&mut self) -> &mut Responder<S> {
        &mut self.responder
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }
        println!("{}", self.config.greeting);

        while self.read_eval_print()? {}
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => {
                println!();
                return Ok(false);
            }
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        match self.eval(&line) {
            Reply::Say(text) => {
                println!("{text}");
                Ok(true)
            }
            Reply::Silent => Ok(true),
            Reply::Quit(text) => {
                println!("{text}");
                Ok(false)
            }
        }
    }

    /// Answers one line of input.
    ///
    /// The quit command is recognised only when typed exactly; it is still
    /// answered by the script. Other lines lose trailing `!` and `.` before
    /// matching.
    pub fn eval(&mut self, line: &str) -> Reply {
        if line == self.config.quit_command {
            debug!("quit command");
            return Reply::Quit(self.responder.respond(line));
        }

        let text = self.responder.respond(strip_terminal_punctuation(line));
        if text.is_empty() {
            Reply::Silent
        } else {
            Reply::Say(text)
        }
    }

    /// Feeds every line through [`eval`](Self::eval), stopping after quit.
    ///
    /// Returns the non-silent replies in order.
    pub fn converse<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Vec<Reply> {
        let mut replies = Vec::new();
        for line in lines {
            let reply = self.eval(line);
            let done = matches!(reply, Reply::Quit(_));
            if reply != Reply::Silent {
                replies.push(reply);
            }
            if done {
                break;
            }
        }
        replies
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("  _____ _     ___ _____   _    ");
        println!(" | ____| |   |_ _|__  /  / \\   ");
        println!(" |  _| | |    | |  / /  / _ \\  ");
        println!(" | |___| |___ | | / /_ / ___ \\ ");
        println!(" |_____|_____|___/____/_/   \\_\\");
        println!("\x1b[0m");
        println!("Therapist v{}", env!("CARGO_PKG_VERSION"));
        println!("---------");
        println!("Talk to the program by typing in plain English, using normal upper-");
        println!(
            "and lower-case letters and punctuation. Enter \"{}\" when done.",
            self.config.quit_command
        );
        println!("{}", "=".repeat(72));

        let _ = io::stdout().flush();
    }
}

/// Removes trailing `!` and `.` characters; `?` is kept.
#[must_use]
pub fn strip_terminal_punctuation(line: &str) -> &str {
    line.trim_end_matches(['!', '.'])
}
