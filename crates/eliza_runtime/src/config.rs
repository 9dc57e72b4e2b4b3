//! Configuration for a conversation session.

use std::path::PathBuf;

use eliza_engine::{CompiledScript, RandomSelector, Script};
use eliza_foundation::Result;

/// Greeting printed before the first prompt.
pub const DEFAULT_GREETING: &str = "Hello. How are you feeling today?";

/// Configuration for a conversation session.
///
/// Controls which script is used, how choices are seeded, and what the
/// terminal shows.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Seed for response selection (`None` = seeded from entropy).
    pub seed: Option<u64>,

    /// JSON script to load instead of the built-in DOCTOR script.
    pub script_path: Option<PathBuf>,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Primary prompt.
    pub prompt: String,

    /// Input that ends the session, compared before punctuation is stripped.
    pub quit_command: String,

    /// First line spoken by the program.
    pub greeting: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            script_path: None,
            show_banner: true,
            prompt: "> ".to_string(),
            quit_command: "quit".to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl SessionConfig {
    /// Builder method to set the selection seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to load a script file.
    #[must_use]
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the quit command.
    #[must_use]
    pub fn with_quit_command(mut self, command: impl Into<String>) -> Self {
        self.quit_command = command.into();
        self
    }

    /// Builder method to set the greeting.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Returns the configured script, falling back to DOCTOR.
    ///
    /// # Errors
    ///
    /// Returns an error if the script file cannot be read or parsed.
    pub fn load_script(&self) -> Result<Script> {
        match &self.script_path {
            Some(path) => Script::load(path),
            None => Ok(Script::doctor()),
        }
    }

    /// Loads and compiles the configured script.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be loaded or a pattern is invalid.
    pub fn compile_script(&self) -> Result<CompiledScript> {
        self.load_script()?.compile()
    }

    /// Creates the selector for this session.
    #[must_use]
    pub fn selector(&self) -> RandomSelector {
        self.seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::seeded)
    }
}
