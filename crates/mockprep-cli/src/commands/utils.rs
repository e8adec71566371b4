use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use colored::Colorize;
use mockprep_application::AuthUseCase;
use mockprep_core::auth::{AuthContext, AuthStore};
use mockprep_core::config::RootConfig;
use mockprep_core::session::InterviewApi;
use mockprep_infrastructure::{ConfigService, FileAuthStore, PrepPaths, init_logging};
use mockprep_interaction::{ApiClient, HttpAuthApi, HttpInterviewApi};
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use tracing_appender::non_blocking::WorkerGuard;

/// Everything a command needs: resolved paths, loaded configuration and the
/// persisted sign-in.
pub struct AppContext {
    pub paths: PrepPaths,
    pub config: RootConfig,
    pub auth_store: Arc<FileAuthStore>,
}

impl AppContext {
    /// Loads configuration and installs file logging. Keep the returned guard
    /// alive until exit.
    pub fn load(config_dir: Option<PathBuf>) -> Result<(Self, WorkerGuard)> {
        let paths = PrepPaths::new(config_dir)?;
        let config = ConfigService::new(paths.clone())
            .get_config()
            .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;
        let guard = init_logging(&paths.logs_dir(), &config.log_level)
            .context("Failed to initialize logging")?;
        tracing::info!(base_url = %config.api.base_url, "mockprep starting");

        let auth_store = Arc::new(FileAuthStore::new(paths.auth_file()));
        Ok((
            Self {
                paths,
                config,
                auth_store,
            },
            guard,
        ))
    }

    pub fn client(&self, auth: Option<AuthContext>) -> Result<ApiClient> {
        ApiClient::new(&self.config.api, auth).context("Failed to create API client")
    }

    pub fn auth_usecase(&self) -> Result<AuthUseCase> {
        let api = Arc::new(HttpAuthApi::new(self.client(None)?));
        Ok(AuthUseCase::new(api, self.auth_store.clone()))
    }

    /// Interview API authenticated as the saved user.
    pub async fn interview_api(&self) -> Result<Arc<dyn InterviewApi>> {
        let auth = self.require_auth().await?;
        Ok(Arc::new(HttpInterviewApi::new(self.client(Some(auth))?)))
    }

    pub async fn require_auth(&self) -> Result<AuthContext> {
        self.auth_store
            .load()
            .await
            .context("Failed to read saved sign-in")?
            .ok_or_else(|| anyhow::anyhow!("Not signed in. Run `mockprep login` first"))
    }
}

/// Hides typed characters behind `*`.
struct MaskingHelper;

impl Helper for MaskingHelper {}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

pub fn read_password(prompt: &str) -> Result<String> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(MaskingHelper));
    Ok(rl.readline(prompt)?)
}

pub fn read_line(prompt: &str) -> Result<String> {
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    Ok(rl.readline(prompt)?.trim().to_string())
}

/// Returns `value` or asks for it.
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => read_line(prompt),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub fn print_hint(message: &str) {
    println!("{}", message.bright_black());
}

/// Highlights slash commands as they are typed.
pub fn highlight_command(line: &str) -> Cow<'_, str> {
    if line.starts_with('/') {
        Owned(line.bright_cyan().to_string())
    } else {
        Borrowed(line)
    }
}
