//! # Presentation
//!
//! Everything the user sees or answers lives here, away from the workflow
//! and gateway logic:
//!
//! - [`Notice`]: the content of an error dialog, built from typed errors.
//! - [`Confirmation`] and [`Prompt`]: the blocking yes/no question the shell
//!   asks before deleting.
//! - [`ScriptedPrompt`]: a prompt with canned answers, for tests.
//! - [`terminal`]: stdin/stderr implementations and table rendering for the CLI.

pub mod terminal;

pub use terminal::{render_table, TerminalPrompt};

use crate::gateway::NetworkError;
use crate::shell::ShellError;
use crate::workflow::WorkflowError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use strum::Display;

/// Severity icon of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// A message dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    /// The `Error!` dialog every failure is shown in.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error!".to_string(),
            text: text.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            level: NoticeLevel::Success,
        }
    }
}

impl From<&WorkflowError> for Notice {
    fn from(error: &WorkflowError) -> Self {
        Notice::error(error.to_string())
    }
}

impl From<&NetworkError> for Notice {
    fn from(_: &NetworkError) -> Self {
        Notice::error("No se pudo comunicar con el servidor")
    }
}

impl From<&ShellError> for Notice {
    fn from(error: &ShellError) -> Self {
        match error {
            ShellError::Workflow(e) => Notice::from(e),
            ShellError::Network(e) => Notice::from(e),
            other => Notice::error(other.to_string()),
        }
    }
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

impl Confirmation {
    /// The question asked before a row is deleted.
    pub fn delete_empleado() -> Self {
        Self {
            title: "¿Estás seguro?".to_string(),
            text: "Eliminar empleado!".to_string(),
            confirm_label: "Sí, eliminar!".to_string(),
        }
    }
}

/// Something that can ask the user to confirm an action.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Blocks until the user answers. `true` means confirmed.
    async fn confirm(&self, confirmation: &Confirmation) -> bool;
}

/// A prompt that replays queued answers and records every question.
///
/// Asking with no answers left is treated as a decline.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<Confirmation>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> Vec<Confirmation> {
        self.asked.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn confirm(&self, confirmation: &Confirmation) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(confirmation.clone());
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(false)
    }
}
