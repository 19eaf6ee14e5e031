pub mod badges;
pub mod board;
pub mod editor;
pub mod form;
pub mod invites;

pub use badges::BadgeManager;
pub use board::ChallengeBoard;
pub use editor::{ChallengeEditor, Panel};
pub use form::ChallengeForm;
pub use invites::InviteManager;

use challenges_core::CoreError;
use std::fmt;
use thiserror::Error;

use crate::infra;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] infra::Error),
    #[error(transparent)]
    Validation(#[from] CoreError),
    /// The action needs a challenge that exists on the server
    #[error("{0}")]
    Unsaved(String),
}

/// Asks the operator before a destructive action. Declining means no request is sent.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// The single dismissible error message a controller shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    message: Option<String>,
}

impl Banner {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show(&mut self, message: impl fmt::Display) {
        self.message = Some(message.to_string());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Shows the error of a failed result and hands the result back
    pub fn capture<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        if let Err(e) = &result {
            self.show(e);
        }
        result
    }
}
