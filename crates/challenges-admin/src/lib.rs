pub mod config;
pub mod domain;
pub mod infra;
pub mod startup;

pub use config::*;
pub use domain::{
    BadgeManager, ChallengeBoard, ChallengeEditor, ChallengeForm, Confirm, Error as AdminError,
    InviteManager, Panel,
};
pub use infra::{
    ApiClient, ChallengeApi, Error as ApiError, FileSessionStore, MemorySessionStore, SessionStore,
};
pub use startup::*;
