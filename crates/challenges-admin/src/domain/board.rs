use challenges_core::{ChallengeListItem, ListFilter};
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::{Banner, Confirm, Error};
use crate::infra::ChallengeApi;

/// The challenge listing with its filters and delete action
pub struct ChallengeBoard {
    api: Arc<dyn ChallengeApi>,
    filter: ListFilter,
    challenges: Vec<ChallengeListItem>,
    total: i64,
    banner: Banner,
}

impl ChallengeBoard {
    pub fn new(api: Arc<dyn ChallengeApi>) -> Self {
        Self::with_filter(api, ListFilter::default())
    }

    pub fn with_filter(api: Arc<dyn ChallengeApi>, filter: ListFilter) -> Self {
        Self {
            api,
            filter,
            challenges: Vec::new(),
            total: 0,
            banner: Banner::default(),
        }
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    /// Takes effect on the next refresh
    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = filter;
    }

    pub fn challenges(&self) -> &[ChallengeListItem] {
        &self.challenges
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.banner.dismiss();
        let result = self
            .api
            .list_challenges(&self.filter)
            .await
            .map_err(Error::from);
        let list = self.banner.capture(result)?;
        debug!("listed {} of {} challenges", list.challenges.len(), list.total);

        self.challenges = list.challenges;
        self.total = list.total;
        Ok(())
    }

    /// Delete after confirmation. Returns false when the operator declined.
    /// A failed delete leaves the list as it was.
    pub async fn delete(&mut self, id: &Uuid, confirm: &dyn Confirm) -> Result<bool, Error> {
        let name = self
            .challenges
            .iter()
            .find(|challenge| &challenge.id == id)
            .map(|challenge| challenge.name.clone())
            .unwrap_or_else(|| id.to_string());

        if !confirm.confirm(&delete_prompt(&name)) {
            return Ok(false);
        }

        self.banner.dismiss();
        let result = self.api.delete_challenge(id).await.map_err(Error::from);
        self.banner.capture(result)?;
        info!("deleted challenge {}", id);

        let before = self.challenges.len();
        self.challenges.retain(|challenge| &challenge.id != id);
        if self.challenges.len() < before {
            self.total = (self.total - 1).max(0);
        }
        Ok(true)
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{}\"?", name)
}
