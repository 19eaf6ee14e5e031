use challenges_core::{Badge, BadgeUpload, CoreError};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

use super::{Banner, Confirm, Error};
use crate::infra::ChallengeApi;

/// Badge images of a saved challenge
pub struct BadgeManager {
    api: Arc<dyn ChallengeApi>,
    challenge_id: Uuid,
    badges: Vec<Badge>,
    banner: Banner,
}

impl BadgeManager {
    pub fn new(api: Arc<dyn ChallengeApi>, challenge_id: Uuid) -> Self {
        Self {
            api,
            challenge_id,
            badges: Vec::new(),
            banner: Banner::default(),
        }
    }

    pub fn challenge_id(&self) -> Uuid {
        self.challenge_id
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub async fn load(&mut self) -> Result<&[Badge], Error> {
        self.banner.dismiss();
        let result = self
            .api
            .list_badges(&self.challenge_id)
            .await
            .map_err(Error::from);
        self.badges = self.banner.capture(result)?;
        Ok(&self.badges)
    }

    /// Upload a badge image. Needs a name and image data, the badge is appended on success.
    pub async fn upload(&mut self, upload: BadgeUpload) -> Result<&Badge, Error> {
        self.banner.dismiss();
        let result = self.send_upload(upload).await;
        let badge = self.banner.capture(result)?;
        info!("uploaded badge {} ({})", badge.name, badge.id);

        self.badges.push(badge);
        Ok(&self.badges[self.badges.len() - 1])
    }

    async fn send_upload(&self, upload: BadgeUpload) -> Result<Badge, Error> {
        if upload.name.trim().is_empty() {
            return Err(CoreError::Validation("badge name is required".into()).into());
        }
        if upload.image.is_empty() {
            return Err(CoreError::Validation("badge image is required".into()).into());
        }
        Ok(self.api.upload_badge(&self.challenge_id, upload).await?)
    }

    /// Delete after confirmation. Returns false when the operator declined.
    pub async fn delete(&mut self, badge_id: &Uuid, confirm: &dyn Confirm) -> Result<bool, Error> {
        let name = self
            .badges
            .iter()
            .find(|badge| &badge.id == badge_id)
            .map(|badge| badge.name.clone())
            .unwrap_or_else(|| badge_id.to_string());

        if !confirm.confirm(&delete_prompt(&name)) {
            return Ok(false);
        }

        self.banner.dismiss();
        let result = self.api.delete_badge(badge_id).await.map_err(Error::from);
        self.banner.capture(result)?;
        self.badges.retain(|badge| &badge.id != badge_id);
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
    format!("Delete badge \"{}\"?", name)
}
