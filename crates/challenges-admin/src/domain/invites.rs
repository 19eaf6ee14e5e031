use challenges_core::{GenerateInvite, Invite};
use log::info;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Banner, Confirm, Error};
use crate::infra::ChallengeApi;

pub const REVOKE_PROMPT: &str = "Revoke this invite? It will no longer be usable.";

/// Invite links of a saved challenge, newest first
pub struct InviteManager {
    api: Arc<dyn ChallengeApi>,
    challenge_id: Uuid,
    invites: Vec<Invite>,
    banner: Banner,
}

impl InviteManager {
    pub fn new(api: Arc<dyn ChallengeApi>, challenge_id: Uuid) -> Self {
        Self {
            api,
            challenge_id,
            invites: Vec::new(),
            banner: Banner::default(),
        }
    }

    pub fn challenge_id(&self) -> Uuid {
        self.challenge_id
    }

    pub fn invites(&self) -> &[Invite] {
        &self.invites
    }

    pub async fn load(&mut self) -> Result<&[Invite], Error> {
        self.banner.dismiss();
        let result = self
            .api
            .list_invites(&self.challenge_id)
            .await
            .map_err(Error::from);
        self.invites = self.banner.capture(result)?;
        Ok(&self.invites)
    }

    pub async fn generate(
        &mut self,
        max_uses: Option<i32>,
        expires_at: Option<OffsetDateTime>,
    ) -> Result<&Invite, Error> {
        self.banner.dismiss();
        let request = GenerateInvite {
            max_uses,
            expires_at,
        };
        let result = self
            .api
            .generate_invite(&self.challenge_id, &request)
            .await
            .map_err(Error::from);
        let invite = self.banner.capture(result)?;
        info!("generated invite for challenge {}", self.challenge_id);

        self.invites.insert(0, invite);
        Ok(&self.invites[0])
    }

    /// Revoke after confirmation. Returns false when the operator declined.
    pub async fn revoke(&mut self, token: &str, confirm: &dyn Confirm) -> Result<bool, Error> {
        if !confirm.confirm(REVOKE_PROMPT) {
            return Ok(false);
        }

        self.banner.dismiss();
        let result = self.api.revoke_invite(token).await.map_err(Error::from);
        self.banner.capture(result)?;
        self.invites.retain(|invite| invite.token != token);
        Ok(true)
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
    }
}
