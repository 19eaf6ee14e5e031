use challenges_core::{validate_draft, Challenge, ChallengeDraft, ChallengeTemplate};
use log::{debug, info};
use std::{fmt, sync::Arc};
use uuid::Uuid;

use super::{Banner, BadgeManager, ChallengeForm, Error, InviteManager};
use crate::infra::ChallengeApi;

pub const BADGES_NEED_SAVE: &str = "Save the challenge first to manage badges.";
pub const INVITES_NEED_SAVE: &str = "Save the challenge first to manage invites.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Basic,
    Goals,
    Tiers,
    Criteria,
    Scoring,
    Badges,
    Invites,
}

impl Panel {
    pub const ALL: [Panel; 7] = [
        Panel::Basic,
        Panel::Goals,
        Panel::Tiers,
        Panel::Criteria,
        Panel::Scoring,
        Panel::Badges,
        Panel::Invites,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Basic => "Basic Info",
            Panel::Goals => "Goals",
            Panel::Tiers => "Tiers",
            Panel::Criteria => "Criteria",
            Panel::Scoring => "Scoring",
            Panel::Badges => "Badges",
            Panel::Invites => "Invites",
        }
    }

    /// Message shown instead of the panel while the challenge has no id
    fn unsaved_message(&self) -> Option<&'static str> {
        match self {
            Panel::Badges => Some(BADGES_NEED_SAVE),
            Panel::Invites => Some(INVITES_NEED_SAVE),
            _ => None,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Edits one challenge: either a new one (no id yet) or one loaded from the server.
///
/// Every save sends the whole configuration; the server keeps no partial state.
pub struct ChallengeEditor {
    api: Arc<dyn ChallengeApi>,
    id: Option<Uuid>,
    /// Last server copy, from a load or a save
    saved: Option<Challenge>,
    form: ChallengeForm,
    panel: Panel,
    banner: Banner,
}

impl ChallengeEditor {
    pub fn new(api: Arc<dyn ChallengeApi>) -> Self {
        Self {
            api,
            id: None,
            saved: None,
            form: ChallengeForm::default(),
            panel: Panel::default(),
            banner: Banner::default(),
        }
    }

    /// New, unsaved challenge seeded from an exported template
    pub fn from_template(api: Arc<dyn ChallengeApi>, template: &ChallengeTemplate) -> Self {
        let mut editor = Self::new(api);
        editor.form = ChallengeForm::from_template(template);
        editor
    }

    pub async fn open(api: Arc<dyn ChallengeApi>, id: Uuid) -> Result<Self, Error> {
        let mut editor = Self::new(api);
        editor.load(id).await?;
        Ok(editor)
    }

    pub async fn load(&mut self, id: Uuid) -> Result<(), Error> {
        debug!("loading challenge {}", id);
        self.banner.dismiss();
        let result = self.api.get_challenge(&id).await.map_err(Error::from);
        let challenge = self.banner.capture(result)?;
        self.form.hydrate(&challenge);
        self.id = Some(challenge.id);
        self.saved = Some(challenge);
        Ok(())
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn saved(&self) -> Option<&Challenge> {
        self.saved.as_ref()
    }

    pub fn form(&self) -> &ChallengeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ChallengeForm {
        &mut self.form
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Switch panels. Badges and invites stay closed until the challenge is saved.
    pub fn select_panel(&mut self, panel: Panel) -> Result<(), Error> {
        if self.id.is_none() {
            if let Some(message) = panel.unsaved_message() {
                return Err(Error::Unsaved(message.to_string()));
            }
        }
        self.panel = panel;
        Ok(())
    }

    /// Validate the form, then create the challenge or replace the saved one
    pub async fn submit(&mut self) -> Result<Challenge, Error> {
        self.banner.dismiss();
        let draft = self.form.to_draft();
        let result = self.save(&draft).await;
        let challenge = self.banner.capture(result)?;

        if self.id.is_none() {
            info!("created challenge {} ({})", challenge.name, challenge.id);
        } else {
            info!(
                "updated challenge {} to version {}",
                challenge.id, challenge.version
            );
        }
        self.id = Some(challenge.id);
        self.saved = Some(challenge.clone());
        Ok(challenge)
    }

    async fn save(&self, draft: &ChallengeDraft) -> Result<Challenge, Error> {
        validate_draft(draft)?;
        let challenge = match &self.id {
            Some(id) => self.api.update_challenge(id, draft).await?,
            None => self.api.create_challenge(draft).await?,
        };
        Ok(challenge)
    }

    /// Pretty JSON of the current, possibly unsaved, edits
    pub fn export_json(&self) -> Result<String, Error> {
        Ok(self.form.to_template().to_json()?)
    }

    pub fn badges(&self) -> Result<BadgeManager, Error> {
        let id = self.saved_id(Panel::Badges)?;
        Ok(BadgeManager::new(self.api.clone(), id))
    }

    pub fn invites(&self) -> Result<InviteManager, Error> {
        let id = self.saved_id(Panel::Invites)?;
        Ok(InviteManager::new(self.api.clone(), id))
    }

    fn saved_id(&self, panel: Panel) -> Result<Uuid, Error> {
        self.id.ok_or_else(|| {
            Error::Unsaved(panel.unsaved_message().unwrap_or_default().to_string())
        })
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
    }
}
