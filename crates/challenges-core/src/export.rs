//! Shareable challenge templates
//!
//! A template is the configuration-only view of a challenge: no id, version,
//! timestamps or activation flag. It can be exported from unsaved edits and
//! used to seed a new challenge elsewhere.

use serde::{Deserialize, Serialize};

use crate::{ChallengeCategory, ChallengeConfiguration, ChallengeDraft, ChallengeType, CoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub category: ChallengeCategory,
    #[serde(rename = "type", default)]
    pub challenge_type: ChallengeType,
    pub configuration: ChallengeConfiguration,
}

impl ChallengeTemplate {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// File name used when writing the export, `challenge.json` for unnamed drafts
    pub fn file_name(&self) -> String {
        if self.name.is_empty() {
            String::from("challenge.json")
        } else {
            format!("{}.json", self.name)
        }
    }
}

impl From<ChallengeDraft> for ChallengeTemplate {
    fn from(draft: ChallengeDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            author: draft.author,
            category: draft.category,
            challenge_type: draft.challenge_type,
            configuration: draft.configuration,
        }
    }
}
