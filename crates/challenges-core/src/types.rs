//! Challenge definition types shared between the REST client and the editor

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::CoreError;

/// Grouping shown to participants when browsing challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeCategory {
    #[default]
    Award,
    Event,
    Club,
    Personal,
    Other,
}

impl ChallengeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Event => "event",
            Self::Club => "club",
            Self::Personal => "personal",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChallengeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "award" => Ok(Self::Award),
            "event" => Ok(Self::Event),
            "club" => Ok(Self::Club),
            "personal" => Ok(Self::Personal),
            "other" => Ok(Self::Other),
            val => Err(CoreError::Validation(format!("invalid category: {}", val))),
        }
    }
}

/// How progress toward a challenge is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeType {
    #[default]
    Collection,
    Cumulative,
    TimeBounded,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Cumulative => "cumulative",
            Self::TimeBounded => "timeBounded",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" => Ok(Self::Collection),
            "cumulative" => Ok(Self::Cumulative),
            "timeBounded" => Ok(Self::TimeBounded),
            val => Err(CoreError::Validation(format!("invalid challenge type: {}", val))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMethod {
    #[default]
    Count,
    Percentage,
    Points,
    Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeConstraintType {
    /// Fixed start and end dates
    #[default]
    Calendar,
    /// Window counted from the participant's join date
    Relative,
}

/// Discriminant of [`GoalsConfig`], used by the editor to pick a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalsType {
    #[default]
    Collection,
    Cumulative,
}

/// One collectible target of a collection challenge (a US state, a DXCC entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl Goal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            metadata: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }
}

/// Goals of a challenge, tagged by `type` on the wire.
///
/// Only the fields of the selected variant are ever serialized, so a
/// configuration never carries both `items` and `targetValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GoalsConfig {
    Collection {
        #[serde(default)]
        items: Vec<Goal>,
    },
    Cumulative {
        #[serde(rename = "targetValue", default)]
        target_value: f64,
        #[serde(default)]
        unit: String,
        #[serde(
            rename = "calculationRule",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        calculation_rule: Option<String>,
    },
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self::Collection { items: Vec::new() }
    }
}

impl GoalsConfig {
    pub fn goals_type(&self) -> GoalsType {
        match self {
            Self::Collection { .. } => GoalsType::Collection,
            Self::Cumulative { .. } => GoalsType::Cumulative,
        }
    }

    /// Collection items, empty for a cumulative goal
    pub fn items(&self) -> &[Goal] {
        match self {
            Self::Collection { items } => items,
            Self::Cumulative { .. } => &[],
        }
    }
}

/// Progression threshold within a challenge, optionally tied to a badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: String,
    pub name: String,
    pub threshold: f64,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<String>,
}

/// Maps a field of an incoming QSO to the goal field it identifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRule {
    #[serde(default)]
    pub qso_field: String,
    #[serde(default)]
    pub goal_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_regex: Option<String>,
}

impl MatchRule {
    pub fn new(qso_field: impl Into<String>, goal_field: impl Into<String>) -> Self {
        Self {
            qso_field: qso_field.into(),
            goal_field: goal_field.into(),
            transformation: None,
            validation_regex: None,
        }
    }

    /// Placeholder row the editor shows until a QSO field is picked
    pub fn blank() -> Self {
        Self::new("", "id")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Which QSOs count toward a challenge. Absent band or mode lists allow all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bands: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub match_rules: Vec<MatchRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub rule: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub method: ScoringMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Weight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreaker: Option<String>,
    /// Template rendered by participants' clients, `{value}` is the score
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            method: ScoringMethod::Count,
            weights: None,
            tiebreaker: None,
            display_format: default_display_format(),
        }
    }
}

pub const DEFAULT_DISPLAY_FORMAT: &str = "{value}";

fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConstraints {
    #[serde(rename = "type")]
    pub kind: TimeConstraintType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub timezone: String,
}

/// The rules of a challenge, replaced wholesale on every save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeConfiguration {
    pub goals: GoalsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<Tier>>,
    #[serde(default)]
    pub qualification_criteria: QualificationCriteria,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_constraints: Option<TimeConstraints>,
    /// Whether contacts logged before joining count toward goals
    #[serde(default = "default_true")]
    pub historical_qsos_allowed: bool,
}

impl Default for ChallengeConfiguration {
    fn default() -> Self {
        Self {
            goals: GoalsConfig::default(),
            tiers: None,
            qualification_criteria: QualificationCriteria::default(),
            scoring: ScoringConfig::default(),
            time_constraints: None,
            historical_qsos_allowed: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HamalertConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub spot_sources: Vec<String>,
    #[serde(default)]
    pub auto_manage: bool,
}

/// A persisted challenge as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: Uuid,
    /// Server-maintained, round-tripped but never compared locally
    pub version: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub category: ChallengeCategory,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub configuration: ChallengeConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_config: Option<InviteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hamalert_config: Option<HamalertConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

/// Request body for create and update: a challenge minus id, version and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDraft {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub category: ChallengeCategory,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub is_active: bool,
    pub configuration: ChallengeConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_config: Option<InviteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hamalert_config: Option<HamalertConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeListItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ChallengeCategory,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    #[serde(default)]
    pub participant_count: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChallengeList {
    pub challenges: Vec<ChallengeListItem>,
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Query filters for the challenge listing, unset filters are not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub category: Option<ChallengeCategory>,
    pub challenge_type: Option<ChallengeType>,
    pub active: Option<bool>,
}

impl ListFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(challenge_type) = self.challenge_type {
            pairs.push(("type", challenge_type.to_string()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<String>,
    pub image_url: String,
    pub content_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Image and metadata for a new badge, sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeUpload {
    pub file_name: String,
    pub content_type: String,
    pub image: Vec<u8>,
    pub name: String,
    pub tier_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub token: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i32>,
    /// Server-maintained, never decreases while the invite exists
    pub use_count: i32,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i32>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
}
