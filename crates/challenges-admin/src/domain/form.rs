use challenges_core::{
    allow_list, normalize_match_rules, toggle_entry, validate_draft, Challenge, ChallengeCategory,
    ChallengeConfiguration, ChallengeDraft, ChallengeTemplate, ChallengeType, CoreError,
    DateRange, GoalList, GoalsConfig, GoalsType, HamalertConfig, InviteConfig, MatchRule,
    QualificationCriteria, ScoringConfig, ScoringMethod, TierList, TimeConstraintType,
    TimeConstraints, Weight, DEFAULT_DISPLAY_FORMAT,
};

pub const DEFAULT_CUMULATIVE_TARGET: f64 = 100.0;
pub const DEFAULT_CUMULATIVE_UNIT: &str = "contacts";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Flat, locally editable view of a challenge.
///
/// Both halves of the goals configuration are kept so switching the goals
/// type back and forth loses nothing; only the selected half is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeForm {
    pub name: String,
    pub description: String,
    pub author: String,
    pub category: ChallengeCategory,
    pub challenge_type: ChallengeType,
    pub is_active: bool,
    pub goals_type: GoalsType,
    pub goals: GoalList,
    pub cumulative_target: f64,
    pub cumulative_unit: String,
    pub tiers: TierList,
    pub bands: Vec<String>,
    pub modes: Vec<String>,
    pub required_fields: Vec<String>,
    pub match_rules: Vec<MatchRule>,
    pub historical_qsos_allowed: bool,
    pub scoring_method: ScoringMethod,
    pub display_format: String,
    pub has_time_constraints: bool,
    pub time_constraint_type: TimeConstraintType,
    pub start_date: String,
    pub end_date: String,
    pub timezone: String,
    carried: CarriedFields,
}

/// Server fields the form has no editor for, sent back as loaded
#[derive(Debug, Clone, Default, PartialEq)]
struct CarriedFields {
    calculation_rule: Option<String>,
    date_range: Option<DateRange>,
    weights: Option<Vec<Weight>>,
    tiebreaker: Option<String>,
    duration: Option<String>,
    invite_config: Option<InviteConfig>,
    hamalert_config: Option<HamalertConfig>,
}

impl Default for ChallengeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            author: String::new(),
            category: ChallengeCategory::Award,
            challenge_type: ChallengeType::Collection,
            is_active: true,
            goals_type: GoalsType::Collection,
            goals: GoalList::new(),
            cumulative_target: DEFAULT_CUMULATIVE_TARGET,
            cumulative_unit: DEFAULT_CUMULATIVE_UNIT.to_string(),
            tiers: TierList::new(),
            bands: Vec::new(),
            modes: Vec::new(),
            required_fields: Vec::new(),
            match_rules: vec![MatchRule::blank()],
            historical_qsos_allowed: true,
            scoring_method: ScoringMethod::Count,
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            has_time_constraints: false,
            time_constraint_type: TimeConstraintType::Calendar,
            start_date: String::new(),
            end_date: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            carried: CarriedFields::default(),
        }
    }
}

impl ChallengeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form state for a challenge loaded from the server
    pub fn from_challenge(challenge: &Challenge) -> Self {
        let mut form = Self::from_configuration(&challenge.configuration);
        form.name = challenge.name.clone();
        form.description = challenge.description.clone();
        form.author = challenge.author.clone().unwrap_or_default();
        form.category = challenge.category;
        form.challenge_type = challenge.challenge_type;
        form.is_active = challenge.is_active.unwrap_or(true);
        form.carried.invite_config = challenge.invite_config.clone();
        form.carried.hamalert_config = challenge.hamalert_config.clone();
        form
    }

    /// Form state seeded from an exported template, ready to be created as a new challenge
    pub fn from_template(template: &ChallengeTemplate) -> Self {
        let mut form = Self::from_configuration(&template.configuration);
        form.name = template.name.clone();
        form.description = template.description.clone();
        form.author = template.author.clone().unwrap_or_default();
        form.category = template.category;
        form.challenge_type = template.challenge_type;
        form
    }

    /// Replace the whole form with the state of `challenge`
    pub fn hydrate(&mut self, challenge: &Challenge) {
        *self = Self::from_challenge(challenge);
    }

    /// Replace the definition with a template, keeping what a template does not carry
    pub fn apply_template(&mut self, template: &ChallengeTemplate) {
        let mut next = Self::from_template(template);
        next.is_active = self.is_active;
        next.carried.invite_config = self.carried.invite_config.take();
        next.carried.hamalert_config = self.carried.hamalert_config.take();
        *self = next;
    }

    fn from_configuration(config: &ChallengeConfiguration) -> Self {
        let mut form = Self::default();

        form.goals_type = config.goals.goals_type();
        match &config.goals {
            GoalsConfig::Collection { items } => {
                form.goals = GoalList::from(items.clone());
            }
            GoalsConfig::Cumulative {
                target_value,
                unit,
                calculation_rule,
            } => {
                // zero and missing targets both fall back to the default
                if *target_value != 0.0 && !target_value.is_nan() {
                    form.cumulative_target = *target_value;
                }
                if !unit.is_empty() {
                    form.cumulative_unit = unit.clone();
                }
                form.carried.calculation_rule = calculation_rule.clone();
            }
        }

        form.tiers = TierList::from_tiers(config.tiers.clone().unwrap_or_default());

        let criteria = &config.qualification_criteria;
        form.bands = criteria.bands.clone().unwrap_or_default();
        form.modes = criteria.modes.clone().unwrap_or_default();
        form.required_fields = criteria.required_fields.clone().unwrap_or_default();
        if !criteria.match_rules.is_empty() {
            form.match_rules = criteria.match_rules.clone();
        }
        form.carried.date_range = criteria.date_range.clone();

        form.historical_qsos_allowed = config.historical_qsos_allowed;
        form.scoring_method = config.scoring.method;
        form.display_format = config.scoring.display_format.clone();
        form.carried.weights = config.scoring.weights.clone();
        form.carried.tiebreaker = config.scoring.tiebreaker.clone();

        if let Some(constraints) = &config.time_constraints {
            form.has_time_constraints = true;
            form.time_constraint_type = constraints.kind;
            form.start_date = constraints.start_date.clone().unwrap_or_default();
            form.end_date = constraints.end_date.clone().unwrap_or_default();
            if !constraints.timezone.is_empty() {
                form.timezone = constraints.timezone.clone();
            }
            form.carried.duration = constraints.duration.clone();
        }

        form
    }

    /// Assemble the request body for create and update
    pub fn to_draft(&self) -> ChallengeDraft {
        ChallengeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            author: non_empty(&self.author),
            category: self.category,
            challenge_type: self.challenge_type,
            is_active: self.is_active,
            configuration: self.to_configuration(),
            invite_config: self.carried.invite_config.clone(),
            hamalert_config: self.carried.hamalert_config.clone(),
        }
    }

    pub fn to_template(&self) -> ChallengeTemplate {
        ChallengeTemplate::from(self.to_draft())
    }

    pub fn to_configuration(&self) -> ChallengeConfiguration {
        let goals = match self.goals_type {
            GoalsType::Collection => GoalsConfig::Collection {
                items: self.goals.to_vec(),
            },
            GoalsType::Cumulative => GoalsConfig::Cumulative {
                target_value: self.cumulative_target,
                unit: self.cumulative_unit.clone(),
                calculation_rule: self.carried.calculation_rule.clone(),
            },
        };

        let tiers = if self.tiers.is_empty() {
            None
        } else {
            Some(self.tiers.clone().into_vec())
        };

        let time_constraints = if self.has_time_constraints {
            Some(TimeConstraints {
                kind: self.time_constraint_type,
                start_date: non_empty(&self.start_date),
                end_date: non_empty(&self.end_date),
                duration: self.carried.duration.clone(),
                timezone: self.timezone.clone(),
            })
        } else {
            None
        };

        ChallengeConfiguration {
            goals,
            tiers,
            qualification_criteria: QualificationCriteria {
                bands: allow_list(&self.bands),
                modes: allow_list(&self.modes),
                required_fields: allow_list(&self.required_fields),
                date_range: self.carried.date_range.clone(),
                match_rules: normalize_match_rules(&self.match_rules),
            },
            scoring: ScoringConfig {
                method: self.scoring_method,
                weights: self.carried.weights.clone(),
                tiebreaker: self.carried.tiebreaker.clone(),
                display_format: self.display_format.clone(),
            },
            time_constraints,
            historical_qsos_allowed: self.historical_qsos_allowed,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_draft(&self.to_draft())
    }

    /// Switch between collection and cumulative goals, the other half is kept
    pub fn set_goals_type(&mut self, goals_type: GoalsType) {
        self.goals_type = goals_type;
    }

    pub fn toggle_band(&mut self, band: &str) {
        toggle_entry(&mut self.bands, band);
    }

    pub fn toggle_mode(&mut self, mode: &str) {
        toggle_entry(&mut self.modes, mode);
    }

    pub fn toggle_required_field(&mut self, field: &str) {
        toggle_entry(&mut self.required_fields, field);
    }

    pub fn add_match_rule(&mut self) {
        self.match_rules.push(MatchRule::blank());
    }

    pub fn set_match_rule(
        &mut self,
        index: usize,
        qso_field: &str,
        goal_field: &str,
    ) -> Result<(), CoreError> {
        let rule = self
            .match_rules
            .get_mut(index)
            .ok_or_else(|| match_rule_out_of_range(index))?;
        rule.qso_field = qso_field.to_string();
        rule.goal_field = goal_field.to_string();
        Ok(())
    }

    pub fn remove_match_rule(&mut self, index: usize) -> Result<MatchRule, CoreError> {
        if index >= self.match_rules.len() {
            return Err(match_rule_out_of_range(index));
        }
        Ok(self.match_rules.remove(index))
    }
}

fn match_rule_out_of_range(index: usize) -> CoreError {
    CoreError::Validation(format!("match rule index {} out of range", index))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
