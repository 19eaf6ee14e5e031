//! Ordered tier list editing
//!
//! Every structural change renumbers the list so that each tier's `order`
//! equals its position, starting at 0 with no gaps or duplicates.

use std::collections::HashSet;

use time::OffsetDateTime;

use crate::{CoreError, Tier};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierList {
    tiers: Vec<Tier>,
}

impl TierList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes tiers in list order, discarding whatever `order` values they carried
    pub fn from_tiers(tiers: Vec<Tier>) -> Self {
        let mut list = Self { tiers };
        list.renumber();
        list
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn as_slice(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn get(&self, index: usize) -> Option<&Tier> {
        self.tiers.get(index)
    }

    /// Edit a tier in place. `order` is restored on the next structural change.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tier> {
        self.tiers.get_mut(index)
    }

    pub fn into_vec(mut self) -> Vec<Tier> {
        self.renumber();
        self.tiers
    }

    /// Appends a tier with a generated `tier-<millis>` id
    pub fn add(&mut self, name: impl Into<String>, threshold: f64) -> &Tier {
        let id = self.generate_id();
        self.push(Tier {
            id,
            name: name.into(),
            threshold,
            order: 0,
            badge_id: None,
        })
    }

    pub fn push(&mut self, mut tier: Tier) -> &Tier {
        tier.order = self.tiers.len() as u32;
        self.tiers.push(tier);
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Result<Tier, CoreError> {
        self.check_index(index)?;
        let removed = self.tiers.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Moves the tier at `from` so it ends up at position `to`
    pub fn move_tier(&mut self, from: usize, to: usize) -> Result<(), CoreError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let tier = self.tiers.remove(from);
        self.tiers.insert(to, tier);
        self.renumber();
        Ok(())
    }

    pub fn move_up(&mut self, index: usize) -> Result<(), CoreError> {
        if index == 0 {
            return Err(CoreError::Validation(
                "first tier cannot move up".into(),
            ));
        }
        self.move_tier(index, index - 1)
    }

    pub fn move_down(&mut self, index: usize) -> Result<(), CoreError> {
        if index + 1 >= self.tiers.len() {
            return Err(CoreError::Validation(
                "last tier cannot move down".into(),
            ));
        }
        self.move_tier(index, index + 1)
    }

    fn renumber(&mut self) {
        for (position, tier) in self.tiers.iter_mut().enumerate() {
            tier.order = position as u32;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.tiers.len() {
            return Err(CoreError::Validation(format!(
                "tier index {} out of range ({} tiers)",
                index,
                self.tiers.len()
            )));
        }
        Ok(())
    }

    fn generate_id(&self) -> String {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let taken: HashSet<&str> = self.tiers.iter().map(|t| t.id.as_str()).collect();

        let base = format!("tier-{}", millis);
        if !taken.contains(base.as_str()) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let candidate = format!("{}-{}", base, suffix);
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl From<Vec<Tier>> for TierList {
    fn from(tiers: Vec<Tier>) -> Self {
        Self::from_tiers(tiers)
    }
}
