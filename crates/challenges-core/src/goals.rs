//! Goal list editing and import
//!
//! Imports (presets and CSV) always replace the whole list. CSV parsing is a
//! plain comma split: quoted fields containing commas are not supported and
//! will be split at the embedded comma.

use log::debug;

use crate::{presets::Preset, CoreError, Goal};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Goal> {
        self.goals.get_mut(index)
    }

    pub fn to_vec(&self) -> Vec<Goal> {
        self.goals.clone()
    }

    /// Manually add a single goal. Both fields are required and the id must be new.
    pub fn add(&mut self, id: &str, name: &str) -> Result<&Goal, CoreError> {
        if id.is_empty() || name.is_empty() {
            return Err(CoreError::Validation(
                "goal id and name are required".into(),
            ));
        }
        if self.goals.iter().any(|g| g.id == id) {
            return Err(CoreError::Validation(format!(
                "goal with id {} already exists",
                id
            )));
        }
        self.goals.push(Goal::new(id, name));
        Ok(&self.goals[self.goals.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<Goal, CoreError> {
        if index >= self.goals.len() {
            return Err(CoreError::Validation(format!(
                "goal index {} out of range ({} goals)",
                index,
                self.goals.len()
            )));
        }
        Ok(self.goals.remove(index))
    }

    pub fn replace(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn clear(&mut self) {
        self.goals.clear();
    }

    pub fn import_preset(&mut self, preset: Preset) {
        self.replace(preset.goals());
    }

    /// Replace the list with the rows parsed from `text`, returns the new length
    pub fn import_csv(&mut self, text: &str) -> usize {
        self.replace(parse_goals_csv(text));
        self.goals.len()
    }
}

impl From<Vec<Goal>> for GoalList {
    fn from(goals: Vec<Goal>) -> Self {
        Self { goals }
    }
}

/// Parse `id,name,category` rows into goals.
///
/// The first non-blank line is treated as a header when it contains `id`
/// (case-insensitive). Rows without an id or name are dropped and an empty
/// category is treated as absent.
pub fn parse_goals_csv(text: &str) -> Vec<Goal> {
    // spreadsheet exports often lead with a byte order mark
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let start = match lines.first() {
        Some(first) if first.to_lowercase().contains("id") => 1,
        _ => 0,
    };

    let goals: Vec<Goal> = lines
        .iter()
        .skip(start)
        .filter_map(|line| parse_row(line))
        .collect();

    debug!(
        "parsed {} goals from {} csv lines (header skipped: {})",
        goals.len(),
        lines.len(),
        start == 1
    );
    goals
}

fn parse_row(line: &str) -> Option<Goal> {
    let mut fields = line.split(',').map(clean_field);

    let id = fields.next().unwrap_or_default();
    let name = fields.next().unwrap_or_default();
    let category = fields.next().filter(|c| !c.is_empty());

    if id.is_empty() || name.is_empty() {
        return None;
    }
    Some(Goal::new(id, name).with_category(category))
}

/// Trims the field, then strips one leading and one trailing double quote
fn clean_field(field: &str) -> String {
    let trimmed = field.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}
