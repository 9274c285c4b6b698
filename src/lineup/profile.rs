//! Sport profiles: position quotas, flex rules and salary caps.

use std::collections::HashSet;

use crate::{
    cli::types::{Position, ProfileName},
    error::{LineupError, Result},
};

use super::model::{FlexGroup, PositionQuota, ProfileDefinition, SportProfile};


/// DraftKings classic salary cap, shared by the NFL and MLB contests.
pub const DRAFTKINGS_SALARY_CAP: i64 = 50_000;

fn invalid(reason: impl Into<String>) -> LineupError {
    LineupError::InvalidProfile {
        reason: reason.into(),
    }
}

fn quotas(entries: &[(&str, u32)]) -> Vec<PositionQuota> {
    entries
        .iter()
        .map(|(code, count)| PositionQuota {
            position: Position(code.to_string()),
            count: *count,
        })
        .collect()
}

impl SportProfile {
    /// Build a profile, deriving `roster_size` from the quotas and flex slots.
    ///
    /// # Errors
    ///
    /// Returns [`LineupError::InvalidProfile`] if:
    /// - there are no quotas, or a position is listed twice
    /// - the salary cap is negative
    /// - the flex group is empty, has zero slots, or names a position
    ///   without a base quota entry
    /// - the roster would be empty, or its size does not fit in a `u32`
    pub fn new(
        name: impl Into<String>,
        quotas: Vec<PositionQuota>,
        flex: Option<FlexGroup>,
        salary_cap: i64,
    ) -> Result<Self> {
        if quotas.is_empty() {
            return Err(invalid("at least one position quota is required"));
        }

        let mut seen = HashSet::new();
        for quota in &quotas {
            if !seen.insert(&quota.position) {
                return Err(invalid(format!("position {} is listed twice", quota.position)));
            }
        }

        if salary_cap < 0 {
            return Err(invalid(format!("salary cap {} is negative", salary_cap)));
        }

        let mut flex_slots = 0;
        if let Some(group) = &flex {
            if group.positions.is_empty() {
                return Err(invalid("flex group has no positions"));
            }
            if group.slots == 0 {
                return Err(invalid("flex group has zero slots"));
            }
            let mut members = HashSet::new();
            for position in &group.positions {
                if !seen.contains(position) {
                    return Err(invalid(format!(
                        "flex position {} has no base quota",
                        position
                    )));
                }
                if !members.insert(position) {
                    return Err(invalid(format!("flex position {} is listed twice", position)));
                }
            }
            flex_slots = group.slots;
        }

        let roster_size = quotas
            .iter()
            .try_fold(flex_slots, |total, q| total.checked_add(q.count))
            .ok_or_else(|| invalid("roster size overflows"))?;
        if roster_size == 0 {
            return Err(invalid("roster size is zero"));
        }

        Ok(Self {
            name: name.into(),
            quotas,
            flex,
            roster_size,
            salary_cap,
        })
    }

    /// DraftKings NFL classic: QB, 2 RB, 3 WR, TE, DST and one RB/WR/TE flex.
    pub fn draftkings_nfl() -> Self {
        Self {
            name: ProfileName::DkNfl.to_string(),
            quotas: quotas(&[("QB", 1), ("RB", 2), ("WR", 3), ("TE", 1), ("DST", 1)]),
            flex: Some(FlexGroup::new(vec![
                Position("RB".to_string()),
                Position("WR".to_string()),
                Position("TE".to_string()),
            ])),
            roster_size: 9,
            salary_cap: DRAFTKINGS_SALARY_CAP,
        }
    }

    /// DraftKings MLB classic: 2 P, C, 1B, 2B, 3B, SS and 3 OF.
    pub fn draftkings_mlb() -> Self {
        Self {
            name: ProfileName::DkMlb.to_string(),
            quotas: quotas(&[
                ("P", 2),
                ("C", 1),
                ("1B", 1),
                ("2B", 1),
                ("3B", 1),
                ("SS", 1),
                ("OF", 3),
            ]),
            flex: None,
            roster_size: 10,
            salary_cap: DRAFTKINGS_SALARY_CAP,
        }
    }

    pub fn builtin(name: ProfileName) -> Self {
        match name {
            ProfileName::DkNfl => Self::draftkings_nfl(),
            ProfileName::DkMlb => Self::draftkings_mlb(),
        }
    }

    /// Copy of this profile with a different salary cap.
    pub fn with_salary_cap(&self, salary_cap: i64) -> Result<Self> {
        Self::new(
            self.name.clone(),
            self.quotas.clone(),
            self.flex.clone(),
            salary_cap,
        )
    }

    /// Base quota for `position`, or `None` if the profile never starts it.
    pub fn quota_for(&self, position: &Position) -> Option<u32> {
        self.quotas
            .iter()
            .find(|q| &q.position == position)
            .map(|q| q.count)
    }

    pub fn is_flex_position(&self, position: &Position) -> bool {
        self.flex.as_ref().is_some_and(|g| g.contains(position))
    }

    pub fn flex_slots(&self) -> u32 {
        self.flex.as_ref().map_or(0, |g| g.slots)
    }
}

impl TryFrom<ProfileDefinition> for SportProfile {
    type Error = LineupError;

    fn try_from(definition: ProfileDefinition) -> Result<Self> {
        let profile = SportProfile::new(
            definition.name,
            definition.quotas,
            definition.flex,
            definition.salary_cap,
        )?;

        match definition.roster_size {
            Some(size) if size != profile.roster_size => Err(invalid(format!(
                "roster size {} does not match quotas plus flex slots ({})",
                size, profile.roster_size
            ))),
            _ => Ok(profile),
        }
    }
}
