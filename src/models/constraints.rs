//! Hard constraint configuration.
//!
//! Every constraint here is hard: a candidate that violates one is
//! discarded, never penalized. Toggles default to enforced so that an
//! empty configuration yields the strictest behavior.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Lighting policy for late games.
///
/// A game whose start hour, expressed in `time_zone` local time, is at
/// or after `start_hour_local` may only be placed on a field with
/// lights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingRule {
    /// Whether the rule is enforced.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Local hour (0-23) from which lights are required.
    pub start_hour_local: u32,
    /// Time zone in which the start hour is evaluated.
    pub time_zone: Tz,
}

impl LightingRule {
    /// Creates an enabled lighting rule.
    pub fn new(start_hour_local: u32, time_zone: Tz) -> Self {
        Self {
            enabled: true,
            start_hour_local,
            time_zone,
        }
    }
}

/// The hard constraints the engine enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardConstraints {
    /// Whether team blackout windows block placement.
    #[serde(default = "default_true")]
    pub respect_team_blackouts: bool,
    /// Whether umpire availability windows restrict crew selection.
    #[serde(default = "default_true")]
    pub respect_umpire_availability: bool,
    /// Whether games must sit inside published field slots. Accepted
    /// for configuration compatibility; the engine only ever generates
    /// candidates inside slots, so disabling it changes nothing.
    #[serde(default = "default_true")]
    pub respect_field_slots: bool,
    /// Per-team daily game cap. `None` = unbounded.
    #[serde(default)]
    pub max_games_per_team_per_day: Option<u32>,
    /// Lighting policy, if any.
    #[serde(default)]
    pub require_lights_after: Option<LightingRule>,
}

fn default_true() -> bool {
    true
}

impl Default for HardConstraints {
    fn default() -> Self {
        Self {
            respect_team_blackouts: true,
            respect_umpire_availability: true,
            respect_field_slots: true,
            max_games_per_team_per_day: None,
            require_lights_after: None,
        }
    }
}

impl HardConstraints {
    /// Creates the default constraint set: all toggles enforced, no
    /// daily cap, no lighting rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-team daily game cap.
    pub fn with_team_daily_cap(mut self, max_games: u32) -> Self {
        self.max_games_per_team_per_day = Some(max_games);
        self
    }

    /// Sets the lighting rule.
    pub fn with_lighting_rule(mut self, rule: LightingRule) -> Self {
        self.require_lights_after = Some(rule);
        self
    }

    /// Disables blackout enforcement.
    pub fn ignoring_blackouts(mut self) -> Self {
        self.respect_team_blackouts = false;
        self
    }

    /// Disables umpire availability enforcement.
    pub fn ignoring_umpire_availability(mut self) -> Self {
        self.respect_umpire_availability = false;
        self
    }

    /// The lighting rule, if present and enabled.
    pub fn active_lighting_rule(&self) -> Option<&LightingRule> {
        self.require_lights_after.as_ref().filter(|rule| rule.enabled)
    }
}

/// Constraint configuration attached to a scheduling problem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    /// Hard constraints. Always enforced.
    #[serde(default)]
    pub hard: HardConstraints,
}

impl ConstraintSet {
    /// Creates a constraint set from hard constraints.
    pub fn new(hard: HardConstraints) -> Self {
        Self { hard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enforce_everything() {
        let hard = HardConstraints::default();
        assert!(hard.respect_team_blackouts);
        assert!(hard.respect_umpire_availability);
        assert!(hard.respect_field_slots);
        assert_eq!(hard.max_games_per_team_per_day, None);
        assert!(hard.require_lights_after.is_none());
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let set: ConstraintSet = serde_json::from_str("{}").unwrap();
        assert_eq!(set, ConstraintSet::default());

        let hard: HardConstraints = serde_json::from_str("{}").unwrap();
        assert!(hard.respect_team_blackouts);
    }

    #[test]
    fn test_builders() {
        let hard = HardConstraints::new()
            .with_team_daily_cap(1)
            .with_lighting_rule(LightingRule::new(18, chrono_tz::America::New_York))
            .ignoring_blackouts();

        assert_eq!(hard.max_games_per_team_per_day, Some(1));
        assert!(!hard.respect_team_blackouts);
        let rule = hard.active_lighting_rule().unwrap();
        assert_eq!(rule.start_hour_local, 18);
    }

    #[test]
    fn test_disabled_lighting_rule_is_inactive() {
        let mut hard =
            HardConstraints::new().with_lighting_rule(LightingRule::new(18, chrono_tz::UTC));
        hard.require_lights_after.as_mut().unwrap().enabled = false;
        assert!(hard.active_lighting_rule().is_none());
    }

    #[test]
    fn test_lighting_rule_json() {
        let json = r#"{"startHourLocal":18,"timeZone":"America/New_York"}"#;
        let rule: LightingRule = serde_json::from_str(json).unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.time_zone, chrono_tz::America::New_York);
    }
}
