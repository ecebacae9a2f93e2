use crate::club::player::player::Player;
use crate::club::player::position::Role;

/// Performance rating derived from raw attributes, role-weighted.
///
/// The base rating is deterministic and clamped to [0, 100]. Missing
/// attribute blocks never fail: the calculator falls back to the player's
/// raw `overall` (or 50 when that too is absent).
pub struct PerformanceCalculator;

const BASE_PERFORMANCE: f32 = 50.0;
const ATTRIBUTE_PIVOT: f32 = 70.0;
const FALLBACK_RATING: u8 = 50;

impl PerformanceCalculator {
    /// Base performance rating in [0, 100].
    pub fn rating(player: &Player) -> u8 {
        if player.natural_role() == Role::Goalkeeper {
            Self::goalkeeper_rating(player)
        } else {
            Self::outfield_rating(player)
        }
    }

    /// Base rating plus per-attribute role bonuses. Floored at zero but not
    /// capped: an elite finisher rated for the forward role may exceed 100.
    pub fn role_adjusted_rating(player: &Player, role: Role) -> u8 {
        let base = Self::rating(player) as f32;

        let bonus: f32 = role_weights(role)
            .iter()
            .filter_map(|&(attribute, weight)| {
                attribute(player).map(|value| (value as f32 - ATTRIBUTE_PIVOT) * weight)
            })
            .sum();

        (base + bonus).max(0.0).round() as u8
    }

    /// Rating of a player placed in a specific field role: the role-adjusted
    /// performance scaled by position compatibility.
    pub fn slot_rating(player: &Player, field_role: Role) -> u8 {
        let adjusted = Self::role_adjusted_rating(player, field_role) as f32;
        let compatibility = player.natural_role().compatibility(field_role);

        (adjusted * compatibility).round() as u8
    }

    /// Fatigue multiplier in [0.5, 1.0]. Players hold full performance up to
    /// 80% of their physicality in minutes, then lose 1% per excess minute.
    pub fn fatigue_modifier(minutes_played: u8, physicality: u8) -> f32 {
        let endurance = physicality as f32 * 0.8;
        let minutes = minutes_played as f32;

        if minutes <= endurance {
            return 1.0;
        }

        (1.0 - (minutes - endurance) * 0.01).max(0.5)
    }

    fn goalkeeper_rating(player: &Player) -> u8 {
        if !player.attributes.has_goalkeeping_set() {
            return player.overall.unwrap_or(FALLBACK_RATING);
        }

        let attrs = &player.attributes;
        let mut performance = BASE_PERFORMANCE;

        performance += delta(attrs.diving) * 0.2;
        performance += delta(attrs.handling) * 0.2;
        performance += delta(attrs.kicking) * 0.1;
        performance += delta(attrs.reflexes) * 0.2;
        performance += delta(attrs.reactions) * 0.15;
        performance += delta(attrs.positioning) * 0.15;

        if let Some(overall) = player.overall {
            performance += (overall as f32 - ATTRIBUTE_PIVOT) * 0.3;
        }

        performance.clamp(0.0, 100.0).round() as u8
    }

    fn outfield_rating(player: &Player) -> u8 {
        if !player.attributes.has_outfield_set() {
            return player.overall.unwrap_or(FALLBACK_RATING);
        }

        let mut performance = BASE_PERFORMANCE;

        for attribute in player.attributes.outfield() {
            performance += delta(attribute) * 0.1;
        }

        if let Some(overall) = player.overall {
            performance += (overall as f32 - ATTRIBUTE_PIVOT) * 0.4;
        }

        performance.clamp(0.0, 100.0).round() as u8
    }
}

#[inline]
fn delta(attribute: Option<u8>) -> f32 {
    attribute.map(|v| v as f32 - ATTRIBUTE_PIVOT).unwrap_or(0.0)
}

type AttributeAccessor = fn(&Player) -> Option<u8>;

/// Per-role attribute weight tables used by the role-adjusted rating.
fn role_weights(role: Role) -> &'static [(AttributeAccessor, f32)] {
    match role {
        Role::Goalkeeper => &[
            (|p| p.attributes.diving, 0.4),
            (|p| p.attributes.handling, 0.3),
            (|p| p.attributes.kicking, 0.2),
            (|p| p.attributes.reflexes, 0.4),
            (|p| p.attributes.reactions, 0.3),
            (|p| p.attributes.positioning, 0.3),
        ],
        Role::Defender => &[
            (|p| p.attributes.defending, 0.4),
            (|p| p.attributes.physicality, 0.3),
            (|p| p.attributes.speed, 0.2),
            (|p| p.attributes.passing, 0.2),
        ],
        Role::Midfielder => &[
            (|p| p.attributes.passing, 0.4),
            (|p| p.attributes.dribbling, 0.3),
            (|p| p.attributes.physicality, 0.2),
            (|p| p.attributes.speed, 0.2),
        ],
        Role::AttackingMidfielder => &[
            (|p| p.attributes.passing, 0.3),
            (|p| p.attributes.dribbling, 0.3),
            (|p| p.attributes.shooting, 0.3),
            (|p| p.attributes.speed, 0.2),
        ],
        Role::Forward => &[
            (|p| p.attributes.shooting, 0.4),
            (|p| p.attributes.dribbling, 0.3),
            (|p| p.attributes.speed, 0.3),
            (|p| p.attributes.physicality, 0.2),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::attributes::PlayerAttributes;

    fn outfield_player(overall: Option<u8>, level: u8) -> Player {
        let mut player = Player::new(9, "Test Forward", "forward");
        player.overall = overall;
        player.attributes = PlayerAttributes {
            speed: Some(level),
            shooting: Some(level),
            passing: Some(level),
            dribbling: Some(level),
            defending: Some(level),
            physicality: Some(level),
            ..PlayerAttributes::default()
        };
        player
    }

    #[test]
    fn missing_attributes_fall_back_to_overall() {
        let mut player = Player::new(1, "No Stats", "forward");
        player.overall = Some(82);

        assert_eq!(PerformanceCalculator::rating(&player), 82);
    }

    #[test]
    fn missing_everything_falls_back_to_fifty() {
        let player = Player::new(1, "Nobody", "forward");
        assert_eq!(PerformanceCalculator::rating(&player), 50);
    }

    #[test]
    fn all_attributes_at_pivot_yield_base_fifty() {
        let player = outfield_player(Some(70), 70);
        assert_eq!(PerformanceCalculator::rating(&player), 50);
    }

    #[test]
    fn rating_is_clamped_to_hundred() {
        let player = outfield_player(Some(99), 99);
        assert_eq!(PerformanceCalculator::rating(&player), 100);
    }

    #[test]
    fn goalkeeper_uses_goalkeeping_block() {
        let mut keeper = Player::new(1, "Test Keeper", "POR");
        keeper.overall = Some(80);
        keeper.attributes = PlayerAttributes {
            diving: Some(80),
            handling: Some(80),
            kicking: Some(80),
            reflexes: Some(80),
            reactions: Some(80),
            positioning: Some(80),
            ..PlayerAttributes::default()
        };

        // 50 + 10*(0.2+0.2+0.1+0.2+0.15+0.15) + 10*0.3 = 63
        assert_eq!(PerformanceCalculator::rating(&keeper), 63);
    }

    #[test]
    fn goalkeeper_missing_block_falls_back_to_overall() {
        let mut keeper = Player::new(1, "Bare Keeper", "Goalkeeper");
        keeper.overall = Some(77);
        keeper.attributes.diving = Some(90);

        assert_eq!(PerformanceCalculator::rating(&keeper), 77);
    }

    #[test]
    fn slot_rating_scales_with_compatibility() {
        let player = outfield_player(Some(85), 85);

        let natural = PerformanceCalculator::slot_rating(&player, Role::Forward);
        let misplaced = PerformanceCalculator::slot_rating(&player, Role::Defender);

        assert!(natural > misplaced);

        let adjusted = PerformanceCalculator::role_adjusted_rating(&player, Role::Defender) as f32;
        assert_eq!(misplaced, (adjusted * 0.5).round() as u8);
    }

    #[test]
    fn fatigue_modifier_boundaries() {
        assert_eq!(PerformanceCalculator::fatigue_modifier(50, 80), 1.0);
        assert_eq!(PerformanceCalculator::fatigue_modifier(64, 80), 1.0);

        let tired = PerformanceCalculator::fatigue_modifier(74, 80);
        assert!((tired - 0.9).abs() < 1e-6);

        assert_eq!(PerformanceCalculator::fatigue_modifier(90, 0), 0.5);
    }
}
