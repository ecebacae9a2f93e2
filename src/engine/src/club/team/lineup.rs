use crate::club::player::calculator::PerformanceCalculator;
use crate::club::player::player::{Player, dedup_squad};
use crate::club::player::position::{FieldSlot, Role};
use crate::club::team::formation::Formation;
use crate::error::EngineError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

pub const STARTERS_COUNT: usize = 11;
pub const BENCH_MAX: usize = 12;

/// Role fallback order used by auto-fill when a slot's natural role has no
/// unassigned player left.
const FALLBACK_ROLES: [Role; 4] = [
    Role::Forward,
    Role::AttackingMidfielder,
    Role::Midfielder,
    Role::Defender,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Starters,
    Bench,
    Pool,
}

#[derive(Debug, Clone)]
struct PendingSelection {
    player_id: u32,
    source: Partition,
    slot: Option<FieldSlot>,
}

/// A confirmed lineup, frozen by [`LineupManager::confirm`] and handed to the
/// match simulator. Serialized with the boundary field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub formation: String,
    #[serde(rename = "titolari")]
    pub starters: Vec<Player>,
    #[serde(rename = "panchina")]
    pub bench: Vec<Player>,
}

impl Lineup {
    /// Everyone available to the match simulator for this team.
    pub fn roster(&self) -> impl Iterator<Item = &Player> {
        self.starters.iter().chain(self.bench.iter())
    }
}

/// Mutable lineup state: starters (slot-keyed), bench and pool as three
/// disjoint partitions of one deduplicated squad.
#[derive(Debug)]
pub struct LineupManager {
    formation: &'static Formation,
    starters: HashMap<FieldSlot, Player>,
    bench: Vec<Player>,
    pool: Vec<Player>,
    pending: Option<PendingSelection>,
}

impl LineupManager {
    pub fn new(formation: &'static Formation, squad: Vec<Player>) -> Self {
        let mut pool = dedup_squad(squad);
        for player in &mut pool {
            player.field_slot = None;
        }

        LineupManager {
            formation,
            starters: HashMap::new(),
            bench: Vec::new(),
            pool,
            pending: None,
        }
    }

    /// Rebuild manager state from a previously confirmed lineup: starters
    /// return to their recorded slots, bench players to the bench, everyone
    /// else in the squad to the pool.
    pub fn restore(formation: &'static Formation, squad: Vec<Player>, lineup: &Lineup) -> Self {
        let mut manager = Self::new(formation, squad);

        for starter in &lineup.starters {
            if let Some(slot) = starter.field_slot {
                if let Some(idx) = manager.pool.iter().position(|p| p.id == starter.id) {
                    let mut player = manager.pool.remove(idx);
                    player.field_slot = Some(slot);
                    manager.starters.insert(slot, player);
                }
            }
        }

        for benched in &lineup.bench {
            if let Some(idx) = manager.pool.iter().position(|p| p.id == benched.id) {
                manager.bench.push(manager.pool.remove(idx));
            }
        }

        manager
    }

    pub fn formation(&self) -> &'static Formation {
        self.formation
    }

    pub fn starter(&self, slot: FieldSlot) -> Option<&Player> {
        self.starters.get(&slot)
    }

    pub fn starters_count(&self) -> usize {
        self.starters.len()
    }

    pub fn bench(&self) -> &[Player] {
        &self.bench
    }

    pub fn pool(&self) -> &[Player] {
        &self.pool
    }

    pub fn pending_player(&self) -> Option<u32> {
        self.pending.as_ref().map(|p| p.player_id)
    }

    /// Record a pending single-player selection. Selecting the already
    /// pending player clears the selection (toggle semantics).
    pub fn select_for_swap(
        &mut self,
        player_id: u32,
        source: Partition,
        slot: Option<FieldSlot>,
    ) -> Result<(), EngineError> {
        if let Some(pending) = &self.pending {
            if pending.player_id == player_id {
                self.pending = None;
                return Ok(());
            }
        }

        if !self.contains(player_id, source, slot) {
            return Err(EngineError::DataIntegrity(format!(
                "player {} not found in stated partition",
                player_id
            )));
        }

        self.pending = Some(PendingSelection {
            player_id,
            source,
            slot,
        });

        Ok(())
    }

    /// Complete a pending swap against a target player, or move the pending
    /// player into an empty starter slot / onto a partition list. Field slot
    /// keys travel with whoever enters a starter slot and are cleared for
    /// whoever leaves one. Aborts with no state change on bad caller data.
    pub fn complete_swap(
        &mut self,
        target_player: Option<u32>,
        target_partition: Partition,
        target_slot: Option<FieldSlot>,
    ) -> Result<(), EngineError> {
        let pending = self.pending.clone().ok_or_else(|| {
            EngineError::Validation("no pending selection to complete a swap with".to_string())
        })?;

        // Validate everything before touching state.
        if !self.contains(pending.player_id, pending.source, pending.slot) {
            self.pending = None;
            return Err(EngineError::DataIntegrity(format!(
                "pending player {} no longer in its partition",
                pending.player_id
            )));
        }

        let target_player = match target_player {
            Some(id) => {
                if id == pending.player_id {
                    self.pending = None;
                    return Ok(());
                }
                if !self.contains(id, target_partition, target_slot) {
                    return Err(EngineError::DataIntegrity(format!(
                        "target player {} not found in stated partition",
                        id
                    )));
                }
                Some(id)
            }
            None => {
                // A starter move needs a concrete slot to land in.
                if target_partition == Partition::Starters && target_slot.is_none() {
                    return Err(EngineError::DataIntegrity(
                        "starter move without a target slot".to_string(),
                    ));
                }
                // An occupied slot means the caller is really swapping.
                if let Some(slot) = target_slot {
                    if let Some(occupant) = self.starters.get(&slot) {
                        return self.complete_swap(
                            Some(occupant.id),
                            Partition::Starters,
                            Some(slot),
                        );
                    }
                }
                None
            }
        };

        // Starters may be identified without an explicit slot key; resolve
        // the occupied slot so the key can travel with the swap.
        let pending_slot = match pending.source {
            Partition::Starters => pending.slot.or_else(|| self.slot_of(pending.player_id)),
            _ => pending.slot,
        };
        let target_slot = match (target_partition, target_player) {
            (Partition::Starters, Some(id)) => target_slot.or_else(|| self.slot_of(id)),
            _ => target_slot,
        };

        let source = self.take(pending.player_id, pending.source, pending_slot);
        let target = target_player.map(|id| self.take(id, target_partition, target_slot));

        self.place(source, target_partition, target_slot);
        if let Some(target) = target {
            self.place(target, pending.source, pending_slot);
        }

        self.pending = None;
        Ok(())
    }

    /// Deterministic greedy assignment: every formation slot, in formation
    /// order, takes the highest slot-rated unassigned player of the slot's
    /// natural role, falling back through adjacent roles when the natural
    /// pool runs dry. Leftovers fill the bench by overall rating, the rest
    /// return to the pool.
    pub fn auto_fill(&mut self) {
        let mut remaining = self.drain_all();
        let mut starters = HashMap::with_capacity(STARTERS_COUNT);

        for formation_slot in &self.formation.slots {
            let slot = formation_slot.slot;

            let pick = Self::best_for_role(&remaining, slot.role)
                .or_else(|| {
                    FALLBACK_ROLES
                        .iter()
                        .find_map(|&role| Self::best_for_role(&remaining, role))
                });

            if let Some(idx) = pick {
                let mut player = remaining.swap_remove(idx);
                debug!(
                    "auto-fill: {} -> {} (rating {})",
                    player.name,
                    slot,
                    PerformanceCalculator::slot_rating(&player, slot.role)
                );
                player.field_slot = Some(slot);
                starters.insert(slot, player);
            }
        }

        remaining.sort_by_key(|p| Reverse(p.overall.unwrap_or(0)));

        let pool = if remaining.len() > BENCH_MAX {
            remaining.split_off(BENCH_MAX)
        } else {
            Vec::new()
        };

        self.starters = starters;
        self.bench = remaining;
        self.pool = pool;
        self.pending = None;
    }

    /// Move every starter and bench player back into the pool.
    pub fn clear(&mut self) {
        let all = self.drain_all();
        self.pool = all;
        self.pending = None;
    }

    /// Freeze starters and bench as a [`Lineup`]. Fails unless exactly 11
    /// starters are placed; no state transition happens on failure.
    pub fn confirm(&self) -> Result<Lineup, EngineError> {
        if self.starters.len() != STARTERS_COUNT {
            return Err(EngineError::Validation(format!(
                "a lineup needs exactly {} starters, got {}",
                STARTERS_COUNT,
                self.starters.len()
            )));
        }

        let mut starters: Vec<Player> = self.starters.values().cloned().collect();
        starters.sort_by_key(|p| p.field_slot.map(|s| s.index).unwrap_or(u8::MAX));

        Ok(Lineup {
            formation: self.formation.name.to_string(),
            starters,
            bench: self.bench.clone(),
        })
    }

    fn best_for_role(remaining: &[Player], role: Role) -> Option<usize> {
        remaining
            .iter()
            .enumerate()
            .filter(|(_, p)| p.natural_role() == role)
            .max_by_key(|(_, p)| {
                (
                    PerformanceCalculator::slot_rating(p, role),
                    Reverse(p.id),
                )
            })
            .map(|(idx, _)| idx)
    }

    fn drain_all(&mut self) -> Vec<Player> {
        let mut all: Vec<Player> = self.starters.drain().map(|(_, p)| p).collect();
        all.sort_by_key(|p| p.field_slot.map(|s| s.index).unwrap_or(u8::MAX));
        all.append(&mut self.bench);
        all.append(&mut self.pool);

        for player in &mut all {
            player.field_slot = None;
        }

        all
    }

    fn slot_of(&self, player_id: u32) -> Option<FieldSlot> {
        self.starters
            .iter()
            .find(|(_, p)| p.id == player_id)
            .map(|(slot, _)| *slot)
    }

    fn contains(&self, player_id: u32, partition: Partition, slot: Option<FieldSlot>) -> bool {
        match partition {
            Partition::Starters => match slot {
                Some(slot) => self.starters.get(&slot).is_some_and(|p| p.id == player_id),
                None => self.starters.values().any(|p| p.id == player_id),
            },
            Partition::Bench => self.bench.iter().any(|p| p.id == player_id),
            Partition::Pool => self.pool.iter().any(|p| p.id == player_id),
        }
    }

    /// Remove a player from a partition. Callers must have validated
    /// presence via [`Self::contains`] first.
    fn take(&mut self, player_id: u32, partition: Partition, slot: Option<FieldSlot>) -> Player {
        match partition {
            Partition::Starters => {
                let slot = match slot {
                    Some(slot) => slot,
                    None => *self
                        .starters
                        .iter()
                        .find(|(_, p)| p.id == player_id)
                        .map(|(slot, _)| slot)
                        .expect("validated starter"),
                };
                let mut player = self.starters.remove(&slot).expect("validated starter");
                player.field_slot = None;
                player
            }
            Partition::Bench => {
                let idx = self
                    .bench
                    .iter()
                    .position(|p| p.id == player_id)
                    .expect("validated bench player");
                self.bench.remove(idx)
            }
            Partition::Pool => {
                let idx = self
                    .pool
                    .iter()
                    .position(|p| p.id == player_id)
                    .expect("validated pool player");
                self.pool.remove(idx)
            }
        }
    }

    fn place(&mut self, mut player: Player, partition: Partition, slot: Option<FieldSlot>) {
        match partition {
            Partition::Starters => {
                let slot = slot.expect("starter placement requires a slot");
                player.field_slot = Some(slot);
                self.starters.insert(slot, player);
            }
            Partition::Bench => self.bench.push(player),
            Partition::Pool => self.pool.push(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::attributes::PlayerAttributes;

    fn player(id: u32, role: &str, overall: u8) -> Player {
        let mut player = Player::new(id, format!("Player {}", id), role);
        player.overall = Some(overall);
        player.attributes = PlayerAttributes {
            speed: Some(overall),
            shooting: Some(overall),
            passing: Some(overall),
            dribbling: Some(overall),
            defending: Some(overall),
            physicality: Some(overall),
            ..PlayerAttributes::default()
        };
        player
    }

    fn full_squad() -> Vec<Player> {
        let mut squad = Vec::new();
        let mut id = 0;

        for _ in 0..2 {
            id += 1;
            squad.push(player(id, "POR", 70 + id as u8));
        }
        for _ in 0..6 {
            id += 1;
            squad.push(player(id, "DIF", 60 + id as u8));
        }
        for _ in 0..5 {
            id += 1;
            squad.push(player(id, "CEN", 60 + id as u8));
        }
        for _ in 0..2 {
            id += 1;
            squad.push(player(id, "TQ", 60 + id as u8));
        }
        for _ in 0..5 {
            id += 1;
            squad.push(player(id, "ATT", 60 + id as u8));
        }

        squad
    }

    fn manager() -> LineupManager {
        LineupManager::new(Formation::by_name("4-3-3").unwrap(), full_squad())
    }

    #[test]
    fn auto_fill_places_eleven_unique_starters() {
        let mut manager = manager();
        manager.auto_fill();

        assert_eq!(manager.starters_count(), STARTERS_COUNT);

        let mut ids: Vec<u32> = manager
            .formation
            .slots
            .iter()
            .filter_map(|s| manager.starter(s.slot))
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn auto_fill_puts_a_goalkeeper_in_goal_while_one_remains() {
        let mut manager = manager();
        manager.auto_fill();

        let keeper_slot = FieldSlot::new(Role::Goalkeeper, 0);
        let keeper = manager.starter(keeper_slot).expect("goal must be filled");
        assert!(keeper.is_goalkeeper());
    }

    #[test]
    fn auto_fill_prefers_higher_rated_players_per_slot() {
        let mut manager = manager();
        manager.auto_fill();

        // The best goalkeeper (id 2, overall 72) starts ahead of id 1.
        let keeper = manager.starter(FieldSlot::new(Role::Goalkeeper, 0)).unwrap();
        assert_eq!(keeper.id, 2);
    }

    #[test]
    fn auto_fill_respects_bench_capacity() {
        let mut squad = full_squad();
        for i in 0..10 {
            squad.push(player(100 + i, "CEN", 55));
        }

        let mut manager = LineupManager::new(Formation::by_name("4-3-3").unwrap(), squad);
        manager.auto_fill();

        assert_eq!(manager.starters_count(), STARTERS_COUNT);
        assert_eq!(manager.bench().len(), BENCH_MAX);
        assert_eq!(manager.pool().len(), 30 - STARTERS_COUNT - BENCH_MAX);
    }

    #[test]
    fn auto_fill_falls_back_through_roles_when_a_role_runs_out() {
        // No forwards at all: the three forward slots must still be filled.
        let squad: Vec<Player> = full_squad()
            .into_iter()
            .filter(|p| p.natural_role() != Role::Forward)
            .collect();

        let mut manager = LineupManager::new(Formation::by_name("4-3-3").unwrap(), squad);
        manager.auto_fill();

        assert_eq!(manager.starters_count(), STARTERS_COUNT);
    }

    #[test]
    fn confirm_rejects_non_eleven_starters() {
        let manager = manager();

        match manager.confirm() {
            Err(EngineError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn confirm_freezes_starters_with_slot_tags() {
        let mut manager = manager();
        manager.auto_fill();

        let lineup = manager.confirm().expect("11 starters placed");

        assert_eq!(lineup.starters.len(), STARTERS_COUNT);
        assert!(lineup.starters.iter().all(|p| p.field_slot.is_some()));
        assert_eq!(lineup.formation, "4-3-3");

        // No player appears in more than one partition.
        let starter_ids: std::collections::HashSet<u32> =
            lineup.starters.iter().map(|p| p.id).collect();
        assert!(lineup.bench.iter().all(|p| !starter_ids.contains(&p.id)));
    }

    #[test]
    fn swap_toggle_clears_pending_selection() {
        let mut manager = manager();
        let first = manager.pool()[0].id;

        manager.select_for_swap(first, Partition::Pool, None).unwrap();
        assert_eq!(manager.pending_player(), Some(first));

        manager.select_for_swap(first, Partition::Pool, None).unwrap();
        assert_eq!(manager.pending_player(), None);
    }

    #[test]
    fn swap_moves_pool_player_into_empty_starter_slot() {
        let mut manager = manager();
        let keeper_id = manager
            .pool()
            .iter()
            .find(|p| p.is_goalkeeper())
            .unwrap()
            .id;
        let slot = FieldSlot::new(Role::Goalkeeper, 0);

        manager.select_for_swap(keeper_id, Partition::Pool, None).unwrap();
        manager.complete_swap(None, Partition::Starters, Some(slot)).unwrap();

        let placed = manager.starter(slot).unwrap();
        assert_eq!(placed.id, keeper_id);
        assert_eq!(placed.field_slot, Some(slot));
        assert!(manager.pool().iter().all(|p| p.id != keeper_id));
    }

    #[test]
    fn swap_exchanges_slot_keys_between_starter_and_bench() {
        let mut manager = manager();
        manager.auto_fill();

        let slot = FieldSlot::new(Role::Forward, 9);
        let starter_id = manager.starter(slot).unwrap().id;
        let bench_id = manager.bench()[0].id;

        manager
            .select_for_swap(starter_id, Partition::Starters, Some(slot))
            .unwrap();
        manager
            .complete_swap(Some(bench_id), Partition::Bench, None)
            .unwrap();

        let incoming = manager.starter(slot).unwrap();
        assert_eq!(incoming.id, bench_id);
        assert_eq!(incoming.field_slot, Some(slot));

        let outgoing = manager.bench().iter().find(|p| p.id == starter_id).unwrap();
        assert_eq!(outgoing.field_slot, None);
    }

    #[test]
    fn swap_with_unknown_target_aborts_without_mutation() {
        let mut manager = manager();
        manager.auto_fill();

        let slot = FieldSlot::new(Role::Forward, 9);
        let starter_id = manager.starter(slot).unwrap().id;
        let bench_before: Vec<u32> = manager.bench().iter().map(|p| p.id).collect();

        manager
            .select_for_swap(starter_id, Partition::Starters, Some(slot))
            .unwrap();
        let result = manager.complete_swap(Some(9999), Partition::Bench, None);

        assert!(matches!(result, Err(EngineError::DataIntegrity(_))));
        assert_eq!(manager.starter(slot).unwrap().id, starter_id);
        let bench_after: Vec<u32> = manager.bench().iter().map(|p| p.id).collect();
        assert_eq!(bench_before, bench_after);
    }

    #[test]
    fn clear_returns_everyone_to_the_pool() {
        let mut manager = manager();
        let total = manager.pool().len();

        manager.auto_fill();
        manager.clear();

        assert_eq!(manager.starters_count(), 0);
        assert!(manager.bench().is_empty());
        assert_eq!(manager.pool().len(), total);
        assert!(manager.pool().iter().all(|p| p.field_slot.is_none()));
    }

    #[test]
    fn lineup_serde_round_trip_preserves_slots() {
        let mut manager = manager();
        manager.auto_fill();
        let lineup = manager.confirm().unwrap();

        let json = serde_json::to_string(&lineup).unwrap();
        let restored: Lineup = serde_json::from_str(&json).unwrap();

        assert_eq!(lineup, restored);
    }

    #[test]
    fn restore_rebuilds_partitions_from_confirmed_lineup() {
        let mut manager = manager();
        manager.auto_fill();
        let lineup = manager.confirm().unwrap();

        let restored = LineupManager::restore(
            Formation::by_name("4-3-3").unwrap(),
            full_squad(),
            &lineup,
        );

        assert_eq!(restored.starters_count(), STARTERS_COUNT);
        assert_eq!(restored.bench().len(), lineup.bench.len());
        assert_eq!(
            restored.pool().len(),
            full_squad().len() - STARTERS_COUNT - lineup.bench.len()
        );
    }
}
