//! The fire core: per-tile fire instances, their lifecycle update rule, and
//! the sparse spatial registry that owns them.
//!
//! One registry entry exists per burning tile at most. Fires are created and
//! refreshed through `ignite`, shortened through `extinguish`, and removed
//! the moment their elapsed time reaches their lifetime.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::Rng;
use tracing::debug;

use crate::simulation::effects::{EffectKind, EffectSink, jittered};
use crate::world::World;
use crate::world::entity::{StatusEffect, damage_units_in_radius};
use crate::world::grid::{CARDINAL_OFFSETS, TILE_SIZE, TilePoint};

/// Nominal lifetime of a freshly ignited fire, in simulation time units.
pub const BASE_LIFETIME: f32 = 1000.0;

/// An unfed fire with nothing to burn dies this many times faster than its
/// nominal schedule.
const STARVED_DECAY_RATE: f32 = 8.0;
/// Occupant-fed growth: lifetime gain per unit delta is flammability over
/// this divisor, capped below.
const GROWTH_DIVISOR: f32 = 8.0;
const GROWTH_CAP: f32 = 0.6;
const SPREAD_CHANCE: f32 = 0.03;
const FLARE_CHANCE: f32 = 0.1;
const SMOKE_CHANCE: f32 = 0.05;
/// Share of a puddle's flammability a flare transfers into the fire.
const PUDDLE_TRANSFER_DIVISOR: f32 = 3.0;
const OCCUPANT_DAMAGE: f32 = 0.4;
const AREA_DAMAGE: f32 = 3.0;
const BURNING_DURATION: f32 = 0.8;
const EFFECT_JITTER: f32 = 4.0;

/// Generic countdown lifecycle: an elapsed-time accumulator measured against
/// a lifetime threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedLife {
    elapsed: f32,
    lifetime: f32,
}

impl TimedLife {
    pub fn new(lifetime: f32) -> Self {
        Self {
            elapsed: 0.0,
            lifetime,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn advance(&mut self, amount: f32) {
        self.elapsed += amount;
    }

    /// Push the expiry threshold further out.
    pub fn extend(&mut self, amount: f32) {
        self.lifetime += amount;
    }

    /// Restart the countdown against a fresh threshold.
    pub fn reset(&mut self, lifetime: f32) {
        self.elapsed = 0.0;
        self.lifetime = lifetime;
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.lifetime
    }
}

/// One active fire on one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Fire {
    life: TimedLife,
    /// Block flammability, computed once on the first tick and frozen for
    /// this fire's whole life even if the block later changes.
    base_flammability: Option<f32>,
    /// Contribution of the liquid puddle on this tile, re-sampled on flares.
    puddle_flammability: f32,
}

impl Fire {
    fn new() -> Self {
        Self {
            life: TimedLife::new(BASE_LIFETIME),
            base_flammability: None,
            puddle_flammability: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.life.elapsed()
    }

    pub fn lifetime(&self) -> f32 {
        self.life.lifetime()
    }

    pub fn base_flammability(&self) -> Option<f32> {
        self.base_flammability
    }

    pub fn puddle_flammability(&self) -> f32 {
        self.puddle_flammability
    }

    fn update<R: Rng>(
        &mut self,
        tile: TilePoint,
        world: &mut World,
        rng: &mut R,
        effects: &mut dyn EffectSink,
        delta_time: f32,
    ) -> FireVerdict {
        let occupied = world.structures.contains_key(&tile);

        let base = *self.base_flammability.get_or_insert_with(|| {
            world.grid.get(tile).map_or(0.0, |block| block.flammability())
        });
        let flammability = base + self.puddle_flammability;

        // Nothing feeding the fire: burn down faster than the nominal clock.
        if !occupied && flammability <= 0.0 {
            self.life.advance(STARVED_DECAY_RATE * delta_time);
        }

        // An occupant keeps the fire alive, proportional to fuel but capped.
        if occupied {
            self.life.extend(
                (flammability / GROWTH_DIVISOR).clamp(0.0, GROWTH_CAP) * delta_time,
            );
        }

        let mut spread_to = None;
        if flammability > 1.0 && roll(rng, spread_chance(flammability, delta_time)) {
            let (dx, dy) = CARDINAL_OFFSETS[rng.gen_range(0..CARDINAL_OFFSETS.len())];
            spread_to = Some(tile.offset(dx, dy));
        }

        let mut flared = false;
        if roll(rng, FLARE_CHANCE * delta_time) {
            flared = true;
            let center = tile.world_pos();
            effects.emit(EffectKind::Flame, jittered(center, EFFECT_JITTER, rng));

            self.puddle_flammability = world
                .puddles
                .get(tile)
                .map_or(0.0, |p| p.flammability() / PUDDLE_TRANSFER_DIVISOR);

            if let Some(occupant) = world.structures.get_mut(&tile) {
                occupant.damage(OCCUPANT_DAMAGE);
            }
            damage_units_in_radius(
                &mut world.units,
                center,
                TILE_SIZE,
                AREA_DAMAGE,
                StatusEffect::Burning,
                BURNING_DURATION,
            );
        }

        let mut smoked = false;
        if roll(rng, SMOKE_CHANCE * delta_time) {
            smoked = true;
            effects.emit(
                EffectKind::Smoke,
                jittered(tile.world_pos(), EFFECT_JITTER, rng),
            );
        }

        FireVerdict {
            expired: self.life.is_expired(),
            spread_to,
            flared,
            smoked,
        }
    }
}

/// Per-tick chance that a fire attempts to spread, scaled by fuel.
fn spread_chance(flammability: f32, delta_time: f32) -> f32 {
    SPREAD_CHANCE * delta_time * (flammability / 5.0).clamp(0.3, 2.0)
}

fn roll<R: Rng>(rng: &mut R, probability: f32) -> bool {
    rng.gen_bool(f64::from(probability).clamp(0.0, 1.0))
}

/// Outcome of one fire's tick, applied by the registry once the borrow on
/// the fire has ended.
struct FireVerdict {
    expired: bool,
    spread_to: Option<TilePoint>,
    flared: bool,
    smoked: bool,
}

/// Counters from one full update pass, fed into tick statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireReport {
    pub ticked: u32,
    pub spread_ignitions: u32,
    pub expirations: u32,
    pub flares: u32,
    pub smokes: u32,
}

/// Sparse spatial registry of active fires, keyed by tile. Owns every fire's
/// lifetime; at most one fire per tile.
#[derive(Debug, Default)]
pub struct FireField {
    fires: HashMap<TilePoint, Fire>,
}

impl FireField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fires.is_empty()
    }

    pub fn contains(&self, tile: TilePoint) -> bool {
        self.fires.contains_key(&tile)
    }

    pub fn get(&self, tile: TilePoint) -> Option<&Fire> {
        self.fires.get(&tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TilePoint, &Fire)> {
        self.fires.iter()
    }

    /// Start a fire on the tile. If one is already burning there, refresh it
    /// in place instead: the clock restarts against the nominal lifetime and
    /// no second entry is created.
    pub fn ignite(&mut self, tile: TilePoint) {
        match self.fires.entry(tile) {
            Entry::Occupied(mut entry) => entry.get_mut().life.reset(BASE_LIFETIME),
            Entry::Vacant(entry) => {
                entry.insert(Fire::new());
            }
        }
    }

    /// Shorten a fire's remaining life by `intensity * delta_time`. The
    /// intensity is an opaque positive scalar chosen by the caller. No fire
    /// on the tile: no-op.
    pub fn extinguish(&mut self, tile: TilePoint, intensity: f32, delta_time: f32) {
        if let Some(fire) = self.fires.get_mut(&tile) {
            fire.life.advance(intensity * delta_time);
            if fire.life.is_expired() {
                self.remove(tile);
            }
        }
    }

    fn remove(&mut self, tile: TilePoint) {
        self.fires.remove(&tile);
    }

    /// Tick every active fire exactly once with a shared delta-time.
    ///
    /// Fires ignited during the pass (spread targets) are not ticked until
    /// the next pass; fires refreshed during the pass keep their already
    /// ticked state. Coordinate order keeps the RNG call sequence stable for
    /// a given seed.
    pub fn update<R: Rng>(
        &mut self,
        world: &mut World,
        rng: &mut R,
        effects: &mut dyn EffectSink,
        delta_time: f32,
    ) -> FireReport {
        let mut report = FireReport::default();

        let mut tiles: Vec<TilePoint> = self.fires.keys().copied().collect();
        tiles.sort_unstable();

        for tile in tiles {
            let Some(fire) = self.fires.get_mut(&tile) else {
                continue;
            };
            let verdict = fire.update(tile, world, rng, effects, delta_time);
            report.ticked += 1;
            if verdict.flared {
                report.flares += 1;
            }
            if verdict.smoked {
                report.smokes += 1;
            }

            if let Some(target) = verdict.spread_to {
                // The policy does no bounds checking; the grid rejects
                // invalid targets.
                if let Some(valid) = world.grid.tile(target.x, target.y) {
                    self.ignite(valid);
                    report.spread_ignitions += 1;
                }
            }

            if verdict.expired {
                self.remove(tile);
                report.expirations += 1;
                debug!(x = tile.x, y = tile.y, "fire expired");
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::effects::{NullEffects, RecordingEffects};
    use crate::world::block::Block;
    use crate::world::entity::{Structure, Unit};
    use crate::world::grid::Grid;
    use crate::world::puddle::{Liquid, Puddle};
    use glam::vec2;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// RNG whose zero stream makes every nonzero chance succeed and every
    /// uniform choice pick the first candidate.
    struct AlwaysRng;

    impl RngCore for AlwaysRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    /// RNG whose all-ones stream makes every chance below 1.0 fail.
    struct NeverRng;

    impl RngCore for NeverRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xFF);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0xFF);
            Ok(())
        }
    }

    fn world_of(block: Block) -> World {
        World::new("test", Grid::new(8, 8, block))
    }

    fn t(x: i32, y: i32) -> TilePoint {
        TilePoint::new(x, y)
    }

    // === TimedLife ===

    #[test]
    fn timed_life_advances_to_expiry() {
        let mut life = TimedLife::new(10.0);
        assert!(!life.is_expired());
        life.advance(9.9);
        assert!(!life.is_expired());
        life.advance(0.1);
        assert!(life.is_expired());
    }

    #[test]
    fn timed_life_extend_pushes_threshold_out() {
        let mut life = TimedLife::new(10.0);
        life.advance(10.0);
        life.extend(5.0);
        assert!(!life.is_expired());
        assert_eq!(life.lifetime(), 15.0);
    }

    #[test]
    fn timed_life_reset_restarts_the_countdown() {
        let mut life = TimedLife::new(10.0);
        life.advance(7.0);
        life.reset(20.0);
        assert_eq!(life.elapsed(), 0.0);
        assert_eq!(life.lifetime(), 20.0);
    }

    // === Registry ===

    #[test]
    fn ignite_creates_a_single_entry() {
        let mut fires = FireField::new();
        fires.ignite(t(2, 2));
        assert_eq!(fires.len(), 1);
        let fire = fires.get(t(2, 2)).unwrap();
        assert_eq!(fire.elapsed(), 0.0);
        assert_eq!(fire.lifetime(), BASE_LIFETIME);
    }

    #[test]
    fn reignition_refreshes_in_place() {
        let mut world = world_of(Block::Stone);
        let mut fires = FireField::new();
        let tile = t(2, 2);
        fires.ignite(tile);

        // Let the starved fire accumulate some elapsed time.
        for _ in 0..3 {
            fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        }
        assert_eq!(fires.get(tile).unwrap().elapsed(), 24.0);

        fires.ignite(tile);
        assert_eq!(fires.len(), 1);
        let fire = fires.get(tile).unwrap();
        assert_eq!(fire.elapsed(), 0.0);
        assert_eq!(fire.lifetime(), BASE_LIFETIME);
        // The flammability cache survives a refresh.
        assert_eq!(fire.base_flammability(), Some(0.0));
    }

    #[test]
    fn extinguish_without_a_fire_is_a_noop() {
        let mut fires = FireField::new();
        fires.extinguish(t(1, 1), 100.0, 1.0);
        assert!(fires.is_empty());

        fires.ignite(t(2, 2));
        fires.extinguish(t(3, 3), 100.0, 1.0);
        assert_eq!(fires.get(t(2, 2)).unwrap().elapsed(), 0.0);
    }

    #[test]
    fn extinguish_adds_intensity_times_delta() {
        let mut fires = FireField::new();
        let tile = t(2, 2);
        fires.ignite(tile);

        fires.extinguish(tile, 10.0, 0.5);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 5.0);

        for _ in 0..200 {
            fires.extinguish(tile, 10.0, 0.5);
        }
        assert!(!fires.contains(tile));
    }

    #[test]
    fn overwhelming_extinguish_removes_immediately() {
        let mut fires = FireField::new();
        let tile = t(2, 2);
        fires.ignite(tile);
        fires.extinguish(tile, 2000.0, 1.0);
        assert!(fires.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut fires = FireField::new();
        fires.ignite(t(1, 1));
        fires.remove(t(1, 1));
        fires.remove(t(1, 1));
        assert!(fires.is_empty());
    }

    // === Decay ===

    #[test]
    fn starved_fire_decays_eight_times_faster() {
        let mut world = world_of(Block::Stone);
        let mut fires = FireField::new();
        let tile = t(2, 2);
        fires.ignite(tile);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 8.0);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 0.5);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 12.0);
    }

    #[test]
    fn occupant_suppresses_decay() {
        let mut world = world_of(Block::Stone);
        let tile = t(2, 2);
        world.structures.insert(tile, Structure::new(40.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 0.0);
    }

    #[test]
    fn flammable_ground_suppresses_decay() {
        let mut world = world_of(Block::Grass);
        let tile = t(2, 2);
        let mut fires = FireField::new();
        fires.ignite(tile);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 0.0);
    }

    #[test]
    fn unfed_fire_expires_after_exactly_125_ticks() {
        let mut world = world_of(Block::Stone);
        let mut fires = FireField::new();
        let tile = t(4, 4);
        fires.ignite(tile);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..124 {
            fires.update(&mut world, &mut rng, &mut NullEffects, 1.0);
        }
        assert_eq!(fires.len(), 1);
        assert_eq!(fires.get(tile).unwrap().elapsed(), 992.0);

        let report = fires.update(&mut world, &mut rng, &mut NullEffects, 1.0);
        assert!(fires.is_empty());
        assert_eq!(report.expirations, 1);
    }

    // === Growth ===

    #[test]
    fn growth_is_proportional_below_the_cap() {
        let mut world = world_of(Block::CoalSeam);
        let tile = t(2, 2);
        world.structures.insert(tile, Structure::new(40.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        let fire = fires.get(tile).unwrap();
        // CoalSeam flammability 2.4 -> growth 0.3 per unit delta.
        assert!((fire.lifetime() - (BASE_LIFETIME + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn growth_never_exceeds_the_cap() {
        let mut world = world_of(Block::CoalSeam);
        let tile = t(2, 2);
        world.structures.insert(tile, Structure::new(1e9));
        // Enough oil that the combined flammability far exceeds the cap point.
        world.puddles.place(tile, Puddle::new(Liquid::Oil, 40.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        // First forced tick flares and absorbs the puddle contribution.
        fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);
        let after_first = fires.get(tile).unwrap().lifetime();

        fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);
        let after_second = fires.get(tile).unwrap().lifetime();

        assert!(fires.get(tile).unwrap().puddle_flammability() > 4.8);
        assert!((after_second - after_first - 0.6).abs() < 1e-4);
    }

    #[test]
    fn growth_requires_an_occupant() {
        let mut world = world_of(Block::CoalSeam);
        let mut fires = FireField::new();
        fires.ignite(t(2, 2));

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(t(2, 2)).unwrap().lifetime(), BASE_LIFETIME);
    }

    // === Spread ===

    #[test]
    fn spread_chance_is_clamped_on_both_sides() {
        assert!((spread_chance(5.0, 1.0) - 0.03).abs() < 1e-6);
        // Very low fuel bottoms out at the 0.3 scale.
        assert!((spread_chance(1.01, 1.0) - 0.009).abs() < 1e-6);
        // Huge fuel tops out at the 2.0 scale.
        assert!((spread_chance(500.0, 1.0) - 0.06).abs() < 1e-6);
    }

    #[test]
    fn no_spread_at_or_below_unit_flammability() {
        // Stone plus an oil puddle of amount 2.0 lands exactly at 1.0 once a
        // flare absorbs it: 1.5 * 2.0 / 3 = 1.0. Not strictly above 1.
        let mut world = world_of(Block::Stone);
        let tile = t(4, 4);
        world.puddles.place(tile, Puddle::new(Liquid::Oil, 2.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        for _ in 0..10 {
            fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);
        }
        assert_eq!(fires.get(tile).unwrap().puddle_flammability(), 1.0);
        assert_eq!(fires.len(), 1);
    }

    #[test]
    fn forced_spread_ignites_the_first_cardinal_neighbor() {
        let mut world = world_of(Block::Timber);
        let mut fires = FireField::new();
        fires.ignite(t(3, 3));

        let report = fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);

        assert_eq!(report.spread_ignitions, 1);
        assert_eq!(fires.len(), 2);
        let spawned = fires.get(t(4, 3)).unwrap();
        // Fires ignited mid-pass are not ticked until the next pass.
        assert_eq!(spawned.elapsed(), 0.0);
        assert_eq!(spawned.base_flammability(), None);
    }

    #[test]
    fn spread_off_the_grid_is_a_noop() {
        let mut world = World::new("test", Grid::new(1, 1, Block::Timber));
        let mut fires = FireField::new();
        fires.ignite(t(0, 0));

        let report = fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);

        assert_eq!(report.spread_ignitions, 0);
        assert_eq!(fires.len(), 1);
    }

    // === Flare and smoke ===

    #[test]
    fn flare_damages_occupant_and_nearby_units() {
        let mut world = world_of(Block::Grass);
        let tile = t(3, 3);
        world.structures.insert(tile, Structure::new(40.0));
        world.units.push(Unit::new(0, tile.world_pos(), 20.0));
        world.units.push(Unit::new(1, vec2(200.0, 200.0), 20.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        let report = fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);

        assert_eq!(report.flares, 1);
        assert!((world.occupant(tile).unwrap().health() - 39.6).abs() < 1e-4);
        assert_eq!(world.units[0].health(), 17.0);
        assert!(world.units[0].has_status(StatusEffect::Burning));
        assert_eq!(world.units[1].health(), 20.0);
        assert!(!world.units[1].has_status(StatusEffect::Burning));
    }

    #[test]
    fn flare_resamples_the_puddle() {
        let mut world = world_of(Block::Stone);
        let tile = t(3, 3);
        world.puddles.place(tile, Puddle::new(Liquid::Oil, 3.0));
        let mut fires = FireField::new();
        fires.ignite(tile);

        fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);
        // 1.5 * 3.0 / 3 = 1.5
        assert_eq!(fires.get(tile).unwrap().puddle_flammability(), 1.5);

        world.puddles.remove(tile);
        fires.update(&mut world, &mut AlwaysRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(tile).unwrap().puddle_flammability(), 0.0);
    }

    #[test]
    fn flare_and_smoke_emit_effects() {
        let mut world = world_of(Block::Grass);
        let mut fires = FireField::new();
        fires.ignite(t(2, 2));
        let mut effects = RecordingEffects::default();

        let report = fires.update(&mut world, &mut AlwaysRng, &mut effects, 1.0);

        assert_eq!(report.flares, 1);
        assert_eq!(report.smokes, 1);
        assert_eq!(effects.count(EffectKind::Flame), 1);
        assert_eq!(effects.count(EffectKind::Smoke), 1);
    }

    #[test]
    fn suppressed_draws_emit_nothing() {
        let mut world = world_of(Block::Grass);
        let mut fires = FireField::new();
        fires.ignite(t(2, 2));
        let mut effects = RecordingEffects::default();

        let report = fires.update(&mut world, &mut NeverRng, &mut effects, 1.0);

        assert_eq!(report.flares, 0);
        assert_eq!(report.smokes, 0);
        assert!(effects.events.is_empty());
    }

    // === Caching ===

    #[test]
    fn base_flammability_is_frozen_after_first_tick() {
        let mut world = world_of(Block::Grass);
        let tile = t(2, 2);
        let mut fires = FireField::new();
        fires.ignite(tile);

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        assert_eq!(fires.get(tile).unwrap().base_flammability(), Some(0.45));

        // The block changes under the fire; the cached value must not.
        world.grid.set(tile, Block::Stone);
        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        let fire = fires.get(tile).unwrap();
        assert_eq!(fire.base_flammability(), Some(0.45));
        // Stale fuel still counts as fuel: no starved decay.
        assert_eq!(fire.elapsed(), 0.0);
    }

    #[test]
    fn fire_on_an_invalid_tile_starves_out() {
        // Direct ignition outside the grid is permitted by the registry; the
        // tile just never yields fuel.
        let mut world = world_of(Block::Timber);
        let mut fires = FireField::new();
        fires.ignite(t(-5, -5));

        fires.update(&mut world, &mut NeverRng, &mut NullEffects, 1.0);
        let fire = fires.get(t(-5, -5)).unwrap();
        assert_eq!(fire.base_flammability(), Some(0.0));
        assert_eq!(fire.elapsed(), 8.0);
    }
}
