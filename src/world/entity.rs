use glam::Vec2;

/// Damage dealt per time unit to a unit while it is burning.
const BURNING_DPS: f32 = 0.3;

/// Named timed conditions that can be applied to units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    Burning,
}

/// A status currently affecting a unit, counting down to expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveStatus {
    pub effect: StatusEffect,
    pub remaining: f32,
}

/// A stationary occupant filling one tile. Destroyed occupants are removed
/// by world housekeeping, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Structure {
    health: f32,
    max_health: f32,
}

impl Structure {
    pub fn new(max_health: f32) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Reduce health, saturating at zero.
    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

/// A mobile entity at a free world position.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: u32,
    pub pos: Vec2,
    health: f32,
    statuses: Vec<ActiveStatus>,
}

impl Unit {
    pub fn new(id: u32, pos: Vec2, health: f32) -> Self {
        Self {
            id,
            pos,
            health,
            statuses: Vec::new(),
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Apply a timed status. Re-application keeps the longer remaining
    /// duration; it never shortens one already in effect.
    pub fn apply_status(&mut self, effect: StatusEffect, duration: f32) {
        match self.statuses.iter_mut().find(|s| s.effect == effect) {
            Some(active) => active.remaining = active.remaining.max(duration),
            None => self.statuses.push(ActiveStatus {
                effect,
                remaining: duration,
            }),
        }
    }

    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.statuses.iter().any(|s| s.effect == effect)
    }

    /// Advance status countdowns and apply their periodic damage.
    pub fn update(&mut self, delta_time: f32) {
        let mut damage = 0.0;
        for status in &mut self.statuses {
            if status.effect == StatusEffect::Burning {
                damage += BURNING_DPS * delta_time;
            }
            status.remaining -= delta_time;
        }
        if damage > 0.0 {
            self.damage(damage);
        }
        self.statuses.retain(|s| s.remaining > 0.0);
    }
}

/// Damage every unit within `radius` of `center` and apply a timed status
/// to each. Returns how many units were hit.
pub fn damage_units_in_radius(
    units: &mut [Unit],
    center: Vec2,
    radius: f32,
    amount: f32,
    effect: StatusEffect,
    duration: f32,
) -> u32 {
    let mut hit = 0;
    for unit in units {
        if unit.pos.distance_squared(center) <= radius * radius {
            unit.damage(amount);
            unit.apply_status(effect, duration);
            hit += 1;
        }
    }
    hit
}
