use glam::{Vec2, vec2};
use rand::Rng;
use tracing::trace;

/// Ambient visual/audio cues the simulation emits. Consumers decide how to
/// present them; the core only names them and where they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Flame,
    Smoke,
}

/// One-way, fire-and-forget sink for ambient effects.
pub trait EffectSink {
    fn emit(&mut self, kind: EffectKind, pos: Vec2);
}

/// Discards every effect.
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn emit(&mut self, _kind: EffectKind, _pos: Vec2) {}
}

/// Stores emitted effects for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub events: Vec<(EffectKind, Vec2)>,
}

impl RecordingEffects {
    pub fn count(&self, kind: EffectKind) -> usize {
        self.events.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl EffectSink for RecordingEffects {
    fn emit(&mut self, kind: EffectKind, pos: Vec2) {
        self.events.push((kind, pos));
    }
}

/// Emits effects as trace-level log events.
pub struct LogEffects;

impl EffectSink for LogEffects {
    fn emit(&mut self, kind: EffectKind, pos: Vec2) {
        trace!(?kind, x = pos.x, y = pos.y, "effect");
    }
}

/// Uniform positional jitter in `[-range, range]` on both axes.
pub fn jittered<R: Rng>(pos: Vec2, range: f32, rng: &mut R) -> Vec2 {
    pos + vec2(
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
    )
}
