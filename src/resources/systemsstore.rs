//! Phase enter hooks.
//!
//! One-shot systems registered per [`GamePhase`]. The gamestate observer runs
//! every hook of a phase, in registration order, right after entering it.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::resources::gamestate::GamePhase;

#[derive(Resource, Default)]
pub struct SystemsStore {
    on_enter: FxHashMap<GamePhase, Vec<SystemId>>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `id` every time `phase` is entered.
    pub fn on_enter(&mut self, phase: GamePhase, id: SystemId) {
        self.on_enter.entry(phase).or_default().push(id);
    }

    /// Hooks for `phase`; empty when none were registered.
    pub fn enter_hooks(&self, phase: GamePhase) -> &[SystemId] {
        self.on_enter.get(&phase).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn noop() {}

    #[test]
    fn hooks_are_kept_per_phase_in_order() {
        let mut world = World::new();
        let first = world.register_system(noop);
        let second = world.register_system(noop);

        let mut store = SystemsStore::new();
        store.on_enter(GamePhase::Playing, first);
        store.on_enter(GamePhase::Playing, second);

        assert_eq!(store.enter_hooks(GamePhase::Playing), &[first, second]);
        assert!(store.enter_hooks(GamePhase::Won).is_empty());
    }
}
