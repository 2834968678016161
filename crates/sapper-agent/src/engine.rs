use std::collections::BTreeSet;

use sapper_core::{Action, AgentState, Cell, GridView, NullTraceSink, TraceEvent, TraceSink};
use sapper_hazard::{HazardConfig, HazardTracker, UpdateDelta};

use crate::planner;

/// Per-tick decision engine: one tracker update, then one plan.
///
/// The engine owns the only cross-tick state, the hazard tracker. Hosts
/// call [`Engine::step`] exactly once per tick with a fresh snapshot of the
/// grid, the active hazard positions, and the agent.
#[derive(Debug, Default)]
pub struct Engine {
    tracker: HazardTracker,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(HazardConfig::default())
    }

    pub fn with_config(config: HazardConfig) -> Self {
        Self {
            tracker: HazardTracker::new(config),
        }
    }

    /// The tracker and its current schedule, read-only.
    pub fn tracker(&self) -> &HazardTracker {
        &self.tracker
    }

    /// Decide the agent's action for `tick`.
    pub fn step<G: GridView>(
        &mut self,
        grid: &G,
        hazards: &BTreeSet<Cell>,
        agent: AgentState,
        tick: u64,
    ) -> Action {
        self.step_traced(grid, hazards, agent, tick, &mut NullTraceSink)
    }

    /// [`Engine::step`], recording what was decided and why into `sink`.
    pub fn step_traced<G: GridView>(
        &mut self,
        grid: &G,
        hazards: &BTreeSet<Cell>,
        agent: AgentState,
        tick: u64,
        sink: &mut dyn TraceSink,
    ) -> Action {
        let delta = self.tracker.update(grid, hazards, tick);
        emit_delta(sink, tick, delta);

        let unsafe_cells = self.tracker.dangerous_cells(grid, tick);
        let claimed_cells = self.tracker.claimed_cells();

        let decision = planner::plan(grid, agent, &unsafe_cells, &claimed_cells);
        if let Some((target, distance)) = decision.target {
            sink.emit(
                TraceEvent::new(tick, "planner.target")
                    .at(target)
                    .with_value(u64::from(distance)),
            );
        }
        sink.emit(TraceEvent::new(tick, action_tag(decision.action)).at(agent.position));

        decision.action
    }
}

fn emit_delta(sink: &mut dyn TraceSink, tick: u64, delta: UpdateDelta) {
    if delta.placed > 0 {
        sink.emit(TraceEvent::new(tick, "tracker.placed").with_value(u64::from(delta.placed)));
    }
    if delta.resolved > 0 {
        sink.emit(TraceEvent::new(tick, "tracker.resolved").with_value(u64::from(delta.resolved)));
    }
    if delta.accelerated > 0 {
        sink.emit(
            TraceEvent::new(tick, "tracker.accelerated").with_value(u64::from(delta.accelerated)),
        );
    }
}

fn action_tag(action: Action) -> &'static str {
    match action {
        Action::MoveUp => "engine.action.move_up",
        Action::MoveDown => "engine.action.move_down",
        Action::MoveLeft => "engine.action.move_left",
        Action::MoveRight => "engine.action.move_right",
        Action::PlaceHazard => "engine.action.place_hazard",
        Action::Idle => "engine.action.idle",
    }
}
