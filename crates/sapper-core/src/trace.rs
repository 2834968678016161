use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// One recorded decision event.
///
/// Dumb data on purpose: the engine records what happened and tooling
/// renders it later. `cell` and `value` mean whatever the tag says they
/// mean (a target cell and its distance, a hazard count, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    /// Dot-namespaced tag, e.g. `"tracker.placed"` or `"planner.target"`.
    pub tag: Cow<'static, str>,
    pub cell: Option<Cell>,
    pub value: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            cell: None,
            value: 0,
        }
    }

    pub fn at(mut self, cell: Cell) -> Self {
        self.cell = Some(cell);
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }
}

/// Receiver for [`TraceEvent`]s emitted while deciding a tick.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Sink that drops every event. The default when nobody is watching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Sink that keeps every event in memory, mostly for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl VecTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events carrying the given tag, in emission order.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> {
        self.events.iter().filter(move |event| event.tag == tag)
    }
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
