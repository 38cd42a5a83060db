//! Registered lines and their timetables.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{ClockTime, LineId, StopId, ValidationError};

use super::config::{OfficeConfig, ServiceWindow};

/// Where a stop sits on a line and when the line calls there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopEntry {
    /// 0-based position in declaration order.
    pub position: usize,

    /// Scheduled time at the stop.
    pub time: ClockTime,
}

/// A registered line: its stops in declaration order with scheduled times.
///
/// Stop names are unique within a line.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    calls: Vec<(StopId, ClockTime)>,
    index: HashMap<StopId, usize>,
}

impl Line {
    /// Returns the line's id.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Look up a stop on this line.
    pub fn stop(&self, stop: &str) -> Option<StopEntry> {
        let position = *self.index.get(stop)?;
        let (_, time) = &self.calls[position];
        Some(StopEntry {
            position,
            time: *time,
        })
    }

    /// Number of stops on the line.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the line has no stops.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Stops in declaration order.
    pub fn stops(&self) -> impl Iterator<Item = (&StopId, ClockTime)> {
        self.calls.iter().map(|(stop, time)| (stop, *time))
    }
}

/// Extra timetable checks applied when a line is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineRules {
    /// Every stop time must lie inside this window.
    pub service_window: Option<ServiceWindow>,

    /// Stop times must strictly increase along the line.
    pub require_ascending_times: bool,
}

impl From<&OfficeConfig> for LineRules {
    fn from(config: &OfficeConfig) -> Self {
        Self {
            service_window: config.service_window,
            require_ascending_times: config.require_ascending_times,
        }
    }
}

/// Append-only store of lines.
#[derive(Debug, Clone, Default)]
pub struct LineRegistry {
    lines: HashMap<LineId, Line>,
    rules: LineRules,
}

impl LineRegistry {
    /// Create an empty registry with no extra timetable rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry enforcing `rules` on every added line.
    pub fn with_rules(rules: LineRules) -> Self {
        Self {
            lines: HashMap::new(),
            rules,
        }
    }

    /// Register a line from its `(time, stop)` calls in travel order.
    ///
    /// The whole line is validated before anything is stored, so a refused
    /// line leaves the registry untouched.
    pub fn add(
        &mut self,
        id: LineId,
        calls: Vec<(ClockTime, StopId)>,
    ) -> Result<(), ValidationError> {
        let mut index = HashMap::with_capacity(calls.len());
        let mut prev_time: Option<ClockTime> = None;

        for (position, (time, stop)) in calls.iter().enumerate() {
            if index.contains_key(stop) {
                return Err(ValidationError::DuplicateStop {
                    line: id,
                    stop: stop.clone(),
                });
            }

            if let Some(window) = self.rules.service_window {
                if !window.contains(*time) {
                    return Err(ValidationError::OutsideServiceWindow {
                        line: id,
                        stop: stop.clone(),
                    });
                }
            }

            if self.rules.require_ascending_times {
                if let Some(prev) = prev_time {
                    if prev >= *time {
                        return Err(ValidationError::TimesNotAscending {
                            line: id,
                            stop: stop.clone(),
                        });
                    }
                }
            }

            prev_time = Some(*time);
            index.insert(stop.clone(), position);
        }

        if self.lines.contains_key(&id) {
            return Err(ValidationError::DuplicateLine(id));
        }

        debug!(line = %id, stops = calls.len(), "Registered line");

        let line = Line {
            id: id.clone(),
            calls: calls.into_iter().map(|(time, stop)| (stop, time)).collect(),
            index,
        };
        self.lines.insert(id, line);

        Ok(())
    }

    /// Look up a line by id.
    pub fn get(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Number of registered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been registered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
