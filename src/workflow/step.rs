use std::fmt;

use serde::{Deserialize, Serialize};

/// The planning steps, in workflow order. The set is closed; gating and
/// progress arithmetic rely on every step being enumerated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanningStep {
    Aircraft,
    WeightBalance,
    Performance,
    Weather,
    NavLog,
}

impl PlanningStep {
    pub const ALL: [PlanningStep; 5] = [
        PlanningStep::Aircraft,
        PlanningStep::WeightBalance,
        PlanningStep::Performance,
        PlanningStep::Weather,
        PlanningStep::NavLog,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in workflow order.
    pub fn index(self) -> usize {
        match self {
            PlanningStep::Aircraft => 0,
            PlanningStep::WeightBalance => 1,
            PlanningStep::Performance => 2,
            PlanningStep::Weather => 3,
            PlanningStep::NavLog => 4,
        }
    }

    /// Steps that come before this one in workflow order.
    pub fn predecessors(self) -> impl Iterator<Item = PlanningStep> {
        Self::ALL.into_iter().take(self.index())
    }

    /// Steps that come after this one in workflow order.
    pub fn successors(self) -> impl Iterator<Item = PlanningStep> {
        Self::ALL.into_iter().skip(self.index() + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            PlanningStep::Aircraft => "Aircraft Profile",
            PlanningStep::WeightBalance => "Weight & Balance",
            PlanningStep::Performance => "Performance",
            PlanningStep::Weather => "Weather Briefing",
            PlanningStep::NavLog => "Navigation Log",
        }
    }
}

impl fmt::Display for PlanningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Fixed-size set of completed steps, one bit per step. Serialized as the
/// list of contained steps so stored sessions stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlanningStep>", into = "Vec<PlanningStep>")]
pub struct StepSet(u8);

impl StepSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(self, step: PlanningStep) -> bool {
        self.0 & (1 << step.index()) != 0
    }

    /// Idempotent: inserting a present step changes nothing.
    pub fn insert(&mut self, step: PlanningStep) {
        self.0 |= 1 << step.index();
    }

    pub fn remove(&mut self, step: PlanningStep) {
        self.0 &= !(1 << step.index());
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn iter(self) -> impl Iterator<Item = PlanningStep> {
        PlanningStep::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl From<Vec<PlanningStep>> for StepSet {
    fn from(steps: Vec<PlanningStep>) -> Self {
        let mut set = StepSet::new();
        for step in steps {
            set.insert(step);
        }
        set
    }
}

impl From<StepSet> for Vec<PlanningStep> {
    fn from(set: StepSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<PlanningStep> for StepSet {
    fn from_iter<I: IntoIterator<Item = PlanningStep>>(iter: I) -> Self {
        let mut set = StepSet::new();
        for step in iter {
            set.insert(step);
        }
        set
    }
}
