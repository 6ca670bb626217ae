/// One observation of an element against the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub is_intersecting: bool,
    /// Visible share of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl VisibilityEntry {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }

    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Unarmed,
    Armed,
    Fired,
}

/// Fires once, the first time an observation reaches the threshold.
///
/// `Unarmed -> Armed -> Fired` is the only path; `Fired` is terminal.
#[derive(Debug, Clone)]
pub struct OneShotTrigger {
    threshold: f64,
    state: TriggerState,
}

impl OneShotTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: TriggerState::Unarmed,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// Returns false unless the trigger was unarmed.
    pub fn arm(&mut self) -> bool {
        if self.state != TriggerState::Unarmed {
            return false;
        }
        self.state = TriggerState::Armed;
        true
    }

    /// Feeds an observation. Returns true only on the observation that fires.
    pub fn offer(&mut self, entry: VisibilityEntry) -> bool {
        if self.state != TriggerState::Armed || !entry.crosses(self.threshold) {
            return false;
        }
        self.state = TriggerState::Fired;
        true
    }

    /// Fires without an observation. Returns false if it already fired.
    pub fn fire(&mut self) -> bool {
        if self.has_fired() {
            return false;
        }
        self.state = TriggerState::Fired;
        true
    }
}
