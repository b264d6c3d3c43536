use glam::Vec2;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const SPRINT = 1 << 0;
        const CROUCH = 1 << 1;
        const JUMP = 1 << 2;
        const AUTO_RUN = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Sprint,
    Crouch,
    Jump,
    AutoRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePhase {
    Started,
    Canceled,
}

/// One frame of sampled player intent: continuous axes plus the set of
/// buttons currently held down.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub move_axes: Vec2,
    pub look_delta: Vec2,
    pub buttons: Buttons,
}

/// Turns sampled held-button state into started/canceled edges by diffing
/// against the previous sample.
#[derive(Debug, Default)]
pub struct InputTracker {
    held: Buttons,
}

impl InputTracker {
    const MAPPING: [(Buttons, ButtonAction); 4] = [
        (Buttons::SPRINT, ButtonAction::Sprint),
        (Buttons::CROUCH, ButtonAction::Crouch),
        (Buttons::JUMP, ButtonAction::Jump),
        (Buttons::AUTO_RUN, ButtonAction::AutoRun),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Buttons {
        self.held
    }

    pub fn edges(&mut self, buttons: Buttons) -> Vec<(ButtonAction, EdgePhase)> {
        let started = buttons & !self.held;
        let canceled = self.held & !buttons;
        self.held = buttons;

        let mut edges = Vec::new();
        for (flag, action) in Self::MAPPING {
            if started.contains(flag) {
                edges.push((action, EdgePhase::Started));
            }
            if canceled.contains(flag) {
                edges.push((action, EdgePhase::Canceled));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_produces_single_started_edge() {
        let mut tracker = InputTracker::new();

        let edges = tracker.edges(Buttons::JUMP);
        assert_eq!(edges, vec![(ButtonAction::Jump, EdgePhase::Started)]);

        // Holding the button emits nothing further.
        assert!(tracker.edges(Buttons::JUMP).is_empty());
    }

    #[test]
    fn release_produces_single_canceled_edge() {
        let mut tracker = InputTracker::new();
        tracker.edges(Buttons::SPRINT | Buttons::CROUCH);

        let edges = tracker.edges(Buttons::CROUCH);
        assert_eq!(edges, vec![(ButtonAction::Sprint, EdgePhase::Canceled)]);
    }

    #[test]
    fn simultaneous_transitions_all_reported() {
        let mut tracker = InputTracker::new();
        tracker.edges(Buttons::SPRINT);

        let edges = tracker.edges(Buttons::JUMP | Buttons::AUTO_RUN);
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&(ButtonAction::Sprint, EdgePhase::Canceled)));
        assert!(edges.contains(&(ButtonAction::Jump, EdgePhase::Started)));
        assert!(edges.contains(&(ButtonAction::AutoRun, EdgePhase::Started)));
    }
}
