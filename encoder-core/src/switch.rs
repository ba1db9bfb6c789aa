//! Flankenerkennung für den Drucktaster
//!
//! Kein Debouncing: die 10k Pull-Widerstände und das Abtastintervall
//! des Workers sind die einzige Entstörung.

use crate::types::SwitchEdges;

/// Letzter beobachteter Tasterzustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchState {
    last_state: bool,
}

impl SwitchState {
    /// `initial` ist der beim Attach gelesene Pegel
    pub const fn new(initial: bool) -> Self {
        Self { last_state: initial }
    }

    /// Wertet eine Abtastung aus und merkt sich den neuen Pegel.
    pub fn sample(&mut self, current: bool) -> SwitchEdges {
        let edges = SwitchEdges {
            up: !self.last_state && current,
            down: self.last_state && !current,
        };
        self.last_state = current;
        edges
    }

    pub fn last_state(&self) -> bool {
        self.last_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_edge() {
        let mut switch = SwitchState::new(false);
        assert_eq!(switch.sample(true), SwitchEdges { up: true, down: false });
        assert!(switch.last_state());
    }

    #[test]
    fn test_falling_edge() {
        let mut switch = SwitchState::new(true);
        assert_eq!(switch.sample(false), SwitchEdges { up: false, down: true });
    }

    #[test]
    fn test_steady_level_has_no_edges() {
        let mut switch = SwitchState::new(true);
        assert_eq!(switch.sample(true), SwitchEdges::default());
        let mut switch = SwitchState::new(false);
        assert_eq!(switch.sample(false), SwitchEdges::default());
    }

    #[test]
    fn test_press_release_sequence() {
        let mut switch = SwitchState::default();
        let edges: [SwitchEdges; 3] = [true, false, false].map(|level| switch.sample(level));
        assert!(edges[0].up && !edges[0].down);
        assert!(!edges[1].up && edges[1].down);
        assert_eq!(edges[2], SwitchEdges::default());
    }
}
