//! Gesammelte Drehgeber-Events
//!
//! Der Zustand selbst ist nicht synchronisiert. Der Worker legt genau
//! eine Instanz hinter einen Mutex; Abtast-Tick und Read-and-Clear
//! laufen jeweils komplett unter diesem Lock.

use crate::types::{EventSnapshot, SwitchEdges};

/// Rastungen und Taster-Flanken seit dem letzten Auslesen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderEvents {
    delta: i32,
    up_event: bool,
    down_event: bool,
}

impl EncoderEvents {
    pub const fn new() -> Self {
        Self {
            delta: 0,
            up_event: false,
            down_event: false,
        }
    }

    /// Übernimmt das Ergebnis eines Abtast-Ticks.
    ///
    /// Flags werden nur gesetzt, nie gelöscht; das Löschen ist Sache
    /// des Konsumenten.
    pub fn record(&mut self, cycles: i32, edges: SwitchEdges) {
        self.delta = self.delta.saturating_add(cycles);
        self.up_event |= edges.up;
        self.down_event |= edges.down;
    }

    pub fn take_delta(&mut self) -> i32 {
        core::mem::take(&mut self.delta)
    }

    pub fn take_up_event(&mut self) -> bool {
        core::mem::take(&mut self.up_event)
    }

    pub fn take_down_event(&mut self) -> bool {
        core::mem::take(&mut self.down_event)
    }

    /// Liest und löscht alle drei Werte auf einmal
    pub fn take_all(&mut self) -> EventSnapshot {
        EventSnapshot {
            delta: self.take_delta(),
            up_event: self.take_up_event(),
            down_event: self.take_down_event(),
        }
    }

    pub fn peek(&self) -> EventSnapshot {
        EventSnapshot {
            delta: self.delta,
            up_event: self.up_event,
            down_event: self.down_event,
        }
    }
}
