//! Quadratur-Decoder
//!
//! Reine Zustandsmaschine: wandelt zwei Leitungszustände in einen
//! vorzeichenbehafteten Schritt um und sammelt ganze Rastungen.

use crate::error::ConfigError;
use crate::types::{GrayCode, LineState};

/// Phasenschritte zwischen zwei mechanischen Rastungen
pub const STEPS_PER_CYCLE: i32 = 4;

/// Quadratur-Decoder für einen Drehgeber
///
/// `remainder` liegt nach jedem Aufruf von [`accumulate`](Self::accumulate)
/// in `[0, steps_per_cycle)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadratureDecoder {
    previous: GrayCode,
    last_delta: i8,
    remainder: i32,
    steps_per_cycle: i32,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureDecoder {
    /// Decoder mit Ausgangs-Code 0 und 4 Schritten pro Rastung
    pub const fn new() -> Self {
        Self {
            previous: GrayCode::new(0),
            last_delta: 0,
            remainder: 0,
            steps_per_cycle: STEPS_PER_CYCLE,
        }
    }

    /// Decoder, dessen Ausgangs-Code aus einer Messung beim Attach stammt
    pub fn with_baseline(line: LineState) -> Self {
        Self {
            previous: GrayCode::from(line),
            ..Self::new()
        }
    }

    /// Ändert die Schritte pro Rastung (z.B. 2 für Half-Step-Encoder)
    pub fn with_steps_per_cycle(mut self, steps: i32) -> Result<Self, ConfigError> {
        if steps <= 0 {
            return Err(ConfigError::InvalidStepsPerCycle(steps));
        }
        self.steps_per_cycle = steps;
        self.remainder = 0;
        Ok(self)
    }

    /// Wertet eine Abtastung aus und liefert den Phasenschritt (-2..=2).
    ///
    /// Ein Sprung um zwei Phasen ist mehrdeutig (verpasste Abtastung oder
    /// Prellen). Er wird in Richtung des vorherigen Schritts gezählt, mit
    /// Betrag 2; ohne vorherigen Schritt gilt die positive Richtung.
    pub fn sample(&mut self, line: LineState) -> i8 {
        let code = GrayCode::from(line);
        if code == self.previous {
            return 0;
        }

        let raw = code.value().wrapping_sub(self.previous.value()) & 0b11;
        let delta: i8 = match raw {
            1 => 1,
            3 => -1,
            _ => {
                if self.last_delta < 0 {
                    -2
                } else {
                    2
                }
            }
        };

        self.last_delta = delta.signum();
        self.previous = code;
        delta
    }

    /// Addiert einen Phasenschritt und liefert die vollständig überquerten
    /// Rastungen seit dem letzten Aufruf.
    ///
    /// Floor-Division: ein einzelner Rückwärtsschritt aus Rest 0 meldet
    /// sofort -1 und hinterlässt Rest `steps_per_cycle - 1`.
    pub fn accumulate(&mut self, delta: i8) -> i32 {
        self.remainder += i32::from(delta);
        let cycles = self.remainder.div_euclid(self.steps_per_cycle);
        self.remainder = self.remainder.rem_euclid(self.steps_per_cycle);
        cycles
    }

    /// `sample` und `accumulate` in einem Schritt
    pub fn advance_cycles(&mut self, line: LineState) -> i32 {
        let delta = self.sample(line);
        self.accumulate(delta)
    }

    pub fn remainder(&self) -> i32 {
        self.remainder
    }

    /// Richtung des letzten Übergangs: -1, 0 oder 1
    pub fn last_delta(&self) -> i8 {
        self.last_delta
    }

    pub fn previous(&self) -> GrayCode {
        self.previous
    }

    pub fn steps_per_cycle(&self) -> i32 {
        self.steps_per_cycle
    }
}
