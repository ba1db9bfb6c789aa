//! Pin-Belegung eines Drehgebers
//!
//! Welche optionalen Pins gesetzt sind, bestimmt die Variante:
//! nur Quadratur, mit Taster, oder mit Taster und RGB-LED.

use crate::error::ConfigError;
use crate::types::{ColorChannel, PinId};

/// Ausstattung eines Drehgebers, abgeleitet aus der Pin-Belegung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Basic,
    Switch,
    Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderPins {
    pub a: PinId,
    pub b: PinId,
    pub switch: Option<PinId>,
    /// Rot, Grün, Blau
    pub color: Option<[PinId; 3]>,
}

impl EncoderPins {
    pub const fn new(a: PinId, b: PinId) -> Self {
        Self {
            a,
            b,
            switch: None,
            color: None,
        }
    }

    pub const fn with_switch(mut self, switch: PinId) -> Self {
        self.switch = Some(switch);
        self
    }

    pub const fn with_color(mut self, red: PinId, green: PinId, blue: PinId) -> Self {
        self.color = Some([red, green, blue]);
        self
    }

    pub fn capability(&self) -> Capability {
        match (self.switch, self.color) {
            (_, Some(_)) => Capability::Rgb,
            (Some(_), None) => Capability::Switch,
            (None, None) => Capability::Basic,
        }
    }

    pub fn color_pin(&self, channel: ColorChannel) -> Option<PinId> {
        self.color.map(|pins| pins[channel.index()])
    }

    /// Alle belegten Pins in fester Reihenfolge (A, B, Taster, R, G, B)
    pub fn iter(&self) -> impl Iterator<Item = PinId> + '_ {
        [self.a, self.b]
            .into_iter()
            .chain(self.switch)
            .chain(self.color.into_iter().flatten())
    }

    /// Prüft, dass kein Pin mehreren Rollen zugeordnet ist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, pin) in self.iter().enumerate() {
            if self.iter().skip(i + 1).any(|other| other == pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncoderPins {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EncoderPins {{ a: {}, b: {}, switch: {}, color: {} }}",
            self.a,
            self.b,
            self.switch,
            self.color
        )
    }
}
