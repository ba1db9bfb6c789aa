//! Fehler-Typen für Drehgeber und LED-Ausgabe

use core::fmt;

use crate::types::PinId;

/// Fehler beim Hardware-Zugriff (Leitung lesen, PWM schreiben)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Pin wurde nie konfiguriert
    UnknownPin(PinId),
    ReadFailed(PinId),
    WriteFailed(PinId),
}

/// Ungültige Pin-Belegung, wird beim Konstruieren erkannt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Derselbe Pin ist mehreren Rollen zugeordnet
    DuplicatePin(PinId),
    /// Schritte pro Rastung müssen positiv sein
    InvalidStepsPerCycle(i32),
    /// Farb-Pins konfiguriert, aber kein PWM-Ausgang übergeben
    MissingPwmOutput,
    /// PWM-Ausgang übergeben, aber keine Farb-Pins konfiguriert
    MissingColorPins,
}

/// Fehler-Typ für alle Operationen des Drehgebers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderError {
    Config(ConfigError),
    /// Eingang oder PWM-Kanal ließ sich beim Konstruieren nicht einrichten
    HardwareSetupFault(HalError),
    /// Lesefehler im Abtast-Tick; beendet den Worker
    HardwareReadFault(HalError),
    HardwareWriteFault(HalError),
    /// `set_color` mit Kanal außerhalb 0..=2 oder Wert außerhalb 0..=100
    InvalidChannelOrValue { channel: u8, value: u8 },
    /// Variante ohne RGB-LED
    ColorUnavailable,
}

impl From<ConfigError> for EncoderError {
    fn from(error: ConfigError) -> Self {
        EncoderError::Config(error)
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HalError::UnknownPin(pin) => write!(f, "pin {} is not configured", pin),
            HalError::ReadFailed(pin) => write!(f, "failed to read pin {}", pin),
            HalError::WriteFailed(pin) => write!(f, "failed to write pin {}", pin),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::DuplicatePin(pin) => write!(f, "pin {} assigned to more than one role", pin),
            ConfigError::InvalidStepsPerCycle(steps) => {
                write!(f, "steps per cycle must be positive, got {}", steps)
            }
            ConfigError::MissingPwmOutput => write!(f, "color pins configured without a PWM output"),
            ConfigError::MissingColorPins => write!(f, "PWM output given without color pins"),
        }
    }
}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Config(e) => write!(f, "configuration error: {}", e),
            EncoderError::HardwareSetupFault(e) => write!(f, "hardware setup fault: {}", e),
            EncoderError::HardwareReadFault(e) => write!(f, "hardware read fault: {}", e),
            EncoderError::HardwareWriteFault(e) => write!(f, "hardware write fault: {}", e),
            EncoderError::InvalidChannelOrValue { channel, value } => {
                write!(f, "invalid color channel {} or value {} (channel 0-2, value 0-100)", channel, value)
            }
            EncoderError::ColorUnavailable => write!(f, "encoder has no color output"),
        }
    }
}

impl core::error::Error for HalError {}
impl core::error::Error for ConfigError {}
impl core::error::Error for EncoderError {}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            HalError::UnknownPin(pin) => defmt::write!(f, "UnknownPin({})", pin),
            HalError::ReadFailed(pin) => defmt::write!(f, "ReadFailed({})", pin),
            HalError::WriteFailed(pin) => defmt::write!(f, "WriteFailed({})", pin),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::DuplicatePin(pin) => defmt::write!(f, "DuplicatePin({})", pin),
            ConfigError::InvalidStepsPerCycle(steps) => defmt::write!(f, "InvalidStepsPerCycle({})", steps),
            ConfigError::MissingPwmOutput => defmt::write!(f, "MissingPwmOutput"),
            ConfigError::MissingColorPins => defmt::write!(f, "MissingColorPins"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncoderError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Config(e) => defmt::write!(f, "Config({})", e),
            EncoderError::HardwareSetupFault(e) => defmt::write!(f, "HardwareSetupFault({})", e),
            EncoderError::HardwareReadFault(e) => defmt::write!(f, "HardwareReadFault({})", e),
            EncoderError::HardwareWriteFault(e) => defmt::write!(f, "HardwareWriteFault({})", e),
            EncoderError::InvalidChannelOrValue { channel, value } => {
                defmt::write!(f, "InvalidChannelOrValue {{ channel: {}, value: {} }}", channel, value)
            }
            EncoderError::ColorUnavailable => defmt::write!(f, "ColorUnavailable"),
        }
    }
}
