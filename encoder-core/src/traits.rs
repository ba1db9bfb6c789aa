//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für den GPIO-Zugriff
//! ohne konkrete Implementierung. Der Worker bekommt sie explizit
//! übergeben, statt globalen GPIO-Zustand beim Konstruieren zu setzen.

use crate::error::HalError;
use crate::types::{PinId, Pull};

/// Trait für digitale Eingangsleitungen (Quadratur A/B und Taster)
///
/// # Implementierungen
/// - **Production:** `RppalLines` (Raspberry Pi GPIO, Feature `rppal`)
/// - **Testing:** `SimulatedLines` (vorgegebene Abtastfolgen)
pub trait LineReader: Send {
    /// Konfiguriert einen Pin als Eingang mit Pull-Widerstand.
    ///
    /// Wird genau einmal pro Pin beim Attach aufgerufen.
    fn configure_input(&mut self, pin: PinId, pull: Pull) -> Result<(), HalError>;

    /// Liest den aktuellen Pegel eines konfigurierten Eingangs
    fn read_line(&mut self, pin: PinId) -> Result<bool, HalError>;
}

/// Trait für PWM-Ausgänge der RGB-LED
///
/// # Implementierungen
/// - **Production:** `RppalPwm` (Software-PWM, Feature `rppal`)
/// - **Testing:** `MockPwm` (in-memory Mock)
pub trait PwmWriter: Send {
    /// Startet einen PWM-Kanal mit fester Trägerfrequenz und Start-Duty
    fn start_channel(&mut self, pin: PinId, frequency_hz: f64, duty_percent: u8) -> Result<(), HalError>;

    /// Schreibt einen neuen Duty-Cycle (0..=100 %)
    ///
    /// # Fehlerbehandlung
    /// Gibt `HalError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_duty(&mut self, pin: PinId, duty_percent: u8) -> Result<(), HalError>;
}

/// Platzhalter für Drehgeber ohne LED
///
/// Kann nicht konstruiert werden; `Option<NoColorOutput>` ist immer `None`.
#[derive(Debug)]
pub enum NoColorOutput {}

impl PwmWriter for NoColorOutput {
    fn start_channel(&mut self, _pin: PinId, _frequency_hz: f64, _duty_percent: u8) -> Result<(), HalError> {
        match *self {}
    }

    fn write_duty(&mut self, _pin: PinId, _duty_percent: u8) -> Result<(), HalError> {
        match *self {}
    }
}
