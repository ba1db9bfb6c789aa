// Projekt-Konfiguration: Konstanten und Pin-Zuordnungen
use std::time::Duration;

use encoder_core::{ConfigError, EncoderPins, PinId};

pub use encoder_core::STEPS_PER_CYCLE;

// ============================================================================
// Pin-Belegung (BCM-Nummerierung, Sparkfun RGB Encoder)
// ============================================================================

/// Encoder A über 10k Widerstand
pub const ENCODER_PIN_A: PinId = 17;

/// Encoder B über 10k Widerstand
pub const ENCODER_PIN_B: PinId = 27;

/// Encoder Pin 3 (Taster) über 10k Widerstand
pub const ENCODER_PIN_SW: PinId = 22;

/// Encoder Pin 1 (Rot) über 270 Ohm
pub const ENCODER_PIN_R: PinId = 14;

/// Encoder Pin 2 (Grün) über 150 Ohm
pub const ENCODER_PIN_G: PinId = 15;

/// Encoder Pin 4 (Blau) über 150 Ohm
pub const ENCODER_PIN_BLU: PinId = 18;

// ============================================================================
// Timing
// ============================================================================

/// Abtastintervall des Workers in Millisekunden
pub const SAMPLE_INTERVAL_MS: u64 = 1;

/// PWM-Trägerfrequenz der LED-Kanäle
pub const PWM_FREQUENCY_HZ: f64 = 50.0;

/// Name des Abtast-Threads (sichtbar in `top -H` und Panics)
pub const SAMPLING_THREAD_NAME: &str = "encoder-sampling";

/// Standard-Belegung: Quadratur + Taster
pub fn default_switch_pins() -> EncoderPins {
    EncoderPins::new(ENCODER_PIN_A, ENCODER_PIN_B).with_switch(ENCODER_PIN_SW)
}

/// Standard-Belegung: Quadratur + Taster + RGB-LED
pub fn default_rgb_pins() -> EncoderPins {
    default_switch_pins().with_color(ENCODER_PIN_R, ENCODER_PIN_G, ENCODER_PIN_BLU)
}

/// Laufzeit-Parameter des Workers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerConfig {
    pub sample_interval: Duration,
    pub steps_per_cycle: i32,
    pub pwm_frequency_hz: f64,
    /// Stack-Größe des Abtast-Threads, `None` = Standard der Plattform
    pub stack_size: Option<usize>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_millis(SAMPLE_INTERVAL_MS),
            steps_per_cycle: STEPS_PER_CYCLE,
            pwm_frequency_hz: PWM_FREQUENCY_HZ,
            stack_size: None,
        }
    }
}

impl WorkerConfig {
    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    pub fn with_steps_per_cycle(mut self, steps: i32) -> Self {
        self.steps_per_cycle = steps;
        self
    }

    pub fn with_pwm_frequency(mut self, frequency_hz: f64) -> Self {
        self.pwm_frequency_hz = frequency_hz;
        self
    }

    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_cycle <= 0 {
            return Err(ConfigError::InvalidStepsPerCycle(self.steps_per_cycle));
        }
        Ok(())
    }
}
