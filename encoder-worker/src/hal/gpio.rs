// Raspberry Pi GPIO über rppal
//
// Eingänge werden beim Attach mit Pull-Widerstand konfiguriert und
// danach nur noch gelesen. Die LED-Kanäle nutzen Software-PWM.

use std::collections::HashMap;

use log::{debug, warn};
use rppal::gpio::{Gpio, InputPin, OutputPin};

use encoder_core::{HalError, LineReader, PinId, Pull, PwmWriter};

/// Quadratur- und Taster-Eingänge am Raspberry Pi
pub struct RppalLines {
    gpio: Gpio,
    inputs: HashMap<PinId, InputPin>,
}

impl RppalLines {
    pub fn new() -> Result<Self, rppal::gpio::Error> {
        Ok(Self {
            gpio: Gpio::new()?,
            inputs: HashMap::new(),
        })
    }
}

impl LineReader for RppalLines {
    fn configure_input(&mut self, pin: PinId, pull: Pull) -> Result<(), HalError> {
        let raw = self.gpio.get(pin).map_err(|e| {
            warn!("GPIO: pin {} unavailable: {}", pin, e);
            HalError::UnknownPin(pin)
        })?;
        let input = match pull {
            Pull::Up => raw.into_input_pullup(),
            Pull::Down => raw.into_input_pulldown(),
        };
        debug!("GPIO: pin {} configured as input ({:?})", pin, pull);
        self.inputs.insert(pin, input);
        Ok(())
    }

    fn read_line(&mut self, pin: PinId) -> Result<bool, HalError> {
        self.inputs
            .get(&pin)
            .map(InputPin::is_high)
            .ok_or(HalError::UnknownPin(pin))
    }
}

/// Software-PWM-Ausgänge für die RGB-LED
pub struct RppalPwm {
    gpio: Gpio,
    frequency_hz: f64,
    outputs: HashMap<PinId, OutputPin>,
}

impl RppalPwm {
    pub fn new() -> Result<Self, rppal::gpio::Error> {
        Ok(Self {
            gpio: Gpio::new()?,
            frequency_hz: 0.0,
            outputs: HashMap::new(),
        })
    }
}

impl PwmWriter for RppalPwm {
    fn start_channel(&mut self, pin: PinId, frequency_hz: f64, duty_percent: u8) -> Result<(), HalError> {
        let mut output = self
            .gpio
            .get(pin)
            .map_err(|e| {
                warn!("GPIO: pin {} unavailable: {}", pin, e);
                HalError::UnknownPin(pin)
            })?
            .into_output();
        output
            .set_pwm_frequency(frequency_hz, f64::from(duty_percent) / 100.0)
            .map_err(|_| HalError::WriteFailed(pin))?;
        self.frequency_hz = frequency_hz;
        self.outputs.insert(pin, output);
        Ok(())
    }

    fn write_duty(&mut self, pin: PinId, duty_percent: u8) -> Result<(), HalError> {
        let output = self.outputs.get_mut(&pin).ok_or(HalError::UnknownPin(pin))?;
        output
            .set_pwm_frequency(self.frequency_hz, f64::from(duty_percent) / 100.0)
            .map_err(|_| HalError::WriteFailed(pin))
    }
}
