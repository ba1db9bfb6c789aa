//! RGB-LED des Drehgebers
//!
//! Die LED ist Common-Anode verdrahtet: Duty 100 % = aus, 0 % = voll an.
//! Kein Clamping: Werte außerhalb 0..=100 sind Fehler des Aufrufers.

use rgb::RGB8;

use crate::error::EncoderError;
use crate::traits::PwmWriter;
use crate::types::{Brightness, ColorChannel, PinId};

pub struct ColorOutput<P: PwmWriter> {
    pwm: P,
    pins: [PinId; 3],
    levels: [Brightness; 3],
}

impl<P: PwmWriter> ColorOutput<P> {
    /// Startet alle drei Kanäle mit Duty 100 % (LED aus)
    pub fn attach(mut pwm: P, pins: [PinId; 3], frequency_hz: f64) -> Result<Self, EncoderError> {
        for pin in pins {
            pwm.start_channel(pin, frequency_hz, Brightness::MAX)
                .map_err(EncoderError::HardwareSetupFault)?;
        }
        Ok(Self {
            pwm,
            pins,
            levels: [Brightness::default(); 3],
        })
    }

    /// Setzt die Helligkeit eines Kanals (0..=100).
    ///
    /// # Fehlerbehandlung
    /// Ungültiger Kanal oder Wert → `InvalidChannelOrValue`, ohne Hardware-Zugriff
    pub fn set(&mut self, channel: u8, value: u8) -> Result<(), EncoderError> {
        let invalid = EncoderError::InvalidChannelOrValue { channel, value };
        let color_channel = ColorChannel::try_from(channel).map_err(|()| invalid)?;
        let brightness = Brightness::new(value).ok_or(invalid)?;
        self.write(color_channel, brightness)
    }

    /// Setzt alle drei Kanäle; geprüft wird vor dem ersten Schreiben.
    pub fn set_rgb(&mut self, color: RGB8) -> Result<(), EncoderError> {
        let levels = [
            checked(ColorChannel::Red, color.r)?,
            checked(ColorChannel::Green, color.g)?,
            checked(ColorChannel::Blue, color.b)?,
        ];
        for (channel, brightness) in ColorChannel::ALL.into_iter().zip(levels) {
            self.write(channel, brightness)?;
        }
        Ok(())
    }

    /// Zuletzt geschriebene Helligkeit je Kanal
    pub fn levels(&self) -> RGB8 {
        RGB8 {
            r: self.levels[ColorChannel::Red.index()].value(),
            g: self.levels[ColorChannel::Green.index()].value(),
            b: self.levels[ColorChannel::Blue.index()].value(),
        }
    }

    pub fn pins(&self) -> [PinId; 3] {
        self.pins
    }

    fn write(&mut self, channel: ColorChannel, brightness: Brightness) -> Result<(), EncoderError> {
        let pin = self.pins[channel.index()];
        self.pwm
            .write_duty(pin, brightness.duty_cycle())
            .map_err(EncoderError::HardwareWriteFault)?;
        self.levels[channel.index()] = brightness;
        Ok(())
    }
}

fn checked(channel: ColorChannel, value: u8) -> Result<Brightness, EncoderError> {
    Brightness::new(value).ok_or(EncoderError::InvalidChannelOrValue {
        channel: channel as u8,
        value,
    })
}
