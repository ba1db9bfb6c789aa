// RGB-Demo: Drehen ändert den gewählten Farbkanal, Drücken wechselt den Kanal
//
// Verdrahtung siehe config.rs (Sparkfun RGB Encoder, BCM-Pins).

use std::error::Error;
use std::thread;
use std::time::Duration;

use encoder_worker::hal::{RppalLines, RppalPwm};
use encoder_worker::{Brightness, ColorChannel, EncoderWorker, WorkerConfig, default_rgb_pins};

/// Pause zwischen zwei Abfragen des Workers
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<(), Box<dyn Error>> {
    let mut encoder = EncoderWorker::new(
        default_rgb_pins(),
        RppalLines::new()?,
        Some(RppalPwm::new()?),
        WorkerConfig::default(),
    )?;
    encoder.start()?;

    let mut colors = [0i32; 3];
    let mut channel = ColorChannel::Red;

    loop {
        let delta = encoder.take_delta();
        if delta != 0 {
            let value = &mut colors[channel.index()];
            *value = (*value + delta).clamp(0, i32::from(Brightness::MAX));
            println!("color {} value {}", channel.name(), value);
            // Nach dem Clamping immer im Bereich 0..=100
            encoder.set_color(channel as u8, *value as u8)?;
        }

        if encoder.take_up_event() {
            println!("up!");
            channel = channel.next();
        }

        if encoder.take_down_event() {
            println!("down!");
        }

        if let Some(fault) = encoder.fault() {
            eprintln!("encoder stopped: {}", fault);
            encoder.join()?;
            return Ok(());
        }

        thread::sleep(POLL_INTERVAL);
    }
}
