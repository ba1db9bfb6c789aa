// Library-Root: Drehgeber-Worker für Linux-Hosts (Raspberry Pi)
//
// Der Abtast-Thread decodiert den Drehgeber im 1 ms Takt, Konsumenten
// holen sich Rastungen und Taster-Events per Read-and-Clear ab.

// Module
pub mod config;
pub mod error;
pub mod hal;
pub mod tasks;
pub mod worker;

// Re-exports von encoder-core
pub use encoder_core::{
    Brightness, Capability, ColorChannel, ColorOutput, ConfigError, EncoderError, EncoderEvents,
    EncoderPins, EventSnapshot, GrayCode, HalError, LineReader, LineState, NoColorOutput, PinId,
    Pull, PwmWriter, QuadratureDecoder, STEPS_PER_CYCLE, SwitchEdges, SwitchState,
};

pub use config::{WorkerConfig, default_rgb_pins, default_switch_pins};
pub use error::WorkerError;
pub use tasks::Sampler;
pub use worker::{BasicEncoderWorker, EncoderWorker};
