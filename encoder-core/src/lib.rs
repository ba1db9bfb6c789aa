//! Encoder Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Quadratur-Decoder, Taster-Flanken, den gemeinsamen
//! Event-Zustand und die Traits für den GPIO-Zugriff.

#![no_std]

pub mod color;
pub mod decoder;
pub mod error;
pub mod events;
pub mod pins;
pub mod switch;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use color::ColorOutput;
pub use decoder::{QuadratureDecoder, STEPS_PER_CYCLE};
pub use error::{ConfigError, EncoderError, HalError};
pub use events::EncoderEvents;
pub use pins::{Capability, EncoderPins};
pub use switch::SwitchState;
pub use traits::{LineReader, NoColorOutput, PwmWriter};
pub use types::{
    Brightness, ColorChannel, EventSnapshot, GrayCode, LineState, PinId, Pull, SwitchEdges,
};
