// Hardware Abstraction Layer (HAL) Module
//
// Echte GPIO-Implementierungen der Core-Traits. Auf Nicht-Pi-Hosts
// ist das Modul leer; Tests nutzen simulierte Leitungen.

#[cfg(feature = "rppal")]
pub mod gpio;

#[cfg(feature = "rppal")]
pub use gpio::{RppalLines, RppalPwm};

pub use encoder_core::{LineReader, NoColorOutput, PwmWriter};
