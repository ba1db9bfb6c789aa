//! Encoder Worker - Abtast-Thread plus Read-and-Clear-Schnittstelle
//!
//! Der Worker besitzt Decoder und Tasterzustand (im Abtast-Thread) und
//! stellt die gesammelten Events beliebig vielen Konsumenten bereit.
//! Jeder `take_*`-Aufruf liest und löscht unter demselben Lock, den auch
//! der Abtast-Tick nimmt: kein Event geht verloren oder wird doppelt
//! geliefert.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use log::{debug, info, warn};
use rgb::RGB8;

use encoder_core::{
    ColorOutput, ConfigError, EncoderError, EncoderEvents, EncoderPins, EventSnapshot,
    LineReader, NoColorOutput, Pull, PwmWriter,
};

use crate::config::WorkerConfig;
use crate::error::WorkerError;
use crate::tasks::{Sampler, spawn_sampling_task};

/// Lock holen; ein Panic in einem anderen Thread macht den Zustand nicht ungültig.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Zustand, den Abtast-Thread und Konsumenten teilen
#[derive(Debug, Default)]
pub(crate) struct WorkerShared {
    pub(crate) events: Mutex<EncoderEvents>,
    stop: AtomicBool,
    running: AtomicBool,
    fault: Mutex<Option<EncoderError>>,
}

impl WorkerShared {
    pub(crate) fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub(crate) fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Release);
    }

    pub(crate) fn record_fault(&self, error: EncoderError) {
        *lock(&self.fault) = Some(error);
    }
}

/// Drehgeber ohne LED (nur Quadratur, optional Taster)
pub type BasicEncoderWorker<L> = EncoderWorker<L, NoColorOutput>;

pub struct EncoderWorker<L, P = NoColorOutput>
where
    L: LineReader + 'static,
    P: PwmWriter,
{
    pins: EncoderPins,
    config: WorkerConfig,
    lines: Mutex<Option<L>>,
    color: Option<Mutex<ColorOutput<P>>>,
    shared: Arc<WorkerShared>,
    handle: Option<JoinHandle<Result<(), EncoderError>>>,
}

impl<L: LineReader + 'static> EncoderWorker<L, NoColorOutput> {
    /// Worker für Drehgeber ohne LED
    pub fn without_color(pins: EncoderPins, lines: L, config: WorkerConfig) -> Result<Self, WorkerError> {
        Self::new(pins, lines, None, config)
    }
}

impl<L, P> EncoderWorker<L, P>
where
    L: LineReader + 'static,
    P: PwmWriter,
{
    /// Erstellt einen Worker und konfiguriert die Hardware.
    ///
    /// - Quadratur-Leitungen: Pull-Up, Taster: Pull-Down
    /// - Farbkanäle starten mit Duty 100 % (LED aus)
    ///
    /// # Fehlerbehandlung
    /// Doppelte Pins, ungültige Schritte pro Rastung oder ein fehlender
    /// bzw. überzähliger PWM-Ausgang werden hier gemeldet, bevor irgendein
    /// Thread läuft.
    pub fn new(
        pins: EncoderPins,
        mut lines: L,
        pwm: Option<P>,
        config: WorkerConfig,
    ) -> Result<Self, WorkerError> {
        pins.validate()?;
        config.validate()?;

        let color = match (pins.color, pwm) {
            (Some(color_pins), Some(pwm)) => Some(ColorOutput::attach(pwm, color_pins, config.pwm_frequency_hz)?),
            (Some(_), None) => return Err(ConfigError::MissingPwmOutput.into()),
            (None, Some(_)) => return Err(ConfigError::MissingColorPins.into()),
            (None, None) => None,
        };

        let inputs = [(pins.a, Pull::Up), (pins.b, Pull::Up)]
            .into_iter()
            .chain(pins.switch.map(|pin| (pin, Pull::Down)));
        for (pin, pull) in inputs {
            lines
                .configure_input(pin, pull)
                .map_err(EncoderError::HardwareSetupFault)?;
        }

        info!("Encoder: attached {:?} ({:?})", pins, pins.capability());

        Ok(Self {
            pins,
            config,
            lines: Mutex::new(Some(lines)),
            color: color.map(Mutex::new),
            shared: Arc::new(WorkerShared::default()),
            handle: None,
        })
    }

    /// Startet den Abtast-Thread.
    ///
    /// Liest vorher die Ausgangspegel; ein Lesefehler dabei oder ein
    /// fehlgeschlagener Spawn wird direkt zurückgegeben, die Leitungen
    /// bleiben beim Worker und `start` kann erneut versucht werden.
    pub fn start(&mut self) -> Result<(), WorkerError> {
        let slot = self.lines.get_mut().unwrap_or_else(PoisonError::into_inner);
        let mut lines = slot.take().ok_or(WorkerError::AlreadyStarted)?;

        let sampler = match Sampler::attach(&mut lines, self.pins, self.config.steps_per_cycle) {
            Ok(sampler) => sampler,
            Err(e) => {
                *slot = Some(lines);
                return Err(e.into());
            }
        };

        self.shared.stop.store(false, Ordering::Release);
        self.shared.set_running(true);

        let spawned = spawn_sampling_task(
            lines,
            sampler,
            Arc::clone(&self.shared),
            self.config.sample_interval,
            self.config.stack_size,
        );
        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err((e, lines)) => {
                warn!("Encoder: failed to spawn sampling thread: {}", e);
                self.shared.set_running(false);
                *self.lines.get_mut().unwrap_or_else(PoisonError::into_inner) = Some(lines);
                Err(WorkerError::Spawn(e))
            }
        }
    }

    /// Fordert ein kooperatives Ende an; der laufende Tick wird noch beendet.
    pub fn stop(&self) {
        debug!("Encoder: stop requested");
        self.shared.request_stop();
    }

    /// Wartet auf das Ende des Abtast-Threads und liefert dessen Ergebnis.
    pub fn join(&mut self) -> Result<(), WorkerError> {
        let handle = self.handle.take().ok_or(WorkerError::NotStarted)?;
        handle.join().map_err(|_| WorkerError::Panicked)??;
        Ok(())
    }

    /// `stop` + `join`
    pub fn shutdown(&mut self) -> Result<(), WorkerError> {
        self.stop();
        self.join()
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Lesefehler, der den Abtast-Thread beendet hat
    pub fn fault(&self) -> Option<EncoderError> {
        *lock(&self.shared.fault)
    }

    pub fn pins(&self) -> &EncoderPins {
        &self.pins
    }

    // -----------------------------------------------------------------------
    // Read-and-Clear
    // -----------------------------------------------------------------------

    /// Rastungen seit dem letzten Aufruf (positiv = aufsteigende Gray-Codes)
    pub fn take_delta(&self) -> i32 {
        lock(&self.shared.events).take_delta()
    }

    /// Wurde der Taster seit dem letzten Aufruf gedrückt?
    pub fn take_up_event(&self) -> bool {
        lock(&self.shared.events).take_up_event()
    }

    /// Wurde der Taster seit dem letzten Aufruf losgelassen?
    pub fn take_down_event(&self) -> bool {
        lock(&self.shared.events).take_down_event()
    }

    /// Alle drei Werte in einem Lock
    pub fn take_events(&self) -> EventSnapshot {
        lock(&self.shared.events).take_all()
    }

    // -----------------------------------------------------------------------
    // LED
    // -----------------------------------------------------------------------

    /// Setzt die Helligkeit eines Farbkanals (0 = Rot, 1 = Grün, 2 = Blau).
    ///
    /// Eigener Lock, unabhängig vom Abtast-Thread. Ein Fehler hier hält
    /// die Abtastung nicht an.
    pub fn set_color(&self, channel: u8, value: u8) -> Result<(), EncoderError> {
        let color = self.color.as_ref().ok_or(EncoderError::ColorUnavailable)?;
        debug!("Encoder: set color channel {} to {}", channel, value);
        lock(color).set(channel, value)
    }

    pub fn set_rgb(&self, rgb: RGB8) -> Result<(), EncoderError> {
        let color = self.color.as_ref().ok_or(EncoderError::ColorUnavailable)?;
        lock(color).set_rgb(rgb)
    }

    /// Zuletzt geschriebene Helligkeit je Kanal, `None` ohne LED
    pub fn color_levels(&self) -> Option<RGB8> {
        self.color.as_ref().map(|color| lock(color).levels())
    }
}

impl<L, P> Drop for EncoderWorker<L, P>
where
    L: LineReader + 'static,
    P: PwmWriter,
{
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
            if let Err(e) = self.join() {
                warn!("Encoder: worker ended with error: {}", e);
            }
        }
    }
}
