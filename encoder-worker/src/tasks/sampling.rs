// Abtast-Task - Liest Quadratur- und Taster-Leitungen im festen Intervall
use std::io;
use std::sync::{Arc, Mutex, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info, warn};

use encoder_core::{
    EncoderError, EncoderEvents, EncoderPins, LineReader, LineState, QuadratureDecoder,
    SwitchEdges, SwitchState,
};

use crate::config::SAMPLING_THREAD_NAME;
use crate::worker::{WorkerShared, lock};

/// Decoder- und Tasterzustand eines Drehgebers
///
/// Gehört exklusiv dem Abtast-Thread; nur das Ergebnis eines Ticks
/// landet im gemeinsamen [`EncoderEvents`].
#[derive(Debug, Clone)]
pub struct Sampler {
    pins: EncoderPins,
    decoder: QuadratureDecoder,
    switch: Option<SwitchState>,
}

impl Sampler {
    /// Liest die Ausgangspegel, damit der erste Tick keine Phantom-Events liefert.
    pub fn attach<L: LineReader>(
        lines: &mut L,
        pins: EncoderPins,
        steps_per_cycle: i32,
    ) -> Result<Self, EncoderError> {
        let baseline = read_quadrature(lines, &pins)?;
        let decoder = QuadratureDecoder::with_baseline(baseline).with_steps_per_cycle(steps_per_cycle)?;
        let switch = read_switch(lines, &pins)?.map(SwitchState::new);
        debug!("Encoder: baseline {:?}, switch {:?}", baseline, switch);

        Ok(Self {
            pins,
            decoder,
            switch,
        })
    }

    /// Ein Abtast-Tick.
    ///
    /// Alle Leitungen werden gelesen, bevor sich irgendein Zustand ändert;
    /// bei einem Lesefehler wird nichts verbucht.
    pub fn tick<L: LineReader>(
        &mut self,
        lines: &mut L,
        events: &Mutex<EncoderEvents>,
    ) -> Result<(), EncoderError> {
        let line = read_quadrature(lines, &self.pins)?;
        let level = read_switch(lines, &self.pins)?;

        let cycles = self.decoder.advance_cycles(line);
        let edges = match (self.switch.as_mut(), level) {
            (Some(switch), Some(level)) => switch.sample(level),
            _ => SwitchEdges::default(),
        };

        if cycles != 0 || edges.up || edges.down {
            lock(events).record(cycles, edges);
        }
        Ok(())
    }

    pub fn decoder(&self) -> &QuadratureDecoder {
        &self.decoder
    }
}

fn read_quadrature<L: LineReader>(lines: &mut L, pins: &EncoderPins) -> Result<LineState, EncoderError> {
    let a = lines.read_line(pins.a).map_err(EncoderError::HardwareReadFault)?;
    let b = lines.read_line(pins.b).map_err(EncoderError::HardwareReadFault)?;
    Ok(LineState::new(a, b))
}

fn read_switch<L: LineReader>(lines: &mut L, pins: &EncoderPins) -> Result<Option<bool>, EncoderError> {
    pins.switch
        .map(|pin| lines.read_line(pin))
        .transpose()
        .map_err(EncoderError::HardwareReadFault)
}

/// Abtast-Schleife - Testbare Logik ohne Thread-Verwaltung
///
/// Läuft bis ein Stop angefordert wird oder ein Lesefehler auftritt:
/// - Tick ausführen (Leitungen lesen, Events verbuchen)
/// - Stop-Flag prüfen, dann erst schlafen
///
/// Der Lock wird nie über das `sleep` gehalten.
pub(crate) fn sampling_logic<L: LineReader>(
    lines: &mut L,
    sampler: &mut Sampler,
    shared: &WorkerShared,
    interval: Duration,
) -> Result<(), EncoderError> {
    loop {
        if let Err(e) = sampler.tick(lines, &shared.events) {
            error!("Encoder: hardware fault, sampling stopped: {}", e);
            return Err(e);
        }
        if shared.stop_requested() {
            return Ok(());
        }
        thread::sleep(interval);
    }
}

/// Startet die Abtast-Schleife auf einem eigenen Thread
///
/// Der Thread besitzt `lines` und `sampler` exklusiv. Beim Beenden
/// wird ein Fehler in `shared` abgelegt und `running` zurückgesetzt.
///
/// `lines` wandert erst nach erfolgreichem Spawn über einen Kanal in den
/// Thread; schlägt der Spawn fehl, bekommt der Aufrufer sie zurück.
pub(crate) fn spawn_sampling_task<L: LineReader + 'static>(
    lines: L,
    sampler: Sampler,
    shared: Arc<WorkerShared>,
    interval: Duration,
    stack_size: Option<usize>,
) -> Result<JoinHandle<Result<(), EncoderError>>, (io::Error, L)> {
    let (handover, receiver) = mpsc::sync_channel::<(L, Sampler)>(1);

    let mut builder = thread::Builder::new().name(SAMPLING_THREAD_NAME.into());
    if let Some(size) = stack_size {
        builder = builder.stack_size(size);
    }

    let spawned = builder.spawn(move || {
        let Ok((mut lines, mut sampler)) = receiver.recv() else {
            shared.set_running(false);
            return Ok(());
        };
        info!("Encoder: sampling started, interval {:?}", interval);
        let result = sampling_logic(&mut lines, &mut sampler, &shared, interval);
        if let Err(e) = result {
            shared.record_fault(e);
        }
        shared.set_running(false);
        info!("Encoder: sampling stopped");
        result
    });

    match spawned {
        Ok(handle) => {
            // Der Thread wartet in `recv`, der Empfänger lebt noch
            if handover.send((lines, sampler)).is_err() {
                warn!("Encoder: sampling thread ended before handover");
            }
            Ok(handle)
        }
        Err(e) => Err((e, lines)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoder_core::{GrayCode, HalError, PinId, Pull};

    // Liefert eine feste Folge von Gray-Codes; Taster immer low
    struct ScriptedLines {
        codes: Vec<u8>,
        index: usize,
        fail_at: Option<usize>,
    }

    impl ScriptedLines {
        fn new(codes: &[u8]) -> Self {
            Self {
                codes: codes.to_vec(),
                index: 0,
                fail_at: None,
            }
        }

        fn current(&self) -> LineState {
            let i = self.index.min(self.codes.len() - 1);
            GrayCode::new(self.codes[i]).line_state()
        }
    }

    impl LineReader for ScriptedLines {
        fn configure_input(&mut self, _pin: PinId, _pull: Pull) -> Result<(), HalError> {
            Ok(())
        }

        fn read_line(&mut self, pin: PinId) -> Result<bool, HalError> {
            match pin {
                1 => {
                    if self.fail_at == Some(self.index) {
                        return Err(HalError::ReadFailed(pin));
                    }
                    Ok(self.current().a)
                }
                2 => {
                    let b = self.current().b;
                    self.index += 1;
                    Ok(b)
                }
                _ => Ok(false),
            }
        }
    }

    const PINS: EncoderPins = EncoderPins::new(1, 2).with_switch(3);

    #[test]
    fn test_tick_records_full_cycle() {
        let mut lines = ScriptedLines::new(&[0, 1, 2, 3, 0]);
        let events = Mutex::new(EncoderEvents::new());
        let mut sampler = Sampler::attach(&mut lines, PINS, 4).unwrap();

        for _ in 0..4 {
            sampler.tick(&mut lines, &events).unwrap();
        }
        assert_eq!(events.lock().unwrap().take_delta(), 1);
        assert_eq!(sampler.decoder().remainder(), 0);
    }

    #[test]
    fn test_tick_fault_records_nothing() {
        let mut lines = ScriptedLines::new(&[0, 1, 2, 3, 0]);
        let events = Mutex::new(EncoderEvents::new());
        let mut sampler = Sampler::attach(&mut lines, PINS, 4).unwrap();
        for _ in 0..3 {
            sampler.tick(&mut lines, &events).unwrap();
        }
        lines.fail_at = Some(lines.index);

        let result = sampler.tick(&mut lines, &events);
        assert_eq!(result, Err(EncoderError::HardwareReadFault(HalError::ReadFailed(1))));
        assert_eq!(events.lock().unwrap().take_delta(), 0);
        assert_eq!(sampler.decoder().remainder(), 3);
    }

    #[test]
    fn test_stop_requested_ends_after_current_tick() {
        let mut lines = ScriptedLines::new(&[0, 1, 2, 3, 0]);
        let shared = WorkerShared::default();
        let mut sampler = Sampler::attach(&mut lines, PINS, 1).unwrap();
        shared.request_stop();

        // Ein Intervall von einer Stunde: ein `sleep` würde den Test hängen lassen
        let result = sampling_logic(&mut lines, &mut sampler, &shared, Duration::from_secs(3600));
        assert_eq!(result, Ok(()));
        assert_eq!(lines.index, 2);
        assert_eq!(lock(&shared.events).take_delta(), 1);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_failed_spawn_returns_lines() {
        let mut lines = ScriptedLines::new(&[0, 1, 2]);
        let sampler = Sampler::attach(&mut lines, PINS, 4).unwrap();
        let shared = Arc::new(WorkerShared::default());

        // Kein Adressraum reicht für diesen Stack
        let result = spawn_sampling_task(lines, sampler, shared, Duration::from_millis(1), Some(1 << 60));
        let Err((_, lines)) = result else {
            panic!("spawn with an impossible stack size succeeded");
        };
        assert_eq!(lines.index, 1);
    }
}
