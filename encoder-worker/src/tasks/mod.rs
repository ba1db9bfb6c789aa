// Task-Modul: Hintergrund-Threads des Workers
//
// Der Abtast-Thread läuft unabhängig vom Konsumenten und teilt mit ihm
// nur den Event-Zustand hinter einem Mutex.

pub mod sampling;

pub use sampling::Sampler;
pub(crate) use sampling::spawn_sampling_task;
