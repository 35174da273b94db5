//! The process resources collaborator: wall-clock time & resident memory (RSS) of the running process.\
//! [SystemProbe] is the real thing -- tests may script their own [ProcessProbe]s.

use std::time::{Duration, Instant};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use sysinfo::{Pid, PidExt, ProcessExt, System, SystemExt};


/// Origin for [SystemProbe::wall_clock()] -- pinned on first use
static WALL_CLOCK_ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// Building a [System] is costly, so a single one is shared by every [SystemProbe] and
/// only the current process entry is refreshed when sampling
static SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| Mutex::new(System::new()));


/// Errors that may happen when querying the process resources
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("the current process id is not available on this platform: {0}")]
    CurrentPidUnavailable(&'static str),
    #[error("process {0} was not found when refreshing the process table")]
    ProcessNotFound(u32),
}


/// Stateless queries for the resources a measurement needs
pub trait ProcessProbe {

    /// Time elapsed since a fixed, process-wide origin. Only differences between samples are meaningful
    fn wall_clock(&self) -> Duration;

    /// Current resident memory of the calling process, in bytes
    fn resident_memory_bytes(&self) -> Result<u64, ProbeError>;
}

impl<P: ProcessProbe + ?Sized> ProcessProbe for &P {
    fn wall_clock(&self) -> Duration {
        (**self).wall_clock()
    }
    fn resident_memory_bytes(&self) -> Result<u64, ProbeError> {
        (**self).resident_memory_bytes()
    }
}


/// [ProcessProbe] backed by [std::time::Instant] & the `sysinfo` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessProbe for SystemProbe {

    fn wall_clock(&self) -> Duration {
        WALL_CLOCK_ORIGIN.elapsed()
    }

    fn resident_memory_bytes(&self) -> Result<u64, ProbeError> {
        let pid: Pid = sysinfo::get_current_pid()
            .map_err(ProbeError::CurrentPidUnavailable)?;
        let mut system = SYSTEM.lock();
        if !system.refresh_process(pid) {
            return Err(ProbeError::ProcessNotFound(pid.as_u32()))
        }
        system.process(pid)
            .map(|process| process.memory())
            .ok_or(ProbeError::ProcessNotFound(pid.as_u32()))
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [probe](super) -- using 'serial_test' crate as RSS & wall-clock are process-wide

    use super::*;
    use serial_test::serial;


    #[test]
    #[serial]
    fn wall_clock_advances() {
        let probe = SystemProbe::new();
        let before = probe.wall_clock();
        spin_sleep::sleep(Duration::from_millis(5));
        let after = probe.wall_clock();
        assert!(after - before >= Duration::from_millis(5), "wall clock advanced only {:?}", after - before);
    }

    #[test]
    #[serial]
    fn resident_memory_is_reported() {
        let rss = SystemProbe::new().resident_memory_bytes()
            .expect("RSS of the current process should be available");
        assert!(rss > 0, "a running process must have some resident memory");
    }

    #[test]
    #[serial]
    fn resident_memory_grows_when_touching_memory() {
        const LEN: usize = 64 << 20;
        let probe = SystemProbe::new();
        let before = probe.resident_memory_bytes().expect("RSS before");
        let block = vec![1u8; LEN];
        let after = probe.resident_memory_bytes().expect("RSS after");
        assert_eq!(std::hint::black_box(&block)[LEN-1], 1);
        assert!(after > before, "touching {LEN} bytes should grow the RSS: before={before}, after={after}");
    }

    #[test]
    fn error_messages() {
        assert_eq!(ProbeError::ProcessNotFound(42).to_string(), "process 42 was not found when refreshing the process table");
        assert_eq!(ProbeError::CurrentPidUnavailable("unsupported").to_string(), "the current process id is not available on this platform: unsupported");
    }
}
