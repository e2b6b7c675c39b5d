//! The Action Surface: the executor's only boundary to the host.
//!
//! The interpreter itself raises no faults at runtime; the one externally
//! visible abort path is an [`Interrupt`] raised by the surface, which the
//! executor propagates outward through every nested frame. Cancellation is
//! cooperative: the executor polls the surface at statement boundaries and
//! before each loop iteration.

use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

/// Host-raised abort. Unrecoverable; unwinds the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interrupt {
    reason: String,
}

impl Interrupt {
    pub fn new(reason: impl Into<String>) -> Self {
        Interrupt {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script interrupted: {}", self.reason)
    }
}

impl Error for Interrupt {}

/// Timing and output effects, implemented entirely outside the core.
pub trait ActionSurface {
    /// Block for the requested wall-clock duration (`wait`).
    fn suspend(&mut self, duration: Duration) -> Result<(), Interrupt>;

    /// Forward one piece of output (`print`).
    fn emit(&mut self, text: &str) -> Result<(), Interrupt>;

    /// Cooperative abort check; the default never aborts.
    fn poll(&mut self) -> Result<(), Interrupt> {
        Ok(())
    }
}

/// Default surface: stdout output and a true thread sleep.
#[derive(Default)]
pub struct StdoutSurface;

impl ActionSurface for StdoutSurface {
    fn suspend(&mut self, duration: Duration) -> Result<(), Interrupt> {
        thread::sleep(duration);
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<(), Interrupt> {
        println!("{text}");
        Ok(())
    }
}

/// Capturing surface for tests and embedding: output and suspensions are
/// recorded, nothing sleeps.
#[derive(Default)]
pub struct BufferSurface {
    output: Mutex<Vec<String>>,
    suspensions: Mutex<Vec<Duration>>,
}

impl BufferSurface {
    pub fn new() -> Self {
        BufferSurface::default()
    }

    /// Everything emitted so far, in order.
    pub fn output(&self) -> Vec<String> {
        self.output.lock().clone()
    }

    /// Every suspension requested so far, in order.
    pub fn suspensions(&self) -> Vec<Duration> {
        self.suspensions.lock().clone()
    }
}

impl ActionSurface for BufferSurface {
    fn suspend(&mut self, duration: Duration) -> Result<(), Interrupt> {
        self.suspensions.lock().push(duration);
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<(), Interrupt> {
        self.output.lock().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_surface_records_in_order() {
        let mut surface = BufferSurface::new();
        let _ = surface.emit("a");
        let _ = surface.suspend(Duration::from_millis(5));
        let _ = surface.emit("b");
        assert_eq!(surface.output(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(surface.suspensions(), vec![Duration::from_millis(5)]);
    }

    #[test]
    fn interrupt_renders_its_reason() {
        let interrupt = Interrupt::new("host shutdown");
        assert_eq!(interrupt.to_string(), "script interrupted: host shutdown");
        assert_eq!(interrupt.reason(), "host shutdown");
    }
}
