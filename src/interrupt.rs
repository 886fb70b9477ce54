//! Edge-triggered interrupt dispatch shared by the interrupt-capable
//! devices.
//!
//! The GPIO controller itself is a platform collaborator; the crate only
//! needs to arm one falling-edge line per device and route each delivered
//! edge to a caller-supplied closure. The closure receives no payload;
//! after each edge the caller is expected to read the device's status
//! register, act on the set flags, and clear the latch so the line can
//! trigger again.

/// Signal edge selection for the interrupt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Trigger on a falling edge. Every device in this family asserts its
    /// interrupt line active-low.
    Falling,
    /// Trigger on a rising edge.
    Rising,
}

/// Platform hook for edge-triggered GPIO interrupt configuration.
///
/// Implemented by the integration layer over whatever GPIO facility the
/// target offers. The platform is responsible for invoking
/// [`InterruptLine::dispatch`] once per delivered edge.
pub trait EdgeInterruptPin {
    /// Error type produced by the platform GPIO layer.
    type Error;

    /// Arms the pin to trigger on the given edge.
    fn enable_edge(&mut self, edge: Edge) -> core::result::Result<(), Self::Error>;

    /// Disarms the pin; no further edges are delivered.
    fn disable(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Owns at most one (pin, callback) binding for a device interrupt line.
///
/// The callback is an ordinary closure and may capture the device handle;
/// note that `dispatch` runs in whatever context the platform calls it
/// from, and the drivers perform no internal locking across that boundary.
pub struct InterruptLine<PIN: EdgeInterruptPin, F> {
    binding: Option<(PIN, F)>,
}

impl<PIN: EdgeInterruptPin, F> InterruptLine<PIN, F> {
    /// Creates a line with nothing installed.
    pub const fn new() -> Self {
        Self { binding: None }
    }

    /// Returns whether a binding is currently installed.
    pub fn is_installed(&self) -> bool {
        self.binding.is_some()
    }

    /// Releases the current binding, if any, and returns the disarmed pin.
    ///
    /// Safe to call repeatedly; with nothing installed it does nothing. An
    /// in-flight register transaction is unaffected, only future edge
    /// deliveries stop.
    pub fn uninstall(&mut self) -> core::result::Result<Option<PIN>, PIN::Error> {
        match self.binding.take() {
            Some((mut pin, _)) => {
                pin.disable()?;
                Ok(Some(pin))
            }
            None => Ok(None),
        }
    }
}

impl<PIN: EdgeInterruptPin, F: FnMut()> InterruptLine<PIN, F> {
    /// Arms `pin` for falling-edge triggering and stores the callback,
    /// replacing (and disarming) any previously installed binding.
    pub fn install(&mut self, mut pin: PIN, callback: F) -> core::result::Result<(), PIN::Error> {
        self.uninstall()?;

        pin.enable_edge(Edge::Falling)?;
        self.binding = Some((pin, callback));
        Ok(())
    }

    /// Runs the installed callback once; returns whether one was installed.
    ///
    /// Called by the platform integration once per delivered edge.
    pub fn dispatch(&mut self) -> bool {
        match &mut self.binding {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl<PIN: EdgeInterruptPin, F> Default for InterruptLine<PIN, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<PIN: EdgeInterruptPin, F> Drop for InterruptLine<PIN, F> {
    fn drop(&mut self) {
        if let Some((mut pin, _)) = self.binding.take() {
            let _ = pin.disable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;

    struct CountingPin<'a> {
        armed: &'a Cell<Option<Edge>>,
        disables: &'a Cell<u32>,
    }

    impl EdgeInterruptPin for CountingPin<'_> {
        type Error = Infallible;

        fn enable_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
            self.armed.set(Some(edge));
            Ok(())
        }

        fn disable(&mut self) -> Result<(), Self::Error> {
            self.armed.set(None);
            self.disables.set(self.disables.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn install_arms_falling_edge_and_dispatch_runs_callback() {
        let armed = Cell::new(None);
        let disables = Cell::new(0);
        let edges = Cell::new(0u32);

        let mut line = InterruptLine::new();
        line.install(
            CountingPin {
                armed: &armed,
                disables: &disables,
            },
            || edges.set(edges.get() + 1),
        )
        .unwrap();

        assert!(line.is_installed());
        assert_eq!(armed.get(), Some(Edge::Falling));

        assert!(line.dispatch());
        assert!(line.dispatch());
        assert_eq!(edges.get(), 2);
    }

    #[test]
    fn install_replaces_previous_binding() {
        let armed = Cell::new(None);
        let disables = Cell::new(0);
        let first = Cell::new(0u32);
        let second = Cell::new(0u32);

        let bump_first_fn = || first.set(first.get() + 1);
        let bump_first: &dyn Fn() = &bump_first_fn;
        let bump_second_fn = || second.set(second.get() + 1);
        let bump_second: &dyn Fn() = &bump_second_fn;
        let mut line: InterruptLine<CountingPin<'_>, &dyn Fn()> = InterruptLine::new();

        line.install(
            CountingPin {
                armed: &armed,
                disables: &disables,
            },
            bump_first,
        )
        .unwrap();
        line.install(
            CountingPin {
                armed: &armed,
                disables: &disables,
            },
            bump_second,
        )
        .unwrap();

        // the first pin was disarmed when it was replaced
        assert_eq!(disables.get(), 1);

        line.dispatch();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn uninstall_is_a_noop_when_empty() {
        let armed = Cell::new(None);
        let disables = Cell::new(0);

        let mut line: InterruptLine<CountingPin<'_>, fn()> = InterruptLine::new();
        assert!(line.uninstall().unwrap().is_none());

        line.install(
            CountingPin {
                armed: &armed,
                disables: &disables,
            },
            noop,
        )
        .unwrap();
        assert!(line.uninstall().unwrap().is_some());
        assert_eq!(disables.get(), 1);

        assert!(line.uninstall().unwrap().is_none());
        assert_eq!(disables.get(), 1);
        assert!(!line.dispatch());
    }

    #[test]
    fn drop_disarms_the_pin() {
        let armed = Cell::new(None);
        let disables = Cell::new(0);

        {
            let mut line: InterruptLine<CountingPin<'_>, fn()> = InterruptLine::new();
            line.install(
                CountingPin {
                    armed: &armed,
                    disables: &disables,
                },
                noop,
            )
            .unwrap();
        }

        assert_eq!(armed.get(), None);
        assert_eq!(disables.get(), 1);
    }

    fn noop() {}
}
