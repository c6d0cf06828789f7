use std::cell::Cell;

/// At most one submission in flight.
///
/// Entering is a check-and-set on a single-threaded cell,
/// leaving happens when the returned guard is dropped, whatever the outcome.
#[derive(Default, Debug)]
pub struct SubmissionGate {
    in_flight: Cell<bool>,
}

impl SubmissionGate {
    pub fn enter(&self) -> Option<InFlight<'_>> {
        if self.in_flight.replace(true) {
            None
        } else {
            Some(InFlight { gate: self })
        }
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

#[must_use]
#[derive(Debug)]
pub struct InFlight<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some};

    #[test]
    fn second_entry_is_refused_while_first_is_held() {
        let gate = SubmissionGate::default();

        let first = assert_some!(gate.enter());
        assert_none!(gate.enter());
        assert!(gate.is_in_flight());

        drop(first);

        assert!(!gate.is_in_flight());
        let _again = assert_some!(gate.enter());
    }
}
