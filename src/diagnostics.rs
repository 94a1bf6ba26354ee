//! Where warnings go.
//!
//! Every stage of the pipeline reports non-fatal conditions through a
//! [`Diagnostics`] sink and carries on. The binary prints them to stderr as
//! they happen; tests collect them into a `Vec<Warning>`.

use crate::error::Warning;

/// Receiver for non-fatal diagnostics.
pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
}

impl Diagnostics for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

/// Prints each warning to stderr on its own line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Diagnostics for Stderr {
    fn warn(&mut self, warning: Warning) {
        eprintln!("{warning}");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}
