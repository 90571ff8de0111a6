//! Discarding sink used to force pipeline evaluation.

use std::hint::black_box;

/// Consumes a lazy pipeline without retaining its output.
///
/// Every element is pulled through the full chain and handed to
/// [`std::hint::black_box`], which keeps the optimizer from deleting the work
/// while allocating nothing. There is no collecting variant: accumulation
/// would show up in the measured cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sink;

impl Sink {
    /// Drain `pipeline` to exhaustion, discarding every element.
    pub fn drain<I>(&self, pipeline: I)
    where
        I: IntoIterator,
    {
        for element in pipeline {
            black_box(&element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sink;
    use std::cell::Cell;

    #[test]
    fn drain_pulls_every_element_through_the_chain() {
        let pulled = Cell::new(0usize);
        let sink = Sink;

        sink.drain((0..25).inspect(|_| pulled.set(pulled.get() + 1)));

        assert_eq!(pulled.get(), 25);
    }

    #[test]
    fn drain_accepts_any_element_type() {
        let sink = Sink;
        sink.drain(["a", "b"].into_iter().map(str::to_owned));
        sink.drain(std::iter::empty::<Vec<u8>>());
    }
}
