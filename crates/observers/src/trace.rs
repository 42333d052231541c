use std::{
    fmt::Display,
    io::{self, Write},
};

use numkit_core::Observer;

/// An observer that writes one line per event using the event's `Display`
/// implementation.
///
/// Write failures do not interrupt the solver. The first one is kept and
/// returned by [`Trace::finish`]; later events are not written.
#[derive(Debug)]
pub struct Trace<W> {
    writer: W,
    label: Option<String>,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write> Trace<W> {
    /// Creates a trace that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            label: None,
            lines: 0,
            error: None,
        }
    }

    /// Prefixes every line with `[label] `.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while tracing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_event(&mut self, event: &impl Display) -> io::Result<()> {
        if let Some(label) = &self.label {
            write!(self.writer, "[{label}] ")?;
        }
        writeln!(self.writer, "{event}")
    }
}

impl Trace<io::Stderr> {
    /// Traces to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<E: Display, A, W: Write> Observer<E, A> for Trace<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none() {
            match self.write_event(event) {
                Ok(()) => self.lines += 1,
                Err(error) => self.error = Some(error),
            }
        }
        None
    }
}

impl<E: Display, A, W: Write> Observer<E, A> for &mut Trace<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numkit_solvers::{
        quadrature::simpson,
        roots::{self, bisection},
    };

    #[test]
    fn writes_one_line_per_iteration() {
        let mut trace = Trace::new(Vec::new()).with_label("bisection");
        let f = |x: f64| x - 0.75;

        let solution =
            bisection::solve(&f, [0.0, 1.0], &roots::Config::default(), &mut trace)
                .expect("bracketed root");

        assert_eq!(trace.lines(), solution.iters);
        let output = String::from_utf8(trace.finish().expect("in-memory writes")).expect("utf-8");
        let first = output.lines().next().expect("at least one line");
        assert!(first.starts_with("[bisection] iter    1: x = 0.500000000000"));
        assert_eq!(output.lines().count(), solution.iters);
    }

    #[test]
    fn traces_quadrature_samples() {
        let mut trace = Trace::new(Vec::new());

        simpson::integrate(&|x: f64| x * x, [0.0, 1.0], 4, &mut trace).expect("valid");

        assert_eq!(trace.lines(), 5);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_do_not_stop_the_solver() {
        let mut trace = Trace::new(Broken);
        let f = |x: f64| x - 0.75;

        let solution =
            bisection::solve(&f, [0.0, 1.0], &roots::Config::default(), &mut trace)
                .expect("bracketed root");

        assert_eq!(solution.status, roots::Status::Converged);
        assert_eq!(trace.lines(), 0);
        assert!(trace.finish().is_err());
    }
}
