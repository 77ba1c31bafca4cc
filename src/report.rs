use std::fmt::Display;
use std::io::Write;

use snafu::ResultExt;

use crate::analysis::Trace;
use crate::util::{Error, OutputSnafu};

// One decimal per line, in generation order
pub fn write_sequence<W: Write, T: Display>(writer: &mut W, seq: &[T]) -> Result<(), Error> {
    for value in seq {
        writeln!(writer, "{}", value).context(OutputSnafu)?;
    }
    writer.flush().context(OutputSnafu)
}

#[test]
fn test_write_sequence() {
    let mut out = Vec::new();
    write_sequence(&mut out, &[3, 3, 7, 7, 3]).unwrap();
    assert_eq!(out, b"3\n3\n7\n7\n3\n");

    let mut signed = Vec::new();
    write_sequence(&mut signed, &[-2i64, 0, 15]).unwrap();
    assert_eq!(signed, b"-2\n0\n15\n");

    let mut empty = Vec::new();
    write_sequence::<_, u8>(&mut empty, &[]).unwrap();
    assert!(empty.is_empty());
}

// Differences go to `out` and are flushed before any raw result reaches `err`
pub fn emit<T, O, E>(trace: &Trace<T>, out: &mut O, err: &mut E) -> Result<(), Error>
where
    T: Copy + Display,
    O: Write,
    E: Write,
{
    write_sequence(out, trace.diffs())?;
    write_sequence(err, trace.results())
}

#[cfg(test)]
struct Broken;

#[cfg(test)]
impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_sequence_broken_pipe() {
    let result = write_sequence(&mut Broken, &[1, 2, 3]);
    assert_eq!(result, Err(Error::Output { source: std::io::ErrorKind::BrokenPipe.into() }));
}

#[test]
fn test_emit_stops_on_first_failure() {
    let trace = crate::analysis::run(3, 1i32, |x: i32| x + 1).unwrap();
    let mut err = Vec::new();
    assert!(emit(&trace, &mut Broken, &mut err).is_err());
    assert!(err.is_empty());
}
