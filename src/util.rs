use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("input sequence overflowed the integer width at step {step}"))]
    InputOverflow { step: usize },

    #[snafu(display("failed to write sequence: {source}"))]
    Output { source: std::io::Error },
}

// io::Error is not PartialEq, so compare on the variant alone
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::InputOverflow { step: a }, Error::InputOverflow { step: b }) => a == b,
            (Error::Output { source: a }, Error::Output { source: b }) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

#[test]
fn test_error_display() {
    let err = Error::InputOverflow { step: 128 };
    assert_eq!(err.to_string(), "input sequence overflowed the integer width at step 128");
    assert_eq!(err, Error::InputOverflow { step: 128 });
    assert_ne!(err, Error::InputOverflow { step: 127 });
}
