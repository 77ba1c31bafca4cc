use std::iter;

use itertools::izip;
use log::debug;
use num::PrimInt;
use snafu::ensure;

use crate::analysis::target::Target;
use crate::analysis::xor::xor_sequences;
use crate::util::{Error, InputOverflowSnafu};

pub const DEFAULT_COUNT: usize = 1000;

/// Every sequence produced by one pass, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    inputs: Vec<T>,
    results: Vec<T>,
    perturbed: Vec<T>,
    diffs: Vec<T>,
}

impl<T: Copy> Trace<T> {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[T] {
        &self.inputs
    }

    // f(x_i)
    pub fn results(&self) -> &[T] {
        &self.results
    }

    // f(x_i ^ delta)
    pub fn perturbed(&self) -> &[T] {
        &self.perturbed
    }

    pub fn diffs(&self) -> &[T] {
        &self.diffs
    }

    // (input, result, perturbed result, difference) for each step
    pub fn steps(&self) -> impl Iterator<Item = (T, T, T, T)> + '_ {
        izip!(&self.inputs, &self.results, &self.perturbed, &self.diffs)
            .map(|(&x, &r, &p, &d)| (x, r, p, d) )
    }

    // The two streams the program prints: differences, then raw results
    pub fn into_streams(self) -> (Vec<T>, Vec<T>) {
        (self.diffs, self.results)
    }
}

// Inputs are 0, delta, 2*delta, ... and each is also fed to `f` with `delta`
// XORed in. Nothing here is random: the trace is fixed by (n, delta, f).
pub fn run<T: PrimInt>(n: usize, delta: T, f: impl Target<T>) -> Result<Trace<T>, Error> {
    let mut inputs: Vec<T> = Vec::with_capacity(n);
    inputs.extend(
        iter::successors(Some(T::zero()), |x| x.checked_add(&delta))
            .take(n)
    );
    // successors stops early once x + delta no longer fits
    ensure!(inputs.len() == n, InputOverflowSnafu { step: inputs.len() });

    let mut results = Vec::with_capacity(n);
    let mut perturbed = Vec::with_capacity(n);
    for &x in &inputs {
        results.push(f(x));
        perturbed.push(f(x ^ delta));
    }

    let diffs = xor_sequences(&results, &perturbed);
    debug!("analysed {} inputs", n);

    Ok(Trace {
        inputs: inputs,
        results: results,
        perturbed: perturbed,
        diffs: diffs,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferenceAnalyzer<T> {
    pub n: usize,
    pub delta: T,
}

impl<T: PrimInt> DifferenceAnalyzer<T> {
    pub fn new(n: usize, delta: T) -> Self {
        Self { n: n, delta: delta }
    }

    pub fn run(&self, f: impl Target<T>) -> Result<Trace<T>, Error> {
        run(self.n, self.delta, f)
    }
}

// 1000 inputs stepped by a difference of one
impl<T: PrimInt> Default for DifferenceAnalyzer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, T::one())
    }
}

#[test]
fn test_run_inputs() {
    let trace = run(4, 3i32, |x: i32| x).unwrap();
    assert_eq!(trace.inputs(), &[0, 3, 6, 9]);
    assert_eq!(trace.perturbed(), &[3, 0, 5, 10]);
}

#[test]
fn test_run_negative_delta() {
    let trace = run(3, -2i64, |x: i64| x).unwrap();
    assert_eq!(trace.inputs(), &[0, -2, -4]);
    assert_eq!(trace.diffs(), &[-2, -2, -2]);
}

#[test]
fn test_run_fills_the_whole_width() {
    // 0..=255 fits in a u8; the successor of 255 is never used
    let trace = run(256, 1u8, |x: u8| x).unwrap();
    assert_eq!(trace.len(), 256);
    assert_eq!(trace.inputs().last(), Some(&u8::MAX));
}

#[test]
fn test_run_input_overflow() {
    assert_eq!(run(128, 1i8, |x: i8| x).map(|t| t.len() ), Ok(128));
    assert_eq!(run(129, 1i8, |x: i8| x), Err(Error::InputOverflow { step: 128 }));
    assert_eq!(run(4, 100u8, |x: u8| x), Err(Error::InputOverflow { step: 3 }));
}

#[test]
fn test_steps() {
    let trace = run(3, 1u32, |x: u32| x + 1).unwrap();
    let steps: Vec<_> = trace.steps().collect();
    assert_eq!(steps, vec![(0, 1, 2, 3), (1, 2, 1, 3), (2, 3, 4, 7)]);
}

#[test]
fn test_analyzer_default() {
    let analyzer = DifferenceAnalyzer::<i32>::default();
    assert_eq!(analyzer, DifferenceAnalyzer::new(1000, 1));
    let trace = analyzer.run(|x: i32| x + 1).unwrap();
    assert_eq!(trace.len(), DEFAULT_COUNT);
    assert_eq!(trace.results().last(), Some(&1000));
}
