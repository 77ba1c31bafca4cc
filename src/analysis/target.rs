use num::PrimInt;
use num::traits::{WrappingAdd, WrappingMul};

// Anything that maps one integer to another can be analysed
pub trait Target<T>: Fn(T) -> T {}
impl<T, F: Fn(T) -> T> Target<T> for F {}

// x + c. Looks uniformly distributed, but the carry chain of the addition
// leaks straight through into the XOR difference
pub fn increment<T: PrimInt + WrappingAdd>(c: T) -> impl Target<T> {
    move |x: T| x.wrapping_add(&c)
}

// The weakest possible target: the output difference is the input difference
pub fn identity<T: PrimInt>() -> impl Target<T> {
    |x: T| x
}

pub fn double<T: PrimInt + WrappingAdd>() -> impl Target<T> {
    |x: T| x.wrapping_add(&x)
}

pub fn square<T: PrimInt + WrappingMul>() -> impl Target<T> {
    |x: T| x.wrapping_mul(&x)
}

#[test]
fn test_increment() {
    let f = increment(1i32);
    assert_eq!(f(0), 1);
    assert_eq!(f(41), 42);
    assert_eq!(f(-1), 0);

    let g = increment(1u8);
    assert_eq!(g(u8::MAX), 0);
}

#[test]
fn test_catalogue() {
    let id = identity::<i64>();
    let dbl = double::<i64>();
    let sq = square::<i64>();
    for x in [0i64, 1, 7, -3, 1000] {
        assert_eq!(id(x), x);
        assert_eq!(dbl(x), 2 * x);
        assert_eq!(sq(x), x * x);
    }
}

#[test]
fn test_target_is_object_safe() {
    let targets: Vec<Box<dyn Target<u32>>> = vec![
        Box::new(increment(1u32)),
        Box::new(identity::<u32>()),
        Box::new(double::<u32>()),
        Box::new(square::<u32>()),
    ];
    let outputs: Vec<u32> = targets.iter().map(|f| f(3) ).collect();
    assert_eq!(outputs, vec![4, 3, 6, 9]);
}
