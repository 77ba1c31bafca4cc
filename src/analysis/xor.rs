use std::ops::BitXor;

// XOR is addition and subtraction modulo 2 at once, so this is the
// "difference" of two sequences taken bit by bit
pub fn xor_sequences<T>(seq1: &[T], seq2: &[T]) -> Vec<T> where T: Copy + BitXor<Output = T> {
    assert_eq!(seq1.len(), seq2.len());
    seq1.iter()
        .zip(seq2.iter())
        .map(|(&x, &y)| x ^ y )
        .collect()
}

#[test]
fn test_xor_sequences() {
    let results:   [i32; 5] = [1, 2, 3, 4, 5];
    let perturbed: [i32; 5] = [2, 1, 4, 3, 6];
    let expected = vec![3, 3, 7, 7, 3];
    assert_eq!(xor_sequences(&results, &perturbed), expected);
}

#[test]
fn test_xor_sequences_is_own_inverse() {
    let a: [u16; 4] = [0x00ff, 0x1234, 0xffff, 0];
    let b: [u16; 4] = [0x0f0f, 0x4321, 0x0001, 0];
    let diff = xor_sequences(&a, &b);
    assert_eq!(xor_sequences(&diff, &b), a.to_vec());
    assert_eq!(xor_sequences(&diff, &a), b.to_vec());
}

#[test]
fn test_xor_sequences_empty() {
    let empty: [u8; 0] = [];
    assert!(xor_sequences(&empty, &empty).is_empty());
}

#[test]
#[should_panic]
fn test_xor_sequences_length_mismatch() {
    xor_sequences(&[1u8, 2], &[1u8]);
}
