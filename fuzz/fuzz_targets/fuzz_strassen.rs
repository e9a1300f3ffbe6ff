#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{naive, strassen, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the dimension (up to 12), second the threshold (1..=8)
    let dim = usize::from(data[0] % 13);
    let threshold = usize::from(data[1] % 8) + 1;
    let body = &data[2..];

    let values: Vec<i64> = body
        .chunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            i64::from_le_bytes(word)
        })
        .chain(std::iter::repeat(0))
        .take(2 * dim * dim)
        .collect();
    let (left, right) = values.split_at(dim * dim);
    let a = Matrix::from_vec(dim, left.to_vec()).unwrap();
    let b = Matrix::from_vec(dim, right.to_vec()).unwrap();

    let expected = naive::multiply(&a, &b).unwrap();
    let got = strassen::multiply(&a, &b, threshold).unwrap();
    assert_eq!(got, expected, "dim={dim} threshold={threshold}");
});
