#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_cli::parse_matrix_pair;

fuzz_target!(|data: &[u8]| {
    let Some((&dim_byte, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    // Low bytes pick small dimensions; high bytes pick ones near usize::MAX
    let dim = if dim_byte < 0x80 {
        usize::from(dim_byte % 16)
    } else {
        usize::MAX >> (dim_byte & 0x3f)
    };

    // Should not panic; a successful parse always yields two dim x dim matrices
    if let Ok((a, b)) = parse_matrix_pair(text, dim) {
        assert_eq!(a.dim(), dim);
        assert_eq!(b.dim(), dim);
    }
});
