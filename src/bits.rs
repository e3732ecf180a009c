//! Bit-string helpers shared by the expression engine and the Karnaugh map
//!
//! All bit-strings in this crate are most-significant-bit first and consist of the
//! characters `'0'` and `'1'`.

/// Render `value` as a zero-padded binary string of exactly `width` characters
///
/// Only the low `width` bits of `value` are kept. A width of zero yields an empty string.
///
/// # Examples
///
/// ```
/// use binary_algebra::bits::binary_string;
///
/// assert_eq!(binary_string(5, 4), "0101");
/// assert_eq!(binary_string(5, 0), "");
/// ```
pub fn binary_string(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| {
            let set = bit < usize::BITS as usize && (value >> bit) & 1 == 1;
            if set {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// Decode an MSB-first binary string into an integer
///
/// Every `'1'` sets its bit; any other character counts as a zero bit.
pub fn decode_binary(binary: &str) -> usize {
    binary
        .chars()
        .fold(0usize, |acc, ch| (acc << 1) | usize::from(ch == '1'))
}

/// Generate the reflected Gray code sequence for `bits` bits
///
/// Starts from `["0", "1"]` and repeatedly doubles the list: the current codes are
/// prefixed with `'0'` and their mirror image with `'1'`. Consecutive entries, including
/// the wrap-around from last to first, differ in exactly one bit.
///
/// # Examples
///
/// ```
/// use binary_algebra::bits::gray_code;
///
/// assert_eq!(gray_code(2), vec!["00", "01", "11", "10"]);
/// assert!(gray_code(0).is_empty());
/// ```
pub fn gray_code(bits: usize) -> Vec<String> {
    if bits == 0 {
        return Vec::new();
    }

    let mut codes = vec![String::from("0"), String::from("1")];
    for _ in 1..bits {
        let reflected: Vec<String> = codes.iter().rev().map(|code| format!("1{}", code)).collect();
        for code in codes.iter_mut() {
            code.insert(0, '0');
        }
        codes.extend(reflected);
    }
    codes
}

/// Returns `true` if every character of `input` is `'0'` or `'1'`
///
/// Length is not checked here; the empty string is vacuously valid.
pub fn is_valid_binary_input(input: &str) -> bool {
    input.chars().all(|ch| ch == '0' || ch == '1')
}
