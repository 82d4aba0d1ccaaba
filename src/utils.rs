/// Polynomial string hash, `h = h * 31 + unit` over the UTF-16 code units of
/// `payload`, wrapping at 32 bits.
pub fn string_hash(payload: &str) -> i32 {
    payload
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
