// Digit-accumulation digest used to fingerprint each device-data line.
// Cheap and deliberately naive: every byte goes through the same update,
// digit or not, so this is a fingerprint rather than an integrity check.

/// Fold a byte slice into a single value with `acc = acc * 10 + (b - '0')`.
///
/// Arithmetic wraps, matching the unsigned machine-word accumulation the
/// gateway side performs. The empty slice digests to 0.
pub fn digest(data: &[u8]) -> u64 {
    data.iter().fold(0u64, |acc, &b| {
        acc.wrapping_mul(10)
            .wrapping_add(u64::from(b).wrapping_sub(u64::from(b'0')))
    })
}
