// Single-byte XOR mask for device-data lines.
// Not cryptographically secure; it only obscures plaintext in transit
// between the device log and the gateway relay.

/// XOR every byte except the last one against `key`, in place.
///
/// The final byte is conventionally the line terminator left behind by
/// the line reader and must survive untouched so the gateway can still
/// split the relayed stream on it. Applying the mask twice with the same
/// key restores the original bytes; there is no separate decrypt path,
/// direction is purely the caller's convention.
pub fn mask_in_place(buf: &mut [u8], key: u8) {
    let Some(len) = buf.len().checked_sub(1) else {
        return;
    };
    for b in &mut buf[..len] {
        *b ^= key;
    }
}
