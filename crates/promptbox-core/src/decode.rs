/// Decode bytes as UTF-8, dropping any invalid sequences.
///
/// Valid input is returned as-is. Otherwise each maximal invalid sequence is
/// omitted and the surrounding valid runs are joined, so the result is never
/// longer than the input and decoding never fails.
pub fn decode_lossy(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_owned();
    }

    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
