/// Convert an unsigned 8-bit image buffer to signed int8 in place, for
/// models whose input tensor expects signed fixed-point data. Each byte is
/// shifted by -128; the backing storage stays `u8` and the model runtime
/// reinterprets it.
pub fn quantize_to_i8(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = b.wrapping_sub(128);
    }
}
