//! Debug-request replies.

/// Write an empty NUL-terminated reply into `response`.
///
/// Only the first byte is touched. An empty buffer is left alone. Returns the
/// number of bytes written.
pub fn write_empty_response(response: &mut [u8]) -> usize {
    match response.first_mut() {
        Some(first) => {
            *first = 0;
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_byte_written() {
        let mut buf = [0xAAu8; 8];
        assert_eq!(write_empty_response(&mut buf), 1);
        assert_eq!(buf, [0, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        assert_eq!(write_empty_response(&mut buf), 0);
    }
}
