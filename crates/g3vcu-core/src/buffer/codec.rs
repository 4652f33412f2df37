use crate::error::{Error, Result};

/// Resolve `offset..offset + width` against a buffer of `len` bytes
fn span(len: usize, offset: usize, width: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(Error::OutOfBounds { offset, width, len }),
    }
}

pub fn read_byte(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset).copied().ok_or(Error::OutOfBounds {
        offset,
        width: 1,
        len: buf.len(),
    })
}

pub fn write_byte(buf: &mut [u8], offset: usize, value: u8) -> Result<()> {
    let len = buf.len();
    let slot = buf.get_mut(offset).ok_or(Error::OutOfBounds {
        offset,
        width: 1,
        len,
    })?;
    *slot = value;
    Ok(())
}

pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    let range = span(buf.len(), offset, 2)?;
    Ok(u16::from_le_bytes([buf[range.start], buf[range.start + 1]]))
}

pub fn write_u16_le(buf: &mut [u8], offset: usize, value: u16) -> Result<()> {
    let range = span(buf.len(), offset, 2)?;
    buf[range].copy_from_slice(&value.to_le_bytes());
    Ok(())
}

pub fn read_bytes(buf: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    let range = span(buf.len(), offset, width)?;
    Ok(&buf[range])
}

pub fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<()> {
    let range = span(buf.len(), offset, bytes.len())?;
    buf[range].copy_from_slice(bytes);
    Ok(())
}

/// Format bytes as space-separated uppercase hex ("0A 1B 2C")
pub fn format_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_roundtrip_and_bounds() {
        let mut buf = vec![0u8; 4];
        write_byte(&mut buf, 3, 0xAB).unwrap();
        assert_eq!(read_byte(&buf, 3).unwrap(), 0xAB);

        assert!(matches!(
            read_byte(&buf, 4),
            Err(Error::OutOfBounds { offset: 4, width: 1, len: 4 })
        ));
        assert!(write_byte(&mut buf, 4, 1).is_err());
        assert_eq!(buf, [0, 0, 0, 0xAB]);
    }

    #[test]
    fn test_u16_little_endian() {
        let mut buf = vec![0u8; 4];
        write_u16_le(&mut buf, 1, 0x1234).unwrap();
        assert_eq!(buf, [0x00, 0x34, 0x12, 0x00]);
        assert_eq!(read_u16_le(&buf, 1).unwrap(), 4660);
    }

    #[test]
    fn test_u16_bounds_no_partial_write() {
        let mut buf = vec![0u8; 4];
        assert!(read_u16_le(&buf, 3).is_err());
        assert!(write_u16_le(&mut buf, 3, 0xFFFF).is_err());
        assert_eq!(buf, [0, 0, 0, 0]);

        // Last valid position
        write_u16_le(&mut buf, 2, 0xFFFF).unwrap();
        assert_eq!(buf, [0, 0, 0xFF, 0xFF]);
    }

    #[test]
    fn test_offset_overflow_is_out_of_bounds() {
        let buf = vec![0u8; 4];
        assert!(read_u16_le(&buf, usize::MAX).is_err());
        assert!(read_bytes(&buf, usize::MAX - 1, 12).is_err());
    }

    #[test]
    fn test_bytes_window() {
        let mut buf = vec![0u8; 8];
        write_bytes(&mut buf, 2, &[1, 2, 3]).unwrap();
        assert_eq!(read_bytes(&buf, 2, 3).unwrap(), &[1, 2, 3]);
        assert!(write_bytes(&mut buf, 6, &[9, 9, 9]).is_err());
        assert_eq!(buf, [0, 0, 1, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn test_format_hex_bytes() {
        assert_eq!(format_hex_bytes(&[0x0A, 0xFF, 0x00]), "0A FF 00");
        assert_eq!(format_hex_bytes(&[]), "");
    }
}
