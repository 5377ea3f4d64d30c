// Tue Jan 13 2026 - Alex

use crate::memory::Address;

pub fn encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn encode_spaced(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

/// Parses hex digits, ignoring whitespace, `:` separators and `0x` prefixes.
pub fn parse(s: &str) -> Option<Vec<u8>> {
    let digits: String = s
        .split_whitespace()
        .map(|part| part.trim_start_matches("0x").trim_start_matches("0X"))
        .collect::<String>()
        .replace(':', "");

    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return None;
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
        .collect()
}

/// Classic offset / hex / ascii dump, one line per `width` bytes.
pub fn dump(data: &[u8], base: Address, width: usize) -> Vec<String> {
    let width = width.max(1);
    data.chunks(width)
        .enumerate()
        .map(|(i, chunk)| {
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
                .collect();
            format!(
                "{:016x}  {:<pad$}  {}",
                (base + (i * width) as u64).as_u64(),
                encode_spaced(chunk),
                ascii,
                pad = width * 3 - 1
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse("1f90"), Some(vec![0x1F, 0x90]));
        assert_eq!(parse("0x1F 0x90"), Some(vec![0x1F, 0x90]));
        assert_eq!(parse("1f:90:00"), Some(vec![0x1F, 0x90, 0x00]));
        assert_eq!(parse(""), Some(vec![]));
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("zz"), None);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[0xDE, 0xAD]), "dead");
        assert_eq!(encode_spaced(&[0xDE, 0xAD]), "de ad");
    }

    #[test]
    fn test_dump_lines() {
        let lines = dump(b"ABCDEFGHIJ", Address::new(0x1000), 8);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000000000001000  41 42"));
        assert!(lines[0].ends_with("ABCDEFGH"));
        assert!(lines[1].starts_with("0000000000001008  49 4a"));
        assert!(lines[1].ends_with("IJ"));
    }
}
