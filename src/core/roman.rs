use crate::core::NumeralCodec;
use crate::utils::error::{CalcError, Result};

/// Greedy encoding table, largest value first.
pub const ROMAN_UNITS: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub const MAX_ROMAN: i64 = 100;

fn symbol_value(ch: char) -> Result<i64> {
    match ch {
        'I' => Ok(1),
        'V' => Ok(5),
        'X' => Ok(10),
        'L' => Ok(50),
        'C' => Ok(100),
        other => Err(CalcError::InvalidCharacter { ch: other }),
    }
}

/// Decodes left to right. A symbol larger than its predecessor adds
/// `current - 2 * previous`, undoing the predecessor that was already added.
/// Operands only use I, V and X; L and C are accepted so encoded results decode back.
/// Well-formedness beyond that pairwise rule is not checked.
pub fn roman_to_integer(roman: &str) -> Result<i64> {
    let mut result = 0;
    let mut previous: Option<i64> = None;

    for ch in roman.chars().flat_map(char::to_uppercase) {
        let current = symbol_value(ch)?;
        match previous {
            Some(prev) if current > prev => result += current - 2 * prev,
            _ => result += current,
        }
        previous = Some(current);
    }

    Ok(result)
}

/// Returns `None` outside `1..=100`.
pub fn integer_to_roman(number: i64) -> Option<String> {
    if number <= 0 || number > MAX_ROMAN {
        return None;
    }

    let mut remaining = number;
    let mut result = String::new();
    for (value, symbol) in ROMAN_UNITS {
        while remaining >= value {
            remaining -= value;
            result.push_str(symbol);
        }
    }

    Some(result)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RomanCodec;

impl NumeralCodec for RomanCodec {
    fn decode(&self, token: &str) -> Result<i64> {
        roman_to_integer(token)
    }

    fn encode(&self, value: i64) -> Result<String> {
        if value < 0 {
            return Err(CalcError::NoNegativeRomanNumerals);
        }
        integer_to_roman(value).ok_or(CalcError::RomanResultOutOfRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

    #[test]
    fn test_roman_to_integer() {
        assert_eq!(roman_to_integer("I").unwrap(), 1);
        assert_eq!(roman_to_integer("IV").unwrap(), 4);
        assert_eq!(roman_to_integer("viii").unwrap(), 8);
        assert_eq!(roman_to_integer("IX").unwrap(), 9);
        assert_eq!(roman_to_integer("X").unwrap(), 10);
    }

    #[test]
    fn test_unknown_symbol() {
        let err = roman_to_integer("MX").unwrap_err();
        assert!(matches!(err, CalcError::InvalidCharacter { ch: 'M' }));

        assert!(matches!(
            roman_to_integer("I2"),
            Err(CalcError::InvalidCharacter { ch: '2' })
        ));
    }

    #[test]
    fn test_integer_to_roman() {
        assert_eq!(integer_to_roman(8).as_deref(), Some("VIII"));
        assert_eq!(integer_to_roman(14).as_deref(), Some("XIV"));
        assert_eq!(integer_to_roman(49).as_deref(), Some("XLIX"));
        assert_eq!(integer_to_roman(99).as_deref(), Some("XCIX"));
        assert_eq!(integer_to_roman(100).as_deref(), Some("C"));
    }

    #[test]
    fn test_integer_to_roman_out_of_range() {
        assert_eq!(integer_to_roman(0), None);
        assert_eq!(integer_to_roman(-3), None);
        assert_eq!(integer_to_roman(101), None);
    }

    #[test]
    fn test_canonical_operands_survive_decode_then_encode() {
        for (index, roman) in CANONICAL.iter().enumerate() {
            let value = roman_to_integer(roman).unwrap();
            assert_eq!(value, index as i64 + 1);
            assert_eq!(integer_to_roman(value).as_deref(), Some(*roman));
        }
    }

    #[test]
    fn test_encoded_values_decode_back() {
        for n in 1..=MAX_ROMAN {
            let roman = integer_to_roman(n).unwrap();
            assert_eq!(roman_to_integer(&roman).unwrap(), n, "{}", roman);
        }
    }

    #[test]
    fn test_codec_encode_errors() {
        let codec = RomanCodec;
        assert_eq!(codec.encode(12).unwrap(), "XII");
        assert!(matches!(
            codec.encode(-4),
            Err(CalcError::NoNegativeRomanNumerals)
        ));
        assert!(matches!(
            codec.encode(0),
            Err(CalcError::RomanResultOutOfRange { value: 0 })
        ));
    }
}
