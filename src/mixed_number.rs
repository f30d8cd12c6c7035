//! 길이를 1/16 단위 대분수 문자열로 변환하고, 분수 형태의 입력을 해석한다.

use std::fmt;

use thiserror::Error;

/// 표시 격자 간격 (1/16).
pub const GRID: f64 = 0.0625;
const SIXTEENTHS: u32 = 16;

/// 정수부와 2의 거듭제곱 분모(최대 16)를 가진 분수부로 표현한 길이.
///
/// 분수부는 항상 0 이상의 기약분수이며 분자가 0이면 분수부를 표시하지 않는다.
/// 음수는 정수부만 음수가 된다: -1.5 는 `-2+1/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedNumber {
    pub whole: i64,
    pub numerator: u32,
    /// 1, 2, 4, 8, 16 중 하나
    pub denominator: u32,
}

impl MixedNumber {
    /// 길이를 1/16 격자로 내림(음의 무한대 방향)하여 대분수로 만든다.
    /// 유한하지 않은 값은 None.
    pub fn from_length(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let rounded = value - value.rem_euclid(GRID);
        let mut whole = rounded.floor() as i64;
        // 부동소수 오차로 정수에서 약간 벗어날 수 있으므로 반올림 후 환산
        let mut numerator = (rounded.rem_euclid(1.0) * f64::from(SIXTEENTHS)).round() as u32;
        if numerator >= SIXTEENTHS {
            whole += 1;
            numerator -= SIXTEENTHS;
        }
        let mut denominator = SIXTEENTHS;
        while numerator != 0 && numerator % 2 == 0 {
            numerator /= 2;
            denominator /= 2;
        }
        if numerator == 0 {
            denominator = 1;
        }
        Some(Self {
            whole,
            numerator,
            denominator,
        })
    }

    pub fn has_fraction(&self) -> bool {
        self.numerator != 0
    }

    /// 격자값으로 되돌린다.
    pub fn to_f64(&self) -> f64 {
        self.whole as f64 + f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_fraction() {
            write!(f, "{}+{}/{}", self.whole, self.numerator, self.denominator)
        } else {
            write!(f, "{}", self.whole)
        }
    }
}

/// 길이를 `정수+분자/분모` 형태 문자열로 변환한다. 결과는 항상 내림값이다.
pub fn as_mixed_number(value: f64) -> String {
    match MixedNumber::from_length(value) {
        Some(mixed) => mixed.to_string(),
        None => value.to_string(),
    }
}

/// 길이 입력 문자열 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthParseError {
    #[error("no value entered")]
    Empty,
    #[error("'{0}' is not a number or fraction")]
    Invalid(String),
    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),
}

/// `0.5`, `3/4`, `1-1/8`, `1 1/8`, `1 - 1/8`, `1+1/8` 형식의 길이를 해석한다.
/// 끝에 붙은 `"` 또는 `in` 은 무시한다.
///
/// 앞의 `-` 는 보통 대분수 전체에 걸린다 (`-1 1/8` 은 -1.125).
/// 단 `+` 로 이은 형식은 화면 표기와 같이 정수부에만 걸린다 (`-2+1/2` 는 -1.5).
pub fn parse_length(input: &str) -> Result<f64, LengthParseError> {
    let text = input.trim();
    let text = text
        .strip_suffix('"')
        .or_else(|| text.strip_suffix("in"))
        .unwrap_or(text)
        .trim();
    if text.is_empty() {
        return Err(LengthParseError::Empty);
    }
    let invalid = || LengthParseError::Invalid(input.trim().to_string());

    let Some(slash) = text.find('/') else {
        return text.parse::<f64>().map_err(|_| invalid());
    };

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text.strip_prefix('+').unwrap_or(text).trim_start()),
    };
    let slash = slash - (text.len() - body.len());

    // 정수부와 분수부 사이 구분자: 공백, `-`, `+` 중 하나(앞뒤 공백 허용).
    let head = body[..slash].trim_end();
    let (whole, separator, fraction) = match head.find([' ', '-', '+']) {
        Some(i) => {
            let rest = &body[i..];
            let fraction = rest.trim_start_matches([' ', '-', '+']);
            let separator = rest[..rest.len() - fraction.len()].trim();
            (body[..i].trim(), separator, fraction)
        }
        None => ("", "", body),
    };
    if !matches!(separator, "" | "-" | "+") {
        return Err(invalid());
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let (num, den) = fraction.split_once('/').ok_or_else(invalid)?;
    let num: u64 = num.trim().parse().map_err(|_| invalid())?;
    let den: u64 = den.trim().parse().map_err(|_| invalid())?;
    if den == 0 {
        return Err(LengthParseError::ZeroDenominator(input.trim().to_string()));
    }
    let whole = whole as f64;
    let fraction = num as f64 / den as f64;
    Ok(match (negative, separator) {
        (false, _) => whole + fraction,
        (true, "+") => -whole + fraction,
        (true, _) => -(whole + fraction),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        let m = MixedNumber::from_length(2.75).unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (2, 3, 4));
        let m = MixedNumber::from_length(0.5).unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (0, 1, 2));
    }

    #[test]
    fn zero_fraction_has_unit_denominator() {
        let m = MixedNumber::from_length(7.0).unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (7, 0, 1));
        assert!(!m.has_fraction());
    }

    #[test]
    fn carries_when_sixteenths_round_up() {
        // 2.9999999999 은 격자 내림 후 2+15/16
        assert_eq!(as_mixed_number(2.999_999_999), "2+15/16");
        assert_eq!(as_mixed_number(3.0 - 1e-15), "2+15/16");
    }

    #[test]
    fn negative_values_floor_toward_minus_infinity() {
        assert_eq!(as_mixed_number(-1.5), "-2+1/2");
        assert_eq!(as_mixed_number(-3.0), "-3");
        assert_eq!(as_mixed_number(-2.9), "-3+1/16");
        assert_eq!(as_mixed_number(-0.01), "-1+15/16");
        assert_eq!(as_mixed_number(-0.0), "0");
        let m = MixedNumber::from_length(-1.5).unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (-2, 1, 2));
        assert_eq!(m.to_f64(), -1.5);
    }

    #[test]
    fn non_finite_is_passed_through() {
        assert_eq!(as_mixed_number(f64::INFINITY), "inf");
        assert!(MixedNumber::from_length(f64::NAN).is_none());
    }

    #[test]
    fn parses_fractional_inputs() {
        assert_eq!(parse_length("0.5"), Ok(0.5));
        assert_eq!(parse_length("3/4"), Ok(0.75));
        assert_eq!(parse_length("1-1/8"), Ok(1.125));
        assert_eq!(parse_length("1 1/8\""), Ok(1.125));
        assert_eq!(parse_length("1+1/2 in"), Ok(1.5));
        assert_eq!(parse_length("-2"), Ok(-2.0));
        assert_eq!(parse_length("1 - 1/8"), Ok(1.125));
        assert_eq!(parse_length("1 + 1/8"), Ok(1.125));
    }

    #[test]
    fn leading_sign_applies_to_fractions() {
        assert_eq!(parse_length("-1/2"), Ok(-0.5));
        assert_eq!(parse_length("- 3/4"), Ok(-0.75));
        assert_eq!(parse_length("-1-1/8"), Ok(-1.125));
        assert_eq!(parse_length("-1 1/8"), Ok(-1.125));
        // `+` 형식은 화면 표기처럼 정수부만 음수
        assert_eq!(parse_length("-2+1/2"), Ok(-1.5));
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert_eq!(parse_length("  "), Err(LengthParseError::Empty));
        assert!(matches!(parse_length("abc"), Err(LengthParseError::Invalid(_))));
        assert!(matches!(parse_length("1-x/8"), Err(LengthParseError::Invalid(_))));
        assert!(matches!(parse_length("1--1/8"), Err(LengthParseError::Invalid(_))));
        assert!(matches!(parse_length("1 +- 1/8"), Err(LengthParseError::Invalid(_))));
        assert_eq!(
            parse_length("3/0"),
            Err(LengthParseError::ZeroDenominator("3/0".into()))
        );
    }
}
