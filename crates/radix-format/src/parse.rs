//! Parsing complex literals from user text
//!
//! Accepts `a+bi` style literals with `i` or `j` as the imaginary unit
//! (a literal `ω` is also read as the unit, matching the input conventions
//! of the report tooling). This is a front-end convenience; the numeric core
//! only ever sees `Complex64`.

use num_complex::Complex64;
use radix_core::{RadixError, RadixResult};

/// Parse a complex literal: `"3"`, `"-2.5"`, `"3+4i"`, `"4i"`, `"-i"`,
/// `"1e-3+2j"`.
pub fn parse_complex(s: &str) -> RadixResult<Complex64> {
    let invalid = || RadixError::InvalidComplexLiteral(s.to_string());
    let cleaned: String = s
        .trim()
        .replace('j', "i")
        .replace('ω', "i")
        .replace(' ', "");
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let Some(body) = cleaned.strip_suffix('i') else {
        return cleaned
            .parse::<f64>()
            .map(|re| Complex64::new(re, 0.0))
            .map_err(|_| invalid());
    };

    // Split a trailing imaginary term off the real part: the sign must not
    // be leading and must not belong to an exponent.
    let split = body
        .char_indices()
        .rev()
        .find(|&(idx, c)| {
            idx > 0
                && (c == '+' || c == '-')
                && !matches!(body.as_bytes()[idx - 1], b'e' | b'E')
        })
        .map(|(idx, _)| idx);

    let (re_str, im_str) = match split {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => ("", body),
    };

    let re = if re_str.is_empty() {
        0.0
    } else {
        re_str.parse::<f64>().map_err(|_| invalid())?
    };
    let im = match im_str {
        "" | "+" => 1.0,
        "-" => -1.0,
        _ => im_str.parse::<f64>().map_err(|_| invalid())?,
    };

    Ok(Complex64::new(re, im))
}
