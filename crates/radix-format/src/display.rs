//! Rendering digit sequences as display strings

use radix_core::{Digit, Representation};

use crate::base_label;

/// Fixed alphabet for base-16 rendering
pub const HEX_MAP: &str = "0123456789ABCDEF";

/// Render integer digits as a hexadecimal string, `D_16` style. Digits
/// outside 0–15 render as `?`.
pub fn format_hex(integer: &[Digit]) -> String {
    let mut s: String = integer
        .iter()
        .map(|&d| {
            usize::try_from(d)
                .ok()
                .and_then(|i| HEX_MAP.chars().nth(i))
                .unwrap_or('?')
        })
        .collect();
    s.push_str("_16");
    s
}

/// Render a representation in the universal angle-bracket form:
/// `⟨I | F⟩_label`. An empty or all-zero fractional part is omitted.
pub fn format_universal(repr: &Representation) -> String {
    let join = |digits: &[Digit]| {
        digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let label = base_label(repr.base);
    let i = join(&repr.integer);
    if repr.fraction_is_zero() {
        format!("⟨{i} |⟩_{label}")
    } else {
        format!("⟨{i} | {}⟩_{label}", join(&repr.fraction))
    }
}

/// Cosmetic widening for wide real bases: a single integer digit in a base
/// with re > 10 gains an explicit leading zero, so `⟨13 |⟩_16` cannot be
/// misread as two digits. Purely a display rule.
pub fn widen_positional(repr: &mut Representation) {
    if repr.base.im == 0.0 && repr.base.re > 10.0 && repr.integer.len() == 1 {
        repr.integer.insert(0, 0);
    }
}
