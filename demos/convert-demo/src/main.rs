//! RADIX Demo Application
//!
//! Interactive base-conversion report:
//! - Any real or complex destination base with |β| ≠ 1
//! - Gaussian (−1+i) balanced/unbalanced and Eisenstein (−1+ω) modes
//! - Reciprocal rewriting for |β| < 1
//! - Reconstruction, actual error and theoretical bound

use std::io::{self, Write};

use num_complex::Complex64;
use radix_core::{parse_digit_string, value_from_digits, RadixError};
use radix_engine::{Converter, ExtractionMode};
use radix_format::{base_label, format_complex, format_hex, format_universal, parse_complex, widen_positional};

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=".repeat(76));
    println!("RADIX — universal base conversion report");
    println!("{}", "=".repeat(76));

    let num = prompt("Enter number")?;
    let src_base = parse_complex(&prompt("Enter source base")?)?;
    let dst_base = parse_complex(&prompt("Enter target base")?)?;
    let frac_digits: usize = prompt("Fractional digits")?.parse()?;
    let mode_name = prompt("Mode [balanced/unbalanced/none/eisenstein]")?.to_lowercase();
    let mode = ExtractionMode::from_name(&mode_name).unwrap_or_default();

    // A standard integer source base reads the number as a digit string;
    // anything else reads it as a complex literal.
    let value = if src_base.im == 0.0 && src_base.re == src_base.re.trunc() {
        let digits = parse_digit_string(&num)?;
        value_from_digits(&digits, src_base.re as i64)
    } else {
        parse_complex(&num)?
    };

    let conversion = match Converter::new().convert(value, dst_base, mode, frac_digits) {
        Ok(conversion) => conversion,
        Err(RadixError::NonTerminating { emitted }) => {
            println!("{}", "=".repeat(76));
            println!("Extraction did not terminate within {emitted} digits.");
            println!("The expansion of this value has no finite representation here.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", "=".repeat(76));
    println!("Parsed value        : {}", format_complex(value));

    if conversion.base.reciprocal_used {
        println!("NOTE:");
        println!(
            "  |base| < 1 detected. Using reciprocal base γ = 1/β = {}",
            format_complex(conversion.base.base)
        );
        println!("  Digits represent powers of γ⁻¹ (stable positional system).");
    }

    let mut repr = conversion.representation.clone();
    widen_positional(&mut repr);
    if conversion.base.base == Complex64::new(16.0, 0.0) {
        println!("Representation      : {}", format_hex(&repr.integer));
    } else {
        println!("Representation      : {}", format_universal(&repr));
    }

    println!("Digit base          : {}", base_label(repr.base));
    println!(
        "Reconstructed       : {}",
        format_complex(conversion.result.reconstructed)
    );
    println!("Actual error        : {:e}", conversion.result.actual_error);
    println!("Error bound ≤       : {:e}", conversion.result.bound);
    println!("Verified            : {}", conversion.result.verified);
    println!("{}", "=".repeat(76));

    Ok(())
}
