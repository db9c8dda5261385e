use crate::processors::aggregator::{Aggregation, AggregationResult};
use crate::utils::constants::{AVG_PRECISION, SCIENTIFIC_PRECISION, SCIENTIFIC_THRESHOLD};

/// Render the final scalar as `"<formatted-number> <unit>"`.
pub fn format_result(result: &AggregationResult) -> String {
    format!("{} {}", format_value(result.value, result.kind), result.unit)
}

/// Display policy for the final scalar:
/// - AVG keeps full fixed precision, plain notation, nothing stripped;
/// - other kinds switch to scientific notation at large magnitude;
/// - otherwise one fractional digit, with trailing zero and bare point
///   stripped (`12.0` prints as `12`).
pub fn format_value(value: f64, kind: Aggregation) -> String {
    if kind == Aggregation::Avg {
        format!("{:.*}", AVG_PRECISION, value)
    } else if value.abs() >= SCIENTIFIC_THRESHOLD {
        to_scientific(value)
    } else {
        let fixed = format!("{:.1}", value);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Scientific notation with the exact exponent shape `d.dddddddEn`: an upper
/// case separator, no `+` sign, no leading zeros in the exponent. The shape
/// is an output contract, so the runtime formatter's exponent is normalized
/// explicitly rather than trusted.
fn to_scientific(value: f64) -> String {
    let raw = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("", exponent),
            };
            let digits = digits.trim_start_matches('0');
            let digits = if digits.is_empty() { "0" } else { digits };
            format!("{}E{}{}", mantissa, sign, digits)
        }
        None => raw,
    }
}
