//! String to number parsing for `ToNumber`.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "runner/ds/operations/numeric_string.pest"] // relative to src
struct NumericStringParser;

/// Parse `s` as a StringNumericLiteral. Empty or all white space text is 0,
/// anything that does not match the grammar is NaN.
pub fn parse_numeric_string(s: &str) -> f64 {
    let mut pairs = match NumericStringParser::parse(Rule::numeric_string, s) {
        Ok(pairs) => pairs,
        Err(_) => return f64::NAN,
    };
    let literal = pairs
        .next()
        .and_then(|numeric_string| numeric_string.into_inner().next());
    literal.map(build_number).unwrap_or(0.0)
}

fn build_number(pair: Pair<Rule>) -> f64 {
    match pair.as_rule() {
        Rule::hex_integer_literal => radix_value(&pair.as_str()[2..], 16),
        Rule::octal_integer_literal => radix_value(&pair.as_str()[2..], 8),
        Rule::binary_integer_literal => radix_value(&pair.as_str()[2..], 2),
        Rule::str_decimal_literal => decimal_value(pair.as_str()),
        Rule::EOI => 0.0,
        _ => f64::NAN,
    }
}

// Digits are folded as f64 so arbitrarily long literals round instead of overflowing.
fn radix_value(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0_f64, |acc, c| {
        acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
    })
}

fn decimal_value(text: &str) -> f64 {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
