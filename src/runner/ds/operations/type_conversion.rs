use crate::runner::ds::color::Rgb;
use crate::runner::ds::operations::numeric_string::parse_numeric_string;
use crate::runner::ds::value::JsValue;

pub const CLASS_STR_UNDEFINED: &str = "void";
pub const CLASS_STR_NULL: &str = "null";
pub const CLASS_STR_BOOLEAN: &str = "Boolean";
pub const CLASS_STR_INT: &str = "int";
pub const CLASS_STR_UINT: &str = "uint";
pub const CLASS_STR_NUMBER: &str = "Number";
pub const CLASS_STR_STRING: &str = "String";

const TWO_POW_32: f64 = 4294967296.0;

pub fn to_number(v: &JsValue) -> f64 {
    match v {
        JsValue::Undefined => f64::NAN,
        JsValue::Null => 0.0,
        JsValue::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        JsValue::Integer(i) => *i as f64,
        JsValue::UnsignedInteger(u) => *u as f64,
        JsValue::Number(n) => *n,
        JsValue::String(s) => parse_numeric_string(s),
        JsValue::Object(_) => f64::NAN,
    }
}

/// ECMA ToUint32: truncate, then reduce modulo 2^32.
pub fn f64_to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(TWO_POW_32) as u32
}

/// ECMA ToInt32: ToUint32 reinterpreted as two's complement.
pub fn f64_to_int32(n: f64) -> i32 {
    f64_to_uint32(n) as i32
}

pub fn to_int32(v: &JsValue) -> i32 {
    match v {
        JsValue::Integer(i) => *i,
        JsValue::UnsignedInteger(u) => *u as i32,
        JsValue::Boolean(b) => *b as i32,
        _ => f64_to_int32(to_number(v)),
    }
}

pub fn to_uint32(v: &JsValue) -> u32 {
    match v {
        JsValue::Integer(i) => *i as u32,
        JsValue::UnsignedInteger(u) => *u,
        JsValue::Boolean(b) => *b as u32,
        _ => f64_to_uint32(to_number(v)),
    }
}

/// Truncating conversion; NaN and infinities become 0, out of range values saturate.
pub fn to_int64(v: &JsValue) -> i64 {
    match v {
        JsValue::Integer(i) => *i as i64,
        JsValue::UnsignedInteger(u) => *u as i64,
        _ => {
            let n = to_number(v);
            if n.is_finite() {
                n.trunc() as i64
            } else {
                0
            }
        }
    }
}

pub fn to_boolean(v: &JsValue) -> bool {
    match v {
        JsValue::Undefined | JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::Integer(i) => *i != 0,
        JsValue::UnsignedInteger(u) => *u != 0,
        JsValue::Number(n) => !(*n == 0.0 || n.is_nan()),
        JsValue::String(s) => !s.is_empty(),
        JsValue::Object(_) => true,
    }
}

pub fn to_js_string(v: &JsValue) -> String {
    match v {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::Integer(i) => i.to_string(),
        JsValue::UnsignedInteger(u) => u.to_string(),
        JsValue::Number(n) => number_to_string(*n),
        JsValue::String(s) => s.to_string(),
        JsValue::Object(o) => o.to_string(),
    }
}

pub fn to_color(v: &JsValue) -> Rgb {
    Rgb::from_uint(to_uint32(v))
}

pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let s = format!("{:e}", n);
        match s.find('e') {
            Some(idx) if !s[idx + 1..].starts_with('-') => {
                format!("{}e+{}", &s[..idx], &s[idx + 1..])
            }
            _ => s,
        }
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number() {
        assert!(to_number(&JsValue::Undefined).is_nan());
        assert_eq!(to_number(&JsValue::Null), 0.0);
        assert_eq!(to_number(&JsValue::Boolean(true)), 1.0);
        assert_eq!(to_number(&JsValue::from(" 12.5 ")), 12.5);
        assert_eq!(to_number(&JsValue::from("")), 0.0);
        assert!(to_number(&JsValue::from("twelve")).is_nan());
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(to_int32(&JsValue::Number(4294967296.0 + 5.0)), 5);
        assert_eq!(to_int32(&JsValue::Number(2147483648.0)), -2147483648);
        assert_eq!(to_int32(&JsValue::Number(-1.9)), -1);
        assert_eq!(to_int32(&JsValue::Number(f64::NAN)), 0);
        assert_eq!(to_int32(&JsValue::Number(f64::INFINITY)), 0);
        assert_eq!(to_int32(&JsValue::UnsignedInteger(u32::MAX)), -1);
        assert_eq!(to_int32(&JsValue::from("0x10")), 16);
    }

    #[test]
    fn test_to_uint32() {
        assert_eq!(to_uint32(&JsValue::Integer(-1)), u32::MAX);
        assert_eq!(to_uint32(&JsValue::Number(-1.0)), u32::MAX);
        assert_eq!(to_uint32(&JsValue::Number(3.99)), 3);
        assert_eq!(to_uint32(&JsValue::Null), 0);
    }

    #[test]
    fn test_to_int64() {
        assert_eq!(to_int64(&JsValue::Number(1e12 + 0.5)), 1_000_000_000_000);
        assert_eq!(to_int64(&JsValue::Number(-7.9)), -7);
        assert_eq!(to_int64(&JsValue::Number(f64::NAN)), 0);
        assert_eq!(to_int64(&JsValue::UnsignedInteger(u32::MAX)), u32::MAX as i64);
    }

    #[test]
    fn test_to_boolean() {
        assert!(!to_boolean(&JsValue::Undefined));
        assert!(!to_boolean(&JsValue::Number(f64::NAN)));
        assert!(!to_boolean(&JsValue::Number(-0.0)));
        assert!(!to_boolean(&JsValue::from("")));
        assert!(to_boolean(&JsValue::from("false")));
        assert!(to_boolean(&JsValue::Integer(-3)));
    }

    #[test]
    fn test_to_js_string() {
        assert_eq!(to_js_string(&JsValue::Undefined), "undefined");
        assert_eq!(to_js_string(&JsValue::Boolean(false)), "false");
        assert_eq!(to_js_string(&JsValue::Integer(-4)), "-4");
        assert_eq!(to_js_string(&JsValue::Number(2.0)), "2");
        assert_eq!(to_js_string(&JsValue::Number(0.1)), "0.1");
        assert_eq!(to_js_string(&JsValue::Number(-0.0)), "0");
        assert_eq!(to_js_string(&JsValue::Number(1e21)), "1e+21");
        assert_eq!(to_js_string(&JsValue::Number(1.5e-7)), "1.5e-7");
        assert_eq!(to_js_string(&JsValue::Number(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(&JsValue::Integer(0xff8000)), Rgb::new(0xff, 0x80, 0));
        assert_eq!(to_color(&JsValue::from("0x0000ff")), Rgb::new(0, 0, 0xff));
    }
}
