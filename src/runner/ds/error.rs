use std::fmt;

pub const ERROR_ID_CHECK_TYPE_FAILED: u32 = 1034;
pub const ERROR_ID_WRONG_ARGUMENT_COUNT: u32 = 1063;

/// Why argument unpacking for a native call gave up.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentErrorKind {
    /// A required slot found no argument left.
    WrongArgumentCount {
        callee: String,
        expected: usize,
        received: usize,
    },
    /// A reference slot got a value of an unrelated class.
    CheckTypeFailed { actual: String, expected: String },
}

impl ArgumentErrorKind {
    pub fn error_id(&self) -> u32 {
        match self {
            ArgumentErrorKind::WrongArgumentCount { .. } => ERROR_ID_WRONG_ARGUMENT_COUNT,
            ArgumentErrorKind::CheckTypeFailed { .. } => ERROR_ID_CHECK_TYPE_FAILED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ArgumentErrorKind::WrongArgumentCount {
                callee,
                expected,
                received,
            } => format!(
                "Argument count mismatch on {}. Expected {}, got {}",
                callee, expected, received
            ),
            ArgumentErrorKind::CheckTypeFailed { actual, expected } => format!(
                "Type Coercion failed: cannot convert {} to {}",
                actual, expected
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JErrorType {
    ReferenceError(String),
    TypeError(String),
    RangeError(String),
    SyntaxError(String),
    ArgumentError(ArgumentErrorKind),
}

impl JErrorType {
    pub fn wrong_argument_count(callee: &str, expected: usize, received: usize) -> Self {
        JErrorType::ArgumentError(ArgumentErrorKind::WrongArgumentCount {
            callee: callee.to_string(),
            expected,
            received,
        })
    }

    pub fn check_type_failed(actual: &str, expected: &str) -> Self {
        JErrorType::ArgumentError(ArgumentErrorKind::CheckTypeFailed {
            actual: actual.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Name of the script-visible error class this maps to.
    pub fn error_name(&self) -> &'static str {
        match self {
            JErrorType::ReferenceError(_) => "ReferenceError",
            JErrorType::TypeError(_) => "TypeError",
            JErrorType::RangeError(_) => "RangeError",
            JErrorType::SyntaxError(_) => "SyntaxError",
            JErrorType::ArgumentError(_) => "ArgumentError",
        }
    }

    pub fn error_id(&self) -> Option<u32> {
        match self {
            JErrorType::ArgumentError(kind) => Some(kind.error_id()),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            JErrorType::ReferenceError(m)
            | JErrorType::TypeError(m)
            | JErrorType::RangeError(m)
            | JErrorType::SyntaxError(m) => m.to_string(),
            JErrorType::ArgumentError(kind) => kind.message(),
        }
    }
}

impl fmt::Display for JErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JErrorType::ReferenceError(m) => write!(f, "Uncaught reference error: {}.", m),
            JErrorType::TypeError(m) => write!(f, "Uncaught type error: {}.", m),
            JErrorType::RangeError(m) => write!(f, "Uncaught range error: {}.", m),
            JErrorType::SyntaxError(m) => write!(f, "Uncaught syntax error: {}.", m),
            JErrorType::ArgumentError(kind) => write!(
                f,
                "Uncaught argument error: Error #{}: {}.",
                kind.error_id(),
                kind.message()
            ),
        }
    }
}

impl std::error::Error for JErrorType {}
