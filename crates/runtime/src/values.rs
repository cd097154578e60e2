use crate::coercion::string_to_number;

/// Value exposed to scripts
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    // Primitives
    // These can be cloned pretty cheaply
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),

    // Containers
    String(String),
    List(Vec<RuntimeValue>),
}

impl RuntimeValue {
    /// Build a number value, using the integer representation when it is lossless
    pub fn from_number(num: f64) -> Self {
        // i64::MAX is not representable as a float, so its upper bound is exclusive
        if num.fract() == 0.0 && num >= i64::MIN as f64 && num < i64::MAX as f64 {
            Self::Int(num as i64)
        } else {
            Self::Float(num)
        }
    }

    /// Convert this value to a number using the host's coercion rules
    ///
    /// Values without a numeric meaning convert to NaN, which compares as false
    /// against anything.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(bool) => {
                if *bool {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Int(int) => *int as f64,
            Self::Float(float) => *float,
            Self::String(string) => string_to_number(string),

            // Lists convert through their comma-joined string form
            Self::List(items) => match items.as_slice() {
                [] => 0.0,
                [item] => match item {
                    Self::Undefined | Self::Null => 0.0,
                    Self::Bool(_) => f64::NAN,
                    _ => item.to_number(),
                },
                _ => f64::NAN,
            },
        }
    }

    /// Compute the type of this value
    pub fn get_type(&self) -> ValueType {
        match self {
            Self::Undefined => ValueType::Undefined,
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::List(_) => ValueType::UntypedList,
        }
    }
}

/// Type of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Any,
    Undefined,
    Null,
    Bool,
    Int,
    Float,
    String,
    UntypedList,
    TypedList(Box<ValueType>),
    Union(Vec<ValueType>),
}

impl ValueType {
    /// Type of any numeric value
    pub fn number() -> Self {
        Self::Union(vec![Self::Int, Self::Float])
    }
}
