//!
//! This module defines and exposes *type handlers*, which are simple types that
//! allow to convert and parse some of the host's native types.
//!

use std::marker::PhantomData;

use numseq_prettify::PrettyPrintable;
use numseq_runtime::values::{RuntimeValue, ValueType};

use super::args::{TypedValueEncoder, TypedValueParser};

/// This macro helps create a type handler for any variant of the [`ValueType`] enum,
/// associated to a variant of the [`RuntimeValue`]
macro_rules! declare_basic_type_handlers {
    ($($name: ident ($variant: ident) = $type: ty => $value_ident: ident: $parser: expr),+) => {
        $(
            pub struct $name;

            impl TypedValueParser for $name {
                fn value_type() -> ValueType {
                    ValueType::$variant
                }

                type Parsed = $type;

                fn parse($value_ident: RuntimeValue) -> Result<Self::Parsed, String> {
                    $parser
                }
            }
        )+
    };
}

// Implement type handlers for the most basic types
declare_basic_type_handlers!(
    AnyType (Any) = RuntimeValue => value: Ok(value),

    IntType (Int) = i64 => value: match value {
        RuntimeValue::Int(inner) => Ok(inner),
        _ => Err(type_mismatch("an integer", &value))
    }
);

fn type_mismatch(expected: &str, value: &RuntimeValue) -> String {
    format!(
        "expected {expected}, found type {}",
        value.get_type().display_inline()
    )
}

/// Type handler for numbers
///
/// Any value is accepted and coerced using the host's numeric conversion rules.
pub struct NumberType;

impl TypedValueParser for NumberType {
    fn value_type() -> ValueType {
        ValueType::number()
    }

    type Parsed = f64;

    fn parse(value: RuntimeValue) -> Result<Self::Parsed, String> {
        Ok(value.to_number())
    }
}

impl TypedValueEncoder for NumberType {
    type Encodable = f64;

    fn encode(value: Self::Encodable) -> RuntimeValue {
        RuntimeValue::from_number(value)
    }
}

/// Type handler for lists, with a parser for each item
pub struct DetachedListType<Inner: TypedValueParser> {
    _i: PhantomData<Inner>,
}

impl<Inner: TypedValueParser> TypedValueParser for DetachedListType<Inner> {
    fn value_type() -> ValueType {
        ValueType::TypedList(Box::new(Inner::value_type()))
    }

    type Parsed = Vec<Inner::Parsed>;

    fn parse(value: RuntimeValue) -> Result<Self::Parsed, String> {
        match value {
            RuntimeValue::List(list) => list.into_iter().map(Inner::parse).collect(),
            _ => Err(type_mismatch("a list", &value)),
        }
    }
}

impl<Inner: TypedValueParser + TypedValueEncoder> TypedValueEncoder for DetachedListType<Inner> {
    type Encodable = Vec<Inner::Encodable>;

    fn encode(value: Self::Encodable) -> RuntimeValue {
        RuntimeValue::List(value.into_iter().map(Inner::encode).collect())
    }
}
