//! This module contains utilities for arguments handling, typechecking and type-safe values extraction

use std::{collections::VecDeque, marker::PhantomData};

use numseq_runtime::{
    functions::FnArg,
    values::{RuntimeValue, ValueType},
};

pub trait TypedValueParser {
    fn value_type() -> ValueType;

    type Parsed;
    fn parse(value: RuntimeValue) -> Result<Self::Parsed, String>;
}

pub trait TypedValueEncoder {
    type Encodable;
    fn encode(value: Self::Encodable) -> RuntimeValue;
}

pub trait ArgHandler {
    fn name(&self) -> &'static str;
    fn is_optional(&self) -> bool;
    fn is_rest(&self) -> bool;

    type Parsed;

    /// Consume this argument's value(s) from the remaining positional arguments
    fn parse(&self, args: &mut VecDeque<RuntimeValue>) -> Result<Self::Parsed, String>;

    /// Parser for a single value of this argument
    type TypedValueParser: TypedValueParser;
}

/// Argument collecting all remaining positional values
pub struct RestArg<T: TypedValueParser> {
    name: &'static str,
    _t: PhantomData<T>,
}

impl<T: TypedValueParser> RestArg<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _t: PhantomData,
        }
    }
}

impl<T: TypedValueParser> ArgHandler for RestArg<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_optional(&self) -> bool {
        false
    }

    fn is_rest(&self) -> bool {
        true
    }

    type Parsed = Vec<T::Parsed>;

    fn parse(&self, args: &mut VecDeque<RuntimeValue>) -> Result<Self::Parsed, String> {
        args.drain(..).map(T::parse).collect()
    }

    type TypedValueParser = T;
}

pub fn generate_internal_arg_decl<A: ArgHandler>(arg: &A) -> FnArg {
    FnArg {
        name: arg.name(),
        is_optional: arg.is_optional(),
        is_rest: arg.is_rest(),
        typ: Some(<A::TypedValueParser as TypedValueParser>::value_type()),
    }
}
