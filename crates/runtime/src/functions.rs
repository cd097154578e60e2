use std::fmt::Debug;

use crate::{
    context::Context,
    errors::{ArityBounds, CallSite, ExecResult},
    values::{RuntimeValue, ValueType},
};

/// Declaration of a function's argument
#[derive(Debug, Clone)]
pub struct FnArg {
    pub name: &'static str,
    pub is_optional: bool,
    pub is_rest: bool,
    pub typ: Option<ValueType>,
}

/// Signature of a function
#[derive(Debug, Clone)]
pub struct FnSignature {
    pub args: Vec<FnArg>,
    pub ret_type: Option<ValueType>,
}

impl FnSignature {
    /// Compute the number of positional arguments this signature accepts
    pub fn arity(&self) -> ArityBounds {
        let min = self
            .args
            .iter()
            .filter(|arg| !arg.is_optional && !arg.is_rest)
            .count();

        let max = if self.args.iter().any(|arg| arg.is_rest) {
            None
        } else {
            Some(self.args.len())
        };

        ArityBounds { min, max }
    }
}

/// Internal function call data
pub struct InternalFnCallData<'c> {
    /// Call's location
    pub call_at: CallSite,

    /// Positional arguments, in the order they were supplied
    pub args: Vec<RuntimeValue>,

    /// Runtime context
    pub ctx: &'c mut Context,
}

/// Body of an internal function (used for e.g. builtin functions)
pub type InternalFnBody = fn(InternalFnCallData) -> ExecResult<Option<RuntimeValue>>;

/// Function registered in a scope
#[derive(Clone)]
pub struct ScopeFn {
    pub signature: FnSignature,
    pub body: InternalFnBody,
}

impl Debug for ScopeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeFn")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
