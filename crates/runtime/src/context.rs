use indexmap::IndexMap;
use tracing::debug;

use crate::{
    conf::RuntimeConf,
    errors::{CallSite, ExecError, ExecErrorContent, ExecResult},
    functions::{InternalFnCallData, ScopeFn},
    values::RuntimeValue,
};

/// Content of a scope
#[derive(Debug, Clone, Default)]
pub struct ScopeContent {
    /// Functions, in declaration order
    pub fns: IndexMap<String, ScopeFn>,
}

/// Parameters to create a new [`Context`]
#[derive(Debug, Clone, Default)]
pub struct ContextCreationParams {
    pub runtime_conf: RuntimeConf,
}

/// This structure represents the state of the runtime.
///
/// It holds the runtime configuration and the global scope, which is filled
/// with the native library before any call happens. Distinct contexts share
/// nothing and can be used from different threads at the same time.
#[derive(Debug, Clone)]
pub struct Context {
    conf: ContextCreationParams,
    globals: ScopeContent,
}

impl Context {
    /// Create a new context
    /// The native library's content can be generated using the dedicated crate
    pub fn new(conf: ContextCreationParams, native_lib_content: ScopeContent) -> Self {
        Self {
            conf,
            globals: native_lib_content,
        }
    }

    /// Get the runtime configuration
    pub fn runtime_conf(&self) -> &RuntimeConf {
        &self.conf.runtime_conf
    }

    /// Get a global function from its name
    pub fn get_fn(&self, name: &str) -> Option<&ScopeFn> {
        self.globals.fns.get(name)
    }

    /// List all global functions, in registration order
    pub fn list_fns(&self) -> impl Iterator<Item = (&str, &ScopeFn)> {
        self.globals
            .fns
            .iter()
            .map(|(name, func)| (name.as_str(), func))
    }

    /// Create an error
    pub fn error(&self, at: CallSite, content: impl Into<ExecErrorContent>) -> ExecError {
        ExecError {
            at,
            content: content.into(),
            note: None,
        }
    }

    /// Call a global function with positional arguments
    pub fn call_fn(
        &mut self,
        name: &str,
        args: Vec<RuntimeValue>,
    ) -> ExecResult<Option<RuntimeValue>> {
        let call_at = CallSite::FnCall {
            name: name.to_owned(),
        };

        let body = match self.get_fn(name) {
            Some(func) => func.body,
            None => {
                return Err(self.error(
                    CallSite::Internal("global scope"),
                    ExecErrorContent::UnknownFunction(name.to_owned()),
                ));
            }
        };

        debug!(function = name, args = args.len(), "calling native function");

        body(InternalFnCallData {
            call_at,
            args,
            ctx: self,
        })
    }
}
