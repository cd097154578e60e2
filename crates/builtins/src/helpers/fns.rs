use numseq_runtime::functions::{FnSignature, InternalFnBody};

/// Description of an internal function
pub struct InternalFunction {
    /// Name of the function
    pub name: &'static str,

    /// Arguments and return type of the function
    pub signature: FnSignature,

    /// Callback of the function
    pub run: InternalFnBody,
}

/// Define an internal function
///
/// The module invoking this macro must provide a `run() -> Runner` function.
/// Positional arguments are checked against the declared arity before they
/// are handed to their argument handlers, in declaration order.
#[macro_export]
macro_rules! define_internal_fn {
    ($name: expr, ( $( $arg_name: ident : $arg_handler_type: ty = $arg_handler_gen: expr ),* ) -> $ret_type: expr) => {
        use std::collections::VecDeque;

        use numseq_runtime::{
            context::Context,
            errors::{CallSite, ExecErrorContent, ExecResult},
            functions::{FnSignature, InternalFnCallData},
            values::RuntimeValue,
        };

        #[allow(unused_imports)]
        use $crate::helpers::{args::*, fns::*, types::*};

        struct Args {
            $( $arg_name: <$arg_handler_type as ArgHandler>::Parsed ),*
        }

        fn _signature() -> FnSignature {
            FnSignature {
                args: vec![
                    $({
                        let arg: $arg_handler_type = $arg_handler_gen;
                        generate_internal_arg_decl(&arg)
                    }),*
                ],
                ret_type: $ret_type,
            }
        }

        fn _parse_args(#[allow(unused_mut)] mut args: VecDeque<RuntimeValue>) -> Result<Args, ExecErrorContent> {
            let arity = _signature().arity();

            if !arity.contains(args.len()) {
                return Err(ExecErrorContent::Arity {
                    expected: arity,
                    got: args.len(),
                });
            }

            Ok(Args {
                $( $arg_name: {
                    let arg_handler: $arg_handler_type = $arg_handler_gen;

                    arg_handler.parse(&mut args).map_err(|err| {
                        ExecErrorContent::String(format!("argument '{}': {err}", arg_handler.name()))
                    })?
                } ),*
            })
        }

        fn _run(call_data: InternalFnCallData) -> ExecResult<Option<RuntimeValue>> {
            let InternalFnCallData { call_at, args, ctx } = call_data;

            let args = _parse_args(VecDeque::from(args))
                .map_err(|err| ctx.error(call_at.clone(), err))?;

            (run().0)(call_at, args, ctx)
        }

        struct Runner(Box<dyn Fn(CallSite, Args, &mut Context) -> ExecResult<Option<RuntimeValue>>>);

        impl Runner {
            fn new(inner: impl Fn(CallSite, Args, &mut Context) -> ExecResult<Option<RuntimeValue>> + 'static) -> Self {
                Self(Box::new(inner))
            }
        }

        pub fn build_fn() -> InternalFunction {
            InternalFunction {
                name: $name,
                signature: _signature(),
                run: _run,
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use numseq_runtime::{
        context::{Context, ContextCreationParams, ScopeContent},
        errors::{ArityBounds, ExecErrorContent},
        functions::ScopeFn,
        values::RuntimeValue,
    };

    use super::InternalFunction;

    mod sum {
        crate::define_internal_fn!(
            "sum",

            (
                values: RestArg<NumberType> = RestArg::new("values")
            )

            -> Some(NumberType::value_type())
        );

        fn run() -> Runner {
            Runner::new(|_, Args { values }, _| {
                Ok(Some(NumberType::encode(values.into_iter().sum())))
            })
        }
    }

    mod largest {
        crate::define_internal_fn!(
            "largest",

            (
                ints: RestArg<IntType> = RestArg::new("ints")
            )

            -> None
        );

        fn run() -> Runner {
            Runner::new(|_, Args { ints }, _| Ok(ints.into_iter().max().map(RuntimeValue::Int)))
        }
    }

    fn context() -> Context {
        let mut content = ScopeContent::default();

        for func in [sum::build_fn(), largest::build_fn()] {
            let InternalFunction {
                name,
                signature,
                run,
            } = func;

            content.fns.insert(
                name.to_owned(),
                ScopeFn {
                    signature,
                    body: run,
                },
            );
        }

        Context::new(ContextCreationParams::default(), content)
    }

    #[test]
    fn signature_is_generated() {
        let sum = sum::build_fn();

        assert_eq!(sum.name, "sum");
        assert_eq!(sum.signature.args.len(), 1);
        assert!(sum.signature.args[0].is_rest);
        assert!(!sum.signature.args[0].is_optional);
        assert_eq!(
            sum.signature.arity(),
            ArityBounds {
                min: 0,
                max: None
            }
        );
    }

    #[test]
    fn rest_arguments_are_collected() {
        let mut ctx = context();

        assert_eq!(ctx.call_fn("sum", vec![]).unwrap(), Some(RuntimeValue::Int(0)));

        assert_eq!(
            ctx.call_fn(
                "sum",
                vec![
                    RuntimeValue::Int(1),
                    RuntimeValue::String("2".to_owned()),
                    RuntimeValue::Float(0.5)
                ]
            )
            .unwrap(),
            Some(RuntimeValue::Float(3.5))
        );

        assert_eq!(
            ctx.call_fn("largest", vec![RuntimeValue::Int(4), RuntimeValue::Int(9)])
                .unwrap(),
            Some(RuntimeValue::Int(9))
        );

        assert_eq!(ctx.call_fn("largest", vec![]).unwrap(), None);
    }

    #[test]
    fn argument_types_are_checked() {
        let mut ctx = context();

        let err = ctx
            .call_fn(
                "largest",
                vec![RuntimeValue::Int(1), RuntimeValue::Float(1.5)],
            )
            .unwrap_err();

        assert!(matches!(err.content, ExecErrorContent::String(ref msg) if msg.starts_with("argument 'ints'")));
    }
}
