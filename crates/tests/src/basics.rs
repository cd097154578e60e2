use numseq_builtins::{RANGE_ARITY, type_helpers::AnyType};
use numseq_prettify::PrettyPrintable;
use numseq_runtime::{conf::RuntimeConf, errors::ExecErrorContent, values::RuntimeValue};

use crate::{create_context, run, run_expect_error, run_expect_specific_value};

#[test]
fn native_lib_registers_range() {
    let ctx = create_context(RuntimeConf::default());

    let names = ctx.list_fns().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(names, ["range"]);

    let range = ctx.get_fn("range").unwrap();
    assert_eq!(range.signature.arity().min, 0);
    assert_eq!(range.signature.arity().max, None);
    assert_eq!(
        range.signature.display_inline().no_colors().to_string(),
        "(...args: any) -> list[int | float]"
    );
}

#[test]
fn unknown_functions() {
    assert_eq!(
        run_expect_error("rnage", vec![RuntimeValue::Int(1)]),
        ExecErrorContent::UnknownFunction("rnage".to_owned())
    );
}

#[test]
fn errors_carry_their_call_site() {
    let (err, _) = run("range", vec![], RuntimeConf::default()).unwrap_err();

    assert_eq!(
        err.content,
        ExecErrorContent::Arity {
            expected: RANGE_ARITY,
            got: 0
        }
    );

    assert_eq!(
        err.to_string(),
        "too few arguments (in call to range())\n  note: range() takes between 1 and 3 arguments, 0 were supplied"
    );
}

#[test]
fn results_are_fresh_lists() {
    let mut ctx = create_context(RuntimeConf::default());

    let first = ctx.call_fn("range", vec![RuntimeValue::Int(3)]).unwrap();
    let second = ctx.call_fn("range", vec![RuntimeValue::Int(3)]).unwrap();

    assert_eq!(first, second);

    run_expect_specific_value::<AnyType>(
        "range",
        vec![RuntimeValue::Int(2)],
        RuntimeValue::List(vec![RuntimeValue::Int(0), RuntimeValue::Int(1)]),
    );
}

#[test]
fn contexts_are_independent_across_threads() {
    let handles = (0..4_i64)
        .map(|i| {
            std::thread::spawn(move || {
                let mut ctx = create_context(RuntimeConf::default());

                ctx.call_fn("range", vec![RuntimeValue::Int(i * 10)])
                    .unwrap()
                    .map(|value| match value {
                        RuntimeValue::List(items) => items.len(),
                        _ => unreachable!(),
                    })
            })
        })
        .collect::<Vec<_>>();

    let lengths = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(lengths, [Some(0), Some(10), Some(20), Some(30)]);
}
