use numseq_builtins::type_helpers::{DetachedListType, IntType, NumberType};
use numseq_runtime::{conf::RuntimeConf, errors::ExecErrorContent, values::RuntimeValue};

use crate::{
    run_expect_error, run_expect_error_with_conf, run_expect_specific_value, run_expect_success,
};

type IntList = DetachedListType<IntType>;
type NumberList = DetachedListType<NumberType>;

fn int(value: i64) -> RuntimeValue {
    RuntimeValue::Int(value)
}

fn float(value: f64) -> RuntimeValue {
    RuntimeValue::Float(value)
}

fn string(value: &str) -> RuntimeValue {
    RuntimeValue::String(value.to_owned())
}

fn empty() -> Vec<i64> {
    vec![]
}

#[test]
fn range_arity() {
    assert!(matches!(
        run_expect_error("range", vec![]),
        ExecErrorContent::Arity { got: 0, .. }
    ));

    assert!(matches!(
        run_expect_error("range", vec![int(1), int(2), int(3), int(4)]),
        ExecErrorContent::Arity { got: 4, .. }
    ));

    assert!(matches!(
        run_expect_error("range", vec![RuntimeValue::Null; 7]),
        ExecErrorContent::Arity { got: 7, .. }
    ));
}

#[test]
fn range_count() {
    run_expect_specific_value::<IntList>("range", vec![int(5)], vec![0, 1, 2, 3, 4]);
    run_expect_specific_value::<IntList>("range", vec![int(0)], empty());
    run_expect_specific_value::<IntList>("range", vec![int(-3)], empty());
    run_expect_specific_value::<IntList>("range", vec![float(2.5)], vec![0, 1, 2]);
}

#[test]
fn range_bounds() {
    run_expect_specific_value::<IntList>("range", vec![int(3), int(3)], empty());
    run_expect_specific_value::<IntList>("range", vec![int(3), int(7)], vec![3, 4, 5, 6]);
    run_expect_specific_value::<IntList>("range", vec![int(7), int(3)], empty());
    run_expect_specific_value::<NumberList>(
        "range",
        vec![float(0.5), int(3)],
        vec![0.5, 1.5, 2.5],
    );
}

#[test]
fn range_stepped() {
    run_expect_specific_value::<IntList>(
        "range",
        vec![int(0), int(10), int(2)],
        vec![0, 2, 4, 6, 8],
    );

    run_expect_specific_value::<IntList>(
        "range",
        vec![int(10), int(0), int(-2)],
        vec![10, 8, 6, 4, 2],
    );

    run_expect_specific_value::<IntList>("range", vec![int(5), int(5), int(1)], empty());
    run_expect_specific_value::<IntList>("range", vec![int(5), int(5), int(-1)], empty());

    run_expect_specific_value::<NumberList>(
        "range",
        vec![int(0), int(1), float(0.25)],
        vec![0.0, 0.25, 0.5, 0.75],
    );

    assert_eq!(
        run_expect_error("range", vec![int(1), int(2), int(0)]),
        ExecErrorContent::ZeroStep
    );
}

#[test]
fn range_coerces_arguments() {
    run_expect_specific_value::<IntList>("range", vec![string("5")], vec![0, 1, 2, 3, 4]);
    run_expect_specific_value::<IntList>(
        "range",
        vec![RuntimeValue::Bool(true), string("0x4")],
        vec![1, 2, 3],
    );
    run_expect_specific_value::<IntList>(
        "range",
        vec![RuntimeValue::Null, RuntimeValue::List(vec![int(2)])],
        vec![0, 1],
    );

    // Values without a numeric meaning silently produce empty lists
    run_expect_specific_value::<IntList>("range", vec![string("five")], empty());
    run_expect_specific_value::<IntList>("range", vec![RuntimeValue::Undefined], empty());
    run_expect_specific_value::<IntList>(
        "range",
        vec![int(0), int(10), RuntimeValue::Undefined],
        empty(),
    );
}

#[test]
fn range_results_use_integers_when_possible() {
    assert_eq!(
        run_expect_success("range", vec![float(1.5), int(4)]),
        Some(RuntimeValue::List(vec![float(1.5), float(2.5), float(3.5)]))
    );

    assert_eq!(
        run_expect_success("range", vec![float(1.0), int(3)]),
        Some(RuntimeValue::List(vec![int(1), int(2)]))
    );
}

#[test]
fn range_max_list_len() {
    let conf = || RuntimeConf {
        max_list_len: Some(100),
    };

    assert!(matches!(
        run_expect_error_with_conf("range", vec![int(101)], conf()),
        ExecErrorContent::String(_)
    ));

    assert!(matches!(
        run_expect_error_with_conf("range", vec![string("Infinity")], conf()),
        ExecErrorContent::String(_)
    ));

    // Argument errors are reported before the length is checked
    assert_eq!(
        run_expect_error_with_conf("range", vec![int(0), int(1000), int(0)], conf()),
        ExecErrorContent::ZeroStep
    );
}
