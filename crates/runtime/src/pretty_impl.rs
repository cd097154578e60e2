//!
//! This module implements pretty-printing for several types.
//!

use colored::Color;
use numseq_prettify::{PrettyPrintable, PrettyPrintablePiece, Styled};

use crate::{
    functions::{FnArg, FnSignature},
    values::{RuntimeValue, ValueType},
};

impl PrettyPrintable for RuntimeValue {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        match self {
            RuntimeValue::Undefined => {
                PrettyPrintablePiece::colored_atomic("undefined", Color::BrightBlack)
            }

            RuntimeValue::Null => PrettyPrintablePiece::colored_atomic("null", Color::BrightYellow),

            RuntimeValue::Bool(bool) => {
                PrettyPrintablePiece::colored_atomic(bool.to_string(), Color::BrightYellow)
            }

            RuntimeValue::Int(int) => {
                PrettyPrintablePiece::colored_atomic(int.to_string(), Color::BrightYellow)
            }

            RuntimeValue::Float(float) => {
                PrettyPrintablePiece::colored_atomic(pretty_float(*float), Color::BrightYellow)
            }

            RuntimeValue::String(string) => PrettyPrintablePiece::colored_atomic(
                format!(
                    "\"{}\"",
                    string
                        .replace('\\', "\\\\")
                        .replace('"', "\\\"")
                        .replace('\n', "\\n")
                ),
                Color::Green,
            ),

            RuntimeValue::List(list) => PrettyPrintablePiece::List {
                begin: Styled::colored("[", Color::Blue),
                items: list.iter().map(RuntimeValue::generate_pretty_data).collect(),
                sep: Styled::colored(",", Color::Blue),
                end: Styled::colored("]", Color::Blue),
            },
        }
    }
}

fn pretty_float(float: f64) -> String {
    if float.is_nan() {
        "NaN".to_owned()
    } else if float == f64::INFINITY {
        "Infinity".to_owned()
    } else if float == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else {
        float.to_string()
    }
}

impl PrettyPrintable for ValueType {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        match self {
            Self::Any => PrettyPrintablePiece::colored_atomic("any", Color::Magenta),
            Self::Undefined => PrettyPrintablePiece::colored_atomic("undefined", Color::Magenta),
            Self::Null => PrettyPrintablePiece::colored_atomic("null", Color::Magenta),
            Self::Bool => PrettyPrintablePiece::colored_atomic("bool", Color::Magenta),
            Self::Int => PrettyPrintablePiece::colored_atomic("int", Color::Magenta),
            Self::Float => PrettyPrintablePiece::colored_atomic("float", Color::Magenta),
            Self::String => PrettyPrintablePiece::colored_atomic("string", Color::Magenta),
            Self::UntypedList => PrettyPrintablePiece::colored_atomic("list", Color::Magenta),

            Self::TypedList(inner) => PrettyPrintablePiece::Join(vec![
                PrettyPrintablePiece::colored_atomic("list[", Color::Magenta),
                inner.generate_pretty_data(),
                PrettyPrintablePiece::colored_atomic("]", Color::Magenta),
            ]),

            Self::Union(types) => {
                let mut pieces = Vec::with_capacity(types.len() * 2);

                for (i, typ) in types.iter().enumerate() {
                    if i > 0 {
                        pieces.push(PrettyPrintablePiece::colored_atomic(" | ", Color::Magenta));
                    }

                    pieces.push(typ.generate_pretty_data());
                }

                PrettyPrintablePiece::Join(pieces)
            }
        }
    }
}

impl PrettyPrintable for FnArg {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        let FnArg {
            name,
            is_optional,
            is_rest,
            typ,
        } = self;

        let mut pieces = vec![];

        if *is_rest {
            pieces.push(PrettyPrintablePiece::colored_atomic("...", Color::BrightYellow));
        }

        pieces.push(PrettyPrintablePiece::colored_atomic(*name, Color::Red));

        if *is_optional {
            pieces.push(PrettyPrintablePiece::colored_atomic("?", Color::BrightBlack));
        }

        if let Some(typ) = typ {
            pieces.push(PrettyPrintablePiece::colored_atomic(": ", Color::BrightBlack));
            pieces.push(typ.generate_pretty_data());
        }

        PrettyPrintablePiece::Join(pieces)
    }
}

impl PrettyPrintable for FnSignature {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        let FnSignature { args, ret_type } = self;

        let mut pieces = vec![PrettyPrintablePiece::List {
            begin: Styled::colored("(", Color::Blue),
            items: args.iter().map(FnArg::generate_pretty_data).collect(),
            sep: Styled::colored(",", Color::Blue),
            end: Styled::colored(")", Color::Blue),
        }];

        if let Some(ret_type) = ret_type {
            pieces.push(PrettyPrintablePiece::colored_atomic(" -> ", Color::Blue));
            pieces.push(ret_type.generate_pretty_data());
        }

        PrettyPrintablePiece::Join(pieces)
    }
}
