#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

//!
//! Pretty-printing for numseq's values, types and function signatures
//!

use std::fmt::{self, Display};

use colored::{Color, ColoredString, Colorize};

/// Trait enabling pretty-printing for custom types
pub trait PrettyPrintable {
    /// Generate pretty-printing data for later processing
    fn generate_pretty_data(&self) -> PrettyPrintablePiece;

    /// Obtain a [`Display`] type from this value
    fn display(&self, opts: PrettyPrintOptions) -> PrettyPrintableDisplay<'_, Self>
    where
        Self: Sized,
    {
        PrettyPrintableDisplay {
            source: self,
            opts,
            no_colors: false,
        }
    }

    /// Display on a single line
    fn display_inline(&self) -> PrettyPrintableDisplay<'_, Self>
    where
        Self: Sized,
    {
        self.display(PrettyPrintOptions::inline())
    }
}

/// Pretty-printable with options
pub struct PrettyPrintableDisplay<'p, P: PrettyPrintable> {
    source: &'p P,
    opts: PrettyPrintOptions,
    no_colors: bool,
}

impl<P: PrettyPrintable> PrettyPrintableDisplay<'_, P> {
    pub fn no_colors(mut self) -> Self {
        self.no_colors = true;
        self
    }
}

impl<P: PrettyPrintable> Display for PrettyPrintableDisplay<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.source
            .generate_pretty_data()
            .render(self.opts, |styled| {
                if self.no_colors {
                    write!(f, "{}", styled.inner().input)
                } else {
                    write!(f, "{}", styled.inner())
                }
            })
    }
}

/// Colored string
#[derive(Debug, Clone)]
pub struct Styled(ColoredString);

impl Styled {
    pub fn inner(&self) -> &ColoredString {
        &self.0
    }

    pub fn colored(content: impl AsRef<str>, color: Color) -> Self {
        Self(content.as_ref().color(color))
    }

    pub fn colorless(content: impl AsRef<str>) -> Self {
        Self(ColoredString::from(content.as_ref()))
    }

    fn len_chars(&self) -> usize {
        self.0.input.chars().count()
    }
}

impl From<ColoredString> for Styled {
    fn from(value: ColoredString) -> Self {
        Self(value)
    }
}

/// Pretty-printable piece
#[derive(Debug, Clone)]
pub enum PrettyPrintablePiece {
    /// A simple string with a single color
    Atomic(Styled),

    /// A list with a beginning and end pieces, and a value separator
    ///
    /// Will be printed differently depending on the configuration
    List {
        begin: Styled,
        items: Vec<PrettyPrintablePiece>,
        sep: Styled,
        end: Styled,
    },

    /// A chain of pretty-printable pieces
    Join(Vec<PrettyPrintablePiece>),
}

impl PrettyPrintablePiece {
    /// Create a colored atom
    pub fn colored_atomic(content: impl AsRef<str>, color: Color) -> Self {
        Self::Atomic(Styled::colored(content, color))
    }

    /// Create an atom without any color
    pub fn colorless_atomic(content: impl AsRef<str>) -> Self {
        Self::Atomic(Styled::colorless(content))
    }
}

/// Options for pretty-printing
#[derive(Debug, Clone, Copy)]
pub struct PrettyPrintOptions {
    /// Display in a pretty manner.
    ///
    /// Will add spacing and newlines to improve readability.
    pub pretty: bool,

    /// How many spaces to represent a tab with
    pub tab_size: usize,

    /// Ideal maximum line size
    ///
    /// Some lines may be larger than this limit, consider it a "best-effort"
    pub max_line_size: usize,

    /// Only render the first items of lists longer than this
    pub max_list_items: Option<usize>,
}

impl PrettyPrintOptions {
    /// Render in a single line, without most readibility spaces
    pub fn inline() -> Self {
        Self {
            pretty: false,
            tab_size: 0,
            max_line_size: 0,
            max_list_items: Some(100),
        }
    }

    /// Render on multiple lines and add spaces if it can improve readability
    pub fn multiline() -> Self {
        Self {
            pretty: true,
            tab_size: 4,
            max_line_size: 80,
            max_list_items: None,
        }
    }
}

impl PrettyPrintablePiece {
    /// Compute how much characters will be displayed when rendering this piece on a single line
    fn display_chars_count(&self) -> usize {
        match self {
            PrettyPrintablePiece::Atomic(atom) => atom.len_chars(),

            PrettyPrintablePiece::List {
                begin,
                items,
                sep,
                end,
            } => {
                let separators = if items.is_empty() {
                    0
                } else {
                    (sep.len_chars() + 1/* space */) * (items.len() - 1)
                };

                begin.len_chars()
                    + items.iter().map(Self::display_chars_count).sum::<usize>()
                    + separators
                    + end.len_chars()
            }

            PrettyPrintablePiece::Join(pieces) => {
                pieces.iter().map(Self::display_chars_count).sum()
            }
        }
    }

    /// Render this piece using a writing function
    pub fn render(
        &self,
        opts: PrettyPrintOptions,
        mut w: impl FnMut(&Styled) -> fmt::Result,
    ) -> fmt::Result {
        self.render_inner(opts, &mut w, 0)
    }

    fn render_inner(
        &self,
        opts: PrettyPrintOptions,
        w: &mut impl FnMut(&Styled) -> fmt::Result,
        indent: usize,
    ) -> fmt::Result {
        let PrettyPrintOptions {
            pretty,
            tab_size,
            max_line_size,
            max_list_items,
        } = opts;

        match self {
            PrettyPrintablePiece::Atomic(atom) => w(atom),

            PrettyPrintablePiece::List {
                begin,
                items,
                sep,
                end,
            } => {
                let (shown, cut_off) = match max_list_items {
                    Some(max) if items.len() > max => (&items[..max], Some(items.len() - max)),
                    _ => (items.as_slice(), None),
                };

                w(begin)?;

                if !pretty || self.display_chars_count() + indent <= max_line_size {
                    let space = Styled::colorless(" ");

                    for (i, item) in shown.iter().enumerate() {
                        item.render_inner(opts, w, indent)?;

                        if i + 1 < shown.len() {
                            w(sep)?;
                            w(&space)?;
                        }
                    }
                } else {
                    let spacing = Styled::colorless(format!("\n{}", " ".repeat(indent + tab_size)));

                    for (i, item) in shown.iter().enumerate() {
                        w(&spacing)?;

                        item.render_inner(opts, w, indent + tab_size)?;

                        if i + 1 < shown.len() {
                            w(sep)?;
                        }
                    }

                    w(&Styled::colorless(format!("\n{}", " ".repeat(indent))))?;
                }

                if let Some(remaining) = cut_off {
                    w(&Styled(
                        format!(
                            " <and {remaining} other item{}>",
                            if remaining > 1 { "s" } else { "" }
                        )
                        .bright_black(),
                    ))?;
                }

                w(end)
            }

            PrettyPrintablePiece::Join(pieces) => {
                for piece in pieces {
                    piece.render_inner(opts, w, indent)?;
                }

                Ok(())
            }
        }
    }
}

impl PrettyPrintable for PrettyPrintablePiece {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        self.clone()
    }
}
