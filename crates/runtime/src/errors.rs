use std::fmt::{self, Display};

pub type ExecResult<T> = Result<T, ExecError>;

/// Error raised by a native function call
#[derive(Debug, Clone, PartialEq)]
pub struct ExecError {
    pub at: CallSite,
    pub content: ExecErrorContent,
    pub note: Option<String>,
}

impl ExecError {
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.content, self.at)?;

        if let Some(note) = &self.note {
            write!(f, "\n  note: {note}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ExecError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecErrorContent {
    /// A function was called with an unsupported number of arguments
    Arity { expected: ArityBounds, got: usize },

    /// A stepped sequence was requested with a step of zero
    ZeroStep,

    /// No global function has the provided name
    UnknownFunction(String),

    String(String),
}

impl Display for ExecErrorContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { expected, got } => {
                if *got < expected.min {
                    write!(f, "too few arguments")
                } else {
                    write!(f, "too many arguments")
                }
            }
            Self::ZeroStep => write!(f, "step argument is zero"),
            Self::UnknownFunction(name) => write!(f, "unknown function: {name}"),
            Self::String(string) => write!(f, "{string}"),
        }
    }
}

impl From<String> for ExecErrorContent {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Accepted number of positional arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl ArityBounds {
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl Display for ArityBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max}"),
            Some(max) => write!(f, "between {} and {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Location an error was raised from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSite {
    /// Call of a named global function
    FnCall { name: String },

    /// Runtime internals
    Internal(&'static str),
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FnCall { name } => write!(f, "in call to {name}()"),
            Self::Internal(what) => write!(f, "in {what}"),
        }
    }
}
