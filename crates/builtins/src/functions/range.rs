use numseq_runtime::errors::ArityBounds;
use tracing::trace;

crate::define_internal_fn!(
    //
    // Generate a list of numbers
    //
    // Accepts 1 to 3 arguments, checked by `dispatch_range` as the rest
    // argument hides them from the signature:
    //   range(count), range(start, stop), range(start, stop, step)
    //

    "range",

    (
        args: RestArg<AnyType> = RestArg::new("args")
    )

    -> Some(DetachedListType::<NumberType>::value_type())
);

fn run() -> Runner {
    Runner::new(|at, Args { args }, ctx| {
        let progression = dispatch_range(&args).map_err(|err| {
            let note = match &err {
                ExecErrorContent::Arity { expected, got } => Some(format!(
                    "range() takes {expected} arguments, {got} were supplied"
                )),
                _ => None,
            };

            let err = ctx.error(at.clone(), err);

            match note {
                Some(note) => err.with_note(note),
                None => err,
            }
        })?;

        let max_len = ctx.runtime_conf().max_list_len;

        let values = progression.materialize(max_len).map_err(|max| {
            ctx.error(
                at.clone(),
                format!("range would produce more than {max} items"),
            )
            .with_note("the maximum list length is set in the runtime configuration")
        })?;

        Ok(Some(DetachedListType::<NumberType>::encode(values)))
    })
}

/// Number of arguments `range` accepts
pub const RANGE_ARITY: ArityBounds = ArityBounds {
    min: 1,
    max: Some(3),
};

/// Upper bound on the initial capacity of materialized lists
const PREALLOCATION_LIMIT: usize = 1 << 16;

/// Select the `range` form to use from the number of supplied arguments
///
/// Each argument is coerced to a number exactly once.
pub fn dispatch_range(args: &[RuntimeValue]) -> Result<Progression, ExecErrorContent> {
    match args {
        [count] => {
            let count = count.to_number();
            trace!(count, "range: counting form");
            Ok(range_count(count))
        }

        [start, stop] => {
            let (start, stop) = (start.to_number(), stop.to_number());
            trace!(start, stop, "range: bounded form");
            Ok(range_bounds(start, stop))
        }

        [start, stop, step] => {
            let (start, stop, step) = (start.to_number(), stop.to_number(), step.to_number());
            trace!(start, stop, step, "range: stepped form");
            range_stepped(start, stop, step)
        }

        _ => Err(ExecErrorContent::Arity {
            expected: RANGE_ARITY,
            got: args.len(),
        }),
    }
}

/// `[0, 1, 2, ...]`, up to `count` (exclusive)
///
/// Negative counts produce an empty sequence.
pub fn range_count(count: f64) -> Progression {
    if count < 0.0 {
        return Progression::empty();
    }

    Progression::new(0.0, count, 1.0)
}

/// `[start, start + 1, ...]`, up to `stop` (exclusive)
///
/// The step is always `+1`, a `stop` lower than `start` produces an empty sequence.
pub fn range_bounds(start: f64, stop: f64) -> Progression {
    if stop < start {
        return Progression::empty();
    }

    Progression::new(start, stop, 1.0)
}

/// `[start, start + step, ...]`, up to `stop` (exclusive) in the direction of `step`
///
/// Fails if `step` is zero. A `step` going away from `stop` produces an empty sequence.
pub fn range_stepped(start: f64, stop: f64, step: f64) -> Result<Progression, ExecErrorContent> {
    if step == 0.0 {
        return Err(ExecErrorContent::ZeroStep);
    }

    if step.is_nan() || (step > 0.0 && start >= stop) || (step < 0.0 && start <= stop) {
        return Ok(Progression::empty());
    }

    Ok(Progression::new(start, stop, step))
}

/// Arithmetic progression from `start` towards `stop` (exclusive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    start: f64,
    stop: f64,
    step: f64,
}

impl Progression {
    fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    // NaN bounds never satisfy the iteration condition
    fn empty() -> Self {
        Self::new(f64::NAN, f64::NAN, 1.0)
    }

    pub fn iter(&self) -> ProgressionIter {
        ProgressionIter {
            next: self.start,
            stop: self.stop,
            step: self.step,
        }
    }

    /// Number of items computed from the bounds and step
    ///
    /// Matches the iteration's length for integral bounds and steps that stay
    /// exactly representable (below 2^53 in magnitude). With fractional ones, or
    /// once the running value stops advancing, the two may differ and the
    /// iteration remains authoritative.
    pub fn analytic_len(&self) -> usize {
        let Self { start, stop, step } = *self;

        let count = if step > 0.0 {
            ((stop - start - 1.0) / step).floor() + 1.0
        } else {
            ((start - stop - 1.0) / -step).floor() + 1.0
        };

        // Saturating cast: NaN and negative counts become 0
        count as usize
    }

    /// Collect all items into a list
    ///
    /// Fails with the provided maximum if the progression holds more items than that.
    pub fn materialize(&self, max_len: Option<usize>) -> Result<Vec<f64>, usize> {
        let mut values = Vec::with_capacity(self.analytic_len().min(PREALLOCATION_LIMIT));

        for value in self.iter() {
            if let Some(max) = max_len
                && values.len() == max
            {
                return Err(max);
            }

            values.push(value);
        }

        Ok(values)
    }
}

/// Iterator over the items of a [`Progression`]
#[derive(Debug, Clone)]
pub struct ProgressionIter {
    next: f64,
    stop: f64,
    step: f64,
}

impl Iterator for ProgressionIter {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let in_bounds = if self.step > 0.0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };

        if !in_bounds {
            return None;
        }

        let current = self.next;
        self.next += self.step;

        // Past 2^53 the step can be absorbed by rounding
        if self.next == current {
            self.next = self.stop;
        }

        Some(current)
    }
}
