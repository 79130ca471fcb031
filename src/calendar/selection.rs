use super::day::CalendarDay;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    #[default]
    Single,
    Range,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Single => Mode::Range,
            Mode::Range => Mode::Single,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => f.write_str("single"),
            Mode::Range => f.write_str("range"),
        }
    }
}

/// An inclusive range of days that may be only partially chosen.
///
/// If `to` is set then `from` is set as well, and `from <= to`.  The
/// constructors and [`DateRange::clicked()`] are the only ways to build a
/// `DateRange`, and all of them maintain this.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRange {
    from: Option<CalendarDay>,
    to: Option<CalendarDay>,
}

impl DateRange {
    pub const EMPTY: DateRange = DateRange {
        from: None,
        to: None,
    };

    /// A range whose start has been chosen but whose end has not
    pub fn starting(from: CalendarDay) -> DateRange {
        DateRange {
            from: Some(from),
            to: None,
        }
    }

    /// A complete range spanning `a` and `b`, in whichever order they fall
    pub fn between(a: CalendarDay, b: CalendarDay) -> DateRange {
        DateRange {
            from: Some(a.min(b)),
            to: Some(a.max(b)),
        }
    }

    pub fn from(&self) -> Option<CalendarDay> {
        self.from
    }

    pub fn to(&self) -> Option<CalendarDay> {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.to.is_some()
    }

    /// Tests whether `day` lies within a complete range, endpoints included
    pub fn contains(&self, day: CalendarDay) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            _ => false,
        }
    }

    /// Returns the range that results from the user clicking `day`.
    ///
    /// An empty or complete range restarts at `day`.  A half-chosen range is
    /// completed, with whichever of the two days is earlier becoming the
    /// start.
    pub fn clicked(self, day: CalendarDay) -> DateRange {
        match (self.from, self.to) {
            (None, _) | (Some(_), Some(_)) => DateRange::starting(day),
            (Some(from), None) if day < from => DateRange {
                from: Some(day),
                to: Some(from),
            },
            (Some(from), None) => DateRange {
                from: Some(from),
                to: Some(day),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Selection {
    Single(Option<CalendarDay>),
    Range(DateRange),
}

impl Selection {
    /// The selection with nothing chosen for the given mode
    pub fn empty(mode: Mode) -> Selection {
        match mode {
            Mode::Single => Selection::Single(None),
            Mode::Range => Selection::Range(DateRange::EMPTY),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Selection::Single(_) => Mode::Single,
            Selection::Range(_) => Mode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(day) => day.is_none(),
            Selection::Range(range) => range.from().is_none(),
        }
    }

    /// The chosen day, if this is a single-day selection
    pub fn single(&self) -> Option<CalendarDay> {
        match self {
            Selection::Single(day) => *day,
            Selection::Range(_) => None,
        }
    }

    /// The chosen range, or an empty range if this is a single-day selection
    pub fn range(&self) -> DateRange {
        match self {
            Selection::Single(_) => DateRange::EMPTY,
            Selection::Range(range) => *range,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(Some(day)) => write!(f, "{day}"),
            Selection::Single(None) => Ok(()),
            Selection::Range(range) => {
                if let Some(from) = range.from() {
                    write!(f, "{from}..")?;
                }
                if let Some(to) = range.to() {
                    write!(f, "{to}")?;
                }
                Ok(())
            }
        }
    }
}

/// Returns the selection that results from the user clicking `day` while in
/// `mode`.
///
/// In single mode the clicked day simply becomes the selection.  In range
/// mode the current range is advanced by [`DateRange::clicked()`].  A
/// `current` selection of the other mode's shape counts as empty.
pub fn select(mode: Mode, current: &Selection, day: CalendarDay) -> Selection {
    match mode {
        Mode::Single => Selection::Single(Some(day)),
        Mode::Range => Selection::Range(current.range().clicked(day)),
    }
}
