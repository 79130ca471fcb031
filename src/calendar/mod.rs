mod classify;
mod day;
mod grid;
mod labels;
mod nav;
mod selection;
mod state;
mod widget;
pub use self::classify::{classify, CellFlags};
pub use self::day::{AnchorMonth, CalendarDay, DateError};
pub use self::grid::{build_grid, DAYS_IN_WEEK, GRID_DAYS, GRID_WEEKS};
pub use self::labels::{English, Labels};
pub use self::nav::next_anchor;
pub use self::selection::{select, DateRange, Mode, Selection};
pub use self::state::{OutOfTimeError, PickerState};
pub use self::widget::MonthView;
