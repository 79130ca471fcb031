//! A month-grid date picker for terminal user interfaces.
//!
//! The [`calendar`] module contains a functional core of four operations:
//! [`build_grid`][calendar::build_grid], [`next_anchor`][calendar::next_anchor],
//! [`select`][calendar::select], and [`classify`][calendar::classify].  A host
//! keeps its state in a [`PickerState`][calendar::PickerState], which passes
//! that state through the core on every event, and draws it with
//! [`MonthView`][calendar::MonthView], a ratatui widget.
pub mod calendar;
pub mod theme;
