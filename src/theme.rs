use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const ARROW_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub const STATUS_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub mod cell {
    use super::*;

    pub const OUTSIDE_MONTH_STYLE: Style = Style::new().fg(Color::DarkGray);

    pub const IN_RANGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

    pub const SELECTED_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    pub const TODAY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

    pub const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
}

pub mod jumpto {
    use super::*;

    pub const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
