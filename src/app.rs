use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use datepick::calendar::{Labels, MonthView, PickerState, Selection};
use datepick::theme::{BASE_STYLE, STATUS_STYLE};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

/// Blank lines between the calendar and the status line
const STATUS_GAP: u16 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<L> {
    picker: PickerState,
    labels: L,
    state: AppState,
}

impl<L: Labels + Copy> App<L> {
    pub(crate) fn new(picker: PickerState, labels: L) -> App<L> {
        App {
            picker,
            labels,
            state: AppState::Calendar,
        }
    }

    /// Run the picker until the user quits, returning the final selection
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Selection>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(*self.picker.selection())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.picker.move_cursor(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.picker.move_cursor(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.picker.move_cursor(-7).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.picker.move_cursor(7).is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.picker.turn_page(-1).is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.picker.turn_page(1).is_ok(),
                KeyCode::Char('P') => self.picker.turn_page(-12).is_ok(),
                KeyCode::Char('N') => self.picker.turn_page(12).is_ok(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.select();
                    true
                }
                KeyCode::Char('m') => {
                    let mode = self.picker.mode().toggled();
                    self.picker.set_mode(mode);
                    tracing::info!(%mode, "Switched selection mode");
                    true
                }
                KeyCode::Char('c') => {
                    self.picker.clear_selection();
                    tracing::info!("Cleared selection");
                    true
                }
                KeyCode::Char('t') | KeyCode::Home => {
                    self.picker.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                            Some(d) => state.handle_input(JumpToInput::Digit(d)),
                            None => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(day) => {
                            self.state = AppState::Calendar;
                            self.picker.jump_to(day).is_ok()
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn select(&mut self) {
        self.picker
            .click(|selection| tracing::info!(%selection, "Selection changed"));
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn status_line(&self) -> Line<'static> {
        let selection = self.picker.selection();
        let text = if selection.is_empty() {
            format!("{} mode: nothing selected", self.picker.mode())
        } else {
            format!("{} mode: {selection}", self.picker.mode())
        };
        Line::styled(text, STATUS_STYLE).centered()
    }
}

impl<L: Labels + Copy> Widget for &mut App<L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [cal_area, status_area] = Layout::vertical([MonthView::<L>::HEIGHT, 1])
            .spacing(STATUS_GAP)
            .flex(Flex::Center)
            .areas(area);
        MonthView::new(self.labels).render(cal_area, buf, &mut self.picker);
        self.status_line().render(status_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
