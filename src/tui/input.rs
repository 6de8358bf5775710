//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages. The keyboard
//! stands in for the pointer: `Left`/`Right` move the hover preview, and
//! `Enter`, `Space`, or a digit click a star.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(AppMsg::FocusNext),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(AppMsg::FocusPrevious),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::HoverNext),
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::HoverPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::ActivateHovered),
        KeyCode::Char(digit @ '1'..='5') => star_for_digit(digit).map(AppMsg::ActivateStar),
        KeyCode::Char('s') => Some(AppMsg::SubmitFocused),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn star_for_digit(digit: char) -> Option<u8> {
    digit
        .to_digit(10)
        .and_then(|value| u8::try_from(value).ok())
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), Some(AppMsg::Quit))]
    #[case::escape(KeyCode::Esc, Some(AppMsg::Quit))]
    #[case::tab(KeyCode::Tab, Some(AppMsg::FocusNext))]
    #[case::back_tab(KeyCode::BackTab, Some(AppMsg::FocusPrevious))]
    #[case::right(KeyCode::Right, Some(AppMsg::HoverNext))]
    #[case::left(KeyCode::Left, Some(AppMsg::HoverPrevious))]
    #[case::enter(KeyCode::Enter, Some(AppMsg::ActivateHovered))]
    #[case::space(KeyCode::Char(' '), Some(AppMsg::ActivateHovered))]
    #[case::digit(KeyCode::Char('4'), Some(AppMsg::ActivateStar(4)))]
    #[case::submit(KeyCode::Char('s'), Some(AppMsg::SubmitFocused))]
    #[case::help(KeyCode::Char('?'), Some(AppMsg::ToggleHelp))]
    #[case::six_is_not_a_star(KeyCode::Char('6'), None)]
    #[case::unmapped(KeyCode::F(5), None)]
    fn maps_keys(#[case] code: KeyCode, #[case] expected: Option<AppMsg>) {
        assert_eq!(map_key_to_message(&key(code)), expected);
    }
}
