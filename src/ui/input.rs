//! 键盘事件映射 (Input -> Action)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Effect};
use super::form::PostForm;
use super::state::App;

/// 根据表单状态和按键获取对应的 Action
pub fn get_action(form: &PostForm, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if !form.visible {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::ToggleForm),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('s') if ctrl => Some(Action::Submit),
        KeyCode::Esc => Some(Action::ToggleForm),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Backspace => Some(Action::DeleteChar),
        // 正文为多行输入
        KeyCode::Enter if form.focus.is_multiline() => Some(Action::Input('\n')),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件，返回需要执行的 Effect
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Effect> {
    get_action(&app.form, key).and_then(|action| app.dispatch(action))
}
