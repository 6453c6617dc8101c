// ============================================
// src/input.rs
// キー入力 → 状態操作
// ============================================

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::{AppState, QuizError, QuizPhase, Tab};

/// キー処理のあとでループを続けるか
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 1回のキー入力を処理する
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Flow {
    // どのタブでも共通
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
        KeyCode::Tab => {
            state.next_tab();
            return Flow::Continue;
        }
        KeyCode::BackTab => {
            state.previous_tab();
            return Flow::Continue;
        }
        KeyCode::F(n @ 1..=3) => {
            state.select_tab(Tab::ALL[usize::from(n) - 1]);
            return Flow::Continue;
        }
        _ => {}
    }

    let result = match state.active_tab {
        Tab::Vocabulary => {
            if matches!(
                key.code,
                KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Enter
            ) {
                state.advance_vocab();
            }
            Ok(())
        }
        Tab::Quiz => handle_quiz_key(state, key.code),
        Tab::Progress => {
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                state.review_vocabulary();
            }
            Ok(())
        }
    };

    if let Err(err) = result {
        debug!(code = ?key.code, %err, "key ignored");
    }
    Flow::Continue
}

fn handle_quiz_key(state: &mut AppState, code: KeyCode) -> Result<(), QuizError> {
    match state.quiz_phase() {
        QuizPhase::NotStarted | QuizPhase::Finished => match code {
            KeyCode::Char('s') | KeyCode::Enter => state.start_quiz(),
            _ => Ok(()),
        },
        phase => match code {
            KeyCode::Char(c @ '1'..='4') => state.select_answer(c as usize - '1' as usize),
            KeyCode::Left | KeyCode::Right => move_selection(state, 1),
            KeyCode::Up | KeyCode::Down => move_selection(state, 2),
            KeyCode::Char('h') => state.toggle_hint(),
            KeyCode::Char('c') => state.check_answer().map(|_| ()),
            KeyCode::Char('n') => state.next_question().map(|_| ()),
            KeyCode::Enter if phase == QuizPhase::QuestionActive => {
                state.check_answer().map(|_| ())
            }
            KeyCode::Enter => state.next_question().map(|_| ()),
            _ => Ok(()),
        },
    }
}

/// 2x2 の選択肢グリッド上で選択を動かす (1 = 左右, 2 = 上下)
fn move_selection(state: &mut AppState, axis: usize) -> Result<(), QuizError> {
    let question = state.current_question().ok_or(QuizError::NotRunning)?;
    let target = match question
        .options
        .iter()
        .position(|o| Some(*o) == state.selected_answer)
    {
        Some(index) => index ^ axis,
        None => 0,
    };
    state.select_answer(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut AppState, code: KeyCode) -> Flow {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        let mut state = AppState::new();
        assert_eq!(press(&mut state, KeyCode::Char('q')), Flow::Quit);
        assert_eq!(press(&mut state, KeyCode::Esc), Flow::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Flow::Quit
        );
    }

    #[test]
    fn tab_navigation() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.active_tab, Tab::Quiz);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.active_tab, Tab::Vocabulary);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.active_tab, Tab::Progress);
    }

    #[test]
    fn next_key_advances_vocabulary() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_vocab_index, 2);
    }

    #[test]
    fn full_quiz_by_keyboard() {
        let mut state = AppState::new();
        state.select_tab(Tab::Quiz);
        press(&mut state, KeyCode::Enter);
        assert!(state.quiz_started);

        // 正解の位置: 2, 2, 2, 3, 3 (1始まり)
        for key in ['2', '2', '2', '3', '3'] {
            press(&mut state, KeyCode::Char(key));
            press(&mut state, KeyCode::Enter); // 答え合わせ
            assert_eq!(state.is_correct, Some(true));
            press(&mut state, KeyCode::Enter); // 次へ
        }
        assert!(!state.quiz_started);
        assert_eq!(state.score, 5);
    }

    #[test]
    fn check_without_selection_is_ignored() {
        let mut state = AppState::new();
        state.select_tab(Tab::Quiz);
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(press(&mut state, KeyCode::Char('c')), Flow::Continue);
        assert_eq!(state.is_correct, None);
        assert_eq!(state.quiz_phase(), QuizPhase::QuestionActive);
    }

    #[test]
    fn number_keys_and_arrows_select_options() {
        let mut state = AppState::new();
        state.select_tab(Tab::Quiz);
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.selected_answer, Some("ぶどう"));
        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected_answer, Some("りんご"));
        press(&mut state, KeyCode::Left);
        assert_eq!(state.selected_answer, Some("バナナ"));
    }

    #[test]
    fn hint_toggles() {
        let mut state = AppState::new();
        state.select_tab(Tab::Quiz);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('h'));
        assert!(state.show_hint);
        press(&mut state, KeyCode::Char('h'));
        assert!(!state.show_hint);
    }

    #[test]
    fn review_returns_to_vocabulary() {
        let mut state = AppState::new();
        state.select_tab(Tab::Progress);
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.active_tab, Tab::Vocabulary);
    }
}
