// ============================================
// src/app.rs
// アプリ全体の状態 (単語・クイズ・進捗) とその操作
// ============================================

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info};

use crate::questions::{QUIZ_QUESTIONS, QuizQuestion};
use crate::vocabulary::{VOCABULARY_LIST, VocabularyEntry};

// --------------------------------------------------
// タブ
// --------------------------------------------------

/// 画面上部のタブ
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    #[default]
    Vocabulary,
    Quiz,
    Progress,
}

impl Tab {
    /// 表示順
    pub const ALL: [Tab; 3] = [Tab::Vocabulary, Tab::Quiz, Tab::Progress];

    pub fn index(self) -> usize {
        match self {
            Tab::Vocabulary => 0,
            Tab::Quiz => 1,
            Tab::Progress => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// --------------------------------------------------
// クイズの状態
// --------------------------------------------------

/// クイズの進行段階 (`AppState` のフィールドから導出される)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    QuestionActive,
    AnswerChecked,
    Finished,
}

/// 今の段階では実行できない操作
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("a quiz is already running")]
    AlreadyRunning,
    #[error("no quiz is running")]
    NotRunning,
    #[error("the quiz has no questions")]
    NoQuestions,
    #[error("option {0} does not exist")]
    NoSuchOption(usize),
    #[error("no answer selected")]
    NoSelection,
    #[error("the answer has already been checked")]
    AlreadyChecked,
    #[error("the answer has not been checked yet")]
    NotChecked,
}

// --------------------------------------------------
// アプリ全体の状態
// --------------------------------------------------

/// 3つのタブが共有する状態。タブを切り替えても状態はそのまま
#[derive(Debug, Clone)]
pub struct AppState<'a> {
    vocabulary: &'a [VocabularyEntry],
    questions: &'a [QuizQuestion],

    pub active_tab: Tab,
    /// 表示中の単語 (タイマーでも進む)
    pub current_vocab_index: usize,

    pub quiz_started: bool,
    pub current_question_index: usize,
    pub selected_answer: Option<&'a str>,
    /// None = まだ答え合わせしていない
    pub is_correct: Option<bool>,
    pub score: usize,
    pub show_hint: bool,

    /// 今の問題で既に得点したか (同じ問題で2回加点しない)
    question_scored: bool,
    /// 最後の問題まで解き終わったか
    finished: bool,
}

impl Default for AppState<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState<'static> {
    /// 組み込みの単語リストと問題リストで初期化
    pub fn new() -> Self {
        Self::with_catalogs(VOCABULARY_LIST, QUIZ_QUESTIONS)
    }
}

impl<'a> AppState<'a> {
    /// 単語リストは空であってはならない
    pub(crate) fn with_catalogs(
        vocabulary: &'a [VocabularyEntry],
        questions: &'a [QuizQuestion],
    ) -> Self {
        assert!(!vocabulary.is_empty(), "vocabulary catalog must not be empty");
        Self {
            vocabulary,
            questions,
            active_tab: Tab::default(),
            current_vocab_index: 0,
            quiz_started: false,
            current_question_index: 0,
            selected_answer: None,
            is_correct: None,
            score: 0,
            show_hint: false,
            question_scored: false,
            finished: false,
        }
    }

    pub fn vocabulary(&self) -> &'a [VocabularyEntry] {
        self.vocabulary
    }

    pub fn questions(&self) -> &'a [QuizQuestion] {
        self.questions
    }

    // ---- タブ ----

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(from = ?self.active_tab, to = ?tab, "switch tab");
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    // ---- 単語学習 ----

    /// 表示中の単語カード
    pub fn current_vocab(&self) -> &'a VocabularyEntry {
        &self.vocabulary[self.current_vocab_index]
    }

    /// 次の単語へ (最後の次は最初に戻る)
    pub fn advance_vocab(&mut self) {
        self.current_vocab_index = (self.current_vocab_index + 1) % self.vocabulary.len();
        debug!(index = self.current_vocab_index, "advance vocabulary");
    }

    // ---- クイズ ----

    pub fn quiz_phase(&self) -> QuizPhase {
        match (self.quiz_started, self.is_correct) {
            (true, None) => QuizPhase::QuestionActive,
            (true, Some(_)) => QuizPhase::AnswerChecked,
            (false, _) if self.finished => QuizPhase::Finished,
            (false, _) => QuizPhase::NotStarted,
        }
    }

    /// 出題中の問題 (クイズ開始前は None)
    pub fn current_question(&self) -> Option<&'a QuizQuestion> {
        if self.quiz_started {
            self.questions.get(self.current_question_index)
        } else {
            None
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    /// クイズを (最初から) 始める。単語の表示位置には触らない
    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        if self.quiz_started {
            return Err(QuizError::AlreadyRunning);
        }
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        self.quiz_started = true;
        self.current_question_index = 0;
        self.score = 0;
        self.finished = false;
        self.reset_question();
        info!(questions = self.questions.len(), "quiz started");
        Ok(())
    }

    /// 選択肢を選ぶ。答え合わせの結果はリセットされる
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::NotRunning)?;
        let option = *question
            .options
            .get(option_index)
            .ok_or(QuizError::NoSuchOption(option_index))?;

        self.selected_answer = Some(option);
        self.is_correct = None;
        debug!(question = self.current_question_index, option, "select answer");
        Ok(())
    }

    /// 答え合わせ。正解なら (その問題でまだ得点していなければ) 1点加算
    pub fn check_answer(&mut self) -> Result<bool, QuizError> {
        let question = self.current_question().ok_or(QuizError::NotRunning)?;
        if self.is_correct.is_some() {
            return Err(QuizError::AlreadyChecked);
        }
        let selected = self.selected_answer.ok_or(QuizError::NoSelection)?;

        let correct = question.is_correct(selected);
        self.is_correct = Some(correct);
        if correct && !self.question_scored {
            self.question_scored = true;
            self.score += 1;
        }
        debug!(
            question = self.current_question_index,
            selected,
            correct,
            score = self.score,
            "check answer"
        );
        Ok(correct)
    }

    /// 次の問題へ。最後の問題なら終了して true を返す
    pub fn next_question(&mut self) -> Result<bool, QuizError> {
        if !self.quiz_started {
            return Err(QuizError::NotRunning);
        }
        if self.is_correct.is_none() {
            return Err(QuizError::NotChecked);
        }

        if self.is_last_question() {
            self.quiz_started = false;
            self.finished = true;
            info!(score = self.score, total = self.questions.len(), "quiz finished");
            return Ok(true);
        }

        self.current_question_index += 1;
        self.reset_question();
        debug!(question = self.current_question_index, "next question");
        Ok(false)
    }

    /// ヒント表示の切り替え
    pub fn toggle_hint(&mut self) -> Result<(), QuizError> {
        if !self.quiz_started {
            return Err(QuizError::NotRunning);
        }
        self.show_hint = !self.show_hint;
        Ok(())
    }

    fn reset_question(&mut self) {
        self.selected_answer = None;
        self.is_correct = None;
        self.show_hint = false;
        self.question_scored = false;
    }

    // ---- 進捗 ----

    /// 正答率 (%)。問題数 0 のときは 0
    pub fn progress_percent(&self) -> u16 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        (100 * self.score.min(total) / total) as u16
    }

    /// 単語学習タブに戻る
    pub fn review_vocabulary(&mut self) {
        self.select_tab(Tab::Vocabulary);
    }
}
