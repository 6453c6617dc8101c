// ============================================
// src/ui.rs
// 画面描画
// ============================================

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
};

use crate::app::{AppState, QuizPhase, Tab};
use crate::labels::Labels;

// --------------------------------------------------
// 全体
// --------------------------------------------------

pub fn ui(f: &mut Frame, state: &AppState, labels: &Labels) {
    let size = f.area();
    // 枠線とアプリ名
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(labels.app_title.as_str()).bold().centered());
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] あいさつ
            Constraint::Length(1), // [1] タブ
            Constraint::Min(1),    // [2] 本体
            Constraint::Length(1), // [3] キー操作の説明
        ])
        .split(inner_area);

    f.render_widget(
        Paragraph::new(labels.welcome_message.as_str())
            .style(Style::default().fg(Color::Gray))
            .centered(),
        chunks[0],
    );

    let titles = Tab::ALL.iter().enumerate().map(|(i, tab)| {
        let title = match tab {
            Tab::Vocabulary => &labels.vocabulary_title,
            Tab::Quiz => &labels.quiz_title,
            Tab::Progress => &labels.progress_title,
        };
        format!("F{} {}", i + 1, title)
    });
    f.render_widget(
        Tabs::new(titles)
            .select(state.active_tab.index())
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        chunks[1],
    );

    match state.active_tab {
        Tab::Vocabulary => draw_vocabulary(f, chunks[2], state, labels),
        Tab::Quiz => draw_quiz(f, chunks[2], state, labels),
        Tab::Progress => draw_progress(f, chunks[2], state, labels),
    }

    f.render_widget(
        Paragraph::new(labels.key_help.as_str()).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

/// "[n] 次へ" のような操作表示。無効なら灰色
fn control<'a>(key: &'a str, label: &'a str, enabled: bool) -> Vec<Span<'a>> {
    let (key_style, label_style) = if enabled {
        (
            Style::default().fg(Color::Yellow).bold(),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    vec![
        Span::styled(format!("[{}] ", key), key_style),
        Span::styled(label, label_style),
    ]
}

// --------------------------------------------------
// 単語学習
// --------------------------------------------------

fn draw_vocabulary(f: &mut Frame, area: Rect, state: &AppState, labels: &Labels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(labels.vocabulary_title.as_str());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entry = state.current_vocab();
    let position = format!("{} / {}", state.current_vocab_index + 1, state.vocabulary().len());

    let lines = vec![
        Line::from(position).style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(entry.word).style(Style::default().fg(Color::White).bold()),
        Line::from(entry.translation),
        Line::from(entry.example).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
        Line::from(control("n", &labels.next_button, true)),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// --------------------------------------------------
// クイズ
// --------------------------------------------------

fn draw_quiz(f: &mut Frame, area: Rect, state: &AppState, labels: &Labels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(labels.quiz_title.as_str());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(question) = state.current_question() else {
        // 開始前 / 終了後
        let mut lines = Vec::new();
        if state.quiz_phase() == QuizPhase::Finished {
            lines.push(
                Line::from(labels.format_score(state.score, state.questions().len()))
                    .style(Style::default().fg(Color::Yellow)),
            );
            lines.push(Line::from(""));
        }
        lines.push(Line::from(control("Enter", &labels.start_quiz_button, true)));
        f.render_widget(Paragraph::new(lines), inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // [0] 問題文
            Constraint::Length(3), // [1] 選択肢 1, 2
            Constraint::Length(3), // [2] 選択肢 3, 4
            Constraint::Length(1), // [3] 正解 / 不正解
            Constraint::Length(1), // [4] 操作
            Constraint::Min(0),    // [5] ヒント
        ])
        .split(inner);

    let header = format!(
        "Q{}/{}  {}",
        state.current_question_index + 1,
        state.questions().len(),
        question.question
    );
    f.render_widget(
        Paragraph::new(header)
            .style(Style::default().fg(Color::White).bold())
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    // 選択肢 (2x2)
    for (row, rect) in [chunks[1], chunks[2]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rect);
        for (col, cell) in cols.iter().enumerate() {
            let index = row * 2 + col;
            let option = question.options[index];
            let style = if state.selected_answer == Some(option) {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            f.render_widget(
                Paragraph::new(format!("{}. {}", index + 1, option))
                    .style(style)
                    .block(Block::default().borders(Borders::ALL)),
                *cell,
            );
        }
    }

    // 判定バッジ
    let badge = match state.is_correct {
        Some(true) => Line::from(format!("✔ {}", labels.correct_message))
            .style(Style::default().fg(Color::Black).bg(Color::Green)),
        Some(false) => Line::from(format!("✘ {}", labels.incorrect_message))
            .style(Style::default().fg(Color::White).bg(Color::Red)),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(badge).centered(), chunks[3]);

    // 操作
    let mut spans = control("h", &labels.hint_label, true);
    spans.push(Span::raw("   "));
    if state.is_correct.is_none() {
        let can_check = state.selected_answer.is_some();
        spans.extend(control("Enter", &labels.check_answer_button, can_check));
    } else {
        let label = if state.is_last_question() {
            &labels.try_again_button
        } else {
            &labels.next_button
        };
        spans.extend(control("Enter", label, true));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[4]);

    if state.show_hint {
        f.render_widget(
            Paragraph::new(labels.hint_text.as_str())
                .style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true }),
            chunks[5],
        );
    }
}

// --------------------------------------------------
// 進捗
// --------------------------------------------------

fn draw_progress(f: &mut Frame, area: Rect, state: &AppState, labels: &Labels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(labels.progress_title.as_str());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] Quiz Score
            Constraint::Length(1), // [1] ゲージ
            Constraint::Length(1), // [2] "n out of 5 correct"
            Constraint::Length(1), // [3] 空白
            Constraint::Length(1), // [4] Vocabulary Mastered
            Constraint::Min(1),    // [5] 単語一覧
            Constraint::Length(1), // [6] 操作
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(labels.quiz_score_heading.as_str()).bold(),
        chunks[0],
    );

    let percent = state.progress_percent();
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
            .percent(percent)
            .label(format!("{}%", percent)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(labels.format_score(state.score, state.questions().len()))
            .style(Style::default().fg(Color::Gray)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(labels.vocabulary_mastered_heading.as_str()).bold(),
        chunks[4],
    );

    let word_width = state
        .vocabulary()
        .iter()
        .map(|v| v.word.len())
        .max()
        .unwrap_or(0);
    let list: Vec<Line> = state
        .vocabulary()
        .iter()
        .map(|v| {
            Line::from(vec![
                Span::raw(format!("  {:<width$}  ", v.word, width = word_width)),
                Span::styled(v.translation, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(list).block(Block::default().borders(Borders::ALL)),
        chunks[5],
    );

    f.render_widget(
        Paragraph::new(Line::from(control(
            "r",
            &labels.review_vocabulary_button,
            true,
        ))),
        chunks[6],
    );
}
