// ============================================
// src/timer.rs
// 単語カードを自動で進めるタイマー
// ============================================

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::app::AppState;

/// 単語カードの自動送り間隔 (デフォルト)
pub const DEFAULT_ROTATION: Duration = Duration::from_millis(5000);

/// 一定間隔で tick を送るバックグラウンドタイマー。
///
/// tick は状態を直接触らず、チャンネル経由でメインループに届く。
/// 状態の更新はメインループ側で1つずつ行われるので、キー入力による更新と
/// 混ざることはない。
///
/// `Drop` でスレッドを止めて join する。`?` で途中終了した場合も同じ。
pub struct RotationTimer {
    stop_tx: Option<Sender<()>>,
    ticks: Receiver<()>,
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl RotationTimer {
    /// タイマーを登録して開始する
    pub fn start(period: Duration) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (tick_tx, ticks) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name("vocab-rotation".into())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        // 時間切れ = 次の単語へ
                        Err(RecvTimeoutError::Timeout) => {
                            if tick_tx.send(()).is_err() {
                                break;
                            }
                        }
                        // 停止要求 or RotationTimer が破棄された
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        debug!(?period, "rotation timer started");
        Ok(Self {
            stop_tx: Some(stop_tx),
            ticks,
            handle: Some(handle),
            period,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// 溜まっている tick の数 (待たずに返す)
    pub fn pending(&self) -> usize {
        let mut count = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if count > 0 {
            trace!(count, "rotation ticks");
        }
        count
    }

    /// 溜まっている tick の数だけ単語カードを進め、進めた数を返す
    pub fn apply(&self, state: &mut AppState) -> usize {
        let ticks = self.pending();
        for _ in 0..ticks {
            state.advance_vocab();
        }
        ticks
    }

    /// タイマーを止める (Drop でも呼ばれる)
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("rotation timer thread panicked");
            }
            debug!("rotation timer stopped");
        }
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn emits_ticks_while_running() {
        let timer = RotationTimer::start(Duration::from_millis(10)).unwrap();
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut seen = 0;
        while seen < 3 && Instant::now() < deadline {
            seen += timer.pending();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(seen >= 3);
    }

    #[test]
    fn no_ticks_after_stop() {
        let mut timer = RotationTimer::start(Duration::from_millis(5)).unwrap();
        timer.stop();
        assert!(timer.handle.is_none());
        timer.pending(); // stop 前に届いた分を捨てる
        thread::sleep(Duration::from_millis(30));
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn stop_is_prompt_with_long_period() {
        let timer = RotationTimer::start(Duration::from_secs(3600)).unwrap();
        assert_eq!(timer.period(), Duration::from_secs(3600));
        let started = Instant::now();
        drop(timer);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn ticks_advance_vocabulary_only() {
        let mut state = AppState::new();
        state.start_quiz().unwrap();
        state.select_answer(1).unwrap();
        state.check_answer().unwrap();
        state.toggle_hint().unwrap();
        let quiz_before = (
            state.current_question_index,
            state.selected_answer,
            state.is_correct,
            state.score,
            state.show_hint,
            state.quiz_phase(),
        );

        let timer = RotationTimer::start(Duration::from_millis(5)).unwrap();
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut applied = 0;
        while applied < 7 && Instant::now() < deadline {
            applied += timer.apply(&mut state);
            thread::sleep(Duration::from_millis(2));
        }
        drop(timer);

        assert!(applied >= 7);
        assert_eq!(state.current_vocab_index, applied % 5);
        assert_eq!(
            quiz_before,
            (
                state.current_question_index,
                state.selected_answer,
                state.is_correct,
                state.score,
                state.show_hint,
                state.quiz_phase(),
            )
        );
    }

    #[test]
    fn apply_without_ticks_leaves_state_alone() {
        let mut state = AppState::new();
        let timer = RotationTimer::start(Duration::from_secs(3600)).unwrap();
        assert_eq!(timer.apply(&mut state), 0);
        assert_eq!(state.current_vocab_index, 0);
    }

    #[test]
    fn stop_twice_is_harmless() {
        let mut timer = RotationTimer::start(Duration::from_millis(50)).unwrap();
        timer.stop();
        timer.stop();
        assert!(timer.handle.is_none());
    }
}
