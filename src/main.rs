// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

mod app;
use app::{AppState, Tab};

mod input;
use input::Flow;

mod labels;
use labels::Labels;

mod logging;

mod questions;

mod timer;
use timer::{DEFAULT_ROTATION, RotationTimer};

mod ui;

mod vocabulary;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

// --------------------------------------------------
// コマンドライン引数
// --------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "english-study", version, about = "英語学習アプリ (単語カードとクイズ)")]
struct Cli {
    /// 起動時に開くタブ
    #[arg(long, value_enum, default_value_t = Tab::Vocabulary)]
    tab: Tab,

    /// 単語カードを自動で進める間隔 (ミリ秒)
    #[arg(long, default_value_t = DEFAULT_ROTATION.as_millis() as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    rotate_ms: u64,

    /// 単語カードを自動で進めない
    #[arg(long)]
    no_rotate: bool,

    /// ラベル (表示文言) の JSON ファイル
    #[arg(long, value_name = "PATH")]
    labels: Option<PathBuf>,

    /// 既定のラベルを JSON で出力して終了
    #[arg(long)]
    dump_labels: bool,

    /// ログファイル
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// ログレベル (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_labels {
        println!("{}", Labels::default_json()?);
        return Ok(());
    }

    // ログが開けなくてもアプリは動かす
    if let Err(err) = logging::init(cli.log_file.as_deref(), cli.log_level) {
        eprintln!("logging disabled: {err}");
    }

    let labels = Labels::load(cli.labels.as_deref()).context("failed to load labels")?;
    let rotation = (!cli.no_rotate).then(|| Duration::from_millis(cli.rotate_ms));

    // パニック時も端末を元に戻す
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    info!(tab = ?cli.tab, ?rotation, "started");
    let result = run_app(&mut terminal, &labels, cli.tab, rotation);
    // 端末は必ず戻す。run_app のエラーを優先して返す
    let restored = restore_terminal().context("failed to restore terminal");
    info!("stopped");
    result.and(restored)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    // 途中で失敗したら raw モードと代替スクリーンを戻す
    with_rollback(
        || {
            stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
            stdout().execute(Hide)?; // カーソルを非表示
            let backend = CrosstermBackend::new(stdout());
            Ok(Terminal::new(backend)?)
        },
        || {
            let _ = restore_terminal();
        },
    )
}

/// `step` が失敗したときだけ `rollback` を実行する
fn with_rollback<T>(step: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = step();
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal() -> Result<()> {
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<impl Backend>,
    labels: &Labels,
    tab: Tab,
    rotation: Option<Duration>,
) -> Result<()> {
    let mut app_state = AppState::new();
    app_state.select_tab(tab);

    // この関数を抜けるとき (エラーでも) Drop でタイマーが止まる
    let timer = match rotation {
        Some(period) => {
            let timer = RotationTimer::start(period).context("failed to start timer")?;
            info!(period = ?timer.period(), "vocabulary rotation enabled");
            Some(timer)
        }
        None => None,
    };

    loop {
        terminal.draw(|f| ui::ui(f, &app_state, labels))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && input::handle_key(&mut app_state, key) == Flow::Quit
                {
                    break;
                }
            }
        }

        if let Some(timer) = &timer {
            timer.apply(&mut app_state);
        }
    }

    if let Some(mut timer) = timer {
        timer.stop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn rollback_runs_only_on_failure() {
        let rolled_back = Cell::new(false);
        let ok: Result<u8> = with_rollback(|| Ok(1), || rolled_back.set(true));
        assert_eq!(ok.unwrap(), 1);
        assert!(!rolled_back.get());

        let failed: Result<u8> =
            with_rollback(|| Err(anyhow!("alternate screen")), || rolled_back.set(true));
        assert!(failed.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn run_error_wins_over_restore_error() {
        let run: Result<()> = Err(anyhow!("draw failed"));
        let restored: Result<()> = Err(anyhow!("restore failed"));
        let err = run.and(restored).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["english-study"]);
        assert_eq!(cli.tab, Tab::Vocabulary);
        assert_eq!(cli.rotate_ms, 5000);
        assert!(!cli.no_rotate);
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn cli_rejects_zero_rotation() {
        assert!(Cli::try_parse_from(["english-study", "--rotate-ms", "0"]).is_err());
        let cli = Cli::try_parse_from(["english-study", "--tab", "quiz", "--rotate-ms", "250"])
            .unwrap();
        assert_eq!(cli.tab, Tab::Quiz);
        assert_eq!(cli.rotate_ms, 250);
    }
}
