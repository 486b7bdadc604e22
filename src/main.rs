mod config;
mod error;
mod models;
mod runtime;
mod service;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, default_config_path, default_log_path, load_config, parse_base_url};
use crate::runtime::Executor;
use crate::service::HttpPostService;
use crate::ui::actions::Effect;
use crate::ui::{Action, App, handle_key_event, render};

/// 事件轮询间隔，期间处理远端调用结果
const TICK: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "crypto-blog")]
#[command(about = "Terminal client for the Crypto Blog post service")]
struct Args {
    /// Path to config.toml (default: <config dir>/crypto-blog/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Post service base URL, overrides the config file
    #[arg(short, long)]
    base_url: Option<String>,

    /// Log file path, overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url {
        config.service.base_url = base_url;
    }
    if let Some(log_file) = args.log_file {
        config.log.file = Some(log_file);
    }

    let log_path = init_tracing(&config)?;

    let base_url = parse_base_url(&config.service.base_url)?;
    let service = HttpPostService::new(&base_url, config.service.timeout())
        .context("failed to build posts url")?;
    info!(%base_url, log = %log_path.display(), "starting crypto-blog");

    let (tx, rx) = mpsc::channel();
    let executor = Executor::new(Arc::new(service), tx);
    let mut app = App::new();

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &executor, &rx);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting crypto-blog");
    result.context("terminal i/o failed")
}

/// 日志写入文件（终端由 UI 占用），返回日志路径
fn init_tracing(config: &Config) -> anyhow::Result<PathBuf> {
    let path = config.log.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    executor: &Executor,
    completions: &Receiver<Action>,
) -> io::Result<()> {
    if let Some(effect) = app.dispatch(Action::Mounted) {
        let _ = apply_effect(executor, effect);
    }

    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(effect) = handle_key_event(app, key) {
                        if apply_effect(executor, effect).is_break() {
                            return Ok(());
                        }
                    }
                }
            }
        }

        // 远端调用结果
        while let Ok(action) = completions.try_recv() {
            if let Some(effect) = app.dispatch(action) {
                if apply_effect(executor, effect).is_break() {
                    return Ok(());
                }
            }
        }
    }
}

/// 退出由事件循环决定，其余 Effect 交给执行器
fn apply_effect(executor: &Executor, effect: Effect) -> ControlFlow<()> {
    match effect {
        Effect::Quit => ControlFlow::Break(()),
        remote => {
            executor.execute(remote);
            ControlFlow::Continue(())
        }
    }
}
