//! 应用主循环
//!
//! 每轮循环：渲染 → 检查退出 → 等待输入 → 翻译成消息 → 更新状态。
//! 输入等待带 100ms 超时，超时即发一条 Tick，驱动结果卡片的
//! 逐张显示与状态栏消息的过期。
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否退出
//!     if let Some(event) = poll_event(timeout) {      // 等待输入，最长 100ms
//!         let msg = handle_event(event, &app);        //   翻译成消息
//!         update::update(&mut app, msg)               //   更新状态
//!     }
//!     每满 100ms 发送一条 AppMessage::Tick
//! }

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Tick 周期，状态栏消息的 TTL 与结果卡片的显示节奏以此为单位
const TICK_RATE: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件，超时上限是距下一个 tick 的剩余时间
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if let Some(event) = event::poll_event(timeout)? {
            // 4. 处理事件，获取消息并更新状态
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 定时消息
        if last_tick.elapsed() >= TICK_RATE {
            update::update(app, AppMessage::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
