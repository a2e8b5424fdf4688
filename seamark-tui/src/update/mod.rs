//! Update 层：状态更新逻辑
//!
//! 消费 Message，修改 Model。整个程序只有这一层改状态。
//!
//! 模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 侧边栏子消息处理
//!         mod content;            // 内容区子消息处理
//!
//! 视图切换返回的 NavEffect（同步布局 / 重置布局 / 重挂载）
//! 也在本层执行：高度测量要等可见性变化落定才有意义，
//! seamark-core 只把后续工作列出来，这里逐条跑掉。
//!
//! Update 完成后控制权回到主循环（app.rs），
//! 下一轮渲染时 View 层读取更新后的 Model。

mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;
use crate::view::measure::{self, ViewportProbe};

/// 启动时的初始导航：进入默认视图并完成第一次高度同步
pub fn bootstrap(app: &mut App) {
    let effects = app.nav.bootstrap();
    navigation::apply_effects(app, &effects);
    // 头部高度在所有视图下都要有值，启动时先量一次
    let probe = ViewportProbe::new(app.viewport_rect(), app.nav.current_view());
    app.layout.recompute(&probe);
    rescale_contacts(app);
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus.toggle();
        }

        AppMessage::CollapseToDefault => {
            collapse_to_default(app);
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Resize(width, height) => {
            resize(app, width, height);
        }

        AppMessage::Tick => {
            app.cultural.on_tick();
            app.tick_status();
        }

        AppMessage::Noop => {}
    }
}

/// Esc：收起展开的子菜单或取消直达项的激活，回到默认视图
///
/// 与再点一次当前激活元素等价，所以直接复用 click_entry 的
/// 收起/取消语义。没有激活元素时什么都不做。
fn collapse_to_default(app: &mut App) {
    let Some(target) = app.nav.open_entry().or_else(|| app.nav.active_entry()) else {
        return;
    };
    let effects = app.nav.click_entry(target);
    navigation::after_transition(app, &effects);
}

/// 终端尺寸变化：更新视口并重算同步值与点击区域
///
/// 无条件重算：探针对没画吸顶卡片的视图报告缺失，
/// 重算结果自然是零，不需要按视图分支。
fn resize(app: &mut App, width: u16, height: u16) {
    app.viewport = (width, height);
    let probe = ViewportProbe::new(app.viewport_rect(), app.nav.current_view());
    app.layout.recompute(&probe);
    rescale_contacts(app);
}

/// 联系人点击区域按当前面板宽度重算
fn rescale_contacts(app: &mut App) {
    let panel = measure::contact_panel_inner(app.viewport_rect());
    app.my_consultant.rescale(panel);
}
