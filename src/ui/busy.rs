//! 终端忙碌指示器

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// 忙碌指示器
///
/// 职责：
/// - 在网络请求期间显示转轮
/// - 通过 `BusyGuard` 保证请求流程无论从哪条路径退出都会隐藏
pub struct BusyIndicator {
    spinner: Mutex<Option<ProgressBar>>,
    active: AtomicBool,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            active: AtomicBool::new(false),
        }
    }

    /// 显示转轮
    pub fn show(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
        self.active.store(true, Ordering::SeqCst);
    }

    /// 隐藏转轮
    pub fn hide(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
        self.active.store(false, Ordering::SeqCst);
    }

    /// 转轮当前是否可见
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// 显示转轮并返回守卫
    pub fn begin(&self, message: &str) -> BusyGuard<'_> {
        self.show(message);
        BusyGuard { indicator: self }
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// 忙碌守卫
///
/// 析构时隐藏转轮，覆盖成功、校验失败、传输失败所有退出路径
pub struct BusyGuard<'a> {
    indicator: &'a BusyIndicator,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
