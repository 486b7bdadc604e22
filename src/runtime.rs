//! Effect 执行器
//!
//! 每个远端调用在独立线程中执行，完成后把结果作为 Action 发回事件循环。
//! 不做取消与去重，多个并发请求按到达顺序处理。

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use tracing::warn;

use crate::service::PostService;
use crate::ui::actions::{Action, Effect};

pub struct Executor {
    service: Arc<dyn PostService>,
    completions: Sender<Action>,
}

impl Executor {
    pub fn new(service: Arc<dyn PostService>, completions: Sender<Action>) -> Self {
        Self {
            service,
            completions,
        }
    }

    /// 在后台线程执行远端 Effect；`Effect::Quit` 由事件循环处理，这里忽略
    pub fn execute(&self, effect: Effect) {
        let service = Arc::clone(&self.service);
        let tx = self.completions.clone();
        let job: Box<dyn FnOnce() -> Action + Send> = match effect {
            Effect::Quit => return,
            Effect::LoadPosts => Box::new(move || Action::PostsLoaded(service.list_posts())),
            Effect::CreatePost(post) => {
                Box::new(move || Action::PostCreated(service.create_post(&post)))
            }
        };

        thread::spawn(move || {
            if tx.send(job()).is_err() {
                // 事件循环已退出
                warn!("dropping remote completion after shutdown");
            }
        });
    }
}
