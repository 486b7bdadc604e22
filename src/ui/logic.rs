//! 业务逻辑处理 (Update/Dispatch)
//!
//! 所有状态变更都在 dispatch 中完成；远端调用以 Effect 形式交给运行时

use tracing::{debug, error, info};

use super::actions::{Action, Effect};
use super::state::App;
use crate::error::ServiceError;
use crate::models::Post;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => return Some(Effect::Quit),
            Action::Mounted | Action::Refresh => return self.load_posts(),
            Action::ScrollUp => self.move_up(),
            Action::ScrollDown => self.move_down(),

            Action::ToggleForm => self.form.toggle_visible(),
            Action::FocusNext => self.with_visible_form(|app| app.form.focus_next()),
            Action::FocusPrev => self.with_visible_form(|app| app.form.focus_prev()),
            Action::Input(c) => self.with_visible_form(|app| app.form.push_char(c)),
            Action::DeleteChar => self.with_visible_form(|app| app.form.pop_char()),
            Action::Submit => return self.submit(),

            Action::PostsLoaded(result) => self.on_posts_loaded(result),
            Action::PostCreated(result) => return self.on_post_created(result),
        }
        None
    }

    // ============ 列表相关 ============

    /// 请求重新获取文章列表
    pub fn load_posts(&mut self) -> Option<Effect> {
        self.in_flight += 1;
        Some(Effect::LoadPosts)
    }

    fn on_posts_loaded(&mut self, result: Result<Vec<Post>, ServiceError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(posts) => {
                debug!(count = posts.len(), "posts loaded");
                self.replace_posts(posts);
            }
            // 保留旧列表
            Err(err) => error!(error = &err as &dyn std::error::Error, "error fetching posts"),
        }
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.posts.len() {
            self.selected_index += 1;
        }
    }

    // ============ 表单相关 ============

    fn with_visible_form(&mut self, f: impl FnOnce(&mut Self)) {
        if self.form.visible {
            f(self);
        }
    }

    /// 提交表单：校验失败只标记字段错误，不发起请求
    pub fn submit(&mut self) -> Option<Effect> {
        if !self.form.visible {
            return None;
        }
        match self.form.validate() {
            Ok(new_post) => {
                self.in_flight += 1;
                Some(Effect::CreatePost(new_post))
            }
            Err(_) => None,
        }
    }

    fn on_post_created(&mut self, result: Result<Option<Post>, ServiceError>) -> Option<Effect> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(created) => {
                if let Some(post) = created {
                    info!(id = post.id, "post created");
                }
                self.form.reset();
                self.load_posts()
            }
            // 表单保持原样；远端失败不显示字段错误
            Err(err) => {
                error!(error = &err as &dyn std::error::Error, "error creating post");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceResult;
    use crate::models::{NewPost, sample_post};
    use crate::service::PostService;
    use crate::ui::form::FieldName;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// 记录调用并按队列返回预设结果的假服务
    #[derive(Default)]
    struct FakeService {
        list_results: Mutex<VecDeque<ServiceResult<Vec<Post>>>>,
        create_results: Mutex<VecDeque<ServiceResult<Option<Post>>>>,
        list_calls: Mutex<usize>,
        create_calls: Mutex<Vec<NewPost>>,
    }

    impl FakeService {
        fn list_ok(self, posts: Vec<Post>) -> Self {
            self.list_results.lock().unwrap().push_back(Ok(posts));
            self
        }

        fn list_err(self) -> Self {
            self.list_results.lock().unwrap().push_back(Err(ServiceError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }));
            self
        }

        fn create_ok(self) -> Self {
            self.create_results.lock().unwrap().push_back(Ok(None));
            self
        }

        fn create_err(self) -> Self {
            self.create_results.lock().unwrap().push_back(Err(ServiceError::Status {
                status: 400,
                body: "rejected".to_string(),
            }));
            self
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }

        fn create_calls(&self) -> Vec<NewPost> {
            self.create_calls.lock().unwrap().clone()
        }
    }

    impl PostService for FakeService {
        fn list_posts(&self) -> ServiceResult<Vec<Post>> {
            *self.list_calls.lock().unwrap() += 1;
            self.list_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        fn create_post(&self, post: &NewPost) -> ServiceResult<Option<Post>> {
            self.create_calls.lock().unwrap().push(post.clone());
            self.create_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(None))
        }
    }

    /// 同步执行 Effect 链直到没有后续
    struct Harness {
        app: App,
        service: FakeService,
        quit: bool,
    }

    impl Harness {
        fn new(service: FakeService) -> Self {
            Self {
                app: App::new(),
                service,
                quit: false,
            }
        }

        fn send(&mut self, action: Action) {
            let mut next = self.app.dispatch(action);
            while let Some(effect) = next.take() {
                let action = match effect {
                    Effect::Quit => {
                        self.quit = true;
                        break;
                    }
                    Effect::LoadPosts => Action::PostsLoaded(self.service.list_posts()),
                    Effect::CreatePost(post) => {
                        Action::PostCreated(self.service.create_post(&post))
                    }
                };
                next = self.app.dispatch(action);
            }
        }

        fn fill(&mut self, title: &str, body: &str, author: &str) {
            if !self.app.form.visible {
                self.send(Action::ToggleForm);
            }
            self.app.form.update_field(FieldName::Title, title);
            self.app.form.update_field(FieldName::Body, body);
            self.app.form.update_field(FieldName::Author, author);
        }
    }

    #[test]
    fn test_mount_loads_posts_in_service_order() {
        let posts = vec![sample_post(3, "c"), sample_post(1, "a"), sample_post(2, "b")];
        let mut h = Harness::new(FakeService::default().list_ok(posts.clone()));

        h.send(Action::Mounted);

        assert_eq!(h.service.list_calls(), 1);
        assert_eq!(h.app.posts, posts);
        assert!(!h.app.is_loading());
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let posts = vec![sample_post(1, "a")];
        let mut h = Harness::new(FakeService::default().list_ok(posts.clone()).list_err());

        h.send(Action::Mounted);
        h.send(Action::Refresh);

        assert_eq!(h.service.list_calls(), 2);
        assert_eq!(h.app.posts, posts);
    }

    #[test]
    fn test_successful_submit_creates_resets_and_reloads() {
        let refreshed = vec![sample_post(1, "BTC hits 50k")];
        let mut h = Harness::new(
            FakeService::default()
                .list_ok(Vec::new())
                .create_ok()
                .list_ok(refreshed.clone()),
        );
        h.send(Action::Mounted);
        h.fill("BTC hits 50k", "Market update.", "Jane");

        h.send(Action::Submit);

        assert_eq!(
            h.service.create_calls(),
            vec![NewPost {
                title: "BTC hits 50k".to_string(),
                body: "Market update.".to_string(),
                author: "Jane".to_string(),
            }]
        );
        assert_eq!(h.service.list_calls(), 2);
        assert!(!h.app.form.visible);
        for name in FieldName::ALL {
            assert_eq!(h.app.form.value(name), "");
            assert_eq!(h.app.form.error(name), None);
        }
        assert_eq!(h.app.posts, refreshed);
    }

    #[test]
    fn test_empty_title_blocks_submit() {
        let mut h = Harness::new(FakeService::default());
        h.fill("", "x", "y");

        h.send(Action::Submit);

        assert!(h.service.create_calls().is_empty());
        assert_eq!(h.app.form.error(FieldName::Title), Some("Title is required"));
        assert_eq!(h.app.form.error(FieldName::Body), None);
        assert!(h.app.form.visible);
    }

    #[test]
    fn test_all_empty_fields_report_errors() {
        let mut h = Harness::new(FakeService::default());
        h.fill("", "", "");

        h.send(Action::Submit);

        assert!(h.service.create_calls().is_empty());
        assert_eq!(h.app.form.error(FieldName::Body), Some("Body is required"));
        assert_eq!(h.app.form.error(FieldName::Author), Some("Author is required"));
        assert_eq!(h.service.list_calls(), 0);
    }

    #[test]
    fn test_failed_create_keeps_form() {
        let mut h = Harness::new(FakeService::default().create_err());
        h.fill("BTC hits 50k", "Market update.", "Jane");

        h.send(Action::Submit);

        assert_eq!(h.service.create_calls().len(), 1);
        assert_eq!(h.service.list_calls(), 0);
        assert!(h.app.form.visible);
        assert_eq!(h.app.form.value(FieldName::Title), "BTC hits 50k");
        assert_eq!(h.app.form.value(FieldName::Body), "Market update.");
        assert_eq!(h.app.form.value(FieldName::Author), "Jane");
        for name in FieldName::ALL {
            assert_eq!(h.app.form.error(name), None);
        }
    }

    #[test]
    fn test_typing_ignored_while_hidden() {
        let mut h = Harness::new(FakeService::default());
        h.send(Action::Input('x'));
        h.send(Action::Submit);

        assert_eq!(h.app.form.value(FieldName::Title), "");
        assert!(h.service.create_calls().is_empty());
    }

    #[test]
    fn test_typing_through_actions() {
        let mut h = Harness::new(FakeService::default());
        h.send(Action::ToggleForm);
        for c in "hi!".chars() {
            h.send(Action::Input(c));
        }
        h.send(Action::DeleteChar);
        h.send(Action::FocusNext);
        h.send(Action::Input('b'));
        h.send(Action::FocusPrev);
        h.send(Action::FocusPrev);
        h.send(Action::Input('a'));

        assert_eq!(h.app.form.value(FieldName::Title), "hi");
        assert_eq!(h.app.form.value(FieldName::Body), "b");
        assert_eq!(h.app.form.value(FieldName::Author), "a");
    }

    #[test]
    fn test_toggle_twice_preserves_fields() {
        let mut h = Harness::new(FakeService::default());
        h.fill("t", "", "");
        h.send(Action::Submit);
        h.send(Action::ToggleForm);
        h.send(Action::ToggleForm);

        assert!(h.app.form.visible);
        assert_eq!(h.app.form.value(FieldName::Title), "t");
        assert_eq!(h.app.form.error(FieldName::Body), Some("Body is required"));
    }

    #[test]
    fn test_scroll_is_clamped_after_reload() {
        let mut h = Harness::new(
            FakeService::default()
                .list_ok(vec![sample_post(1, "a"), sample_post(2, "b"), sample_post(3, "c")])
                .list_ok(vec![sample_post(1, "a")]),
        );
        h.send(Action::Mounted);
        h.send(Action::ScrollDown);
        h.send(Action::ScrollDown);
        h.send(Action::ScrollDown);
        assert_eq!(h.app.selected_index, 2);

        h.send(Action::Refresh);
        assert_eq!(h.app.selected_index, 0);
        h.send(Action::ScrollUp);
        assert_eq!(h.app.selected_index, 0);
    }

    #[test]
    fn test_quit() {
        let mut h = Harness::new(FakeService::default());
        h.send(Action::Quit);
        assert!(h.quit);
    }

    #[test]
    fn test_overlapping_loads_last_completion_wins() {
        let mut app = App::new();
        assert_eq!(app.dispatch(Action::Refresh), Some(Effect::LoadPosts));
        assert_eq!(app.dispatch(Action::Refresh), Some(Effect::LoadPosts));
        assert_eq!(app.in_flight, 2);

        app.dispatch(Action::PostsLoaded(Ok(vec![sample_post(2, "second")])));
        app.dispatch(Action::PostsLoaded(Ok(vec![sample_post(1, "first")])));

        assert_eq!(app.posts, vec![sample_post(1, "first")]);
        assert!(!app.is_loading());
    }
}
