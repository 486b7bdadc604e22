//! App 状态定义 (Model)

use super::form::PostForm;
use crate::models::Post;

/// 应用状态
#[derive(Debug, Default)]
pub struct App {
    /// 最近一次成功获取的文章，保持服务端顺序
    pub posts: Vec<Post>,
    pub selected_index: usize,
    pub form: PostForm,
    /// 进行中的远端请求数
    pub in_flight: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换文章列表
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;

        // 确保选中索引有效
        if self.posts.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.posts.len() {
            self.selected_index = self.posts.len() - 1;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
