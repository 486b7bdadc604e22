//! Action 与 Effect 定义 (Intent)
//!
//! 用户交互和远端调用结果都转化为 Action；
//! dispatch 需要访问远端时返回 Effect，由运行时执行

use crate::error::ServiceError;
use crate::models::{NewPost, Post};

/// 用户操作与异步结果
#[derive(Debug)]
pub enum Action {
    Quit,
    /// 首次显示
    Mounted,
    Refresh,
    ScrollUp,
    ScrollDown,

    // 表单
    ToggleForm,
    FocusNext,
    FocusPrev,
    Input(char),
    DeleteChar,
    Submit,

    // 远端调用完成
    PostsLoaded(Result<Vec<Post>, ServiceError>),
    PostCreated(Result<Option<Post>, ServiceError>),
}

/// 需要运行时执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    LoadPosts,
    CreatePost(NewPost),
}
