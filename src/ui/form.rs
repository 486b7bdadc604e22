//! 发帖表单状态
//!
//! 字段名 -> { value, error } 的映射，外加可见性与当前焦点

use std::collections::BTreeMap;

use crate::models::NewPost;

/// 表单字段，顺序即 Tab 切换顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldName {
    Title,
    Body,
    Author,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Title, FieldName::Body, FieldName::Author];

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::Body => "Body",
            FieldName::Author => "Author",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FieldName::Title => FieldName::Body,
            FieldName::Body => FieldName::Author,
            FieldName::Author => FieldName::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FieldName::Title => FieldName::Author,
            FieldName::Body => FieldName::Title,
            FieldName::Author => FieldName::Body,
        }
    }

    pub fn is_multiline(self) -> bool {
        self == FieldName::Body
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

/// 本地校验失败（必填项为空），只在表单内展示，不记录日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: FieldName,
    pub message: String,
}

impl ValidationFailure {
    fn required(field: FieldName) -> Self {
        Self {
            field,
            message: format!("{} is required", field.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    fields: BTreeMap<FieldName, FieldState>,
    pub visible: bool,
    pub focus: FieldName,
}

impl Default for PostForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PostForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL
                .into_iter()
                .map(|name| (name, FieldState::default()))
                .collect(),
            visible: false,
            focus: FieldName::Title,
        }
    }

    /// 切换可见性，字段内容保持不变
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[&name]
    }

    pub fn value(&self, name: FieldName) -> &str {
        &self.field(name).value
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.field(name).error.as_deref()
    }

    /// 设置字段值，不做即时校验
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        let name = self.focus;
        let mut value = self.value(name).to_string();
        value.push(c);
        self.update_field(name, value);
    }

    pub fn pop_char(&mut self) {
        let name = self.focus;
        let mut value = self.value(name).to_string();
        value.pop();
        self.update_field(name, value);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 校验必填项（去除首尾空白后非空）并刷新各字段错误。
    /// 通过时返回原样（未 trim）的提交内容。
    pub fn validate(&mut self) -> Result<NewPost, Vec<ValidationFailure>> {
        let mut failures = Vec::new();
        for name in FieldName::ALL {
            let state = self.field_mut(name);
            if state.value.trim().is_empty() {
                let failure = ValidationFailure::required(name);
                state.error = Some(failure.message.clone());
                failures.push(failure);
            } else {
                state.error = None;
            }
        }

        if !failures.is_empty() {
            return Err(failures);
        }

        Ok(NewPost {
            title: self.value(FieldName::Title).to_string(),
            body: self.value(FieldName::Body).to_string(),
            author: self.value(FieldName::Author).to_string(),
        })
    }

    /// 提交成功后：清空字段与错误并隐藏
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        self.fields.entry(name).or_default()
    }
}
