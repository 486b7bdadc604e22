//! 远端文章服务
//!
//! `PostService` 是 UI 唯一依赖的接口；`HttpPostService` 以 JSON over HTTP 实现：
//! - `GET  {base}/posts` -> `[Post]`
//! - `POST {base}/posts` `{title, body, author}` -> `Post` 或空响应

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewPost, Post};

pub trait PostService: Send + Sync {
    /// 获取全部文章，顺序由服务端决定
    fn list_posts(&self) -> ServiceResult<Vec<Post>>;

    /// 新建文章；服务端可能返回新文章，也可能不返回
    fn create_post(&self, post: &NewPost) -> ServiceResult<Option<Post>>;
}

pub struct HttpPostService {
    posts_url: Url,
    agent: ureq::Agent,
}

impl HttpPostService {
    /// `base_url` 需已规范化（以 '/' 结尾），见 `config::parse_base_url`
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, url::ParseError> {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            posts_url: base_url.join("posts")?,
            agent: builder.build(),
        })
    }

    fn send(&self, request: ureq::Request, payload: Option<String>) -> ServiceResult<String> {
        let request = request.set("Accept", "application/json");
        let response = match payload {
            Some(payload) => request
                .set("Content-Type", "application/json")
                .send_string(&payload),
            None => request.call(),
        };

        match response {
            Ok(resp) => resp.into_string().map_err(ServiceError::Body),
            Err(ureq::Error::Status(status, resp)) => Err(ServiceError::Status {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(err)) => Err(ServiceError::Transport(Box::new(err))),
        }
    }
}

impl PostService for HttpPostService {
    fn list_posts(&self) -> ServiceResult<Vec<Post>> {
        debug!(url = %self.posts_url, "GET posts");
        let body = self.send(self.agent.get(self.posts_url.as_str()), None)?;
        decode(&body)
    }

    fn create_post(&self, post: &NewPost) -> ServiceResult<Option<Post>> {
        debug!(url = %self.posts_url, title = %post.title, "POST posts");
        let payload = serde_json::to_string(post).map_err(ServiceError::Encode)?;
        let body = self.send(self.agent.post(self.posts_url.as_str()), Some(payload))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        decode(&body).map(Some)
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> ServiceResult<R> {
    serde_json::from_str(body).map_err(ServiceError::Decode)
}
