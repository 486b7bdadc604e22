use chrono::{Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// 远端返回的文章（只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "int_or_string")]
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    /// 纳秒时间戳
    #[serde(deserialize_with = "int_or_string")]
    pub timestamp: i64,
}

impl Post {
    /// 本地时区显示的发布时间
    pub fn posted_at(&self) -> String {
        format_timestamp(self.timestamp)
    }

    /// 卡片副标题: "By {author} | {time}"
    pub fn byline(&self) -> String {
        format!("By {} | {}", self.author, self.posted_at())
    }
}

/// 新建文章请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

const NANOS_PER_MILLI: i64 = 1_000_000;
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 纳秒时间戳 -> 本地时间字符串
pub fn format_timestamp(nanos: i64) -> String {
    format_timestamp_in(&Local, nanos)
}

/// 指定时区格式化
pub fn format_timestamp_in<Tz>(tz: &Tz, nanos: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let millis = nanos / NANOS_PER_MILLI;
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

/// 大整数字段可能以 JSON 数字或十进制字符串出现
fn int_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Int(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
pub fn sample_post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: format!("{title} body"),
        author: "Jane".to_string(),
        timestamp: 1_700_000_000_000_000_000,
    }
}
