//! 补丁类型使用的反序列化辅助函数

use serde::{Deserialize, Deserializer};

/// 区分“字段缺省”和“显式 null”
///
/// 配合 `#[serde(default, deserialize_with = "deserialize_some")]` 用在
/// `Option<Option<T>>` 字段上：缺省 => `None`，`null` => `Some(None)`，
/// 有值 => `Some(Some(v))`。
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
