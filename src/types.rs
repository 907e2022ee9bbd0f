use serde::{Deserialize, Serialize};

/// 桥接框架交给适配器的服务记录
///
/// 由宿主框架发现并归一化，适配器只读不写。
/// `tags` 中的每一项形如 `key|value`，或只有 `key`。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub id: String,
    pub ip: String,
    pub port: u16,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ServiceRecord {
    /// 创建不带标签的服务记录
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        ip: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ip: ip.into(),
            port,
            tags: Vec::new(),
        }
    }

    /// 追加一个标签（保持顺序）
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// 追加多个标签
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
