use serde::{Deserialize, Serialize};

/// 一個郵件網域及其全部轉寄規則
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default)]
    pub forwards: Vec<Forward>,
    /// 新增轉寄的暫存輸入，只存在於本地
    #[serde(skip)]
    pub create: NewForward,
}

impl Domain {
    pub fn new(name: impl Into<String>, forwards: Vec<Forward>) -> Self {
        Self {
            name: name.into(),
            forwards,
            create: NewForward::default(),
        }
    }

    /// 此網域的地址後綴，例如 `@example.com`
    pub fn address_suffix(&self) -> String {
        format!("@{}", self.name)
    }

    pub fn forward(&self, from: &str) -> Option<&Forward> {
        self.forwards.iter().find(|f| f.from == from)
    }

    pub fn forward_mut(&mut self, from: &str) -> Option<&mut Forward> {
        self.forwards.iter_mut().find(|f| f.from == from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forward {
    pub from: String,
    pub to: String,
    /// 上次讀取時的 `to`，不會送回伺服器
    #[serde(skip_serializing, default)]
    pub to_original: String,
}

impl Forward {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            to_original: String::new(),
        }
    }

    /// `to` 是否有尚未儲存的修改
    pub fn is_modified(&self) -> bool {
        self.to != self.to_original
    }
}

/// `POST /api/domains/{domain}/forwards/` 的請求內容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewForward {
    pub from: String,
    pub to: String,
}

impl NewForward {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// `PUT /api/domains/{domain}/forwards/{from}/` 的請求內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardTarget {
    pub to: String,
}

/// `POST /api/domains/` 的請求內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDomain {
    pub name: String,
}
