use crate::domain::model::{Domain, NewForward};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// 管理轉寄規則的 REST 後端
#[async_trait]
pub trait ForwardBackend: Send + Sync {
    async fn list_domains(&self) -> Result<Vec<Domain>>;
    async fn create_forward(&self, domain: &str, forward: &NewForward) -> Result<()>;
    async fn update_forward(&self, domain: &str, from: &str, to: &str) -> Result<()>;
    async fn delete_forward(&self, domain: &str, from: &str) -> Result<()>;
    async fn create_domain(&self, name: &str) -> Result<()>;
    async fn delete_domain(&self, name: &str) -> Result<()>;
}
