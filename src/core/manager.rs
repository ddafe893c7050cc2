use crate::core::decorate::decorate;
use crate::domain::model::{Domain, Forward, NewForward};
use crate::domain::ports::ForwardBackend;
use crate::utils::error::{ForwardError, Result};
use tokio::sync::{Mutex, RwLock};

/// 持有本地網域清單並把變更送往後端。
///
/// 所有後端操作都經過同一個 `gate` 依序執行：變更請求與其後的重新讀取
/// 在同一次持鎖內完成，因此變更成功後的狀態一定包含該變更。
/// 狀態只會由成功的讀取整批取代，不做本地修補。
pub struct ForwardManager<B: ForwardBackend> {
    backend: B,
    domains: RwLock<Vec<Domain>>,
    gate: Mutex<()>,
}

impl<B: ForwardBackend> ForwardManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            domains: RwLock::new(Vec::new()),
            gate: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn domains(&self) -> Vec<Domain> {
        self.domains.read().await.clone()
    }

    pub async fn domain(&self, name: &str) -> Option<Domain> {
        self.domains
            .read()
            .await
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }

    /// 重新讀取全部網域；失敗時保留原本的狀態
    pub async fn refresh(&self) -> Result<()> {
        let _gate = self.gate.lock().await;
        self.refresh_locked().await
    }

    pub async fn create_forward(&self, domain: &Domain) -> Result<()> {
        let _gate = self.gate.lock().await;
        tracing::debug!(
            "[{}] Creating forward from {} to {}",
            domain.name,
            domain.create.from,
            domain.create.to
        );
        let result = self
            .backend
            .create_forward(&domain.name, &domain.create)
            .await;
        self.settle(
            &format!("[{}] Create forward {}", domain.name, domain.create.from),
            result,
        )
        .await
    }

    pub async fn update_forward(&self, domain: &Domain, forward: &Forward) -> Result<()> {
        let _gate = self.gate.lock().await;
        tracing::debug!(
            "[{}] Updating forward from {} to {}",
            domain.name,
            forward.from,
            forward.to
        );
        let result = self
            .backend
            .update_forward(&domain.name, &forward.from, &forward.to)
            .await;
        self.settle(
            &format!("[{}] Update forward {}", domain.name, forward.from),
            result,
        )
        .await
    }

    pub async fn delete_forward(&self, domain: &Domain, forward: &Forward) -> Result<()> {
        let _gate = self.gate.lock().await;
        tracing::debug!("[{}] Deleting forward from {}", domain.name, forward.from);
        let result = self
            .backend
            .delete_forward(&domain.name, &forward.from)
            .await;
        self.settle(
            &format!("[{}] Delete forward {}", domain.name, forward.from),
            result,
        )
        .await
    }

    pub async fn create_domain(&self, name: &str) -> Result<()> {
        let _gate = self.gate.lock().await;
        let result = self.backend.create_domain(name).await;
        self.settle(&format!("Create domain {}", name), result).await
    }

    /// 刪除網域，後端會一併刪除其所有轉寄
    pub async fn delete_domain(&self, domain: &Domain) -> Result<()> {
        let _gate = self.gate.lock().await;
        let result = self.backend.delete_domain(&domain.name).await;
        self.settle(&format!("Delete domain {}", domain.name), result).await
    }

    /// 寫入網域的新增暫存
    pub async fn set_create(
        &self,
        domain: &str,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Domain> {
        let mut domains = self.domains.write().await;
        let entry = domains
            .iter_mut()
            .find(|d| d.name == domain)
            .ok_or_else(|| ForwardError::UnknownDomain {
                name: domain.to_string(),
            })?;

        entry.create = NewForward::new(from, to);
        Ok(entry.clone())
    }

    /// 修改本地轉寄的目的地址，尚未送出
    pub async fn set_target(
        &self,
        domain: &str,
        from: &str,
        to: impl Into<String>,
    ) -> Result<Forward> {
        let mut domains = self.domains.write().await;
        let entry = domains
            .iter_mut()
            .find(|d| d.name == domain)
            .ok_or_else(|| ForwardError::UnknownDomain {
                name: domain.to_string(),
            })?;
        let forward = entry
            .forward_mut(from)
            .ok_or_else(|| ForwardError::UnknownForward {
                domain: domain.to_string(),
                from: from.to_string(),
            })?;

        forward.to = to.into();
        Ok(forward.clone())
    }

    async fn refresh_locked(&self) -> Result<()> {
        tracing::debug!("Fetching domains");
        match self.backend.list_domains().await {
            Ok(fetched) => {
                let decorated = decorate(fetched);
                tracing::debug!("Fetched {} domains", decorated.len());
                *self.domains.write().await = decorated;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to fetch domains: {}", e);
                Err(e)
            }
        }
    }

    // 變更成功後重新讀取；重新讀取失敗只記錄，不影響變更本身的結果
    async fn settle(&self, action: &str, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                tracing::info!("{}: done", action);
                if self.refresh_locked().await.is_err() {
                    tracing::warn!("{}: keeping state from before the change", action);
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("{}: {}", action, e);
                Err(e)
            }
        }
    }
}
