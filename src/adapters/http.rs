use crate::domain::model::{Domain, ForwardTarget, NewDomain, NewForward};
use crate::domain::ports::{ConfigProvider, ForwardBackend};
use crate::utils::error::{ForwardError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

/// 透過 REST API 存取轉寄規則
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base = Url::parse(config.api_endpoint())?;
        if base.cannot_be_a_base() {
            return Err(ForwardError::InvalidConfigValueError {
                field: "server.endpoint".to_string(),
                value: config.api_endpoint().to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client, base })
    }

    /// 在 base 路徑後接上各段並保留結尾斜線，每段都會做百分比編碼
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ForwardError::ConfigError {
                message: format!("endpoint '{}' cannot carry a path", self.base),
            })?;
            path.pop_if_empty().extend(segments).push("");
        }
        Ok(url)
    }

    fn domains_url(&self) -> Result<Url> {
        self.endpoint(&["api", "domains"])
    }

    fn domain_url(&self, domain: &str) -> Result<Url> {
        self.endpoint(&["api", "domains", domain])
    }

    fn forwards_url(&self, domain: &str) -> Result<Url> {
        self.endpoint(&["api", "domains", domain, "forwards"])
    }

    fn forward_url(&self, domain: &str, from: &str) -> Result<Url> {
        self.endpoint(&["api", "domains", domain, "forwards", from])
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);
        let request = build(self.client.request(method.clone(), url.clone()));
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("{} {} failed with status {}", method, url, status);
        Err(ForwardError::StatusError {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ForwardBackend for HttpBackend {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let url = self.domains_url()?;
        let response = self.send(Method::GET, url, |r| r).await?;
        let domains: Vec<Domain> = response.json().await?;
        Ok(domains)
    }

    async fn create_forward(&self, domain: &str, forward: &NewForward) -> Result<()> {
        let url = self.forwards_url(domain)?;
        self.send(Method::POST, url, |r| r.json(forward)).await?;
        Ok(())
    }

    async fn update_forward(&self, domain: &str, from: &str, to: &str) -> Result<()> {
        let url = self.forward_url(domain, from)?;
        let body = ForwardTarget { to: to.to_string() };
        self.send(Method::PUT, url, |r| r.json(&body)).await?;
        Ok(())
    }

    async fn delete_forward(&self, domain: &str, from: &str) -> Result<()> {
        let url = self.forward_url(domain, from)?;
        self.send(Method::DELETE, url, |r| r).await?;
        Ok(())
    }

    async fn create_domain(&self, name: &str) -> Result<()> {
        let url = self.domains_url()?;
        let body = NewDomain {
            name: name.to_string(),
        };
        self.send(Method::POST, url, |r| r.json(&body)).await?;
        Ok(())
    }

    async fn delete_domain(&self, name: &str) -> Result<()> {
        let url = self.domain_url(name)?;
        self.send(Method::DELETE, url, |r| r).await?;
        Ok(())
    }
}
