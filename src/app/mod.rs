use crate::config::Command;
use crate::core::manager::ForwardManager;
use crate::core::rules::check_create;
use crate::domain::model::Domain;
use crate::domain::ports::ForwardBackend;
use crate::utils::error::{ForwardError, Result};

/// 讀取目前狀態後執行單一命令
pub async fn execute<B: ForwardBackend>(
    manager: &ForwardManager<B>,
    command: Command,
) -> Result<()> {
    manager.refresh().await?;

    match command {
        Command::List => {}
        Command::Create { domain, from, to } => {
            let current = require_domain(manager, &domain).await?;
            let from = complete_source(&current, &from);
            let domain = manager.set_create(&domain, from, to).await?;

            check_create(&domain).map_err(|violation| ForwardError::ValidationError {
                message: format!("[{}] {}", domain.name, violation),
            })?;
            manager.create_forward(&domain).await?;
        }
        Command::Update { domain, from, to } => {
            let forward = manager.set_target(&domain, &from, to).await?;
            let domain = require_domain(manager, &domain).await?;
            manager.update_forward(&domain, &forward).await?;
        }
        Command::Delete { domain, from } => {
            let domain = require_domain(manager, &domain).await?;
            let forward = domain
                .forward(&from)
                .cloned()
                .ok_or_else(|| ForwardError::UnknownForward {
                    domain: domain.name.clone(),
                    from: from.clone(),
                })?;
            manager.delete_forward(&domain, &forward).await?;
        }
        Command::AddDomain { name } => {
            manager.create_domain(&name).await?;
        }
        Command::RemoveDomain { name } => {
            let domain = require_domain(manager, &name).await?;
            manager.delete_domain(&domain).await?;
        }
    }

    Ok(())
}

/// 沒有 `@` 的輸入視為本地部分，接上預填的 `@domain`
pub fn complete_source(domain: &Domain, from: &str) -> String {
    if from.contains('@') {
        from.to_string()
    } else {
        format!("{}{}", from, domain.create.from)
    }
}

async fn require_domain<B: ForwardBackend>(
    manager: &ForwardManager<B>,
    name: &str,
) -> Result<Domain> {
    manager
        .domain(name)
        .await
        .ok_or_else(|| ForwardError::UnknownDomain {
            name: name.to_string(),
        })
}
