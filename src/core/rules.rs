use crate::domain::model::Domain;
use std::fmt;

/// 新增轉寄表單未通過的規則
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateViolation {
    EmptyFrom,
    EmptyTo,
    WrongDomain { suffix: String },
    Duplicate { from: String },
}

impl fmt::Display for CreateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateViolation::EmptyFrom => write!(f, "source address is empty"),
            CreateViolation::EmptyTo => write!(f, "destination address is empty"),
            CreateViolation::WrongDomain { suffix } => {
                write!(f, "source address must end with '{}'", suffix)
            }
            CreateViolation::Duplicate { from } => write!(f, "'{}' is already forwarded", from),
        }
    }
}

/// 依序檢查 `domain.create`，回傳第一個不符合的規則
pub fn check_create(domain: &Domain) -> Result<(), CreateViolation> {
    let create = &domain.create;

    if create.from.is_empty() {
        return Err(CreateViolation::EmptyFrom);
    }
    if create.to.is_empty() {
        return Err(CreateViolation::EmptyTo);
    }

    let suffix = domain.address_suffix();
    if !create.from.ends_with(&suffix) {
        return Err(CreateViolation::WrongDomain { suffix });
    }

    if domain.forwards.iter().any(|f| f.from == create.from) {
        return Err(CreateViolation::Duplicate {
            from: create.from.clone(),
        });
    }

    Ok(())
}

pub fn is_create_valid(domain: &Domain) -> bool {
    check_create(domain).is_ok()
}
