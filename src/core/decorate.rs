use crate::domain::model::{Domain, NewForward};

/// 為讀取到的網域補上僅供本地使用的欄位。
///
/// 每個轉寄的 `to_original` 設為目前的 `to`，新增暫存則重設為
/// `{ from: "@" + name, to: "" }`。
pub fn decorate(mut domains: Vec<Domain>) -> Vec<Domain> {
    for domain in &mut domains {
        for forward in &mut domain.forwards {
            forward.to_original = forward.to.clone();
        }

        domain.create = NewForward::new(domain.address_suffix(), "");
    }

    domains
}
