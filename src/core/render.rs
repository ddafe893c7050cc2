use crate::domain::model::Domain;

/// 以純文字列出網域與轉寄，未儲存的修改以 `*` 標示
pub fn render_domains(domains: &[Domain]) -> String {
    if domains.is_empty() {
        return "No domains configured.\n".to_string();
    }

    let mut lines = Vec::new();
    for domain in domains {
        let count = domain.forwards.len();
        let noun = if count == 1 { "forward" } else { "forwards" };
        lines.push(format!("{} ({} {})", domain.name, count, noun));

        // 以字元數對齊，非 ASCII 地址也能排整齊
        let width = domain
            .forwards
            .iter()
            .map(|f| f.from.chars().count())
            .max()
            .unwrap_or(0);

        for forward in &domain.forwards {
            let marker = if forward.is_modified() { '*' } else { ' ' };
            lines.push(format!(
                " {} {:<width$}  ->  {}",
                marker,
                forward.from,
                forward.to,
                width = width
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
