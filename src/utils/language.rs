//! Accept-Language 排序工具
//! 仅做简单的优先级排序，不处理语言范围通配符

/// 语言条目：(小写语言标签, 权重)
pub type LanguageEntry = (String, f64);

/// 语言排序工具
pub struct LanguageRanker;

impl LanguageRanker {
    /// 解析为语言条目，重复标签后者覆盖前者（位置保持首次出现处）
    pub fn parse(header: &str) -> Vec<LanguageEntry> {
        let mut entries: Vec<LanguageEntry> = Vec::new();

        for piece in header.split(',') {
            let mut parts = piece.split(';');
            let language = parts.next().unwrap_or("").trim().to_lowercase();
            if language.is_empty() {
                continue;
            }
            let priority = Self::parse_quality(parts.next());

            match entries.iter_mut().find(|(tag, _)| *tag == language) {
                Some(entry) => entry.1 = priority,
                None => entries.push((language, priority)),
            }
        }

        entries
    }

    /// 按权重降序返回语言标签
    pub fn rank(header: Option<&str>) -> Vec<String> {
        let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
            return Vec::new();
        };

        let mut entries = Self::parse(header);
        // 稳定排序，同权重保持出现顺序
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.into_iter().map(|(tag, _)| tag).collect()
    }

    /// 缺省权重 1.0；无法解析的权重记为 0
    fn parse_quality(raw: Option<&str>) -> f64 {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return 1.0;
        };
        let value = raw.strip_prefix("q=").unwrap_or(raw).trim();
        leading_float(value)
    }
}

/// 解析前导数值部分，如 "0.8abc" -> 0.8，无数值返回 0
fn leading_float(s: &str) -> f64 {
    let mut seen_dot = false;
    let end = s
        .char_indices()
        .find(|&(i, c)| {
            let accepted = c.is_ascii_digit()
                || (c == '.' && !seen_dot)
                || (i == 0 && (c == '+' || c == '-'));
            if c == '.' {
                seen_dot = true;
            }
            !accepted
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    s[..end].parse().unwrap_or(0.0)
}
