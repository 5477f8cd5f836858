//! Header格式转换工具
//! 统一请求头名称格式：小写、去掉 CGI 风格的 HTTP_ 前缀、下划线转连字符
//! 例如 HTTP_CLOUDFRONT_IS_DESKTOP_VIEWER 与 CloudFront-Is-Desktop-Viewer 归一为同一个键

use http::header::HeaderMap;
use rustc_hash::FxHashMap;
use tracing::warn;

/// 单次转换处理的最大 Header 数
const MAX_HEADERS: usize = 1000;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 归一化 Header 名称
    pub fn normalize_name(name: &str) -> String {
        let lower = name.trim().to_ascii_lowercase();
        let stripped = lower.strip_prefix("http_").unwrap_or(&lower);
        stripped.replace('_', "-")
    }

    /// 将 http::HeaderMap 转换为单值 FxHashMap，同名 Header 取第一个非空值
    pub fn from_header_map(header_map: &HeaderMap) -> FxHashMap<String, String> {
        let mut map: FxHashMap<String, String> = FxHashMap::default();

        for (iter_count, (key, value)) in header_map.iter().enumerate() {
            if iter_count >= MAX_HEADERS {
                warn!("Header iteration exceeded {} entries, truncating", MAX_HEADERS);
                break;
            }

            // 非 ASCII 字节按 UTF-8 宽松解码，不丢弃整个值
            let value = String::from_utf8_lossy(value.as_bytes());
            if value.is_empty() {
                continue;
            }
            map.entry(Self::normalize_name(key.as_str()))
                .or_insert_with(|| value.into_owned());
        }

        map
    }

    /// 将任意 (名称, 值) 序列转换为单值 FxHashMap，后出现的同名 Header 覆盖前者
    pub fn from_pairs<I, K, V>(pairs: I) -> FxHashMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = FxHashMap::default();
        for (iter_count, (key, value)) in pairs.into_iter().enumerate() {
            if iter_count >= MAX_HEADERS {
                warn!("Header iteration exceeded {} entries, truncating", MAX_HEADERS);
                break;
            }
            map.insert(Self::normalize_name(key.as_ref()), value.into());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    #[test]
    fn test_normalize_name() {
        assert_eq!(
            HeaderConverter::normalize_name("HTTP_CLOUDFRONT_IS_DESKTOP_VIEWER"),
            "cloudfront-is-desktop-viewer"
        );
        assert_eq!(
            HeaderConverter::normalize_name("CloudFront-Is-Desktop-Viewer"),
            "cloudfront-is-desktop-viewer"
        );
        assert_eq!(HeaderConverter::normalize_name("HTTP_ACCEPT_LANGUAGE"), "accept-language");
        assert_eq!(HeaderConverter::normalize_name("User-Agent"), "user-agent");
    }

    #[test]
    fn test_from_header_map_keeps_first_non_empty_value() {
        let mut headers = HeaderMap::new();
        headers.append(HeaderName::from_static("accept-language"), HeaderValue::from_static(""));
        headers.append(HeaderName::from_static("accept-language"), HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(HeaderName::from_static("user-agent"), HeaderValue::from_static("curl/8.0"));

        let map = HeaderConverter::from_header_map(&headers);
        assert_eq!(map.get("accept-language").map(String::as_str), Some("en-US,en;q=0.5"));
        assert_eq!(map.get("user-agent").map(String::as_str), Some("curl/8.0"));
    }

    #[test]
    fn test_from_header_map_keeps_utf8_values() {
        let ua = "Mozilla/5.0 (Linux; Android 12; 小米手机) Chrome/100.0";
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("user-agent"),
            HeaderValue::from_bytes(ua.as_bytes()).unwrap(),
        );

        let map = HeaderConverter::from_header_map(&headers);
        assert_eq!(map.get("user-agent").map(String::as_str), Some(ua));
    }

    #[test]
    fn test_from_pairs() {
        let map = HeaderConverter::from_pairs([
            ("HTTP_USER_AGENT", "Amazon CloudFront"),
            ("HTTP_CLOUDFRONT_IS_DESKTOP_VIEWER", "true"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("user-agent").map(String::as_str), Some("Amazon CloudFront"));
    }
}
