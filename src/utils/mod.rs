//! 通用工具：版本提取、语言排序、Header 转换
pub mod header_converter;
pub mod language;
pub mod version_extractor;

pub use self::header_converter::HeaderConverter;
pub use self::language::{LanguageEntry, LanguageRanker};
pub use self::version_extractor::{VersionExtractor, VersionKind, VersionValue};
