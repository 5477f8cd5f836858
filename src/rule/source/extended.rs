//! 扩展规则库：桌面设备 / 桌面操作系统 / 桌面浏览器 / 对应版本属性
//! 与基础规则库合并使用，同名规则通过合并器追加而非覆盖

/// 桌面设备（设备识别时优先于手机/平板）
pub const DESKTOP_DEVICES: &[(&str, &str)] = &[
    ("Macintosh", "Macintosh"),
];

/// 扩展操作系统
pub const OPERATING_SYSTEMS: &[(&str, &str)] = &[
    ("Windows", "Windows"),
    ("Windows NT", "Windows NT"),
    ("OS X", "Mac OS X"),
    ("Debian", "Debian"),
    ("Ubuntu", "Ubuntu"),
    ("Macintosh", "PPC"),
    ("OpenBSD", "OpenBSD"),
    ("Linux", "Linux"),
    ("ChromeOS", "CrOS"),
];

/// 扩展浏览器（顺序即优先级：更具体的放前面）
pub const BROWSERS: &[(&str, &str)] = &[
    ("Opera Mini", "Opera Mini"),
    ("Opera", "Opera|OPR"),
    ("Edge", "Edge|Edg"),
    ("Coc Coc", "coc_coc_browser"),
    ("UCBrowser", "UCBrowser"),
    ("Vivaldi", "Vivaldi"),
    ("Chrome", "Chrome"),
    ("Firefox", "Firefox"),
    ("Safari", "Safari"),
    ("IE", r"MSIE|IEMobile|MSIEMobile|Trident/[.0-9]+"),
    ("Netscape", "Netscape"),
    ("Mozilla", "Mozilla"),
    ("WeChat", "MicroMessenger"),
];

/// 扩展版本属性
pub const PROPERTIES: &[(&str, &[&str])] = &[
    // 操作系统
    ("Windows", &["Windows NT [VER]"]),
    ("Windows NT", &["Windows NT [VER]"]),
    ("OS X", &["OS X [VER]"]),
    ("BlackBerryOS", &[r"BlackBerry[\w]+/[VER]", "BlackBerry.*Version/[VER]", "Version/[VER]"]),
    ("AndroidOS", &["Android [VER]"]),
    ("ChromeOS", &["CrOS x86_64 [VER]"]),
    // 浏览器
    ("Opera Mini", &["Opera Mini/[VER]"]),
    ("Opera", &[" OPR/[VER]", "Opera Mini/[VER]", "Version/[VER]", "Opera [VER]"]),
    ("Netscape", &["Netscape/[VER]"]),
    ("Mozilla", &["rv:[VER]"]),
    ("IE", &["IEMobile/[VER];", "IEMobile [VER]", "MSIE [VER];", "rv:[VER]"]),
    ("Edge", &["Edge/[VER]", "Edg/[VER]"]),
    ("Vivaldi", &["Vivaldi/[VER]"]),
    ("Coc Coc", &["coc_coc_browser/[VER]"]),
];
