//! 基础规则库：移动设备 / 平板 / 移动操作系统 / 移动浏览器 / 版本属性
//! 全部正则均兼容 regex crate（不含环视语法），匹配时统一附加 (?is)

/// 手机设备
pub const PHONE_DEVICES: &[(&str, &str)] = &[
    ("iPhone", r"\biPhone\b|\biPod\b"),
    ("BlackBerry", r"BlackBerry|\bBB10\b|rim[0-9]+|\b(BBA100|BBB100|BBD100|BBE100|BBF100|STH100)\b-[0-9]+"),
    ("Pixel", r"; \bPixel\b"),
    ("HTC", r"HTC|HTC.*(Sensation|Evo|Vision|Explorer|6800|8100|8900|A7272|S510e|C110e|Legend|Desire|T8282)|APX515CKT|Qtek9090|APA9292KT|HD_mini|Sensation.*Z710e|PG86100|Z715e|Desire.*(A8181|HD)|ADR6200|ADR6400L|ADR6425|001HT|Inspire 4G|Android.*\bEVO\b|T-Mobile G1|Z520m"),
    ("Nexus", r"Nexus One|Nexus S|Galaxy.*Nexus|Android.*Nexus.*Mobile|Nexus 4|Nexus 5|Nexus 6"),
    ("Dell", r"Dell[;]? (Streak|Aero|Venue|Venue Pro|Flash|Smoke|Mini 3iX)|XCD28|XCD35|\b001DL\b|\b101DL\b|\bGS01\b"),
    ("Motorola", r"Motorola|DROIDX|DROID BIONIC|\bDroid\b.*Build|Android.*Xoom|HRI39|MOT-|A1260|A1680|A555|A853|A855|A953|A955|A956|Motorola.*ELECTRIFY|Motorola.*i1|i867|i940|MB200|MB300|MB501|MB502|MB508|MB511|MB520|MB525|MB526|MB611|MB612|MB632|MB810|MB855|MB860|MB861|MB865|MB870|ME501|ME502|ME511|ME525|ME600|ME632|ME722|ME811|ME860|ME863|ME865|MT620|MT710|MT716|MT720|MT810|MT870|MT917|WX435|WX445|XT300|XT301|XT311|XT316|XT317|XT319|XT320|XT390|XT502|XT530|XT531|XT532|XT535|XT603|XT610|XT611|XT615|XT681|XT701|XT702|XT711|XT720|XT800|XT806|XT860|XT862|XT875|XT882|XT883|XT894|XT901|XT907|XT909|XT910|XT912|XT928|XT926|XT915|XT919|XT925|XT1021|\bMoto E\b|XT1068|XT1092|XT1052"),
    ("Samsung", r"\bSamsung\b|SM-G950F|SM-G955F|SM-G9250|GT-19300|SGH-I337|BGT-S5230|GT-B2100|GT-B2700|GT-B2710|GT-B3210|GT-B3310|GT-B3410|GT-B3730|GT-B3740|GT-B5510|GT-B5512|GT-B5722|GT-B6520|GT-B7300|GT-B7320|GT-B7330|GT-B7350|GT-B7510|GT-B7722|GT-B7800|GT-C3010|GT-C3011|GT-C3060|GT-C3200|GT-C3212|GT-C3300|GT-C3310|GT-C3322|GT-I9000|GT-I9001|GT-I9003|GT-I9070|GT-I9082|GT-I9100|GT-I9300|GT-I9500|GT-I9505|GT-N7000|GT-N7100|GT-S5830|SCH-I535|SCH-I545|SGH-T999|SM-G900|SM-G920|SM-G930|SM-G960|SM-G970|SM-G980|SM-G991|SM-G998|SM-N9|SM-A[0-9]{3}|SM-S9[0-9]{2}"),
    ("LG", r"\bLG\b;|LG[- ]?(C800|C900|E400|E610|E900|E-900|F160|F180K|F180L|F180S|730|855|L160|LS740|LS840|LS970|LU6200|MS690|MS695|MS770|MS840|MS870|MS910|P500|P700|P705|VM696|AS680|AS695|AX840|C729|E970|GS505|272|C395|E739BK|E960|L55C|L75C|LS696|LS860|P769BK|P350|P509|P870|UN272|US730|VS840|VS950|LN272|LN510|LS670|LS855|LW690|MN270|MN510|P769|P930|UN200|UN270|UN510|UN610|US670|US740|US760|UX265|UX840|VN271|VN530|VS660|VS700|VS740|VS750|VS910|VS920|VS930|VX9200|VX11000|AX840A|LW770|P506|P925|P999|E612|D955|D802|MS323|M257)|LM-G710"),
    ("Sony", r"SonyST|SonyLT|SonyEricsson|SonyEricssonLT15iv|LT18i|E10i|LT28h|LT26w|SonyEricssonMT27i|C5303|C6902|C6903|C6906|C6943|D2533|SOV34|601SO|F8332"),
    ("Asus", r"Asus.*Galaxy|PadFone.*Mobile"),
    ("Xiaomi", r"xiaomi|POCOPHONE F1|\bMI 8\b|Redmi Note 9S|Redmi Note 5A Prime|N2G47H|M2001J2G|M2001J2I|M1805E10A|M2004J11G|M1902F1G|M2002J9G|M2004J19G|M2003J6A1G"),
    ("NokiaLumia", r"Lumia [0-9]{3,4}"),
    ("Micromax", r"Micromax.*\b(A210|A92|A88|A72|A111|A110Q|A115|A116|A110|A90S|A26|A51|A35|A54|A25|A27|A89|A68|A65|A57|A90)\b"),
    ("Palm", r"PalmSource|Palm"),
    ("Vertu", r"Vertu|Vertu.*Ltd|Vertu.*Ascent|Vertu.*Ayxta|Vertu.*Constellation(F|Quest)?|Vertu.*Monika|Vertu.*Signature"),
    ("Pantech", r"PANTECH|IM-A850S|IM-A840S|IM-A830L|IM-A830K|IM-A830S|IM-A820L|IM-A810K|IM-A810S|IM-A800S|IM-T100K|IM-A725L|IM-A780L|IM-A775C|IM-A770K|IM-A760S|IM-A750K|IM-A740S|IM-A730S|IM-A720L|IM-A710K|IM-A690L|IM-A690S|IM-A650S|IM-A630K|IM-A600S|VEGA PTL21|PT003|P8010|ADR910L|P6030|P6020|P9070|P4100|P9060|P5000|CDM8992|TXT8045|ADR8995|IS11PT|P2030|P6010|P8000|PT002|IS06|CDM8999|P9050|PT001|TXT8040|P2020|P9020|P2000|P7040|P7000|C790"),
    ("Fly", r"IQ230|IQ444|IQ450|IQ440|IQ442|IQ441|IQ245|IQ256|IQ236|IQ255|IQ235|IQ245|IQ275|IQ240|IQ285|IQ280|IQ270|IQ260|IQ250"),
    ("Wiko", r"KITE 4G|HIGHWAY|GETAWAY|STAIRWAY|DARKSIDE|DARKFULL|DARKNIGHT|DARKMOON|SLIDE|WAX 4G|RAINBOW|BLOOM|SUNSET|GOA(?-i:[^a-z])|LENNY|BARRY|IGGY|OZZY|CINK FIVE|CINK PEAX|CINK PEAX 2|CINK SLIM|CINK SLIM 2|CINK +|CINK KING|CINK PEAX|CINK SLIM|SUBLIM"),
    ("iMobile", r"i-mobile (IQ|i-STYLE|idea|ZAA|Hitz)"),
    ("SimValley", r"\b(SP-80|XT-930|SX-340|XT-930|SX-310|SP-360|SP60|SPT-800|SP-120|SPT-800|SP-140|SPX-5|SPX-8|SP-100|SPX-8|SPX-12)\b"),
    ("Wolfgang", r"AT-B24D|AT-AS50HD|AT-AS40W|AT-AS55HD|AT-AS45q2|AT-B26D|AT-AS50Q"),
    ("Alcatel", r"Alcatel"),
    ("Nintendo", r"Nintendo (3DS|Switch)"),
    ("Amoi", r"Amoi"),
    ("INQ", r"INQ"),
    ("OnePlus", r"ONEPLUS"),
    ("GenericPhone", r"Tapatalk|PDA;|SAGEM|\bmmp\b|pocket|\bpsp\b|symbian|Smartphone|smartfone|treo|up.browser|up.link|vodafone|\bwap\b|nokia|Series40|Series60|S60|SonyEricsson|N900|MAUI.*WAP.*Browser"),
];

/// 平板设备
pub const TABLET_DEVICES: &[(&str, &str)] = &[
    ("iPad", r"iPad|iPad.*Mobile"),
    ("NexusTablet", r"Android.*Nexus[\s]+(7|9|10)"),
    ("GoogleTablet", r"Android.*Pixel C"),
    ("SamsungTablet", r"SAMSUNG.*Tablet|Galaxy.*Tab|SC-01C|GT-P1000|GT-P1003|GT-P1010|GT-P3105|GT-P6210|GT-P6800|GT-P6810|GT-P7100|GT-P7300|GT-P7310|GT-P7500|GT-P7510|SCH-I800|SCH-I815|SCH-I905|SGH-I957|SGH-I987|SGH-T849|SGH-T859|SGH-T869|SPH-P100|GT-P3100|GT-P3108|GT-P3110|GT-P5100|GT-P5110|GT-P6200|GT-P7320|GT-P7511|GT-N8000|GT-P8510|SGH-I497|SPH-P500|SGH-T779|SCH-I705|SCH-I915|GT-N8013|GT-P3113|GT-P5113|GT-P8110|GT-N8010|GT-N8005|GT-N8020|GT-P1013|GT-P6201|GT-P7501|GT-N5100|GT-N5105|GT-N5110|SM-T[0-9]{3}[A-Z]?|SM-P[0-9]{3}|SM-X[0-9]{3}"),
    ("Kindle", r"Kindle|Silk.*Accelerated|Android.*\b(KFOT|KFTT|KFJWI|KFJWA|KFOTE|KFSOWI|KFTHWI|KFTHWA|KFAPWI|KFAPWA|WFJWAE|KFSAWA|KFSAWI|KFASWI|KFARWI|KFFOWI|KFGIWI|KFMEWI)\b"),
    ("SurfaceTablet", r"Windows NT [0-9.]+; ARM;.*(Tablet|ARMBJS)"),
    ("HPTablet", r"HP Slate (7|8|10)|HP ElitePad 900|hp-tablet|EliteBook.*Touch|HP 8|Slate 21|HP SlateBook 10"),
    ("AsusTablet", r"Transformer|TF101|TF101G|TF300T|TF300TG|TF300TL|TF700T|TF700KL|TF701T|TF810C|ME171|ME301T|ME302C|ME371MG|ME370T|ME372MG|ME172V|ME173X|ME400C|Slider SL101|\bK00F\b|\bK00C\b|\bK00E\b|\bK00L\b|TX201LA|ME176C|ME102A|\bM80TA\b|ME372CL|ME560CG|ME372CG|ME302KL| K010 | K011 | K017 | K01E |ME572C|ME103K|ME170C|ME171C|\bME70C\b|ME581C|ME581CL|ME8510C|ME181C|P01Y|PO1MA|P01Z|\bP027\b|\bP024\b|\bP00C\b"),
    ("BlackBerryTablet", r"PlayBook|RIM Tablet"),
    ("HTCtablet", r"HTC_Flyer_P512|HTC Flyer|HTC Jetstream|HTC-P715a|HTC EVO View 4G|PG41200|PG09410"),
    ("MotorolaTablet", r"xoom|sholest|MZ615|MZ605|MZ505|MZ601|MZ602|MZ603|MZ604|MZ606|MZ607|MZ608|MZ609|MZ615|MZ616|MZ617"),
    ("NookTablet", r"Android.*Nook|NookColor|nook browser|BNRV200|BNRV200A|BNTV250|BNTV250A|BNTV400|BNTV600|LogicPD Zoom2"),
    ("AcerTablet", r"Android.*; \b(A100|A101|A110|A200|A210|A211|A500|A501|A510|A511|A700|A701|W500|W500P|W501|W501P|W510|W511|W700|G100|G100W|B1-A71|B1-710|B1-711|A1-810|A1-811|A1-830)\b|W3-810|\bA3-A10\b|\bA3-A11\b|\bA3-A20\b|\bA3-A30|A3-A40"),
    ("ToshibaTablet", r"Android.*(AT100|AT105|AT200|AT205|AT270|AT275|AT300|AT305|AT1S5|AT500|AT570|AT700|AT830)|TOSHIBA.*FOLIO"),
    ("LGTablet", r"\bL-06C|LG-V909|LG-V900|LG-V700|LG-V510|LG-V500|LG-V410|LG-V400|LG-VK810\b"),
    ("LenovoTablet", r"Lenovo TAB|Idea(Tab|Pad)( A1|A10| K1|)|ThinkPad([ ]+)?Tablet|YT3-850M|YT3-X90L|YT3-X90F|YT3-X90X|Lenovo.*(S2109|S2110|S5000|S6000|K3011|A3000|A3500|A1000|A2107|A2109|A1107|A5500|A7600|B6000|B8000|B8080)(-|)(FL|F|HV|H|)|TB-X103F|TB-X304X|TB-X304F|TB-X304L|TB-X505F|TB-X505L|TB-X505X|TB-X605F|TB-X605L|TB-8703F|TB-8703X|TB-8703N|TB-8704N|TB-8704F|TB-8704X|TB-8704V|TB-7304F|TB-7304I|TB-7304X|Tab2A7-10F|Tab2A7-20F|TB2-X30L|YT3-X50L|YT3-X50F|YT3-X50M|YT-X705F|YT-X703F|YT-X703L|YT-X705L|YT-X705X|TB2-X30F|TB2-X30M|A2107A-F|A2107A-H|TB3-730F|TB3-730M|TB3-730X|TB-7504F|TB-7504X|TB-X704F|TB-X104F|TB3-X70F|TB-X705F|TB-8504F|TB3-X70L|TB3-710F|TB-X704L"),
    ("HuaweiTablet", r"MediaPad|MediaPad 7 Youth|IDEOS S7|S7-201c|S7-202u|S7-101|S7-103|S7-104|S7-105|S7-106|S7-201|S7-Slim|M2-A01L|BAH-L09|BAH-W09|AGS-L09|CMR-AL19"),
    ("GenericTablet", r"Android.*\b97D\b|Android.*\bTablet\b|BNTV250A|MID-WCDMA|LogicPD Zoom2|\bA7EB\b|CatNova8|A1_07|CT704|CT1002|\bM721\b|rk30sdk|\bEVOTAB\b|M758A|ET904|ALUMIUM10|Smartfren Tab|Endeavour 1010|Tablet-PC-4|Tagi Tab|\bM6pro\b|CT1020W|arc 10HD|\bTP750\b|\bQTAQZ3\b|WVT101|TM1088|KT107"),
];

/// 移动操作系统
pub const OPERATING_SYSTEMS: &[(&str, &str)] = &[
    ("AndroidOS", r"Android"),
    ("BlackBerryOS", r"blackberry|\bBB10\b|rim tablet os"),
    ("PalmOS", r"PalmOS|avantgo|blazer|elaine|hiptop|palm|plucker|xiino"),
    ("SymbianOS", r"Symbian|SymbOS|Series60|Series40|SYB-[0-9]+|\bS60\b"),
    ("WindowsMobileOS", r"Windows CE.*(PPC|Smartphone|Mobile|[0-9]{3}x[0-9]{3})|Windows Mobile|Windows Phone [0-9.]+|WCE;"),
    ("WindowsPhoneOS", r"Windows Phone 10.0|Windows Phone 8.1|Windows Phone 8.0|Windows Phone OS|XBLWP7|ZuneWP7|Windows NT 6.[23]; ARM;"),
    ("iOS", r"\biPhone.*Mobile|\biPod|\biPad|AppleCoreMedia"),
    ("iPadOS", r"CPU OS 13"),
    ("SailfishOS", r"Sailfish"),
    ("MeeGoOS", r"MeeGo"),
    ("MaemoOS", r"Maemo"),
    ("JavaOS", r"J2ME/|\bMIDP\b|\bCLDC\b"),
    ("webOS", r"webOS|hpwOS"),
    ("badaOS", r"\bBada\b"),
    ("BREWOS", r"BREW"),
];

/// 移动浏览器
pub const BROWSERS: &[(&str, &str)] = &[
    ("Chrome", r"\bCrMo\b|CriOS|Android.*Chrome/[.0-9]* (Mobile)?"),
    ("Dolfin", r"\bDolfin\b"),
    ("Opera", r"Opera.*Mini|Opera.*Mobi|Android.*Opera|Mobile.*OPR/[0-9.]+$|Coast/[0-9.]+"),
    ("Skyfire", r"Skyfire"),
    ("Edge", r"EdgiOS|Mobile Safari/[.0-9]* Edge"),
    ("IE", r"IEMobile|MSIEMobile"),
    ("Firefox", r"fennec|firefox.*maemo|(Mobile|Tablet).*Firefox|Firefox.*Mobile|FxiOS"),
    ("Bolt", r"bolt"),
    ("TeaShark", r"teashark"),
    ("Blazer", r"Blazer"),
    ("Safari", r"Version.*Mobile.*Safari|Safari.*Mobile|MobileSafari"),
    ("WeChat", r"\bMicroMessenger\b"),
    ("UCBrowser", r"UC.*Browser|UCWEB"),
    ("baiduboxapp", r"baiduboxapp"),
    ("baidubrowser", r"baidubrowser"),
    ("DiigoBrowser", r"DiigoBrowser"),
    ("Mercury", r"\bMercury\b"),
    ("ObigoBrowser", r"Obigo"),
    ("NetFront", r"NF-Browser"),
    ("GenericBrowser", r"NokiaBrowser|OviBrowser|OneBrowser|TwonkyBeamBrowser|SEMC.*Browser|FlyFlow|Minimo|NetFront|Novarra-Vision|MQQBrowser|MicroMessenger"),
    ("PaleMoon", r"Android.*PaleMoon|Mobile.*PaleMoon"),
];

/// 版本属性模板，[VER] 为版本号占位符
pub const PROPERTIES: &[(&str, &[&str])] = &[
    // 设备
    ("Mobile", &["Mobile/[VER]"]),
    ("Build", &["Build/[VER]"]),
    ("Version", &["Version/[VER]"]),
    ("VendorID", &["VendorID/[VER]"]),
    ("iPad", &["iPad.*CPU[a-z ]+[VER]"]),
    ("iPhone", &["iPhone.*CPU[a-z ]+[VER]"]),
    ("iPod", &["iPod.*CPU[a-z ]+[VER]"]),
    ("Kindle", &["Kindle/[VER]"]),
    // 浏览器
    ("Chrome", &["Chrome/[VER]", "CriOS/[VER]", "CrMo/[VER]"]),
    ("Coast", &["Coast/[VER]"]),
    ("Dolfin", &["Dolfin/[VER]"]),
    ("Firefox", &["Firefox/[VER]", "FxiOS/[VER]"]),
    ("Fennec", &["Fennec/[VER]"]),
    ("Edge", &["Edge/[VER]"]),
    ("IE", &["IEMobile/[VER];", "IEMobile [VER]", "MSIE [VER];", "Trident/[0-9.]+;.*rv:[VER]"]),
    ("NetFront", &["NetFront/[VER]"]),
    ("NokiaBrowser", &["NokiaBrowser/[VER]"]),
    ("Opera", &[" OPR/[VER]", "Opera Mini/[VER]", "Version/[VER]"]),
    ("Opera Mini", &["Opera Mini/[VER]"]),
    ("Opera Mobi", &["Version/[VER]"]),
    ("UCBrowser", &["UCWEB[VER]", "UC.*Browser/[VER]"]),
    ("MQQBrowser", &["MQQBrowser/[VER]"]),
    ("MicroMessenger", &["MicroMessenger/[VER]"]),
    ("baiduboxapp", &["baiduboxapp/[VER]"]),
    ("baidubrowser", &["baidubrowser/[VER]"]),
    ("SamsungBrowser", &["SamsungBrowser/[VER]"]),
    ("Iron", &["Iron/[VER]"]),
    ("Safari", &["Version/[VER]", "Safari/[VER]"]),
    ("Skyfire", &["Skyfire/[VER]"]),
    ("Tizen", &["Tizen/[VER]"]),
    ("Webkit", &["webkit[ /][VER]"]),
    ("PaleMoon", &["PaleMoon/[VER]"]),
    ("SailfishBrowser", &["SailfishBrowser/[VER]"]),
    // 引擎
    ("Gecko", &["Gecko/[VER]"]),
    ("Trident", &["Trident/[VER]"]),
    ("Presto", &["Presto/[VER]"]),
    ("Goanna", &["Goanna/[VER]"]),
    // 操作系统
    ("iOS", &[r" \bi?OS\b [VER][ ;]{1}"]),
    ("Android", &["Android [VER]"]),
    ("Sailfish", &["Sailfish [VER]"]),
    ("BlackBerry", &[r"BlackBerry[\w]+/[VER]", "BlackBerry.*Version/[VER]", "Version/[VER]"]),
    ("BREW", &["BREW [VER]"]),
    ("Java", &["Java/[VER]"]),
    ("Windows Phone OS", &["Windows Phone OS [VER]", "Windows Phone [VER]"]),
    ("Windows Phone", &["Windows Phone [VER]"]),
    ("Windows CE", &["Windows CE/[VER]"]),
    ("Windows NT", &["Windows NT [VER]"]),
    ("Symbian", &["SymbianOS/[VER]", "Symbian/[VER]"]),
    ("webOS", &["webOS/[VER]", "hpwOS/[VER];"]),
];

/// 移动网关请求头：值列表为空时只要求该头存在，否则要求值包含其中任一片段
pub const MOBILE_HEADERS: &[(&str, &[&str])] = &[
    (
        "accept",
        &[
            "application/x-obml2d",
            "application/vnd.rim.html",
            "text/vnd.wap.wml",
            "application/vnd.wap.xhtml+xml",
        ],
    ),
    ("x-wap-profile", &[]),
    ("x-wap-clientid", &[]),
    ("wap-connection", &[]),
    ("profile", &[]),
    // Opera Mini
    ("x-operamini-phone-ua", &[]),
    ("x-nokia-gateway-id", &[]),
    ("x-orange-id", &[]),
    ("x-vodafone-3gpdpcontext", &[]),
    ("x-huawei-userid", &[]),
    // Windows Mobile
    ("ua-os", &[]),
    ("x-mobile-gateway", &[]),
    ("x-att-deviceid", &[]),
    ("ua-cpu", &["ARM"]),
];

/// 可能携带原始 User-Agent 的请求头（代理 / 转码网关会改写 user-agent）
pub const USER_AGENT_HEADERS: &[&str] = &[
    "user-agent",
    "x-operamini-phone-ua",
    "x-device-user-agent",
    "x-original-user-agent",
    "x-skyfire-phone",
    "x-bolt-phone-ua",
    "device-stock-ua",
    "x-ucbrowser-device-ua",
];
