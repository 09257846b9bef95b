//! Code to label lookup tables
//!
//! The platform reports most profile attributes as small numeric or string
//! codes. Every translator falls back to a label that embeds the unknown code,
//! so an unmapped value degrades the card instead of failing it.

use crate::error::{ProfileError, ProfileResult};

/// 在线状态
const STATUS: &[(i64, &str)] = &[
    (1, "在线"),
    (2, "Q我吧"),
    (3, "离开"),
    (4, "忙碌"),
    (5, "请勿打扰"),
    (6, "隐身"),
    (7, "我的电量"),
    (8, "听歌中"),
    (9, "有亿点冷"),
    (10, "出去浪"),
    (11, "去旅行"),
    (12, "被掏空"),
    (13, "今日步数"),
    (14, "今日天气"),
    (15, "我crush了"),
    (16, "爱你"),
    (17, "恋爱中"),
    (18, "嗨到飞起"),
    (19, "水逆退散"),
    (20, "好运锦鲤"),
    (21, "元气满满"),
    (22, "一言难尽"),
    (23, "难得糊涂"),
    (24, "emo中"),
    (25, "我太难了"),
    (26, "我想开了"),
    (27, "我没事"),
    (28, "想静静"),
    (29, "悠哉哉"),
    (30, "信号弱"),
    (31, "睡觉中"),
    (32, "肝作业"),
    (33, "学习中"),
    (34, "搬砖中"),
    (35, "摸鱼中"),
    (36, "无聊中"),
    (37, "TiMi中"),
    (38, "一起元梦"),
    (39, "求星搭子"),
    (40, "熬夜中"),
    (41, "追剧中"),
];

/// 交友职业
const CAREER: &[(i64, &str)] = &[
    (1, "计算机/互联网/通信"),
    (2, "生产/工艺/制造"),
    (3, "医疗/护理/制药"),
    (4, "金融/银行/投资/保险"),
    (5, "商业/服务业/个体经营"),
    (6, "文化/广告/传媒"),
    (7, "娱乐/艺术/表演"),
    (8, "律师/法务"),
    (9, "教育/培训"),
    (10, "公务员/行政/事业单位"),
    (11, "模特"),
    (12, "空姐"),
    (13, "学生"),
    (14, "其他职业"),
];

const BLOOD_TYPE: &[(i64, &str)] = &[
    (1, "A型"),
    (2, "B型"),
    (3, "O型"),
    (4, "AB型"),
    (5, "其他血型"),
];

/// 省份/直辖市 (codes are matched as strings: "05" and "5" differ)
const PROVINCE: &[(&str, &str)] = &[
    ("0", "某省"),
    ("98", "北京"),
    ("99", "天津"),
    ("100", "上海"),
    ("101", "重庆"),
    ("05", "河北"),
    ("06", "山西"),
    ("07", "内蒙古"),
    ("08", "辽宁"),
    ("09", "吉林"),
    ("10", "黑龙江"),
    ("04", "江苏"),
    ("12", "浙江"),
    ("103", "安徽"),
    ("104", "福建"),
    ("15", "江西"),
    ("106", "山东"),
    ("107", "河南"),
    ("108", "湖北"),
    ("109", "湖南"),
    ("20", "广东"),
    ("105", "广西"),
    ("22", "海南"),
    ("102", "四川"),
    ("24", "贵州"),
    ("25", "云南"),
    ("26", "西藏"),
    ("27", "陕西"),
    ("28", "甘肃"),
    ("29", "青海"),
    ("30", "宁夏"),
    ("31", "新疆"),
];

const COUNTRY: &[(&str, &str)] = &[
    ("49", "中国"),
    ("250", "俄罗斯"),
    ("222", "特里尔"),
    ("217", "法国"),
    ("233", "美国"),
];

const CHINA: &str = "49";

fn find(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn find_code(table: &[(i64, &'static str)], code: i64) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
}

/// Online status label, e.g. `1` → `在线`
pub fn get_status(code: i64) -> String {
    find_code(STATUS, code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("状态{}", code))
}

/// Career label for `makeFriendCareer`
pub fn get_career(code: i64) -> String {
    find_code(CAREER, code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("职业{}", code))
}

/// Blood type label for `kBloodType`
pub fn get_blood_type(code: i64) -> String {
    find_code(BLOOD_TYPE, code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("血型{}", code))
}

/// Province label for the middle part of a home town code
pub fn get_province(code: &str) -> String {
    find(PROVINCE, code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}省", code))
}

/// Country label for the first part of a home town code
pub fn get_country(code: &str) -> String {
    find(COUNTRY, code)
        .map(str::to_string)
        .unwrap_or_else(|| format!("外国{}", code))
}

/// Parse a `country-province-city` home town code
///
/// Chinese home towns render as `中国-<province>(<code>)`, or `中国-<code>省`
/// for provinces missing from the table. Everything else renders as the
/// country alone. The city part is not mapped.
///
/// # Errors
///
/// Returns [`ProfileError::MalformedHomeTown`] unless the code has exactly
/// three `-`-separated parts.
pub fn parse_home_town(code: &str) -> ProfileResult<String> {
    let parts: Vec<&str> = code.split('-').collect();
    let [country_code, province_code, _] = parts.as_slice() else {
        return Err(ProfileError::MalformedHomeTown(code.to_string()));
    };

    let country = get_country(country_code);
    if *country_code == CHINA {
        // Raw province code always stays on the label
        match find(PROVINCE, province_code) {
            Some(province) => Ok(format!("{}-{}({})", country, province, province_code)),
            None => Ok(format!("{}-{}", country, get_province(province_code))),
        }
    } else {
        Ok(country)
    }
}
