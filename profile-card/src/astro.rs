//! Birthday derived attributes: constellation and Chinese zodiac

/// Constellation date ranges, `(name, (start month, start day), (end month, end day))`
///
/// Both ends are inclusive. 摩羯座 wraps the year end.
const CONSTELLATIONS: &[(&str, (u32, u32), (u32, u32))] = &[
    ("白羊座", (3, 21), (4, 19)),
    ("金牛座", (4, 20), (5, 20)),
    ("双子座", (5, 21), (6, 20)),
    ("巨蟹座", (6, 21), (7, 22)),
    ("狮子座", (7, 23), (8, 22)),
    ("处女座", (8, 23), (9, 22)),
    ("天秤座", (9, 23), (10, 22)),
    ("天蝎座", (10, 23), (11, 21)),
    ("射手座", (11, 22), (12, 21)),
    ("摩羯座", (12, 22), (1, 19)),
    ("水瓶座", (1, 20), (2, 18)),
    ("双鱼座", (2, 19), (3, 20)),
];

/// 2024 is the year of the dragon
const ZODIAC_BASE_YEAR: i32 = 2024;

const ZODIACS: [&str; 12] = [
    "龙🐉", "蛇🐍", "马🐎", "羊🐏", "猴🐒", "鸡🐔", "狗🐕", "猪🐖", "鼠🐀", "牛🐂", "虎🐅", "兔🐇",
];

/// Constellation (星座) for a birthday
///
/// Falls back to `星座<month>-<day>` when no range matches, which only
/// happens for months outside 1..=12.
pub fn constellation(month: u32, day: u32) -> String {
    // MMDD ordinal; wrapping ranges shift their tail by 12 months
    let ordinal = |m: u32, d: u32| m * 100 + d;

    for (name, (start_month, start_day), (end_month, end_day)) in CONSTELLATIONS {
        let start = ordinal(*start_month, *start_day);
        let mut end = ordinal(*end_month, *end_day);
        let mut probe = ordinal(month, day);

        if start_month > end_month {
            end += 1200;
            if month < *start_month {
                probe += 1200;
            }
        }

        if (start..=end).contains(&probe) {
            return name.to_string();
        }
    }

    format!("星座{}-{}", month, day)
}

/// Chinese zodiac animal (生肖) for a birthday
///
/// The zodiac year is approximated as starting on February 4 (立春), so
/// earlier dates count towards the previous year.
pub fn zodiac(year: i32, month: u32, day: u32) -> &'static str {
    let zodiac_year = if month == 1 || (month == 2 && day < 4) {
        year - 1
    } else {
        year
    };

    let index = (zodiac_year - ZODIAC_BASE_YEAR).rem_euclid(12) as usize;
    ZODIACS[index]
}
