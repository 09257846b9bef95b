// profile-card/tests/profile_card.rs
// 资料卡渲染集成测试

use profile_card::{
    CardConfig, MembershipProfile, ProfileCardRenderer, ProfileError, UserProfile, transform,
};
use serde_json::{Value, json};

fn full_user() -> Value {
    json!({
        "uin": 10001,
        "nick": "小明",
        "sex": "male",
        "status": 10,
        "birthday_year": 2000,
        "birthday_month": 12,
        "birthday_day": 25,
        "age": 24,
        "phoneNum": "13800000000",
        "eMail": "xiaoming@example.com",
        "postCode": "100000",
        "country": "中国",
        "city": "北京",
        "homeTown": "49-98-0",
        "address": "朝阳区",
        "kBloodType": 3,
        "makeFriendCareer": 13,
        "remark": "同学",
        "labels": ["猫", "游戏"],
        "is_vip": true,
        "is_years_vip": false,
        "vip_level": 5,
        "login_days": 30,
        "qqLevel": 85,
        "reg_time": 1_600_000_000,
        "long_nick": "今天也要好好学习",
    })
}

fn full_member() -> Value {
    json!({
        "card": "班长",
        "title": "活跃成员",
        "level": 12,
        "join_time": 1_700_000_000,
        "unfriendly": false,
        "is_robot": false,
    })
}

fn render(user: Value, member: Value) -> Vec<String> {
    let user = UserProfile::from_value(user).unwrap();
    let member = MembershipProfile::from_value(member).unwrap();
    ProfileCardRenderer::default()
        .render(&user, &member)
        .unwrap()
        .into_lines()
}

#[test]
fn test_full_card_line_order() {
    let lines = render(full_user(), full_member());

    assert_eq!(
        lines,
        vec![
            "Q号：10001",
            "昵称：小明",
            "群昵称：班长",
            "头衔：活跃成员",
            "状态：出去浪",
            "性别：男孩纸",
            "诞辰：2000-12-25",
            "星座：摩羯座",
            "生肖：龙🐉",
            "年龄：24岁",
            "电话：13800000000",
            "邮箱：xiaoming@example.com",
            "邮编：100000",
            "现居：中国-北京",
            "来自：中国-北京(98)",
            "地址：朝阳区",
            "血型：O型",
            "职业：学生",
            "备注：同学",
            "标签：猫、游戏",
            "VIP：已开",
            "VIP等级：5",
            "连续登录天数：30",
            "群等级：12级",
            "加群时间：2023-11-15",
            "QQ等级：👑☀️🌙⭐(85级)",
            "注册时间：2020年",
            "签名：今天也要好好学习",
        ]
    );
}

#[test]
fn test_transform_joins_lines() {
    let user = UserProfile::from_value(full_user()).unwrap();
    let member = MembershipProfile::from_value(full_member()).unwrap();

    let text = transform(&user, &member).unwrap();
    assert!(text.starts_with("Q号：10001\n昵称：小明\n"));
    assert_eq!(text, render(full_user(), full_member()).join("\n"));
}

#[test]
fn test_city_without_country_is_dropped() {
    let lines = render(json!({ "nick": "小红", "city": "北京" }), json!({}));
    assert_eq!(lines, vec!["昵称：小红"]);
}

#[test]
fn test_city_never_merges_into_other_lines() {
    let lines = render(
        json!({ "postCode": "100000", "city": "北京", "address": "朝阳区" }),
        json!({}),
    );
    assert_eq!(lines, vec!["邮编：100000", "地址：朝阳区"]);
}

#[test]
fn test_country_without_city() {
    let lines = render(json!({ "country": "中国", "city": "" }), json!({}));
    assert_eq!(lines, vec!["现居：中国"]);
}

#[test]
fn test_placeholders_are_absent() {
    let lines = render(
        json!({ "phoneNum": "-", "homeTown": "0-0-0", "nick": "小明" }),
        json!({}),
    );
    assert_eq!(lines, vec!["昵称：小明"]);
}

#[test]
fn test_zero_numeric_fields_are_absent() {
    let lines = render(
        json!({
            "makeFriendCareer": 0,
            "vip_level": 0,
            "login_days": "0",
            "kBloodType": 0,
            "qqLevel": 0,
            "reg_time": 0,
            "status": 0,
        }),
        json!({ "level": 0, "join_time": 0 }),
    );
    assert!(lines.is_empty(), "unexpected lines: {:?}", lines);
}

#[test]
fn test_hidden_status() {
    let lines = render(json!({ "status": 20 }), json!({}));
    assert!(lines.is_empty());

    let lines = render(json!({ "status": 999 }), json!({}));
    assert_eq!(lines, vec!["状态：状态999"]);
}

#[test]
fn test_age_bounds() {
    assert!(render(json!({ "age": 3 }), json!({})).is_empty());
    assert!(render(json!({ "age": 60 }), json!({})).is_empty());
    assert_eq!(render(json!({ "age": 4 }), json!({})), vec!["年龄：4岁"]);
    assert_eq!(render(json!({ "age": 59 }), json!({})), vec!["年龄：59岁"]);
}

#[test]
fn test_partial_birthday_is_skipped() {
    let lines = render(
        json!({ "birthday_year": 1999, "birthday_month": 3, "birthday_day": 0 }),
        json!({}),
    );
    assert!(lines.is_empty());
}

#[test]
fn test_birthday_before_feb_4() {
    let lines = render(
        json!({ "birthday_year": 2025, "birthday_month": 1, "birthday_day": 15 }),
        json!({}),
    );
    assert_eq!(lines, vec!["诞辰：2025-1-15", "星座：摩羯座", "生肖：龙🐉"]);
}

#[test]
fn test_sex_other_is_absent() {
    assert!(render(json!({ "sex": "unknown" }), json!({})).is_empty());
    assert_eq!(render(json!({ "sex": "female" }), json!({})), vec!["性别：女孩纸"]);
}

#[test]
fn test_group_flags() {
    let lines = render(json!({}), json!({ "unfriendly": true, "is_robot": 1 }));
    assert_eq!(lines, vec!["不良记录：有", "是否为bot: 是"]);
}

#[test]
fn test_long_signature_wraps() {
    let signature: String = ('a'..='z').chain('A'..='N').collect();
    assert_eq!(signature.chars().count(), 40);

    let lines = render(json!({ "long_nick": signature }), json!({}));
    assert_eq!(
        lines,
        vec!["签名：abcdefghijklmno", "pqrstuvwxyzABCD", "EFGHIJKLMN"]
    );
}

#[test]
fn test_abroad_home_town() {
    let lines = render(json!({ "homeTown": "233-0-0" }), json!({}));
    assert_eq!(lines, vec!["来自：美国"]);
}

#[test]
fn test_malformed_home_town_propagates() {
    let user = UserProfile::from_value(json!({ "nick": "小明", "homeTown": "bad-input" })).unwrap();
    let result = ProfileCardRenderer::default().render(&user, &MembershipProfile::default());

    assert!(matches!(result, Err(ProfileError::MalformedHomeTown(_))));
    assert!(transform(&user, &MembershipProfile::default()).is_err());
}

#[test]
fn test_renderer_timezone() {
    let user = UserProfile::default();
    let member = MembershipProfile::from_value(json!({ "join_time": 1_700_000_000 })).unwrap();

    let utc = ProfileCardRenderer::new(CardConfig::new().with_timezone(chrono_tz::UTC));
    let card = utc.render(&user, &member).unwrap();
    assert_eq!(card.lines(), ["加群时间：2023-11-14"]);
}

#[test]
fn test_boolean_text_fields_are_absent() {
    let lines = render(
        json!({ "nick": "小明", "remark": false, "address": false }),
        json!({ "card": false, "title": false }),
    );
    assert_eq!(lines, vec!["昵称：小明"]);
}

#[test]
fn test_negative_qq_level_keeps_number() {
    let lines = render(json!({ "qqLevel": -3 }), json!({}));
    assert_eq!(lines, vec!["QQ等级：-3级"]);
}
