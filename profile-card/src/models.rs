//! Profile records as delivered by the platform API
//!
//! The platform is loosely typed: numbers arrive as JSON numbers or numeric
//! strings, flags as booleans or 0/1, and any key may be missing or `null`.
//! Every field is therefore optional and decoded leniently.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::error::ProfileResult;

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Unknown,
}

/// User profile (`get_stranger_info`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "loose_string")]
    pub uin: Option<String>,
    #[serde(rename = "nick", deserialize_with = "loose_string")]
    pub nickname: Option<String>,
    pub sex: Option<Sex>,

    // 生日
    #[serde(deserialize_with = "loose_int")]
    pub birthday_year: Option<i64>,
    #[serde(deserialize_with = "loose_int")]
    pub birthday_month: Option<i64>,
    #[serde(deserialize_with = "loose_int")]
    pub birthday_day: Option<i64>,
    #[serde(deserialize_with = "loose_int")]
    pub age: Option<i64>,

    // 联系方式
    #[serde(rename = "phoneNum", deserialize_with = "loose_string")]
    pub phone: Option<String>,
    #[serde(rename = "eMail", deserialize_with = "loose_string")]
    pub email: Option<String>,
    #[serde(rename = "postCode", deserialize_with = "loose_string")]
    pub post_code: Option<String>,

    // 所在地
    #[serde(deserialize_with = "loose_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub city: Option<String>,
    #[serde(rename = "homeTown", deserialize_with = "loose_string")]
    pub home_town: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub address: Option<String>,

    #[serde(rename = "kBloodType", deserialize_with = "loose_int")]
    pub blood_type: Option<i64>,
    #[serde(rename = "makeFriendCareer", deserialize_with = "loose_int")]
    pub career: Option<i64>,
    #[serde(deserialize_with = "loose_string")]
    pub remark: Option<String>,
    #[serde(deserialize_with = "loose_labels")]
    pub labels: Vec<String>,

    // 会员
    #[serde(deserialize_with = "loose_bool")]
    pub is_vip: bool,
    #[serde(deserialize_with = "loose_bool")]
    pub is_years_vip: bool,
    #[serde(deserialize_with = "loose_int")]
    pub vip_level: Option<i64>,
    #[serde(deserialize_with = "loose_int")]
    pub login_days: Option<i64>,
    #[serde(rename = "qqLevel", deserialize_with = "loose_int")]
    pub qq_level: Option<i64>,
    /// 注册时间 (unix seconds)
    #[serde(deserialize_with = "loose_int")]
    pub reg_time: Option<i64>,

    /// 个性签名
    #[serde(deserialize_with = "loose_string")]
    pub long_nick: Option<String>,
    #[serde(deserialize_with = "loose_int")]
    pub status: Option<i64>,
}

/// Group member profile (`get_group_member_info`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipProfile {
    /// 群昵称
    #[serde(deserialize_with = "loose_string")]
    pub card: Option<String>,
    /// 专属头衔
    #[serde(deserialize_with = "loose_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "loose_int")]
    pub level: Option<i64>,
    /// 加群时间 (unix seconds)
    #[serde(deserialize_with = "loose_int")]
    pub join_time: Option<i64>,
    #[serde(deserialize_with = "loose_bool")]
    pub unfriendly: bool,
    #[serde(deserialize_with = "loose_bool")]
    pub is_robot: bool,
}

impl UserProfile {
    /// Decode from a raw API payload
    pub fn from_value(value: Value) -> ProfileResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl MembershipProfile {
    /// Decode from a raw API payload
    pub fn from_value(value: Value) -> ProfileResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

// ============================================================================
// Lenient field decoders
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Numbers or numeric strings; empty string is absent
fn loose_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Int(n)) => Ok(Some(n)),
        Some(Loose::Float(f)) => Ok(Some(f as i64)),
        Some(Loose::Bool(b)) => Ok(Some(b as i64)),
        Some(Loose::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s)))
        }
    }
}

/// Strings, with numbers rendered to text (`uin` is sometimes numeric)
///
/// Booleans carry no text and decode as absent.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => None,
        Some(Loose::Str(s)) => Some(s),
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) => Some(f.to_string()),
        Some(Loose::Bool(_)) => None,
    })
}

/// `true/false` or `0/1`
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => false,
        Some(Loose::Bool(b)) => b,
        Some(Loose::Int(n)) => n != 0,
        Some(Loose::Float(f)) => f != 0.0,
        Some(Loose::Str(s)) => !matches!(s.trim(), "" | "0" | "false"),
    })
}

/// A list of labels or a single label string
fn loose_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Labels {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<Labels>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Labels::Many(labels)) => labels,
        Some(Labels::One(label)) if label.is_empty() => Vec::new(),
        Some(Labels::One(label)) => vec![label],
    })
}
