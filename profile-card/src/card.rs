//! Profile card renderer
//!
//! Renders a [`UserProfile`] plus the matching [`MembershipProfile`] into the
//! ordered lines of a text card. A line is only written when its field is
//! present; string fields count as present when non-empty, numeric fields
//! when non-zero, and a few fields compare against a platform placeholder.

use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::astro::{constellation, zodiac};
use crate::config::CardConfig;
use crate::error::ProfileResult;
use crate::level::qq_level_to_icon;
use crate::lookup::{get_blood_type, get_career, get_status, parse_home_town};
use crate::models::{MembershipProfile, Sex, UserProfile};

/// Status code that is never shown on the card
const HIDDEN_STATUS: i64 = 20;

/// Phone placeholder for "not set"
const PHONE_PLACEHOLDER: &str = "-";

/// Home town placeholder for "not set"
const HOME_TOWN_PLACEHOLDER: &str = "0-0-0";

// ============================================================================
// Card Builder
// ============================================================================

/// Line accumulator with one pending line
///
/// A line written with [`hold`](Self::hold) stays open for suffixes until the
/// next write flushes it. This is how the city joins the country line.
#[derive(Debug, Default)]
pub struct CardBuilder {
    lines: Vec<String>,
    pending: Option<String>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a finished line
    pub fn line(&mut self, s: impl Into<String>) -> &mut Self {
        self.flush();
        self.lines.push(s.into());
        self
    }

    /// Write a line that later suffixes may extend
    pub fn hold(&mut self, s: impl Into<String>) -> &mut Self {
        self.flush();
        self.pending = Some(s.into());
        self
    }

    /// Append to the pending line
    ///
    /// Returns `false` (and drops the suffix) when no line is pending.
    pub fn append_to_pending(&mut self, suffix: &str) -> bool {
        match self.pending.as_mut() {
            Some(line) => {
                line.push_str(suffix);
                true
            }
            None => false,
        }
    }

    /// Move the pending line into the output
    pub fn flush(&mut self) -> &mut Self {
        if let Some(line) = self.pending.take() {
            self.lines.push(line);
        }
        self
    }

    /// Finalize into a card
    pub fn finish(mut self) -> ProfileCard {
        self.flush();
        ProfileCard { lines: self.lines }
    }
}

// ============================================================================
// Profile Card
// ============================================================================

/// Rendered profile card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCard {
    lines: Vec<String>,
}

impl ProfileCard {
    /// Card lines in display order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Lines joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Profile card renderer
pub struct ProfileCardRenderer {
    config: CardConfig,
}

impl ProfileCardRenderer {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Render a card
    ///
    /// # Errors
    ///
    /// Fails only when the home town code is malformed.
    pub fn render(
        &self,
        user: &UserProfile,
        member: &MembershipProfile,
    ) -> ProfileResult<ProfileCard> {
        let mut b = CardBuilder::new();

        self.render_identity(&mut b, user, member);
        self.render_birthday(&mut b, user);
        self.render_contact(&mut b, user);
        self.render_location(&mut b, user)?;
        self.render_details(&mut b, user, member);
        self.render_membership(&mut b, user, member);
        self.render_signature(&mut b, user);

        Ok(b.finish())
    }

    /// Q号, nicknames, title, status, sex
    fn render_identity(&self, b: &mut CardBuilder, user: &UserProfile, member: &MembershipProfile) {
        if let Some(uin) = text(&user.uin) {
            b.line(format!("Q号：{}", uin));
        }
        if let Some(nick) = text(&user.nickname) {
            b.line(format!("昵称：{}", nick));
        }
        if let Some(card) = text(&member.card) {
            b.line(format!("群昵称：{}", card));
        }
        if let Some(title) = text(&member.title) {
            b.line(format!("头衔：{}", title));
        }

        if let Some(status) = nonzero(user.status)
            && status != HIDDEN_STATUS
        {
            b.line(format!("状态：{}", get_status(status)));
        }

        match user.sex {
            Some(Sex::Male) => {
                b.line("性别：男孩纸");
            }
            Some(Sex::Female) => {
                b.line("性别：女孩纸");
            }
            _ => {}
        }
    }

    /// 诞辰 / 星座 / 生肖, 年龄
    fn render_birthday(&self, b: &mut CardBuilder, user: &UserProfile) {
        if let (Some(year), Some(month), Some(day)) = (
            nonzero(user.birthday_year),
            nonzero(user.birthday_month),
            nonzero(user.birthday_day),
        ) && let (Ok(y), Ok(m), Ok(d)) = (
            i32::try_from(year),
            u32::try_from(month),
            u32::try_from(day),
        ) {
            b.line(format!("诞辰：{}-{}-{}", year, month, day));
            b.line(format!("星座：{}", constellation(m, d)));
            b.line(format!("生肖：{}", zodiac(y, m, d)));
        }

        if let Some(age) = user.age
            && 3 < age
            && age < 60
        {
            b.line(format!("年龄：{}岁", age));
        }
    }

    /// 电话, 邮箱, 邮编
    fn render_contact(&self, b: &mut CardBuilder, user: &UserProfile) {
        if let Some(phone) = text(&user.phone)
            && phone != PHONE_PLACEHOLDER
        {
            b.line(format!("电话：{}", phone));
        }
        if let Some(email) = text(&user.email) {
            b.line(format!("邮箱：{}", email));
        }
        if let Some(post_code) = text(&user.post_code) {
            b.line(format!("邮编：{}", post_code));
        }
    }

    /// 现居 (+city), 来自, 地址
    fn render_location(&self, b: &mut CardBuilder, user: &UserProfile) -> ProfileResult<()> {
        if let Some(country) = text(&user.country) {
            b.hold(format!("现居：{}", country));
        }
        if let Some(city) = text(&user.city)
            && !b.append_to_pending(&format!("-{}", city))
        {
            debug!(city, "No country line, city dropped");
        }

        if let Some(home_town) = text(&user.home_town)
            && home_town != HOME_TOWN_PLACEHOLDER
        {
            b.line(format!("来自：{}", parse_home_town(home_town)?));
        }
        if let Some(address) = text(&user.address) {
            b.line(format!("地址：{}", address));
        }
        Ok(())
    }

    /// 血型, 职业, 备注, 标签, group flags
    fn render_details(&self, b: &mut CardBuilder, user: &UserProfile, member: &MembershipProfile) {
        if let Some(blood_type) = nonzero(user.blood_type) {
            b.line(format!("血型：{}", get_blood_type(blood_type)));
        }
        // 0 means "not set" for career, never a real code
        if let Some(career) = nonzero(user.career) {
            b.line(format!("职业：{}", get_career(career)));
        }

        if let Some(remark) = text(&user.remark) {
            b.line(format!("备注：{}", remark));
        }
        let labels: Vec<&str> = user
            .labels
            .iter()
            .map(String::as_str)
            .filter(|l| !l.is_empty())
            .collect();
        if !labels.is_empty() {
            b.line(format!("标签：{}", labels.join("、")));
        }

        if member.unfriendly {
            b.line("不良记录：有");
        }
        if member.is_robot {
            b.line("是否为bot: 是");
        }
    }

    /// VIP, login streak, levels, dates
    fn render_membership(
        &self,
        b: &mut CardBuilder,
        user: &UserProfile,
        member: &MembershipProfile,
    ) {
        if user.is_vip {
            b.line("VIP：已开");
        }
        if user.is_years_vip {
            b.line("年费VIP：已开");
        }
        if let Some(vip_level) = nonzero(user.vip_level) {
            b.line(format!("VIP等级：{}", vip_level));
        }
        if let Some(login_days) = nonzero(user.login_days) {
            b.line(format!("连续登录天数：{}", login_days));
        }

        if let Some(level) = nonzero(member.level) {
            b.line(format!("群等级：{}级", level));
        }
        if let Some(join_time) = nonzero(member.join_time) {
            b.line(format!(
                "加群时间：{}",
                timestamp_to_date(join_time, self.config.timezone)
            ));
        }

        if let Some(level) = nonzero(user.qq_level) {
            // Negative levels have no icon form
            let rendered = match u32::try_from(level) {
                Ok(level) => qq_level_to_icon(level),
                Err(_) => format!("{}级", level),
            };
            b.line(format!("QQ等级：{}", rendered));
        }
        if let Some(reg_time) = nonzero(user.reg_time) {
            b.line(format!(
                "注册时间：{}",
                timestamp_to_year(reg_time, self.config.timezone)
            ));
        }
    }

    /// 签名, wrapped to `signature_width` characters per line
    fn render_signature(&self, b: &mut CardBuilder, user: &UserProfile) {
        let Some(signature) = text(&user.long_nick) else {
            return;
        };

        let chars: Vec<char> = signature.chars().collect();
        let mut chunks = chars
            .chunks(self.config.signature_width.max(1))
            .map(|chunk| chunk.iter().collect::<String>());

        if let Some(first) = chunks.next() {
            b.line(format!("签名：{}", first));
        }
        for rest in chunks {
            b.line(rest);
        }
    }
}

impl Default for ProfileCardRenderer {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

/// Render a card as one newline-joined string with the default renderer
pub fn transform(user: &UserProfile, member: &MembershipProfile) -> ProfileResult<String> {
    ProfileCardRenderer::default()
        .render(user, member)
        .map(|card| card.to_text())
}

/// Format unix timestamp (seconds) as `YYYY-MM-DD` in given timezone
pub fn timestamp_to_date(ts: i64, tz: Tz) -> String {
    format_timestamp(ts, tz, "%Y-%m-%d")
}

/// Format unix timestamp (seconds) as `YYYY年` in given timezone
pub fn timestamp_to_year(ts: i64, tz: Tz) -> String {
    format_timestamp(ts, tz, "%Y年")
}

fn format_timestamp(ts: i64, tz: Tz, fmt: &str) -> String {
    if let Some(dt) = DateTime::from_timestamp(ts, 0) {
        dt.with_timezone(&tz).format(fmt).to_string()
    } else {
        "时间未知".to_string()
    }
}

/// Non-empty string field
fn text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Non-zero numeric field
fn nonzero(field: Option<i64>) -> Option<i64> {
    field.filter(|n| *n != 0)
}
