//! # profile-card
//!
//! QQ profile card rendering - turns the raw user / group-member records a bot
//! receives from the platform into a Chinese text card.
//!
//! ## Scope
//!
//! This crate handles WHAT goes on the card:
//! - Code to label translation (status, career, blood type, home town)
//! - Derived attributes (constellation, Chinese zodiac, level icons)
//! - Card assembly (ordered lines or one newline-joined string)
//! - Avatar download (`q4.qlogo.cn`)
//!
//! Command dispatch and message sending stay in the bot framework.
//!
//! ## Example
//!
//! ```ignore
//! use profile_card::{MembershipProfile, ProfileCardRenderer, UserProfile};
//!
//! let user = UserProfile::from_value(user_json)?;
//! let member = MembershipProfile::from_value(member_json)?;
//!
//! let card = ProfileCardRenderer::default().render(&user, &member)?;
//! for line in card.lines() {
//!     println!("{line}");
//! }
//!
//! let avatar = profile_card::get_avatar("10001").await;
//! ```

mod astro;
mod avatar;
mod card;
mod config;
mod error;
mod level;
mod lookup;
mod models;

pub mod logger;

// Re-exports
pub use astro::{constellation, zodiac};
pub use avatar::{AvatarClient, get_avatar};
pub use card::{
    CardBuilder, ProfileCard, ProfileCardRenderer, timestamp_to_date, timestamp_to_year, transform,
};
pub use config::{AvatarConfig, CardConfig, DEFAULT_AVATAR_URL};
pub use error::{ProfileError, ProfileResult};
pub use level::qq_level_to_icon;
pub use lookup::{
    get_blood_type, get_career, get_country, get_province, get_status, parse_home_town,
};
pub use models::{MembershipProfile, Sex, UserProfile};
