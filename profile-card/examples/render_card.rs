//! Render a profile card from two JSON files
//!
//! ```text
//! cargo run -p profile-card --example render_card -- user.json member.json [avatar.jpg]
//! ```
//!
//! `user.json` is a `get_stranger_info` payload, `member.json` a
//! `get_group_member_info` payload. When a third path is given the avatar is
//! downloaded there.

use std::path::Path;

use anyhow::Context;
use profile_card::{
    AvatarClient, AvatarConfig, CardConfig, MembershipProfile, ProfileCardRenderer, UserProfile,
};

fn load_json(path: &str) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    profile_card::logger::init_logger("info", false)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (user_path, member_path) = match args.as_slice() {
        [user, member, ..] => (user.as_str(), member.as_str()),
        _ => anyhow::bail!("usage: render_card <user.json> <member.json> [avatar.jpg]"),
    };

    let user = UserProfile::from_value(load_json(user_path)?)?;
    let member = MembershipProfile::from_value(load_json(member_path)?)?;

    let renderer = ProfileCardRenderer::new(CardConfig::from_env()?);
    let card = renderer.render(&user, &member)?;
    println!("{}", card);

    if let Some(out) = args.get(2) {
        let Some(uin) = user.uin.as_deref() else {
            anyhow::bail!("profile has no uin, cannot download avatar");
        };
        let client = AvatarClient::new(AvatarConfig::from_env()?)?;
        let bytes = client.fetch(uin).await;
        if bytes.is_empty() {
            tracing::warn!(uin, "Avatar unavailable");
        } else {
            std::fs::write(Path::new(out), &bytes)?;
            tracing::info!(uin, path = %out, len = bytes.len(), "Avatar saved");
        }
    }

    Ok(())
}
