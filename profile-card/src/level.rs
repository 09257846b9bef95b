//! QQ level icons
//!
//! The client shows levels as stacked icons: 1 crown = 4 suns = 16 moons = 64 stars.

const LEVEL_ICONS: [(u32, &str); 4] = [(64, "👑"), (16, "☀️"), (4, "🌙"), (1, "⭐")];

/// Render a QQ level as icons followed by the numeric level
///
/// `85` → `👑☀️🌙⭐(85级)`
pub fn qq_level_to_icon(level: u32) -> String {
    let mut result = String::new();
    let mut remaining = level;

    for (weight, icon) in LEVEL_ICONS {
        result.push_str(&icon.repeat((remaining / weight) as usize));
        remaining %= weight;
    }

    result.push_str(&format!("({}级)", level));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crown() {
        assert_eq!(qq_level_to_icon(64), "👑(64级)");
    }

    #[test]
    fn test_mixed_tiers() {
        assert_eq!(qq_level_to_icon(85), "👑☀️🌙⭐(85级)");
        assert_eq!(qq_level_to_icon(3), "⭐⭐⭐(3级)");
        assert_eq!(qq_level_to_icon(20), "☀️🌙(20级)");
        assert_eq!(qq_level_to_icon(130), "👑👑⭐⭐(130级)");
    }

    #[test]
    fn test_zero() {
        assert_eq!(qq_level_to_icon(0), "(0级)");
    }
}
