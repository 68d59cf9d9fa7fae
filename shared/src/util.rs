//! 通用工具函数

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at SaaS scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Turn a display name into a URL slug: lowercase ASCII alphanumerics
/// separated by single hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut prev_hyphen = true; // suppress leading hyphen
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_positive_and_distinct() {
        let ids: Vec<i64> = (0..100).map(|_| snowflake_id()).collect();
        assert!(ids.iter().all(|&id| id > 0));
        let distinct: std::collections::HashSet<_> = ids.iter().collect();
        // Random low bits make mass collisions vanishingly unlikely
        assert!(distinct.len() > 90);
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("La Brasserie du Port"), "la-brasserie-du-port");
        assert_eq!(slugify("  Café -- 42! "), "caf-42");
        assert_eq!(slugify("---"), "");
    }
}
