//! Static category and malicious-domain tables.
//!
//! Both tables are process-wide, initialized once, and never mutated. Lookup
//! keys are bare registered domains (no trailing dot, no `www.` prefix);
//! callers are expected to pass an already-normalized host.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static CATEGORIES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let entries: &[(&str, &[&str])] = &[
            // Social Media
            ("facebook.com", &["social", "messaging", "advertising"]),
            ("instagram.com", &["social", "photo-sharing", "advertising"]),
            ("twitter.com", &["social", "microblogging", "news"]),
            ("linkedin.com", &["social", "professional", "jobs"]),
            ("tiktok.com", &["social", "video", "entertainment"]),
            ("pinterest.com", &["social", "photo-sharing", "lifestyle"]),
            ("reddit.com", &["social", "forum", "news"]),
            // Technology
            ("google.com", &["search", "advertising", "technology"]),
            ("youtube.com", &["video", "streaming", "social"]),
            ("microsoft.com", &["technology", "software", "cloud"]),
            ("apple.com", &["technology", "retail", "hardware"]),
            ("amazon.com", &["ecommerce", "retail", "cloud"]),
            ("github.com", &["technology", "development", "collaboration"]),
            ("stackoverflow.com", &["technology", "qa", "development"]),
            // AI/ML
            ("openai.com", &["ai", "technology", "development"]),
            ("claude.ai", &["ai", "chatbot", "productivity"]),
            ("anthropic.com", &["ai", "technology", "research"]),
            ("huggingface.co", &["ai", "development", "machine-learning"]),
            // News/Media
            ("cnn.com", &["news", "media", "politics"]),
            ("bbc.com", &["news", "media", "broadcast"]),
            ("nytimes.com", &["news", "media", "journalism"]),
            ("reuters.com", &["news", "finance", "journalism"]),
            ("bloomberg.com", &["news", "finance", "business"]),
            // Education
            ("coursera.org", &["education", "online-learning", "professional"]),
            ("udemy.com", &["education", "online-learning", "technology"]),
            ("edx.org", &["education", "online-learning", "academic"]),
            ("khan-academy.org", &["education", "online-learning", "non-profit"]),
            // Entertainment
            ("netflix.com", &["streaming", "entertainment", "video"]),
            ("spotify.com", &["streaming", "music", "entertainment"]),
            ("disney.com", &["entertainment", "streaming", "media"]),
            ("twitch.tv", &["streaming", "gaming", "entertainment"]),
            // Business/Professional
            ("salesforce.com", &["business", "crm", "cloud"]),
            ("zoom.us", &["business", "communication", "video-conferencing"]),
            ("slack.com", &["business", "communication", "collaboration"]),
            ("atlassian.com", &["business", "software", "collaboration"]),
            // Financial
            ("paypal.com", &["financial", "payment", "ecommerce"]),
            ("visa.com", &["financial", "payment", "banking"]),
            ("mastercard.com", &["financial", "payment", "banking"]),
            ("stripe.com", &["financial", "payment", "technology"]),
            // Cloud Providers
            ("aws.amazon.com", &["cloud", "technology", "hosting"]),
            ("azure.com", &["cloud", "technology", "hosting"]),
            ("cloud.google.com", &["cloud", "technology", "hosting"]),
            // Productivity
            ("office.com", &["productivity", "software", "collaboration"]),
            ("dropbox.com", &["cloud-storage", "productivity", "collaboration"]),
            ("notion.so", &["productivity", "collaboration", "notes"]),
            // Shopping
            ("ebay.com", &["ecommerce", "retail", "auction"]),
            ("walmart.com", &["retail", "ecommerce", "shopping"]),
            ("etsy.com", &["ecommerce", "handmade", "marketplace"]),
            // Travel
            ("booking.com", &["travel", "hospitality", "booking"]),
            ("airbnb.com", &["travel", "hospitality", "marketplace"]),
            ("expedia.com", &["travel", "booking", "flights"]),
            // Sports
            ("espn.com", &["sports", "news", "entertainment"]),
            ("nba.com", &["sports", "basketball", "entertainment"]),
            ("fifa.com", &["sports", "football", "organization"]),
        ];
        entries.iter().copied().collect()
    });

static MALICIOUS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "malware-example.com",
        "phishing-example.net",
        "spam-distribution.example",
        "fake-bank-example.com",
        "malicious-downloads.example",
        "credential-theft.example",
        "ransomware-domain.example",
        "botnet-cc.example",
        "exploit-kit.example",
        "scam-website.example",
    ]
    .into_iter()
    .collect()
});

/// Category tags for a host: case-sensitive exact match first, then one
/// retry against the last two labels (registrable-domain heuristic).
/// Unknown hosts get an empty list.
pub fn categories_for(host: &str) -> Vec<String> {
    if let Some(tags) = CATEGORIES.get(host) {
        return tags.iter().map(|t| t.to_string()).collect();
    }
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        let parent = labels[labels.len() - 2..].join(".");
        if let Some(tags) = CATEGORIES.get(parent.as_str()) {
            return tags.iter().map(|t| t.to_string()).collect();
        }
    }
    Vec::new()
}

/// Direct set membership, no parent-domain fallback.
pub fn is_malicious(host: &str) -> bool {
    MALICIOUS.contains(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(
            categories_for("google.com"),
            vec!["search", "advertising", "technology"]
        );
    }

    #[test]
    fn exact_match_wins_over_suffix_fallback() {
        // aws.amazon.com has its own entry distinct from amazon.com
        assert_eq!(
            categories_for("aws.amazon.com"),
            vec!["cloud", "technology", "hosting"]
        );
    }

    #[test]
    fn falls_back_to_last_two_labels() {
        assert_eq!(
            categories_for("maps.google.com"),
            vec!["search", "advertising", "technology"]
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(categories_for("Google.com").is_empty());
    }

    #[test]
    fn unknown_host_yields_empty_list() {
        assert!(categories_for("definitely-not-in-the-table.example").is_empty());
    }

    #[test]
    fn malicious_membership() {
        assert!(is_malicious("malware-example.com"));
        assert!(!is_malicious("google.com"));
    }

    #[test]
    fn malicious_has_no_parent_fallback() {
        assert!(!is_malicious("sub.malware-example.com"));
    }
}
