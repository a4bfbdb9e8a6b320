use super::*;

fn entry(total_karma: Option<i64>, total_upvotes: Option<i64>) -> LeaderboardEntry {
    LeaderboardEntry {
        id: 1,
        username: "casey".to_owned(),
        profile_picture_url: None,
        total_upvotes,
        total_karma,
        post_karma: None,
        comment_karma: None,
    }
}

#[test]
fn karma_prefers_total_karma() {
    assert_eq!(entry_karma(&entry(Some(120), Some(40))), 120);
}

#[test]
fn karma_falls_back_to_upvotes_then_zero() {
    assert_eq!(entry_karma(&entry(None, Some(40))), 40);
    assert_eq!(entry_karma(&entry(None, None)), 0);
}
