use super::*;

#[test]
fn defaults_are_fully_visible_with_no_interests() {
    let prefs = default_preferences("casey");
    assert_eq!(prefs.username.as_deref(), Some("casey"));
    assert_eq!(prefs.interests.as_deref(), Some(&[][..]));
    assert_eq!(prefs.show_major, Some(true));
    assert_eq!(prefs.share_sentiment_data, Some(true));
    assert!(prefs.major.is_none());
}

#[test]
fn toggling_adds_then_removes_an_interest() {
    let mut prefs = default_preferences("casey");
    toggle_interest(&mut prefs, "Wellness");
    assert_eq!(prefs.interests.as_deref(), Some(&["Wellness".to_owned()][..]));
    toggle_interest(&mut prefs, "Wellness");
    assert_eq!(prefs.interests.as_deref(), Some(&[][..]));
}

#[test]
fn toggling_initializes_a_missing_interest_list() {
    let mut prefs = UserPreference::default();
    assert!(prefs.interests.is_none());
    toggle_interest(&mut prefs, "AI & ML");
    assert_eq!(prefs.interests.as_deref(), Some(&["AI & ML".to_owned()][..]));
}

#[test]
fn graduation_year_parses_or_clears() {
    assert_eq!(parse_graduation_year("2027"), Some(2027));
    assert_eq!(parse_graduation_year(" 2027 "), Some(2027));
    assert_eq!(parse_graduation_year(""), None);
    assert_eq!(parse_graduation_year("soon"), None);
}
