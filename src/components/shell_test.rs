use super::*;
use crate::net::types::{Badge, UserInfo};

fn guest() -> Session {
    let mut session = Session::default();
    session.initialized = true;
    session
}

fn member() -> Session {
    let mut session = guest();
    session.token = Some("tok".to_owned());
    session.user = Some(UserInfo {
        id: 7,
        username: "casey".to_owned(),
        email: "casey@uni.edu".to_owned(),
        real_name: None,
        university_id: None,
        university_name: None,
        verification_status: None,
    });
    session
}

fn with_badge(mut session: Session, kind: &str) -> Session {
    session.badges.push(Badge {
        id: 1,
        user_id: 7,
        badge_type: kind.to_owned(),
        earned_at: None,
        channel_id: None,
    });
    session
}

#[test]
fn guests_see_only_public_items() {
    let paths: Vec<_> = visible_nav_items(&guest()).iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["/search", "/leaderboards", "/channel-analytics"]);
}

#[test]
fn members_gain_auth_items_but_not_role_items() {
    let paths: Vec<_> = visible_nav_items(&member()).iter().map(|i| i.path).collect();
    assert!(paths.contains(&"/dashboard"));
    assert!(paths.contains(&"/profile"));
    assert!(paths.contains(&"/channel-badges"));
    assert!(!paths.contains(&"/moderation"));
    assert!(!paths.contains(&"/university"));
}

#[test]
fn moderator_badge_reveals_moderation() {
    let session = with_badge(member(), "MODERATOR");
    let paths: Vec<_> = visible_nav_items(&session).iter().map(|i| i.path).collect();
    assert!(paths.contains(&"/moderation"));
    assert!(!paths.contains(&"/university"));
}

#[test]
fn admin_badge_reveals_every_item() {
    let session = with_badge(member(), "ADMIN");
    assert_eq!(visible_nav_items(&session).len(), NAV_ITEMS.len());
}

#[test]
fn membership_label_prefers_strongest_role() {
    assert_eq!(membership_label(&member()), "Member");
    assert_eq!(membership_label(&with_badge(member(), "MODERATOR")), "Moderator");
    assert_eq!(membership_label(&with_badge(member(), "ADMIN")), "Administrator");

    let mut verified = member();
    if let Some(user) = verified.user.as_mut() {
        user.university_id = Some(3);
        user.verification_status = Some("VERIFIED".to_owned());
    }
    assert_eq!(membership_label(&verified), "University admin");
}
