use super::*;

#[test]
fn denial_copy_names_the_required_role() {
    let copy = denial_copy(Role::University);
    assert!(copy.subtitle.contains("verified university staff"));
    assert_eq!(copy.title, "University access only");

    let copy = denial_copy(Role::Moderator);
    assert!(copy.body.contains("MODERATOR"));
}

#[test]
fn denial_copy_is_distinct_per_role() {
    let titles = [
        denial_copy(Role::Moderator).title,
        denial_copy(Role::University).title,
        denial_copy(Role::Admin).title,
    ];
    assert_ne!(titles[0], titles[1]);
    assert_ne!(titles[1], titles[2]);
}
