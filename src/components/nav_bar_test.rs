use super::*;

#[test]
fn default_tab_is_groups() {
    assert_eq!(MainTab::default(), MainTab::Groups);
}

#[test]
fn labels_are_distinct() {
    let labels = [
        MainTab::Groups.label(),
        MainTab::Create.label(),
        MainTab::Calendar.label(),
    ];
    assert_eq!(labels.len(), 3);
    assert_ne!(labels[0], labels[1]);
    assert_ne!(labels[1], labels[2]);
}
