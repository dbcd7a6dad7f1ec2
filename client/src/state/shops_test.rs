use super::*;
use crate::net::types::UserRef;

fn shop(id: &str, name: &str, status: ShopStatus) -> Shop {
    Shop {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: crate::util::slug::slugify(name),
        description: None,
        address: None,
        phone: None,
        logo: None,
        latitude: None,
        longitude: None,
        status,
        owner: None,
        created_at: None,
        count: None,
    }
}

#[test]
fn transitions_per_status() {
    assert_eq!(shop_actions(ShopStatus::Pending), vec![ShopAction::Approve, ShopAction::Reject]);
    assert_eq!(shop_actions(ShopStatus::Active), vec![ShopAction::Suspend]);
    assert_eq!(shop_actions(ShopStatus::Suspended), vec![ShopAction::Reactivate]);
    assert_eq!(shop_actions(ShopStatus::Rejected), vec![ShopAction::Reactivate]);
}

#[test]
fn actions_target_expected_status() {
    for status in ShopStatus::ALL {
        for action in shop_actions(status) {
            assert_ne!(action.target(), status, "{action:?} must change {status:?}");
        }
    }
    assert_eq!(ShopAction::Reject.target(), ShopStatus::Rejected);
    assert!(ShopAction::Suspend.is_destructive());
    assert!(!ShopAction::Approve.is_destructive());
}

#[test]
fn filter_by_tab_and_query() {
    let mut owned = shop("3", "Kopi Nusantara", ShopStatus::Active);
    owned.owner = Some(UserRef {
        id: "u".to_owned(),
        name: "Dewi".to_owned(),
        email: Some("dewi@lapak.id".to_owned()),
        phone: None,
    });
    let shops = vec![
        shop("1", "Warung Sari", ShopStatus::Pending),
        shop("2", "Roti Bu Ani", ShopStatus::Active),
        owned,
    ];
    assert_eq!(filter_shops(&shops, None, "").len(), 3);
    assert_eq!(filter_shops(&shops, Some(ShopStatus::Active), "").len(), 2);
    assert_eq!(filter_shops(&shops, Some(ShopStatus::Active), "ROTI")[0].id, "2");
    assert_eq!(filter_shops(&shops, None, "dewi@")[0].id, "3");
    assert!(filter_shops(&shops, Some(ShopStatus::Pending), "roti").is_empty());
    assert_eq!(count_with_status(&shops, ShopStatus::Pending), 1);
}

#[test]
fn replace_updates_matching_shop() {
    let mut shops = vec![shop("1", "Warung Sari", ShopStatus::Pending)];
    replace_shop(&mut shops, shop("1", "Warung Sari", ShopStatus::Active));
    assert_eq!(shops[0].status, ShopStatus::Active);
    replace_shop(&mut shops, shop("9", "Lain", ShopStatus::Rejected));
    assert_eq!(shops.len(), 1);
}
