use super::*;

#[test]
fn every_order_status_has_a_distinct_label() {
    let mut labels: Vec<_> = PaymentStatus::ALL.into_iter().map(order_status_label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), PaymentStatus::ALL.len());
}

#[test]
fn order_badges_share_base_class() {
    for status in PaymentStatus::ALL {
        assert!(order_status_class(status).starts_with("badge badge--"));
    }
    assert_eq!(order_status_class(PaymentStatus::Completed), "badge badge--success");
    assert_eq!(order_status_class(PaymentStatus::Cancelled), "badge badge--danger");
}

#[test]
fn shop_status_labels_and_classes() {
    assert_eq!(shop_status_label(ShopStatus::Active), "Aktif");
    assert_eq!(shop_status_class(ShopStatus::Pending), "badge badge--warning");
    assert_eq!(shop_status_class(ShopStatus::Rejected), "badge badge--danger");
}
