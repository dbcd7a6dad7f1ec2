use super::*;

fn order(id: &str, status: PaymentStatus, total: f64) -> Order {
    Order {
        id: id.to_owned(),
        order_number: format!("INV-{id}"),
        payment_status: status,
        total_amount: total,
        shipping_cost: 0.0,
        items: Vec::new(),
        shop: None,
        buyer: None,
        address: None,
        payment_proof: None,
        notes: None,
        created_at: "2026-10-01T08:00:00Z".to_owned(),
    }
}

// =============================================================
// Action visibility
// =============================================================

#[test]
fn merchant_actions_follow_status_table() {
    use OrderAction as A;
    assert_eq!(available_actions(Viewer::Merchant, PaymentStatus::Pending), vec![A::VerifyPayment, A::RejectPayment]);
    assert_eq!(available_actions(Viewer::Merchant, PaymentStatus::Paid), vec![A::Process, A::Cancel]);
    assert_eq!(available_actions(Viewer::Merchant, PaymentStatus::Processing), vec![A::Ship]);
    assert!(available_actions(Viewer::Merchant, PaymentStatus::Shipped).is_empty());
}

#[test]
fn buyer_actions_follow_status_table() {
    use OrderAction as A;
    assert_eq!(available_actions(Viewer::Buyer, PaymentStatus::Pending), vec![A::UploadProof, A::Cancel]);
    assert!(available_actions(Viewer::Buyer, PaymentStatus::Paid).is_empty());
    assert!(available_actions(Viewer::Buyer, PaymentStatus::Processing).is_empty());
    assert_eq!(available_actions(Viewer::Buyer, PaymentStatus::Shipped), vec![A::ConfirmReceived]);
}

#[test]
fn terminal_statuses_offer_nothing() {
    for status in PaymentStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
        assert!(available_actions(Viewer::Merchant, status).is_empty());
        assert!(available_actions(Viewer::Buyer, status).is_empty());
    }
}

#[test]
fn never_more_than_one_action_of_each_kind() {
    for viewer in [Viewer::Merchant, Viewer::Buyer] {
        for status in PaymentStatus::ALL {
            let actions = available_actions(viewer, status);
            let advancing = actions.iter().filter(|a| a.kind() == ActionKind::Advance).count();
            let aborting = actions.iter().filter(|a| a.kind() == ActionKind::Abort).count();
            assert!(advancing <= 1, "{viewer:?} {status:?}");
            assert!(aborting <= 1, "{viewer:?} {status:?}");
        }
    }
}

#[test]
fn actions_map_to_backend_requests() {
    assert_eq!(OrderAction::VerifyPayment.request(), ActionRequest::VerifyPayment { approved: true });
    assert_eq!(OrderAction::RejectPayment.request(), ActionRequest::VerifyPayment { approved: false });
    assert_eq!(OrderAction::Process.request(), ActionRequest::SetStatus(PaymentStatus::Processing));
    assert_eq!(OrderAction::Ship.request(), ActionRequest::SetStatus(PaymentStatus::Shipped));
    assert_eq!(OrderAction::ConfirmReceived.request(), ActionRequest::Receive);
}

#[test]
fn destructive_actions_ask_for_confirmation() {
    assert!(OrderAction::Cancel.confirm_prompt().is_some());
    assert!(OrderAction::RejectPayment.confirm_prompt().is_some());
    assert!(OrderAction::Ship.confirm_prompt().is_none());
}

// =============================================================
// Lists
// =============================================================

#[test]
fn filter_by_tab() {
    let orders = vec![
        order("1", PaymentStatus::Pending, 10.0),
        order("2", PaymentStatus::Paid, 20.0),
        order("3", PaymentStatus::Pending, 30.0),
    ];
    assert_eq!(filter_orders(&orders, None).len(), 3);
    let pending = filter_orders(&orders, Some(PaymentStatus::Pending));
    assert_eq!(pending.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(), vec!["1", "3"]);
    assert!(filter_orders(&orders, Some(PaymentStatus::Shipped)).is_empty());
}

#[test]
fn new_order_event_prepends() {
    let mut orders = vec![order("1", PaymentStatus::Paid, 10.0)];
    apply_event(&mut orders, &OrderEvent::NewOrder(order("2", PaymentStatus::Pending, 5.0)));
    assert_eq!(orders[0].id, "2");
    assert_eq!(orders.len(), 2);
}

#[test]
fn update_event_replaces_in_place() {
    let mut orders = vec![order("1", PaymentStatus::Paid, 10.0), order("2", PaymentStatus::Pending, 5.0)];
    apply_event(&mut orders, &OrderEvent::OrderUpdated(order("2", PaymentStatus::Paid, 5.0)));
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].payment_status, PaymentStatus::Paid);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_bucket_statuses_and_sum_completed_revenue() {
    let orders = vec![
        order("1", PaymentStatus::Pending, 10.0),
        order("2", PaymentStatus::Processing, 20.0),
        order("3", PaymentStatus::Completed, 30_000.0),
        order("4", PaymentStatus::Completed, 15_000.0),
        order("5", PaymentStatus::Cancelled, 99.0),
    ];
    let stats = OrderStats::from_orders(&orders);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.aborted, 1);
    assert_eq!(stats.revenue, 45_000.0);
    assert_eq!(OrderStats::count_for(&orders, PaymentStatus::Completed), 2);
}
