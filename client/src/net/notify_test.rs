use super::*;

fn order(id: &str, status: PaymentStatus) -> Order {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "orderNumber": format!("INV-{id}"),
        "paymentStatus": status,
        "totalAmount": 25000,
        "createdAt": "2026-03-01T08:00:00Z"
    }))
    .unwrap()
}

// =============================================================
// Event parsing
// =============================================================

#[test]
fn parse_event_reads_new_order() {
    let text = r#"{"event":"order:new","data":{"id":"o-9","paymentStatus":"pending","totalAmount":"12000"}}"#;
    let event = parse_event(text).unwrap();
    assert!(matches!(&event, OrderEvent::NewOrder(o) if o.id == "o-9"));
}

#[test]
fn parse_event_reads_updated_alias() {
    let text = r#"{"event":"orderUpdated","data":{"id":"o-9","paymentStatus":"paid"}}"#;
    let event = parse_event(text).unwrap();
    assert_eq!(event.order().payment_status, PaymentStatus::Paid);
    assert!(matches!(event, OrderEvent::OrderUpdated(_)));
}

#[test]
fn parse_event_ignores_unknown_events() {
    assert!(parse_event(r#"{"event":"ping","data":{"id":"o-1"}}"#).is_none());
}

#[test]
fn parse_event_ignores_malformed_payloads() {
    assert!(parse_event("not json").is_none());
    assert!(parse_event(r#"{"event":"order:new","data":{"nope":true}}"#).is_none());
}

// =============================================================
// Socket URL
// =============================================================

#[test]
fn socket_url_upgrades_scheme_and_scopes_by_shop() {
    let url = socket_url("https://api.lapak.id/api/", &NotifyScope::Shop("s-1".to_owned()));
    assert_eq!(url, "wss://api.lapak.id/api/ws?scope=shop&id=s-1");
}

#[test]
fn socket_url_plain_http_scopes_by_buyer() {
    let url = socket_url("http://localhost:4000/api", &NotifyScope::Buyer("u-7".to_owned()));
    assert_eq!(url, "ws://localhost:4000/api/ws?scope=buyer&id=u-7");
}

// =============================================================
// Backoff
// =============================================================

#[test]
fn backoff_doubles_to_ceiling_and_resets() {
    let mut backoff = Backoff::default();
    let delays: Vec<u32> = (0..6).map(|_| backoff.next_delay_ms()).collect();
    assert_eq!(delays, vec![1_000, 2_000, 4_000, 8_000, 10_000, 10_000]);
    backoff.reset();
    assert_eq!(backoff.next_delay_ms(), INITIAL_BACKOFF_MS);
}

// =============================================================
// Schedule
// =============================================================

#[test]
fn polls_every_interval_even_at_backoff_ceiling() {
    let mut schedule = Schedule::default();
    for _ in 0..5 {
        schedule.disconnected(0.0);
    }
    assert!(schedule.take_poll(0.0));
    schedule.disconnected(10_000.0);
    assert_eq!(schedule.wait_ms(10_000.0), 5_000);
    assert!(!schedule.take_poll(14_999.0));
    assert!(schedule.take_poll(15_000.0));
    assert!(!schedule.reconnect_due(15_000.0));
    assert!(schedule.reconnect_due(20_000.0));
}

#[test]
fn reconnect_waits_for_backoff_and_resets_on_connect() {
    let mut schedule = Schedule::default();
    assert!(schedule.take_poll(0.0));
    schedule.disconnected(0.0);
    assert_eq!(schedule.wait_ms(0.0), 1_000);
    schedule.disconnected(1_000.0);
    assert_eq!(schedule.wait_ms(1_000.0), 2_000);
    schedule.connected();
    schedule.disconnected(5_000.0);
    assert_eq!(schedule.wait_ms(5_000.0), 1_000);
}

// =============================================================
// Polling diff
// =============================================================

#[test]
fn first_observe_only_seeds() {
    let mut watch = OrderWatch::default();
    let events = watch.observe(&[order("a", PaymentStatus::Pending), order("b", PaymentStatus::Paid)]);
    assert!(events.is_empty());
    let events = watch.observe(&[order("a", PaymentStatus::Pending), order("c", PaymentStatus::Pending)]);
    assert!(matches!(events.as_slice(), [OrderEvent::NewOrder(o)] if o.id == "c"));
}

#[test]
fn observe_reports_new_and_changed_orders() {
    let mut watch = OrderWatch::default();
    watch.observe(&[order("a", PaymentStatus::Pending)]);
    let events = watch.observe(&[order("a", PaymentStatus::Paid), order("b", PaymentStatus::Pending)]);
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], OrderEvent::OrderUpdated(o) if o.id == "a"));
    assert!(matches!(&events[1], OrderEvent::NewOrder(o) if o.id == "b"));
}

#[test]
fn observe_is_quiet_when_nothing_changed() {
    let mut watch = OrderWatch::default();
    let list = [order("a", PaymentStatus::Shipped)];
    watch.observe(&list);
    assert!(watch.observe(&list).is_empty());
}

#[test]
fn socket_events_are_not_repeated_by_polling() {
    let mut watch = OrderWatch::default();
    watch.observe(&[]);
    watch.record(&OrderEvent::NewOrder(order("c", PaymentStatus::Pending)));
    assert!(watch.observe(&[order("c", PaymentStatus::Pending)]).is_empty());
}

// =============================================================
// Handle
// =============================================================

#[test]
fn handle_stop_is_shared_between_clones() {
    let handle = NotifierHandle::new();
    let clone = handle.clone();
    assert!(clone.is_alive());
    handle.stop();
    assert!(!clone.is_alive());
}

#[test]
fn connection_status_defaults_to_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    assert_eq!(ConnectionStatus::Polling.label(), "Memeriksa berkala");
}
