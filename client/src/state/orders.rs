//! Order lists, status tabs and the per-status action sets.
//!
//! DESIGN
//! ======
//! The backend owns the order lifecycle. The frontend only decides which
//! buttons to render for a status: at most one action that moves the order
//! forward and at most one that aborts it, so mutually exclusive forward
//! transitions never appear side by side.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::api::ApiError;
use crate::net::notify::OrderEvent;
use crate::net::types::{Order, PaymentStatus};

/// Who is looking at the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    Merchant,
    Buyer,
}

/// Whether an action moves the order forward or ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Advance,
    Abort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderAction {
    VerifyPayment,
    RejectPayment,
    Process,
    Ship,
    Cancel,
    UploadProof,
    ConfirmReceived,
}

/// The REST call an action maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionRequest {
    /// `POST /orders/:id/verify-payment`
    VerifyPayment { approved: bool },
    /// `PATCH /orders/:id/status`
    SetStatus(PaymentStatus),
    /// `POST /orders/:id/cancel`
    Cancel,
    /// `POST /orders/:id/receive`
    Receive,
    /// `POST /orders/:id/upload-proof`, needs a file from the picker.
    UploadProof,
}

impl OrderAction {
    pub fn kind(self) -> ActionKind {
        match self {
            Self::RejectPayment | Self::Cancel => ActionKind::Abort,
            Self::VerifyPayment | Self::Process | Self::Ship | Self::UploadProof | Self::ConfirmReceived => {
                ActionKind::Advance
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VerifyPayment => "Verifikasi Pembayaran",
            Self::RejectPayment => "Tolak Pembayaran",
            Self::Process => "Proses Pesanan",
            Self::Ship => "Kirim Pesanan",
            Self::Cancel => "Batalkan",
            Self::UploadProof => "Unggah Bukti Bayar",
            Self::ConfirmReceived => "Pesanan Diterima",
        }
    }

    /// Confirmation text for actions that cannot be undone.
    pub fn confirm_prompt(self) -> Option<&'static str> {
        match self {
            Self::RejectPayment => Some("Tolak pembayaran untuk pesanan ini?"),
            Self::Cancel => Some("Batalkan pesanan ini? Tindakan ini tidak dapat dibatalkan."),
            Self::ConfirmReceived => Some("Konfirmasi bahwa pesanan sudah Anda terima?"),
            _ => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::VerifyPayment => "Pembayaran diverifikasi",
            Self::RejectPayment => "Pembayaran ditolak",
            Self::Process => "Pesanan sedang diproses",
            Self::Ship => "Pesanan ditandai dikirim",
            Self::Cancel => "Pesanan dibatalkan",
            Self::UploadProof => "Bukti pembayaran terkirim",
            Self::ConfirmReceived => "Terima kasih! Pesanan selesai",
        }
    }

    pub fn request(self) -> ActionRequest {
        match self {
            Self::VerifyPayment => ActionRequest::VerifyPayment { approved: true },
            Self::RejectPayment => ActionRequest::VerifyPayment { approved: false },
            Self::Process => ActionRequest::SetStatus(PaymentStatus::Processing),
            Self::Ship => ActionRequest::SetStatus(PaymentStatus::Shipped),
            Self::Cancel => ActionRequest::Cancel,
            Self::UploadProof => ActionRequest::UploadProof,
            Self::ConfirmReceived => ActionRequest::Receive,
        }
    }
}

/// Actions offered for `status`, advancing action first.
pub fn available_actions(viewer: Viewer, status: PaymentStatus) -> Vec<OrderAction> {
    use OrderAction as A;
    use PaymentStatus as S;
    match (viewer, status) {
        (Viewer::Merchant, S::Pending) => vec![A::VerifyPayment, A::RejectPayment],
        (Viewer::Merchant, S::Paid) => vec![A::Process, A::Cancel],
        (Viewer::Merchant, S::Processing) => vec![A::Ship],
        (Viewer::Buyer, S::Pending) => vec![A::UploadProof, A::Cancel],
        (Viewer::Buyer, S::Shipped) => vec![A::ConfirmReceived],
        _ => Vec::new(),
    }
}

/// Issue the call for a non-upload action.
pub async fn send_action(order_id: &str, request: ActionRequest) -> Result<Order, ApiError> {
    use crate::net::api;
    match request {
        ActionRequest::VerifyPayment { approved } => api::verify_payment(order_id, approved).await,
        ActionRequest::SetStatus(status) => api::update_order_status(order_id, status).await,
        ActionRequest::Cancel => api::cancel_order(order_id, None).await,
        ActionRequest::Receive => api::receive_order(order_id).await,
        ActionRequest::UploadProof => Err(ApiError::Unavailable),
    }
}

/// Status tab on order lists. `None` is "all".
pub fn filter_orders(orders: &[Order], tab: Option<PaymentStatus>) -> Vec<Order> {
    orders.iter().filter(|o| tab.is_none_or(|s| o.payment_status == s)).cloned().collect()
}

/// Insert or replace an order from a realtime event, newest first.
pub fn apply_event(orders: &mut Vec<Order>, event: &OrderEvent) {
    let incoming = event.order();
    if let Some(existing) = orders.iter_mut().find(|o| o.id == incoming.id) {
        *existing = incoming.clone();
    } else {
        orders.insert(0, incoming.clone());
    }
}

/// Dashboard summary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub aborted: usize,
    /// Sum of `totalAmount` over completed orders.
    pub revenue: f64,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self { total: orders.len(), ..Self::default() };
        for order in orders {
            match order.payment_status {
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Paid | PaymentStatus::Processing | PaymentStatus::Shipped => stats.in_progress += 1,
                PaymentStatus::Completed => {
                    stats.completed += 1;
                    stats.revenue += order.total_amount;
                }
                PaymentStatus::Failed | PaymentStatus::Cancelled => stats.aborted += 1,
            }
        }
        stats
    }

    pub fn count_for(orders: &[Order], status: PaymentStatus) -> usize {
        orders.iter().filter(|o| o.payment_status == status).count()
    }
}
