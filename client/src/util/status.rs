//! Status labels and badge classes shared by every order and shop view.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::{PaymentStatus, ShopStatus};

/// Indonesian label for an order status.
pub fn order_status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "Menunggu Pembayaran",
        PaymentStatus::Paid => "Dibayar",
        PaymentStatus::Processing => "Diproses",
        PaymentStatus::Shipped => "Dikirim",
        PaymentStatus::Completed => "Selesai",
        PaymentStatus::Failed => "Gagal",
        PaymentStatus::Cancelled => "Dibatalkan",
    }
}

/// BEM modifier class for an order status badge.
pub fn order_status_class(status: PaymentStatus) -> String {
    format!("badge badge--{}", order_status_tone(status))
}

fn order_status_tone(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "warning",
        PaymentStatus::Paid | PaymentStatus::Processing => "info",
        PaymentStatus::Shipped => "accent",
        PaymentStatus::Completed => "success",
        PaymentStatus::Failed | PaymentStatus::Cancelled => "danger",
    }
}

pub fn shop_status_label(status: ShopStatus) -> &'static str {
    match status {
        ShopStatus::Pending => "Menunggu Verifikasi",
        ShopStatus::Active => "Aktif",
        ShopStatus::Suspended => "Ditangguhkan",
        ShopStatus::Rejected => "Ditolak",
    }
}

pub fn shop_status_class(status: ShopStatus) -> String {
    let tone = match status {
        ShopStatus::Pending => "warning",
        ShopStatus::Active => "success",
        ShopStatus::Suspended => "muted",
        ShopStatus::Rejected => "danger",
    };
    format!("badge badge--{tone}")
}
