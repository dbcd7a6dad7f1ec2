//! Shop moderation for the admin panel.

#[cfg(test)]
#[path = "shops_test.rs"]
mod shops_test;

use crate::net::types::{Shop, ShopStatus};

/// A moderation button on a shop row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopAction {
    Approve,
    Reject,
    Suspend,
    Reactivate,
}

impl ShopAction {
    pub fn target(self) -> ShopStatus {
        match self {
            Self::Approve | Self::Reactivate => ShopStatus::Active,
            Self::Reject => ShopStatus::Rejected,
            Self::Suspend => ShopStatus::Suspended,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Setujui",
            Self::Reject => "Tolak",
            Self::Suspend => "Tangguhkan",
            Self::Reactivate => "Aktifkan Kembali",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Approve => "Toko disetujui",
            Self::Reject => "Toko ditolak",
            Self::Suspend => "Toko ditangguhkan",
            Self::Reactivate => "Toko diaktifkan kembali",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Reject | Self::Suspend)
    }
}

/// Transitions offered from `status`.
pub fn shop_actions(status: ShopStatus) -> Vec<ShopAction> {
    match status {
        ShopStatus::Pending => vec![ShopAction::Approve, ShopAction::Reject],
        ShopStatus::Active => vec![ShopAction::Suspend],
        ShopStatus::Suspended | ShopStatus::Rejected => vec![ShopAction::Reactivate],
    }
}

/// Status tab plus case-insensitive search over name, slug and owner.
pub fn filter_shops(shops: &[Shop], tab: Option<ShopStatus>, query: &str) -> Vec<Shop> {
    let needle = query.trim().to_lowercase();
    shops
        .iter()
        .filter(|s| tab.is_none_or(|t| s.status == t))
        .filter(|s| needle.is_empty() || shop_matches(s, &needle))
        .cloned()
        .collect()
}

fn shop_matches(shop: &Shop, needle: &str) -> bool {
    let owner = shop.owner.as_ref();
    [
        Some(shop.name.as_str()),
        Some(shop.slug.as_str()),
        owner.map(|o| o.name.as_str()),
        owner.and_then(|o| o.email.as_deref()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn count_with_status(shops: &[Shop], status: ShopStatus) -> usize {
    shops.iter().filter(|s| s.status == status).count()
}

/// Replace a shop after a successful status change.
pub fn replace_shop(shops: &mut [Shop], updated: Shop) {
    if let Some(slot) = shops.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}
