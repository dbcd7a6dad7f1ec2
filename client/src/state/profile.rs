//! Profile and saved-address forms.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Address, ProfileUpdate, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self { name: user.name.clone(), phone: user.phone.clone().unwrap_or_default() }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Nama wajib diisi".to_owned());
        }
        let phone = self.phone.trim();
        if !phone.is_empty() && !is_phone(phone) {
            return Err("Nomor telepon tidak valid".to_owned());
        }
        Ok(ProfileUpdate { name: name.to_owned(), phone: (!phone.is_empty()).then(|| phone.to_owned()) })
    }
}

/// Digits with an optional leading `+`, spaces and dashes allowed, 8 to 15 digits.
pub fn is_phone(raw: &str) -> bool {
    let body = raw.strip_prefix('+').unwrap_or(raw);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (8..=15).contains(&digits)
}

/// Validate an address before create/update. Returns the trimmed record.
pub fn validate_address(address: &Address) -> Result<Address, String> {
    let mut out = address.clone();
    for field in [
        &mut out.label,
        &mut out.recipient_name,
        &mut out.phone,
        &mut out.street,
        &mut out.city,
        &mut out.province,
        &mut out.postal_code,
    ] {
        *field = field.trim().to_owned();
    }
    if out.recipient_name.is_empty() {
        return Err("Nama penerima wajib diisi".to_owned());
    }
    if !is_phone(&out.phone) {
        return Err("Nomor telepon penerima tidak valid".to_owned());
    }
    if out.street.is_empty() || out.city.is_empty() {
        return Err("Alamat dan kota wajib diisi".to_owned());
    }
    if !out.postal_code.is_empty() && !(out.postal_code.len() == 5 && out.postal_code.chars().all(|c| c.is_ascii_digit())) {
        return Err("Kode pos harus 5 digit".to_owned());
    }
    Ok(out)
}

/// Default address first, then by label.
pub fn sort_addresses(addresses: &mut [Address]) {
    addresses.sort_by(|a, b| b.is_default.cmp(&a.is_default).then_with(|| a.label.cmp(&b.label)));
}
