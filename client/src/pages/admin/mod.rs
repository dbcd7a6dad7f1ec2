//! Admin area: overview, shop moderation, category tree and homepage carousel.

pub mod carousel;
pub mod categories;
pub mod dashboard;
pub mod shops;
