//! Shared UI crate for the PRXM landing page. Components, catalog data and
//! localization live here; the platform crates only mount [`views::Home`].

pub mod catalog;
pub mod i18n;
pub mod views;

pub mod components {
    // Emblem (components/mark.rs)
    pub mod mark;
    pub use mark::Mark;

    // Page chrome: fixed nav bar + padded content region (components/frame.rs)
    pub mod frame;
    pub use frame::Frame;

    // Titled panel of link rows (components/group_card.rs)
    pub mod group_card;
    pub use group_card::GroupCard;
}

pub use catalog::{Group, LinkRecord};
