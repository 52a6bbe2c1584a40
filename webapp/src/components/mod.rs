pub mod button;
pub mod card;
pub mod icon;
pub mod navigation;
