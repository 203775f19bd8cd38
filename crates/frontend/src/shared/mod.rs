pub mod announcer;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod icons;
pub mod motion;
pub mod tabs;
pub mod theme;
