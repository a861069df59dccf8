pub mod booking_form;
pub mod card_gallery;
pub mod common;
pub mod footer;
pub mod grid_scan;
pub mod hero;
pub mod home_section;
pub mod hooks;
pub mod icon;
pub mod intro;
pub mod light_rays;
pub mod lineup;
pub mod manifesto;
pub mod scrolling_sections;
pub mod stage_scene;
#[cfg(not(feature = "ssr"))]
pub mod storage;
pub mod webgl;

pub use booking_form::BookingModal;
pub use card_gallery::CardGallery;
pub use footer::Footer;
pub use grid_scan::GridScan;
pub use hero::Hero;
pub use home_section::HomeSection;
pub use icon::{Icon, icons};
pub use intro::{IntroAnimation, ScanTransition};
pub use light_rays::LightRays;
pub use lineup::Lineup;
pub use manifesto::Manifesto;
pub use scrolling_sections::ScrollingSections;
pub use stage_scene::{Microphone, StageScene};
