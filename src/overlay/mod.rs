pub mod interstitial;

pub use interstitial::{
    BANNER_ID, MODAL_ID, add_banner, attach_interstitial, build_modal, dismiss_interstitial,
    show_interstitial,
};
