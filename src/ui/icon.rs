use leptos::prelude::*;

/// Decorative SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const X: &str = "x";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const MIC: &str = "mic";
    pub const ARROW_RIGHT: &str = "arrow-right";
}
