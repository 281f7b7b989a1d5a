// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents embedded in the binary and rendered
//! through Iced's `svg` widget, with handles cached in `OnceLock` so each
//! document is parsed once. Styling (the stroke color) is applied at the
//! call site via `svg::Style`, which keeps one source per glyph for both
//! light and dark surfaces.
//!
//! Naming follows the icon's appearance, not the action context
//! (`chevron_left`, not `previous_image`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

macro_rules! svg_doc {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

define_icon!(
    chevron_left,
    svg_doc!(r#"<polyline points="15 18 9 12 15 6"/>"#),
    "Left-pointing chevron."
);

define_icon!(
    chevron_right,
    svg_doc!(r#"<polyline points="9 18 15 12 9 6"/>"#),
    "Right-pointing chevron."
);

define_icon!(
    play,
    svg_doc!(r#"<polygon points="5 3 19 12 5 21 5 3"/>"#),
    "Play triangle."
);

define_icon!(
    pause,
    svg_doc!(r#"<rect x="6" y="4" width="4" height="16"/><rect x="14" y="4" width="4" height="16"/>"#),
    "Pause bars."
);

define_icon!(
    expand,
    svg_doc!(r#"<polyline points="15 3 21 3 21 9"/><polyline points="9 21 3 21 3 15"/><line x1="21" y1="3" x2="14" y2="10"/><line x1="3" y1="21" x2="10" y2="14"/>"#),
    "Expand arrows."
);

define_icon!(
    cross,
    svg_doc!(r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#),
    "Close cross."
);

define_icon!(
    image,
    svg_doc!(r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><polyline points="21 15 16 10 5 21"/>"#),
    "Picture frame."
);

define_icon!(
    heart,
    svg_doc!(r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#),
    "Heart outline."
);

define_icon!(
    download,
    svg_doc!(r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>"#),
    "Downward arrow into tray."
);

define_icon!(
    share,
    svg_doc!(r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><line x1="8.59" y1="13.51" x2="15.42" y2="17.49"/><line x1="15.41" y1="6.51" x2="8.59" y2="10.49"/>"#),
    "Share nodes."
);

define_icon!(
    checkmark,
    svg_doc!(r#"<polyline points="20 6 9 17 4 12"/>"#),
    "Check mark."
);

define_icon!(
    info,
    svg_doc!(r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#),
    "Information circle."
);

define_icon!(
    warning,
    svg_doc!(r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#),
    "Warning triangle."
);

define_icon!(
    film,
    svg_doc!(r#"<rect x="2" y="2" width="20" height="20" rx="2.18"/><line x1="7" y1="2" x2="7" y2="22"/><line x1="17" y1="2" x2="17" y2="22"/><line x1="2" y1="12" x2="22" y2="12"/>"#),
    "Film strip, used for the video badge."
);

/// Returns the icon at a fixed square size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
