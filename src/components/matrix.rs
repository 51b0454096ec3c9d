//! Host elements for the rain animation.
//!
//! The engine finds these by id through [`CanvasSurface`](crate::backend::CanvasSurface)
//! and toggles `aria-hidden` on the area itself.

use leptos::prelude::*;

use crate::backend::canvas::{AREA_ID, CANVAS_ID};

stylance::import_crate_style!(css, "src/components/matrix.module.css");

#[component]
pub fn MatrixArea() -> impl IntoView {
    view! {
        <div id=AREA_ID class=css::area aria-hidden="true">
            <canvas id=CANVAS_ID class=css::canvas></canvas>
        </div>
    }
}
