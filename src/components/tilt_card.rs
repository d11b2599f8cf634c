//! Tilt Card Component
//!
//! Card that leans toward the pointer with a moving glare.

use leptos::prelude::*;
use leptos_tilt::*;

use crate::config::MAX_TILT_DEG;

#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
    let tilt = create_tilt_signals();
    bind_window_resize(tilt);

    let on_mousemove = make_on_mousemove(tilt, MAX_TILT_DEG);
    let on_mouseleave = make_on_mouseleave(tilt);

    view! {
        <div class="stage">
            <div
                id="card"
                class="card"
                data-tilt=""
                style:transform=move || tilt.tilt_read.get().transform()
                on:mousemove=on_mousemove
                on:mouseleave=on_mouseleave
            >
                <div
                    id="glare"
                    class="glare"
                    aria-hidden="true"
                    style:background=move || tilt.tilt_read.get().glare()
                ></div>
                {children()}
            </div>
        </div>
    }
}
