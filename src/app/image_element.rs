use leptos::prelude::*;

use crate::image::{ImageSpec, Loading, Sizing};

/// An `<img>` wrapped in a `<figure>`, served from the site's image folder.
///
/// `src` is the logical path (e.g. `/hero/eye.png`). Size it with `width` and
/// `height`, or set `fill` to stretch it over a positioned parent. A `w-*`
/// class on the figure takes over from the pixel width.
///
/// Images without alt text are not rendered.
#[component]
pub fn ImageElement(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional)] fill: bool,
    #[prop(optional)] loading: Loading,
    #[prop(optional)] priority: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] img_class: Option<String>,
) -> impl IntoView {
    let spec = Sizing::resolve(width, height, fill, &src).and_then(|sizing| {
        let spec = ImageSpec {
            path: src,
            sizing,
            alt,
            loading,
            priority,
            class,
            img_class,
        };
        spec.validate()?;
        Ok(spec)
    });

    let spec = match spec {
        Ok(spec) => spec,
        Err(e) => {
            log::error!("{e}");
            return None;
        }
    };

    let dimensions = spec.dimensions();
    Some(view! {
        <figure
            class=spec.class.clone().unwrap_or_default()
            style=spec.figure_style().unwrap_or_default()
        >
            <img
                class=spec.img_class.clone().unwrap_or_default()
                src=spec.src()
                alt=spec.alt.clone()
                width=dimensions.map(|(w, _)| w.to_string())
                height=dimensions.map(|(_, h)| h.to_string())
                loading=spec.effective_loading().as_attr()
                fetchpriority=spec.fetch_priority()
                decoding="async"
                style=spec.img_style().unwrap_or_default()
            />
        </figure>
    })
}
