use leptos::{either::*, ev::MouseEvent, prelude::*};

use crate::button::{
    is_icon_only, visible_label, Activation, ButtonLayers, ButtonStyle, Dispatch, IconSide,
    LinkTarget, Slot,
};

/// A button drawn as two stacked layers: the control itself and a bordered
/// copy behind it that shifts on hover to look pressed.
///
/// With `href` it renders as a link and `on_activate` is ignored. Without a
/// label but with an icon it collapses to a fixed square.
#[component]
pub fn ActionButton(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional)] icon_side: IconSide,
    #[prop(optional, into)] background: Option<String>,
    #[prop(optional, into)] text: Option<String>,
    #[prop(optional, into)] hover_background: Option<String>,
    #[prop(optional, into)] border: Option<String>,
    #[prop(optional, into)] font_size: Option<String>,
    #[prop(optional, into)] padding: Option<String>,
    #[prop(optional, into)] margin: Option<String>,
    #[prop(optional, into)] corner: Option<String>,
    #[prop(optional, into)] on_activate: Option<Callback<()>>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] target: LinkTarget,
) -> impl IntoView {
    let label = visible_label(label.as_deref()).map(str::to_string);
    let icon_only = is_icon_only(label.as_deref(), icon.is_some());
    let ButtonLayers { base, hover } = ButtonStyle {
        background,
        text,
        hover_background,
        border,
        font_size,
        padding,
        margin,
        corner,
    }
    .layers(icon_only);
    let activation = Dispatch::new(href.as_deref(), target).bind::<MouseEvent, _>(move || {
        log::debug!("button activated");
        if let Some(cb) = on_activate.as_ref() {
            cb.run(());
        }
    });

    let content = move || {
        icon_side
            .slots()
            .into_iter()
            .map(|slot| match slot {
                Slot::Icon => icon.as_ref().map(ViewFn::run),
                Slot::Label => label.clone().map(|l| view! { <p>{l}</p> }.into_any()),
            })
            .collect_view()
    };

    match activation {
        Activation::Navigate { href, target } => Either::Left(view! {
            <div class="relative group">
                <a href=href target=target.as_attr() rel="noopener noreferrer" class=base>
                    {content()}
                </a>
                <div class=hover>{content()}</div>
            </div>
        }),
        Activation::Invoke(handler) => Either::Right(view! {
            <div class="relative group">
                <button type="button" class=base on:click=handler.clone()>
                    {content()}
                </button>
                <div class=hover on:click=handler>
                    {content()}
                </div>
            </div>
        }),
    }
}
