use crate::style::{resolve_token, StyleTokens};

pub const DEFAULT_BACKGROUND: &str = "bg-gray-800";
pub const DEFAULT_TEXT: &str = "text-black";
pub const DEFAULT_HOVER_BACKGROUND: &str = "bg-yellow-500";
pub const DEFAULT_BORDER: &str = "border-gray-900";
pub const DEFAULT_FONT_SIZE: &str = "text-[10px]";
pub const DEFAULT_PADDING: &str = "py-1 px-4";
pub const DEFAULT_MARGIN: &str = "mt-[10px] ml-[6px]";
pub const DEFAULT_CORNER: &str = "rounded-sm";

// base-layer stand-ins for an explicitly empty background or text colour
const EMPTY_BACKGROUND: &str = "bg-pink-500";
const EMPTY_TEXT: &str = "text-white";

const BASE_LAYOUT: &str = "relative inline-flex items-center justify-center gap-1";
const HOVER_LAYOUT: &str =
    "absolute top-1 flex items-center justify-center gap-1 transition-all duration-200";
const HOVER_OFFSET: &str =
    "group-hover:cursor-pointer group-hover:mt-[5px] group-hover:ml-[5.1px] border";

/// Square footprint shared by both layers of an icon-only button.
pub const ICON_ONLY_FOOTPRINT: &str = "w-6 h-6";
/// Background forced onto the base layer of an icon-only button.
pub const ICON_ONLY_BACKGROUND: &str = "!bg-gray-800";
const ICON_ONLY_HOVER_PADDING: &str = "p-0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Icon,
    Label,
}

impl IconSide {
    /// Order in which the icon and label are laid out inside a layer.
    pub fn slots(self) -> [Slot; 2] {
        match self {
            IconSide::Left => [Slot::Icon, Slot::Label],
            IconSide::Right => [Slot::Label, Slot::Icon],
        }
    }
}

/// Browsing context a navigational button opens its destination in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkTarget {
    #[default]
    NewWindow,
    SameWindow,
    ParentFrame,
    TopFrame,
}

impl LinkTarget {
    pub fn as_attr(self) -> &'static str {
        match self {
            LinkTarget::NewWindow => "_blank",
            LinkTarget::SameWindow => "_self",
            LinkTarget::ParentFrame => "_parent",
            LinkTarget::TopFrame => "_top",
        }
    }
}

/// What interacting with a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Link { href: String, target: LinkTarget },
    Action,
}

/// A [`Dispatch`] bound to its activation callback.
///
/// A link carries no handler at all, so neither of its layers can run the
/// callback; an action shares one handler between both layers.
#[derive(Debug, Clone)]
pub enum Activation<H> {
    Navigate { href: String, target: LinkTarget },
    Invoke(H),
}

impl Dispatch {
    /// Any non-empty destination makes the button a link, kept verbatim.
    pub fn new(destination: Option<&str>, target: LinkTarget) -> Self {
        match destination {
            Some(href) if !href.is_empty() => Dispatch::Link {
                href: href.to_string(),
                target,
            },
            _ => Dispatch::Action,
        }
    }

    /// Each call of the returned handler runs `on_activate` exactly once.
    pub fn bind<E, F>(self, on_activate: F) -> Activation<impl Fn(E) + Clone + 'static>
    where
        E: 'static,
        F: Fn() + Clone + 'static,
    {
        match self {
            Dispatch::Link { href, target } => Activation::Navigate { href, target },
            Dispatch::Action => Activation::Invoke(move |_: E| on_activate()),
        }
    }
}

/// Returns the label unless it is missing or empty.
pub fn visible_label(label: Option<&str>) -> Option<&str> {
    label.filter(|l| !l.is_empty())
}

pub fn is_icon_only(label: Option<&str>, has_icon: bool) -> bool {
    has_icon && visible_label(label).is_none()
}

/// Caller-supplied style tokens.
///
/// `None` takes the documented default. An empty string is an explicit
/// choice: on the base layer an empty background or text colour falls back to
/// pink on white and empty sizing tokens to their defaults; everywhere else an
/// empty token contributes no class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: Option<String>,
    pub text: Option<String>,
    pub hover_background: Option<String>,
    pub border: Option<String>,
    pub font_size: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub corner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLayers {
    pub base: String,
    pub hover: String,
}

impl ButtonStyle {
    pub fn layers(&self, icon_only: bool) -> ButtonLayers {
        let text = self.text.as_deref();
        let font_size = self.font_size.as_deref();
        let padding = self.padding.as_deref();
        let corner = resolve_token(self.corner.as_deref(), DEFAULT_CORNER, "");

        // icon-only replaces the supplied background instead of stacking on it
        let background = if icon_only {
            ICON_ONLY_BACKGROUND
        } else {
            resolve_token(
                self.background.as_deref(),
                DEFAULT_BACKGROUND,
                EMPTY_BACKGROUND,
            )
        };

        let base = StyleTokens::new()
            .push(BASE_LAYOUT)
            .push(background)
            .push(resolve_token(text, DEFAULT_TEXT, EMPTY_TEXT))
            .push(resolve_token(
                self.margin.as_deref(),
                DEFAULT_MARGIN,
                DEFAULT_MARGIN,
            ))
            .push(resolve_token(font_size, DEFAULT_FONT_SIZE, DEFAULT_FONT_SIZE))
            .push(resolve_token(padding, DEFAULT_PADDING, DEFAULT_PADDING))
            .push(corner)
            .push_if(icon_only, ICON_ONLY_FOOTPRINT);

        let hover = StyleTokens::new()
            .push(HOVER_LAYOUT)
            .push(HOVER_OFFSET)
            .push(resolve_token(
                self.hover_background.as_deref(),
                DEFAULT_HOVER_BACKGROUND,
                "",
            ))
            .push(resolve_token(self.border.as_deref(), DEFAULT_BORDER, ""))
            .push(corner)
            .push(resolve_token(text, DEFAULT_TEXT, ""))
            .push(resolve_token(font_size, DEFAULT_FONT_SIZE, ""))
            .push(resolve_token(padding, DEFAULT_PADDING, ""))
            .push_if(icon_only, ICON_ONLY_FOOTPRINT)
            .push_if(icon_only, ICON_ONLY_HOVER_PADDING);

        ButtonLayers {
            base: base.into(),
            hover: hover.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{cell::Cell, rc::Rc};

    fn classes(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn defaults_applied_to_both_layers() {
        let layers = ButtonStyle::default().layers(false);
        assert_eq!(
            layers.base,
            "relative inline-flex items-center justify-center gap-1 bg-gray-800 text-black \
             mt-[10px] ml-[6px] text-[10px] py-1 px-4 rounded-sm"
        );
        assert_eq!(
            layers.hover,
            "absolute top-1 flex items-center justify-center gap-1 transition-all duration-200 \
             group-hover:cursor-pointer group-hover:mt-[5px] group-hover:ml-[5.1px] border \
             bg-yellow-500 border-gray-900 rounded-sm text-black text-[10px] py-1 px-4"
        );
    }

    fn empty(field: impl FnOnce(&mut ButtonStyle)) -> ButtonLayers {
        let mut style = ButtonStyle::default();
        field(&mut style);
        style.layers(false)
    }

    #[test]
    fn empty_background_turns_pink() {
        let layers = empty(|s| s.background = Some(String::new()));
        assert!(classes(&layers.base).contains(&"bg-pink-500"));
        assert!(!classes(&layers.base).contains(&"bg-gray-800"));
    }

    #[test]
    fn empty_text_is_white_on_base_only() {
        let layers = empty(|s| s.text = Some(String::new()));
        assert!(classes(&layers.base).contains(&"text-white"));
        assert!(!classes(&layers.hover).contains(&"text-white"));
        assert!(!classes(&layers.hover).contains(&"text-black"));
    }

    #[test]
    fn empty_hover_background_adds_nothing() {
        let layers = empty(|s| s.hover_background = Some(String::new()));
        assert!(!layers.hover.contains("bg-"));
    }

    #[test]
    fn empty_border_adds_nothing() {
        let layers = empty(|s| s.border = Some(String::new()));
        assert_eq!(classes(&layers.hover).iter().filter(|c| c.starts_with("border")).count(), 1);
        assert!(!classes(&layers.hover).contains(&"border-gray-900"));
    }

    #[test]
    fn empty_corner_adds_nothing() {
        let layers = empty(|s| s.corner = Some(String::new()));
        assert!(!layers.base.contains("rounded"));
        assert!(!layers.hover.contains("rounded"));
    }

    #[test]
    fn empty_sizing_tokens_default_on_base_only() {
        let layers = empty(|s| {
            s.font_size = Some(String::new());
            s.padding = Some(String::new());
            s.margin = Some(String::new());
        });
        let base = classes(&layers.base);
        assert!(base.contains(&"text-[10px]"));
        assert!(base.contains(&"py-1"));
        assert!(base.contains(&"mt-[10px]"));
        let hover = classes(&layers.hover);
        assert!(!hover.contains(&"text-[10px]"));
        assert!(!hover.contains(&"py-1"));
    }

    #[test]
    fn whitespace_tokens_contribute_no_class() {
        let layers = empty(|s| s.background = Some("   ".into()));
        assert!(!layers.base.contains("bg-"));
        assert!(!layers.base.contains("  "));
    }

    #[test]
    fn supplied_tokens_replace_defaults() {
        let style = ButtonStyle {
            background: Some("bg-white".into()),
            hover_background: Some("bg-gray-100".into()),
            corner: Some("rounded-full".into()),
            ..Default::default()
        };
        let layers = style.layers(false);
        assert!(classes(&layers.base).contains(&"bg-white"));
        assert!(!classes(&layers.base).contains(&"bg-gray-800"));
        assert!(classes(&layers.hover).contains(&"bg-gray-100"));
        assert!(classes(&layers.hover).contains(&"rounded-full"));
        assert!(!classes(&layers.hover).contains(&"rounded-sm"));
    }

    #[test]
    fn icon_only_forces_square_and_background() {
        let style = ButtonStyle {
            background: Some("bg-white".into()),
            hover_background: Some("bg-gray-100".into()),
            ..Default::default()
        };
        let layers = style.layers(true);
        let base = classes(&layers.base);
        assert!(base.contains(&"!bg-gray-800"));
        assert!(!base.contains(&"bg-white"));
        assert!(base.ends_with(&["w-6", "h-6"]));

        let hover = classes(&layers.hover);
        assert!(hover.ends_with(&["w-6", "h-6", "p-0"]));
        // hover background stays caller controlled
        assert!(hover.contains(&"bg-gray-100"));
    }

    #[test]
    fn icon_only_detection() {
        assert!(is_icon_only(None, true));
        assert!(is_icon_only(Some(""), true));
        assert!(!is_icon_only(Some("Next"), true));
        assert!(!is_icon_only(Some("  "), true));
        assert!(!is_icon_only(None, false));
        assert_eq!(visible_label(Some("  ")), Some("  "));
    }

    #[test]
    fn icon_side_orders_slots() {
        assert_eq!(IconSide::default().slots(), [Slot::Icon, Slot::Label]);
        assert_eq!(IconSide::Right.slots(), [Slot::Label, Slot::Icon]);
    }

    #[test]
    fn link_targets() {
        assert_eq!(LinkTarget::default().as_attr(), "_blank");
        assert_eq!(LinkTarget::SameWindow.as_attr(), "_self");
        assert_eq!(LinkTarget::ParentFrame.as_attr(), "_parent");
        assert_eq!(LinkTarget::TopFrame.as_attr(), "_top");
    }

    #[test]
    fn destination_selects_dispatch() {
        let link = Dispatch::new(Some("https://www.google.com"), LinkTarget::default());
        assert_eq!(
            link,
            Dispatch::Link {
                href: "https://www.google.com".into(),
                target: LinkTarget::NewWindow,
            }
        );
        assert_eq!(Dispatch::new(None, LinkTarget::TopFrame), Dispatch::Action);
        assert_eq!(Dispatch::new(Some(""), LinkTarget::TopFrame), Dispatch::Action);
        assert_eq!(
            Dispatch::new(Some("  "), LinkTarget::SameWindow),
            Dispatch::Link {
                href: "  ".into(),
                target: LinkTarget::SameWindow,
            }
        );
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + Clone + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn action_layers_share_one_handler() {
        let (count, bump) = counter();
        let Activation::Invoke(base) = Dispatch::Action.bind::<(), _>(bump) else {
            panic!("an action must bind a handler");
        };
        let hover = base.clone();

        base(());
        assert_eq!(count.get(), 1);
        hover(());
        assert_eq!(count.get(), 2);
        base(());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn link_binds_no_handler() {
        let (count, bump) = counter();
        let link = Dispatch::new(Some("/about"), LinkTarget::SameWindow);
        match link.bind::<(), _>(bump) {
            Activation::Navigate { href, target } => {
                assert_eq!(href, "/about");
                assert_eq!(target, LinkTarget::SameWindow);
            }
            Activation::Invoke(_) => panic!("a link must not bind a handler"),
        }
        assert_eq!(count.get(), 0);
    }
}
