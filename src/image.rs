use thiserror::Error;

use crate::style::StyleTokens;

/// Prefix every logical asset path is served under.
pub const ASSET_PREFIX: &str = "/images";

const FILL_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

impl Loading {
    pub fn as_attr(self) -> &'static str {
        match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    Fixed { width: u32, height: u32 },
    /// Stretch over the nearest positioned ancestor.
    Fill,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("image {0} has no alt text")]
    MissingAlt(String),
    #[error("image {0} needs a width and height unless it fills its container")]
    MissingDimensions(String),
}

impl Sizing {
    /// Fill wins over any numeric dimensions; otherwise both are required.
    pub fn resolve(
        width: Option<u32>,
        height: Option<u32>,
        fill: bool,
        logical_path: &str,
    ) -> Result<Self, ImageError> {
        match (fill, width, height) {
            (true, _, _) => Ok(Sizing::Fill),
            (false, Some(width), Some(height)) => Ok(Sizing::Fixed { width, height }),
            _ => Err(ImageError::MissingDimensions(resolve_asset(logical_path))),
        }
    }
}

pub fn resolve_asset(logical_path: &str) -> String {
    format!("{ASSET_PREFIX}{logical_path}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub path: String,
    pub sizing: Sizing,
    pub alt: String,
    pub loading: Loading,
    pub priority: bool,
    /// Classes for the wrapping `<figure>`. A width utility here takes over
    /// from the numeric width.
    pub class: Option<String>,
    pub img_class: Option<String>,
}

impl ImageSpec {
    pub fn new(path: impl Into<String>, sizing: Sizing, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sizing,
            alt: alt.into(),
            loading: Loading::default(),
            priority: false,
            class: None,
            img_class: None,
        }
    }

    pub fn validate(&self) -> Result<(), ImageError> {
        if self.alt.trim().is_empty() {
            return Err(ImageError::MissingAlt(self.src()));
        }
        Ok(())
    }

    pub fn src(&self) -> String {
        resolve_asset(&self.path)
    }

    pub fn width_from_class(&self) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| StyleTokens::new().push(c).has_utility("w-"))
    }

    /// Inline style for the `<figure>`, pinning its width in pixels unless a
    /// sizing class already does.
    pub fn figure_style(&self) -> Option<String> {
        match self.sizing {
            Sizing::Fixed { width, .. } if !self.width_from_class() => {
                Some(format!("width: {width}px"))
            }
            _ => None,
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self.sizing {
            Sizing::Fixed { width, height } => Some((width, height)),
            Sizing::Fill => None,
        }
    }

    pub fn img_style(&self) -> Option<&'static str> {
        matches!(self.sizing, Sizing::Fill).then_some(FILL_STYLE)
    }

    /// Priority images are never deferred.
    pub fn effective_loading(&self) -> Loading {
        if self.priority {
            Loading::Eager
        } else {
            self.loading
        }
    }

    pub fn fetch_priority(&self) -> Option<&'static str> {
        self.priority.then_some("high")
    }
}
