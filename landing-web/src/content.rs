//! Hero copy and call-to-action links as plain data.
//!
//! Nothing here depends on the display mode; the view pairs this content with
//! a [`Palette`](crate::theme::Palette) at render time.

use crate::utils::constants::{
    DOCS_LABEL, DOCS_URL, NEW_CONTEXT_REL, NEW_CONTEXT_TARGET, SOURCE_LABEL, SOURCE_URL,
    SUBTITLE, TITLE,
};

/// Visual weight of a call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    Filled,
    Outlined,
}

/// `target` / `rel` attribute pair of an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub target: &'static str,
    pub rel: &'static str,
}

impl LinkTarget {
    /// Opens in a new browsing context that gets no `window.opener` and no
    /// `Referer`.
    pub const NEW_CONTEXT: LinkTarget = LinkTarget {
        target: NEW_CONTEXT_TARGET,
        rel: NEW_CONTEXT_REL,
    };

    pub fn opens_new_context(&self) -> bool {
        self.target == NEW_CONTEXT_TARGET
    }

    pub fn has_rel(&self, token: &str) -> bool {
        self.rel.split_ascii_whitespace().any(|t| t.eq_ignore_ascii_case(token))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub label: &'static str,
    pub href: &'static str,
    pub style: ActionStyle,
    pub target: LinkTarget,
}

/// Everything the landing page says.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub actions: [ActionLink; 2],
}

impl HeroContent {
    pub const fn landing() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            actions: [
                ActionLink {
                    label: DOCS_LABEL,
                    href: DOCS_URL,
                    style: ActionStyle::Filled,
                    target: LinkTarget::NEW_CONTEXT,
                },
                ActionLink {
                    label: SOURCE_LABEL,
                    href: SOURCE_URL,
                    style: ActionStyle::Outlined,
                    target: LinkTarget::NEW_CONTEXT,
                },
            ],
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self::landing()
    }
}

/// Host part of an absolute `https://` address, followed by its path.
///
/// Returns `None` for anything that is not an absolute https address.
pub fn host_and_path(href: &str) -> Option<&str> {
    let rest = href.strip_prefix("https://")?;
    if rest.is_empty() || rest.starts_with('/') {
        return None;
    }
    Some(rest)
}
