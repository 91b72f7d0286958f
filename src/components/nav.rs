use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_SOLID_OFFSET_PX;
use crate::content::{anchor_href, BRAND, NAV_LINKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Solid,
}

impl NavStyle {
    /// Re-evaluated on every scroll event, so it flips both ways.
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > NAV_SOLID_OFFSET_PX {
            NavStyle::Solid
        } else {
            NavStyle::Transparent
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            NavStyle::Solid => Some("scrolled"),
            NavStyle::Transparent => None,
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let style = NavStyle::from_offset(scroll_y);

    html! {
        <nav class={classes!("top-nav", style.class())}>
            <div class="nav-content">
                <div class="brand">
                    <div class="brand-mark">{"S"}</div>
                    <span class="brand-name">{BRAND}</span>
                </div>
                <div class="nav-right">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={anchor_href(link.anchor)} class="nav-link">{link.label}</a>
                    }) }
                    <a href="#waitlist" class="nav-cta">{"Get Early Access"}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_only_past_forty_pixels() {
        assert_eq!(NavStyle::from_offset(0.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(40.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_offset(40.5), NavStyle::Solid);
        assert_eq!(NavStyle::from_offset(2500.0), NavStyle::Solid);
    }

    #[test]
    fn toggles_back_when_scrolling_up() {
        let styles: Vec<_> = [0.0, 100.0, 0.0].into_iter().map(NavStyle::from_offset).collect();
        assert_eq!(styles, vec![NavStyle::Transparent, NavStyle::Solid, NavStyle::Transparent]);
    }

    #[test]
    fn only_solid_adds_a_class() {
        assert_eq!(NavStyle::Solid.class(), Some("scrolled"));
        assert_eq!(NavStyle::Transparent.class(), None);
    }
}
