use log::warn;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that smooth-scrolls to in-page `#id` targets instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if is_in_page(&href) {
                e.prevent_default();
                if let Some(id) = anchor_target(&href) {
                    scroll_to_element(id);
                }
            }
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    html! {
        <a
            href={props.href.clone()}
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Element id a `#fragment` href points at. A bare `#` has none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Page offset that leaves the target just below the fixed header.
pub fn scroll_destination(target_top: f64, scroll_y: f64) -> f64 {
    target_top + scroll_y - config::ANCHOR_SCROLL_OFFSET
}

fn scroll_to_element(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        warn!("no element with id {:?} to scroll to", id);
        return;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_destination(target.get_bounding_client_rect().top(), scroll_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_are_intercepted() {
        assert!(is_in_page("#contact"));
        assert!(is_in_page("#"));
        assert!(!is_in_page("mailto:info@pixelpulse.com"));
        assert!(!is_in_page("https://example.com/#contact"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
    }

    #[test]
    fn destination_clears_the_header() {
        assert_eq!(scroll_destination(400.0, 1200.0), 1500.0);
        assert_eq!(scroll_destination(-300.0, 900.0), 500.0);
    }
}
