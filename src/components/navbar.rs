use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::anchor_link::AnchorLink;
use crate::config;

struct NavLink {
    label: &'static str,
    href: &'static str,
}

struct NavItem {
    label: &'static str,
    href: &'static str,
    dropdown: &'static [NavLink],
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home", dropdown: &[] },
    NavItem {
        label: "Services",
        href: "#services",
        dropdown: &[
            NavLink { label: "SEO", href: "#seo" },
            NavLink { label: "Social Media", href: "#social-media" },
            NavLink { label: "Content Marketing", href: "#content-marketing" },
            NavLink { label: "PPC", href: "#ppc" },
        ],
    },
    NavItem { label: "Case Studies", href: "#case-studies", dropdown: &[] },
    NavItem { label: "About", href: "#about", dropdown: &[] },
    NavItem { label: "Blog", href: "#blog", dropdown: &[] },
    NavItem { label: "Contact", href: "#contact", dropdown: &[] },
];

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD
}

/// Opens `label`'s dropdown, or closes it if it is the one already open.
pub fn toggle_dropdown(open: Option<&'static str>, label: &'static str) -> Option<&'static str> {
    if open == Some(label) {
        None
    } else {
        Some(label)
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let open_dropdown = use_state(|| None::<&'static str>);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let desktop_items = NAV_ITEMS.iter().map(|item| {
        html! {
            <div class="nav-item" key={item.label}>
                <AnchorLink href={item.href} class="nav-link">{item.label}</AnchorLink>
                if !item.dropdown.is_empty() {
                    <>
                        <span class="chevron">{"\u{25BE}"}</span>
                        <div class="nav-dropdown">
                            { for item.dropdown.iter().map(|link| html! {
                                <AnchorLink href={link.href} class="nav-dropdown-link">{link.label}</AnchorLink>
                            }) }
                        </div>
                    </>
                }
            </div>
        }
    });

    let mobile_items = NAV_ITEMS.iter().map(|item| {
        let is_open = *open_dropdown == Some(item.label);
        let on_toggle = {
            let open_dropdown = open_dropdown.clone();
            let label = item.label;
            let has_dropdown = !item.dropdown.is_empty();
            Callback::from(move |_: MouseEvent| {
                if has_dropdown {
                    open_dropdown.set(toggle_dropdown(*open_dropdown, label));
                }
            })
        };
        html! {
            <div key={item.label}>
                <div class="mobile-nav-row" onclick={on_toggle}>
                    <AnchorLink href={item.href} class="mobile-nav-link" onclick={close_menu.clone()}>
                        {item.label}
                    </AnchorLink>
                    if !item.dropdown.is_empty() {
                        <span class={classes!("chevron", is_open.then(|| "rotated"))}>{"\u{25BE}"}</span>
                    }
                </div>
                if is_open {
                    <div class="mobile-dropdown">
                        { for item.dropdown.iter().map(|link| html! {
                            <AnchorLink href={link.href} class="mobile-dropdown-link" onclick={close_menu.clone()}>
                                {link.label}
                            </AnchorLink>
                        }) }
                    </div>
                }
            </div>
        }
    });

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <AnchorLink href="#home" class="nav-logo">
                    <span class="accent">{"Pixel"}</span>{"Pulse"}
                </AnchorLink>

                <div class="nav-desktop">
                    { for desktop_items }
                </div>

                <div class="nav-cta">
                    <AnchorLink href="#contact" class="btn btn-primary">{"Get a Quote"}</AnchorLink>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "\u{2715}" } else { "\u{2630}" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for mobile_items }
                <div class="mobile-cta">
                    <AnchorLink href="#contact" class="btn btn-primary btn-block" onclick={close_menu.clone()}>
                        {"Get a Quote"}
                    </AnchorLink>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_style_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn at_most_one_dropdown_is_open() {
        let open = toggle_dropdown(None, "Services");
        assert_eq!(open, Some("Services"));
        assert_eq!(toggle_dropdown(open, "Services"), None);
        assert_eq!(toggle_dropdown(open, "Blog"), Some("Blog"));
    }

    #[test]
    fn every_link_is_an_in_page_anchor() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('#'), "{}", item.label);
            for link in item.dropdown {
                assert!(link.href.starts_with('#'), "{}", link.label);
            }
        }
    }
}
