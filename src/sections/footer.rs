use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

const SERVICE_LINKS: [(&str, &str); 6] = [
    ("Search Engine Optimization", "#seo"),
    ("Social Media Marketing", "#social-media"),
    ("Content Marketing", "#content-marketing"),
    ("Pay-Per-Click Advertising", "#ppc"),
    ("Email Marketing", "#"),
    ("Analytics & Reporting", "#"),
];

const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("About Us", "#about"),
    ("Services", "#services"),
    ("Case Studies", "#case-studies"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

fn link_list(links: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul class="footer-links">
            { for links.iter().map(|(label, href)| html! {
                <li key={*label}>
                    <AnchorLink href={*href}>{*label}</AnchorLink>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <AnchorLink href="#home" class="nav-logo">
                            <span class="accent-light">{"Pixel"}</span>{"Pulse"}
                        </AnchorLink>
                        <p class="footer-blurb">
                            {"We're a full-service digital marketing agency helping businesses grow through innovative strategies and data-driven campaigns."}
                        </p>
                        <div class="social-row">
                            <a href="#" aria-label="Facebook">{"Fb"}</a>
                            <a href="#" aria-label="Twitter">{"X"}</a>
                            <a href="#" aria-label="Instagram">{"Ig"}</a>
                            <a href="#" aria-label="LinkedIn">{"In"}</a>
                        </div>
                    </div>

                    <div>
                        <h3>{"Our Services"}</h3>
                        { link_list(&SERVICE_LINKS) }
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        { link_list(&QUICK_LINKS) }
                    </div>

                    <div>
                        <h3>{"Contact Us"}</h3>
                        <ul class="footer-contact">
                            <li>{"123 Marketing Street"}<br />{"San Francisco, CA 94103"}</li>
                            <li><a href="tel:+11234567890">{"(123) 456-7890"}</a></li>
                            <li><a href="mailto:info@pixelpulse.com">{"info@pixelpulse.com"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("\u{a9} {} PixelPulse Digital Marketing Agency. All rights reserved.", year)}</p>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|label| html! {
                            <AnchorLink href="#">{*label}</AnchorLink>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
