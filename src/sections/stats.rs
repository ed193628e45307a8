use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

static STATS: [(&str, &str, &str); 4] = [
    ("\u{1F465}", "200+", "Happy Clients"),
    ("\u{1F3C6}", "500+", "Projects Completed"),
    ("\u{1F4C8}", "$50M+", "Client Revenue Generated"),
    ("\u{1F30D}", "15+", "Countries Served"),
];

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Impact by the Numbers"}</h2>
                    <p>{"We've helped businesses across industries achieve remarkable results through our data-driven approach."}</p>
                </div>

                <div class="card-grid four">
                    { for STATS.iter().map(|(icon, value, label)| html! {
                        <div class="card lift stat" key={*label}>
                            <div class="card-icon">{*icon}</div>
                            <h3 class="stat-value">{*value}</h3>
                            <p class="muted">{*label}</p>
                        </div>
                    }) }
                </div>

                <div class="cta-band">
                    <h3>{"Ready to Grow Your Business?"}</h3>
                    <p>{"Partner with us to transform your digital presence and achieve measurable results."}</p>
                    <AnchorLink href="#contact" class="btn btn-light">{"Get Started Today"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}
