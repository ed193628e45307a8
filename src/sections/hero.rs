use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const AVATAR_IMAGE: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&h=75";

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-gradient"></div>
            // animated shapes
            <div class="blob blob-purple animate-blob"></div>
            <div class="blob blob-blue animate-blob animation-delay-2000"></div>
            <div class="blob blob-orange animate-blob animation-delay-4000"></div>

            <div class="container hero-content">
                <div class="hero-copy">
                    <div class="pill">{"Elevate Your Digital Presence"}</div>
                    <h1>
                        {"Drive Growth with "}<span class="accent">{"Strategic"}</span>{" Digital Marketing"}
                    </h1>
                    <p class="hero-subtitle">
                        {"We help businesses like yours achieve exceptional growth through data-driven marketing strategies and cutting-edge digital solutions."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink href="#contact" class="btn btn-primary">{"Get Started"}</AnchorLink>
                        <AnchorLink href="#services" class="btn btn-outline">{"Our Services \u{2192}"}</AnchorLink>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-frame">
                        <img src={HERO_IMAGE} alt="Digital Marketing Team" />
                        <div class="badge badge-clients">
                            <div class="avatar-stack">
                                { for (0..3).map(|_| html! {
                                    <img src={AVATAR_IMAGE} alt="Team member" />
                                }) }
                            </div>
                            <div>
                                <p class="badge-value">{"+200"}</p>
                                <p class="badge-label">{"Happy Clients"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="badge badge-growth">
                        <span class="trend">{"\u{2197}"}</span>
                        <div>
                            <p class="badge-value">{"96% Growth"}</p>
                            <p class="badge-label">{"Avg. Client Results"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
