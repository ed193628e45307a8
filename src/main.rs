use log::info;
use yew::prelude::*;

mod config;
mod shell;
mod components {
    pub mod anchor_link;
    pub mod navbar;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod stats;
    pub mod case_studies;
    pub mod testimonials;
    pub mod team;
    pub mod blog;
    pub mod footer;
}
mod contact {
    pub mod validation;
    pub mod state;
    pub mod flow;
    pub mod submitter;
    pub mod form;
}

use components::navbar::Navbar;
use contact::form::ContactForm;
use sections::{
    blog::Blog,
    case_studies::CaseStudies,
    footer::Footer,
    hero::Hero,
    services::Services,
    stats::Stats,
    team::Team,
    testimonials::Testimonials,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <Hero />
            <Services />
            <Stats />
            <CaseStudies />
            <Testimonials />
            <Team />
            <Blog />
            <ContactForm />
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    shell::init_document();

    info!("Starting PixelPulse site");
    yew::Renderer::<App>::new().render();
}
