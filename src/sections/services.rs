use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

struct Service {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 5],
}

static SERVICES: [Service; 4] = [
    Service {
        id: "seo",
        icon: "\u{1F50D}",
        title: "Search Engine Optimization",
        description: "Boost your website visibility and drive organic traffic through our comprehensive SEO solutions.",
        features: [
            "Keyword Research & Strategy",
            "On-Page SEO Optimization",
            "Technical SEO Audits",
            "Link Building & Outreach",
            "Local SEO for Businesses",
        ],
    },
    Service {
        id: "social-media",
        icon: "\u{1F4E3}",
        title: "Social Media Marketing",
        description: "Engage your audience and build brand awareness with strategic social media campaigns.",
        features: [
            "Social Media Strategy",
            "Content Creation & Curation",
            "Community Management",
            "Paid Social Campaigns",
            "Social Analytics & Reporting",
        ],
    },
    Service {
        id: "content-marketing",
        icon: "\u{1F310}",
        title: "Content Marketing",
        description: "Create compelling content that resonates with your audience and drives conversions.",
        features: [
            "Content Strategy Development",
            "Blog Writing & Management",
            "Ebooks & White Papers",
            "Video Content Production",
            "Content Distribution",
        ],
    },
    Service {
        id: "ppc",
        icon: "\u{1F4CA}",
        title: "Pay-Per-Click Advertising",
        description: "Maximize your ROI with targeted PPC campaigns across multiple platforms.",
        features: [
            "Google Ads Management",
            "Bing Ads Campaigns",
            "Display & Remarketing",
            "Shopping Ads Optimization",
            "PPC Audit & Strategy",
        ],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section tinted">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Digital Marketing Services"}</h2>
                    <p>{"We offer a comprehensive suite of digital marketing solutions tailored to help your business grow and succeed in the digital landscape."}</p>
                </div>

                <div class="card-grid four">
                    { for SERVICES.iter().map(|service| html! {
                        <div id={service.id} key={service.id} class="card lift">
                            <div class="card-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <ul class="check-list">
                                { for service.features.iter().map(|feature| html! {
                                    <li>{*feature}</li>
                                }) }
                            </ul>
                            <AnchorLink href="#contact" class="text-link">{"Learn more \u{2192}"}</AnchorLink>
                        </div>
                    }) }
                </div>

                <div class="centered-cta">
                    <AnchorLink href="#contact" class="btn btn-primary">{"Get a Free Consultation"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ServiceInterest;

    #[test]
    fn contact_checkboxes_do_not_reuse_card_ids() {
        for service in ServiceInterest::ALL {
            let input_id = service.input_id();
            assert!(SERVICES.iter().all(|card| card.id != input_id), "{input_id} collides");
        }
    }
}
