use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

struct CaseStudy {
    id: &'static str,
    title: &'static str,
    client: &'static str,
    category: &'static str,
    image: &'static str,
    challenge: &'static str,
    solution: &'static str,
    results: [&'static str; 4],
}

static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: "ecommerce-seo",
        title: "Boosting Online Sales Through SEO",
        client: "Fashion Retailer",
        category: "E-commerce",
        image: "https://images.pexels.com/photos/6169/woman-hand-smartphone-desk.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "An established fashion retailer was struggling to compete with larger online stores and saw a decline in organic traffic and sales.",
        solution: "We implemented a comprehensive SEO strategy focusing on product page optimization, technical SEO improvements, and content marketing to target high-intent keywords.",
        results: [
            "152% increase in organic traffic within 6 months",
            "94% increase in online sales year-over-year",
            "Improved search rankings for 200+ key product terms",
            "Enhanced user engagement metrics with 23% lower bounce rate",
        ],
    },
    CaseStudy {
        id: "local-business",
        title: "Local Business Expansion Strategy",
        client: "Restaurant Chain",
        category: "Local SEO",
        image: "https://images.pexels.com/photos/7937574/pexels-photo-7937574.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "A growing restaurant chain wanted to increase foot traffic and awareness for their new locations but had limited marketing budget.",
        solution: "We developed a localized digital marketing strategy combining Google Business Profile optimization, local SEO, targeted social media campaigns, and review management.",
        results: [
            "Doubled foot traffic to new locations within 3 months",
            "300% increase in positive online reviews",
            "45% growth in social media followers and engagement",
            "Established local search dominance in target neighborhoods",
        ],
    },
    CaseStudy {
        id: "b2b-lead-gen",
        title: "B2B Lead Generation Campaign",
        client: "Software Company",
        category: "Lead Generation",
        image: "https://images.pexels.com/photos/8636595/pexels-photo-8636595.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        challenge: "A B2B software company was struggling to generate quality leads despite having an excellent product and strong market fit.",
        solution: "We created an integrated content marketing and PPC strategy with targeted landing pages, gated content, and automated lead nurturing workflows.",
        results: [
            "215% increase in qualified lead generation",
            "40% reduction in cost-per-acquisition",
            "35% improvement in lead-to-customer conversion rate",
            "Established thought leadership with 10x content engagement",
        ],
    },
];

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    // index into CASE_STUDIES of the study shown in the modal
    let active = use_state(|| None::<usize>);

    let close = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(None))
    };

    let modal = (*active).and_then(|index| CASE_STUDIES.get(index)).map(|study| {
        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-hero">
                        <img src={study.image} alt={study.title} />
                        <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"\u{2715}"}</button>
                    </div>
                    <div class="modal-body">
                        <span class="pill">{study.category}</span>
                        <h3>{study.title}</h3>
                        <p class="muted">{study.client}</p>

                        <h4>{"The Challenge"}</h4>
                        <p>{study.challenge}</p>
                        <h4>{"Our Solution"}</h4>
                        <p>{study.solution}</p>
                        <h4>{"The Results"}</h4>
                        <ul class="check-list">
                            { for study.results.iter().map(|result| html! { <li>{*result}</li> }) }
                        </ul>

                        <div class="modal-actions">
                            <button class="btn btn-ghost" onclick={close.clone()}>{"Close"}</button>
                            <AnchorLink href="#contact" class="btn btn-primary" onclick={close.clone()}>
                                {"Get Similar Results \u{2197}"}
                            </AnchorLink>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="case-studies" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Success Stories"}</h2>
                    <p>{"See how we've helped businesses like yours achieve remarkable growth through our data-driven digital marketing strategies."}</p>
                </div>

                <div class="card-grid three">
                    { for CASE_STUDIES.iter().enumerate().map(|(index, study)| {
                        let open = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(Some(index)))
                        };
                        html! {
                            <div class="card case-card" key={study.id} onclick={open}>
                                <div class="case-image">
                                    <img src={study.image} alt={study.title} />
                                    <div class="case-overlay">
                                        <span class="pill">{study.category}</span>
                                        <h3>{"View Case Study"}</h3>
                                    </div>
                                </div>
                                <div class="case-summary">
                                    <h3>{study.title}</h3>
                                    <p class="muted small">{study.client}</p>
                                    <p class="clamp">{study.challenge}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            { for modal }
        </section>
    }
}
