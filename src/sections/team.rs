use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

struct TeamMember {
    name: &'static str,
    position: &'static str,
    image: &'static str,
    bio: &'static str,
    linkedin: Option<&'static str>,
    twitter: Option<&'static str>,
    email: Option<&'static str>,
}

static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alex Morgan",
        position: "CEO & Founder",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "Digital marketing veteran with 15+ years of experience helping brands transform their online presence.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("alex@pixelpulse.com"),
    },
    TeamMember {
        name: "Samantha Lee",
        position: "Head of SEO",
        image: "https://images.pexels.com/photos/3776932/pexels-photo-3776932.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "SEO expert specializing in technical optimization and content strategy that drives organic growth.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("samantha@pixelpulse.com"),
    },
    TeamMember {
        name: "Marcus Johnson",
        position: "Creative Director",
        image: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "Award-winning creative with a passion for designing digital experiences that convert.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("marcus@pixelpulse.com"),
    },
    TeamMember {
        name: "Priya Patel",
        position: "PPC Specialist",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        bio: "Data-driven marketer focused on maximizing ROI across Google Ads, Facebook, and emerging platforms.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("priya@pixelpulse.com"),
    },
];

static OPENINGS: [(&str, &str); 3] = [
    ("Social Media Manager", "Full-time"),
    ("SEO Specialist", "Full-time"),
    ("Content Writer", "Freelance"),
];

fn social_links(member: &TeamMember) -> Html {
    let linkedin = member.linkedin.map(|href| html! {
        <a href={href} aria-label={format!("{}'s LinkedIn Profile", member.name)}>{"in"}</a>
    });
    let twitter = member.twitter.map(|href| html! {
        <a href={href} aria-label={format!("{}'s Twitter Profile", member.name)}>{"X"}</a>
    });
    let email = member.email.map(|address| html! {
        <a href={format!("mailto:{}", address)} aria-label={format!("Email {}", member.name)}>{"@"}</a>
    });

    html! {
        <div class="social-row">
            { for linkedin }
            { for twitter }
            { for email }
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Meet Our Team"}</h2>
                    <p>{"We're a team of digital marketing experts passionate about helping businesses grow. Get to know the people behind your success."}</p>
                </div>

                <div class="card-grid four">
                    { for TEAM.iter().map(|member| html! {
                        <div class="card member-card" key={member.name}>
                            <div class="member-photo">
                                <img src={member.image} alt={member.name} />
                                <div class="member-overlay">{ social_links(member) }</div>
                            </div>
                            <div class="member-info">
                                <h3>{member.name}</h3>
                                <p class="accent small">{member.position}</p>
                                <p class="muted">{member.bio}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="careers">
                    <div class="careers-copy">
                        <h3>{"Join Our Talented Team"}</h3>
                        <p class="muted">{"We're always looking for passionate digital marketers to join our growing team. If you're creative, data-driven, and passionate about helping businesses grow, we'd love to hear from you."}</p>
                        <AnchorLink href="#contact" class="btn btn-dark">{"View Open Positions"}</AnchorLink>
                    </div>
                    <div class="card openings">
                        <h4>{"Current Openings"}</h4>
                        <ul>
                            { for OPENINGS.iter().map(|(role, kind)| html! {
                                <li key={*role}>
                                    <span>{*role}</span>
                                    <span class="pill small">{*kind}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
