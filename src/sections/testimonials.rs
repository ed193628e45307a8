use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    position: &'static str,
    company: &'static str,
    image: &'static str,
    quote: &'static str,
    rating: usize,
}

const MAX_RATING: usize = 5;

static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Johnson",
        position: "Marketing Director",
        company: "TechAdvance",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        quote: "Working with this team has transformed our digital presence. They didn't just improve our metrics; they helped us understand our audience better and craft messages that truly resonate.",
        rating: 5,
    },
    Testimonial {
        name: "James Rodriguez",
        position: "CEO",
        company: "GrowthHackers",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        quote: "The ROI we've seen from our campaigns is incredible. Within just 3 months, we saw a 200% increase in qualified leads. Their data-driven approach and creativity are a powerful combination.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Chen",
        position: "E-commerce Manager",
        company: "StyleBoutique",
        image: "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        quote: "Our online sales have doubled since implementing their SEO and PPC strategies. Their team is responsive, professional, and truly invested in our success. Couldn't recommend them more highly.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Taylor",
        position: "Founder",
        company: "InnovateNow",
        image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        quote: "What sets this agency apart is their strategic thinking. They don't just execute tasks; they provide insights that have helped shape our overall business strategy. A true partnership.",
        rating: 5,
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

pub fn clamp_index(requested: usize, len: usize) -> usize {
    requested.min(len.saturating_sub(1))
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    let prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(prev_index(*active, len)))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_index(*active, len)))
    };

    let track_style = format!("transform: translateX(-{}%);", *active * 100);

    html! {
        <section class="section soft-blue">
            <div class="container">
                <div class="section-heading">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Don't just take our word for it. Here's what our clients have to say about working with us."}</p>
                </div>

                <div class="carousel">
                    <div class="carousel-window">
                        <div class="carousel-track" style={track_style}>
                            { for TESTIMONIALS.iter().map(|t| html! {
                                <div class="carousel-slide" key={t.name}>
                                    <div class="card quote-card">
                                        <div class="stars">
                                            { for (0..MAX_RATING).map(|i| html! {
                                                <span class={classes!("star", (i < t.rating).then(|| "filled"))}>{"\u{2605}"}</span>
                                            }) }
                                        </div>
                                        <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                        <div class="quote-author">
                                            <img src={t.image} alt={t.name} />
                                            <div>
                                                <h4>{t.name}</h4>
                                                <p class="muted small">{format!("{}, {}", t.position, t.company)}</p>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <button class="carousel-arrow left" aria-label="Previous testimonial" onclick={prev}>{"\u{2039}"}</button>
                    <button class="carousel-arrow right" aria-label="Next testimonial" onclick={next}>{"\u{203A}"}</button>

                    <div class="carousel-dots">
                        { for (0..len).map(|index| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| active.set(clamp_index(index, len)))
                            };
                            html! {
                                <button
                                    class={classes!("dot", (index == *active).then(|| "active"))}
                                    aria-label={format!("Go to testimonial {}", index + 1)}
                                    {onclick}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_slide() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn prev_wraps_to_the_last_slide() {
        assert_eq!(prev_index(1, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn full_cycle_returns_home() {
        let len = TESTIMONIALS.len();
        let mut index = 0;
        for _ in 0..len {
            index = next_index(index, len);
        }
        assert_eq!(index, 0);
        for _ in 0..len {
            index = prev_index(index, len);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn dot_navigation_stays_in_range() {
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(9, 4), 3);
        assert_eq!(clamp_index(0, 0), 0);
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn ratings_fit_the_star_row() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= MAX_RATING));
    }
}
