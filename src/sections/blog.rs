use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;

struct BlogPost {
    title: &'static str,
    excerpt: &'static str,
    image: &'static str,
    date: &'static str,
    author: &'static str,
    category: &'static str,
    minutes_to_read: u32,
}

static POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "10 SEO Strategies That Will Boost Your Rankings in 2025",
        excerpt: "Discover the latest SEO techniques that are driving results for leading brands in the current digital landscape.",
        image: "https://images.pexels.com/photos/590041/pexels-photo-590041.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "May 15, 2025",
        author: "Samantha Lee",
        category: "SEO",
        minutes_to_read: 8,
    },
    BlogPost {
        title: "How AI is Revolutionizing Digital Marketing",
        excerpt: "Explore how artificial intelligence is transforming marketing strategies and what it means for your business.",
        image: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "May 8, 2025",
        author: "Alex Morgan",
        category: "Technology",
        minutes_to_read: 10,
    },
    BlogPost {
        title: "The Ultimate Guide to Content Marketing in 2025",
        excerpt: "Learn how to create a content strategy that engages your audience and drives conversions in today's digital landscape.",
        image: "https://images.pexels.com/photos/3194519/pexels-photo-3194519.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        date: "May 2, 2025",
        author: "Marcus Johnson",
        category: "Content",
        minutes_to_read: 12,
    },
];

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <section id="blog" class="section tinted">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Latest Insights"}</h2>
                    <p>{"Stay up-to-date with the latest trends and strategies in digital marketing through our blog."}</p>
                </div>

                <div class="card-grid three">
                    { for POSTS.iter().map(|post| html! {
                        <article class="card post-card" key={post.title}>
                            <div class="post-image">
                                <img src={post.image} alt={post.title} />
                            </div>
                            <div class="post-body">
                                <div class="post-meta">
                                    <span class="pill small">{post.category}</span>
                                    <span class="muted small">{post.date}</span>
                                    <span class="muted small push-right">{format!("{} min read", post.minutes_to_read)}</span>
                                </div>
                                <h3 class="clamp">{post.title}</h3>
                                <p class="muted clamp">{post.excerpt}</p>
                                <div class="post-footer">
                                    <span class="muted small">{post.author}</span>
                                    <AnchorLink href="#" class="text-link small">{"Read More \u{203A}"}</AnchorLink>
                                </div>
                            </div>
                        </article>
                    }) }
                </div>

                <div class="centered-cta">
                    <AnchorLink href="#" class="btn btn-outline">{"View All Articles"}</AnchorLink>
                </div>
            </div>
        </section>
    }
}
