use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::faq::FaqSection;
use crate::components::review_popup::ReviewsButton;
use crate::effects::counter::use_counter_animation;
use crate::effects::lazy_video::use_lazy_videos;
use crate::effects::page_lifecycle::use_page_lifecycle;
use crate::effects::reveal::use_reveal_on_scroll;
use crate::effects::scroll::{use_parallax, use_smooth_scroll, use_sticky_bar};

struct Card {
    title: &'static str,
    text: &'static str,
}

const PROBLEMS: &[Card] = &[
    Card { title: "Rote learning", text: "Kids memorise for exams and forget by the holidays." },
    Card { title: "No real projects", text: "Very few children ever build something that works in the real world." },
    Card { title: "Screens without skills", text: "Hours on devices, but nobody teaches them to create with technology." },
];

const OUTCOMES: &[Card] = &[
    Card { title: "Confident speakers", text: "Every child pitches their work to a live audience each term." },
    Card { title: "Builders", text: "Apps, games and AI experiments that children design themselves." },
    Card { title: "Problem solvers", text: "Structured thinking that carries over to maths, science and life." },
];

const CURRICULUM: &[Card] = &[
    Card { title: "Coding & AI", text: "From block coding to Python and practical machine learning." },
    Card { title: "Entrepreneurship", text: "Ideas, customers, money: a small business from scratch." },
    Card { title: "Communication", text: "Storytelling, presentation and teamwork in every module." },
];

const TESTIMONIALS: &[Card] = &[
    Card { title: "Parent of a 12 year old", text: "She built her first app in six weeks and now explains it to the whole family." },
    Card { title: "Parent of a 9 year old", text: "The facilitators are patient and the classes never feel like school." },
];

const FACILITATORS: &[Card] = &[
    Card { title: "Engineers", text: "Facilitators who ship software for a living." },
    Card { title: "Educators", text: "Trained to teach small groups with individual attention." },
];

const STATS: &[(&str, &str)] = &[("2500", "students taught"), ("40", "cities"), ("98", "parent satisfaction %")];

const VIDEOS: &[(&str, &str)] = &[
    ("Inside a live class", "https://www.youtube.com/embed/ysz5S6PUM-U"),
    ("Demo day projects", "https://www.youtube.com/embed/jNQXAC9IVRw"),
];

fn cards(class: &'static str, items: &'static [Card]) -> Html {
    html! {
        <div class="card-grid">
            { for items.iter().map(|card| html! {
                <div class={class}>
                    <h3>{card.title}</h3>
                    <p>{card.text}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let sticky_visible = use_sticky_bar(hero_ref.clone());

    use_page_lifecycle();
    use_reveal_on_scroll();
    use_counter_animation();
    use_lazy_videos();
    use_parallax();
    use_smooth_scroll();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section id="hero" class="hero" ref={hero_ref}>
                <div class="hero-circle"></div>
                <div class="hero-circle"></div>
                <div class="hero-circle"></div>
                <div class="hero-content">
                    <h1>{"The school your child will actually look forward to"}</h1>
                    <p>{"Live, small-group classes in coding, AI and entrepreneurship for ages 8 to 16."}</p>
                    <div class="hero-actions">
                        <CtaButton label="Book a Free Demo" />
                        <a href="#curriculum" class="btn-secondary">{"See the curriculum"}</a>
                    </div>
                    <ReviewsButton />
                    <div class="hero-stats">
                        { for STATS.iter().map(|(count, label)| html! {
                            <div class="stat">
                                <span class="stat-number" data-count={*count}>{"0"}</span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="problem" class="problem-section">
                <h2>{"School was not built for the world they will grow up in"}</h2>
                { cards("problem-card", PROBLEMS) }
            </section>

            <section id="outcomes" class="outcome-section">
                <h2>{"What your child walks away with"}</h2>
                { cards("outcome-card", OUTCOMES) }
            </section>

            <section id="who" class="who-section">
                <h2>{"Who it is for"}</h2>
                <div class="card-grid">
                    <div class="who-card"><h3>{"Curious kids"}</h3><p>{"Who ask how things work."}</p></div>
                    <div class="who-card"><h3>{"Busy parents"}</h3><p>{"Who want screen time to mean something."}</p></div>
                </div>
            </section>

            <section id="curriculum" class="curriculum-section">
                <h2>{"Curriculum"}</h2>
                { cards("curriculum-card", CURRICULUM) }
            </section>

            <section id="videos" class="video-section">
                <h2>{"See a class"}</h2>
                <div class="card-grid">
                    { for VIDEOS.iter().map(|(title, src)| html! {
                        <div class="video-card">
                            <div class="video-wrapper">
                                <iframe data-src={*src} title={*title} allowfullscreen=true></iframe>
                            </div>
                            <h3>{*title}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonial-section">
                <h2>{"Parents say"}</h2>
                { cards("testimonial-card", TESTIMONIALS) }
            </section>

            <section id="facilitators" class="facilitator-section">
                <h2>{"Your child's facilitators"}</h2>
                { cards("facilitator-card", FACILITATORS) }
            </section>

            <FaqSection />

            <section class="final-cta">
                <h2>{"Give your child one free class"}</h2>
                <CtaButton label="Book My Free Demo" />
            </section>

            <div id="stickyBar" class={classes!("sticky-bar", sticky_visible.then(|| "visible"))}>
                <span>{"Free demo seats fill up every week"}</span>
                <CtaButton label="Book Now" class="sticky-bar-cta" />
            </div>
        </div>
    }
}
