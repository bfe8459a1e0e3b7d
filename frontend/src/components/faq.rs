use yew::prelude::*;
use web_sys::MouseEvent;

/// Which FAQ entry is expanded, if any. Opening one closes the others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_count(&self, len: usize) -> usize {
        (0..len).filter(|i| self.is_open(*i)).count()
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const ADMISSIONS_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Which ages does Future School take?",
        answer: "Our programme is built for children between 8 and 16. The demo session helps us place your child in the right cohort.",
    },
    FaqEntry {
        question: "Is the demo class really free?",
        answer: "Yes. The demo is a full live session with a facilitator and there is no obligation to enrol afterwards.",
    },
    FaqEntry {
        question: "Are classes online or in person?",
        answer: "Classes run live online in small groups, so families can join from any city.",
    },
    FaqEntry {
        question: "What will my child actually build?",
        answer: "Every term ends with a real project: an app, a small business pitch or an AI experiment the child presents to parents.",
    },
    FaqEntry {
        question: "How do I book a demo?",
        answer: "Use any Book a Free Demo button on this page, leave your details and our admissions team will call you to pick a slot.",
    },
];

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    #[prop_or(ADMISSIONS_FAQ)]
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section class="faq-section" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for props.entries.iter().enumerate().map(|(index, entry)| {
                    let is_open = accordion.is_open(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggle(index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "active"))}>
                            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_open_entry_closes_it() {
        let accordion = Accordion::default().toggle(2);
        assert!(accordion.is_open(2));
        assert!(!accordion.toggle(2).is_open(2));
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let accordion = Accordion::default().toggle(0).toggle(3);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(3));
    }

    #[test]
    fn never_more_than_one_entry_open() {
        let len: usize = 4;
        // Every click sequence of length 5 over 4 questions.
        for mut code in 0..len.pow(5) {
            let mut accordion = Accordion::default();
            for _ in 0..5 {
                accordion = accordion.toggle(code % len);
                code /= len;
                assert!(accordion.open_count(len) <= 1);
            }
        }
    }
}
