use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::Faq;

/// Single-open accordion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    pub fn toggle(self, index: usize) -> Self {
        if self.active == Some(index) {
            Self { active: None }
        } else {
            Self { active: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [Faq],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(i, faq)| {
                let open = accordion.is_open(i);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.set(accordion.toggle(i));
                    })
                };
                html! {
                    <FadeIn key={i} delay={i as f64 * 0.05}>
                        <div class={classes!("faq-item", open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span class="question-text">{faq.question}</span>
                                <span class="toggle-icon">{"+"}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{faq.answer}</p>
                            </div>
                        </div>
                    </FadeIn>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let acc = Accordion::default();
        assert_eq!(acc.active(), None);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn opening_another_closes_the_first() {
        let acc = Accordion::default().toggle(0);
        assert!(acc.is_open(0));
        let acc = acc.toggle(2);
        assert!(acc.is_open(2));
        assert!(!acc.is_open(0));
        assert_eq!(acc.active(), Some(2));
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        let acc = Accordion::default().toggle(3).toggle(3);
        assert_eq!(acc.active(), None);
    }

    #[test]
    fn never_more_than_one_open() {
        let mut acc = Accordion::default();
        for i in [0, 1, 1, 4, 2, 2, 5, 0] {
            acc = acc.toggle(i);
            assert!((0..6).filter(|&j| acc.is_open(j)).count() <= 1);
        }
    }
}
