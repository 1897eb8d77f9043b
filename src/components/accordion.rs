use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::reveal::FadeIn;
use crate::content;

/// Single-expansion toggle: clicking the open item collapses it, clicking
/// any other item opens it and implicitly collapses the previous one. At
/// most one index is ever open.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// The FAQ accordion. Owns the open-item state for its own instance so a
/// page composed twice would get two independent accordions.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |clicked: usize| {
            open_index.set(toggle(*open_index, clicked));
        })
    };

    html! {
        <div class="faq-list">
            {
                for content::faq_entries().into_iter().enumerate().map(|(i, entry)| {
                    html! {
                        <FadeIn delay_ms={i as u32 * 50}>
                            <FaqItem
                                index={i}
                                question={entry.question}
                                open={*open_index == Some(i)}
                                on_toggle={on_toggle.clone()}
                            >
                                { entry.answer }
                            </FaqItem>
                        </FadeIn>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_opens_closed_item() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn click_on_open_item_collapses_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn second_click_after_collapse_reopens() {
        let state = toggle(Some(2), 2);
        assert_eq!(state, None);
        assert_eq!(toggle(state, 2), Some(2));
    }

    #[test]
    fn switching_items_replaces_never_stacks() {
        let state = toggle(None, 2);
        assert_eq!(state, Some(2));
        let state = toggle(state, 0);
        assert_eq!(state, Some(0));
    }

    #[test]
    fn at_most_one_open_over_any_click_sequence() {
        let clicks = [0usize, 1, 1, 3, 3, 3, 2, 0, 0, 1];
        let mut state = None;
        for &clicked in &clicks {
            state = toggle(state, clicked);
            // Option<usize> holds at most one index by construction; what we
            // check is that it only ever refers to the clicked item or nothing.
            if let Some(open) = state {
                assert_eq!(open, clicked);
            }
        }
    }
}
