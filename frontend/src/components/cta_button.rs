use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::admission_modal::ModalTrigger;
use crate::effects::tracking::track_cta_click;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("btn-primary"))]
    pub class: AttrValue,
}

/// Tracked call-to-action that opens the admission modal.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let trigger = use_context::<ModalTrigger>();
    let onclick = {
        let label = props.label.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            track_cta_click(&label);
            if let Some(trigger) = &trigger {
                trigger.open.emit(());
            }
        })
    };

    html! {
        <button class={classes!(props.class.to_string(), "open-admission-modal")} {onclick}>
            { props.label.clone() }
        </button>
    }
}
