use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::admission::captcha;
use crate::admission::inquiry::{AdmissionInquiry, InquiryField, InquiryForm};
use crate::admission::session::{FormError, FormState, ModalState, HIDE_DELAY_MS, SHOW_DELAY_MS};
use crate::admission::submission::{Endpoints, FetchTransport, SubmissionOutcome};
use crate::config::{self, ModalBody, ModalConfig};

/// Handed down through context so any call-to-action can open the modal.
#[derive(Clone, PartialEq)]
pub struct ModalTrigger {
    pub open: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct AdmissionModalProps {
    #[prop_or_default]
    pub config: ModalConfig,
    /// Bumped by the owner for every trigger click.
    #[prop_or_default]
    pub open_requests: u32,
}

pub enum ModalMsg {
    Open,
    AutoOpen,
    Reveal,
    Close,
    Hidden,
    BackdropClick(MouseEvent),
    KeyDown(KeyboardEvent),
    FieldChanged(InquiryField, String),
    Submit,
    Settled(SubmissionOutcome),
}

/// The "Book a Free Demo" modal.
///
/// Owns its auto-open timer, the fade timer and the Escape listener, all
/// released when the component is destroyed. A request in flight is never
/// cancelled by closing; its result still lands in the form state.
pub struct AdmissionModal {
    modal: ModalState,
    form: FormState,
    fields: InquiryForm,
    modal_ref: NodeRef,
    captcha_ref: NodeRef,
    captcha_rendered: bool,
    _auto_open: Timeout,
    transition: Option<Timeout>,
    keydown: Closure<dyn Fn(KeyboardEvent)>,
}

fn set_page_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

impl AdmissionModal {
    fn schedule(&mut self, ctx: &Context<Self>, delay_ms: u32, msg: fn() -> ModalMsg) {
        let link = ctx.link().clone();
        // Replacing the slot drops, and so cancels, the previous transition.
        self.transition = Some(Timeout::new(delay_ms, move || link.send_message(msg())));
    }

    fn open(&mut self, ctx: &Context<Self>, opened: bool) -> bool {
        if !opened {
            return false;
        }
        set_page_scroll_locked(true);
        self.schedule(ctx, SHOW_DELAY_MS, || ModalMsg::Reveal);
        true
    }

    fn close(&mut self, ctx: &Context<Self>) -> bool {
        if !self.modal.close() {
            return false;
        }
        set_page_scroll_locked(false);
        self.schedule(ctx, HIDE_DELAY_MS, || ModalMsg::Hidden);
        true
    }

    fn view_field(&self, ctx: &Context<Self>, field: InquiryField, kind: &'static str, label: &'static str, invalid: &[InquiryField]) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ModalMsg::FieldChanged(field, input.value())
        });
        let is_invalid = invalid.contains(&field);

        html! {
            <label class={classes!("form-field", is_invalid.then(|| "invalid"))}>
                <span>{label}</span>
                <input
                    type={kind}
                    name={field.name()}
                    value={self.fields.get(field).to_string()}
                    required=true
                    aria-invalid={is_invalid.to_string()}
                    {oninput}
                />
            </label>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ModalMsg::Submit
        });
        let invalid = self.fields.invalid_fields();
        let notice = self.form.notice();

        html! {
            <form id="demoBookingForm" class="demo-form" {onsubmit}>
                <div class="form-row">
                    { self.view_field(ctx, InquiryField::FirstName, "text", "Parent's first name", &invalid) }
                    { self.view_field(ctx, InquiryField::LastName, "text", "Last name", &invalid) }
                </div>
                { self.view_field(ctx, InquiryField::Email, "email", "Email", &invalid) }
                { self.view_field(ctx, InquiryField::Phone, "tel", "Phone", &invalid) }
                <div class="form-row">
                    { self.view_field(ctx, InquiryField::ChildAge, "number", "Child's age", &invalid) }
                    { self.view_field(ctx, InquiryField::Location, "text", "City", &invalid) }
                </div>
                <div class="captcha-slot" ref={self.captcha_ref.clone()}></div>
                <div id="formMessage" class={classes!("form-message", notice.is_some().then(|| "error"))}>
                    { notice.unwrap_or_default() }
                </div>
                <button type="submit" class="btn-primary" disabled={self.form.is_submitting()}>
                    { self.form.submit_label() }
                </button>
            </form>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="form-success">
                <div class="success-icon">
                    <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round">
                        <polyline points="20 6 9 17 4 12"></polyline>
                    </svg>
                </div>
                <h3>{"Thank You!"}</h3>
                <p>
                    {"Your demo request has been received. Our team will contact you shortly to schedule your personalized session."}
                </p>
                <button class="btn-primary" onclick={ctx.link().callback(|_| ModalMsg::Close)}>{"Close"}</button>
            </div>
        }
    }
}

impl Component for AdmissionModal {
    type Message = ModalMsg;
    type Properties = AdmissionModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let auto_open = Timeout::new(ctx.props().config.auto_open_delay_ms, move || {
            link.send_message(ModalMsg::AutoOpen);
        });

        let on_key = ctx.link().callback(ModalMsg::KeyDown);
        let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| on_key.emit(e));
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        }

        if ctx.props().open_requests > 0 {
            ctx.link().send_message(ModalMsg::Open);
        }

        Self {
            modal: ModalState::default(),
            form: FormState::default(),
            fields: InquiryForm::default(),
            modal_ref: NodeRef::default(),
            captcha_ref: NodeRef::default(),
            captcha_rendered: false,
            _auto_open: auto_open,
            transition: None,
            keydown,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ModalMsg::Open => {
                let opened = self.modal.open();
                self.open(ctx, opened)
            }
            ModalMsg::AutoOpen => {
                let opened = self.modal.auto_open();
                if opened {
                    info!("Auto-opening admission modal");
                }
                self.open(ctx, opened)
            }
            ModalMsg::Reveal => self.modal.reveal(),
            ModalMsg::Close => self.close(ctx),
            ModalMsg::Hidden => self.modal.finish_close(),
            ModalMsg::BackdropClick(e) => {
                let on_backdrop = match (e.target(), self.modal_ref.get()) {
                    (Some(target), Some(modal)) => JsValue::from(target) == JsValue::from(modal),
                    _ => false,
                };
                on_backdrop && self.close(ctx)
            }
            ModalMsg::KeyDown(e) => {
                e.key() == "Escape" && self.modal.is_shown() && self.close(ctx)
            }
            ModalMsg::FieldChanged(field, value) => {
                self.fields.set(field, value);
                true
            }
            ModalMsg::Submit => {
                let inquiry = AdmissionInquiry::from(&self.fields);
                let endpoints = Endpoints {
                    relay: config::relay_url(),
                    upstream: config::UPSTREAM_URL.to_string(),
                };
                let token = captcha::response_token();
                match self.form.submit_with(&token, &FetchTransport, endpoints, inquiry) {
                    Ok(pending) => {
                        ctx.link().send_future(async move { ModalMsg::Settled(pending.await) });
                        true
                    }
                    Err(FormError::MissingCaptcha) => true,
                    Err(FormError::NotEditable) => false,
                }
            }
            ModalMsg::Settled(outcome) => {
                self.form.settle(&outcome, &current_hostname());
                if let Some(notice) = self.form.notice() {
                    gloo_console::error!("Form submission error:", notice.to_string());
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open_requests > old_props.open_requests {
            ctx.link().send_message(ModalMsg::Open);
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.captcha_rendered || !self.modal.is_displayed() {
            return;
        }
        if let Some(slot) = self.captcha_ref.cast::<Element>() {
            self.captcha_rendered = captcha::render_widget(&slot, config::recaptcha_site_key());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        }
        if self.modal.is_displayed() {
            set_page_scroll_locked(false);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = if self.modal.is_displayed() { "display: block;" } else { "display: none;" };
        let body = match &ctx.props().config.body {
            ModalBody::EmbeddedFrame { src } => html! {
                <iframe class="booking-frame" src={src.clone()} title="Book a demo" loading="lazy"></iframe>
            },
            ModalBody::InlineForm if self.form.is_submitted() => self.view_success(ctx),
            ModalBody::InlineForm => self.view_form(ctx),
        };

        html! {
            <div
                id="admissionModal"
                ref={self.modal_ref.clone()}
                class={classes!("modal", self.modal.is_shown().then(|| "show"))}
                style={display}
                onclick={ctx.link().callback(ModalMsg::BackdropClick)}
            >
                <div class="modal-content">
                    <span class="close-modal" onclick={ctx.link().callback(|_| ModalMsg::Close)}>{"×"}</span>
                    if !self.form.is_submitted() {
                        <div class="modal-header">
                            <h2>{"Book a Free Demo Class"}</h2>
                            <p>{"See how your child learns at Future School. It takes two minutes."}</p>
                        </div>
                    }
                    { body }
                </div>
            </div>
        }
    }
}
