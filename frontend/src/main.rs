use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{Event, KeyboardEvent, MouseEvent, Node};
use wasm_bindgen::JsCast;

mod config;
mod admission {
    pub mod captcha;
    pub mod inquiry;
    pub mod session;
    pub mod submission;
}
mod components {
    pub mod admission_modal;
    pub mod cta_button;
    pub mod faq;
    pub mod review_popup;
}
mod effects {
    pub mod counter;
    pub mod lazy_video;
    pub mod observer;
    pub mod page_lifecycle;
    pub mod reveal;
    pub mod scroll;
    pub mod tracking;
}
mod pages {
    pub mod landing;
}

use components::admission_modal::{AdmissionModal, ModalTrigger};
use components::cta_button::CtaButton;
use config::ModalConfig;
use effects::scroll::{current_scroll_y, navbar_scrolled};
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .get()
        .map_or(false, |node| node.contains(target))
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let burger_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(navbar_scrolled(current_scroll_y()));
        });
    }

    // Clicks anywhere outside the menu and its button close it.
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let burger_ref = burger_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !contains(&menu_ref, target.as_ref()) && !contains(&burger_ref, target.as_ref()) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Fragment links still navigate, the smooth scroll handler picks them up.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav id="navbar" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"#FUTURE SCHOOL"}
                </Link<Route>>

                <button id="mobileMenuBtn" ref={burger_ref} class={classes!("burger-menu", active)} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="mobileMenu" ref={menu_ref} class={classes!("nav-right", active)}>
                    <a href="#outcomes" class="nav-link" onclick={close_menu.clone()}>{"Outcomes"}</a>
                    <a href="#curriculum" class="nav-link" onclick={close_menu.clone()}>{"Curriculum"}</a>
                    <a href="#testimonials" class="nav-link" onclick={close_menu.clone()}>{"Parents"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <div onclick={close_menu}>
                        <CtaButton label="Book a Free Demo" class="nav-cta" />
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let open_requests = use_state(|| 0u32);
    let trigger = {
        let open_requests = open_requests.clone();
        ModalTrigger {
            open: Callback::from(move |_| open_requests.set(*open_requests + 1)),
        }
    };

    html! {
        <BrowserRouter>
            <ContextProvider<ModalTrigger> context={trigger}>
                <Nav />
                <Switch<Route> render={switch} />
                <AdmissionModal config={ModalConfig::standard()} open_requests={*open_requests} />
            </ContextProvider<ModalTrigger>>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
