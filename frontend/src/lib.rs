use yew::prelude::*;
use yew_router::prelude::*;

pub mod animation;
pub mod config;
pub mod waitlist;

pub mod components {
    pub mod count_up;
    pub mod reveal;
    pub mod waitlist_form;
}
pub mod pages {
    pub mod landing;
}
pub mod utils {
    pub mod api;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting stocky frontend");
    yew::Renderer::<App>::new().render();
}
