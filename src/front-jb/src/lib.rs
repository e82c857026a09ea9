//! Browser frontend for the job board.
//!
//! The page is a single `#app` root re-rendered from view state. Navigation is
//! hash based (see [`router`]); clicks, input and form submission are handled by
//! listeners delegated on the root.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement, Window, console};

pub mod client;
pub mod render;
pub mod router;
pub mod types;
pub mod views;

pub use client::{ApiClient, ClientError};

use render::Action;
use router::Route;
use views::{AdminView, ApplicationFormView, FormField, HomeView, JobDetailView, SubmitOutcome, Ticket};

const APP_ROOT_ID: &str = "app";

enum Page {
    Home(HomeView),
    JobDetail(JobDetailView),
    Apply(ApplicationFormView),
    Admin(AdminView),
    NotFound,
}

struct App {
    client: ApiClient,
    page: Page,
}

type SharedApp = Rc<RefCell<App>>;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console::log_1(&"WASM module initialized!".into());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let location = window.location();
    let client = ApiClient::for_page(&location.hostname()?, &location.origin()?);
    console::log_1(&format!("Using API at {}", client.base_url()).into());

    let app: SharedApp = Rc::new(RefCell::new(App {
        client,
        page: Page::NotFound,
    }));

    let root = app_root(&window)?;
    listen_for_clicks(&root, &app)?;
    listen_for_input(&root, &app)?;
    listen_for_submit(&root, &app)?;
    listen_for_navigation(&window, &app)?;

    navigate(&app, Route::parse(&location.hash()?));
    Ok(())
}

fn app_root(window: &Window) -> Result<Element, JsValue> {
    window
        .document()
        .and_then(|document| document.get_element_by_id(APP_ROOT_ID))
        .ok_or_else(|| JsValue::from_str("page has no #app element"))
}

fn render(app: &SharedApp) {
    let html = match &app.borrow().page {
        Page::Home(view) => render::home_page(view),
        Page::JobDetail(view) => render::job_detail_page(view),
        Page::Apply(view) => render::application_form_page(view),
        Page::Admin(view) => render::admin_page(view),
        Page::NotFound => render::not_found_page(),
    };

    let Some(window) = web_sys::window() else { return };
    match app_root(&window) {
        Ok(root) => root.set_inner_html(&format!("{}{}", render::nav(), html)),
        Err(e) => console::error_1(&e),
    }
}

/// Replaces the current page with a fresh view for `route` and starts its fetch.
fn navigate(app: &SharedApp, route: Route) {
    match route {
        Route::Home => {
            let mut view = HomeView::new();
            let ticket = view.begin_fetch();
            app.borrow_mut().page = Page::Home(view);
            load_jobs(app, ticket);
        }
        Route::JobDetail(id) => {
            let mut view = JobDetailView::new(id.clone());
            let ticket = view.begin_fetch();
            app.borrow_mut().page = Page::JobDetail(view);
            load_job(app, ticket, id);
        }
        Route::Apply(id) => {
            let mut view = ApplicationFormView::new(id.clone());
            let ticket = view.begin_load();
            app.borrow_mut().page = Page::Apply(view);
            load_job(app, ticket, id);
        }
        Route::Admin => {
            let mut view = AdminView::new();
            let ticket = view.begin_fetch();
            app.borrow_mut().page = Page::Admin(view);
            load_applications(app, ticket);
        }
        Route::NotFound => app.borrow_mut().page = Page::NotFound,
    }
    render(app);
}

fn load_jobs(app: &SharedApp, ticket: Ticket) {
    let (client, filter) = {
        let state = app.borrow();
        let filter = match &state.page {
            Page::Home(view) => view.filter(),
            _ => None,
        };
        (state.client.clone(), filter)
    };

    let app = app.clone();
    spawn_local(async move {
        let result = client.get_jobs(filter).await;
        if let Err(e) = &result {
            console::error_1(&format!("Error fetching jobs: {}", e).into());
        }
        let applied = match &mut app.borrow_mut().page {
            Page::Home(view) => view.finish_fetch(ticket, result),
            _ => false,
        };
        if applied {
            render(&app);
        }
    });
}

/// Loads the job for either the detail page or the application form.
fn load_job(app: &SharedApp, ticket: Ticket, id: String) {
    let client = app.borrow().client.clone();
    let app = app.clone();
    spawn_local(async move {
        let result = client.get_job(&id).await;
        if let Err(e) = &result {
            console::error_1(&format!("Error fetching job {}: {}", id, e).into());
        }
        let applied = match &mut app.borrow_mut().page {
            Page::JobDetail(view) => view.finish_fetch(ticket, result),
            Page::Apply(view) => view.finish_load(ticket, result),
            _ => false,
        };
        if applied {
            render(&app);
        }
    });
}

fn load_applications(app: &SharedApp, ticket: Ticket) {
    let client = app.borrow().client.clone();
    let app = app.clone();
    spawn_local(async move {
        let result = client.get_applications().await;
        if let Err(e) = &result {
            console::error_1(&format!("Error fetching applications: {}", e).into());
        }
        let applied = match &mut app.borrow_mut().page {
            Page::Admin(view) => view.finish_fetch(ticket, result),
            _ => false,
        };
        if applied {
            render(&app);
        }
    });
}

fn handle_action(app: &SharedApp, action: Action) {
    match action {
        Action::Filter(selected) => {
            let ticket = match &mut app.borrow_mut().page {
                Page::Home(view) => view.select_filter(selected),
                _ => None,
            };
            if let Some(ticket) = ticket {
                render(app);
                load_jobs(app, ticket);
            }
        }
        Action::Retry => {
            let retry = match &mut app.borrow_mut().page {
                Page::Home(view) => Some((view.begin_fetch(), load_jobs as fn(&SharedApp, Ticket))),
                Page::Admin(view) => Some((view.begin_fetch(), load_applications as fn(&SharedApp, Ticket))),
                _ => None,
            };
            if let Some((ticket, load)) = retry {
                render(app);
                load(app, ticket);
            }
        }
        Action::ToggleCoverLetter(id) => {
            if let Page::Admin(view) = &mut app.borrow_mut().page {
                view.toggle_expanded(&id);
            }
            render(app);
        }
    }
}

fn submit_application(app: &SharedApp) {
    let request = match &mut app.borrow_mut().page {
        Page::Apply(view) => view.try_submit(),
        _ => None,
    };
    // Shows validation errors or the in-flight button state.
    render(app);
    let Some(request) = request else { return };

    let client = app.borrow().client.clone();
    let app = app.clone();
    spawn_local(async move {
        let result = client.submit_application(&request).await;
        if let Err(e) = &result {
            console::error_1(&format!("Error submitting application: {}", e).into());
        }
        let outcome = match &mut app.borrow_mut().page {
            Page::Apply(view) => Some(view.finish_submit(result)),
            _ => None,
        };
        let Some(outcome) = outcome else { return };

        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.alert_with_message(outcome.message()) {
            console::error_1(&e);
        }
        match outcome {
            SubmitOutcome::Submitted => {
                if let Err(e) = window.location().set_hash(&Route::Home.href()) {
                    console::error_1(&e);
                }
            }
            SubmitOutcome::Failed => render(&app),
        }
    });
}

/// Applies one keystroke to the form without re-rendering it, so focus stays put.
fn handle_input(app: &SharedApp, field: FormField, value: String) {
    let count = value.chars().count();
    let cleared = match &mut app.borrow_mut().page {
        Page::Apply(view) => view.set_field(field, value),
        _ => return,
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if cleared {
        if let Some(error) = document.get_element_by_id(&render::field_error_id(field)) {
            error.set_text_content(Some(""));
        }
    }
    if field == FormField::CoverLetter {
        if let Some(counter) = document.get_element_by_id(render::COVER_LETTER_COUNT_ID) {
            counter.set_text_content(Some(&render::cover_letter_count(count)));
        }
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn listen_for_clicks(root: &Element, app: &SharedApp) -> Result<(), JsValue> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event_element(&event).and_then(|el| el.closest("[data-action]").ok().flatten()) else {
            return;
        };
        let Some(name) = target.get_attribute("data-action") else { return };
        match Action::parse(&name, target.get_attribute("data-value").as_deref()) {
            Some(action) => handle_action(&app, action),
            None => console::warn_1(&format!("Unknown action: {}", name).into()),
        }
    }) as Box<dyn FnMut(_)>);

    root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_for_input(root: &Element, app: &SharedApp) -> Result<(), JsValue> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event_element(&event) else { return };
        let Some(field) = target.get_attribute("data-field").and_then(|name| FormField::parse(&name)) else {
            return;
        };
        let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            return;
        };
        handle_input(&app, field, value);
    }) as Box<dyn FnMut(_)>);

    root.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_for_submit(root: &Element, app: &SharedApp) -> Result<(), JsValue> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let is_application_form = event_element(&event).is_some_and(|el| el.id() == render::APPLICATION_FORM_ID);
        if is_application_form {
            event.prevent_default();
            submit_application(&app);
        }
    }) as Box<dyn FnMut(_)>);

    root.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_for_navigation(window: &Window, app: &SharedApp) -> Result<(), JsValue> {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        navigate(&app, Route::parse(&hash));
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
