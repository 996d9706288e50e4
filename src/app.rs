//! App Root Component
//!
//! Wires the browser collaborators into the controller, provides the view
//! state to the component tree and kicks off the initial refresh.

use leptos::*;
use std::rc::Rc;

use crate::api::{BrowserTransport, Endpoints};
use crate::components::{ActivityList, FeedbackBanner, SignupForm};
use crate::config::ClientConfig;
use crate::controller::{AppController, ControllerParts};
use crate::state::{create_view_state, BrowserAlert};
use crate::timer::GlooScheduler;

/// Root application component
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let (view_state, roster, messages) = create_view_state();

    let controller = AppController::new(ControllerParts {
        transport: Rc::new(BrowserTransport),
        endpoints: Endpoints::new(&config.api.base_url),
        roster: Rc::new(roster),
        messages: Rc::new(messages),
        scheduler: Rc::new(GlooScheduler),
        alerter: Rc::new(BrowserAlert),
        dismiss_after: config.dismiss_after(),
    });

    provide_context(view_state);
    provide_context(controller.clone());

    spawn_local(async move {
        controller.refresh().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <FeedbackBanner />
            </section>
        </main>

        <footer>
            <p>"© 2023 Mergington High School"</p>
        </footer>
    }
}
