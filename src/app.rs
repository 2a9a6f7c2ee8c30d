//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::calculator::CalculatorPage;

/// Root application component.
///
/// Resolves the client configuration once and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_document());

    view! {
        <Stylesheet id="calc-form" href="/style.css"/>
        <Title text="Calculator"/>
        <CalculatorPage/>
    }
}
