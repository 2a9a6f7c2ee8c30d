//! Calculator page: two number inputs, an operator selector and the
//! result/error regions.
//!
//! Submitting captures the current field text and hands it to the
//! [`Calculator`](crate::state::submission::Calculator) on a local task. The
//! regions render straight from the [`SignalSurface`] the calculator drives.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Operator;
use crate::state::display::{SignalSurface, SurfaceKind, SurfaceView};
use crate::state::form::FormFields;

/// Container classes for a display region; the tone drives the background.
fn region_class(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Result => "calc-region calc-region--success",
        SurfaceKind::Error => "calc-region calc-region--danger",
    }
}

fn region_heading(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Result => "Result",
        SurfaceKind::Error => "Error",
    }
}

#[component]
pub fn CalculatorPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let num1 = RwSignal::new(String::new());
    let num2 = RwSignal::new(String::new());
    let operator = RwSignal::new(Operator::default().symbol().to_owned());
    let surface = SignalSurface::new();

    #[cfg(feature = "csr")]
    let calculator = {
        use crate::net::api::GlooTransport;
        use crate::state::display::DisplayController;
        use crate::state::submission::Calculator;

        let endpoint = config.calculate_url();
        log::debug!("calculator endpoint: {endpoint}");
        StoredValue::new_local(std::rc::Rc::new(Calculator::new(
            GlooTransport,
            DisplayController::new(surface),
            endpoint,
        )))
    };
    #[cfg(not(feature = "csr"))]
    let _ = config;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = FormFields::new(num1.get_untracked(), num2.get_untracked(), operator.get_untracked());

        #[cfg(feature = "csr")]
        {
            let calculator = calculator.get_value();
            leptos::task::spawn_local(async move {
                calculator.submit(fields).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = fields;
    };

    view! {
        <div class="calc-page">
            <div class="calc-card">
                <h1>"Calculator"</h1>
                <form id="calcForm" class="calc-form" on:submit=on_submit>
                    <input
                        id="num1"
                        class="calc-input"
                        type="text"
                        inputmode="decimal"
                        placeholder="First number"
                        prop:value=move || num1.get()
                        on:input=move |ev| num1.set(event_target_value(&ev))
                    />
                    <select
                        id="operator"
                        class="calc-select"
                        on:change=move |ev| operator.set(event_target_value(&ev))
                    >
                        {Operator::ALL
                            .into_iter()
                            .map(|op| {
                                view! {
                                    <option value=op.symbol() selected=move || operator.get() == op.symbol()>
                                        {op.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        id="num2"
                        class="calc-input"
                        type="text"
                        inputmode="decimal"
                        placeholder="Second number"
                        prop:value=move || num2.get()
                        on:input=move |ev| num2.set(event_target_value(&ev))
                    />
                    <button class="calc-button" type="submit">"Calculate"</button>
                </form>
                {move || region(SurfaceKind::Result, surface.result.get())}
                {move || region(SurfaceKind::Error, surface.error.get())}
            </div>
        </div>
    }
}

/// One display region. Rebuilt on every change so the entrance animation
/// replays for each new outcome. Hidden regions carry the `hidden` property,
/// so visibility does not depend on the stylesheet.
fn region(kind: SurfaceKind, state: SurfaceView) -> impl IntoView {
    let id = match kind {
        SurfaceKind::Result => "resultContainer",
        SurfaceKind::Error => "errorContainer",
    };
    let class = state.class_list(region_class(kind));
    let hidden = !state.visible;
    let text = state.text;
    view! {
        <div id=id class=class prop:hidden=hidden aria-live="polite">
            <span class="calc-region__heading">{region_heading(kind)}</span>
            <span class="calc-region__text">{text}</span>
        </div>
    }
}
