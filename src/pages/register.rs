//! Account registration page.
//!
//! A successful registration signs the new user in immediately, the same
//! way a login does.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::api;
use crate::net::types::{RegisterRequest, User};
use crate::state::session::use_session;
use crate::util::validate::{looks_like_email, normalize_name, normalize_optional_phone, password_problem};

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    full_name: String,
    email: String,
    phone: String,
    password: String,
    confirm_password: String,
}

fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let full_name = normalize_name(&form.full_name)?;
    let email = form.email.trim();
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    let phone = normalize_optional_phone(&form.phone)?;
    if let Some(problem) = password_problem(&form.password) {
        return Err(problem);
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest { email: email.to_owned(), full_name, phone, password: form.password.clone() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_register_input) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(response) => {
                    session.update(|s| s.login(User::from(response)));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::info!("registration rejected: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Header/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
