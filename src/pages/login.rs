//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::api;
use crate::net::types::{LoginRequest, User};
use crate::state::session::use_session;
use crate::util::validate::looks_like_email;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    session.update(|s| s.login(User::from(response)));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::info!("login rejected: {e}");
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
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
