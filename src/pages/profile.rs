//! Signed-in user's profile with inline editing and logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::api::{self, ApiError};
use crate::net::types::AccountResponse;
use crate::state::session::{BrowserSession, SessionStore, use_session};
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::KeyValueStore;
use crate::util::validate::{normalize_name, normalize_optional_phone};

fn validate_profile_input(name: &str, phone: &str) -> Result<(String, Option<String>), &'static str> {
    Ok((normalize_name(name)?, normalize_optional_phone(phone)?))
}

/// Fold a `/auth/me` result into the session.
///
/// A rejected token (401) signs the user out; other failures keep the
/// cached profile.
fn apply_account_refresh<S: KeyValueStore>(session: &mut SessionStore<S>, result: Result<AccountResponse, ApiError>) {
    match result {
        Ok(account) => {
            if session.update_profile(&account.full_name, account.phone) {
                log::debug!("profile refreshed for {}", account.email);
            }
        }
        Err(ApiError::Status { status: 401, detail }) => {
            log::info!("session token rejected: {detail}");
            session.logout();
        }
        Err(e) => log::warn!("profile refresh failed: {e}"),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    // Refetch the server-side account whenever the token changes, which
    // includes the deferred restore after hydration.
    let token = Memo::new(move |_| session.with(|s| s.token().map(str::to_owned)));
    let account = LocalResource::new(move || {
        let token = token.get();
        async move {
            match token {
                Some(token) => Some(api::fetch_current_user(&token).await),
                None => None,
            }
        }
    });
    Effect::new(move || {
        if let Some(Some(result)) = account.get() {
            session.update(|s| apply_account_refresh(s, result));
        }
    });

    let editing = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let start_edit = move |_| {
        session.with(|s| {
            if let Some(user) = s.user() {
                name.set(user.name.clone());
                phone.set(user.phone.clone().unwrap_or_default());
            }
        });
        info.set(String::new());
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_profile_input(&name.get(), &phone.get()) {
            Ok((new_name, new_phone)) => {
                let mut saved = false;
                session.update(|s| saved = s.update_profile(&new_name, new_phone));
                info.set(if saved { "Profile saved.".to_owned() } else { "Not signed in.".to_owned() });
                editing.set(false);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <Header/>
        <div class="profile-page">
            <Show when=move || session.with(BrowserSession::is_authenticated)>
                <section class="profile-card">
                    <h1>"My profile"</h1>
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <dl class="profile-fields">
                                    <dt>"Name"</dt>
                                    <dd>{move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{move || session.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default())}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{move || session.with(|s| s.user().and_then(|u| u.phone.clone()).unwrap_or_default())}</dd>
                                </dl>
                                <button class="profile-button" on:click=start_edit>"Edit"</button>
                            }
                        }
                    >
                        <form class="profile-form" on:submit=on_save>
                            <input
                                class="login-input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                            <button class="profile-button" type="submit">"Save"</button>
                            <button class="profile-button" type="button" on:click=move |_| editing.set(false)>
                                "Cancel"
                            </button>
                        </form>
                    </Show>
                    <Show when=move || !info.get().is_empty()>
                        <p class="profile-message">{move || info.get()}</p>
                    </Show>
                    <button
                        class="profile-button profile-button--logout"
                        on:click=move |_| session.update(BrowserSession::logout)
                    >
                        "Log out"
                    </button>
                </section>
            </Show>
        </div>
    }
}
