//! Site header with session-aware navigation.

use leptos::prelude::*;

use crate::state::session::{BrowserSession, use_session};

/// Shows the signed-in user's name and a logout button, or sign-in links.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Bảo Hiểm"</a>
            <nav class="site-header__nav">
                <Show
                    when=move || session.with(BrowserSession::is_authenticated)
                    fallback=|| {
                        view! {
                            <a href="/login" class="site-header__link">"Sign in"</a>
                            <a href="/register" class="site-header__link">"Register"</a>
                        }
                    }
                >
                    <a href="/profile" class="site-header__link">
                        {move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())}
                    </a>
                    <button class="site-header__logout" on:click=move |_| session.update(BrowserSession::logout)>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
