//! Landing page listing the product lines open for application.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::applications::InsuranceType;
use crate::components::header::Header;
use crate::net::types::User;
use crate::state::session::use_session;

fn greeting_for(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Sign in to start an application.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || session.with(|s| greeting_for(s.user()));

    view! {
        <Header/>
        <div class="home-page">
            <p class="home-page__greeting">{greeting}</p>
            <ul class="product-lines">
                {InsuranceType::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <li class="product-lines__item" data-insurance-type=kind.as_str()>
                                {kind.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
