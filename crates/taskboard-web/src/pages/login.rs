//! Login Page

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use taskboard_core::LoginRequest;

use crate::browser;
use crate::components::{ErrorMessage, TextField};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let auth = StoredValue::new_local(Rc::new(browser::auth_controller()));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let auth = auth.get_value();
        leptos::task::spawn_local(async move {
            match auth.submit_login(&request).await {
                Ok(()) => set_error.set(None),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"Welcome Back"</h1>
                <p class="subtitle">"Log in to manage your tasks"</p>

                <ErrorMessage error=error />

                <form id="loginForm" on:submit=submit>
                    <TextField id="username" label="Username" value=username />
                    <TextField id="password" label="Password" kind="password" value=password />
                    <button type="submit" class="btn btn-primary">"Log In"</button>
                </form>

                <p class="auth-link">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
