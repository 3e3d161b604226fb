//! Register Page

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use taskboard_core::RegisterRequest;

use crate::browser;
use crate::components::{ErrorMessage, TextField};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let auth = StoredValue::new_local(Rc::new(browser::auth_controller()));

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let auth = auth.get_value();
        leptos::task::spawn_local(async move {
            match auth.submit_register(&request).await {
                Ok(()) => set_error.set(None),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"Create Account"</h1>
                <p class="subtitle">"Start organizing your tasks"</p>

                <ErrorMessage error=error />

                <form id="registerForm" on:submit=submit>
                    <div class="form-row">
                        <TextField id="firstName" label="First Name" value=first_name />
                        <TextField id="lastName" label="Last Name" value=last_name />
                    </div>
                    <TextField id="email" label="Email" kind="email" value=email />
                    <TextField id="username" label="Username" value=username />
                    <TextField id="password" label="Password" kind="password" value=password />
                    <TextField
                        id="confirmPassword"
                        label="Confirm Password"
                        kind="password"
                        value=confirm_password
                    />
                    <button type="submit" class="btn btn-primary">"Sign Up"</button>
                </form>

                <p class="auth-link">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
