//! Portal landing page with the login and registration dialogs.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::auth::controller;
#[cfg(feature = "hydrate")]
use crate::auth::{LocalAuthProvider, Navigator};
use crate::state::auth::AuthForms;
#[cfg(feature = "hydrate")]
use crate::util::browser::{BrowserNotifier, BrowserStorage};

/// [`Navigator`] over the router's navigate hook.
#[cfg(feature = "hydrate")]
struct RouterNavigator<F>(F);

#[cfg(feature = "hydrate")]
impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn go(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Landing page — the two auth dialogs are opened from here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let forms = expect_context::<RwSignal<AuthForms>>();

    view! {
        <div class="login-page">
            <h1>"Arcade"</h1>
            <p>"Four minigames, one sign-in"</p>
            <div class="login-page__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| forms.update(controller::open_login)
                >
                    "Log In"
                </button>
                <button class="btn" on:click=move |_| forms.update(controller::open_register)>
                    "Register"
                </button>
            </div>

            <Show when=move || forms.with(|f| f.show_login)>
                <LoginDialog/>
            </Show>
            <Show when=move || forms.with(|f| f.show_register)>
                <RegisterDialog/>
            </Show>
        </div>
    }
}

/// Modal login dialog bound to the shared [`AuthForms`] cell.
#[component]
fn LoginDialog() -> impl IntoView {
    let forms = expect_context::<RwSignal<AuthForms>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let form = forms.with(|f| f.login.clone());

        #[cfg(feature = "hydrate")]
        {
            let provider = LocalAuthProvider::new(BrowserStorage);
            let navigator = RouterNavigator(navigate.clone());
            let _ = controller::submit_login(&form, &provider, &BrowserNotifier, &navigator);
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| forms.update(controller::close_login)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Log In"</h2>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || forms.with(|f| f.login.username.clone())
                        on:input=move |ev| {
                            forms.update(|f| f.login.username = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || forms.with(|f| f.login.password.clone())
                        on:input=move |ev| {
                            forms.update(|f| f.login.password = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| forms.update(controller::close_login)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Log In"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal registration dialog bound to the shared [`AuthForms`] cell.
#[component]
fn RegisterDialog() -> impl IntoView {
    let forms = expect_context::<RwSignal<AuthForms>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let form = forms.with(|f| f.register.clone());

        #[cfg(feature = "hydrate")]
        {
            let provider = LocalAuthProvider::new(BrowserStorage);
            let navigator = RouterNavigator(navigate.clone());
            let _ = controller::submit_register(&form, &provider, &BrowserNotifier, &navigator);
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| forms.update(controller::close_register)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register"</h2>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || forms.with(|f| f.register.username.clone())
                        on:input=move |ev| {
                            forms.update(|f| f.register.username = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || forms.with(|f| f.register.password.clone())
                        on:input=move |ev| {
                            forms.update(|f| f.register.password = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Confirm Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || forms.with(|f| f.register.confirm.clone())
                        on:input=move |ev| {
                            forms.update(|f| f.register.confirm = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| forms.update(controller::close_register)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}
