use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_toaster;

#[derive(Clone, Default, PartialEq)]
struct Credentials {
    identifier: String,
    password: String,
    reveal: bool,
}

impl Credentials {
    fn complete(&self) -> bool {
        !self.identifier.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    /// Emits (email or username, password)
    pub on_login: Callback<(String, String)>,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let form = use_state(Credentials::default);
    let toaster = use_toaster();

    let on_identifier = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(Credentials { identifier: input.value(), ..(*form).clone() });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(Credentials { password: input.value(), ..(*form).clone() });
        })
    };
    let toggle_reveal = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(Credentials { reveal: !form.reveal, ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.complete() {
                toaster.error("Please fill in all fields");
                return;
            }
            on_login.emit((form.identifier.clone(), form.password.clone()));
        })
    };

    let password_type = if form.reveal { "text" } else { "password" };

    html! {
        <section class="auth-page">
            <div class="auth-card">
                <span class="auth-badge">{"🚚"}</span>
                <h1 class="auth-title">{"Shipment App"}</h1>
                <p class="auth-subtitle">{"Sign in with your work account"}</p>

                <form class="auth-form" {onsubmit}>
                    <label class="field">
                        <span class="field-label">{"Email or Username"}</span>
                        <input
                            class="field-input"
                            type="text"
                            autocomplete="username"
                            value={form.identifier.clone()}
                            oninput={on_identifier}
                            disabled={props.loading}
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">{"Password"}</span>
                        <div class="field-row">
                            <input
                                class="field-input"
                                type={password_type}
                                autocomplete="current-password"
                                value={form.password.clone()}
                                oninput={on_password}
                                disabled={props.loading}
                            />
                            <button type="button" class="btn-reveal" onclick={toggle_reveal}>
                                { if form.reveal { "Hide" } else { "Show" } }
                            </button>
                        </div>
                    </label>

                    <button type="submit" class="btn-primary" disabled={props.loading}>
                        { if props.loading { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_identifier_or_password_is_incomplete() {
        let mut form = Credentials { identifier: "  ".into(), password: "pw".into(), reveal: false };
        assert!(!form.complete());
        form.identifier = "ops@example.com".into();
        assert!(form.complete());
        form.password.clear();
        assert!(!form.complete());
    }
}
