use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginForm;

const PAGE_STYLE: &str = "display:flex;justify-content:center;align-items:center;min-height:100vh;background-color:#f5f5f5;";
const CARD_STYLE: &str = "background-color:white;padding:40px;border-radius:8px;box-shadow:0 4px 6px rgba(0,0,0,0.1);width:100%;max-width:400px;";
const INPUT_STYLE: &str = "padding:12px;border-radius:4px;border:1px solid #ddd;font-size:16px;";
const BUTTON_STYLE: &str = "padding:12px;background-color:#4CAF50;color:white;border:none;border-radius:4px;font-size:16px;cursor:pointer;";

pub fn view(form: &LoginForm, ctx: &Context<LoginForm>) -> Html {
    let link = ctx.link();

    html! {
        <div style={PAGE_STYLE}>
            <div style={CARD_STYLE}>
                <h1 style="text-align:center;margin-bottom:30px;color:#333;font-size:24px;">
                    {"HackDuke Dashboard"}
                </h1>
                <form
                    style="display:flex;flex-direction:column;gap:20px;"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <input
                        type="text"
                        placeholder="Username"
                        value={form.username.clone()}
                        style={INPUT_STYLE}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={form.password.clone()}
                        style={INPUT_STYLE}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button type="submit" style={BUTTON_STYLE} disabled={form.submitting}>
                        { if form.submitting { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
