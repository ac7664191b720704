use common::login::exchange_credentials;
use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginForm;
use crate::components::helpers::alert;

pub fn update(form: &mut LoginForm, ctx: &Context<LoginForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetUsername(username) => {
            form.username = username;
            true
        }
        Msg::SetPassword(password) => {
            form.password = password;
            true
        }
        Msg::Submit => {
            if form.submitting {
                return false;
            }
            form.submitting = true;

            let service = ctx.props().service.clone();
            let username = form.username.clone();
            let password = form.password.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let session = service.session();
                let result = exchange_credentials(&service, &session, &username, &password)
                    .await
                    .map(|_| ());
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(result) => {
            form.submitting = false;
            match result {
                Ok(()) => {
                    info!("login accepted");
                    form.password.clear();
                    ctx.props().on_login.emit(());
                }
                Err(_) => alert("Login failed!"),
            }
            true
        }
    }
}
