use common::login::LoginGate;
use yew::{html, Component, Context, Html, Properties};

use crate::components::login::LoginForm;
use crate::components::roster::RosterComponent;
use crate::services::{HttpApplicantService, LocalStorageSession};

pub enum Msg {
    LoggedIn,
}

/// Built once in `main` from the resolved configuration.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub service: HttpApplicantService,
}

/// Switches between the login form and the review screen.
pub struct App {
    gate: LoginGate,
    service: HttpApplicantService,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            gate: LoginGate::restore(&LocalStorageSession),
            service: ctx.props().service.clone(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn => {
                self.gate.accept();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.gate.is_authenticated() {
            html! { <RosterComponent service={self.service.clone()} /> }
        } else {
            html! {
                <LoginForm
                    service={self.service.clone()}
                    on_login={ctx.link().callback(|_| Msg::LoggedIn)}
                />
            }
        }
    }
}
