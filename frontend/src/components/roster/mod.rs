//! Review screen: statistics, status filter, search bar, applicant detail and
//! the embedded resume viewer.
//!
//! The `Component` implementation only wires Yew to `update::update` and
//! `view::view`. On creation it requests the counts and the roster of the
//! initial status.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::RosterProps;
pub use state::RosterComponent;

impl Component for RosterComponent {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message_batch(vec![
            Msg::LoadCounts,
            Msg::SetStatusFilter(props.initial_status),
        ]);
        RosterComponent::new(props.regex_scope)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
