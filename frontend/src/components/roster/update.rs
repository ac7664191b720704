//! Update function for the review screen.
//!
//! Network calls run in `spawn_local` tasks that own a clone of the service
//! and report back with a message; the controller itself is only touched
//! here, one message at a time.
//!
//! - Roster and counts loads take a ticket from the controller; responses for
//!   a ticket that is no longer current are dropped. Applying a status change
//!   retires every counts ticket issued before it.
//! - Status writes are resolved against the snapshot first, sent, and only
//!   mirrored locally once the service confirms them.
//! - A failed write re-fetches the counts so any drift is corrected.

use common::roster::{fetch_counts, fetch_roster, submit_status_change};
use common::search::QueryDescriptor;
use common::DashboardError;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RosterComponent;
use crate::components::helpers::show_toast;

pub fn update(component: &mut RosterComponent, ctx: &Context<RosterComponent>, msg: Msg) -> bool {
    match msg {
        Msg::LoadCounts => {
            let ticket = component.controller.begin_counts_load();
            let service = ctx.props().service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_counts(&service).await;
                link.send_message(Msg::CountsLoaded(ticket, result));
            });
            false
        }
        Msg::CountsLoaded(ticket, _) if !component.controller.is_current_counts(&ticket) => {
            warn!("dropping superseded counts response");
            false
        }
        Msg::CountsLoaded(ticket, Ok(counts)) => {
            component.controller.finish_counts_load(ticket, counts);
            if matches!(component.fetch_error, Some(DashboardError::Fetch { what: "counts", .. })) {
                component.fetch_error = None;
            }
            true
        }
        Msg::CountsLoaded(_, Err(err)) => {
            warn!("{err}");
            show_toast(&err.to_string());
            component.fetch_error = Some(err);
            true
        }
        Msg::SetStatusFilter(status) => {
            let ticket = component.controller.begin_load(status);
            component.loading = true;

            let service = ctx.props().service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_roster(&service, ticket.status()).await;
                link.send_message(Msg::RosterLoaded(ticket, result));
            });
            true
        }
        Msg::RosterLoaded(ticket, result) => {
            if !component.controller.is_current(&ticket) {
                warn!("dropping response of superseded {} load", ticket.status());
                return false;
            }
            component.loading = false;
            match result {
                Ok(applicants) => {
                    component.controller.finish_load(ticket, applicants);
                    if matches!(
                        component.fetch_error,
                        Some(DashboardError::Fetch { what: "applicants", .. })
                    ) {
                        component.fetch_error = None;
                    }
                }
                Err(err) => {
                    warn!("{err}");
                    show_toast(&err.to_string());
                    component.fetch_error = Some(err);
                }
            }
            true
        }
        Msg::SearchInput(text) => {
            component.search_text = text;
            component.controller.set_query(component.query());
            true
        }
        Msg::ToggleRegex(use_regex) => {
            component.use_regex = use_regex;
            component.controller.set_query(component.query());
            true
        }
        Msg::FilterNonDuke => {
            let query = QueryDescriptor::non_duke();
            component.search_text = query.text.clone();
            component.use_regex = query.use_regex;
            component.controller.set_query(query);
            true
        }
        Msg::ClearSearch => {
            component.search_text.clear();
            component.use_regex = false;
            component.controller.set_query(QueryDescriptor::default());
            true
        }
        Msg::Previous => {
            component.controller.advance(-1);
            true
        }
        Msg::Next => {
            component.controller.advance(1);
            true
        }
        Msg::ChangeStatus(status) => {
            if component.pending_write.is_some() {
                return false;
            }
            let Some(id) = component.controller.current_applicant().map(|a| a.id.clone()) else {
                return false;
            };
            let change = match component.controller.prepare_status_change(&id, status) {
                Ok(change) => change,
                Err(err) => {
                    show_toast(&err.to_string());
                    return false;
                }
            };
            component.pending_write = Some(id);

            let service = ctx.props().service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = submit_status_change(&service, change).await;
                link.send_message(Msg::StatusChanged(result));
            });
            true
        }
        Msg::StatusChanged(Ok(change)) => {
            component.pending_write = None;
            component.controller.apply_status_change(&change);
            true
        }
        Msg::StatusChanged(Err(err)) => {
            component.pending_write = None;
            show_toast(&err.to_string());
            ctx.link().send_message(Msg::LoadCounts);
            true
        }
        Msg::Retry => {
            component.fetch_error = None;
            let status = component.controller.status_filter();
            ctx.link()
                .send_message_batch(vec![Msg::LoadCounts, Msg::SetStatusFilter(status)]);
            true
        }
    }
}
