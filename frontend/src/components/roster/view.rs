//! View rendering for the review screen.
//!
//! Layout, top to bottom: statistics, status filter buttons, search bar, an
//! error banner with a retry button when a fetch failed, then the detail of
//! the current applicant next to the embedded resume.

use common::model::applicant::{Applicant, Status, UNKNOWN_STATUS_COLOR};
use common::model::counts::Counts;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RosterComponent;
use super::styles;
use crate::components::helpers::format_count;

pub fn view(component: &RosterComponent, ctx: &Context<RosterComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div style={styles::ROOT}>
            { build_stats(component.controller.counts()) }
            { build_filter_bar(component, link) }
            { build_search_bar(component, link) }
            { build_error_banner(component, link) }
            {
                match component.controller.current_applicant() {
                    Some(applicant) => build_detail(component, applicant, link),
                    None if component.loading => html! { <p>{"Loading applicants..."}</p> },
                    None => html! { <p>{"No applicants available"}</p> },
                }
            }
        </div>
    }
}

fn build_stats(counts: Option<&Counts>) -> Html {
    let total = counts.map(|c| c.total);
    let card = |label: &str, value: Option<u32>, color: &str| {
        html! {
            <div style={styles::stat_card(color)}>
                <div style="font-size:12px;">{label.to_string()}</div>
                <div style="font-size:20px;font-weight:bold;">
                    { value.map(format_count).unwrap_or_else(|| "-".to_string()) }
                </div>
            </div>
        }
    };

    html! {
        <div style={styles::STATS_BAR}>
            { card("Total", total, "#607D8B") }
            {
                for Status::ALL.iter().map(|&status| {
                    card(status.as_str(), counts.map(|c| c.get(status)), status.color())
                })
            }
        </div>
    }
}

fn build_filter_bar(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    let active = component.controller.status_filter();
    html! {
        <div style={styles::FILTER_BAR}>
            {
                for Status::ALL.iter().map(|&status| html! {
                    <button
                        style={styles::filter_button(status, status == active)}
                        onclick={link.callback(move |_| Msg::SetStatusFilter(status))}
                    >
                        { status.filter_label() }
                    </button>
                })
            }
        </div>
    }
}

fn build_search_bar(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    let invalid = component.controller.invalid_pattern();
    html! {
        <div style={styles::SEARCH_BAR}>
            <input
                type="text"
                placeholder="Search by name, university or email"
                value={component.search_text.clone()}
                title={invalid.map(|e| e.to_string())}
                style={styles::search_input(invalid.is_some())}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <label>
                <input
                    type="checkbox"
                    checked={component.use_regex}
                    onchange={link.callback(|e: Event| {
                        Msg::ToggleRegex(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                {" Regex"}
            </label>
            <button style={styles::NAV_BUTTON} onclick={link.callback(|_| Msg::FilterNonDuke)}>
                {"Filter Non-Duke"}
            </button>
            <button style={styles::NAV_BUTTON} onclick={link.callback(|_| Msg::ClearSearch)}>
                {"Clear"}
            </button>
            <span>
                { format!("{} of {}", component.controller.filtered_len(), component.controller.snapshot().len()) }
            </span>
        </div>
    }
}

fn build_error_banner(component: &RosterComponent, link: &Scope<RosterComponent>) -> Html {
    let Some(err) = &component.fetch_error else {
        return html! {};
    };
    html! {
        <div style={styles::ERROR_BANNER}>
            <span>{ err.to_string() }</span>
            <button style={styles::NAV_BUTTON} onclick={link.callback(|_| Msg::Retry)}>
                {"Retry"}
            </button>
        </div>
    }
}

fn field(label: &str, value: &Option<String>) -> Html {
    html! {
        <p>
            <strong>{ format!("{label}: ") }</strong>
            { value.clone().unwrap_or_default() }
        </p>
    }
}

fn build_detail(
    component: &RosterComponent,
    applicant: &Applicant,
    link: &Scope<RosterComponent>,
) -> Html {
    let writing = component.pending_write.is_some();
    let (position, len) = component.controller.position().unwrap_or((0, 0));

    html! {
        <div style={styles::COLUMNS}>
            <div style={styles::DETAILS}>
                <h2>{"Applicant Details"}</h2>
                <div style={styles::status_banner(applicant.status.color())}>
                    <h3 style="margin:0;">{ format!("Status: {}", applicant.status.as_str().to_uppercase()) }</h3>
                </div>

                <div style={styles::SECTION}>
                    <h3>{"Personal Information"}</h3>
                    { field("Full Name", &applicant.name) }
                    { field("Preferred Name", &applicant.pref_name) }
                    { field("Age", &applicant.age) }
                    { field("Country", &applicant.country) }
                    { field("Email", &applicant.email) }
                    { field("Phone", &applicant.phone) }
                </div>

                <div style={styles::SECTION}>
                    <h3>{"Academic Information"}</h3>
                    { field("University", &applicant.university) }
                    { field("Major", &applicant.major) }
                    { field("Graduation Year", &applicant.graduation_year) }
                </div>

                <div style={styles::SECTION}>
                    <h3>{"Application Essays"}</h3>
                    <div style="margin-bottom:10px;">
                        <strong>{"Why HackDuke?"}</strong>
                        <p>{ applicant.why_hackduke.clone().unwrap_or_default() }</p>
                    </div>
                    <div>
                        <strong>{"Why This Track?"}</strong>
                        <p>{ applicant.why_track.clone().unwrap_or_default() }</p>
                    </div>
                </div>

                <div style={styles::BUTTON_ROW}>
                    {
                        for Status::ALL.iter().map(|&status| html! {
                            <button
                                style={styles::decision_button(status)}
                                disabled={writing || applicant.status == status}
                                onclick={link.callback(move |_| Msg::ChangeStatus(status))}
                            >
                                { status.action_label() }
                            </button>
                        })
                    }
                </div>

                <div style={styles::BUTTON_ROW}>
                    <button style={styles::NAV_BUTTON} onclick={link.callback(|_| Msg::Previous)}>
                        {"Previous"}
                    </button>
                    <button style={styles::NAV_BUTTON} onclick={link.callback(|_| Msg::Next)}>
                        {"Next"}
                    </button>
                    <span>{ format!("{position} / {len}") }</span>
                </div>
            </div>

            <div style={styles::RESUME_COLUMN}>
                {
                    match &applicant.resume_url {
                        Some(url) => html! {
                            <iframe src={url.clone()} title="Resume" style={styles::RESUME_FRAME} />
                        },
                        None => html! {
                            <div style={styles::status_banner(UNKNOWN_STATUS_COLOR)}>{"No resume provided"}</div>
                        },
                    }
                }
            </div>
        </div>
    }
}
