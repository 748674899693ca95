//! Parent portal page.

use core_types::{Activity, MessageDraft, Page};
use mock_data::LANGUAGES;
use tracing::error;
use yew::prelude::*;

use crate::components::{Breadcrumb, TabBar};
use crate::context::{use_app, use_page_role};

const TABS: &[&str] = &["Weekly Summary", "Messages", "At-Home Activities"];

/// Parent portal page component.
#[function_component(ParentPortalPage)]
pub fn parent_portal_page() -> Html {
    let role = use_page_role(Page::ParentPortal);
    let tab = use_state(|| 0usize);

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };

    let content = match *tab {
        0 => html! { <WeeklySummaryTab /> },
        1 => html! { <MessagesTab /> },
        _ => html! {
            <div>
                <h2>{"At-Home Activities"}</h2>
                <div class="grid">
                    { for mock_data::load_activities().into_iter().map(|activity| {
                        let key = activity.id.clone();
                        html! { <ActivityCard key={key} {activity} /> }
                    })}
                </div>
            </div>
        },
    };

    html! {
        <div>
            <Breadcrumb page={Page::ParentPortal} {role} />
            <div class="card">
                <TabBar tabs={TABS} active={*tab} on_select={on_tab} />
                { content }
            </div>
        </div>
    }
}

#[function_component(WeeklySummaryTab)]
fn weekly_summary_tab() -> Html {
    let summary = mock_data::load_weekly_summary();

    html! {
        <div>
            <h2>{ format!("Week of {}", summary.date_range) }</h2>
            <div class="grid">
                <div class="card">
                    <h3>{"Learning Goals"}</h3>
                    <ul>
                        { for summary.learning_goals.iter().map(|goal| {
                            let (mark, color) = goal.status.marker();
                            html! {
                                <li key={goal.title.clone()}>
                                    <span style={format!("color: {color};")}>{ mark }</span>
                                    { format!(" {}", goal.title) }
                                </li>
                            }
                        })}
                    </ul>
                </div>
                <div class="card">
                    <h3>{"Behavior Notes"}</h3>
                    <ul>
                        { for summary.behavior_notes.iter().map(|note| html! { <li key={note.clone()}>{ note }</li> }) }
                    </ul>
                </div>
                <div class="card">
                    <h3>{"Highlights"}</h3>
                    <ul>
                        { for summary.highlights.iter().map(|item| html! { <li key={item.clone()}>{ format!("🏆 {item}") }</li> }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[function_component(MessagesTab)]
fn messages_tab() -> Html {
    let app = use_app();
    let draft = use_state(MessageDraft::default);

    let on_language = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            draft.set(MessageDraft {
                language: select.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_text = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(MessageDraft {
                text: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_send = {
        let draft = draft.clone();
        let delivery = app.services.delivery.clone();
        Callback::from(move |_: MouseEvent| match services::send_message(&*delivery, &draft) {
            Ok(next) => draft.set(next),
            Err(err) => error!(%err, "message could not be sent"),
        })
    };

    html! {
        <div>
            <h2>{"Messages"}</h2>
            <div class="card">
                <select onchange={on_language}>
                    { for LANGUAGES.iter().map(|language| html! {
                        <option
                            key={language.code}
                            value={language.code}
                            selected={language.code == draft.language}
                        >
                            { language.name }
                        </option>
                    })}
                </select>
                <textarea
                    rows="4"
                    placeholder="Type your message"
                    value={draft.text.clone()}
                    oninput={on_text}
                />
                <button onclick={on_send}>{"Send Message ➤"}</button>
            </div>

            { for mock_data::load_messages().into_iter().map(|message| html! {
                <div class="card" key={message.id.clone()}>
                    <strong>{ &message.from }</strong>
                    <span class="meta">{ format!(" {}", message.timestamp) }</span>
                    <p>{ &message.content }</p>
                    if message.translated {
                        <button class="link">{"🌐 Show Original"}</button>
                    }
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityCardProps {
    activity: Activity,
}

#[function_component(ActivityCard)]
fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    html! {
        <div class="card">
            <h3>{ &activity.title }</h3>
            <span class="chip">{ activity.category.label() }</span>
            <p>{ &activity.description }</p>
            <p><strong>{ format!("Duration: {}", activity.duration) }</strong></p>
            <p><strong>{"Materials Needed:"}</strong></p>
            <ul>
                { for activity.materials.iter().map(|material| html! { <li key={material.clone()}>{ material }</li> }) }
            </ul>
            <span class="chip">{ format!("Related to: {}", activity.related_to) }</span>
        </div>
    }
}
