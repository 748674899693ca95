//! WhatsUp! class feed page.

use core_types::{Event as FeedEvent, Page, ShowAndTellDraft};
use yew::prelude::*;

use crate::components::{Breadcrumb, TabBar};
use crate::context::use_page_role;

const TABS: &[&str] = &["Calendar", "Show & Tell", "Recognition"];

fn display_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Text of the media picker: the chosen file, or the prompt.
fn media_label(draft: &ShowAndTellDraft) -> String {
    if draft.media_url.is_empty() {
        "Upload Photo/Video".to_string()
    } else {
        draft.media_url.clone()
    }
}

/// WhatsUp! page component.
#[function_component(WhatsUpPage)]
pub fn whatsup_page() -> Html {
    let role = use_page_role(Page::WhatsUp);
    let tab = use_state(|| 0usize);
    let dialog_open = use_state(|| false);

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };
    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    let content = match *tab {
        0 => html! {
            <div>
                <h2>{"Upcoming Events"}</h2>
                <div class="grid">
                    { for mock_data::load_events().into_iter().map(|event| {
                        let key = event.id.clone();
                        html! { <EventCard key={key} {event} /> }
                    })}
                </div>
            </div>
        },
        1 => html! {
            <div>
                <h2>{"Show & Tell Gallery"}</h2>
                <button onclick={open_dialog}>{"+ Share Something"}</button>
                <div class="grid">
                    { for mock_data::load_show_and_tell().into_iter().map(|item| html! {
                        <div class="card" key={item.id.clone()}>
                            <h3>{ &item.title }</h3>
                            <p class="meta">
                                { format!("Shared by {} on {}", item.student_name, display_date(item.date)) }
                            </p>
                            <div style="font-size: 3rem; text-align: center;">{"📷"}</div>
                            <p>{ &item.description }</p>
                            <span>{ format!("⭐ {} likes", item.likes) }</span>
                        </div>
                    })}
                </div>
            </div>
        },
        _ => html! {
            <div>
                <h2>{"Recognition Badges"}</h2>
                <div class="grid">
                    { for mock_data::load_badges().into_iter().map(|badge| html! {
                        <div class="card" key={badge.id.clone()}>
                            <div style="font-size: 3rem;">{ &badge.icon }</div>
                            <h3>{ &badge.title }</h3>
                            <p class="meta">{ format!("Awarded to {}", badge.student_name) }</p>
                            <p>{ &badge.description }</p>
                            <span class="chip">{ format!("Awarded on {}", display_date(badge.date)) }</span>
                        </div>
                    })}
                </div>
            </div>
        },
    };

    html! {
        <div>
            <Breadcrumb page={Page::WhatsUp} {role} />
            <div class="card">
                <TabBar tabs={TABS} active={*tab} on_select={on_tab} />
                { content }
            </div>

            if *dialog_open {
                <ShareDialog on_close={close_dialog} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EventCardProps {
    event: FeedEvent,
}

#[function_component(EventCard)]
fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;

    html! {
        <div class="card">
            <h3>{ format!("{} {}", event.icon(), event.title) }</h3>
            <p class="meta">{ display_date(event.date) }</p>
            if let Some(student) = &event.student_name {
                <span class="chip">{ student }</span>
            }
            if let Some(description) = &event.description {
                <p>{ description }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ShareDialogProps {
    on_close: Callback<()>,
}

/// "Share Something New" dialog. Cancel and Share both discard the draft.
#[function_component(ShareDialog)]
fn share_dialog(props: &ShareDialogProps) -> Html {
    let draft = use_state(ShowAndTellDraft::default);

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(ShowAndTellDraft {
                title: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ShowAndTellDraft {
                description: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_media = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                draft.set(ShowAndTellDraft {
                    media_url: file.name(),
                    ..(*draft).clone()
                });
            }
        })
    };
    let close = {
        let draft = draft.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(services::close_show_and_tell((*draft).clone()));
            on_close.emit(());
        })
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>{"Share Something New"}</h2>
                <input type="text" placeholder="Title" value={draft.title.clone()} oninput={on_title} />
                <textarea
                    rows="4"
                    placeholder="Description"
                    value={draft.description.clone()}
                    oninput={on_description}
                />
                <label class="secondary">
                    { media_label(&draft) }
                    <input type="file" hidden={true} accept="image/*,video/*" onchange={on_media} />
                </label>
                <div class="actions">
                    <button class="secondary" onclick={close.clone()}>{"Cancel"}</button>
                    <button onclick={close}>{"Share"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_media_label_shows_chosen_file() {
        let mut draft = ShowAndTellDraft::default();
        assert_eq!(media_label(&draft), "Upload Photo/Video");

        draft.media_url = "turtle.jpg".to_string();
        assert_eq!(media_label(&draft), "turtle.jpg");
    }

    #[test]
    fn test_feed_events_render_their_dates() {
        let events: Vec<FeedEvent> = mock_data::load_events();
        assert!(!events.is_empty());
        assert_eq!(
            display_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap_or_default()),
            "2024-03-05"
        );
    }
}
