//! Student portfolio page.

use core_types::Page;
use yew::prelude::*;

use crate::components::{ArtworkUpload, Breadcrumb, NotesState, ProgressTracker, TabBar, TeacherNotes};
use crate::context::use_page_role;

const TABS: &[&str] = &["Artwork & Assignments", "Progress", "Teacher Notes"];

/// Portfolio page component.
#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let role = use_page_role(Page::Portfolios);
    let tab = use_state(|| 0usize);
    let upload_open = use_state(|| false);
    let avatar_open = use_state(|| false);
    let notes = use_reducer(|| NotesState::new(mock_data::load_notes()));
    let student = use_memo((), |_| mock_data::load_student());

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };
    let open_upload = {
        let upload_open = upload_open.clone();
        Callback::from(move |_: MouseEvent| upload_open.set(true))
    };
    let close_upload = {
        let upload_open = upload_open.clone();
        Callback::from(move |()| upload_open.set(false))
    };
    let toggle_avatar = {
        let avatar_open = avatar_open.clone();
        Callback::from(move |_: MouseEvent| avatar_open.set(!*avatar_open))
    };

    let avatar = match &student.avatar {
        Some(url) => html! {
            <img class="avatar" src={url.clone()} alt={student.name.clone()} onclick={toggle_avatar.clone()} />
        },
        None => html! { <span class="avatar chip">{ student.initial() }</span> },
    };

    let content = match *tab {
        0 => html! {
            <div>
                <button onclick={open_upload}>{"Upload New Work"}</button>
                <h3>{"Recent Uploads"}</h3>
                <p class="meta">{"No artwork or assignments uploaded yet."}</p>
            </div>
        },
        1 => html! {
            <div class="grid">
                { for mock_data::load_progress().into_iter().map(|record| {
                    let key = record.category.clone();
                    html! { <ProgressTracker key={key} {record} /> }
                })}
            </div>
        },
        _ => html! { <TeacherNotes notes={notes.clone()} /> },
    };

    html! {
        <div>
            <Breadcrumb page={Page::Portfolios} {role} />

            <div class="card" style="display: flex; gap: 1rem; align-items: center;">
                { avatar }
                <div>
                    <h1>{ &student.name }</h1>
                    <span class="chip">{ format!("🎓 Grade {}", student.grade) }</span>
                    <span class="chip">{ format!("{} years old", student.age) }</span>
                </div>
            </div>

            <div class="card">
                <TabBar tabs={TABS} active={*tab} on_select={on_tab} />
                { content }
            </div>

            if *upload_open {
                <ArtworkUpload on_close={close_upload} />
            }

            if *avatar_open {
                if let Some(url) = student.avatar.clone() {
                    <div class="dialog-backdrop" onclick={toggle_avatar}>
                        <img src={url} alt={student.name.clone()} style="max-width: 90vw; max-height: 90vh;" />
                    </div>
                }
            }
        </div>
    }
}
