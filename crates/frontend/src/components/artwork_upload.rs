//! "Upload New Work" dialog.

use std::rc::Rc;

use core_types::{ArtworkDraft, ArtworkEvent, ArtworkKind, PreviewTicket, SelectedFile};
use gloo_file::callbacks::FileReader;
use tracing::{error, warn};
use yew::prelude::*;

use crate::context::use_app;

#[derive(Debug, Clone, Default, PartialEq)]
struct DraftState(ArtworkDraft);

impl Reducible for DraftState {
    type Action = ArtworkEvent;

    fn reduce(self: Rc<Self>, action: ArtworkEvent) -> Rc<Self> {
        let DraftState(draft) = Rc::unwrap_or_clone(self);
        Rc::new(DraftState(draft.apply(action)))
    }
}

/// Properties for ArtworkUpload component.
#[derive(Properties, PartialEq)]
pub struct ArtworkUploadProps {
    pub on_close: Callback<()>,
}

/// Upload form. Render it only while open; closing drops the draft.
#[function_component(ArtworkUpload)]
pub fn artwork_upload(props: &ArtworkUploadProps) -> Html {
    let app = use_app();
    let draft = use_reducer(DraftState::default);
    let last_ticket = use_mut_ref(PreviewTicket::default);
    // Dropping a FileReader aborts its read.
    let reader = use_mut_ref(|| None::<FileReader>);

    let on_file = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo_file::File::from(file);
            let selected = SelectedFile {
                name: file.name(),
                mime_type: file.raw_mime_type(),
                size: file.size(),
            };

            if !selected.is_image() {
                *reader.borrow_mut() = None;
                draft.dispatch(ArtworkEvent::FileSelected {
                    file: selected,
                    preview: None,
                });
                return;
            }

            let ticket = last_ticket.borrow().next();
            *last_ticket.borrow_mut() = ticket;
            draft.dispatch(ArtworkEvent::FileSelected {
                file: selected,
                preview: Some(ticket),
            });

            let loaded = draft.clone();
            let task = gloo_file::callbacks::read_as_data_url(&file, move |result| match result {
                Ok(data_url) => loaded.dispatch(ArtworkEvent::PreviewLoaded { ticket, data_url }),
                Err(err) => warn!(%err, "image preview could not be read"),
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(ArtworkEvent::TitleChanged(input.value()));
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(ArtworkEvent::DescriptionChanged(input.value()));
        })
    };

    let kind_button = |kind: ArtworkKind| {
        let draft = draft.clone();
        let class = if draft.0.kind == kind { "" } else { "secondary" };
        let onclick = Callback::from(move |_: MouseEvent| draft.dispatch(ArtworkEvent::KindChanged(kind)));
        html! { <button {class} {onclick}>{ kind.label() }</button> }
    };

    let on_remove_file = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.dispatch(ArtworkEvent::FileCleared))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_upload = {
        let draft = draft.clone();
        let store = app.services.artifacts.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| match services::submit_artwork(&*store, &draft.0) {
            Ok(()) => {
                draft.dispatch(ArtworkEvent::Reset);
                on_close.emit(());
            }
            Err(err) => error!(%err, "upload failed"),
        })
    };

    let file_label = draft
        .0
        .file
        .as_ref()
        .map_or_else(|| "Click to upload file".to_string(), |file| file.name.clone());

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2>{"Upload New Work"}</h2>

                <label class="secondary">
                    { file_label }
                    <input
                        type="file"
                        hidden={true}
                        accept="image/*,.pdf,.doc,.docx"
                        onchange={on_file}
                    />
                </label>

                if draft.0.can_remove_file() {
                    <div>
                        if let Some(url) = draft.0.preview.data_url() {
                            <img class="preview" src={url.to_string()} alt="Preview" />
                        } else if draft.0.preview.is_loading() {
                            <p class="meta">{"Loading preview..."}</p>
                        }
                        <button class="link" aria-label="remove file" onclick={on_remove_file}>{"✕"}</button>
                    </div>
                }

                <input
                    type="text"
                    placeholder="Title"
                    value={draft.0.title.clone()}
                    oninput={on_title}
                />
                <textarea
                    rows="4"
                    placeholder="Description"
                    value={draft.0.description.clone()}
                    oninput={on_description}
                />

                <div>
                    { kind_button(ArtworkKind::Artwork) }
                    { kind_button(ArtworkKind::Assignment) }
                </div>

                <div class="actions">
                    <button class="secondary" onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_upload} disabled={!draft.0.can_submit()}>{"Upload"}</button>
                </div>
            </div>
        </div>
    }
}
