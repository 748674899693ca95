//! Dialog and composer form state.

use serde::{Deserialize, Serialize};

/// What kind of work is being uploaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkKind {
    #[default]
    Artwork,
    Assignment,
}

impl ArtworkKind {
    /// Button text.
    pub fn label(self) -> &'static str {
        match self {
            ArtworkKind::Artwork => "Artwork",
            ArtworkKind::Assignment => "Assignment",
        }
    }
}

/// File picked in an upload dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedFile {
    /// Whether the file gets an image preview.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Identifies one asynchronous preview read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewTicket(u64);

impl PreviewTicket {
    /// The ticket issued after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Image preview that only accepts the newest read.
///
/// Each selection is tagged with a ticket; completions carrying any other
/// ticket are stale and dropped, so a slow read of an older file can never
/// replace the preview of a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTracker {
    awaiting: Option<PreviewTicket>,
    data_url: Option<String>,
}

impl PreviewTracker {
    /// Start waiting for the read tagged `ticket`, dropping the old preview.
    pub fn expect(&mut self, ticket: PreviewTicket) {
        self.awaiting = Some(ticket);
        self.data_url = None;
    }

    /// Apply a finished read. Returns false when the read was stale.
    pub fn complete(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if self.awaiting != Some(ticket) {
            tracing::debug!(?ticket, "dropping stale preview");
            return false;
        }
        self.awaiting = None;
        self.data_url = Some(data_url);
        true
    }

    /// Drop the preview and any read in flight.
    pub fn clear(&mut self) {
        self.awaiting = None;
        self.data_url = None;
    }

    /// The loaded preview, once the latest read has finished.
    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    /// Whether a preview read is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }
}

/// Upload ready to hand to an artifact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSubmission {
    pub title: String,
    pub description: String,
    pub file: SelectedFile,
    pub kind: ArtworkKind,
}

/// Changes to the upload dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkEvent {
    TitleChanged(String),
    DescriptionChanged(String),
    KindChanged(ArtworkKind),
    /// A file was picked; images come with the ticket of their preview read.
    FileSelected {
        file: SelectedFile,
        preview: Option<PreviewTicket>,
    },
    PreviewLoaded {
        ticket: PreviewTicket,
        data_url: String,
    },
    /// The chosen file was removed.
    FileCleared,
    Reset,
}

/// "Upload New Work" dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkDraft {
    pub title: String,
    pub description: String,
    pub kind: ArtworkKind,
    pub file: Option<SelectedFile>,
    pub preview: PreviewTracker,
}

impl ArtworkDraft {
    /// Whether a chosen file can be removed, with or without a preview.
    pub fn can_remove_file(&self) -> bool {
        self.file.is_some()
    }

    /// Upload is enabled once a file is chosen and the title is filled in.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.title.is_empty()
    }

    /// The submission, if the form is complete.
    pub fn submission(&self) -> Option<ArtworkSubmission> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        Some(ArtworkSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            file,
            kind: self.kind,
        })
    }

    /// Apply one form event.
    pub fn apply(mut self, event: ArtworkEvent) -> Self {
        match event {
            ArtworkEvent::TitleChanged(title) => self.title = title,
            ArtworkEvent::DescriptionChanged(description) => self.description = description,
            ArtworkEvent::KindChanged(kind) => self.kind = kind,
            ArtworkEvent::FileSelected { file, preview } => {
                match preview {
                    Some(ticket) if file.is_image() => self.preview.expect(ticket),
                    _ => self.preview.clear(),
                }
                self.file = Some(file);
            }
            ArtworkEvent::PreviewLoaded { ticket, data_url } => {
                self.preview.complete(ticket, data_url);
            }
            ArtworkEvent::FileCleared => {
                self.file = None;
                self.preview.clear();
            }
            ArtworkEvent::Reset => return Self::default(),
        }
        self
    }
}

/// Parent-to-teacher message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub content: String,
    /// Language code the parent is writing in
    pub language: String,
}

/// Message composer on the parent portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub text: String,
    pub language: String,
}

impl Default for MessageDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            language: "en".to_string(),
        }
    }
}

impl MessageDraft {
    /// The message to send, or `None` when only whitespace was typed.
    pub fn outgoing(&self) -> Option<OutgoingMessage> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(OutgoingMessage {
            content: self.text.clone(),
            language: self.language.clone(),
        })
    }

    /// Clear the text after sending, keeping the language.
    pub fn cleared(self) -> Self {
        Self {
            text: String::new(),
            ..self
        }
    }
}

/// "Share Something New" dialog. Submissions are not added to the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowAndTellDraft {
    pub title: String,
    pub description: String,
    pub media_url: String,
}

impl ShowAndTellDraft {
    /// Whether nothing has been entered.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.media_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn image(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            size: 2048,
        }
    }

    fn pdf() -> SelectedFile {
        SelectedFile {
            name: "worksheet.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 4096,
        }
    }

    #[test]
    fn test_upload_needs_file_and_title() {
        let draft = ArtworkDraft::default();
        assert!(!draft.can_submit());

        let draft = draft.apply(ArtworkEvent::TitleChanged("Rainbow".to_string()));
        assert!(!draft.can_submit());
        assert!(draft.submission().is_none());

        let draft = draft.apply(ArtworkEvent::FileSelected {
            file: pdf(),
            preview: None,
        });
        assert!(draft.can_submit());

        let draft = draft.apply(ArtworkEvent::TitleChanged(String::new()));
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_submission_carries_fields() {
        let draft = ArtworkDraft::default()
            .apply(ArtworkEvent::TitleChanged("Rainbow".to_string()))
            .apply(ArtworkEvent::DescriptionChanged("Finger paint".to_string()))
            .apply(ArtworkEvent::KindChanged(ArtworkKind::Assignment))
            .apply(ArtworkEvent::FileSelected {
                file: pdf(),
                preview: None,
            });

        assert_eq!(
            draft.submission(),
            Some(ArtworkSubmission {
                title: "Rainbow".to_string(),
                description: "Finger paint".to_string(),
                file: pdf(),
                kind: ArtworkKind::Assignment,
            })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let draft = ArtworkDraft::default()
            .apply(ArtworkEvent::TitleChanged("x".to_string()))
            .apply(ArtworkEvent::Reset);
        assert_eq!(draft, ArtworkDraft::default());
    }

    #[test]
    fn test_stale_preview_is_ignored() {
        let first = PreviewTicket::default().next();
        let second = first.next();

        let draft = ArtworkDraft::default()
            .apply(ArtworkEvent::FileSelected {
                file: image("old.png"),
                preview: Some(first),
            })
            .apply(ArtworkEvent::FileSelected {
                file: image("new.png"),
                preview: Some(second),
            })
            .apply(ArtworkEvent::PreviewLoaded {
                ticket: second,
                data_url: "data:new".to_string(),
            })
            .apply(ArtworkEvent::PreviewLoaded {
                ticket: first,
                data_url: "data:old".to_string(),
            });

        assert_eq!(draft.preview.data_url(), Some("data:new"));
        assert_eq!(draft.file.as_ref().map(|f| f.name.as_str()), Some("new.png"));
    }

    #[test]
    fn test_non_image_clears_preview_and_pending_read() {
        let ticket = PreviewTicket::default().next();
        let draft = ArtworkDraft::default()
            .apply(ArtworkEvent::FileSelected {
                file: image("a.png"),
                preview: Some(ticket),
            })
            .apply(ArtworkEvent::FileSelected {
                file: pdf(),
                preview: None,
            })
            .apply(ArtworkEvent::PreviewLoaded {
                ticket,
                data_url: "data:a".to_string(),
            });

        assert_eq!(draft.preview.data_url(), None);
        assert!(!draft.preview.is_loading());
    }

    #[test]
    fn test_clearing_file_disables_upload() {
        let ticket = PreviewTicket::default().next();
        let draft = ArtworkDraft::default()
            .apply(ArtworkEvent::TitleChanged("Rainbow".to_string()))
            .apply(ArtworkEvent::FileSelected {
                file: image("rainbow.png"),
                preview: Some(ticket),
            })
            .apply(ArtworkEvent::FileCleared)
            .apply(ArtworkEvent::PreviewLoaded {
                ticket,
                data_url: "data:rainbow".to_string(),
            });

        assert!(!draft.can_submit());
        assert_eq!(draft.preview.data_url(), None);
        assert_eq!(draft.title, "Rainbow");
    }

    #[test]
    fn test_document_without_preview_can_be_removed() {
        let draft = ArtworkDraft::default().apply(ArtworkEvent::FileSelected {
            file: SelectedFile {
                name: "worksheet.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                size: 2048,
            },
            preview: None,
        });
        assert_eq!(draft.preview.data_url(), None);
        assert!(draft.can_remove_file());

        let draft = draft.apply(ArtworkEvent::FileCleared);
        assert!(!draft.can_remove_file());
        assert_eq!(draft.file, None);
    }

    #[test]
    fn test_tracker_reports_staleness() {
        let mut tracker = PreviewTracker::default();
        let ticket = PreviewTicket::default().next();
        tracker.expect(ticket);
        assert!(tracker.is_loading());
        assert!(!tracker.complete(ticket.next(), "data:x".to_string()));
        assert!(tracker.complete(ticket, "data:y".to_string()));
        assert!(!tracker.is_loading());
        assert!(!tracker.complete(ticket, "data:z".to_string()));
        assert_eq!(tracker.data_url(), Some("data:y"));
    }

    #[test]
    fn test_message_draft_ignores_whitespace() {
        let draft = MessageDraft {
            text: "   ".to_string(),
            ..MessageDraft::default()
        };
        assert!(draft.outgoing().is_none());
    }

    #[test]
    fn test_message_draft_clears_text_but_keeps_language() {
        let draft = MessageDraft {
            text: "See you at pickup".to_string(),
            language: "es".to_string(),
        };
        let out = draft.outgoing().unwrap();
        assert_eq!(out.content, "See you at pickup");
        assert_eq!(out.language, "es");

        let cleared = draft.cleared();
        assert_eq!(cleared.text, "");
        assert_eq!(cleared.language, "es");
    }

    #[test]
    fn test_show_and_tell_blank() {
        assert!(ShowAndTellDraft::default().is_blank());
        let draft = ShowAndTellDraft {
            title: "My Pet Turtle".to_string(),
            ..ShowAndTellDraft::default()
        };
        assert!(!draft.is_blank());
    }
}
