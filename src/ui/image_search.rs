// SPDX-License-Identifier: MPL-2.0
//! Photo upload area: drop zone, file picker, preview and search button.
//!
//! The component never touches the filesystem itself. Picking a file emits
//! [`Event::ReadFile`]; the application reads the bytes asynchronously and
//! feeds them back through [`Message::FileRead`]. A read that completes after
//! the user moved on to another file (or cleared the selection) is dropped.

use crate::i18n::fluent::I18n;
use crate::search::ImageUpload;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{self, Image};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extensions offered by the native file picker.
pub const PICKER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// An image whose bytes have been read and are ready to upload.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub upload: ImageUpload,
    pub preview: image::Handle,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<SelectedImage>,
    /// File whose bytes are still being read.
    pending: Option<PathBuf>,
    is_hovering: bool,
}

impl State {
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn upload(&self) -> Option<&ImageUpload> {
        self.selected.as_ref().map(|selected| &selected.upload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }
}

/// Contextual data needed to render the image search area.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub is_loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    /// Result of the native file picker (`None` when cancelled).
    FileChosen(Option<PathBuf>),
    FileDropped(PathBuf),
    FileHovered,
    HoverLeft,
    FileRead {
        path: PathBuf,
        result: Result<Arc<Vec<u8>>, String>,
    },
    ClearPressed,
    SearchPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenPicker,
    /// The application should read this file and reply with `FileRead`.
    ReadFile(PathBuf),
    Selected(PathBuf),
    ReadFailed { path: PathBuf, error: String },
    Search,
}

pub fn update(state: &mut State, message: Message, is_loading: bool) -> Event {
    match message {
        Message::BrowsePressed => Event::OpenPicker,
        Message::FileChosen(Some(path)) => accept(state, path),
        Message::FileChosen(None) => Event::None,
        Message::FileDropped(path) => {
            state.is_hovering = false;
            accept(state, path)
        }
        Message::FileHovered => {
            state.is_hovering = true;
            Event::None
        }
        Message::HoverLeft => {
            state.is_hovering = false;
            Event::None
        }
        Message::FileRead { path, result } => {
            if state.pending.as_deref() != Some(path.as_path()) {
                tracing::debug!(path = %path.display(), "discarding stale image read");
                return Event::None;
            }
            state.pending = None;

            match result {
                Ok(bytes) => {
                    let Some(mime) = image_mime(&path) else {
                        return Event::None;
                    };
                    let file_name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| String::from("image"));
                    let preview = image::Handle::from_bytes(bytes.as_ref().clone());
                    state.selected = Some(SelectedImage {
                        path: path.clone(),
                        upload: ImageUpload {
                            file_name,
                            mime,
                            bytes,
                        },
                        preview,
                    });
                    Event::Selected(path)
                }
                Err(error) => Event::ReadFailed { path, error },
            }
        }
        Message::ClearPressed => {
            state.selected = None;
            state.pending = None;
            Event::None
        }
        Message::SearchPressed
            if is_loading || state.pending.is_some() || state.selected.is_none() =>
        {
            Event::None
        }
        Message::SearchPressed => Event::Search,
    }
}

/// Starts reading `path` when it looks like an image, replacing the current
/// selection; anything else is ignored and the selection stays as it was.
fn accept(state: &mut State, path: PathBuf) -> Event {
    if image_mime(&path).is_none() {
        tracing::debug!(path = %path.display(), "ignoring non-image file");
        return Event::None;
    }
    // The previous image must not be uploaded while the new one is read.
    state.selected = None;
    state.pending = Some(path.clone());
    Event::ReadFile(path)
}

/// MIME type guessed from the file extension, only when it is `image/*`.
pub fn image_mime(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_string())
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let drop_area = match ctx.state.selected() {
        Some(selected) => preview(ctx.i18n, selected),
        None => drop_zone(&ctx),
    };

    let label = if ctx.is_loading {
        ctx.i18n.tr("image-searching")
    } else {
        ctx.i18n.tr("image-search-button")
    };
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::magnifier(),
            sizing::ICON_SM,
            iced::Color::WHITE,
        ))
        .push(Text::new(label).size(typography::BODY));

    let mut search_button = button(content)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::primary);
    if !ctx.is_loading && !ctx.state.is_pending() && ctx.state.selected().is_some() {
        search_button = search_button.on_press(Message::SearchPressed);
    }

    Column::new()
        .spacing(spacing::SM)
        .push(drop_area)
        .push(search_button)
        .into()
}

fn drop_zone<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let caption_style = |theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    };

    let content = if ctx.state.is_pending() {
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("image-loading-preview"))
                    .size(typography::BODY)
                    .style(caption_style),
            )
    } else {
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(icons::sized(icons::upload(), sizing::ICON_XL))
            .push(Text::new(ctx.i18n.tr("image-drop-title")).size(typography::TITLE_SM))
            .push(
                Text::new(ctx.i18n.tr("image-drop-subtitle"))
                    .size(typography::BODY_SM)
                    .style(caption_style),
            )
    };

    let zone = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(ctx.state.is_hovering()));

    mouse_area(zone)
        .on_press(Message::BrowsePressed)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn preview<'a>(i18n: &I18n, selected: &'a SelectedImage) -> Element<'a, Message> {
    let image = Image::new(selected.preview.clone())
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .content_fit(ContentFit::Contain);

    let clear_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::ClearPressed)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(selected.upload.file_name.clone())
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(clear_button);

    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(image)
        .push(
            Text::new(i18n.tr("image-selected"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::drop_zone(false))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_ok(path: &str) -> Message {
        Message::FileRead {
            path: PathBuf::from(path),
            result: Ok(Arc::new(vec![1, 2, 3])),
        }
    }

    #[test]
    fn non_image_files_are_ignored() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::FileChosen(Some(PathBuf::from("/tmp/notes.txt"))),
            false,
        );
        assert_eq!(event, Event::None);
        assert!(!state.is_pending());
        assert!(state.selected().is_none());
    }

    #[test]
    fn image_file_is_read_then_selected() {
        let mut state = State::default();
        let event = update(
            &mut state,
            Message::FileChosen(Some(PathBuf::from("/tmp/face.png"))),
            false,
        );
        assert_eq!(event, Event::ReadFile(PathBuf::from("/tmp/face.png")));
        assert!(state.is_pending());

        let event = update(&mut state, read_ok("/tmp/face.png"), false);
        assert_eq!(event, Event::Selected(PathBuf::from("/tmp/face.png")));
        let upload = state.upload().expect("upload should be set");
        assert_eq!(upload.file_name, "face.png");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.bytes.as_slice(), &[1, 2, 3]);
        assert!(!state.is_pending());
    }

    #[test]
    fn stale_read_is_discarded() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/a.jpg")), false);
        update(&mut state, Message::FileDropped(PathBuf::from("/b.jpg")), false);

        assert_eq!(update(&mut state, read_ok("/a.jpg"), false), Event::None);
        assert!(state.selected().is_none());

        update(&mut state, read_ok("/b.jpg"), false);
        assert_eq!(
            state.selected().map(|s| s.path.clone()),
            Some(PathBuf::from("/b.jpg"))
        );
    }

    #[test]
    fn new_file_replaces_selection_before_its_read_completes() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/old.png")), false);
        update(&mut state, read_ok("/old.png"), false);
        assert!(state.upload().is_some());

        update(&mut state, Message::FileDropped(PathBuf::from("/new.png")), false);
        assert!(state.upload().is_none());
        assert_eq!(update(&mut state, Message::SearchPressed, false), Event::None);

        update(&mut state, read_ok("/new.png"), false);
        assert_eq!(state.upload().map(|u| u.file_name.as_str()), Some("new.png"));
        assert_eq!(update(&mut state, Message::SearchPressed, false), Event::Search);
    }

    #[test]
    fn non_image_drop_keeps_current_selection() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/face.png")), false);
        update(&mut state, read_ok("/face.png"), false);

        update(&mut state, Message::FileDropped(PathBuf::from("/notes.txt")), false);
        assert_eq!(state.upload().map(|u| u.file_name.as_str()), Some("face.png"));
    }

    #[test]
    fn read_after_clear_is_discarded() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/a.jpg")), false);
        update(&mut state, Message::ClearPressed, false);
        assert_eq!(update(&mut state, read_ok("/a.jpg"), false), Event::None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn read_failure_is_reported() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/a.webp")), false);
        let event = update(
            &mut state,
            Message::FileRead {
                path: PathBuf::from("/a.webp"),
                result: Err("permission denied".into()),
            },
            false,
        );
        assert_eq!(
            event,
            Event::ReadFailed {
                path: PathBuf::from("/a.webp"),
                error: "permission denied".into()
            }
        );
    }

    #[test]
    fn dropping_clears_hover_highlight() {
        let mut state = State::default();
        update(&mut state, Message::FileHovered, false);
        assert!(state.is_hovering());
        update(&mut state, Message::FileDropped(PathBuf::from("/a.gif")), false);
        assert!(!state.is_hovering());
    }

    #[test]
    fn search_requires_selection_and_idle() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::SearchPressed, false), Event::None);

        update(&mut state, Message::FileDropped(PathBuf::from("/a.bmp")), false);
        update(&mut state, read_ok("/a.bmp"), false);
        assert_eq!(update(&mut state, Message::SearchPressed, true), Event::None);
        assert_eq!(update(&mut state, Message::SearchPressed, false), Event::Search);
    }

    #[test]
    fn clear_resets_selection() {
        let mut state = State::default();
        update(&mut state, Message::FileDropped(PathBuf::from("/a.jpeg")), false);
        update(&mut state, read_ok("/a.jpeg"), false);
        update(&mut state, Message::ClearPressed, false);
        assert!(state.selected().is_none());
    }

    #[test]
    fn mime_detection_only_accepts_images() {
        assert_eq!(image_mime(Path::new("x.JPG")).as_deref(), Some("image/jpeg"));
        assert_eq!(image_mime(Path::new("x.webp")).as_deref(), Some("image/webp"));
        assert!(image_mime(Path::new("x.pdf")).is_none());
        assert!(image_mime(Path::new("noext")).is_none());
    }
}
