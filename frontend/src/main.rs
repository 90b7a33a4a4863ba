mod api;
mod notice;

use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::InspectionResponse;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use api::UploadError;
use notice::Notice;

const NOTICE_DISMISS_MS: u32 = 4000;

// Models
struct SelectedImage {
    file: GlooFile,
    preview_url: ObjectUrl,
}

/// A completed inspection: the server's verdict plus the object URL of the
/// image that was submitted, so the source preview survives a later
/// selection change.
struct Outcome {
    response: InspectionResponse,
    source_url: ObjectUrl,
}

// Yew msg components
enum Msg {
    // Input events
    FileSelected(GlooFile),
    ProjectIdChanged(String),
    ProjectDescriptionChanged(String),
    NoteChanged(String),

    // Upload operations
    Submit,
    UploadFinished(u64, ObjectUrl, Result<InspectionResponse, UploadError>),

    // Note + UI states
    SaveNote,
    DismissNotice,
}

// Main component
struct Model {
    selected: Option<SelectedImage>,
    project_id: String,
    project_description: String,
    note: String,
    outcome: Option<Outcome>,
    loading: bool,
    request_seq: u64,
    notice: Option<Notice>,
    notice_timer: Option<Timeout>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected: None,
            project_id: String::new(),
            project_description: String::new(),
            note: String::new(),
            outcome: None,
            loading: false,
            request_seq: 0,
            notice: None,
            notice_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input events
            Msg::FileSelected(file) => self.handle_file_selected(file),
            Msg::ProjectIdChanged(value) => {
                self.project_id = value;
                false
            }
            Msg::ProjectDescriptionChanged(value) => {
                self.project_description = value;
                false
            }
            Msg::NoteChanged(value) => {
                self.note = value;
                false
            }

            // Upload operations
            Msg::Submit => self.handle_submit(ctx),
            Msg::UploadFinished(seq, source_url, result) => {
                self.handle_upload_finished(ctx, seq, source_url, result)
            }

            // Note + UI states
            Msg::SaveNote => self.handle_save_note(ctx),
            Msg::DismissNotice => {
                self.notice = None;
                self.notice_timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { self.render_header() }

                <main class="main-content">
                    { self.render_upload_section(ctx) }
                    { self.render_notice() }
                    { self.render_results() }
                    { self.render_note_section(ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Corrosion Inspection | Rust WASM frontend"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_file_selected(&mut self, file: GlooFile) -> bool {
        let preview_url = ObjectUrl::from(file.clone());
        self.selected = Some(SelectedImage { file, preview_url });
        self.clear_notice();
        true
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        // The submit control is disabled while a request is in flight.
        if self.loading {
            return false;
        }

        let (file, source_url) = match &self.selected {
            Some(image) => (image.file.clone(), image.preview_url.clone()),
            None => {
                self.show_notice(
                    ctx,
                    Notice::Warning("Please select an image before uploading.".into()),
                );
                return true;
            }
        };

        self.loading = true;
        self.clear_notice();
        self.request_seq += 1;
        let seq = self.request_seq;
        let project_id = self.project_id.clone();
        let project_description = self.project_description.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = api::submit_inspection(&file, &project_id, &project_description).await;
            link.send_message(Msg::UploadFinished(seq, source_url, result));
        });

        true
    }

    fn handle_upload_finished(
        &mut self,
        ctx: &Context<Self>,
        seq: u64,
        source_url: ObjectUrl,
        result: Result<InspectionResponse, UploadError>,
    ) -> bool {
        if seq != self.request_seq {
            log::debug!("discarding result of superseded request {seq}");
            return false;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                log::info!(
                    "inference complete: {} at {}",
                    response.prediction,
                    response.confidence_percent()
                );
                self.outcome = Some(Outcome { response, source_url });
            }
            Err(err) => {
                log::error!("upload failed: {err}");
                self.show_notice(
                    ctx,
                    Notice::Error("Could not process image. Please try again.".into()),
                );
            }
        }
        true
    }

    fn handle_save_note(&mut self, ctx: &Context<Self>) -> bool {
        match shared::normalize_note(&self.note).map(str::to_owned) {
            Some(note) => {
                // Backend persistence for notes is pending; acknowledge and log.
                log::info!("inspection note saved: {note}");
                self.show_notice(ctx, Notice::Success("Notes saved successfully!".into()));
            }
            None => {
                self.show_notice(
                    ctx,
                    Notice::Warning("Please add a comment before saving.".into()),
                );
            }
        }
        true
    }

    fn show_notice(&mut self, ctx: &Context<Self>, notice: Notice) {
        if let Some(timer) = self.notice_timer.take() {
            timer.cancel();
        }
        if notice.auto_dismisses() {
            let link = ctx.link().clone();
            self.notice_timer = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
                link.send_message(Msg::DismissNotice);
            }));
        }
        self.notice = Some(notice);
    }

    fn clear_notice(&mut self) {
        if let Some(timer) = self.notice_timer.take() {
            timer.cancel();
        }
        self.notice = None;
    }
}

// Rendering methods
impl Model {
    fn render_header(&self) -> Html {
        html! {
            <header class="app-header">
                <h1><i class="fa-solid fa-magnifying-glass-chart"></i> {" Corrosion Inspection"}</h1>
                <p class="subtitle">{"Upload a metal surface image to detect corrosion"}</p>
            </header>
        }
    }

    fn render_upload_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let handle_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input
                .files()
                .and_then(|list| list.item(0))
                .map(GlooFile::from);
            input.set_value("");
            file.map(Msg::FileSelected)
        });

        let trigger_file_input = Callback::from(|_: MouseEvent| {
            if let Some(input) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id("file-input"))
            {
                if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                    html_input.click();
                }
            }
        });

        let handle_project_id = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::ProjectIdChanged(input.value())
        });
        let handle_project_description = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::ProjectDescriptionChanged(input.value())
        });

        html! {
            <div class="upload-section">
                <input
                    type="file"
                    id="file-input"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />

                <button class="select-btn" onclick={trigger_file_input}>
                    <i class="fa-solid fa-image"></i> {" Select Image"}
                </button>

                { self.render_selected_preview() }

                <div class="project-fields">
                    <input
                        type="text"
                        id="project-id"
                        placeholder="Project ID"
                        value={self.project_id.clone()}
                        onchange={handle_project_id}
                    />
                    <input
                        type="text"
                        id="project-description"
                        placeholder="Project description"
                        value={self.project_description.clone()}
                        onchange={handle_project_description}
                    />
                </div>

                <button
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::Submit)}
                    disabled={self.loading}
                >
                    { self.render_submit_button_content() }
                </button>
            </div>
        }
    }

    fn render_selected_preview(&self) -> Html {
        match &self.selected {
            Some(image) => html! {
                <div class="selected-preview">
                    <img
                        src={image.preview_url.to_string()}
                        alt={image.file.name()}
                        style="max-width: 100%; max-height: 300px; object-fit: contain;"
                    />
                    <p class="selected-filename">{ image.file.name() }</p>
                </div>
            },
            None => html! {
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"No image selected"}</p>
                </div>
            },
        }
    }

    fn render_submit_button_content(&self) -> Html {
        if self.loading {
            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
        } else {
            html! { <><i class="fa-solid fa-upload"></i>{" Upload & Detect"}</> }
        }
    }

    fn render_notice(&self) -> Html {
        match &self.notice {
            Some(notice) => notice.render(),
            None => html! {},
        }
    }

    fn render_results(&self) -> Html {
        let Some(outcome) = &self.outcome else {
            return html! {};
        };
        let response = &outcome.response;
        let is_corrosion = response.prediction.is_corrosion();

        html! {
            <div
                id="result-section"
                class={classes!(
                    "results-container",
                    if is_corrosion { "corrosion-detected" } else { "no-corrosion" }
                )}
            >
                <div class="result-header">
                    <h2 id="prediction" style={format!("color: {};", response.prediction.color())}>
                        {
                            if is_corrosion {
                                html! { <><i class="fa-solid fa-triangle-exclamation"></i>{" "}{ response.prediction.label() }</> }
                            } else {
                                html! { <><i class="fa-solid fa-circle-check"></i>{" "}{ response.prediction.label() }</> }
                            }
                        }
                    </h2>
                    <div class="confidence-meter">
                        <div class="meter-label">{"Confidence:"}</div>
                        <div class="meter">
                            <div
                                class="meter-fill"
                                style={format!("width: {}", response.confidence_percent())}
                            ></div>
                        </div>
                        <div id="confidence" class="meter-value">{ response.confidence_percent() }</div>
                    </div>
                </div>
                <div class="image-pair">
                    <figure>
                        <img id="original-image" src={outcome.source_url.to_string()} alt="Uploaded image" />
                        <figcaption>{"Uploaded image"}</figcaption>
                    </figure>
                    <figure>
                        <img
                            id="annotated-image"
                            src={response.annotated_url(api::API_BASE)}
                            alt="Annotated image"
                        />
                        <figcaption>{"Detected corrosion areas"}</figcaption>
                    </figure>
                </div>
            </div>
        }
    }

    fn render_note_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let handle_note = link.callback(|e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::NoteChanged(textarea.value())
        });

        html! {
            <div class="note-section">
                <h3>{"Inspection notes"}</h3>
                <textarea
                    id="note-box"
                    placeholder="Add a comment about this inspection"
                    value={self.note.clone()}
                    onchange={handle_note}
                />
                <button class="save-btn" onclick={link.callback(|_| Msg::SaveNote)}>
                    <i class="fa-solid fa-floppy-disk"></i> {" Save Notes"}
                </button>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Corrosion inspection frontend starting");
    yew::Renderer::<Model>::new().render();
}
