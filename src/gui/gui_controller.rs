//! GUI controller implementation
//!
//! Bridges the library state machines and the Slint window. Page state lives
//! on the UI thread behind `Rc<RefCell<_>>`; the lead form is shared with the
//! delivery worker behind `Arc<Mutex<_>>`. Worker threads only touch the
//! window through `upgrade_in_event_loop`, which is a no-op once the window
//! is gone.

use crate::{
    MainWindow, NavLink, PlanCard, ProjectCard, RevealStyle, ServiceCard, StatItem, TechRow,
    TestimonialCard,
};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use projecttown::config::{AppConfig, WindowState};
use projecttown::content::{ProjectTab, SiteContent, Stat};
use projecttown::counter::CountUpAnimator;
use projecttown::error::SiteError;
use projecttown::form::{Field, FormStatus, LeadFormController, LeadSink, LeadSubmission};
use projecttown::nav::{NavState, Section};
use projecttown::reveal::{Direction, Rect, RevealController};
use projecttown::utils::{mailto_link, open_link, tel_link};
use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Technologies per row of the tech grid
const TECH_ROW_LEN: usize = 6;

/// Delay before the first reveal pass, giving the window one layout pass
const INITIAL_LAYOUT_DELAY: Duration = Duration::from_millis(50);

/// Which count-up row a stat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatGroup {
    Hero,
    Band,
}

impl StatGroup {
    fn for_section(section: Section) -> Option<Self> {
        match section {
            Section::Home => Some(StatGroup::Hero),
            Section::Stats => Some(StatGroup::Band),
            _ => None,
        }
    }

    fn section(self) -> Section {
        match self {
            StatGroup::Hero => Section::Home,
            StatGroup::Band => Section::Stats,
        }
    }

    fn model(self, window: &MainWindow) -> ModelRc<StatItem> {
        match self {
            StatGroup::Hero => window.get_hero_stats(),
            StatGroup::Band => window.get_stats(),
        }
    }
}

/// UI-thread page state
struct PageState {
    config: AppConfig,
    content: SiteContent,
    nav: NavState,
    reveal: RevealController,
    active_tab: ProjectTab,
    /// Running and finished count-up timers; dropping them stops the timers
    counters: Vec<CountUpAnimator>,
}

impl PageState {
    fn new(config: AppConfig, content: SiteContent) -> Self {
        let mut reveal = RevealController::new(config.animation.reveal_enabled);
        for _ in Section::ALL {
            reveal.add(config.animation.reveal(Direction::Up, Duration::ZERO));
        }

        Self {
            config,
            content,
            nav: NavState::default(),
            reveal,
            active_tab: ProjectTab::Web,
            counters: Vec::new(),
        }
    }

    fn on_scroll(&mut self, window: &MainWindow, scroll_y: f32, viewport_height: f32) {
        if self.nav.on_scroll(scroll_y) {
            window.set_scrolled(self.nav.is_scrolled());
        }

        let bounds = section_bounds(window);
        if self.nav.update_active(&bounds) {
            debug!("Active section: {:?}", self.nav.active());
            window.set_nav_links(nav_links_model(self.nav.active()));
        }

        let fired = self
            .reveal
            .update(&bounds, &Rect::new(self.nav.scroll_y(), viewport_height));
        self.apply_revealed(window, &fired);
    }

    fn apply_revealed(&mut self, window: &MainWindow, fired: &[usize]) {
        if fired.is_empty() {
            return;
        }
        window.set_revealed(ModelRc::new(VecModel::from(self.reveal.revealed_flags())));

        for group in counter_groups(fired) {
            self.start_counters(window, group);
        }
    }

    fn start_counters(&mut self, window: &MainWindow, group: StatGroup) {
        let stats = self.content.counters_for(group.section());
        let tick_interval = self.config.animation.tick_interval();
        debug!("Starting {} count-up(s) for {:?}", stats.len(), group);

        for (row, stat) in stats.iter().enumerate() {
            let target = self.config.animation.counter(&stat.counter);
            let formatter = target.clone();
            let weak = window.as_weak();
            let animator = CountUpAnimator::start(&target, tick_interval, move |value| {
                let text = SharedString::from(formatter.format(value));
                if let Err(e) = weak.upgrade_in_event_loop(move |window| {
                    set_stat_value(&group.model(&window), row, text);
                }) {
                    debug!("Count-up update dropped: {}", e);
                }
            });
            self.counters.push(animator);
        }
    }

    /// Scroll target for `section`, clamped to the scrollable range
    fn navigate(&mut self, window: &MainWindow, section: Section) -> Option<f32> {
        let bounds = section_bounds(window);
        let top = self.nav.scroll_to(section, &bounds)?;
        window.set_nav_links(nav_links_model(self.nav.active()));

        let max_scroll = (window.get_content_height() - window.get_viewport_height()).max(0.0);
        Some(top.min(max_scroll))
    }

    fn select_tab(&mut self, window: &MainWindow, index: i32) {
        let Some(tab) = usize::try_from(index).ok().and_then(ProjectTab::from_index) else {
            warn!("Ignoring unknown project tab {}", index);
            return;
        };
        self.active_tab = tab;
        window.set_active_tab(index);
        window.set_projects(projects_model(&self.content, tab));
    }

    fn project_link(&self, index: i32) -> Option<String> {
        let project = usize::try_from(index)
            .ok()
            .and_then(|i| self.content.projects_in(self.active_tab).nth(i))?;
        let link = project.resolved_link(&self.config.contact.site_url);
        if link.is_none() {
            warn!(
                "Project '{}' links to {} but no site URL is configured",
                project.title, project.link
            );
        }
        link
    }
}

/// Count-up rows to start for the sections revealed by one reveal pass
fn counter_groups(fired: &[usize]) -> Vec<StatGroup> {
    fired
        .iter()
        .filter_map(|&index| Section::from_index(index))
        .filter_map(StatGroup::for_section)
        .collect()
}

/// Owns the main window and the state behind it
pub struct GuiController {
    window: MainWindow,
    state: Rc<RefCell<PageState>>,
    form: Arc<Mutex<LeadFormController>>,
}

impl GuiController {
    /// Build the window, fill it with `content` and wire every callback
    pub fn new(config: AppConfig, content: SiteContent, sink: Arc<dyn LeadSink>) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;

        let form = Arc::new(Mutex::new(LeadFormController::new(&config.form, sink)));
        populate_content(&window, &content, &config);
        window
            .global::<RevealStyle>()
            .set_offset(config.animation.reveal_offset_px);
        restore_window_state(&window, &config.window_state);

        let state = Rc::new(RefCell::new(PageState::new(config, content)));
        {
            let mut page = state.borrow_mut();
            window.set_revealed(ModelRc::new(VecModel::from(page.reveal.revealed_flags())));
            if !page.config.animation.reveal_enabled {
                info!("Reveal animations disabled; showing all sections");
                let all = page.reveal.reveal_all();
                page.apply_revealed(&window, &all);
            }
        }
        sync_form_status(&window, &form.lock());

        let controller = Self {
            window,
            state,
            form,
        };
        controller.wire_navigation();
        controller.wire_links();
        controller.wire_form();
        controller.schedule_initial_reveal();

        Ok(controller)
    }

    /// Run the event loop until the window closes; returns the final window geometry
    pub fn run(self) -> Result<WindowState> {
        self.window.run().context("Slint event loop failed")?;

        let window_state = capture_window_state(&self.window);

        // Stop outstanding count-up timers before the window goes away
        self.state.borrow_mut().counters.clear();
        Ok(window_state)
    }

    fn wire_navigation(&self) {
        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_page_scrolled(move |scroll_y, viewport_height| {
            if let Some(window) = weak.upgrade() {
                state
                    .borrow_mut()
                    .on_scroll(&window, scroll_y, viewport_height);
            }
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_navigate(move |anchor| {
            let Some(window) = weak.upgrade() else {
                return;
            };
            let Some(section) = Section::from_anchor(&anchor) else {
                warn!("Unknown section anchor '{}'", anchor);
                return;
            };
            let target = state.borrow_mut().navigate(&window, section);
            window.set_menu_open(false);
            if let Some(top) = target {
                debug!("Scrolling to {:?} at {:.0}px", section, top);
                window.set_viewport_y(-top);
            }
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_toggle_menu(move || {
            if let Some(window) = weak.upgrade() {
                let open = state.borrow_mut().nav.toggle_menu();
                window.set_menu_open(open);
            }
        });

        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        self.window.on_select_tab(move |index| {
            if let Some(window) = weak.upgrade() {
                state.borrow_mut().select_tab(&window, index);
            }
        });
    }

    fn wire_links(&self) {
        let state = Rc::clone(&self.state);
        self.window.on_open_project(move |index| {
            let link = state.borrow().project_link(index);
            if let Some(link) = link {
                open_or_log(&link);
            }
        });

        let state = Rc::clone(&self.state);
        self.window.on_call_us(move || {
            match tel_link(&state.borrow().config.contact.phone) {
                Some(link) => open_or_log(&link),
                None => warn!("No phone number configured"),
            }
        });

        let state = Rc::clone(&self.state);
        self.window.on_email_us(move || {
            match mailto_link(&state.borrow().config.contact.email) {
                Some(link) => open_or_log(&link),
                None => warn!("No valid contact email configured"),
            }
        });
    }

    fn wire_form(&self) {
        let weak = self.window.as_weak();
        let form = Arc::clone(&self.form);
        self.window.on_field_edited(move |name| {
            let Some(window) = weak.upgrade() else {
                return;
            };
            let Some(field) = field_from_name(&name) else {
                warn!("Edit reported for unknown field '{}'", name);
                return;
            };
            let mut controller = form.lock();
            controller.set_field(field, field_text(&window, field).as_str());
            sync_form_status(&window, &controller);
        });

        let weak = self.window.as_weak();
        let form = Arc::clone(&self.form);
        self.window.on_submit_form(move || {
            let Some(window) = weak.upgrade() else {
                return;
            };

            let submission = {
                let mut controller = form.lock();
                let outcome = controller.begin_submit();
                sync_form_status(&window, &controller);
                match outcome {
                    Ok(submission) => submission,
                    Err(SiteError::Validation(errors)) => {
                        info!("Lead form has {} invalid field(s)", errors.len());
                        return;
                    }
                    Err(e) => {
                        debug!("Submit ignored: {}", e);
                        return;
                    }
                }
            };

            spawn_delivery(&window, &form, submission);
        });
    }

    fn schedule_initial_reveal(&self) {
        let weak = self.window.as_weak();
        let state = Rc::clone(&self.state);
        slint::Timer::single_shot(INITIAL_LAYOUT_DELAY, move || {
            if let Some(window) = weak.upgrade() {
                let viewport_height = window.get_viewport_height();
                state
                    .borrow_mut()
                    .on_scroll(&window, -window.get_viewport_y(), viewport_height);
            }
        });
    }
}

/// Deliver `submission` on a worker thread and apply the outcome on the UI thread
fn spawn_delivery(
    window: &MainWindow,
    form: &Arc<Mutex<LeadFormController>>,
    submission: LeadSubmission,
) {
    let sink = form.lock().sink();
    let weak = window.as_weak();
    let worker_form = Arc::clone(form);

    let spawned = thread::Builder::new()
        .name("lead-delivery".into())
        .spawn(move || {
            let outcome = sink.deliver(&submission);
            match &outcome {
                Ok(()) => info!("Lead delivered"),
                Err(e) => warn!("Lead delivery failed: {}", e),
            }

            if let Err(e) = weak.upgrade_in_event_loop(move |window| {
                let mut controller = worker_form.lock();
                controller.finish_submit(&outcome);
                sync_form_fields(&window, &controller);
                sync_form_status(&window, &controller);
                if controller.status() == FormStatus::Success {
                    schedule_success_reset(&window, &worker_form, controller.success_reset_after());
                }
            }) {
                debug!("Delivery outcome dropped: {}", e);
            }
        });

    if let Err(e) = spawned {
        error!("Failed to spawn delivery thread: {}", e);
        let mut controller = form.lock();
        controller.finish_submit(&Err(SiteError::TransportError(Box::new(e))));
        sync_form_status(window, &controller);
    }
}

fn schedule_success_reset(
    window: &MainWindow,
    form: &Arc<Mutex<LeadFormController>>,
    after: Duration,
) {
    let weak = window.as_weak();
    let form = Arc::clone(form);
    slint::Timer::single_shot(after, move || {
        if let Some(window) = weak.upgrade() {
            let mut controller = form.lock();
            controller.acknowledge_success();
            sync_form_status(&window, &controller);
        }
    });
}

fn open_or_log(link: &str) {
    if let Err(e) = open_link(link) {
        error!("Could not open {}: {}", link, e);
    }
}

fn field_from_name(name: &str) -> Option<Field> {
    match name {
        "name" => Some(Field::Name),
        "email" => Some(Field::Email),
        "phone" => Some(Field::Phone),
        "message" => Some(Field::Message),
        _ => None,
    }
}

fn field_text(window: &MainWindow, field: Field) -> SharedString {
    match field {
        Field::Name => window.get_form_name(),
        Field::Email => window.get_form_email(),
        Field::Phone => window.get_form_phone(),
        Field::Message => window.get_form_message(),
    }
}

/// Push the controller's field values into the inputs
fn sync_form_fields(window: &MainWindow, controller: &LeadFormController) {
    let form = controller.form();
    window.set_form_name(form.name.as_str().into());
    window.set_form_email(form.email.as_str().into());
    window.set_form_phone(form.phone.as_str().into());
    window.set_form_message(form.message.as_str().into());
}

/// Push errors and status into the window without touching the inputs
fn sync_form_status(window: &MainWindow, controller: &LeadFormController) {
    let errors = controller.errors();
    let error_text = |field| SharedString::from(errors.get(field).unwrap_or_default());
    window.set_name_error(error_text(Field::Name));
    window.set_email_error(error_text(Field::Email));
    window.set_message_error(error_text(Field::Message));

    let status = controller.status();
    window.set_sending(!status.can_submit());
    window.set_status_text(status.banner().unwrap_or_default().into());
    window.set_status_ok(status == FormStatus::Success);
}

fn section_bounds(window: &MainWindow) -> Vec<Option<Rect>> {
    window
        .get_section_bounds()
        .iter()
        .map(|b| Some(Rect::new(b.top, b.height)))
        .collect()
}

fn set_stat_value(model: &ModelRc<StatItem>, row: usize, value: SharedString) {
    if let Some(mut item) = model.row_data(row) {
        item.value = value;
        model.set_row_data(row, item);
    }
}

fn nav_links_model(active: Section) -> ModelRc<NavLink> {
    let links: Vec<NavLink> = Section::nav_links()
        .into_iter()
        .map(|section| NavLink {
            label: section.label().into(),
            anchor: section.anchor().into(),
            active: section == active,
        })
        .collect();
    ModelRc::new(VecModel::from(links))
}

fn stats_model(stats: &[Stat]) -> ModelRc<StatItem> {
    let items: Vec<StatItem> = stats
        .iter()
        .map(|stat| StatItem {
            label: stat.label.as_str().into(),
            value: stat.counter.format(0).into(),
        })
        .collect();
    ModelRc::new(VecModel::from(items))
}

fn projects_model(content: &SiteContent, tab: ProjectTab) -> ModelRc<ProjectCard> {
    let cards: Vec<ProjectCard> = content
        .projects_in(tab)
        .map(|project| ProjectCard {
            title: project.title.as_str().into(),
            description: project.description.as_str().into(),
            tags: project.tags.join(" · ").into(),
        })
        .collect();
    ModelRc::new(VecModel::from(cards))
}

fn string_model<S: AsRef<str>>(items: &[S]) -> ModelRc<SharedString> {
    let items: Vec<SharedString> = items.iter().map(|s| s.as_ref().into()).collect();
    ModelRc::new(VecModel::from(items))
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn populate_content(window: &MainWindow, content: &SiteContent, config: &AppConfig) {
    window.set_brand(content.brand.as_str().into());
    window.set_tagline(content.tagline.as_str().into());
    window.set_hero_badge(content.hero_badge.as_str().into());
    window.set_hero_title(content.hero_title.as_str().into());
    window.set_hero_subtitle(content.hero_subtitle.as_str().into());
    window.set_hero_stats(stats_model(&content.hero_stats));
    window.set_stats(stats_model(&content.stats));

    let services: Vec<ServiceCard> = content
        .services
        .iter()
        .map(|service| ServiceCard {
            title: service.title.as_str().into(),
            description: service.description.as_str().into(),
        })
        .collect();
    window.set_services(ModelRc::new(VecModel::from(services)));

    let tabs: Vec<&str> = ProjectTab::ALL.iter().map(|tab| tab.label()).collect();
    window.set_project_tabs(string_model(&tabs));
    window.set_active_tab(0);
    window.set_projects(projects_model(content, ProjectTab::Web));

    let rows: Vec<TechRow> = content
        .technologies
        .chunks(TECH_ROW_LEN)
        .map(|chunk| TechRow {
            items: string_model(chunk),
        })
        .collect();
    window.set_tech_rows(ModelRc::new(VecModel::from(rows)));

    let testimonials: Vec<TestimonialCard> = content
        .testimonials
        .iter()
        .map(|t| TestimonialCard {
            name: t.name.as_str().into(),
            course: t.course.as_str().into(),
            text: t.text.as_str().into(),
            avatar: t.avatar.as_str().into(),
            stars: stars(t.rating).into(),
        })
        .collect();
    window.set_testimonials(ModelRc::new(VecModel::from(testimonials)));

    let plans: Vec<PlanCard> = content
        .plans
        .iter()
        .map(|plan| PlanCard {
            name: plan.name.as_str().into(),
            price: plan.price.as_str().into(),
            features: string_model(&plan.features),
            popular: plan.popular,
        })
        .collect();
    window.set_plans(ModelRc::new(VecModel::from(plans)));

    window.set_contact_highlights(string_model(&content.contact_highlights));
    window.set_contact_phone(config.contact.phone.as_str().into());
    window.set_contact_email(config.contact.email.as_str().into());
    window.set_nav_links(nav_links_model(Section::Home));
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Window coordinates are far below f32's exact integer range"
)]
fn restore_window_state(window: &MainWindow, state: &WindowState) {
    window
        .window()
        .set_position(slint::LogicalPosition::new(state.x as f32, state.y as f32));
    window
        .window()
        .set_size(slint::LogicalSize::new(state.width as f32, state.height as f32));
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Logical window geometry fits in i32/u32 and is rounded first"
)]
fn capture_window_state(window: &MainWindow) -> WindowState {
    let window = window.window();
    let scale = window.scale_factor();
    let position = window.position().to_logical(scale);
    let size = window.size().to_logical(scale);

    WindowState {
        x: position.x.round() as i32,
        y: position.y.round() as i32,
        width: size.width.round().max(1.0) as u32,
        height: size.height.round().max(1.0) as u32,
    }
}
