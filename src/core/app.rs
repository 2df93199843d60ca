// Application State
// Page-level state management and lifecycle

use crate::carousel::{Carousel, PollObserver};
use crate::config::PageContent;
use crate::constants::{OBSERVE_THRESHOLDS, STATUS_TICKS};
use crate::forms::{to_payload, ConsultationForm, ListPropertyForm, SubmissionLog, SubmissionSink};

/// The page section currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero banner with the list-property card
    Overview,
    /// Why sell with us
    WhyUs,
    /// The selling process carousel
    Process,
    /// Track record and the consultation form
    Consultation,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::WhyUs,
        Section::Process,
        Section::Consultation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::WhyUs => "Why Us",
            Section::Process => "Our Process",
            Section::Consultation => "Consultation",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Transient status line shown after a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub ticks_left: u32,
}

/// Main application state
pub struct App {
    pub content: PageContent,
    pub section: Section,
    pub carousel: Carousel,
    pub list_property: ListPropertyForm,
    pub consultation: ConsultationForm,
    pub submissions: Box<dyn SubmissionSink>,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: PageContent) -> Self {
        let carousel = Carousel::new(content.process.points.clone());
        Self {
            content,
            section: Section::Overview,
            carousel,
            list_property: ListPropertyForm::new(),
            consultation: ConsultationForm::new(),
            submissions: Box::new(SubmissionLog::default()),
            status: None,
            should_quit: false,
        }
    }

    /// Switch sections. The carousel's observer subscription is scoped to the
    /// Process section being on screen: entering mounts, leaving unmounts.
    pub fn go_to_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        if self.section == Section::Process {
            self.carousel.unmount();
        }
        self.section = section;
        if section == Section::Process {
            self.mount_carousel();
        }
        self.status = None;
    }

    pub fn next_section(&mut self) {
        self.go_to_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.go_to_section(self.section.prev());
    }

    fn mount_carousel(&mut self) {
        if self.content.ui.observer_enabled {
            self.carousel
                .mount(Box::new(PollObserver::new(&OBSERVE_THRESHOLDS)));
        } else {
            self.carousel.mount_degraded();
        }
    }

    /// True when key presses should be routed into a focused text field
    pub fn is_editing(&self) -> bool {
        match self.section {
            Section::Overview => self.list_property.text_focused(),
            Section::Consultation => self.consultation.text_focused(),
            _ => false,
        }
    }

    /// Validate and submit whichever form the current section shows
    pub fn submit_focused_form(&mut self) {
        match self.section {
            Section::Overview => {
                if let Some(data) = self.list_property.submit() {
                    self.submissions.submit("list_property", to_payload(&data));
                    self.list_property.clear();
                    self.set_status("Thank you! A consultant will call you shortly.", false);
                } else {
                    self.set_status("Please fix the highlighted fields.", true);
                }
            }
            Section::Consultation => {
                if let Some(data) = self.consultation.submit() {
                    self.submissions.submit("consultation", to_payload(&data));
                    self.consultation.clear();
                    self.set_status("Thank you! Your consultation is booked.", false);
                } else {
                    self.set_status("Please fix the highlighted fields.", true);
                }
            }
            _ => {}
        }
    }

    pub fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
            ticks_left: STATUS_TICKS,
        });
    }

    /// Per-tick housekeeping: advance the carousel and age the status line
    pub fn tick(&mut self) {
        if self.section == Section::Process {
            self.carousel.tick();
        }
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    /// Request application quit, releasing the carousel subscription first
    pub fn quit(&mut self) {
        if self.carousel.is_mounted() {
            self.carousel.unmount();
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageContent;
    use serde_json::Value;

    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSink {
        submissions: Rc<RefCell<Vec<(String, Value)>>>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&mut self, form: &str, payload: Value) {
            self.submissions
                .borrow_mut()
                .push((form.to_string(), payload));
        }
    }

    fn test_app() -> App {
        App::new(PageContent::built_in().unwrap())
    }

    #[test]
    fn test_observer_scoped_to_process_section() {
        let mut app = test_app();
        assert!(!app.carousel.is_mounted());
        app.go_to_section(Section::Process);
        assert!(app.carousel.is_mounted());
        assert!(app.carousel.has_observer());
        app.next_section();
        assert!(!app.carousel.is_mounted());
        assert!(!app.carousel.has_observer());
    }

    #[test]
    fn test_degraded_mount_when_observer_disabled() {
        let mut content = PageContent::built_in().unwrap();
        content.ui.observer_enabled = false;
        let mut app = App::new(content);
        app.go_to_section(Section::Process);
        assert!(app.carousel.is_mounted());
        assert!(!app.carousel.has_observer());
    }

    #[test]
    fn test_quit_releases_subscription() {
        let mut app = test_app();
        app.go_to_section(Section::Process);
        app.quit();
        assert!(app.should_quit);
        assert!(!app.carousel.is_mounted());
    }

    #[test]
    fn test_section_cycling_wraps() {
        let mut app = test_app();
        app.prev_section();
        assert_eq!(app.section, Section::Consultation);
        app.next_section();
        assert_eq!(app.section, Section::Overview);
    }

    #[test]
    fn test_submit_valid_form_reaches_sink_once() {
        let recorded = Rc::new(RefCell::new(Vec::new()));
        let mut app = test_app();
        app.submissions = Box::new(RecordingSink {
            submissions: Rc::clone(&recorded),
        });
        app.list_property.name.value = "Jane Smith".to_string();
        app.list_property.email.value = "jane@example.com".to_string();
        app.list_property.mobile.value = "+971501234567".to_string();
        app.list_property.property_type.selected = Some(0);
        app.list_property.bedrooms.selected = Some(1);
        app.submit_focused_form();

        let recorded = recorded.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "list_property");
        assert_eq!(recorded[0].1["name"], "Jane Smith");
        // Fields are cleared after a successful submission
        assert!(app.list_property.name.value.is_empty());
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_invalid_submit_sets_error_status() {
        let mut app = test_app();
        app.submit_focused_form();
        let status = app.status.expect("status should be set");
        assert!(status.is_error);
    }

    #[test]
    fn test_status_expires_after_ticks() {
        let mut app = test_app();
        app.set_status("hello", false);
        for _ in 0..crate::constants::STATUS_TICKS {
            app.tick();
        }
        assert!(app.status.is_none());
    }
}
