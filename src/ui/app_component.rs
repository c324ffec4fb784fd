use crate::controller::{AppController, AppState, Section};
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, GradesPanelComponent, StatusBar, StudentDetailComponent, StudentsTableComponent,
    SubjectsTableComponent, TabBar,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{layout::Rect, Frame};

pub struct AppComponent {
    // Component composition
    students: StudentsTableComponent,
    subjects: SubjectsTableComponent,
    grades: GradesPanelComponent,
    detail: StudentDetailComponent,
    dialog: DialogComponent,

    // Application state and handlers
    controller: AppController,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(controller: AppController, logger: Logger) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            students: StudentsTableComponent::new(),
            subjects: SubjectsTableComponent::new(),
            grades: GradesPanelComponent::new(),
            detail: StudentDetailComponent::new(),
            dialog,
            controller,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.controller.state
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    /// Initial data load on startup
    pub async fn init(&mut self) {
        self.logger.log("AppComponent: initial load".to_string());
        self.controller.init().await;
        self.sync_component_data();
    }

    /// Push the controller state into every component
    fn sync_component_data(&mut self) {
        let date_format = self.controller.date_format().to_string();
        let state = &self.controller.state;

        self.students.update_data(&state.students, &date_format);
        self.subjects.update_data(&state.subjects);
        self.grades.update_data(state, &date_format);
        self.detail
            .update_data(state.detail.as_ref(), &state.subjects, &date_format);
        self.dialog.update_data(
            state.modal.clone(),
            state.confirmation.clone(),
            state.notification().cloned(),
        );
    }

    /// Component that receives keys when no overlay is open
    fn active_component(&mut self) -> &mut dyn Component {
        if self.controller.state.detail.is_some() {
            return &mut self.detail;
        }
        match self.controller.state.current_section {
            Section::Students => &mut self.students,
            Section::Subjects => &mut self.subjects,
            Section::Grades => &mut self.grades,
        }
    }

    fn status_hints(&self) -> &'static str {
        if self.controller.state.detail.is_some() {
            return "Enter: enroll/unenroll • u: unenroll • s: summary • e: edit • Esc: back • ?: help";
        }
        match self.controller.state.current_section {
            Section::Students => "a: add • e: edit • d: delete • Enter: details • 1-3/Tab: sections • ?: help • q: quit",
            Section::Subjects => "a: add • e: edit • d: delete • 1-3/Tab: sections • ?: help • q: quit",
            Section::Grades => "h/l: focus • j/k: change • a: add • e: edit • d: delete • ?: help • q: quit",
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('1') => Action::ShowSection(Section::Students),
            KeyCode::Char('2') => Action::ShowSection(Section::Subjects),
            KeyCode::Char('3') => Action::ShowSection(Section::Grades),
            KeyCode::Tab => Action::NextSection,
            KeyCode::BackTab => Action::PreviousSection,
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    /// Route a key: overlays first, then the active component, then global keys
    pub fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        let action = self.active_component().handle_key_events(key);
        if action != Action::None {
            return action;
        }
        self.handle_global_key(key)
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) {
        if action != Action::None {
            self.logger.log(format!("Action: {:?}", action));
        }
        let controller = &mut self.controller;
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowSection(section) => controller.show_section(section).await,
            Action::NextSection => {
                let section = controller.state.current_section.next();
                controller.show_section(section).await;
            }
            Action::PreviousSection => {
                let section = controller.state.current_section.previous();
                controller.show_section(section).await;
            }
            Action::Refresh => match controller.state.detail.as_ref().map(|detail| detail.student_id) {
                Some(student_id) => controller.view_student_details(student_id).await,
                None => {
                    let section = controller.state.current_section;
                    controller.show_section(section).await;
                }
            },
            Action::ViewStudentDetails(id) => controller.view_student_details(id).await,
            Action::BackToStudents => controller.back_to_students().await,
            Action::LoadGradeSummary => controller.load_grade_summary().await,

            Action::NewStudent => controller.show_student_form(None),
            Action::EditStudent(id) => controller.edit_student(id).await,
            Action::DeleteStudent(id) => controller.delete_student(id),
            Action::NewSubject => controller.show_subject_form(None),
            Action::EditSubject(id) => controller.edit_subject(id).await,
            Action::DeleteSubject(id) => controller.delete_subject(id),
            Action::NewGrade => controller.show_grade_form(None).await,
            Action::EditGrade(id) => controller.edit_grade(id).await,
            Action::DeleteGrade(id) => controller.delete_grade(id),

            Action::EnrollStudent { student_id, subject_id } => controller.handle_enroll_student(student_id, subject_id),
            Action::UnenrollStudent {
                enrollment_id,
                student_id,
            } => controller.handle_unenroll_student(enrollment_id, student_id),

            Action::SetStudentFilter(id) => controller.set_student_filter(id).await,
            Action::SetSubjectFilter(id) => controller.set_subject_filter(id).await,

            Action::FormInput(c) => controller.form_input(c),
            Action::FormBackspace => controller.form_backspace(),
            Action::FormNextField => controller.form_next_field(),
            Action::FormPreviousField => controller.form_previous_field(),
            Action::FormCycleOption { forward } => controller.form_cycle_option(forward),
            Action::SubmitForm => controller.submit_modal().await,
            Action::CloseModal => controller.close_modal(),

            Action::ResolveConfirmation(accepted) => controller.resolve_confirmation(accepted).await,
            Action::DismissNotification => controller.dismiss_notification(),

            // Consumed by the dialog component
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
        self.sync_component_data();
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => {
                // Wheel scrolling moves the selection like j/k
                let code = match mouse.kind {
                    MouseEventKind::ScrollDown => Some(KeyCode::Down),
                    MouseEventKind::ScrollUp => Some(KeyCode::Up),
                    _ => None,
                };
                match code {
                    Some(code) => self.route_key(KeyEvent::new(code, KeyModifiers::NONE)),
                    None => Action::None,
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.dialog.update(action);
        self.handle_app_action(action).await;
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [tab_area, main_area, status_area] = LayoutManager::main_layout(rect);

        TabBar::render(f, tab_area, self.controller.state.active_tab());
        self.active_component().render(f, main_area);
        StatusBar::render(f, status_area, self.status_hints());

        // Overlays on top of everything
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
