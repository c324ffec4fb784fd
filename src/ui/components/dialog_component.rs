//! Modal dialog component.
//!
//! Hosts every overlay drawn above the sections:
//!
//! # Dialog Types
//! - **Form** - the shared Student / Subject / Grade modal
//! - **Confirmation** - accept/decline before a destructive call
//! - **Notification** - success or error message, dismissed by any key
//! - **Help / Logs** - scrollable informational panels
//!
//! The form, confirmation and notification live in the controller state and
//! are pushed here by [`DialogComponent::update_data`]. Help and logs are
//! purely UI-side.

use crate::controller::forms::FormState;
use crate::controller::{Notification, PendingConfirmation};
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::ui::components::dialogs::{form_dialog, scroll_behavior::ScrollState, system_dialogs};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub form: Option<FormState>,
    pub confirmation: Option<PendingConfirmation>,
    pub notification: Option<Notification>,
    pub scroll: ScrollState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            form: None,
            confirmation: None,
            notification: None,
            scroll: ScrollState::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn update_data(
        &mut self,
        form: Option<FormState>,
        confirmation: Option<PendingConfirmation>,
        notification: Option<Notification>,
    ) {
        self.form = form;
        self.confirmation = confirmation;
        self.notification = notification;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some() || self.confirmation.is_some() || self.notification.is_some() || self.form.is_some()
    }

    fn focused_is_select(&self) -> bool {
        self.form
            .as_ref()
            .and_then(FormState::focused_field)
            .map(|field| field.is_select())
            .unwrap_or(false)
    }

    fn handle_info_dialog_key(&mut self, dialog_type: DialogType, key: KeyEvent) -> Action {
        let closes = match dialog_type {
            DialogType::Help => matches!(key.code, KeyCode::Esc | KeyCode::Char('?')),
            DialogType::Logs => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
        };
        if closes {
            return Action::HideDialog;
        }
        self.scroll.handle_key(key);
        Action::None
    }

    fn handle_form_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseModal,
            KeyCode::Enter => Action::SubmitForm,
            KeyCode::Tab | KeyCode::Down => Action::FormNextField,
            KeyCode::BackTab | KeyCode::Up => Action::FormPreviousField,
            KeyCode::Left if self.focused_is_select() => Action::FormCycleOption { forward: false },
            KeyCode::Right | KeyCode::Char(' ') if self.focused_is_select() => {
                Action::FormCycleOption { forward: true }
            }
            KeyCode::Backspace => Action::FormBackspace,
            KeyCode::Char(c) => Action::FormInput(c),
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Innermost overlay first
        if let Some(dialog_type) = self.dialog_type {
            return self.handle_info_dialog_key(dialog_type, key);
        }
        if self.confirmation.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Action::ResolveConfirmation(true),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Action::ResolveConfirmation(false),
                _ => Action::None,
            };
        }
        if self.notification.is_some() {
            return Action::DismissNotification;
        }
        if self.form.is_some() {
            return self.handle_form_key(key);
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll.reset();
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll.reset();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(form) = &self.form {
            form_dialog::render_form_dialog(f, rect, form);
        }
        if let Some(notification) = &self.notification {
            system_dialogs::render_notification_dialog(f, rect, notification);
        }
        if let Some(confirmation) = &self.confirmation {
            system_dialogs::render_confirmation_dialog(f, rect, confirmation.message);
        }
        match self.dialog_type {
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
            None => {}
        }
    }
}
