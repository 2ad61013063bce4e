//! Mail: the contact form. Tab walks the fields, Enter on the send
//! button pushes the message through the contact endpoint.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::api;
use crate::components::{Component, ComponentContext};
use crate::contact::{ContactMessage, ContactSubmitter};
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Message,
    Send,
}

impl Field {
    const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Message, Field::Send];

    fn next(self) -> Field {
        let i = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(i + 1) % Field::ALL.len()]
    }

    fn prev(self) -> Field {
        let i = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Idle,
    Sent(u64),
    Failed(String),
}

pub struct MailApp {
    name: String,
    email: String,
    message: String,
    active: Field,
    status: Status,
    submitter: Box<dyn ContactSubmitter>,
}

impl MailApp {
    pub fn new(submitter: Box<dyn ContactSubmitter>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            active: Field::Name,
            status: Status::Idle,
            submitter,
        }
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.active {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::Send => None,
        }
    }

    fn submit(&mut self) {
        let payload = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(err) => {
                self.status = Status::Failed(err.to_string());
                return;
            }
        };
        let response = api::handle_request(api::CONTACT_PATH, &body, self.submitter.as_mut());
        if response.status == 201 {
            let id = serde_json::from_str::<crate::contact::SubmittedMessage>(&response.body)
                .map(|record| record.id)
                .unwrap_or_default();
            self.status = Status::Sent(id);
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.active = Field::Name;
        } else {
            let reason = serde_json::from_str::<serde_json::Value>(&response.body)
                .ok()
                .and_then(|v| v["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| "submission failed".to_string());
            self.status = Status::Failed(reason);
        }
    }

    fn render_field(
        &self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        row: u16,
        label: &str,
        value: &str,
        field: Field,
        ctx: &ComponentContext,
    ) {
        let y = area.y + row;
        if y >= area.y + area.height {
            return;
        }
        let active = self.active == field && ctx.focused();
        let label_style = Style::default().fg(theme::muted_fg());
        frame.set_string(area.x + 1, y, label, label_style);
        let value_style = if active {
            Style::default()
                .fg(theme::title_focused_fg())
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme::dock_fg())
        };
        let cursor = if active { "█" } else { "" };
        frame.set_string(area.x + 10, y, &format!("{value}{cursor}"), value_style);
    }
}

impl Component for MailApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width < 14 || area.height < 6 {
            return;
        }
        frame.set_string(
            area.x + 1,
            area.y,
            "To:",
            Style::default().fg(theme::muted_fg()),
        );
        frame.set_string(
            area.x + 10,
            area.y,
            "hello@jordanhale.dev",
            Style::default().fg(theme::accent()),
        );
        self.render_field(frame, area, 2, "From:", &self.name, Field::Name, ctx);
        self.render_field(frame, area, 3, "Email:", &self.email, Field::Email, ctx);
        self.render_field(frame, area, 5, "Message:", &self.message, Field::Message, ctx);

        let send_y = area.y + area.height.saturating_sub(2);
        let send_active = self.active == Field::Send && ctx.focused();
        let send_style = if send_active {
            Style::default()
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme::dock_fg())
        };
        frame.set_string(area.x + 1, send_y, "[ Send ➤ ]", send_style);

        let status_y = area.y + area.height - 1;
        match &self.status {
            Status::Idle => frame.set_string(
                area.x + 1,
                status_y,
                "Tab to move · Enter on Send to submit",
                Style::default().fg(theme::muted_fg()),
            ),
            Status::Sent(id) => frame.set_string(
                area.x + 1,
                status_y,
                &format!("Message #{id} sent. Thanks for reaching out!"),
                Style::default().fg(theme::success_fg()),
            ),
            Status::Failed(reason) => frame.set_string(
                area.x + 1,
                status_y,
                reason,
                Style::default().fg(theme::error_fg()),
            ),
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();
                true
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
                true
            }
            KeyCode::Char(c) => match self.active_buffer() {
                Some(buffer) => {
                    buffer.push(c);
                    true
                }
                None => false,
            },
            KeyCode::Backspace => match self.active_buffer() {
                Some(buffer) => {
                    buffer.pop();
                    true
                }
                None => false,
            },
            KeyCode::Enter => {
                if self.active == Field::Send {
                    self.submit();
                } else {
                    self.active = self.active.next();
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactError, SubmittedMessage};
    use chrono::Utc;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct SharedSubmitter {
        accepted: Rc<RefCell<Vec<ContactMessage>>>,
    }

    impl ContactSubmitter for SharedSubmitter {
        fn submit(&mut self, message: &ContactMessage) -> Result<SubmittedMessage, ContactError> {
            message.validate()?;
            self.accepted.borrow_mut().push(message.clone());
            Ok(SubmittedMessage {
                id: self.accepted.borrow().len() as u64,
                name: message.name.clone(),
                email: message.email.clone(),
                message: message.message.clone(),
                created_at: Utc::now(),
            })
        }
    }

    fn mail_with_sink() -> (MailApp, Rc<RefCell<Vec<ContactMessage>>>) {
        let accepted = Rc::new(RefCell::new(Vec::new()));
        let submitter = SharedSubmitter {
            accepted: Rc::clone(&accepted),
        };
        (MailApp::new(Box::new(submitter)), accepted)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(mail: &mut MailApp, text: &str) {
        let ctx = ComponentContext::default();
        for c in text.chars() {
            mail.handle_event(&key(KeyCode::Char(c)), &ctx);
        }
    }

    #[test]
    fn tab_cycles_fields_and_wraps() {
        let (mut mail, _) = mail_with_sink();
        let ctx = ComponentContext::default();
        assert_eq!(mail.active, Field::Name);
        for _ in 0..4 {
            mail.handle_event(&key(KeyCode::Tab), &ctx);
        }
        assert_eq!(mail.active, Field::Name);
        mail.handle_event(&key(KeyCode::BackTab), &ctx);
        assert_eq!(mail.active, Field::Send);
    }

    #[test]
    fn successful_submission_clears_the_form() {
        let (mut mail, accepted) = mail_with_sink();
        let ctx = ComponentContext::default();
        type_text(&mut mail, "Ada");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        type_text(&mut mail, "ada@example.com");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        type_text(&mut mail, "Love the desktop");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        mail.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(accepted.borrow().len(), 1);
        assert_eq!(mail.status, Status::Sent(1));
        assert!(mail.name.is_empty());
        assert!(mail.email.is_empty());
        assert!(mail.message.is_empty());
    }

    #[test]
    fn invalid_email_keeps_the_form_and_reports() {
        let (mut mail, accepted) = mail_with_sink();
        let ctx = ComponentContext::default();
        type_text(&mut mail, "Ada");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        type_text(&mut mail, "not-an-email");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        type_text(&mut mail, "hi");
        mail.handle_event(&key(KeyCode::Tab), &ctx);
        mail.handle_event(&key(KeyCode::Enter), &ctx);
        assert!(accepted.borrow().is_empty());
        assert!(matches!(&mail.status, Status::Failed(reason) if reason.contains("email")));
        assert_eq!(mail.name, "Ada");
    }

    #[test]
    fn enter_on_a_text_field_advances_instead_of_submitting() {
        let (mut mail, accepted) = mail_with_sink();
        let ctx = ComponentContext::default();
        mail.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(mail.active, Field::Email);
        assert!(accepted.borrow().is_empty());
    }
}
