//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::application::{SendMessageUseCase, SendRequest};
use crate::domain::entities::{Channel, Identity};
use crate::domain::errors::SendError;
use crate::domain::ports::{RandomSource, RelayPort};
use crate::domain::wizard::{SelectionEffect, WizardState};
use crate::presentation::events::EventHandler;
use crate::presentation::ui::{ComposeAction, ComposeScreen, PickerAction, PickerScreen};
use crate::presentation::widgets::{BurstSession, ConfettiOverlay, FooterBar};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    SendFinished(Result<(), SendError>),
}

enum CurrentScreen {
    PickSender(PickerScreen),
    PickRecipient(PickerScreen),
    Compose(ComposeScreen),
}

pub struct App {
    wizard: WizardState,
    channel: Channel,
    screen: CurrentScreen,
    send_use_case: SendMessageUseCase,
    rng: Box<dyn RandomSource>,
    bursts: Vec<BurstSession>,
    animations_enabled: bool,
    last_frame_area: Rect,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(
        relay: Arc<dyn RelayPort>,
        channel: Channel,
        rng: Box<dyn RandomSource>,
        animations_enabled: bool,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            wizard: WizardState::default(),
            channel,
            screen: CurrentScreen::PickSender(PickerScreen::pick_sender()),
            send_use_case: SendMessageUseCase::new(relay),
            rng,
            bursts: Vec::new(),
            animations_enabled,
            last_frame_area: Rect::default(),
            action_tx,
            action_rx,
            exiting: false,
        }
    }

    /// Runs the UI until the user quits.
    ///
    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if !self.bursts.is_empty() {
                        for burst in &mut self.bursts {
                            burst.tick();
                        }
                        self.bursts.retain(|burst| !burst.is_finished());
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event {
                        self.handle_key(key);
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Teardown: outstanding sessions stop with the loop that drives them.
        for burst in &mut self.bursts {
            burst.cancel();
        }
        self.bursts.clear();

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.last_frame_area = frame.area();

        let vertical = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [main_area, footer_area] = vertical.areas(frame.area());

        match &self.screen {
            CurrentScreen::PickSender(screen) | CurrentScreen::PickRecipient(screen) => {
                frame.render_widget(screen, main_area);
            }
            CurrentScreen::Compose(screen) => {
                frame.render_widget(screen, main_area);
            }
        }

        frame.render_widget(FooterBar::new(self.footer_hints()), footer_area);
        frame.render_widget(ConfettiOverlay::new(&self.bursts), frame.area());
    }

    const fn footer_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.screen {
            CurrentScreen::PickSender(_) | CurrentScreen::PickRecipient(_) => {
                &[("Highlight", "←/→"), ("Pick", "1-3/Enter"), ("Quit", "q")]
            }
            CurrentScreen::Compose(_) => &[("Send", "Enter"), ("Quit", "Esc")],
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Letters belong to the draft on the compose screen, so plain 'q'
        // only quits from the pickers.
        let quits = match self.screen {
            CurrentScreen::Compose(_) => EventHandler::is_hard_quit_event(&key),
            _ => EventHandler::is_quit_event(&key),
        };
        if quits {
            self.exiting = true;
            return;
        }

        match &mut self.screen {
            CurrentScreen::PickSender(screen) | CurrentScreen::PickRecipient(screen) => {
                if let PickerAction::Choose(identity) = screen.handle_key(key) {
                    self.handle_selection(identity);
                }
            }
            CurrentScreen::Compose(screen) => {
                if let ComposeAction::Submit(draft) = screen.handle_key(key) {
                    self.submit(draft);
                }
            }
        }
    }

    fn handle_selection(&mut self, identity: Identity) {
        match self.wizard.select(identity) {
            SelectionEffect::SenderChosen => {
                debug!(glyph = %identity.glyph(), "Sender chosen");
                self.screen = CurrentScreen::PickRecipient(PickerScreen::pick_recipient());
            }
            SelectionEffect::RecipientChosen { channel, greeting } => {
                debug!(glyph = %identity.glyph(), "Recipient chosen");
                if let Some(channel) = channel {
                    info!(channel = %channel, "Recipient re-targets the flow");
                    self.channel = channel;
                }

                // Both selections exist in the Composing variant.
                let (Some(sender), Some(recipient)) =
                    (self.wizard.sender(), self.wizard.recipient())
                else {
                    return;
                };
                self.screen =
                    CurrentScreen::Compose(ComposeScreen::new(sender, recipient, greeting));
            }
            SelectionEffect::Ignored => {}
        }
    }

    fn submit(&mut self, draft: String) {
        let (Some(sender), Some(recipient)) = (self.wizard.sender(), self.wizard.recipient())
        else {
            return;
        };

        if let CurrentScreen::Compose(ref mut screen) = self.screen {
            screen.set_sending();
        }

        let request = SendRequest::new(sender, recipient, self.channel.clone(), draft);
        let use_case = self.send_use_case.clone();
        let tx = self.action_tx.clone();

        debug!(channel = %request.channel, "Submitting message");

        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            let _ = tx.send(Action::SendFinished(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SendFinished(Ok(())) => {
                info!("Send succeeded");
                if let CurrentScreen::Compose(ref mut screen) = self.screen {
                    screen.set_success();
                }
                if self.animations_enabled {
                    self.ignite_burst();
                }
            }
            Action::SendFinished(Err(e)) => {
                error!(error = %e, "Send failed");
                if let CurrentScreen::Compose(ref mut screen) = self.screen {
                    screen.set_error(e.to_string());
                }
            }
        }
    }

    fn ignite_burst(&mut self) {
        debug!(bursts = self.bursts.len() + 1, "Igniting particle burst");
        self.bursts
            .push(BurstSession::ignite(self.last_frame_area, self.rng.as_mut()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use crate::domain::ports::mocks::{FixedRandomSource, MockRelay};
    use crate::presentation::ui::SubmissionStatus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_app() -> App {
        let mut app = App::new(
            Arc::new(MockRelay::accepting()),
            Channel::default(),
            Box::new(FixedRandomSource::new(vec![0.5])),
            true,
        );
        app.last_frame_area = Rect::new(0, 0, 80, 24);
        app
    }

    #[tokio::test]
    async fn test_app_starts_awaiting_sender() {
        let app = make_app();
        assert_eq!(app.wizard, WizardState::AwaitingSender);
        assert!(matches!(app.screen, CurrentScreen::PickSender(_)));
    }

    #[tokio::test]
    async fn test_two_selections_reach_compose() {
        let mut app = make_app();

        app.handle_key(key(KeyCode::Char('2')));
        assert!(matches!(app.screen, CurrentScreen::PickRecipient(_)));

        app.handle_key(key(KeyCode::Char('3')));
        assert!(matches!(app.screen, CurrentScreen::Compose(_)));
        assert_eq!(app.wizard.sender(), Some(Identity::thumbs_up()));
        assert_eq!(app.wizard.recipient(), Some(Identity::cyclist()));

        // Ordinary recipient: channel and draft untouched.
        assert_eq!(app.channel, Channel::default());
        if let CurrentScreen::Compose(ref screen) = app.screen {
            assert_eq!(screen.draft(), "");
        }
    }

    #[tokio::test]
    async fn test_duck_recipient_retargets_and_prefills() {
        let mut app = make_app();
        app.channel = Channel::new("something-else");

        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('1')));

        assert_eq!(app.channel, Channel::new("zxrd"));
        if let CurrentScreen::Compose(ref screen) = app.screen {
            assert_eq!(screen.draft(), "Hello Ducky");
        } else {
            panic!("expected compose screen");
        }
    }

    #[tokio::test]
    async fn test_success_clears_draft_and_ignites_burst() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Enter)); // spawns the send task

        app.handle_action(Action::SendFinished(Ok(())));

        assert_eq!(app.bursts.len(), 1);
        if let CurrentScreen::Compose(ref screen) = app.screen {
            assert_eq!(screen.draft(), "");
            assert_eq!(*screen.status(), SubmissionStatus::Success);
        }
    }

    #[tokio::test]
    async fn test_failure_keeps_state_and_skips_burst() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Enter));

        app.handle_action(Action::SendFinished(Err(SendError::http(500))));

        assert!(app.bursts.is_empty());
        assert_eq!(app.wizard.sender(), Some(Identity::duck()));
        assert_eq!(app.wizard.recipient(), Some(Identity::thumbs_up()));
        if let CurrentScreen::Compose(ref screen) = app.screen {
            assert_eq!(screen.draft(), "h");
            assert!(
                matches!(screen.status(), SubmissionStatus::Error(m) if m.contains("500"))
            );
        }
    }

    #[tokio::test]
    async fn test_animations_disabled_skips_burst() {
        let mut app = App::new(
            Arc::new(MockRelay::accepting()),
            Channel::default(),
            Box::new(FixedRandomSource::new(vec![0.5])),
            false,
        );
        app.last_frame_area = Rect::new(0, 0, 80, 24);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_action(Action::SendFinished(Ok(())));
        assert!(app.bursts.is_empty());
    }

    #[tokio::test]
    async fn test_second_burst_layers_on_the_first() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_action(Action::SendFinished(Ok(())));
        app.handle_action(Action::SendFinished(Ok(())));

        assert_eq!(app.bursts.len(), 2);
    }

    #[tokio::test]
    async fn test_q_quits_pickers_but_not_compose() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.exiting);
        if let CurrentScreen::Compose(ref screen) = app.screen {
            assert_eq!(screen.draft(), "q");
        }

        app.handle_key(key(KeyCode::Esc));
        assert!(app.exiting);
    }
}
