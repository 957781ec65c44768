//! Application state and core logic for the case-study presentation.
//!
//! This module contains the `App` struct which owns the tab shell, the
//! mounted approval widget and the diagram containers, and routes every
//! incoming event to them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Settings;
use crate::content::{
    DIAGRAM_CURRENT_STATE, DIAGRAM_CURRENT_STATE_ID, DIAGRAM_FUTURE_STATE, DIAGRAM_FUTURE_STATE_ID,
};
use crate::diagram::{DiagramRenderer, TextDiagramEngine};
use crate::event::AppEvent;
use crate::models::NavigationTab;
use crate::prototype::{PrototypeSession, TimerConfig};
use crate::shell::Shell;

/// Lines moved per PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

/// Application state
pub struct App {
    pub shell: Shell,
    /// Widget instance, present only while its tab is shown
    pub prototype: Option<PrototypeSession>,
    pub diagrams: DiagramRenderer,
    pub timer_config: TimerConfig,
    // Vertical scroll offset per tab, indexed by NavigationTab::index
    scroll: [u16; NavigationTab::ALL.len()],
    pub should_quit: bool,
    next_session_id: u64,
    tx: UnboundedSender<AppEvent>,
}

impl App {
    /// Build the app and mount the start tab. Must run inside a tokio runtime.
    pub fn new(settings: &Settings, tx: UnboundedSender<AppEvent>) -> Self {
        let diagrams = DiagramRenderer::new(
            TextDiagramEngine::new(),
            &settings.diagram_options(),
            tx.clone(),
        );
        let start = settings.start_tab();
        let mut app = Self {
            shell: Shell::new(start),
            prototype: None,
            diagrams,
            timer_config: settings.timer_config(),
            scroll: [0; NavigationTab::ALL.len()],
            should_quit: false,
            next_session_id: 1,
            tx,
        };
        app.select_tab(start);
        app
    }

    pub fn active_tab(&self) -> NavigationTab {
        self.shell.active()
    }

    /// Switch sections, remounting whatever the new section hosts
    pub fn select_tab(&mut self, tab: NavigationTab) {
        tracing::debug!("Selecting tab {}", tab);
        self.shell.select(tab);
        self.scroll[tab.index()] = 0;

        // Dropping the session cancels its timer
        self.prototype = None;
        if tab.mounts_prototype() {
            let id = self.next_session_id;
            self.next_session_id += 1;
            self.prototype = Some(PrototypeSession::mount(
                id,
                self.timer_config,
                self.tx.clone(),
            ));
        }

        if tab.shows_diagrams() {
            self.diagrams
                .request(DIAGRAM_CURRENT_STATE_ID, DIAGRAM_CURRENT_STATE);
            self.diagrams
                .request(DIAGRAM_FUTURE_STATE_ID, DIAGRAM_FUTURE_STATE);
        }
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll[self.active_tab().index()]
    }

    fn scroll_by(&mut self, delta: i32) {
        let slot = &mut self.scroll[self.shell.active().index()];
        *slot = (*slot as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize => {}
            AppEvent::Tick { session_id } => match self.prototype.as_mut() {
                Some(session) if session.id() == session_id => {
                    session.tick();
                }
                _ => tracing::trace!("Ignoring tick for unmounted session {}", session_id),
            },
            AppEvent::DiagramRendered {
                container,
                token,
                outcome,
            } => {
                self.diagrams.complete(&container, token, outcome);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The widget sees keys first while its tab is shown
        if let Some(session) = self.prototype.as_mut() {
            if let Some(action) = session.action_for_key(key.code) {
                session.dispatch(action);
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(tab) = NavigationTab::from_shortcut(c) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Tab | KeyCode::Right => {
                self.shell.next();
                self.select_tab(self.shell.active());
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.shell.previous();
                self.select_tab(self.shell.active());
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(PAGE_SCROLL as i32),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SCROLL as i32)),
            KeyCode::Home => self.scroll[self.active_tab().index()] = 0,
            _ => {}
        }
    }
}
