//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │  ↓               │
//  │  InputProcessor          │    │  InputSystem     │
//  │   └─ Converts Winit      │    │  ↓               │
//  │   ↓                      │    │  Game            │
//  │  InputBuffer             │    │  ↓               │
//  │   ├─ discrete: Vec<>     │    │  ChannelHud      │
//  │   └─ continuous: Set<>   │    └──────────────────┘
//  │   ↓                      │         ↑       │
//  │  RedrawRequested         │         │       │
//  │   ├─ flush input ────────┼─────────┘       │
//  │   └─ apply HUD ◄─────────┼─────────────────┘
//  └──────────────────────────┘  PlatformEvent / HudFrame
// ```
//
// The HUD is rendered into the window title. When the logic thread
// hangs up its HUD sender (game reached `End`), the window closes.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::error::PlatformError;
use crate::core::platform_bridge::{HudFrame, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

const WINDOW_TITLE: &str = "Endurance Runner";

//=== HudPoll =============================================================

/// Result of draining the HUD channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HudPoll {
    Open,
    CoreGone,
}

//=== Platform ============================================================

/// Window manager, input aggregator and HUD presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). The window
/// is created lazily in `resumed()`.
pub(crate) struct Platform {
    window: Option<Window>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    hud_receiver: Receiver<HudFrame>,
    input_processor: InputProcessor,

    /// Last title pushed to the window, to skip redundant OS calls.
    title: String,

    /// Cursor is shown while the menu overlay is up, hidden in play.
    menu_visible: bool,
    cursor_visible: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, hud_receiver: Receiver<HudFrame>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            hud_receiver,
            input_processor: InputProcessor::new(),
            title: WINDOW_TITLE.to_string(),
            menu_visible: false,
            cursor_visible: true,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the game ends.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the logic thread. Empty buffers are not sent.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Drains pending HUD frames; only the newest one is shown.
    fn drain_hud(&mut self) -> HudPoll {
        loop {
            match self.hud_receiver.try_recv() {
                Ok(frame) => {
                    if frame.menu_visible != self.menu_visible {
                        debug!(target: "platform::hud", "Menu visible: {}", frame.menu_visible);
                    }
                    self.title = frame.status_line();
                    self.menu_visible = frame.menu_visible;
                }
                Err(TryRecvError::Empty) => return HudPoll::Open,
                Err(TryRecvError::Disconnected) => return HudPoll::CoreGone,
            }
        }
    }

    /// Flushes input gathered so far, then tells the logic thread that
    /// no key releases will follow for keys currently held.
    fn notify_focus_lost(&mut self) {
        self.flush_input_buffer();
        if self.event_sender.send(PlatformEvent::FocusLost).is_err() {
            warn!(target: "platform::input", "Channel disconnected, focus loss not delivered");
        }
    }

    fn present_hud(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        if window.title() != self.title {
            window.set_title(&self.title);
        }
        if self.cursor_visible != self.menu_visible {
            window.set_cursor_visible(self.menu_visible);
            self.cursor_visible = self.menu_visible;
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1024, 640));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(
                        target: "platform::input",
                        "Key ignored ({} filtered so far)",
                        self.input_processor.filtered()
                    );
                }
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform::input", "Focus lost");
                self.notify_focus_lost();
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then show the newest HUD.
                self.flush_input_buffer();

                if self.drain_hud() == HudPoll::CoreGone {
                    info!(target: "platform", "Game finished, closing window");
                    event_loop.exit();
                    return;
                }
                self.present_hud();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
