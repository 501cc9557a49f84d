//! Render sinks receive overlay commands and issue the actual draw calls.

use glam::Vec2;

use crate::command::RenderCommand;
use crate::label::label_backdrop;

/// Pipeline state a pass needs while its commands are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub blend: bool,
    pub line_smooth: bool,
    pub depth_write: bool,
    pub depth_test: bool,
    pub point_size: f32,
    pub line_width: f32,
}

impl DrawState {
    /// Host defaults, restored after every pass.
    pub const DEFAULT: Self = Self {
        blend: false,
        line_smooth: false,
        depth_write: true,
        depth_test: true,
        point_size: 1.0,
        line_width: 1.0,
    };

    /// State for world-space rings and connectors.
    #[must_use]
    pub fn world(show_in_front: bool) -> Self {
        Self {
            blend: true,
            line_smooth: true,
            depth_write: false,
            depth_test: !show_in_front,
            point_size: 5.0,
            line_width: 1.0,
        }
    }

    /// State for screen-space labels.
    #[must_use]
    pub fn screen() -> Self {
        Self {
            blend: true,
            ..Self::DEFAULT
        }
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Receives render commands for one pass at a time.
///
/// Every `begin` is followed by exactly one `end`; use [`DrawScope`] to
/// get that pairing for free.
pub trait RenderSink {
    /// Applies the pass state before the first command.
    fn begin(&mut self, state: &DrawState);

    /// Draws one command.
    fn submit(&mut self, command: &RenderCommand);

    /// Restores the given state after the last command.
    fn end(&mut self, restore: &DrawState);

    /// Measures rendered text in pixels.
    ///
    /// The default assumes a fixed advance of half the font size per glyph.
    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * font_size * 0.5, font_size)
    }
}

/// Scoped pass on a sink; restores [`DrawState::DEFAULT`] when dropped.
pub struct DrawScope<'a, S: RenderSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: RenderSink + ?Sized> DrawScope<'a, S> {
    /// Begins a pass with the given state.
    pub fn begin(sink: &'a mut S, state: &DrawState) -> Self {
        sink.begin(state);
        Self { sink }
    }

    pub fn submit(&mut self, command: &RenderCommand) {
        self.sink.submit(command);
    }

    pub fn submit_all<'c>(&mut self, commands: impl IntoIterator<Item = &'c RenderCommand>) {
        for command in commands {
            self.sink.submit(command);
        }
    }
}

impl<S: RenderSink + ?Sized> Drop for DrawScope<'_, S> {
    fn drop(&mut self) {
        self.sink.end(&DrawState::DEFAULT);
    }
}

/// Something that happened on a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Begin(DrawState),
    Command(RenderCommand),
    /// Backdrop quad computed for a submitted label.
    Backdrop([Vec2; 4]),
    End(DrawState),
}

/// A sink that records everything it receives.
///
/// Useful for replaying a frame into another backend and for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Recorded commands in submission order.
    pub fn commands(&self) -> impl Iterator<Item = &RenderCommand> {
        self.events.iter().filter_map(|e| match e {
            SinkEvent::Command(c) => Some(c),
            _ => None,
        })
    }

    /// True if every `begin` was matched by an `end`, without nesting.
    pub fn is_balanced(&self) -> bool {
        let mut open = false;
        for event in &self.events {
            match event {
                SinkEvent::Begin(_) if open => return false,
                SinkEvent::Begin(_) => open = true,
                SinkEvent::End(_) if !open => return false,
                SinkEvent::End(_) => open = false,
                SinkEvent::Command(_) | SinkEvent::Backdrop(_) if !open => return false,
                SinkEvent::Command(_) | SinkEvent::Backdrop(_) => {}
            }
        }
        !open
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RenderSink for RecordingSink {
    fn begin(&mut self, state: &DrawState) {
        self.events.push(SinkEvent::Begin(*state));
    }

    fn submit(&mut self, command: &RenderCommand) {
        if let RenderCommand::Label {
            anchor,
            text,
            font_size,
            ..
        } = command
        {
            let size = self.measure_text(text, *font_size);
            self.events.push(SinkEvent::Backdrop(label_backdrop(*anchor, size)));
        }
        self.events.push(SinkEvent::Command(command.clone()));
    }

    fn end(&mut self, restore: &DrawState) {
        self.events.push(SinkEvent::End(*restore));
    }
}
