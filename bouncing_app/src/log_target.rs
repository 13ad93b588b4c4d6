//! Render target that writes draw commands to the log

use quad_engine::prelude::*;

/// Logs every draw command at `trace` and a per-frame count at `debug`
/// every `report_every` frames.
pub struct LogTarget {
    frame: u64,
    drawn: usize,
    report_every: u64,
}

impl Default for LogTarget {
    fn default() -> Self {
        Self { frame: 0, drawn: 0, report_every: 60 }
    }
}

impl RenderTarget for LogTarget {
    fn begin_frame(&mut self, _clear_color: Color) {
        self.drawn = 0;
    }

    fn draw(&mut self, command: &DrawCommand) {
        let [r, g, b, _] = command.color.to_array();
        let origin = command.origin();
        log::trace!(
            "frame {} draw {} at ({:.1}, {:.1}) size {} rgb({:.2}, {:.2}, {:.2})",
            self.frame,
            command.entity,
            origin.x,
            origin.y,
            command.size,
            r,
            g,
            b
        );
        self.drawn += 1;
    }

    fn end_frame(&mut self) {
        if self.frame % self.report_every == 0 {
            log::debug!("frame {}: {} squares drawn", self.frame, self.drawn);
        }
        self.frame += 1;
    }
}
