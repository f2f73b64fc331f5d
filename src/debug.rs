/*
 * Debug Information Module
 *
 * Frame and tick statistics shown by the debug overlay and the control panel:
 * - FPS and frame time
 * - Ticks run in the last frame, and ticks dropped to keep up
 * - Collisions and reflections of the last frame, plus running totals
 */

use std::time::Duration;

use crate::physics::TickReport;

#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: usize,
    pub dropped_ticks: u64,
    pub frame_report: TickReport,
    pub total_ticks: u64,
    pub total_collisions: u64,
}

impl DebugInfo {
    pub fn begin_frame(&mut self) {
        self.ticks_per_frame = 0;
        self.frame_report = TickReport::default();
    }

    pub fn record_tick(&mut self, report: TickReport) {
        self.ticks_per_frame += 1;
        self.total_ticks += 1;
        self.total_collisions += report.collisions as u64;
        self.frame_report.collisions += report.collisions;
        self.frame_report.reflections += report.reflections;
    }

    pub fn lines(&self, flock_len: usize) -> [String; 6] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Birds: {}", flock_len),
            format!("Ticks this frame: {}", self.ticks_per_frame),
            format!(
                "Collisions: {} (total {})",
                self.frame_report.collisions, self.total_collisions
            ),
            format!("Reflections: {}", self.frame_report.reflections),
        ]
    }
}
