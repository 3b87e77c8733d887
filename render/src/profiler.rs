use crate::action::*;

use std::fmt::{Debug};
use std::time::{Duration, Instant};
use std::hash::{Hash};
use std::collections::{VecDeque, HashMap};

const ROLLING_WINDOW_SIZE: usize = 30;

/// Profiler that groups frame time by the type of render action
pub type RenderActionProfiler = RenderProfiler<RenderActionType>;

///
/// Time accumulated for a profiled action
///
struct ActionTime {
    count:  usize,
    time:   Duration,
}

///
/// Used for profiling frame-by-frame actions
///
pub struct RenderProfiler<TAction>
where
    TAction:    Copy + Debug + Hash + Eq,
{
    /// The time that the profiler was created
    start_time: Instant,

    /// The number of frames that have been renderered
    frame_count: usize,

    /// The number of triangles rasterised for the frame
    frame_primitive_count: usize,

    /// The number of pages that were drawn in the frame
    frame_page_count: usize,

    /// If a frame is being rendered, when it was started
    frame_start: Option<Instant>,

    /// The time that the last frame finished
    frame_finish: Option<Instant>,

    /// The action that's currently running, and when it started
    current_action: Option<(TAction, Instant)>,

    /// The counts and accumulated time for the actions in the current frame
    frame_action_times: HashMap<TAction, ActionTime>,

    /// Monitors the times for the last few frames (start, end times)
    rolling_frame_times: VecDeque<(Instant, Instant)>,
}

impl<TAction> RenderProfiler<TAction>
where
    TAction:    Copy + Debug + Hash + Eq,
{
    ///
    /// Creates a new render profiler
    ///
    pub fn new() -> RenderProfiler<TAction> {
        RenderProfiler {
            start_time:             Instant::now(),
            frame_count:            0,
            frame_primitive_count:  0,
            frame_page_count:       0,
            frame_start:            None,
            frame_finish:           None,
            current_action:         None,
            frame_action_times:     HashMap::new(),
            rolling_frame_times:    VecDeque::new(),
        }
    }

    ///
    /// Called when a new frame is rendered
    ///
    #[inline]
    pub fn start_frame(&mut self) {
        self.frame_start            = Some(Instant::now());
        self.current_action         = None;
        self.frame_primitive_count  = 0;
        self.frame_page_count       = 0;

        self.frame_action_times.clear();
    }

    ///
    /// An action has started (this finishes any action that's already running)
    ///
    #[inline]
    pub fn start_action(&mut self, action: TAction) {
        self.finish_action();
        self.current_action = Some((action, Instant::now()));
    }

    ///
    /// The running action has finished (it is counted and its time accumulated)
    ///
    #[inline]
    pub fn finish_action(&mut self) {
        if let Some((action, start_time)) = self.current_action.take() {
            let duration    = start_time.elapsed();
            let time        = self.frame_action_times
                .entry(action)
                .or_insert_with(|| ActionTime { count: 0, time: Duration::default() });

            time.count  += 1;
            time.time   += duration;
        }
    }

    ///
    /// Indicate that a number of triangles have been rasterised this frame
    ///
    #[inline]
    pub fn count_primitives(&mut self, num_primitives: usize) {
        self.frame_primitive_count += num_primitives;
    }

    ///
    /// Indicate that a page's glyphs were drawn this frame
    ///
    #[inline]
    pub fn count_page(&mut self) {
        self.frame_page_count += 1;
    }

    ///
    /// Finishes the current frame and moves to the next one
    ///
    pub fn finish_frame(&mut self) {
        self.finish_action();

        let now             = Instant::now();
        self.frame_finish   = Some(now);
        self.frame_count    += 1;

        if let Some(start) = self.frame_start {
            self.rolling_frame_times.push_back((start, now));
            while self.rolling_frame_times.len() > ROLLING_WINDOW_SIZE {
                self.rolling_frame_times.pop_front();
            }
        }
    }

    ///
    /// Generates a summary for the last frame (called after finish_frame)
    ///
    pub fn summary_string(&self) -> String {
        let total_time      = self.frame_finish.map(|frame_finish| frame_finish.duration_since(self.start_time)).unwrap_or_default();
        let total_seconds   = total_time.as_secs_f64();

        let rolling_start   = self.rolling_frame_times.front().map(|(start_time, _end_time)| *start_time);
        let rolling_end     = self.rolling_frame_times.back().map(|(_start_time, end_time)| *end_time);
        let rolling_time    = if let (Some(start), Some(end)) = (rolling_start, rolling_end) { end.duration_since(start) } else { Duration::default() };
        let rolling_fps     = if rolling_time.as_micros() > 0 { (self.rolling_frame_times.len() as f64) / rolling_time.as_secs_f64() } else { 0.0 };

        let frame_time      = if let (Some(start), Some(end)) = (self.frame_start, self.frame_finish) { end.duration_since(start) } else { Duration::default() };
        let frame_millis    = (frame_time.as_micros() as f64) / 1_000.0;

        let header = format!("==== FRAME {} @ {:.3}s === {:.1} fps === {:.2} ms === {} pages === {} triangles ===",
            self.frame_count,
            total_seconds,
            rolling_fps,
            frame_millis,
            self.frame_page_count,
            self.frame_primitive_count);

        // Slowest actions first
        let mut all_actions     = self.frame_action_times.iter().collect::<Vec<_>>();
        all_actions.sort_by_key(|(_act, time)| time.time);
        all_actions.reverse();

        let slowest_micros      = all_actions.first().map(|(_, slowest)| slowest.time.as_micros() as f64).unwrap_or(0.0).max(1.0);
        let action_times        = all_actions.into_iter()
            .map(|(action, time)| {
                let micros      = time.time.as_micros() as f64;
                let graph       = "#".repeat((32.0*(micros/slowest_micros)) as usize);

                format!("   {: <24?} | {: >10}us | {: >6} | {}", action, time.time.as_micros(), time.count, graph)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("\n\n{}\n\n{}\n", header, action_times)
    }

    ///
    /// Writes the summary for the last frame to the log
    ///
    pub fn log_summary(&self) {
        log::debug!("{}", self.summary_string());
    }
}

impl RenderProfiler<RenderActionType> {
    ///
    /// Starts timing a render action
    ///
    #[inline]
    pub fn start_render_action(&mut self, action: &RenderAction) {
        self.start_action(RenderActionType::from(action));
    }
}
