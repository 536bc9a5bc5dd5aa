//! Playback position authority.
//!
//! Owns the single play-head and arbitrates between the media clock,
//! pointer scrubbing, and bounded cut previews. Commands are queued and
//! applied at the start of the next tick; when any command is applied, the
//! autonomous advance for that tick is skipped so a user action is never
//! overwritten by a stale clock reading.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::cuts::{CutId, CutInterval, CutSet};
use crate::media::{MediaEvent, MediaSource};
use crate::player::config::PlaybackConfig;
use crate::player::playback::mapping::{clamp_time, pointer_to_time, PointerOffset};
use crate::player::playback::skip::{self, SkipDecision};
use crate::player::scheduler::TickScheduler;
use crate::player::state::{Command, PlaybackMode, TimelineSnapshot, TimelineState};

/// A forced jump past an accepted cut.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipJump {
    pub cut: CutId,
    pub from: f64,
    pub to: f64,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// At least one queued command was applied (autonomous advance skipped)
    pub command_applied: bool,
    /// Skip jump performed this tick
    pub jump: Option<SkipJump>,
    pub mode: PlaybackMode,
    pub position: f64,
}

/// The only writer of [`TimelineState`].
pub struct PlaybackAuthority<M, S> {
    media: M,
    scheduler: S,
    config: PlaybackConfig,
    state: TimelineState,
    pending: VecDeque<Command>,
    active_cut: Option<CutId>,
    preview_cut: Option<CutId>,
}

impl<M: MediaSource, S: TickScheduler> PlaybackAuthority<M, S> {
    pub fn new(media: M, mut scheduler: S, config: PlaybackConfig) -> Self {
        let mut state = TimelineState::new();
        if let Some(duration) = media.duration() {
            state.set_duration(duration);
        }
        // First tick drains any pending media notifications
        scheduler.request_tick();

        Self {
            media,
            scheduler,
            config,
            state,
            pending: VecDeque::new(),
            active_cut: None,
            preview_cut: None,
        }
    }

    // === Read-only surface ===

    pub fn current_position(&self) -> f64 {
        self.state.position()
    }

    pub fn current_mode(&self) -> PlaybackMode {
        self.state.mode()
    }

    pub fn active_cut_id(&self) -> Option<&CutId> {
        self.active_cut.as_ref()
    }

    pub fn duration(&self) -> Option<f64> {
        self.state.duration()
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            position: self.state.position(),
            duration: self.state.duration(),
            mode: self.state.mode(),
            preview_bound: self.state.preview_bound(),
            active_cut: self.active_cut.clone(),
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Access to the media source for the driver that feeds its clock.
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn has_pending_commands(&self) -> bool {
        !self.pending.is_empty()
    }

    // === Command surface ===

    pub fn request_play(&mut self) {
        self.enqueue(Command::Play);
    }

    pub fn request_pause(&mut self) {
        self.enqueue(Command::Pause);
    }

    /// Toggle between playing and paused based on the current mode.
    pub fn request_toggle(&mut self) {
        if self.state.mode().is_advancing() {
            self.request_pause();
        } else {
            self.request_play();
        }
    }

    pub fn request_scrub_start(&mut self, pointer: PointerOffset) {
        self.enqueue(Command::ScrubStart(pointer));
    }

    pub fn request_scrub_move(&mut self, pointer: PointerOffset) {
        self.enqueue(Command::ScrubMove(pointer));
    }

    pub fn request_scrub_end(&mut self) {
        self.enqueue(Command::ScrubEnd);
    }

    pub fn request_preview(&mut self, cut: CutId) {
        self.enqueue(Command::Preview(cut));
    }

    /// Queue a command for the next tick.
    pub fn enqueue(&mut self, command: Command) {
        self.pending.push_back(command);
        self.scheduler.request_tick();
    }

    // === Tick ===

    /// Run one scheduling step against the current cut list.
    pub fn tick(&mut self, cuts: &CutSet) -> TickReport {
        let play_state = self.drain_media_events();
        let mut report = TickReport::default();

        while let Some(command) = self.pending.pop_front() {
            self.apply(command, cuts);
            report.command_applied = true;
        }

        if !report.command_applied {
            if let Some(playing) = play_state {
                self.apply_play_state(playing);
            }
            match self.state.mode() {
                PlaybackMode::Playing => report.jump = self.advance_playing(cuts),
                PlaybackMode::PreviewingSegment => self.advance_preview(cuts),
                PlaybackMode::Idle | PlaybackMode::Scrubbing => {}
            }
        }

        self.reschedule();
        report.mode = self.state.mode();
        report.position = self.state.position();
        report
    }

    /// Stop driving playback: drop queued commands and the pending tick.
    pub fn shutdown(&mut self) {
        self.pending.clear();
        self.scheduler.cancel_tick();
        if self.state.mode().is_advancing() {
            if let Err(err) = self.media.pause() {
                warn!("pause on shutdown failed: {}", err);
            }
        }
        self.state.stop();
        self.state.was_playing_before_scrub = false;
        self.preview_cut = None;
    }

    /// Apply metadata immediately; return the latest play-state notification.
    fn drain_media_events(&mut self) -> Option<bool> {
        let mut play_state = None;
        while let Some(event) = self.media.poll_event() {
            match event {
                MediaEvent::MetadataReady(duration) => {
                    if self.state.set_duration(duration) {
                        debug!(duration, "media metadata ready");
                    }
                }
                MediaEvent::PlayStateChanged(playing) => play_state = Some(playing),
            }
        }
        play_state
    }

    /// React to the media starting or stopping on its own.
    fn apply_play_state(&mut self, playing: bool) {
        match (playing, self.state.mode()) {
            (false, PlaybackMode::Playing | PlaybackMode::PreviewingSegment) => {
                debug!("media stopped, entering idle");
                self.mirror_media_position();
                self.state.stop();
                self.preview_cut = None;
            }
            (true, PlaybackMode::Idle) if self.state.duration().is_some() => {
                debug!("media started externally, entering playing");
                self.state.mode = PlaybackMode::Playing;
            }
            _ => {}
        }
    }

    fn reschedule(&mut self) {
        if self.state.mode().is_advancing() || !self.pending.is_empty() {
            self.scheduler.request_tick();
        } else {
            self.scheduler.cancel_tick();
        }
    }

    fn mirror_media_position(&mut self) {
        let position = self.media.position();
        self.state.set_position(position);
    }

    fn at_end(&self, position: f64, limit: f64) -> bool {
        position >= limit - self.config.end_epsilon_secs
    }

    // === Commands ===

    fn apply(&mut self, command: Command, cuts: &CutSet) {
        let Some(duration) = self.state.duration() else {
            debug!(?command, "command rejected: duration unknown");
            return;
        };

        match command {
            Command::Play => self.apply_play(duration),
            Command::Pause => self.apply_pause(),
            Command::ScrubStart(pointer) => self.apply_scrub_start(pointer, duration, cuts),
            Command::ScrubMove(pointer) => {
                if self.state.mode() == PlaybackMode::Scrubbing {
                    self.scrub_to(pointer, duration, cuts);
                } else {
                    debug!("scrub move ignored outside scrubbing");
                }
            }
            Command::ScrubEnd => self.apply_scrub_end(),
            Command::Preview(id) => self.apply_preview(id, duration, cuts),
        }
    }

    fn apply_play(&mut self, duration: f64) {
        match self.state.mode() {
            PlaybackMode::Playing => {}
            PlaybackMode::Scrubbing => {
                // Resume once the scrub is released
                self.state.was_playing_before_scrub = true;
            }
            PlaybackMode::PreviewingSegment => {
                if let Err(err) = self.media.play() {
                    warn!("play failed: {}", err);
                    return;
                }
                self.state.preview_bound = None;
                self.preview_cut = None;
                self.state.mode = PlaybackMode::Playing;
            }
            PlaybackMode::Idle => {
                if self.at_end(self.state.position(), duration) {
                    if let Err(err) = self.media.seek(0.0) {
                        warn!("rewind before play failed: {}", err);
                        return;
                    }
                    self.state.set_position(0.0);
                }
                if let Err(err) = self.media.play() {
                    warn!("play failed: {}", err);
                    return;
                }
                debug!(position = self.state.position(), "playing");
                self.state.mode = PlaybackMode::Playing;
            }
        }
    }

    fn apply_pause(&mut self) {
        match self.state.mode() {
            PlaybackMode::Playing | PlaybackMode::PreviewingSegment => {
                if let Err(err) = self.media.pause() {
                    warn!("pause failed: {}", err);
                    return;
                }
                self.mirror_media_position();
                self.state.stop();
                self.preview_cut = None;
            }
            PlaybackMode::Scrubbing => self.state.was_playing_before_scrub = false,
            PlaybackMode::Idle => {}
        }
    }

    fn apply_scrub_start(&mut self, pointer: PointerOffset, duration: f64, cuts: &CutSet) {
        let mode = self.state.mode();
        if mode != PlaybackMode::Scrubbing {
            if !self.media.is_paused() {
                if let Err(err) = self.media.pause() {
                    warn!("pause for scrub failed: {}", err);
                    return;
                }
            }
            self.state.was_playing_before_scrub = mode == PlaybackMode::Playing;
            self.state.preview_bound = None;
            self.preview_cut = None;
            self.state.mode = PlaybackMode::Scrubbing;
            debug!(from = %mode, "scrub started");
        }
        self.scrub_to(pointer, duration, cuts);
    }

    fn scrub_to(&mut self, pointer: PointerOffset, duration: f64, cuts: &CutSet) {
        let target = pointer_to_time(pointer, duration);
        self.state.set_position(target);
        if let Err(err) = self.media.seek(target) {
            warn!("scrub seek to {:.3}s failed: {}", target, err);
        }
        self.active_cut = skip::upcoming(target, cuts.as_slice(), self.config.lookahead_secs)
            .map(|c| c.id.clone());
    }

    fn apply_scrub_end(&mut self) {
        if self.state.mode() != PlaybackMode::Scrubbing {
            debug!("scrub end ignored outside scrubbing");
            return;
        }
        let resume = std::mem::take(&mut self.state.was_playing_before_scrub);
        if resume {
            match self.media.play() {
                Ok(()) => {
                    self.state.mode = PlaybackMode::Playing;
                    debug!(position = self.state.position(), "scrub released, playing");
                    return;
                }
                Err(err) => warn!("resume after scrub failed: {}", err),
            }
        }
        self.state.stop();
    }

    fn apply_preview(&mut self, id: CutId, duration: f64, cuts: &CutSet) {
        let Some(cut) = cuts.get(&id) else {
            debug!(cut = %id, "preview rejected: unknown cut");
            return;
        };
        if cut.start > duration {
            debug!(cut = %id, start = cut.start, duration, "preview rejected: cut starts past end");
            return;
        }

        let (start, bound) =
            skip::preview_window(cut, duration, self.config.preview_padding_secs);
        if let Err(err) = self.media.seek(start) {
            warn!("preview seek failed: {}", err);
            return;
        }
        self.state.set_position(start);
        if let Err(err) = self.media.play() {
            warn!("preview play failed: {}", err);
            return;
        }

        debug!(cut = %id, start, bound, "previewing cut");
        self.state.mode = PlaybackMode::PreviewingSegment;
        self.state.preview_bound = Some(bound);
        self.state.was_playing_before_scrub = false;
        self.active_cut = Some(id.clone());
        self.preview_cut = Some(id);
    }

    // === Autonomous advance ===

    fn advance_playing(&mut self, cuts: &CutSet) -> Option<SkipJump> {
        let duration = self.state.duration()?;
        let observed = clamp_time(self.media.position(), duration);
        self.state.set_position(observed);

        let mut jump = None;
        match skip::evaluate(observed, cuts) {
            SkipDecision::Jump { cut, target } => {
                let target = clamp_time(target, duration);
                match self.media.seek(target) {
                    Ok(()) => {
                        debug!(cut = %cut, from = observed, to = target, "skipped accepted cut");
                        self.state.set_position(target);
                        jump = Some(SkipJump {
                            cut: cut.clone(),
                            from: observed,
                            to: target,
                        });
                    }
                    // Retried on the next tick
                    Err(err) => warn!("skip seek to {:.3}s failed: {}", target, err),
                }
                self.active_cut = Some(cut);
            }
            SkipDecision::Continue => {
                self.active_cut =
                    skip::upcoming(observed, cuts.as_slice(), self.config.lookahead_secs)
                        .map(|c| c.id.clone());
            }
        }

        if self.at_end(self.state.position(), duration) {
            if !self.media.is_paused() {
                if let Err(err) = self.media.pause() {
                    warn!("pause at end failed: {}", err);
                }
            }
            debug!("reached end of content");
            self.state.stop();
        }
        jump
    }

    fn advance_preview(&mut self, cuts: &CutSet) {
        let (Some(duration), Some(bound)) = (self.state.duration(), self.state.preview_bound())
        else {
            self.state.stop();
            return;
        };
        let observed = clamp_time(self.media.position(), duration);
        self.state.set_position(observed);

        if self.at_end(observed, bound) {
            if !self.media.is_paused() {
                if let Err(err) = self.media.pause() {
                    warn!("pause at preview bound failed: {}", err);
                }
            }
            // The clock overshoots by up to one frame; land on the bound
            if let Err(err) = self.media.seek(bound) {
                warn!("seek to preview bound failed: {}", err);
            }
            self.state.set_position(bound);
            debug!(bound, "preview finished");
            self.state.stop();
            self.preview_cut = None;
            return;
        }

        self.active_cut = self.preview_highlight(observed, cuts);
    }

    /// The previewed cut when near the position, else any nearby cut.
    fn preview_highlight(&self, position: f64, cuts: &CutSet) -> Option<CutId> {
        let padding = self.config.preview_highlight_padding_secs;
        let is_near = |c: &&CutInterval| skip::near(position, c, padding);

        self.preview_cut
            .as_ref()
            .and_then(|id| cuts.get(id))
            .filter(is_near)
            .or_else(|| cuts.iter().find(is_near))
            .map(|c| c.id.clone())
    }
}
