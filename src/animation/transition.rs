//! Spring-driven transitions between two visual frames

use std::fmt::Write;
use std::time::Duration;

use super::SpringConfig;
use crate::helpers::css_number;

/// Samples per keyframe block (every 5 %)
const KEYFRAME_STEPS: u32 = 20;

/// Stagger between consecutive entrance animations
const STAGGER_MS: u64 = 100;

/// Visual state of an animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    /// Vertical offset in pixels
    pub offset_y: f64,
}

impl Frame {
    pub const fn new(opacity: f64, offset_y: f64) -> Self {
        Self { opacity, offset_y }
    }

    /// Interpolate towards `to`; `t` may leave 0..=1 for overshooting springs
    pub fn lerp(&self, to: &Frame, t: f64) -> Frame {
        Frame {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

/// A one-shot transition from `from` to `to`, started `delay` after mount
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub name: &'static str,
    pub from: Frame,
    pub to: Frame,
    pub config: SpringConfig,
    pub delay: Duration,
}

impl Transition {
    /// Card entrance: fade in while rising 30px, staggered by `index`
    pub fn entrance(index: u32) -> Self {
        Self {
            name: "folio-entrance",
            from: Frame::new(0.0, 30.0),
            to: Frame::new(1.0, 0.0),
            config: SpringConfig::DEFAULT,
            delay: Duration::from_millis(STAGGER_MS * u64::from(index)),
        }
    }

    /// Slow opacity-only fade used for whole content sections
    pub fn fade_in() -> Self {
        Self {
            name: "folio-fade-in",
            from: Frame::new(0.0, 0.0),
            to: Frame::new(1.0, 0.0),
            config: SpringConfig::SLOW,
            delay: Duration::ZERO,
        }
    }

    /// Frame shown `elapsed` after mount
    pub fn sample(&self, elapsed: Duration) -> Frame {
        match elapsed.checked_sub(self.delay) {
            Some(running) => self.from.lerp(&self.to, self.config.progress_at(running)),
            None => self.from,
        }
    }

    /// Running time, excluding the delay
    pub fn duration(&self) -> Duration {
        self.config.settle_duration()
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay.as_millis() as u64
    }

    /// CSS declarations for a frame of this transition
    pub fn frame_css(&self, frame: &Frame) -> String {
        let mut css = format!("opacity: {}", css_number(frame.opacity));
        if self.moves() {
            css.push_str(&format!(
                "; transform: translate3d(0, {}px, 0)",
                css_number(frame.offset_y)
            ));
        }
        css
    }

    /// `@keyframes` block sampled from the spring curve
    pub fn keyframes(&self) -> String {
        let duration = self.duration();
        let mut css = format!("@keyframes {} {{\n", self.name);

        for i in 0..=KEYFRAME_STEPS {
            let t = duration.mul_f64(f64::from(i) / f64::from(KEYFRAME_STEPS));
            let frame = if i == KEYFRAME_STEPS {
                self.to
            } else {
                self.from.lerp(&self.to, self.config.progress_at(t))
            };
            let _ = writeln!(
                css,
                "  {}% {{ {} }}",
                i * 100 / KEYFRAME_STEPS,
                self.frame_css(&frame)
            );
        }

        css.push_str("}\n");
        css
    }

    /// Inline style that runs the keyframes after the delay.
    ///
    /// The start frame is applied during the delay (`both` fill mode).
    pub fn inline_style(&self) -> String {
        format!(
            "animation: {} {}ms linear {}ms both",
            self.name,
            self.duration().as_millis(),
            self.delay_ms()
        )
    }

    fn moves(&self) -> bool {
        self.from.offset_y != self.to.offset_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_delay_is_staggered() {
        assert_eq!(Transition::entrance(0).delay_ms(), 0);
        assert_eq!(Transition::entrance(2).delay_ms(), 200);
        for d in 0..10 {
            assert!(Transition::entrance(d).delay < Transition::entrance(d + 1).delay);
        }
    }

    #[test]
    fn test_sample_before_and_after() {
        let t = Transition::entrance(3);
        assert_eq!(t.sample(Duration::from_millis(0)), Frame::new(0.0, 30.0));
        assert_eq!(t.sample(Duration::from_millis(299)), Frame::new(0.0, 30.0));
        assert_eq!(t.sample(Duration::from_secs(5)), Frame::new(1.0, 0.0));

        let mid = t.sample(Duration::from_millis(400));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < 30.0);
    }

    #[test]
    fn test_keyframes() {
        let css = Transition::entrance(0).keyframes();
        assert!(css.starts_with("@keyframes folio-entrance {"));
        assert!(css.contains("0% { opacity: 0; transform: translate3d(0, 30px, 0) }"));
        assert!(css.contains("100% { opacity: 1; transform: translate3d(0, 0px, 0) }"));
        assert_eq!(css.matches('%').count(), 21);
    }

    #[test]
    fn test_fade_in_is_opacity_only() {
        let fade = Transition::fade_in();
        assert!(!fade.keyframes().contains("transform"));
        assert!(fade.duration() > Transition::entrance(0).duration());
    }

    #[test]
    fn test_inline_style() {
        let style = Transition::entrance(2).inline_style();
        assert!(style.starts_with("animation: folio-entrance "));
        assert!(style.ends_with("ms linear 200ms both"));
    }
}
