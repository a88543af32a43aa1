use log::debug;

use super::session::NarrationSession;
use super::speech::SpeechSynth;
use crate::error::AssistError;
use crate::locate::{locate, BoxMetrics, TextMeasure};
use crate::resolve::{resolve_unit, ResolveMode, SpeakableUnit};

/// What the page event hit, as reported by the DOM collaborator.
///
/// Page-wide narration must not swallow clicks meant for real controls, so
/// interactive targets and explicit opt-outs are ignored.
#[derive(Debug, Clone, Default)]
pub struct PageTarget {
    /// Lowercase element name, e.g. "p", "button".
    pub tag: String,
    pub has_href: bool,
    pub content_editable: bool,
    /// Element (or an ancestor) opted out of narration.
    pub narration_opt_out: bool,
}

impl PageTarget {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "input" | "textarea" | "select" | "button" | "label"
        ) || (self.tag == "a" && self.has_href)
            || self.content_editable
            || self.narration_opt_out
    }
}

/// Routes each interaction type to the right resolver strategy and hands the
/// result to the narration session.
pub struct Orchestrator<S: SpeechSynth> {
    narration: NarrationSession<S>,
    box_focused: bool,
}

impl<S: SpeechSynth> Orchestrator<S> {
    pub fn new(narration: NarrationSession<S>) -> Self {
        Self {
            narration,
            box_focused: false,
        }
    }

    pub fn narration(&mut self) -> &mut NarrationSession<S> {
        &mut self.narration
    }

    /// Track whether the text box holds focus; page-wide narration is
    /// suppressed while it does, so composing is never double-read.
    pub fn set_box_focused(&mut self, focused: bool) {
        self.box_focused = focused;
    }

    /// Click or touch inside the text box: pixel position to character
    /// index to point-mode unit. Empty text resolves to the sentinel and
    /// narration stays silent.
    pub fn box_pointer(
        &mut self,
        metrics: &BoxMetrics,
        measure: &dyn TextMeasure,
        text: &str,
        x: f32,
        y: f32,
    ) -> Result<Option<SpeakableUnit>, AssistError> {
        let Some(index) = locate(metrics, measure, text, x, y) else {
            debug!("pointer on empty text box, narration suppressed");
            return Ok(None);
        };
        self.speak_unit(resolve_unit(text, index, ResolveMode::Point))
    }

    /// Arrow-key caret movement: the box already reports the caret index,
    /// so the coordinate locator is skipped.
    pub fn caret_moved(
        &mut self,
        text: &str,
        caret: usize,
    ) -> Result<Option<SpeakableUnit>, AssistError> {
        let clamped = caret.min(text.chars().count());
        self.speak_unit(resolve_unit(text, clamped, ResolveMode::Point))
    }

    /// Caret context window: the containing token plus `n` on each side,
    /// anchored one character behind the caret so the token just typed or
    /// passed is the center.
    pub fn caret_context(
        &mut self,
        text: &str,
        caret: usize,
        n: usize,
    ) -> Result<Option<SpeakableUnit>, AssistError> {
        let anchor = caret.saturating_sub(1);
        self.speak_unit(resolve_unit(text, anchor, ResolveMode::Window(n)))
    }

    /// Click or touch on free page text outside the box. Interactive
    /// targets are left alone, and while the box holds focus page-wide
    /// narration stays off entirely.
    pub fn page_tap(
        &mut self,
        target: &PageTarget,
        anchor: Option<(&str, usize)>,
    ) -> Result<Option<SpeakableUnit>, AssistError> {
        if self.box_focused {
            debug!("text box focused, page narration suppressed");
            return Ok(None);
        }
        if target.is_interactive() {
            return Ok(None);
        }
        let Some((node_text, offset)) = anchor else {
            return Ok(None);
        };
        let chars = node_text.chars().count();
        if chars == 0 {
            return Ok(None);
        }
        let clamped = offset.min(chars - 1);
        self.speak_unit(resolve_unit(node_text, clamped, ResolveMode::Point))
    }

    fn speak_unit(
        &mut self,
        unit: Option<SpeakableUnit>,
    ) -> Result<Option<SpeakableUnit>, AssistError> {
        match unit {
            Some(unit) => {
                self.narration.speak(&unit.text)?;
                Ok(Some(unit))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::AverageWidthMeasure;
    use crate::narrate::session::test_synth::RecordingSynth;

    fn orchestrator(synth: &RecordingSynth) -> Orchestrator<RecordingSynth> {
        Orchestrator::new(NarrationSession::new(synth.clone()))
    }

    fn metrics() -> BoxMetrics {
        BoxMetrics::new(0.0, 0.0, 10.0).with_line_height(10.0)
    }

    #[test]
    fn test_box_pointer_speaks_pointed_word() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        // 6px per narrow char: x=40 is inside "world".
        let unit = orch
            .box_pointer(&metrics(), &AverageWidthMeasure::new(10.0), "Hello world", 40.0, 2.0)
            .unwrap()
            .unwrap();
        assert_eq!(unit.text, "world");
        assert_eq!(synth.spoken(), vec!["speak:world"]);
    }

    #[test]
    fn test_empty_box_suppresses_narration() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch
            .box_pointer(&metrics(), &AverageWidthMeasure::new(10.0), "", 40.0, 2.0)
            .unwrap();
        assert!(unit.is_none());
        assert!(synth.spoken().is_empty());
    }

    #[test]
    fn test_caret_move_skips_locator() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch.caret_moved("Hello world", 7).unwrap().unwrap();
        assert_eq!(unit.text, "world");
    }

    #[test]
    fn test_caret_past_end_is_clamped() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch.caret_moved("Hello world", 500).unwrap().unwrap();
        assert_eq!(unit.text, "world");
    }

    #[test]
    fn test_caret_context_window() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch
            .caret_context("one two three four", 10, 1)
            .unwrap()
            .unwrap();
        assert_eq!(unit.text, "two three four");
    }

    #[test]
    fn test_page_tap_on_plain_text_speaks() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch
            .page_tap(&PageTarget::element("p"), Some(("Welcome home", 2)))
            .unwrap()
            .unwrap();
        assert_eq!(unit.text, "Welcome");
    }

    #[test]
    fn test_page_tap_on_interactive_target_is_ignored() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        for target in [
            PageTarget::element("button"),
            PageTarget::element("input"),
            PageTarget {
                tag: "a".into(),
                has_href: true,
                ..PageTarget::default()
            },
            PageTarget {
                tag: "div".into(),
                content_editable: true,
                ..PageTarget::default()
            },
            PageTarget {
                tag: "p".into(),
                narration_opt_out: true,
                ..PageTarget::default()
            },
        ] {
            let unit = orch.page_tap(&target, Some(("text", 0))).unwrap();
            assert!(unit.is_none(), "target {:?} should be ignored", target.tag);
        }
        assert!(synth.spoken().is_empty());
    }

    #[test]
    fn test_link_without_href_is_narratable() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        let unit = orch
            .page_tap(&PageTarget::element("a"), Some(("anchor text", 0)))
            .unwrap();
        assert!(unit.is_some());
    }

    #[test]
    fn test_focused_box_suppresses_page_narration() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        orch.set_box_focused(true);
        let unit = orch
            .page_tap(&PageTarget::element("p"), Some(("Welcome home", 2)))
            .unwrap();
        assert!(unit.is_none());
        assert!(synth.spoken().is_empty());

        orch.set_box_focused(false);
        let unit = orch
            .page_tap(&PageTarget::element("p"), Some(("Welcome home", 2)))
            .unwrap();
        assert!(unit.is_some());
    }

    #[test]
    fn test_second_interaction_cancels_first_utterance() {
        let synth = RecordingSynth::default();
        let mut orch = orchestrator(&synth);
        orch.caret_moved("Hello world", 1).unwrap();
        orch.caret_moved("Hello world", 7).unwrap();
        assert_eq!(
            synth.spoken(),
            vec!["speak:Hello", "cancel", "speak:world"]
        );
    }
}
