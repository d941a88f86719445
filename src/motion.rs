//! Animation Descriptors
//!
//! Entrance and gesture animations as plain data. A [`Motion`] is an initial
//! pose, a target pose and a transition; the front-end applies it by class
//! name after injecting [`stylesheet`] once. Entrances run once on mount and
//! do not depend on each other.

use serde::Serialize;

use crate::plot::fmt_num;

/// Class and keyframe name prefix
pub const PREFIX: &str = "fl";

/// Visual state at one end of an animation; unset fields are left alone
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

impl Pose {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
        }
    }

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, px: f64) -> Self {
        self.x = Some(px);
        self
    }

    pub const fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub const fn scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }

    /// CSS `transform` value, if the pose moves or scales anything
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(x) = self.x {
            parts.push(format!("translateX({}px)", fmt_num(x)));
        }
        if let Some(y) = self.y {
            parts.push(format!("translateY({}px)", fmt_num(y)));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", fmt_num(scale)));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Declarations for a keyframe block
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("opacity: {}; ", fmt_num(opacity)));
        }
        if let Some(transform) = self.transform() {
            css.push_str(&format!("transform: {}; ", transform));
        }
        css.trim_end().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub name: &'static str,
    pub initial: Pose,
    pub animate: Pose,
    pub transition: Transition,
    /// Extra delay per child index, for containers that stagger children
    pub stagger: Option<f64>,
}

impl Motion {
    pub fn class(&self) -> String {
        format!("{}-{}", PREFIX, self.name)
    }

    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.class(),
            self.initial.css(),
            self.animate.css()
        )
    }

    /// Value for the CSS `animation` shorthand
    pub fn animation(&self) -> String {
        format!(
            "{} {}s {} {}s both",
            self.class(),
            fmt_num(self.transition.duration),
            self.transition.easing.css(),
            fmt_num(self.transition.delay)
        )
    }

    /// Inline `style` attribute
    pub fn style(&self) -> String {
        format!("animation: {};", self.animation())
    }

    /// Same motion starting `seconds` later
    pub fn delayed(mut self, seconds: f64) -> Self {
        self.transition.delay += seconds;
        self
    }

    /// Motion for the `index`-th child of a staggering container
    pub fn staggered(self, index: usize) -> Self {
        let step = self.stagger.unwrap_or(0.0);
        self.delayed(step * index as f64)
    }
}

/// Hover and tap feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gesture {
    pub name: &'static str,
    pub hover_scale: Option<f64>,
    pub tap_scale: Option<f64>,
}

impl Gesture {
    pub fn class(&self) -> String {
        format!("{}-{}", PREFIX, self.name)
    }

    pub fn css(&self) -> String {
        let class = self.class();
        let mut css = format!(".{} {{ transition: transform 0.2s ease-out; }}", class);
        if let Some(scale) = self.hover_scale {
            css.push_str(&format!("\n.{}:hover {{ transform: scale({}); }}", class, fmt_num(scale)));
        }
        if let Some(scale) = self.tap_scale {
            css.push_str(&format!("\n.{}:active {{ transform: scale({}); }}", class, fmt_num(scale)));
        }
        css
    }
}

const HIDDEN: Pose = Pose::new().opacity(0.0);
const SHOWN: Pose = Pose::new().opacity(1.0);

pub const PAGE_FADE: Motion = Motion {
    name: "page-fade",
    initial: HIDDEN,
    animate: SHOWN,
    transition: Transition::new(0.6),
    stagger: Some(0.1),
};

pub const ITEM_RISE: Motion = Motion {
    name: "item-rise",
    initial: HIDDEN.y(20.0),
    animate: SHOWN.y(0.0),
    transition: Transition::new(0.5),
    stagger: Some(0.1),
};

pub const HEADING_DROP: Motion = Motion {
    name: "heading-drop",
    initial: HIDDEN.y(-20.0),
    animate: SHOWN.y(0.0),
    transition: Transition::new(0.6),
    stagger: None,
};

pub const HEADER_SLIDE: Motion = Motion {
    name: "header-slide",
    initial: Pose::new().y(-100.0),
    animate: Pose::new().y(0.0),
    transition: Transition::new(0.6).easing(Easing::EaseOut),
    stagger: None,
};

/// Replayed whenever the active chart changes
pub const CHART_SWAP: Motion = Motion {
    name: "chart-swap",
    initial: HIDDEN.scale(0.95),
    animate: SHOWN.scale(1.0),
    transition: Transition::new(0.4),
    stagger: None,
};

pub const ROADMAP_STEP: Motion = Motion {
    name: "roadmap-step",
    initial: HIDDEN.x(-20.0),
    animate: SHOWN.x(0.0),
    transition: Transition::new(0.5),
    stagger: Some(0.1),
};

pub const FOOTER_RISE: Motion = Motion {
    name: "footer-rise",
    initial: HIDDEN.y(20.0),
    animate: SHOWN.y(0.0),
    transition: Transition::new(0.6),
    stagger: Some(0.1),
};

pub const ENTRANCES: [Motion; 7] = [
    PAGE_FADE,
    ITEM_RISE,
    HEADING_DROP,
    HEADER_SLIDE,
    CHART_SWAP,
    ROADMAP_STEP,
    FOOTER_RISE,
];

pub const CARD_HOVER: Gesture = Gesture {
    name: "card-hover",
    hover_scale: Some(1.02),
    tap_scale: None,
};

pub const BUTTON_PRESS: Gesture = Gesture {
    name: "button-press",
    hover_scale: Some(1.05),
    tap_scale: Some(0.95),
};

pub const ICON_HOVER: Gesture = Gesture {
    name: "icon-hover",
    hover_scale: Some(1.1),
    tap_scale: None,
};

pub const ROW_HOVER: Gesture = Gesture {
    name: "row-hover",
    hover_scale: Some(1.01),
    tap_scale: None,
};

pub const GESTURES: [Gesture; 4] = [CARD_HOVER, BUTTON_PRESS, ICON_HOVER, ROW_HOVER];

/// Roadmap step `index` (0-based) slides in 0.1s after the previous one
pub fn roadmap_step(index: usize) -> Motion {
    ROADMAP_STEP.staggered(index)
}

/// Footer columns rise at 0.1s, 0.2s and 0.3s
pub fn footer_column(index: usize) -> Motion {
    FOOTER_RISE.staggered(index + 1)
}

/// Every keyframe and gesture rule, injected once by the shell
pub fn stylesheet() -> String {
    let mut css = String::new();
    for motion in &ENTRANCES {
        css.push_str(&motion.keyframes());
        css.push('\n');
        css.push_str(&format!(".{} {{ animation: {}; }}\n", motion.class(), motion.animation()));
    }
    for gesture in &GESTURES {
        css.push_str(&gesture.css());
        css.push('\n');
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_css() {
        assert_eq!(ITEM_RISE.initial.css(), "opacity: 0; transform: translateY(20px);");
        assert_eq!(CHART_SWAP.animate.css(), "opacity: 1; transform: scale(1);");
        assert_eq!(Pose::new().css(), "");
        assert_eq!(HEADER_SLIDE.initial.transform().as_deref(), Some("translateY(-100px)"));
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(
            HEADING_DROP.keyframes(),
            "@keyframes fl-heading-drop { from { opacity: 0; transform: translateY(-20px); } to { opacity: 1; transform: translateY(0px); } }"
        );
    }

    #[test]
    fn test_animation_shorthand() {
        assert_eq!(HEADER_SLIDE.animation(), "fl-header-slide 0.6s ease-out 0s both");
        assert_eq!(CHART_SWAP.style(), "animation: fl-chart-swap 0.4s ease-in-out 0s both;");
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(roadmap_step(0).transition.delay, 0.0);
        assert!((roadmap_step(3).transition.delay - 0.3).abs() < 1e-9);
        let footer: Vec<f64> = (0..3).map(|i| footer_column(i).transition.delay).collect();
        for (got, want) in footer.iter().zip([0.1, 0.2, 0.3]) {
            assert!((got - want).abs() < 1e-9);
        }
        // Motions without a stagger ignore the index
        assert_eq!(HEADING_DROP.staggered(5).transition.delay, 0.0);
    }

    #[test]
    fn test_gesture_css() {
        let css = BUTTON_PRESS.css();
        assert!(css.contains(".fl-button-press:hover { transform: scale(1.05); }"));
        assert!(css.contains(".fl-button-press:active { transform: scale(0.95); }"));
        assert!(!CARD_HOVER.css().contains(":active"));
    }

    #[test]
    fn test_stylesheet_covers_catalog() {
        let css = stylesheet();
        for motion in &ENTRANCES {
            assert!(css.contains(&format!("@keyframes {}", motion.class())));
        }
        for gesture in &GESTURES {
            assert!(css.contains(&format!(".{}:hover", gesture.class())));
        }
    }
}
