//! Built-in style flavors.

use std::fmt;

/// Negative prompt carried by every generated prompt as a floor.
pub const NEGATIVE_PROMPT_DEFAULT: &str = "blurry, distorted, low quality, watermark, text, bad anatomy, ugly, pixelated, oversaturated, shaky camera (unless specified)";

/// Instruction fragment describing one flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flavor {
    pub focus: &'static str,
    pub keywords: &'static [&'static str],
}

/// Built-in style flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinStyle {
    Cinematic,
    Product,
    Social,
}

impl BuiltinStyle {
    pub const ALL: [BuiltinStyle; 3] =
        [BuiltinStyle::Cinematic, BuiltinStyle::Product, BuiltinStyle::Social];

    /// Resolve an exact built-in identifier such as `CINEMATIC`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            BuiltinStyle::Cinematic => "CINEMATIC",
            BuiltinStyle::Product => "PRODUCT",
            BuiltinStyle::Social => "SOCIAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuiltinStyle::Cinematic => "Cinematic",
            BuiltinStyle::Product => "Product",
            BuiltinStyle::Social => "Social",
        }
    }

    pub fn flavor(&self) -> Flavor {
        match self {
            BuiltinStyle::Cinematic => Flavor {
                focus: "narrative depth, emotional resonance, and high-end film aesthetics",
                keywords: &[
                    "chiaroscuro",
                    "rembrandt lighting",
                    "volumetric fog",
                    "practical lights",
                    "anamorphic lens",
                    "shallow depth of field",
                    "rack focus",
                    "dolly smooth",
                    "teal and orange",
                    "film grain",
                    "setup -> conflict -> resolution micro-story",
                ],
            },
            BuiltinStyle::Product => Flavor {
                focus: "clarity, desirability, and clean visuals",
                keywords: &[
                    "softbox",
                    "three-point lighting",
                    "studio high-key",
                    "edge lighting",
                    "macro lens",
                    "slow pan",
                    "orbit",
                    "infinite white background",
                    "clean gradient",
                    "premium, sleek, modern",
                ],
            },
            BuiltinStyle::Social => Flavor {
                focus: "engagement, pacing, and immediate impact",
                keywords: &[
                    "trending",
                    "vibrant",
                    "high contrast",
                    "POV",
                    "handheld (stabilized)",
                    "drone fpv",
                    "whip pan",
                    "fast cuts",
                    "loopable",
                    "vertical 9:16 with centered subject",
                ],
            },
        }
    }
}

impl fmt::Display for BuiltinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_matches_exact_identifiers() {
        assert_eq!(BuiltinStyle::from_id("CINEMATIC"), Some(BuiltinStyle::Cinematic));
        assert_eq!(BuiltinStyle::from_id("PRODUCT"), Some(BuiltinStyle::Product));
        assert_eq!(BuiltinStyle::from_id("SOCIAL"), Some(BuiltinStyle::Social));
    }

    #[test]
    fn from_id_rejects_unknown_and_lowercase() {
        assert_eq!(BuiltinStyle::from_id("cinematic"), None);
        assert_eq!(BuiltinStyle::from_id("NOIR"), None);
        assert_eq!(BuiltinStyle::from_id(""), None);
    }

    #[test]
    fn every_flavor_has_focus_and_keywords() {
        for style in BuiltinStyle::ALL {
            let flavor = style.flavor();
            assert!(!flavor.focus.is_empty(), "{} has no focus", style);
            assert!(!flavor.keywords.is_empty(), "{} has no keywords", style);
        }
    }
}
